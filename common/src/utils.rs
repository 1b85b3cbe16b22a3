// objstore: request construction for S3 compatible object storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use uuid::Uuid;

/// Bucket name in the `<name>-<appid>` form COS uses
pub fn rand_bucket_name() -> String {
    format!("test-{}-1250000000", &Uuid::new_v4().simple().to_string()[..8])
}

pub fn rand_object_name() -> String {
    format!("obj-{}", Uuid::new_v4().simple())
}
