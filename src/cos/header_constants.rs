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

pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_MD5: &str = "Content-MD5";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const RANGE: &str = "Range";
pub const HOST: &str = "Host";

/// Prefix of user metadata headers; the key is appended upper-cased.
pub const X_COS_META_PREFIX: &str = "X-COS-META-";

pub const APPEND: &str = "append";
pub const POSITION: &str = "position";
pub const VERSION_ID: &str = "versionId";
pub const UPLOADS: &str = "uploads";
pub const UPLOAD_ID: &str = "uploadId";
pub const PART_NUMBER: &str = "partNumber";
