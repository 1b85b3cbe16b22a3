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

// ! COS APIs for appending objects.

use super::Client;
use crate::cos::builders::AppendObject;
use crate::cos::error::ValidationErr;
use bytes::Bytes;
use std::collections::HashMap;

impl Client {
    /// Creates an [`AppendObject`] request builder to append `data` to `object` at byte offset
    /// `position`.
    ///
    /// `metadata` is only sent with the chunk at position `0`; `content_type` defaults to
    /// `application/octet-stream`.
    pub fn append_object(
        &self,
        bucket: &str,
        object: &str,
        metadata: Option<HashMap<String, String>>,
        data: Option<Bytes>,
        position: u64,
        content_type: Option<&str>,
    ) -> Result<AppendObject, ValidationErr> {
        AppendObject::new(bucket, object, metadata, data, position, content_type)
    }
}
