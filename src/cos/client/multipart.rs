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

// ! COS APIs for multipart uploads.

use super::Client;
use crate::cos::builders::{AbortMultipartUpload, InitiateMultipartUpload, UploadPart};
use crate::cos::error::ValidationErr;
use bytes::Bytes;
use std::collections::HashMap;

impl Client {
    /// Creates an [`InitiateMultipartUpload`] request builder. Metadata and content type of the
    /// final object are declared here.
    pub fn initiate_multipart_upload(
        &self,
        bucket: &str,
        object: &str,
        metadata: Option<HashMap<String, String>>,
        content_type: Option<&str>,
    ) -> Result<InitiateMultipartUpload, ValidationErr> {
        InitiateMultipartUpload::new(bucket, object, metadata, content_type)
    }

    /// Creates an [`UploadPart`] request builder. `part_number` must be in `1..=10000`.
    pub fn upload_part(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
        part_number: u16,
        data: Option<Bytes>,
    ) -> Result<UploadPart, ValidationErr> {
        UploadPart::new(bucket, object, upload_id, part_number, data)
    }

    pub fn abort_multipart_upload(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
    ) -> Result<AbortMultipartUpload, ValidationErr> {
        AbortMultipartUpload::new(bucket, object, upload_id)
    }
}
