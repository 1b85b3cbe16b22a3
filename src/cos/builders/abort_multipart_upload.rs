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

use crate::cos::error::ValidationErr;
use crate::cos::header_constants::UPLOAD_ID;
use crate::cos::multimap_ext::{HeaderParams, QueryParams};
use crate::cos::types::{Body, Method, RequestBuilder};
use crate::cos::utils::{canonical_object_path, check_bucket_name, check_object_name, check_upload_id};

/// Argument builder for the [`AbortMultipartUpload`](https://cloud.tencent.com/document/product/436/7740) API operation.
#[derive(Clone, Debug)]
pub struct AbortMultipartUpload {
    bucket: String,
    object: String,
    upload_id: String,
}

impl AbortMultipartUpload {
    pub fn new(
        bucket: impl Into<String>,
        object: impl Into<String>,
        upload_id: impl Into<String>,
    ) -> Result<Self, ValidationErr> {
        let bucket = bucket.into();
        let object = object.into();
        let upload_id = upload_id.into();
        check_bucket_name(&bucket)?;
        check_object_name(&object)?;
        check_upload_id(&upload_id)?;

        Ok(Self {
            bucket,
            object,
            upload_id,
        })
    }
}

impl RequestBuilder for AbortMultipartUpload {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn query_params(&self) -> QueryParams {
        let mut query_params = QueryParams::new();
        query_params.add(UPLOAD_ID, self.upload_id.clone());
        query_params
    }

    fn header_params(&self) -> HeaderParams {
        HeaderParams::new()
    }

    fn method(&self) -> (Method, Option<Body>) {
        (Method::DELETE, None)
    }

    fn path(&self) -> String {
        canonical_object_path(&self.object)
    }
}
