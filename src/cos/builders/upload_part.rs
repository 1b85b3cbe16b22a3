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
use crate::cos::header_constants::{CONTENT_LENGTH, CONTENT_MD5, PART_NUMBER, UPLOAD_ID};
use crate::cos::multimap_ext::{HeaderParams, QueryParams};
use crate::cos::types::{Body, Method, RequestBuilder};
use crate::cos::utils::{
    MAX_MULTIPART_COUNT, canonical_object_path, check_bucket_name, check_object_name,
    check_upload_id, md5sum_hash,
};
use bytes::Bytes;

/// Argument builder for the [`UploadPart`](https://cloud.tencent.com/document/product/436/7750) API operation.
#[derive(Clone, Debug)]
pub struct UploadPart {
    bucket: String,
    object: String,
    upload_id: String,
    part_number: u16,
    data: Bytes,
    content_md5: String,
}

impl UploadPart {
    pub fn new(
        bucket: impl Into<String>,
        object: impl Into<String>,
        upload_id: impl Into<String>,
        part_number: u16,
        data: Option<Bytes>,
    ) -> Result<Self, ValidationErr> {
        let bucket = bucket.into();
        let object = object.into();
        let upload_id = upload_id.into();
        check_bucket_name(&bucket)?;
        check_object_name(&object)?;
        check_upload_id(&upload_id)?;

        if !(1..=MAX_MULTIPART_COUNT).contains(&part_number) {
            return Err(ValidationErr::InvalidPartNumber(part_number));
        }

        let data = data.ok_or_else(|| ValidationErr::InvalidArgument("Invalid input bytes".into()))?;
        let content_md5 = md5sum_hash(&data);

        Ok(Self {
            bucket,
            object,
            upload_id,
            part_number,
            data,
            content_md5,
        })
    }
}

impl RequestBuilder for UploadPart {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn query_params(&self) -> QueryParams {
        let mut query_params = QueryParams::new();
        query_params.add(PART_NUMBER, self.part_number.to_string());
        query_params.add(UPLOAD_ID, self.upload_id.clone());
        query_params
    }

    fn header_params(&self) -> HeaderParams {
        let mut headers = HeaderParams::new();
        headers.insert(CONTENT_LENGTH.into(), self.data.len().to_string());
        headers.insert(CONTENT_MD5.into(), self.content_md5.clone());
        headers
    }

    fn method(&self) -> (Method, Option<Body>) {
        (
            Method::PUT,
            Some(Body::new(self.data.clone(), mime::APPLICATION_OCTET_STREAM)),
        )
    }

    fn path(&self) -> String {
        canonical_object_path(&self.object)
    }
}
