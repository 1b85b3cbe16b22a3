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
use crate::cos::header_constants::{CONTENT_TYPE, UPLOADS};
use crate::cos::multimap_ext::{HeaderParams, QueryParams};
use crate::cos::types::{Body, Method, RequestBuilder};
use crate::cos::utils::{
    canonical_object_path, check_bucket_name, check_object_name, insert_metadata_headers, is_blank,
};
use mime::Mime;
use std::collections::{BTreeMap, HashMap};

/// Argument builder for the [`InitiateMultipartUpload`](https://cloud.tencent.com/document/product/436/7746) API operation.
///
/// Metadata and the content type of the final object are declared here, since the parts
/// uploaded later carry neither.
#[derive(Clone, Debug)]
pub struct InitiateMultipartUpload {
    bucket: String,
    object: String,
    metadata: BTreeMap<String, String>,
    content_type: Option<Mime>,
}

impl InitiateMultipartUpload {
    pub fn new(
        bucket: impl Into<String>,
        object: impl Into<String>,
        metadata: Option<HashMap<String, String>>,
        content_type: Option<&str>,
    ) -> Result<Self, ValidationErr> {
        let bucket = bucket.into();
        let object = object.into();
        check_bucket_name(&bucket)?;
        check_object_name(&object)?;
        let content_type = match content_type {
            Some(ct) if !is_blank(ct) => Some(ct.parse::<Mime>()?),
            _ => None,
        };

        Ok(Self {
            bucket,
            object,
            metadata: metadata.unwrap_or_default().into_iter().collect(),
            content_type,
        })
    }
}

impl RequestBuilder for InitiateMultipartUpload {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn query_params(&self) -> QueryParams {
        let mut query_params = QueryParams::new();
        query_params.add(UPLOADS, "");
        query_params
    }

    fn header_params(&self) -> HeaderParams {
        let mut headers = HeaderParams::new();
        insert_metadata_headers(&mut headers, &self.metadata);
        if let Some(ct) = &self.content_type {
            headers.insert(CONTENT_TYPE.into(), ct.to_string());
        }
        headers
    }

    fn method(&self) -> (Method, Option<Body>) {
        (Method::POST, None)
    }

    fn path(&self) -> String {
        canonical_object_path(&self.object)
    }
}
