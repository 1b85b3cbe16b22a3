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
use crate::cos::header_constants::{CONTENT_LENGTH, CONTENT_MD5};
use crate::cos::multimap_ext::{HeaderParams, QueryParams};
use crate::cos::types::{Body, Method, RequestBuilder};
use crate::cos::utils::{
    canonical_object_path, check_bucket_name, check_object_name, insert_metadata_headers,
    md5sum_hash, parse_content_type,
};
use bytes::Bytes;
use mime::Mime;
use std::collections::{BTreeMap, HashMap};

/// Argument builder for the [`PutObject`](https://cloud.tencent.com/document/product/436/7749) API operation.
///
/// Uploads `data` as the whole content of `object`, replacing any previous version.
#[derive(Clone, Debug)]
pub struct PutObject {
    bucket: String,
    object: String,
    metadata: BTreeMap<String, String>,
    data: Bytes,
    media_type: Mime,
    content_md5: String,
}

impl PutObject {
    pub fn new(
        bucket: impl Into<String>,
        object: impl Into<String>,
        metadata: Option<HashMap<String, String>>,
        data: Option<Bytes>,
        content_type: Option<&str>,
    ) -> Result<Self, ValidationErr> {
        let bucket = bucket.into();
        let object = object.into();
        check_bucket_name(&bucket)?;
        check_object_name(&object)?;
        let data = data.ok_or_else(|| ValidationErr::InvalidArgument("Invalid input bytes".into()))?;
        let media_type = parse_content_type(content_type)?;
        let content_md5 = md5sum_hash(&data);

        Ok(Self {
            bucket,
            object,
            metadata: metadata.unwrap_or_default().into_iter().collect(),
            data,
            media_type,
            content_md5,
        })
    }
}

impl RequestBuilder for PutObject {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new()
    }

    fn header_params(&self) -> HeaderParams {
        let mut headers = HeaderParams::new();
        insert_metadata_headers(&mut headers, &self.metadata);
        headers.insert(CONTENT_LENGTH.into(), self.data.len().to_string());
        headers.insert(CONTENT_MD5.into(), self.content_md5.clone());
        headers
    }

    fn method(&self) -> (Method, Option<Body>) {
        (
            Method::PUT,
            Some(Body::new(self.data.clone(), self.media_type.clone())),
        )
    }

    fn path(&self) -> String {
        canonical_object_path(&self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_object_headers() {
        let metadata = HashMap::from([("owner".to_string(), "team-a".to_string())]);
        let po = PutObject::new(
            "examplebucket-1250000000",
            "/dir/file.txt",
            Some(metadata),
            Some(Bytes::from("hello")),
            Some("text/plain"),
        )
        .unwrap();

        let headers = po.header_params();
        assert_eq!(headers["X-COS-META-OWNER"], "team-a");
        assert_eq!(headers["Content-Length"], "5");
        assert_eq!(headers["Content-MD5"], "XUFAKrxLKna5cZ2REBfFkg==");
        assert!(po.query_params().is_empty());
        assert_eq!(po.path(), "/dir/file.txt");

        let (method, body) = po.method();
        assert_eq!(method, Method::PUT);
        assert_eq!(body.unwrap().media_type(), &mime::TEXT_PLAIN);
    }

    #[test]
    fn test_put_object_requires_payload() {
        assert!(matches!(
            PutObject::new("bucket", "obj", None, None, None),
            Err(ValidationErr::InvalidArgument(m)) if m == "Invalid input bytes"
        ));
    }
}
