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
use crate::cos::header_constants::{APPEND, CONTENT_LENGTH, POSITION};
use crate::cos::multimap_ext::{HeaderParams, QueryParams};
use crate::cos::types::{Body, Method, RequestBuilder};
use crate::cos::utils::{
    canonical_object_path, check_bucket_name, check_object_name, insert_metadata_headers,
    parse_content_type,
};
use bytes::Bytes;
use mime::Mime;
use std::collections::{BTreeMap, HashMap};

/// Argument builder for the [`AppendObject`](https://cloud.tencent.com/document/product/436/7741) API operation.
///
/// Appends `data` to `object` at byte offset `position`. The chunk at position `0` creates the
/// object, and only that chunk may carry user metadata: for any later position the metadata
/// is dropped.
#[derive(Clone, Debug)]
pub struct AppendObject {
    bucket: String,
    object: String,
    metadata: BTreeMap<String, String>,
    data: Bytes,
    position: u64,
    media_type: Mime,
}

impl AppendObject {
    /// Validates the inputs and creates the builder.
    ///
    /// # Errors
    ///
    /// * [`ValidationErr::InvalidBucketName`] for a blank bucket
    /// * [`ValidationErr::InvalidArgument`] for a blank object name or a missing payload
    /// * [`ValidationErr::InvalidMediaType`] when `content_type` cannot be parsed
    pub fn new(
        bucket: impl Into<String>,
        object: impl Into<String>,
        metadata: Option<HashMap<String, String>>,
        data: Option<Bytes>,
        position: u64,
        content_type: Option<&str>,
    ) -> Result<Self, ValidationErr> {
        let bucket = bucket.into();
        let object = object.into();
        check_bucket_name(&bucket)?;
        check_object_name(&object)?;
        let data = data.ok_or_else(|| ValidationErr::InvalidArgument("Invalid input bytes".into()))?;
        let media_type = parse_content_type(content_type)?;

        let metadata: BTreeMap<String, String> = match metadata {
            Some(m) if position == 0 => m.into_iter().collect(),
            Some(m) => {
                if !m.is_empty() {
                    log::debug!(
                        "dropping {} metadata entries for {bucket}/{object}: position {position} is not 0",
                        m.len()
                    );
                }
                BTreeMap::new()
            }
            None => BTreeMap::new(),
        };

        Ok(Self {
            bucket,
            object,
            metadata,
            data,
            position,
            media_type,
        })
    }

    pub fn object(&self) -> &str {
        &self.object
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    /// Offset the next chunk has to be appended at once this one succeeds, or `None` when it
    /// does not fit in a `u64`
    pub fn next_position(&self) -> Option<u64> {
        self.position.checked_add(self.data.len() as u64)
    }
}

impl RequestBuilder for AppendObject {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn query_params(&self) -> QueryParams {
        let mut query_params = QueryParams::new();
        query_params.add(APPEND, "");
        query_params.add(POSITION, self.position.to_string());
        query_params
    }

    fn header_params(&self) -> HeaderParams {
        let mut headers = HeaderParams::new();
        insert_metadata_headers(&mut headers, &self.metadata);
        headers.insert(CONTENT_LENGTH.into(), self.data.len().to_string());
        headers
    }

    fn method(&self) -> (Method, Option<Body>) {
        (
            Method::POST,
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
    use quickcheck::TestResult;

    const BUCKET: &str = "examplebucket-1250000000";

    fn meta(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_query_params_fixed_order() {
        let ao = AppendObject::new(BUCKET, "obj", None, Some(Bytes::from("x")), 7, None).unwrap();
        let query_params = ao.query_params();
        let pairs: Vec<(&str, &str)> = query_params.iter().collect();
        assert_eq!(pairs, vec![("append", ""), ("position", "7")]);
    }

    #[test]
    fn test_metadata_on_first_chunk() {
        let ao = AppendObject::new(
            BUCKET,
            "obj",
            meta(&[("author", "ci"), ("Build-Id", "42")]),
            Some(Bytes::from("abc")),
            0,
            None,
        )
        .unwrap();
        let headers = ao.header_params();
        assert_eq!(headers.get("X-COS-META-AUTHOR").map(String::as_str), Some("ci"));
        assert_eq!(headers.get("X-COS-META-BUILD-ID").map(String::as_str), Some("42"));
        assert_eq!(headers.get("Content-Length").map(String::as_str), Some("3"));
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn test_metadata_dropped_after_first_chunk() {
        let ao = AppendObject::new(
            BUCKET,
            "obj",
            meta(&[("author", "ci")]),
            Some(Bytes::from("abc")),
            3,
            None,
        )
        .unwrap();
        let headers = ao.header_params();
        assert!(!headers.keys().any(|k| k.starts_with("X-COS-META-")));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_empty_payload_has_zero_content_length() {
        let ao = AppendObject::new(BUCKET, "obj", None, Some(Bytes::new()), 0, None).unwrap();
        assert_eq!(
            ao.header_params().get("Content-Length").map(String::as_str),
            Some("0")
        );
        let (method, body) = ao.method();
        assert_eq!(method, Method::POST);
        assert!(body.unwrap().is_empty());
    }

    #[test]
    fn test_blank_object_name() {
        for name in ["", " ", "   "] {
            let r = AppendObject::new(BUCKET, name, None, Some(Bytes::new()), 0, None);
            assert!(matches!(r, Err(ValidationErr::InvalidArgument(m)) if m == "Invalid object name"));
        }
    }

    #[test]
    fn test_missing_payload() {
        let r = AppendObject::new(BUCKET, "obj", None, None, 0, None);
        assert!(matches!(r, Err(ValidationErr::InvalidArgument(m)) if m == "Invalid input bytes"));
    }

    #[test]
    fn test_object_name_checked_before_payload() {
        let r = AppendObject::new(BUCKET, " ", None, None, 0, None);
        assert!(matches!(r, Err(ValidationErr::InvalidArgument(m)) if m == "Invalid object name"));
    }

    #[test]
    fn test_content_type() {
        let ao = AppendObject::new(BUCKET, "obj", None, Some(Bytes::new()), 0, Some(" ")).unwrap();
        assert_eq!(ao.method().1.unwrap().media_type(), &mime::APPLICATION_OCTET_STREAM);

        let ao = AppendObject::new(
            BUCKET,
            "obj",
            None,
            Some(Bytes::new()),
            0,
            Some("application/json; charset=utf-8"),
        )
        .unwrap();
        assert_eq!(
            ao.method().1.unwrap().media_type().to_string(),
            "application/json; charset=utf-8"
        );

        let r = AppendObject::new(BUCKET, "obj", None, Some(Bytes::new()), 0, Some("json"));
        assert!(matches!(r, Err(ValidationErr::InvalidMediaType(_))));
    }

    #[test]
    fn test_path_is_stripped() {
        let ao = AppendObject::new(BUCKET, " /foo/bar ", None, Some(Bytes::new()), 0, None).unwrap();
        assert_eq!(ao.path(), "/foo/bar");
        assert_eq!(ao.object(), " /foo/bar ");
    }

    #[test]
    fn test_next_position() {
        let ao = AppendObject::new(BUCKET, "obj", None, Some(Bytes::from("12345")), 10, None).unwrap();
        assert_eq!(ao.position(), 10);
        assert_eq!(ao.next_position(), Some(15));
    }

    #[test]
    fn test_next_position_overflow() {
        let ao = AppendObject::new(BUCKET, "obj", None, Some(Bytes::from("x")), u64::MAX, None).unwrap();
        assert_eq!(ao.next_position(), None);
        assert_eq!(ao.query_params().get("position"), Some("18446744073709551615"));

        let ao = AppendObject::new(BUCKET, "obj", None, Some(Bytes::new()), u64::MAX, None).unwrap();
        assert_eq!(ao.next_position(), Some(u64::MAX));
    }

    #[test]
    fn test_case_colliding_metadata_keys() {
        let ao = AppendObject::new(
            BUCKET,
            "obj",
            meta(&[("a", "1"), ("A", "2")]),
            Some(Bytes::from("x")),
            0,
            None,
        )
        .unwrap();
        let headers = ao.header_params();
        assert_eq!(headers.get("X-COS-META-A").map(String::as_str), Some("1"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_bucket_only_needs_to_be_non_blank() {
        let ao = AppendObject::new("MyBucket", "obj", None, Some(Bytes::from("x")), 0, None).unwrap();
        assert_eq!(ao.bucket(), "MyBucket");
        assert!(matches!(
            AppendObject::new("", "obj", None, Some(Bytes::from("x")), 0, None),
            Err(ValidationErr::InvalidBucketName(_))
        ));
    }

    quickcheck! {
        fn prop_query_params_follow_position(position: u64, data: Vec<u8>) -> bool {
            let ao = AppendObject::new(BUCKET, "obj", None, Some(Bytes::from(data)), position, None).unwrap();
            let pairs: Vec<(String, String)> = ao
                .query_params()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            pairs == vec![
                ("append".to_string(), String::new()),
                ("position".to_string(), position.to_string()),
            ]
        }

        fn prop_content_length_matches_payload(data: Vec<u8>, position: u64) -> bool {
            let len = data.len();
            let ao = AppendObject::new(BUCKET, "obj", None, Some(Bytes::from(data)), position, None).unwrap();
            ao.header_params().get("Content-Length") == Some(&len.to_string())
        }

        fn prop_canonical_request_is_deterministic(
            object: String,
            metadata: HashMap<String, String>,
            data: Vec<u8>,
            position: u64
        ) -> TestResult {
            if object.trim().is_empty() {
                return TestResult::discard();
            }
            let build = || {
                AppendObject::new(
                    BUCKET,
                    object.clone(),
                    Some(metadata.clone()),
                    Some(Bytes::from(data.clone())),
                    position,
                    None,
                )
                .unwrap()
                .to_canonical_request()
            };
            let (a, b) = (build(), build());
            TestResult::from_bool(a == b && a.canonical_form() == b.canonical_form())
        }
    }
}
