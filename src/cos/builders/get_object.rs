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

use crate::cos::builders::ObjectCommon;
use crate::cos::error::ValidationErr;
use crate::cos::header_constants::RANGE;
use crate::cos::multimap_ext::{HeaderParams, QueryParams};
use crate::cos::types::{Body, Method, RequestBuilder};

#[derive(Clone, Default, Debug)]
pub struct GetObjectPhantomData;

/// Argument builder for the [`GetObject`](https://cloud.tencent.com/document/product/436/7753) API operation.
#[derive(Clone, Debug)]
pub struct GetObject {
    common: ObjectCommon<GetObjectPhantomData>,
    offset: Option<u64>,
    length: Option<u64>,
}

impl GetObject {
    pub fn new(
        bucket: impl Into<String>,
        object: impl Into<String>,
        version_id: Option<String>,
    ) -> Result<Self, ValidationErr> {
        Ok(Self {
            common: ObjectCommon::new(bucket, object, version_id)?,
            offset: None,
            length: None,
        })
    }

    /// Restricts the download to `length` bytes starting at `offset`; without a length the
    /// rest of the object is read.
    pub fn range(mut self, offset: u64, length: Option<u64>) -> Result<Self, ValidationErr> {
        if let Some(l) = length {
            if l == 0 || offset.checked_add(l).is_none() {
                return Err(ValidationErr::InvalidRange { offset, length: l });
            }
        }
        self.offset = Some(offset);
        self.length = length;
        Ok(self)
    }
}

impl RequestBuilder for GetObject {
    fn bucket(&self) -> &str {
        &self.common.bucket
    }

    fn query_params(&self) -> QueryParams {
        self.common.version_query()
    }

    fn header_params(&self) -> HeaderParams {
        let mut headers = HeaderParams::new();
        if let Some(offset) = self.offset {
            let range = match self.length {
                Some(l) => format!("bytes={}-{}", offset, offset + l - 1),
                None => format!("bytes={offset}-"),
            };
            headers.insert(RANGE.into(), range);
        }
        headers
    }

    fn method(&self) -> (Method, Option<Body>) {
        (Method::GET, None)
    }

    fn path(&self) -> String {
        self.common.object_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_object_plain() {
        let go = GetObject::new("bucket", "a/b", None).unwrap();
        assert!(go.query_params().is_empty());
        assert!(go.header_params().is_empty());
        assert_eq!(go.method(), (Method::GET, None));
    }

    #[test]
    fn test_get_object_range_and_version() {
        let go = GetObject::new("bucket", "a/b", Some("v2".into()))
            .unwrap()
            .range(100, Some(50))
            .unwrap();
        assert_eq!(go.header_params()["Range"], "bytes=100-149");
        assert_eq!(go.query_params().to_query_string(), "versionId=v2");

        let go = GetObject::new("bucket", "a/b", None).unwrap().range(10, None).unwrap();
        assert_eq!(go.header_params()["Range"], "bytes=10-");
    }

    #[test]
    fn test_get_object_invalid_range() {
        let go = GetObject::new("bucket", "a/b", None).unwrap();
        assert!(matches!(
            go.clone().range(5, Some(0)),
            Err(ValidationErr::InvalidRange { offset: 5, length: 0 })
        ));
        assert!(matches!(
            go.range(u64::MAX, Some(2)),
            Err(ValidationErr::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_get_object_blank_version() {
        assert!(matches!(
            GetObject::new("bucket", "a/b", Some(" ".into())),
            Err(ValidationErr::InvalidArgument(m)) if m == "Invalid version id"
        ));
    }

    #[test]
    fn test_get_object_matches_head_object_addressing() {
        use crate::cos::builders::HeadObject;

        let go = GetObject::new("bucket", "/a/b/", Some("v3".into())).unwrap();
        let head = HeadObject::new("bucket", "/a/b/", Some("v3".into())).unwrap();
        assert_eq!(go.bucket(), head.bucket());
        assert_eq!(go.path(), head.path());
        assert_eq!(go.query_params(), head.query_params());
    }
}
