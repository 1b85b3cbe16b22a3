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
use crate::cos::multimap_ext::{HeaderParams, QueryParams};
use crate::cos::types::{Body, Method, RequestBuilder};

/// Argument builder for the [`DeleteObject`](https://cloud.tencent.com/document/product/436/7743) API operation.
pub type DeleteObject = ObjectCommon<DeleteObjectPhantomData>;

#[derive(Clone, Default, Debug)]
pub struct DeleteObjectPhantomData;

impl RequestBuilder for DeleteObject {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn query_params(&self) -> QueryParams {
        self.version_query()
    }

    fn header_params(&self) -> HeaderParams {
        HeaderParams::new()
    }

    fn method(&self) -> (Method, Option<Body>) {
        (Method::DELETE, None)
    }

    fn path(&self) -> String {
        self.object_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cos::builders::HeadObject;

    #[test]
    fn test_delete_and_head_share_shape() {
        let del = DeleteObject::new("bucket", "/x/", Some("v1".into())).unwrap();
        let head = HeadObject::new("bucket", "/x/", Some("v1".into())).unwrap();

        assert_eq!(del.method().0, Method::DELETE);
        assert_eq!(head.method().0, Method::HEAD);
        assert_eq!(del.path(), "/x");
        assert_eq!(del.path(), head.path());
        assert_eq!(del.query_params(), head.query_params());
        assert!(del.method().1.is_none());
        assert!(head.header_params().is_empty());
    }
}
