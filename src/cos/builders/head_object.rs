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

/// Argument builder for the [`HeadObject`](https://cloud.tencent.com/document/product/436/7745) API operation.
pub type HeadObject = ObjectCommon<HeadObjectPhantomData>;

#[derive(Clone, Default, Debug)]
pub struct HeadObjectPhantomData;

impl RequestBuilder for HeadObject {
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
        (Method::HEAD, None)
    }

    fn path(&self) -> String {
        self.object_path()
    }
}
