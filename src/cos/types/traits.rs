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

use super::{Body, CanonicalRequest, Method};
use crate::cos::multimap_ext::{HeaderParams, QueryParams};

/// Contract shared by every storage operation builder.
///
/// Implementations validate their inputs in their constructor, so every accessor here is a
/// pure function of immutable state: a signer may call them repeatedly (once to log the
/// canonical form, once to sign it) and always sees the same result.
pub trait RequestBuilder {
    /// Bucket the operation targets.
    fn bucket(&self) -> &str;

    /// Query parameters in the exact order the signing algorithm consumes them.
    fn query_params(&self) -> QueryParams;

    /// Header name/value pairs, including vendor metadata headers and `Content-Length`
    /// where a payload is sent.
    fn header_params(&self) -> HeaderParams;

    /// HTTP verb plus the payload to send; `None` for read operations.
    fn method(&self) -> (Method, Option<Body>);

    /// Canonical resource path, always starting with a single `/`.
    fn path(&self) -> String;

    /// Assembles the [`CanonicalRequest`] for this operation.
    fn to_canonical_request(&self) -> CanonicalRequest {
        let (method, body) = self.method();
        CanonicalRequest::builder()
            .method(method)
            .bucket(self.bucket())
            .path(self.path())
            .query_params(self.query_params())
            .headers(self.header_params())
            .body(body)
            .build()
    }
}
