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

use super::Method;
use crate::cos::multimap_ext::{HeaderParams, QueryParams};
use bytes::Bytes;
use mime::Mime;
use typed_builder::TypedBuilder;

/// Payload of a request together with its declared media type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Body {
    content: Bytes,
    media_type: Mime,
}

impl Body {
    pub fn new(content: Bytes, media_type: Mime) -> Self {
        Self {
            content,
            media_type,
        }
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn media_type(&self) -> &Mime {
        &self.media_type
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A fully resolved description of one HTTP exchange, ready for signing.
///
/// Instances are produced by [`RequestBuilder::to_canonical_request`](super::RequestBuilder::to_canonical_request)
/// and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
#[builder(
    builder_method(vis = "pub(crate)"),
    builder_type(vis = "pub(crate)"),
    build_method(vis = "pub(crate)")
)]
pub struct CanonicalRequest {
    #[builder(!default)] // force required
    method: Method,

    #[builder(setter(into))]
    bucket: String,

    #[builder(setter(into))]
    path: String,

    #[builder(default)]
    query_params: QueryParams,

    #[builder(default)]
    headers: HeaderParams,

    #[builder(default)]
    body: Option<Body>,
}

impl CanonicalRequest {
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_params(&self) -> &QueryParams {
        &self.query_params
    }

    pub fn headers(&self) -> &HeaderParams {
        &self.headers
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Renders the request as deterministic text:
    ///
    /// ```text
    /// METHOD
    /// /path
    /// query string in insertion order
    /// header-name:value        (one line per header, sorted by name)
    /// media type               (empty without body)
    /// body length              (empty without body)
    /// ```
    ///
    /// Two requests built from the same inputs render byte-identical strings.
    pub fn canonical_form(&self) -> String {
        let mut out = String::new();
        out.push_str(self.method.as_str());
        out.push('\n');
        out.push_str(&self.path);
        out.push('\n');
        out.push_str(&self.query_params.to_query_string());
        out.push('\n');
        for (k, v) in &self.headers {
            out.push_str(&format!("{k}:{v}\n"));
        }
        match &self.body {
            Some(body) => out.push_str(&format!("{}\n{}", body.media_type(), body.len())),
            None => out.push('\n'),
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CanonicalRequest {
        let mut headers = HeaderParams::new();
        headers.insert("X-COS-META-B".into(), "2".into());
        headers.insert("Content-Length".into(), "3".into());
        headers.insert("X-COS-META-A".into(), "1".into());
        CanonicalRequest::builder()
            .method(Method::POST)
            .bucket("examplebucket-1250000000")
            .path("/obj")
            .query_params([("append", ""), ("position", "0")].into_iter().collect())
            .headers(headers)
            .body(Some(Body::new(Bytes::from_static(b"abc"), mime::TEXT_PLAIN)))
            .build()
    }

    #[test]
    fn test_canonical_form_layout() {
        assert_eq!(
            sample().canonical_form(),
            "POST\n/obj\nappend&position=0\nContent-Length:3\nX-COS-META-A:1\nX-COS-META-B:2\ntext/plain\n3"
        );
    }

    #[test]
    fn test_canonical_form_without_body() {
        let req = CanonicalRequest::builder()
            .method(Method::HEAD)
            .bucket("b")
            .path("/o")
            .build();
        assert_eq!(req.canonical_form(), "HEAD\n/o\n\n\n");
        assert!(req.body().is_none());
        assert!(req.headers().is_empty());
    }

    #[test]
    fn test_accessors() {
        let req = sample();
        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.bucket(), "examplebucket-1250000000");
        assert_eq!(req.path(), "/obj");
        assert_eq!(req.query_params().get("position"), Some("0"));
        let body = req.body().unwrap();
        assert_eq!(body.content().as_ref(), b"abc");
        assert_eq!(body.media_type(), &mime::TEXT_PLAIN);
        assert_eq!(req, sample());
    }
}
