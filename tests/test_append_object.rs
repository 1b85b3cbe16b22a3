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

use bytes::Bytes;
use objstore::cos::builders::AppendObject;
use objstore::cos::error::ValidationErr;
use objstore::cos::types::{Method, RequestBuilder};
use objstore_common::test_context::TestContext;
use objstore_common::utils::rand_object_name;
use std::collections::HashMap;

fn metadata(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn append_chunks_in_sequence() {
    let ctx = TestContext::new();
    let object = rand_object_name();
    let chunks = ["aaaa", "bbbbbb", "c"];

    let mut position = 0;
    for (i, chunk) in chunks.iter().enumerate() {
        let append = ctx
            .client
            .append_object(
                &ctx.bucket,
                &object,
                metadata(&[("source", "ingest")]),
                Some(Bytes::from(*chunk)),
                position,
                Some("text/plain"),
            )
            .unwrap();
        let prepared = ctx.client.prepare(&append).unwrap();

        assert_eq!(
            prepared.url.to_string(),
            format!(
                "https://{}.cos.ap-guangzhou.myqcloud.com/{object}?append&position={position}",
                ctx.bucket
            )
        );
        assert_eq!(prepared.authorization, Some(format!("COS {}", i + 1)));
        assert_eq!(
            prepared.headers.get("Content-Length"),
            Some(&chunk.len().to_string())
        );
        // Metadata only travels with the chunk creating the object.
        assert_eq!(
            prepared.headers.contains_key("X-COS-META-SOURCE"),
            position == 0
        );

        let body = prepared.request.body().unwrap();
        assert_eq!(body.media_type().essence_str(), "text/plain");
        assert_eq!(body.content(), &Bytes::from(*chunk));

        position = append.next_position().unwrap();
    }
    assert_eq!(position, 11);

    let calls = ctx.signer.calls();
    assert_eq!(calls.len(), chunks.len());
    assert!(calls[0].canonical_form.contains("X-COS-META-SOURCE:ingest\n"));
    assert!(!calls[1].canonical_form.contains("X-COS-META-"));
    assert!(calls[2].canonical_form.starts_with(&format!("POST\n/{object}\nappend&position=10\n")));
}

#[test]
fn append_signer_sees_canonical_request() {
    let ctx = TestContext::new();
    let append = ctx
        .client
        .append_object(&ctx.bucket, " /dir/log.txt ", None, Some(Bytes::from("hi")), 0, None)
        .unwrap();
    let prepared = ctx.client.prepare(&append).unwrap();

    let calls = ctx.signer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].canonical_form, prepared.request.canonical_form());
    assert_eq!(calls[0].url, prepared.url.to_string());
    assert_eq!(
        prepared.request.canonical_form(),
        "POST\n/dir/log.txt\nappend&position=0\nContent-Length:2\napplication/octet-stream\n2"
    );
}

#[test]
fn append_is_deterministic() {
    let ctx = TestContext::new();
    let build = || {
        AppendObject::new(
            &ctx.bucket,
            "x",
            metadata(&[("b", "2"), ("a", "1")]),
            Some(Bytes::from("payload")),
            0,
            Some("application/json"),
        )
        .unwrap()
    };
    let first = build().to_canonical_request();
    let second = build().to_canonical_request();
    assert_eq!(first, second);
    assert_eq!(first.canonical_form(), second.canonical_form());

    let a = ctx.client.prepare(&build()).unwrap();
    let b = ctx.client.prepare(&build()).unwrap();
    assert_eq!(a.url, b.url);
    assert_eq!(a.request, b.request);
}

#[test]
fn append_empty_payload() {
    let ctx = TestContext::new();
    let append = ctx
        .client
        .append_object(&ctx.bucket, "empty", None, Some(Bytes::new()), 5, None)
        .unwrap();
    let request = append.to_canonical_request();
    assert_eq!(request.method(), Method::POST);
    assert_eq!(request.headers().get("Content-Length").map(String::as_str), Some("0"));
    assert_eq!(request.query_params().get("position"), Some("5"));
    assert_eq!(append.next_position(), Some(5));
}

#[test]
fn append_validation_errors() {
    let ctx = TestContext::new();
    let client = &ctx.client;
    let data = || Some(Bytes::from("x"));

    for object in ["", " ", "\t"] {
        let err = client
            .append_object(&ctx.bucket, object, None, data(), 0, None)
            .unwrap_err();
        assert!(matches!(err, ValidationErr::InvalidArgument(ref m) if m == "Invalid object name"));
    }

    let err = client
        .append_object(&ctx.bucket, "obj", None, None, 0, None)
        .unwrap_err();
    assert!(matches!(err, ValidationErr::InvalidArgument(ref m) if m == "Invalid input bytes"));

    let err = client
        .append_object(&ctx.bucket, "obj", None, data(), 0, Some("not a media type"))
        .unwrap_err();
    assert!(matches!(err, ValidationErr::InvalidMediaType(_)));

    let err = client
        .append_object(" ", "obj", None, data(), 0, None)
        .unwrap_err();
    assert!(matches!(err, ValidationErr::InvalidBucketName(_)));
}

#[test]
fn append_accepts_any_non_blank_bucket() {
    let ctx = TestContext::new();
    for bucket in ["MyBucket", "my_bucket", "examplebucket-1250000000"] {
        let append = ctx
            .client
            .append_object(bucket, "obj", None, Some(Bytes::from("x")), 0, None)
            .unwrap();
        assert_eq!(append.bucket(), bucket);
    }
}
