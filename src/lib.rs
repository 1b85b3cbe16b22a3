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

//! # objstore
//!
//! Canonical request construction for Tencent COS and other S3-compatible object storage.
//!
//! Each supported storage operation has a request builder (e.g., [`cos::builders::AppendObject`],
//! [`cos::builders::PutObject`], [`cos::builders::GetObject`]). Builders validate their inputs when
//! they are constructed and implement the [`cos::types::RequestBuilder`] trait, which exposes the
//! method, canonical path, ordered query parameters, headers and body of the operation.
//!
//! The produced [`cos::types::CanonicalRequest`] is exactly what a signer computes its signature
//! over. Signing and transport are pluggable: implement [`cos::signer::Signer`] and hand the
//! [`cos::client::PreparedRequest`] to any HTTP client.
//!
//! ## Basic Usage
//!
//! ```
//! use bytes::Bytes;
//! use objstore::cos::Client;
//! use objstore::cos::types::RequestBuilder;
//!
//! let client = Client::builder("https://cos.ap-guangzhou.myqcloud.com".parse().unwrap())
//!     .build();
//!
//! let append = client
//!     .append_object("examplebucket-1250000000", "logs/app.log", None, Some(Bytes::from("hello")), 0, None)
//!     .unwrap();
//!
//! let prepared = client.prepare(&append).unwrap();
//! assert_eq!(
//!     prepared.url.to_string(),
//!     "https://examplebucket-1250000000.cos.ap-guangzhou.myqcloud.com/logs/app.log?append&position=0"
//! );
//! assert_eq!(append.path(), "/logs/app.log");
//! ```
//!
//! ## Design
//! - Each API method on [`cos::Client`] returns a validated builder struct
//! - Builders implement [`cos::types::RequestBuilder`] for request conversion
//! - [`cos::Client::prepare`] resolves the URL and calls the configured signer

pub mod cos;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
