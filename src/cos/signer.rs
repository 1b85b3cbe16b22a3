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

//! Signing seam for prepared requests

use crate::cos::error::Error;
use crate::cos::http::Url;
use crate::cos::types::CanonicalRequest;

/// Computes the `Authorization` header value for a request.
///
/// The canonical request handed to a signer is immutable, so an implementation may read it as
/// often as it needs. Signature algorithms (COS `q-sign-algorithm=sha1`, AWS SigV4, ...) live
/// outside this crate.
pub trait Signer: std::fmt::Debug {
    fn authorization(&self, request: &CanonicalRequest, url: &Url) -> Result<String, Error>;
}
