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

use objstore::cos::error::Error;
use objstore::cos::http::Url;
use objstore::cos::signer::Signer;
use objstore::cos::types::CanonicalRequest;
use std::sync::{Arc, Mutex};

/// One call observed by a [`RecordingSigner`]
#[derive(Clone, Debug)]
pub struct SignedCall {
    pub canonical_form: String,
    pub url: String,
}

/// Signer producing `COS <n>` for the n-th call and remembering what it was asked to sign.
///
/// Clones share the same log, so a test keeps one handle and moves another into the client.
#[derive(Clone, Debug, Default)]
pub struct RecordingSigner {
    calls: Arc<Mutex<Vec<SignedCall>>>,
}

impl RecordingSigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SignedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Signer for RecordingSigner {
    fn authorization(&self, request: &CanonicalRequest, url: &Url) -> Result<String, Error> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(SignedCall {
            canonical_form: request.canonical_form(),
            url: url.to_string(),
        });
        Ok(format!("COS {}", calls.len()))
    }
}
