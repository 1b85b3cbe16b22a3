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

use crate::recording_signer::RecordingSigner;
use crate::utils::rand_bucket_name;
use objstore::cos::Client;
use objstore::cos::http::BaseUrl;

pub const DEFAULT_ENDPOINT: &str = "https://cos.ap-guangzhou.myqcloud.com";

#[derive(Clone, Debug)]
pub struct TestContext {
    pub client: Client,
    pub signer: RecordingSigner,
    pub base_url: BaseUrl,
    pub bucket: String,
}

impl TestContext {
    /// Context against the Guangzhou endpoint
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Installs the test logger once and creates a signed client for `endpoint`.
    pub fn with_endpoint(endpoint: &str) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let base_url: BaseUrl = endpoint.parse().unwrap();
        let signer = RecordingSigner::new();
        let client = Client::builder(base_url.clone())
            .signer(Some(signer.clone()))
            .build();
        let bucket = rand_bucket_name();
        log::debug!("test context for {endpoint} using bucket {bucket}");

        Self {
            client,
            signer,
            base_url,
            bucket,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
