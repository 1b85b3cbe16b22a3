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

//! COS client to prepare canonical, signed requests

use std::fmt;
use std::sync::Arc;

use crate::cos::error::{Error, ValidationErr};
use crate::cos::header_constants::{AUTHORIZATION, HOST};
use crate::cos::http::{BaseUrl, Url};
use crate::cos::multimap_ext::HeaderParams;
use crate::cos::signer::Signer;
use crate::cos::types::{CanonicalRequest, RequestBuilder};

mod append_object;
mod delete_object;
mod get_object;
mod head_object;
mod multipart;
mod put_object;

/// Environment variable holding the service endpoint, e.g. `https://cos.ap-guangzhou.myqcloud.com`
pub const ENV_ENDPOINT: &str = "COS_ENDPOINT";
/// Environment variable selecting path-style addressing (`true` or `false`)
pub const ENV_PATH_STYLE: &str = "COS_PATH_STYLE";

/// Builder for [`Client`]
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: BaseUrl,
    /// Set the signer. If not set, requests are prepared without `Authorization`.
    signer: Option<Arc<dyn Signer + Send + Sync + 'static>>,
}

impl ClientBuilder {
    /// Creates a builder given a base URL of the COS service or other S3 compatible
    /// object storage service.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            signer: None,
        }
    }

    /// Set the signer. If not set, anonymous requests are prepared.
    pub fn signer<S: Signer + Send + Sync + 'static>(mut self, signer: Option<S>) -> Self {
        self.signer = signer.map(|s| Arc::new(s) as Arc<dyn Signer + Send + Sync + 'static>);
        self
    }

    /// Force path-style (`true`) or virtual-hosted style (`false`) addressing.
    pub fn path_style(mut self, path_style: bool) -> Self {
        self.base_url.virtual_style = !path_style;
        self
    }

    pub fn build(self) -> Client {
        Client {
            base_url: self.base_url,
            signer: self.signer,
        }
    }
}

/// A request resolved against a [`Client`]'s endpoint, ready to hand to an HTTP transport.
#[derive(Clone, Debug)]
pub struct PreparedRequest {
    pub url: Url,
    pub request: CanonicalRequest,
    /// Headers of `request` plus `Host`, and `Authorization` when a signer is configured
    pub headers: HeaderParams,
    pub authorization: Option<String>,
}

/// Simple Storage Service (aka S3) style client for Cloud Object Storage.
///
/// The client performs no I/O. It resolves builders into [`PreparedRequest`]s and is cheap to
/// clone.
#[derive(Clone)]
pub struct Client {
    base_url: BaseUrl,
    signer: Option<Arc<dyn Signer + Send + Sync + 'static>>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("signed", &self.signer.is_some())
            .finish()
    }
}

impl Client {
    /// Returns a [`ClientBuilder`] for the given base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use objstore::cos::Client;
    /// use objstore::cos::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "http://127.0.0.1:9000".parse().unwrap();
    /// let client = Client::builder(base_url).path_style(true).build();
    /// assert!(!client.base_url().virtual_style);
    /// ```
    pub fn builder(base_url: BaseUrl) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    /// Creates an unsigned client from `COS_ENDPOINT` and the optional `COS_PATH_STYLE`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(ENV_ENDPOINT)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::MissingEnv(ENV_ENDPOINT.into()))?;
        let base_url: BaseUrl = endpoint.trim().parse()?;

        let mut builder = ClientBuilder::new(base_url);
        if let Some(value) = lookup(ENV_PATH_STYLE) {
            let path_style = match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" | "" => false,
                other => {
                    return Err(ValidationErr::InvalidArgument(format!(
                        "{ENV_PATH_STYLE} must be true or false, got {other}"
                    ))
                    .into());
                }
            };
            builder = builder.path_style(path_style);
        }
        Ok(builder.build())
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn is_signed(&self) -> bool {
        self.signer.is_some()
    }

    /// Builds the canonical request of `builder`, resolves its URL and signs it when a signer
    /// is configured.
    pub fn prepare<B: RequestBuilder + ?Sized>(&self, builder: &B) -> Result<PreparedRequest, Error> {
        let request = builder.to_canonical_request();
        let url = self
            .base_url
            .build_url(request.bucket(), request.path(), request.query_params());

        log::trace!("canonical request for {url}:\n{}", request.canonical_form());

        let mut headers = request.headers().clone();
        headers.insert(HOST.into(), url.host_header_value());

        let authorization = match &self.signer {
            Some(signer) => {
                let value = signer.authorization(&request, &url)?;
                headers.insert(AUTHORIZATION.into(), value.clone());
                Some(value)
            }
            None => None,
        };

        log::debug!(
            "prepared {} {url} ({} headers, signed: {})",
            request.method(),
            headers.len(),
            authorization.is_some()
        );

        Ok(PreparedRequest {
            url,
            request,
            headers,
            authorization,
        })
    }
}
