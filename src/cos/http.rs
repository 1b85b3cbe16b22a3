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

//! HTTP URL definitions

use crate::cos::error::ValidationErr;
use crate::cos::multimap_ext::QueryParams;
use crate::cos::utils::urlencode_object_key;
use http::Uri;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref COS_ENDPOINT_REGEX: Regex =
        Regex::new(r"^cos\.([a-z0-9-]+)\.(myqcloud\.com|tencentcos\.cn)$").unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: QueryParams,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl Default for Url {
    fn default() -> Self {
        Self {
            https: true,
            host: String::default(),
            port: u16::default(),
            path: String::default(),
            query: QueryParams::default(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }

        f.write_str(&self.host_header_value())?;

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

/// Represents Base URL of a COS (or other S3 compatible) endpoint
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    /// Region parsed from `cos.<region>.myqcloud.com` style hosts
    pub region: Option<String>,
    pub virtual_style: bool,
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use objstore::cos::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://cos.ap-guangzhou.myqcloud.com".parse().unwrap();
    /// assert_eq!(base_url.region.as_deref(), Some("ap-guangzhou"));
    /// assert!(base_url.virtual_style);
    ///
    /// let base_url: BaseUrl = "http://127.0.0.1:9000".parse().unwrap();
    /// assert!(!base_url.virtual_style);
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s.parse::<Uri>()?;

        let https = match url.scheme_str() {
            None | Some("https") => true,
            Some("http") => false,
            Some(_) => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "scheme must be http or https".into(),
                ));
            }
        };

        let host = match url.host() {
            Some(h) if !h.is_empty() => h.to_lowercase(),
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        let mut port = url.port_u16().unwrap_or(0);
        if (https && port == 443) || (!https && port == 80) {
            port = 0;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        let region = COS_ENDPOINT_REGEX
            .captures(&host)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .filter(|r| r != "accelerate");
        let virtual_style = host.ends_with(".myqcloud.com") || host.ends_with(".tencentcos.cn");

        Ok(BaseUrl {
            https,
            host,
            port,
            region,
            virtual_style,
        })
    }
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Builds URL from base URL for given parameters of an object operation.
    ///
    /// `path` is the canonical object path; it is percent-encoded with `/` kept.
    pub fn build_url(&self, bucket: &str, path: &str, query: &QueryParams) -> Url {
        // Bucket names with '.' break wildcard certificates under virtual-hosted style.
        let enforce_path_style = !self.virtual_style || (bucket.contains('.') && self.https);

        let (host, mut full_path) = if enforce_path_style {
            (self.host.clone(), format!("/{bucket}"))
        } else {
            (format!("{}.{}", bucket, self.host), String::new())
        };

        if !path.starts_with('/') {
            full_path.push('/');
        }
        full_path.push_str(&urlencode_object_key(path));

        Url {
            https: self.https,
            host,
            port: self.port,
            path: full_path,
            query: query.clone(),
        }
    }
}
