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

use crate::cos::error::ValidationErr;
use std::fmt;
use std::str::FromStr;

/// HTTP verbs used by the object storage API
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    GET,
    PUT,
    POST,
    DELETE,
    HEAD,
}

impl Method {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::PUT => "PUT",
            Method::POST => "POST",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("GET") {
            Ok(Method::GET)
        } else if s.eq_ignore_ascii_case("PUT") {
            Ok(Method::PUT)
        } else if s.eq_ignore_ascii_case("POST") {
            Ok(Method::POST)
        } else if s.eq_ignore_ascii_case("DELETE") {
            Ok(Method::DELETE)
        } else if s.eq_ignore_ascii_case("HEAD") {
            Ok(Method::HEAD)
        } else {
            Err(ValidationErr::InvalidMethod(s.to_string()))
        }
    }
}

impl From<Method> for http::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::GET => http::Method::GET,
            Method::PUT => http::Method::PUT,
            Method::POST => http::Method::POST,
            Method::DELETE => http::Method::DELETE,
            Method::HEAD => http::Method::HEAD,
        }
    }
}
