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

use thiserror::Error;

/// Errors raised while a request builder is constructed.
///
/// All of them signal caller misuse and are never worth retrying.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("invalid bucket name: {0}")]
    InvalidBucketName(String),

    /// The media type parser rejected the content type; the parser error is kept as is.
    #[error(transparent)]
    InvalidMediaType(#[from] mime::FromStrError),

    #[error("part number {0} is not supported; allowed range is 1 to 10000")]
    InvalidPartNumber(u16),

    #[error("invalid range: offset {offset}, length {length}")]
    InvalidRange { offset: u64, length: u64 },

    #[error("unsupported HTTP method {0}")]
    InvalidMethod(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid URI: {0}")]
    InvalidUri(String),
}

impl From<http::uri::InvalidUri> for ValidationErr {
    fn from(err: http::uri::InvalidUri) -> Self {
        ValidationErr::InvalidUri(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("environment variable {0} is not set")]
    MissingEnv(String),
}
