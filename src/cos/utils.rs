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

//! Various utility and helper functions

use crate::cos::error::ValidationErr;
use crate::cos::header_constants::X_COS_META_PREFIX;
use crate::cos::multimap_ext::HeaderParams;
use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use mime::Mime;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::collections::BTreeMap;

/// Media type used when the caller gives none
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

pub const MAX_MULTIPART_COUNT: u16 = 10_000;

const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &QUERY_ENCODE_SET.remove(b'/');

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Gets base64 encoded MD5 hash of given data
pub fn md5sum_hash(data: &[u8]) -> String {
    b64encode(md5::compute(data).0)
}

/// Percent-encodes a query key or value
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_ENCODE_SET).collect()
}

/// Percent-encodes an object path, keeping `/` separators
pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// True for empty and whitespace-only strings
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Validates given bucket name: it must not be blank.
///
/// Naming rules (case, length, appid suffix) are left to the service.
pub fn check_bucket_name(bucket_name: &str) -> Result<(), ValidationErr> {
    if is_blank(bucket_name) {
        return Err(ValidationErr::InvalidBucketName(
            "bucket name cannot be empty".into(),
        ));
    }
    Ok(())
}

/// Validates given object name: it must not be blank
pub fn check_object_name(object_name: &str) -> Result<(), ValidationErr> {
    if is_blank(object_name) {
        return Err(ValidationErr::InvalidArgument("Invalid object name".into()));
    }
    Ok(())
}

/// Validates a multipart upload id: it must not be blank
pub fn check_upload_id(upload_id: &str) -> Result<(), ValidationErr> {
    if is_blank(upload_id) {
        return Err(ValidationErr::InvalidArgument("Invalid upload id".into()));
    }
    Ok(())
}

/// Validates an optional version id: when given it must not be blank
pub fn check_version_id(version_id: Option<&str>) -> Result<(), ValidationErr> {
    match version_id {
        Some(v) if is_blank(v) => Err(ValidationErr::InvalidArgument(
            "Invalid version id".into(),
        )),
        _ => Ok(()),
    }
}

/// Builds the canonical resource path: `/` followed by the object name with any
/// leading or trailing spaces and slashes removed.
pub fn canonical_object_path(object_name: &str) -> String {
    format!("/{}", object_name.trim_matches([' ', '/']))
}

/// Resolves the media type of a payload.
///
/// A blank content type falls back to [`DEFAULT_CONTENT_TYPE`]; anything else goes through
/// the `mime` parser and its error is returned unchanged.
pub fn parse_content_type(content_type: Option<&str>) -> Result<Mime, ValidationErr> {
    match content_type {
        Some(ct) if !is_blank(ct) => Ok(ct.parse::<Mime>()?),
        _ => Ok(mime::APPLICATION_OCTET_STREAM),
    }
}

/// Name of the header carrying user metadata `key`
pub fn metadata_header_name(key: &str) -> String {
    format!("{X_COS_META_PREFIX}{}", key.to_uppercase())
}

/// Adds one `X-COS-META-<KEY>` header per metadata entry.
///
/// Keys that only differ in case collapse into one header; the entry sorting last wins.
pub fn insert_metadata_headers(headers: &mut HeaderParams, metadata: &BTreeMap<String, String>) {
    for (k, v) in metadata {
        headers.insert(metadata_header_name(k), v.clone());
    }
}
