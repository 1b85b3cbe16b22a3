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

//! Containers for request headers and query parameters.

use crate::cos::utils::url_encode;
use std::collections::BTreeMap;

/// Header name to value. Keys are unique and iterate sorted by name.
pub type HeaderParams = BTreeMap<String, String>;

/// Query parameters that keep their insertion order.
///
/// The order is part of the string a signer hashes, so this is a list of pairs and
/// never a hash map. Adding a key that is already present replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key-value pair, keeping the position of an existing key
    pub fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Adds `versionId` when a version is given
    pub fn add_version(&mut self, version: Option<String>) {
        if let Some(v) = version {
            self.add(crate::cos::header_constants::VERSION_ID, v);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Converts to an HTTP query string in insertion order.
    ///
    /// Keys with an empty value are written bare, e.g. `append&position=0`.
    pub fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, value) in &self.entries {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(&url_encode(key));
            if !value.is_empty() {
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.add(k, v);
        }
        params
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
