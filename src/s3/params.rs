// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
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

//! Parameter maps and query strings

use crate::s3::utils::url_encode;
use std::collections::BTreeMap;
use std::fmt;

/// Value supplied for one operation parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Number(u64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(v) => f.write_str(v),
            ParamValue::Number(v) => write!(f, "{v}"),
            ParamValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        ParamValue::Text(v.clone())
    }
}

impl From<u64> for ParamValue {
    fn from(v: u64) -> Self {
        ParamValue::Number(v)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Number(v as u64)
    }
}

impl From<u16> for ParamValue {
    fn from(v: u16) -> Self {
        ParamValue::Number(v as u64)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

/// Parameters for one operation invocation, ordered by key.
///
/// A key mapped to `None` stands for a parameter the caller left undefined;
/// it is dropped before query strings or headers are built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, Option<ParamValue>>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), Some(value.into()));
    }

    pub fn insert_opt<V: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        self.0.insert(key.into(), value.map(Into::into));
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_opt<V: Into<ParamValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Merges `other` into `self`; keys in `other` win.
    pub fn extend(&mut self, other: Params) {
        self.0.extend(other.0);
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key).and_then(Option::as_ref)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys with a defined value, in key order.
    pub fn defined(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.as_str(), v)))
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Query parameter; a `None` value is a presence-only flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryParam {
    pub key: String,
    pub value: Option<String>,
}

impl QueryParam {
    pub fn flag(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }
}

/// Inserts or replaces `key` in `query`, keeping its first position.
pub fn set_query_param(query: &mut Vec<QueryParam>, param: QueryParam) {
    match query.iter_mut().find(|q| q.key == param.key) {
        Some(existing) => *existing = param,
        None => query.push(param),
    }
}

/// Converts query parameters to a URL query string. Flags render as a bare
/// key: `cors&prefix=a%2Fb`.
pub fn to_query_string(query: &[QueryParam]) -> String {
    let mut out = String::new();
    for q in query {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(&url_encode(&q.key));
        if let Some(v) = &q.value {
            out.push('=');
            out.push_str(&url_encode(v));
        }
    }
    out
}

/// Converts query parameters to the SigV4 canonical query string: sorted by
/// encoded key then value, flags rendered as `key=`.
pub fn get_canonical_query_string(query: &[QueryParam]) -> String {
    let mut pairs: Vec<(String, String)> = query
        .iter()
        .map(|q| {
            (
                url_encode(&q.key),
                q.value.as_deref().map(url_encode).unwrap_or_default(),
            )
        })
        .collect();
    pairs.sort();

    let mut out = String::new();
    for (k, v) in pairs {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(&k);
        out.push('=');
        out.push_str(&v);
    }
    out
}
