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

//! HTTP URL definitions

use crate::s3::error::ValidationErr;
use crate::s3::params::{QueryParam, to_query_string};
use crate::s3::utils::urlencode_object_key;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    /// Percent-encoded path
    pub path: String,
    pub query: Vec<QueryParam>,
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
            query: Vec::new(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(std::fmt::Error);
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
            f.write_str(&to_query_string(&self.query))?;
        }

        Ok(())
    }
}

/// Endpoint all operation paths are resolved against.
///
/// A path component in the endpoint (`http://localhost:9000/my-bucket`)
/// becomes the base path of every request, which is how a path-style bucket
/// is addressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    base_path: String,
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explicit port, 0 when the scheme default is used.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Builds the URL of `path` (`/` or `/{key}`) with the given query.
    pub fn build_url(&self, path: &str, query: Vec<QueryParam>) -> Url {
        let mut full = self.base_path.clone();
        full.push_str(&urlencode_object_key(path));
        if full.is_empty() {
            full.push('/');
        }
        Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: full,
            query,
        }
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Parses an endpoint such as `https://s3.amazonaws.com/my-bucket` or
    /// `http://localhost:9000`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationErr::InvalidBaseUrl {
            url: s.to_string(),
            reason: reason.to_string(),
        };

        let url = url::Url::parse(s).map_err(|e| invalid(&e.to_string()))?;

        let https = match url.scheme() {
            "https" => true,
            "http" => false,
            _ => return Err(invalid("scheme must be http or https")),
        };

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| invalid("missing host"))?
            .to_string();

        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed"));
        }
        if !url.username().is_empty() || url.password().is_some() {
            return Err(invalid("credentials in the endpoint are not allowed"));
        }

        Ok(BaseUrl {
            https,
            host,
            port: url.port().unwrap_or(0),
            base_path: url.path().trim_end_matches('/').to_string(),
        })
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let url = Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: self.base_path.clone(),
            query: Vec::new(),
        };
        write!(f, "{url}")
    }
}
