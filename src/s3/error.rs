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

//! Error definitions for S3 operations

use crate::s3::xml;
use http::Method;
use std::fmt;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised before any request leaves the client.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationErr {
    #[error("{api} requires a non-empty object key")]
    MissingObjectKey { api: &'static str },

    #[error("{api} requires parameter '{name}'")]
    MissingParameter { api: &'static str, name: String },

    #[error("{api} does not accept parameter '{name}'")]
    UnknownParameter { api: &'static str, name: String },

    #[error("invalid endpoint '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("presign expiry of {0} seconds is outside 1..=604800")]
    InvalidExpiry(u32),

    #[error("invalid value for header '{name}'")]
    InvalidHeader { name: String },

    #[error("unable to build HTTP client: {0}")]
    HttpClient(String),
}

/// Decoded `<Error>` document returned by S3 alongside a failure status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: Option<String>,
    pub resource: Option<String>,
    pub request_id: Option<String>,
    pub host_id: Option<String>,
    pub bucket_name: Option<String>,
    pub key: Option<String>,
}

impl ErrorResponse {
    /// Returns `None` when `text` is not an S3 `<Error>` document.
    pub fn parse(text: &str) -> Option<ErrorResponse> {
        let root = xml::parse(text).ok()?;
        let node = root.child("Error")?;
        Some(ErrorResponse {
            code: node.text("Code").unwrap_or_default().to_string(),
            message: node.text("Message").map(String::from),
            resource: node.text("Resource").map(String::from),
            request_id: node.text("RequestId").map(String::from),
            host_id: node.text("HostId").map(String::from),
            bucket_name: node.text("BucketName").map(String::from),
            key: node.text("Key").map(String::from),
        })
    }
}

/// A request that reached the server and came back with a failure.
///
/// The raw body is always kept; it is the only place S3 reports why a call
/// failed (missing bucket, access denied, precondition failed...).
#[derive(Clone, Debug)]
pub struct ApiError {
    pub method: Method,
    pub path: String,
    pub status: u16,
    pub body: String,
    pub response: Option<ErrorResponse>,
}

impl ApiError {
    pub fn new(method: Method, path: impl Into<String>, status: u16, body: String) -> Self {
        let response = ErrorResponse::parse(&body);
        Self {
            method,
            path: path.into(),
            status,
            body,
            response,
        }
    }

    /// S3 error code, when the body carried one.
    pub fn code(&self) -> Option<&str> {
        self.response.as_ref().map(|r| r.code.as_str())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to fetch {} {}: {} {}",
            self.method, self.path, self.status, self.body
        )
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Error)]
pub enum S3ServerError {
    #[error(transparent)]
    Api(Box<ApiError>),
}

/// Error definitions
#[derive(Debug, Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error(transparent)]
    S3Server(#[from] S3ServerError),

    #[error("malformed XML: {source}")]
    XmlParse {
        #[source]
        source: xmltree::ParseError,
        text: String,
    },

    #[error("unexpected XML: {0}")]
    Xml(String),

    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid date: {0}")]
    TimeParse(#[from] chrono::ParseError),
}

impl Error {
    pub(crate) fn api(err: ApiError) -> Self {
        Error::S3Server(S3ServerError::Api(Box::new(err)))
    }

    /// The failed exchange, if this error came from a non-2xx response.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::S3Server(S3ServerError::Api(e)) => Some(e),
            _ => None,
        }
    }

    /// HTTP status of the failed exchange, if any.
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|e| e.status)
    }

    /// Text that failed to parse, for diagnostics.
    pub fn xml_text(&self) -> Option<&str> {
        match self {
            Error::XmlParse { text, .. } => Some(text),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}
