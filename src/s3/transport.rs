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

//! HTTP transport seam between the dispatcher and the network

use crate::s3::creds::Provider;
use crate::s3::error::{Result, ValidationErr};
use crate::s3::header_constants::*;
use crate::s3::http::Url;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::signer::sign_v4_s3;
use crate::s3::utils::{sha256_hash, to_amz_date, utc_now};
use async_trait::async_trait;
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// One outgoing request, fully resolved by the dispatcher.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Multimap,
    pub body: Option<Bytes>,
}

/// Status, headers and body of a completed exchange.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// First value of header `name`, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn bytes(&self) -> Bytes {
        self.body.clone()
    }

    pub fn text(&self) -> Result<String> {
        Ok(String::from_utf8(self.body.to_vec())?)
    }

    /// Body as text; invalid UTF-8 is replaced rather than rejected.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// A plain request/response primitive. Implementations own authentication of
/// executed requests; presigning never goes through a transport.
#[async_trait]
pub trait Transport: std::fmt::Debug + Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// reqwest-backed transport signing every request with AWS Signature V4.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
    provider: Option<Arc<dyn Provider>>,
    region: String,
}

impl ReqwestTransport {
    pub fn new(
        http_client: reqwest::Client,
        provider: Option<Arc<dyn Provider>>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            provider,
            region: region.into(),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            mut headers,
            body,
        } = request;

        headers.add(HOST, url.host_header_value());

        let has_body = method == Method::PUT || method == Method::POST;
        let body = body.unwrap_or_default();
        if has_body {
            if headers.get_ignore_case(CONTENT_TYPE).is_none() {
                headers.add(CONTENT_TYPE, "application/octet-stream");
            }
            headers.add(CONTENT_LENGTH, body.len().to_string());
        }

        let sha256 = sha256_hash(&body);
        headers.add(X_AMZ_CONTENT_SHA256, sha256.clone());

        let date = utc_now();
        headers.add(X_AMZ_DATE, to_amz_date(date));

        if let Some(p) = &self.provider {
            let creds = p.fetch();
            if let Some(token) = creds.session_token {
                headers.add(X_AMZ_SECURITY_TOKEN, token);
            }
            sign_v4_s3(
                &method,
                &url.path,
                &self.region,
                &mut headers,
                &url.query,
                &creds.access_key,
                &creds.secret_key,
                &sha256,
                date,
            );
        }

        let mut req = self.http_client.request(method.clone(), url.to_string());

        for (key, values) in headers.iter_all() {
            let invalid = || ValidationErr::InvalidHeader { name: key.clone() };
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| invalid())?;
            for value in values {
                let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
                req = req.header(name.clone(), value);
            }
        }

        if has_body {
            req = req.body(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let resp_headers = resp.headers().clone();
        let resp_body = resp.bytes().await?;

        Ok(HttpResponse::new(status, resp_headers, resp_body))
    }
}
