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

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, HeaderValue, StatusCode};
use s3_typed::s3::error::Result;
use s3_typed::s3::transport::{HttpRequest, HttpResponse, Transport};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Transport answering from a script and recording every request it sees.
///
/// Responses are served in the order they were queued; once the queue is
/// empty every request receives the fallback response (`200 OK`, empty body,
/// unless changed with [`MockTransport::set_fallback`]).
#[derive(Debug)]
pub struct MockTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    fallback: Mutex<HttpResponse>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: Mutex::new(response(StatusCode::OK, "")),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queues a response for the next unanswered request.
    pub fn push(&self, resp: HttpResponse) {
        self.responses.lock().unwrap().push_back(resp);
    }

    pub fn push_xml(&self, status: u16, body: &str) {
        let mut resp = response(StatusCode::from_u16(status).unwrap(), body);
        resp.headers
            .insert("content-type", HeaderValue::from_static("application/xml"));
        self.push(resp);
    }

    pub fn push_status(&self, status: u16, body: &str) {
        self.push(response(StatusCode::from_u16(status).unwrap(), body));
    }

    /// Response served once the script is exhausted.
    pub fn set_fallback(&self, resp: HttpResponse) {
        *self.fallback.lock().unwrap() = resp;
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        log::debug!("mock transport: {} {}", request.method, request.url);
        self.requests.lock().unwrap().push(request);
        let next = self.responses.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| self.fallback.lock().unwrap().clone()))
    }
}

pub fn response(status: StatusCode, body: &str) -> HttpResponse {
    HttpResponse::new(status, HeaderMap::new(), Bytes::from(body.to_string()))
}

/// A response carrying only headers, as HEAD and PUT requests get.
pub fn headers_response(headers: &[(&'static str, &'static str)]) -> HttpResponse {
    let mut map = HeaderMap::new();
    for (k, v) in headers {
        map.insert(*k, HeaderValue::from_static(v));
    }
    HttpResponse::new(StatusCode::OK, map, Bytes::new())
}
