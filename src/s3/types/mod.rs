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

//! Request pipeline traits and the typed S3 models

mod common;
mod bucket;
mod object;
mod multipart;

pub use bucket::*;
pub use common::*;
pub use multipart::*;
pub use object::*;

use crate::s3::client::S3Client;
use crate::s3::error::Result;
use crate::s3::operation::{ApiName, Body, Operation, describe};
use crate::s3::params::{Params, to_query_string};
use crate::s3::transport::HttpResponse;
use crate::s3::utils::UtcTime;
use crate::s3::xml::{self, ToXml};
use async_trait::async_trait;
use bytes::Bytes;
use typed_builder::TypedBuilder;

/// Longest validity S3 accepts for a presigned URL, in seconds.
pub const MAX_PRESIGN_EXPIRY: u32 = 604_800;

/// Validity used when the caller does not choose one, in seconds.
pub const DEFAULT_PRESIGN_EXPIRY: u32 = 86_400;

#[derive(Clone, Debug, TypedBuilder)]
/// Generic S3Request
pub struct S3Request {
    #[builder(!default)] // force required
    pub(crate) client: S3Client,

    #[builder(!default)] // force required
    pub(crate) api: ApiName,

    #[builder(default, setter(into))]
    pub(crate) key: Option<String>,

    #[builder(default)]
    pub(crate) params: Params,

    #[builder(default, setter(into))]
    pub(crate) body: Option<Bytes>,
}

impl S3Request {
    pub fn operation(&self) -> &'static Operation {
        describe(self.api)
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Path and query as sent, e.g. `/photo.jpg?versionId=3`.
    pub fn display_path(&self) -> String {
        let op = self.operation();
        let path = op.path(self.key.as_deref()).unwrap_or_default();
        match op.request_parts(&self.params) {
            Ok((query, _)) if !query.is_empty() => format!("{path}?{}", to_query_string(&query)),
            _ => path,
        }
    }

    /// Execute the request, returning the response. Only used in [`S3Api::send()`]
    pub async fn execute(&self) -> Result<HttpResponse> {
        self.client
            .execute(
                self.operation(),
                self.key.as_deref(),
                &self.params,
                self.body.clone(),
            )
            .await
    }

    /// Signed URL for this request; nothing is sent.
    pub async fn presign(&self, options: &PresignOptions) -> Result<String> {
        self.client
            .presign_url(self.operation(), self.key.as_deref(), &self.params, options)
            .await
    }
}

/// Serializes `model` inside the request envelope of `api`.
pub(crate) fn xml_body(api: ApiName, model: &impl ToXml) -> Option<Bytes> {
    match describe(api).request_body {
        Body::Xml(envelope) => Some(Bytes::from(xml::serialize(envelope, &model.to_xml()))),
        _ => None,
    }
}

/// Options of a presigned URL.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PresignOptions {
    /// Seconds the URL stays valid, `1..=604800`.
    #[builder(default = DEFAULT_PRESIGN_EXPIRY)]
    pub expires: u32,

    /// Signing time; the current time when unset.
    #[builder(default, setter(strip_option))]
    pub request_time: Option<UtcTime>,
}

impl Default for PresignOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Trait for converting a request builder into a concrete S3 HTTP request.
///
/// The [`S3Api::send`] and [`S3Api::presign`] methods use this trait to
/// validate the builder and resolve it into a [`S3Request`].
pub trait ToS3Request: Sized {
    fn to_s3request(self) -> Result<S3Request>;
}

/// Trait for converting HTTP responses into strongly typed S3 response objects.
///
/// Only called for 2xx responses; failures are turned into errors by the
/// dispatcher before this point.
pub trait FromS3Response: Sized {
    fn from_s3response(req: &S3Request, resp: HttpResponse) -> Result<Self>;
}

/// Execute and presign pair shared by every request builder.
#[async_trait]
pub trait S3Api: ToS3Request + Send {
    /// The response type associated with this request builder.
    type S3Response: FromS3Response;

    /// Sends the request and returns the typed response.
    async fn send(self) -> Result<Self::S3Response> {
        let req: S3Request = self.to_s3request()?;
        let resp: HttpResponse = req.execute().await?;
        Self::S3Response::from_s3response(&req, resp)
    }

    /// Returns a signed URL performing this request later. No request is
    /// sent and the transport is never used.
    ///
    /// A client built without credentials returns the unsigned URL instead.
    /// `options.expires` is still range-checked but the URL carries no
    /// expiry, so it stays usable for as long as the bucket allows
    /// anonymous access.
    async fn presign(self, options: PresignOptions) -> Result<String> {
        let req: S3Request = self.to_s3request()?;
        req.presign(&options).await
    }
}
