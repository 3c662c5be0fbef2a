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

//! S3 client to perform bucket and object operations.
//!
//! Every operation is a request builder obtained from [`S3Client`]; a built
//! request can either be sent ([`S3Api::send`](crate::s3::types::S3Api::send))
//! or turned into a presigned URL
//! ([`S3Api::presign`](crate::s3::types::S3Api::presign)). Both paths are
//! driven by the operation descriptor table, so each operation is a thin
//! layer over [`S3Client::execute`] and [`S3Client::presign_url`].

use bytes::Bytes;
use std::sync::Arc;

use crate::s3::creds::Provider;
use crate::s3::error::{ApiError, Error, Result, ValidationErr};
use crate::s3::header_constants::*;
use crate::s3::http::BaseUrl;
use crate::s3::multimap_ext::MultimapExt;
use crate::s3::operation::{Body, Operation};
use crate::s3::params::{Params, QueryParam, set_query_param, to_query_string};
use crate::s3::signer::{RequestSigner, SigV4Signer};
use crate::s3::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::s3::types::{MAX_PRESIGN_EXPIRY, PresignOptions};
use crate::s3::utils::{md5sum_hash, utc_now};

mod buckets;
mod multipart;
mod objects;

/// The default AWS region to be used if no other region is specified.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Client Builder manufactures a Client using given parameters.
/// Creates a builder given a base URL for the S3 service or other AWS S3
/// compatible object storage service.
#[derive(Debug)]
pub struct S3ClientBuilder {
    base_url: BaseUrl,
    /// Set the credential provider. If not, set anonymous access is used.
    provider: Option<Arc<dyn Provider>>,
    region: String,
    transport: Option<Arc<dyn Transport>>,
    signer: Option<Arc<dyn RequestSigner>>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
}

impl S3ClientBuilder {
    /// Creates a builder given a base URL for the S3 service or other AWS S3
    /// compatible object storage service.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            region: DEFAULT_REGION.to_string(),
            transport: None,
            signer: None,
            ignore_cert_check: None,
            app_info: None,
        }
    }

    /// Set the credential provider. If not, set anonymous access is used.
    pub fn provider<P: Provider + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider>);
        self
    }

    /// Region used in the signing scope, `us-east-1` by default.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Replaces the reqwest transport, e.g. with a scripted one in tests.
    /// The transport is then responsible for authenticating requests.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replaces the SigV4 query signer used for presigned URLs.
    pub fn signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().no_gzip();

        let mut user_agent = String::from("s3-typed (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") s3-typed-rs/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = &self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }

        builder
            .build()
            .map_err(|e| ValidationErr::HttpClient(e.to_string()).into())
    }

    /// Build the Client.
    pub fn build(self) -> Result<S3Client> {
        let transport: Arc<dyn Transport> = match &self.transport {
            Some(t) => Arc::clone(t),
            None => Arc::new(ReqwestTransport::new(
                self.http_client()?,
                self.provider.clone(),
                self.region.clone(),
            )),
        };
        let signer: Arc<dyn RequestSigner> = match self.signer {
            Some(s) => s,
            None => Arc::new(SigV4Signer::new(self.provider, self.region.clone())),
        };

        Ok(S3Client {
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                region: self.region,
                transport,
                signer,
            }),
        })
    }
}

/// Simple Storage Service (aka S3) client to perform bucket and object operations.
///
/// The client addresses one bucket: its base URL is either a virtual-hosted
/// bucket endpoint (`https://photos.s3.amazonaws.com`) or a path-style one
/// (`http://localhost:9000/photos`). Bucket operations target `/` below that
/// base, object operations target `/{key}`.
///
/// If credential provider is passed, all S3 operation requests are signed using
/// AWS Signature Version 4; else they are performed anonymously.
#[derive(Clone, Debug)]
pub struct S3Client {
    pub(crate) shared: Arc<SharedClientItems>,
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    pub(crate) region: String,
    transport: Arc<dyn Transport>,
    signer: Arc<dyn RequestSigner>,
}

impl S3Client {
    /// Returns a S3 client with given base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use s3_typed::s3::S3Client;
    /// use s3_typed::s3::creds::StaticProvider;
    /// use s3_typed::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://play.min.io/photos".parse().unwrap();
    /// let static_provider = StaticProvider::new(
    ///     "Q3AM3UQ867SPQQA43P2F",
    ///     "zuf+tfteSlswRu7BJ86wekitnifILbZam1KYY3TG",
    ///     None,
    /// );
    /// let client = S3Client::new(base_url, Some(static_provider)).unwrap();
    /// ```
    pub fn new<P: Provider + 'static>(base_url: BaseUrl, provider: Option<P>) -> Result<Self> {
        S3ClientBuilder::new(base_url).provider(provider).build()
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    pub fn region(&self) -> &str {
        &self.shared.region
    }

    /// Sends one request for `op` and returns the raw response.
    ///
    /// `params` is split by the descriptor into query parameters and request
    /// headers. Any status outside 2xx fails the call with an [`ApiError`]
    /// holding the status and the body text; nothing is retried.
    pub(crate) async fn execute(
        &self,
        op: &'static Operation,
        key: Option<&str>,
        params: &Params,
        body: Option<Bytes>,
    ) -> Result<HttpResponse> {
        let path = op.path(key)?;
        let (query, mut headers) = op.request_parts(params)?;

        if let (Body::Xml(_), Some(data)) = (op.request_body, &body) {
            if headers.get_ignore_case(CONTENT_TYPE).is_none() {
                headers.add(CONTENT_TYPE, "application/xml");
            }
            if op.content_md5 && headers.get_ignore_case(CONTENT_MD5).is_none() {
                headers.add(CONTENT_MD5, md5sum_hash(data));
            }
        }

        let target = if query.is_empty() {
            path.clone()
        } else {
            format!("{path}?{}", to_query_string(&query))
        };
        let url = self.shared.base_url.build_url(&path, query);
        log::debug!("{} {url}", op.method);

        let resp = self
            .shared
            .transport
            .send(HttpRequest {
                method: op.method.clone(),
                url,
                headers,
                body,
            })
            .await?;

        if !resp.is_success() {
            let err = ApiError::new(
                op.method.clone(),
                target,
                resp.status.as_u16(),
                resp.text_lossy(),
            );
            log::warn!(
                "{} {} failed: {} {}",
                err.method,
                err.path,
                err.status,
                err.code().unwrap_or("(no error code)")
            );
            return Err(Error::api(err));
        }

        Ok(resp)
    }

    /// Builds the signed URL of `op`. The transport is never used.
    ///
    /// Every parameter travels in the query together with the `x-id`
    /// operation marker; the signer adds the expiry and signature material.
    pub(crate) async fn presign_url(
        &self,
        op: &'static Operation,
        key: Option<&str>,
        params: &Params,
        options: &PresignOptions,
    ) -> Result<String> {
        if options.expires == 0 || options.expires > MAX_PRESIGN_EXPIRY {
            return Err(ValidationErr::InvalidExpiry(options.expires).into());
        }

        let path = op.path(key)?;
        let mut query = op.presign_query(params)?;
        set_query_param(&mut query, QueryParam::new(X_ID, op.name.as_str()));

        let url = self.shared.base_url.build_url(&path, query);
        let date = options.request_time.unwrap_or_else(utc_now);
        let signed = self
            .shared
            .signer
            .presign(&op.method, url, options.expires, date)
            .await?;

        log::debug!(
            "presigned {} {path} for {} ({}s)",
            op.method,
            op.name,
            options.expires
        );
        Ok(signed)
    }
}
