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

//! Signature V4 for S3 API

use crate::s3::creds::Provider;
use crate::s3::error::Result;
use crate::s3::header_constants::{AUTHORIZATION, UNSIGNED_PAYLOAD, X_AMZ_SIGNATURE};
use crate::s3::http::Url;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::params::{QueryParam, get_canonical_query_string};
use crate::s3::utils::{UtcTime, hex_encode, sha256_hash, to_amz_date, to_signer_date};
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use http::Method;
use sha2::Sha256;
use std::sync::Arc;

/// Returns HMAC hash for given key and data
pub fn hmac_hash(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut hasher = Hmac::<Sha256>::new_from_slice(key).expect("HMAC can take key of any size");
    hasher.update(data);
    hasher.finalize().into_bytes().to_vec()
}

/// Returns hex encoded HMAC hash for given key and data
pub fn hmac_hash_hex(key: &[u8], data: &[u8]) -> String {
    hex_encode(&hmac_hash(key, data))
}

/// Returns scope value of given date, region and service name
pub fn get_scope(date: UtcTime, region: &str, service_name: &str) -> String {
    format!(
        "{}/{}/{}/aws4_request",
        to_signer_date(date),
        region,
        service_name
    )
}

/// Returns hex encoded SHA256 hash of canonical request
pub fn get_canonical_request_hash(
    method: &Method,
    uri: &str,
    query_string: &str,
    headers: &str,
    signed_headers: &str,
    content_sha256: &str,
) -> String {
    // CanonicalRequest =
    //   HTTPRequestMethod + '\n' +
    //   CanonicalURI + '\n' +
    //   CanonicalQueryString + '\n' +
    //   CanonicalHeaders + '\n\n' +
    //   SignedHeaders + '\n' +
    //   HexEncode(Hash(RequestPayload))
    let canonical_request = format!(
        "{method}\n{uri}\n{query_string}\n{headers}\n\n{signed_headers}\n{content_sha256}"
    );
    log::trace!("canonical request:\n{canonical_request}");
    sha256_hash(canonical_request.as_bytes())
}

/// Returns string-to-sign value of given date, scope and canonical request hash
pub fn get_string_to_sign(date: UtcTime, scope: &str, canonical_request_hash: &str) -> String {
    format!(
        "AWS4-HMAC-SHA256\n{}\n{}\n{}",
        to_amz_date(date),
        scope,
        canonical_request_hash
    )
}

/// Returns signing key of given secret key, date, region and service name
pub fn get_signing_key(
    secret_key: &str,
    date: UtcTime,
    region: &str,
    service_name: &str,
) -> Vec<u8> {
    let mut key: Vec<u8> = b"AWS4".to_vec();
    key.extend(secret_key.as_bytes());

    let date_key = hmac_hash(key.as_slice(), to_signer_date(date).as_bytes());
    let date_region_key = hmac_hash(date_key.as_slice(), region.as_bytes());
    let date_region_service_key = hmac_hash(date_region_key.as_slice(), service_name.as_bytes());
    hmac_hash(date_region_service_key.as_slice(), b"aws4_request")
}

/// Returns signature value for given signing key and string-to-sign
pub fn get_signature(signing_key: &[u8], string_to_sign: &[u8]) -> String {
    hmac_hash_hex(signing_key, string_to_sign)
}

/// Returns authorization value for given access key, scope, signed headers and signature
pub fn get_authorization(
    access_key: &str,
    scope: &str,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!(
        "AWS4-HMAC-SHA256 Credential={access_key}/{scope}, SignedHeaders={signed_headers}, Signature={signature}"
    )
}

/// Signs and updates headers for given parameters for S3 request
#[allow(clippy::too_many_arguments)]
pub fn sign_v4_s3(
    method: &Method,
    uri: &str,
    region: &str,
    headers: &mut Multimap,
    query_params: &[QueryParam],
    access_key: &str,
    secret_key: &str,
    content_sha256: &str,
    date: UtcTime,
) {
    let scope = get_scope(date, region, "s3");
    let (signed_headers, canonical_headers) = headers.get_canonical_headers();
    let canonical_query_string = get_canonical_query_string(query_params);
    let canonical_request_hash = get_canonical_request_hash(
        method,
        uri,
        &canonical_query_string,
        &canonical_headers,
        &signed_headers,
        content_sha256,
    );
    let string_to_sign = get_string_to_sign(date, &scope, &canonical_request_hash);
    let signing_key = get_signing_key(secret_key, date, region, "s3");
    let signature = get_signature(signing_key.as_slice(), string_to_sign.as_bytes());
    let authorization = get_authorization(access_key, &scope, &signed_headers, &signature);

    headers.add(AUTHORIZATION, authorization);
}

/// Signs and updates query parameters for pre-sign request
#[allow(clippy::too_many_arguments)]
pub fn presign_v4(
    method: &Method,
    host: &str,
    uri: &str,
    region: &str,
    query_params: &mut Vec<QueryParam>,
    access_key: &str,
    secret_key: &str,
    session_token: Option<&str>,
    date: UtcTime,
    expires: u32,
) {
    let scope = get_scope(date, region, "s3");
    let canonical_headers = "host:".to_string() + host;
    let signed_headers = "host";

    query_params.push(QueryParam::new("X-Amz-Algorithm", "AWS4-HMAC-SHA256"));
    query_params.push(QueryParam::new(
        "X-Amz-Credential",
        access_key.to_string() + "/" + &scope,
    ));
    query_params.push(QueryParam::new("X-Amz-Date", to_amz_date(date)));
    query_params.push(QueryParam::new("X-Amz-Expires", expires.to_string()));
    if let Some(token) = session_token {
        query_params.push(QueryParam::new("X-Amz-Security-Token", token));
    }
    query_params.push(QueryParam::new("X-Amz-SignedHeaders", signed_headers));

    let canonical_query_string = get_canonical_query_string(query_params);
    let canonical_request_hash = get_canonical_request_hash(
        method,
        uri,
        &canonical_query_string,
        &canonical_headers,
        signed_headers,
        UNSIGNED_PAYLOAD,
    );
    let string_to_sign = get_string_to_sign(date, &scope, &canonical_request_hash);
    let signing_key = get_signing_key(secret_key, date, region, "s3");
    let signature = get_signature(signing_key.as_slice(), string_to_sign.as_bytes());

    query_params.push(QueryParam::new(X_AMZ_SIGNATURE, signature));
}

/// Query-string signing capability used for presigned URLs.
///
/// Implementations receive the canonical URL (endpoint, path and every
/// operation parameter) and return it with signature material added to the
/// query. They never perform a request.
#[async_trait]
pub trait RequestSigner: std::fmt::Debug + Send + Sync {
    async fn presign(
        &self,
        method: &Method,
        url: Url,
        expires: u32,
        date: UtcTime,
    ) -> Result<String>;
}

/// AWS Signature V4 query signer over a credential provider.
///
/// Without a provider the canonical URL is returned unsigned, which is what
/// an anonymous client can hand out for a public bucket.
#[derive(Clone, Debug)]
pub struct SigV4Signer {
    provider: Option<Arc<dyn Provider>>,
    region: String,
}

impl SigV4Signer {
    pub fn new(provider: Option<Arc<dyn Provider>>, region: impl Into<String>) -> Self {
        Self {
            provider,
            region: region.into(),
        }
    }
}

#[async_trait]
impl RequestSigner for SigV4Signer {
    async fn presign(
        &self,
        method: &Method,
        mut url: Url,
        expires: u32,
        date: UtcTime,
    ) -> Result<String> {
        let Some(provider) = &self.provider else {
            return Ok(url.to_string());
        };

        let creds = provider.fetch();
        let host = url.host_header_value();
        presign_v4(
            method,
            &host,
            &url.path,
            &self.region,
            &mut url.query,
            &creds.access_key,
            &creds.secret_key,
            creds.session_token.as_deref(),
            date,
            expires,
        );
        Ok(url.to_string())
    }
}
