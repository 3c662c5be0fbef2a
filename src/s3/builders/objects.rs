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

use super::with_extra;
use crate::s3::client::S3Client;
use crate::s3::error::Result;
use crate::s3::header_constants::*;
use crate::s3::operation::ApiName;
use crate::s3::params::Params;
use crate::s3::types::{
    CopyObjectResult, EmptyResponse, GetObjectResponse, ObjectMeta, PutObjectResponse, S3Api,
    S3Request, ToS3Request,
};
use bytes::Bytes;
use typed_builder::TypedBuilder;

/// Argument builder for the [`HeadObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_HeadObject.html) S3 API operation.
///
/// The conditional fields travel as request headers when the request is
/// sent, and as query parameters of a presigned URL.
#[derive(Clone, Debug, TypedBuilder)]
pub struct HeadObject {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    key: String,
    #[builder(default, setter(into, strip_option))]
    version_id: Option<String>,
    #[builder(default, setter(into, strip_option))]
    part_number: Option<u16>,
    #[builder(default, setter(into, strip_option))]
    if_match: Option<String>,
    #[builder(default, setter(into, strip_option))]
    if_none_match: Option<String>,
    #[builder(default, setter(into, strip_option))]
    if_modified_since: Option<String>,
    #[builder(default, setter(into, strip_option))]
    if_unmodified_since: Option<String>,
}

/// Builder type alias for [`HeadObject`].
pub type HeadObjectBldr =
    HeadObjectBuilder<((S3Client,), (), (String,), (), (), (), (), (), ())>;

impl S3Api for HeadObject {
    type S3Response = ObjectMeta;
}

impl ToS3Request for HeadObject {
    fn to_s3request(self) -> Result<S3Request> {
        let params = Params::new()
            .with_opt("versionId", self.version_id)
            .with_opt("partNumber", self.part_number)
            .with_opt(IF_MATCH, self.if_match)
            .with_opt(IF_NONE_MATCH, self.if_none_match)
            .with_opt(IF_MODIFIED_SINCE, self.if_modified_since)
            .with_opt(IF_UNMODIFIED_SINCE, self.if_unmodified_since);

        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::HeadObject)
            .key(self.key)
            .params(with_extra(params, self.extra_params))
            .build())
    }
}

/// Argument builder for the [`GetObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObject.html) S3 API operation.
///
/// The `response_*` fields override the headers S3 returns with the
/// content, which is mostly useful on presigned download links.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetObject {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    key: String,
    #[builder(default, setter(into, strip_option))]
    version_id: Option<String>,
    #[builder(default, setter(into, strip_option))]
    part_number: Option<u16>,
    /// A `Range` header value such as `bytes=0-99`.
    #[builder(default, setter(into, strip_option))]
    range: Option<String>,
    #[builder(default, setter(into, strip_option))]
    if_match: Option<String>,
    #[builder(default, setter(into, strip_option))]
    if_none_match: Option<String>,
    #[builder(default, setter(into, strip_option))]
    if_modified_since: Option<String>,
    #[builder(default, setter(into, strip_option))]
    if_unmodified_since: Option<String>,
    #[builder(default, setter(into, strip_option))]
    response_content_type: Option<String>,
    #[builder(default, setter(into, strip_option))]
    response_content_disposition: Option<String>,
    #[builder(default, setter(into, strip_option))]
    response_cache_control: Option<String>,
}

/// Builder type alias for [`GetObject`].
pub type GetObjectBldr = GetObjectBuilder<(
    (S3Client,),
    (),
    (String,),
    (),
    (),
    (),
    (),
    (),
    (),
    (),
    (),
    (),
    (),
)>;

impl S3Api for GetObject {
    type S3Response = GetObjectResponse;
}

impl ToS3Request for GetObject {
    fn to_s3request(self) -> Result<S3Request> {
        let params = Params::new()
            .with_opt("versionId", self.version_id)
            .with_opt("partNumber", self.part_number)
            .with_opt(RANGE, self.range)
            .with_opt(IF_MATCH, self.if_match)
            .with_opt(IF_NONE_MATCH, self.if_none_match)
            .with_opt(IF_MODIFIED_SINCE, self.if_modified_since)
            .with_opt(IF_UNMODIFIED_SINCE, self.if_unmodified_since)
            .with_opt("response-content-type", self.response_content_type)
            .with_opt(
                "response-content-disposition",
                self.response_content_disposition,
            )
            .with_opt("response-cache-control", self.response_cache_control);

        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::GetObject)
            .key(self.key)
            .params(with_extra(params, self.extra_params))
            .build())
    }
}

/// Argument builder for the [`PutObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObject.html) S3 API operation.
///
/// The content is sent in one request; an empty body creates an empty
/// object. Presigning ignores the body.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutObject {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    key: String,
    #[builder(!default, setter(into))]
    body: Bytes,
    #[builder(default, setter(into, strip_option))]
    content_type: Option<String>,
    #[builder(default, setter(into, strip_option))]
    cache_control: Option<String>,
    #[builder(default, setter(into, strip_option))]
    content_disposition: Option<String>,
    #[builder(default, setter(into, strip_option))]
    content_encoding: Option<String>,
}

/// Builder type alias for [`PutObject`].
pub type PutObjectBldr =
    PutObjectBuilder<((S3Client,), (), (String,), (Bytes,), (), (), (), ())>;

impl S3Api for PutObject {
    type S3Response = PutObjectResponse;
}

impl ToS3Request for PutObject {
    fn to_s3request(self) -> Result<S3Request> {
        let params = Params::new()
            .with_opt(CONTENT_TYPE, self.content_type)
            .with_opt(CACHE_CONTROL, self.cache_control)
            .with_opt(CONTENT_DISPOSITION, self.content_disposition)
            .with_opt(CONTENT_ENCODING, self.content_encoding);

        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::PutObject)
            .key(self.key)
            .params(with_extra(params, self.extra_params))
            .body(Some(self.body))
            .build())
    }
}

/// Argument builder for the [`DeleteObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteObject.html) S3 API operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteObject {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    key: String,
    #[builder(default, setter(into, strip_option))]
    version_id: Option<String>,
}

/// Builder type alias for [`DeleteObject`].
pub type DeleteObjectBldr = DeleteObjectBuilder<((S3Client,), (), (String,), ())>;

impl S3Api for DeleteObject {
    type S3Response = EmptyResponse;
}

impl ToS3Request for DeleteObject {
    fn to_s3request(self) -> Result<S3Request> {
        let params = Params::new().with_opt("versionId", self.version_id);

        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::DeleteObject)
            .key(self.key)
            .params(with_extra(params, self.extra_params))
            .build())
    }
}

/// Argument builder for the [`CopyObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CopyObject.html) S3 API operation.
///
/// `copy_source` is the `x-amz-copy-source` value, `/{bucket}/{key}`
/// optionally followed by `?versionId=...`, already percent-encoded.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CopyObject {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    key: String,
    #[builder(!default, setter(into))]
    copy_source: String,
    /// `COPY` (default) or `REPLACE`
    #[builder(default, setter(into, strip_option))]
    metadata_directive: Option<String>,
    #[builder(default, setter(into, strip_option))]
    copy_source_if_match: Option<String>,
    #[builder(default, setter(into, strip_option))]
    copy_source_if_none_match: Option<String>,
    #[builder(default, setter(into, strip_option))]
    content_type: Option<String>,
}

/// Builder type alias for [`CopyObject`].
pub type CopyObjectBldr =
    CopyObjectBuilder<((S3Client,), (), (String,), (String,), (), (), (), ())>;

impl S3Api for CopyObject {
    type S3Response = CopyObjectResult;
}

impl ToS3Request for CopyObject {
    fn to_s3request(self) -> Result<S3Request> {
        let params = Params::new()
            .with(X_AMZ_COPY_SOURCE, self.copy_source)
            .with_opt(X_AMZ_METADATA_DIRECTIVE, self.metadata_directive)
            .with_opt(X_AMZ_COPY_SOURCE_IF_MATCH, self.copy_source_if_match)
            .with_opt(X_AMZ_COPY_SOURCE_IF_NONE_MATCH, self.copy_source_if_none_match)
            .with_opt(CONTENT_TYPE, self.content_type);

        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::CopyObject)
            .key(self.key)
            .params(with_extra(params, self.extra_params))
            .build())
    }
}
