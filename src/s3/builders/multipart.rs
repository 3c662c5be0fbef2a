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
    CompleteMultipartUploadRequest, CompleteMultipartUploadResult, CompletedPart, CopyPartResult,
    EmptyResponse, InitiateMultipartUploadResult, ListMultipartUploadsResult, ListPartsResult,
    S3Api, S3Request, ToS3Request, UploadPartResponse, xml_body,
};
use bytes::Bytes;
use typed_builder::TypedBuilder;

/// Argument builder for the [`ListMultipartUploads`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListMultipartUploads.html) S3 API operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListMultipartUploads {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(default, setter(into, strip_option))]
    prefix: Option<String>,
    #[builder(default, setter(into, strip_option))]
    delimiter: Option<String>,
    #[builder(default, setter(into, strip_option))]
    key_marker: Option<String>,
    #[builder(default, setter(into, strip_option))]
    upload_id_marker: Option<String>,
    #[builder(default, setter(into, strip_option))]
    max_uploads: Option<u32>,
}

/// Builder type alias for [`ListMultipartUploads`].
pub type ListMultipartUploadsBldr =
    ListMultipartUploadsBuilder<((S3Client,), (), (), (), (), (), ())>;

impl S3Api for ListMultipartUploads {
    type S3Response = ListMultipartUploadsResult;
}

impl ToS3Request for ListMultipartUploads {
    fn to_s3request(self) -> Result<S3Request> {
        let params = Params::new()
            .with_opt("prefix", self.prefix)
            .with_opt("delimiter", self.delimiter)
            .with_opt("key-marker", self.key_marker)
            .with_opt("upload-id-marker", self.upload_id_marker)
            .with_opt("max-uploads", self.max_uploads);

        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::ListMultipartUploads)
            .params(with_extra(params, self.extra_params))
            .build())
    }
}

/// Argument builder for the [`CreateMultipartUpload`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CreateMultipartUpload.html) S3 API operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateMultipartUpload {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    key: String,
    #[builder(default, setter(into, strip_option))]
    content_type: Option<String>,
    #[builder(default, setter(into, strip_option))]
    cache_control: Option<String>,
}

/// Builder type alias for [`CreateMultipartUpload`].
pub type CreateMultipartUploadBldr =
    CreateMultipartUploadBuilder<((S3Client,), (), (String,), (), ())>;

impl S3Api for CreateMultipartUpload {
    type S3Response = InitiateMultipartUploadResult;
}

impl ToS3Request for CreateMultipartUpload {
    fn to_s3request(self) -> Result<S3Request> {
        let params = Params::new()
            .with_opt(CONTENT_TYPE, self.content_type)
            .with_opt(CACHE_CONTROL, self.cache_control);

        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::CreateMultipartUpload)
            .key(self.key)
            .params(with_extra(params, self.extra_params))
            .build())
    }
}

/// Argument builder for the [`CompleteMultipartUpload`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CompleteMultipartUpload.html) S3 API operation.
///
/// S3 may answer `200 OK` with an `<Error>` document when assembling the
/// object fails; that answer is returned as an error.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CompleteMultipartUpload {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    key: String,
    #[builder(!default, setter(into))]
    upload_id: String,
    /// Parts in ascending part number order.
    #[builder(!default)]
    parts: Vec<CompletedPart>,
}

/// Builder type alias for [`CompleteMultipartUpload`].
pub type CompleteMultipartUploadBldr = CompleteMultipartUploadBuilder<(
    (S3Client,),
    (),
    (String,),
    (String,),
    (Vec<CompletedPart>,),
)>;

impl S3Api for CompleteMultipartUpload {
    type S3Response = CompleteMultipartUploadResult;
}

impl ToS3Request for CompleteMultipartUpload {
    fn to_s3request(self) -> Result<S3Request> {
        let body = CompleteMultipartUploadRequest { parts: self.parts };
        let params = Params::new().with("uploadId", self.upload_id);

        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::CompleteMultipartUpload)
            .key(self.key)
            .params(with_extra(params, self.extra_params))
            .body(xml_body(ApiName::CompleteMultipartUpload, &body))
            .build())
    }
}

/// Argument builder for the [`AbortMultipartUpload`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_AbortMultipartUpload.html) S3 API operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct AbortMultipartUpload {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    key: String,
    #[builder(!default, setter(into))]
    upload_id: String,
}

/// Builder type alias for [`AbortMultipartUpload`].
pub type AbortMultipartUploadBldr =
    AbortMultipartUploadBuilder<((S3Client,), (), (String,), (String,))>;

impl S3Api for AbortMultipartUpload {
    type S3Response = EmptyResponse;
}

impl ToS3Request for AbortMultipartUpload {
    fn to_s3request(self) -> Result<S3Request> {
        let params = Params::new().with("uploadId", self.upload_id);

        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::AbortMultipartUpload)
            .key(self.key)
            .params(with_extra(params, self.extra_params))
            .build())
    }
}

/// Argument builder for the [`UploadPart`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_UploadPart.html) S3 API operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct UploadPart {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    key: String,
    #[builder(!default, setter(into))]
    upload_id: String,
    /// Part number, `1..=10000`.
    #[builder(!default)]
    part_number: u16,
    #[builder(!default, setter(into))]
    body: Bytes,
}

/// Builder type alias for [`UploadPart`].
pub type UploadPartBldr =
    UploadPartBuilder<((S3Client,), (), (String,), (String,), (u16,), (Bytes,))>;

impl S3Api for UploadPart {
    type S3Response = UploadPartResponse;
}

impl ToS3Request for UploadPart {
    fn to_s3request(self) -> Result<S3Request> {
        let params = Params::new()
            .with("uploadId", self.upload_id)
            .with("partNumber", self.part_number);

        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::UploadPart)
            .key(self.key)
            .params(with_extra(params, self.extra_params))
            .body(Some(self.body))
            .build())
    }
}

/// Argument builder for the [`UploadPartCopy`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_UploadPartCopy.html) S3 API operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct UploadPartCopy {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    key: String,
    #[builder(!default, setter(into))]
    upload_id: String,
    #[builder(!default)]
    part_number: u16,
    /// `/{bucket}/{key}` of the source object.
    #[builder(!default, setter(into))]
    copy_source: String,
    /// `bytes=first-last` of the source to copy.
    #[builder(default, setter(into, strip_option))]
    copy_source_range: Option<String>,
}

/// Builder type alias for [`UploadPartCopy`].
pub type UploadPartCopyBldr =
    UploadPartCopyBuilder<((S3Client,), (), (String,), (String,), (u16,), (String,), ())>;

impl S3Api for UploadPartCopy {
    type S3Response = CopyPartResult;
}

impl ToS3Request for UploadPartCopy {
    fn to_s3request(self) -> Result<S3Request> {
        let params = Params::new()
            .with("uploadId", self.upload_id)
            .with("partNumber", self.part_number)
            .with(X_AMZ_COPY_SOURCE, self.copy_source)
            .with_opt(X_AMZ_COPY_SOURCE_RANGE, self.copy_source_range);

        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::UploadPartCopy)
            .key(self.key)
            .params(with_extra(params, self.extra_params))
            .build())
    }
}

/// Argument builder for the [`ListParts`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListParts.html) S3 API operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListParts {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    key: String,
    #[builder(!default, setter(into))]
    upload_id: String,
    #[builder(default, setter(into, strip_option))]
    max_parts: Option<u32>,
    #[builder(default, setter(into, strip_option))]
    part_number_marker: Option<u32>,
}

/// Builder type alias for [`ListParts`].
pub type ListPartsBldr = ListPartsBuilder<((S3Client,), (), (String,), (String,), (), ())>;

impl S3Api for ListParts {
    type S3Response = ListPartsResult;
}

impl ToS3Request for ListParts {
    fn to_s3request(self) -> Result<S3Request> {
        let params = Params::new()
            .with("uploadId", self.upload_id)
            .with_opt("max-parts", self.max_parts)
            .with_opt("part-number-marker", self.part_number_marker);

        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::ListParts)
            .key(self.key)
            .params(with_extra(params, self.extra_params))
            .build())
    }
}
