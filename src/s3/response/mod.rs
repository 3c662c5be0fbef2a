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

//! Conversion of successful HTTP responses into the typed models
//!
//! XML payloads are located by the envelope element named in the operation
//! descriptor. A 2xx response whose body is an `<Error>` document (S3 does
//! this for CompleteMultipartUpload and CopyObject) is reported as a failed
//! exchange, the same as a non-2xx status.

use crate::s3::error::{ApiError, Error, Result};
use crate::s3::header_constants::ETAG;
use crate::s3::operation::Body;
use crate::s3::transport::HttpResponse;
use crate::s3::types::*;
use crate::s3::xml::{self, FromXml, XmlNode, XmlValue};

/// Parses the body and returns the content of the response envelope.
fn envelope(req: &S3Request, resp: &HttpResponse) -> Result<XmlValue> {
    let op = req.operation();
    let Body::Xml(name) = op.response_body else {
        return Err(Error::Xml(format!("{} has no XML response", op.name)));
    };

    let text = resp.text()?;
    let mut doc: XmlNode = xml::parse(&text)?;
    if name != "Error" && doc.get("Error").is_some() {
        log::warn!("{} {} returned an error document", op.method, req.display_path());
        return Err(Error::api(ApiError::new(
            op.method.clone(),
            req.display_path(),
            resp.status.as_u16(),
            text,
        )));
    }
    doc.remove(name)
        .ok_or_else(|| Error::Xml(format!("<{name}> tag not found")))
}

/// Decodes the XML model carried by a successful response.
pub(crate) fn decode_xml<T: FromXml>(req: &S3Request, resp: &HttpResponse) -> Result<T> {
    envelope(req, resp)?.decode()
}

/// Implements the `FromS3Response` trait for XML payload models.
macro_rules! impl_from_xml_response {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::s3::types::FromS3Response for $ty {
                fn from_s3response(
                    req: &$crate::s3::types::S3Request,
                    resp: $crate::s3::transport::HttpResponse,
                ) -> $crate::s3::error::Result<Self> {
                    decode_xml(req, &resp)
                }
            }
        )*
    };
}

impl_from_xml_response!(
    ListBucketsResult,
    CorsConfiguration,
    LifecycleConfiguration,
    ServerSideEncryptionConfiguration,
    ListObjectsResult,
    ListObjectsV2Result,
    DeleteObjectsResult,
    CopyObjectResult,
    ListMultipartUploadsResult,
    InitiateMultipartUploadResult,
    CompleteMultipartUploadResult,
    CopyPartResult,
    ListPartsResult,
);

impl FromS3Response for BucketLocation {
    fn from_s3response(req: &S3Request, resp: HttpResponse) -> Result<Self> {
        Ok(BucketLocation::from_value(&envelope(req, &resp)?))
    }
}

impl FromS3Response for EmptyResponse {
    fn from_s3response(_req: &S3Request, resp: HttpResponse) -> Result<Self> {
        Ok(EmptyResponse {
            headers: resp.headers,
        })
    }
}

impl FromS3Response for ObjectMeta {
    fn from_s3response(_req: &S3Request, resp: HttpResponse) -> Result<Self> {
        Ok(ObjectMeta::from_response(&resp))
    }
}

impl FromS3Response for GetObjectResponse {
    fn from_s3response(_req: &S3Request, resp: HttpResponse) -> Result<Self> {
        Ok(GetObjectResponse {
            meta: ObjectMeta::from_response(&resp),
            body: resp.body,
        })
    }
}

impl FromS3Response for PutObjectResponse {
    fn from_s3response(_req: &S3Request, resp: HttpResponse) -> Result<Self> {
        let meta = ObjectMeta::from_response(&resp);
        Ok(PutObjectResponse {
            etag: meta.etag(),
            version_id: meta.version_id().map(String::from),
        })
    }
}

impl FromS3Response for UploadPartResponse {
    fn from_s3response(req: &S3Request, resp: HttpResponse) -> Result<Self> {
        let part_number = req
            .params()
            .get("partNumber")
            .and_then(|v| v.to_string().parse().ok())
            .unwrap_or_default();
        Ok(UploadPartResponse {
            part_number,
            etag: resp.header(ETAG).map(|v| v.trim_matches('"').to_string()),
        })
    }
}
