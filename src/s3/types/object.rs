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

//! Object-level models, including the ones read from response headers

use super::common::{Checksums, CommonPrefix, Object, parse_date};
use crate::s3::error::Result;
use crate::s3::header_constants::*;
use crate::s3::transport::HttpResponse;
use crate::s3::utils::{UtcTime, from_http_header_value};
use crate::s3::xml::{FromXml, ToXml, XmlNode};
use bytes::Bytes;
use http::HeaderMap;
use serde::de::DeserializeOwned;

fn trim_quotes(etag: &str) -> String {
    etag.trim_matches('"').to_string()
}

/// Payload of `ListBucketResult` for the version 1 listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListObjectsResult {
    pub name: Option<String>,
    pub prefix: Option<String>,
    pub marker: Option<String>,
    pub next_marker: Option<String>,
    pub delimiter: Option<String>,
    pub max_keys: Option<u32>,
    pub encoding_type: Option<String>,
    pub is_truncated: bool,
    pub contents: Vec<Object>,
    pub common_prefixes: Vec<CommonPrefix>,
}

impl FromXml for ListObjectsResult {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(ListObjectsResult {
            name: node.string("Name"),
            prefix: node.string("Prefix"),
            marker: node.string("Marker"),
            next_marker: node.string("NextMarker"),
            delimiter: node.string("Delimiter"),
            max_keys: node.parse("MaxKeys")?,
            encoding_type: node.string("EncodingType"),
            is_truncated: node.parse("IsTruncated")?.unwrap_or(false),
            contents: node.decode_all("Contents")?,
            common_prefixes: node.decode_all("CommonPrefixes")?,
        })
    }
}

/// Payload of `ListBucketResult` for the version 2 listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListObjectsV2Result {
    pub name: Option<String>,
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    pub max_keys: Option<u32>,
    pub key_count: Option<u32>,
    pub encoding_type: Option<String>,
    pub is_truncated: bool,
    pub continuation_token: Option<String>,
    pub next_continuation_token: Option<String>,
    pub start_after: Option<String>,
    pub contents: Vec<Object>,
    pub common_prefixes: Vec<CommonPrefix>,
}

impl FromXml for ListObjectsV2Result {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(ListObjectsV2Result {
            name: node.string("Name"),
            prefix: node.string("Prefix"),
            delimiter: node.string("Delimiter"),
            max_keys: node.parse("MaxKeys")?,
            key_count: node.parse("KeyCount")?,
            encoding_type: node.string("EncodingType"),
            is_truncated: node.parse("IsTruncated")?.unwrap_or(false),
            continuation_token: node.string("ContinuationToken"),
            next_continuation_token: node.string("NextContinuationToken"),
            start_after: node.string("StartAfter"),
            contents: node.decode_all("Contents")?,
            common_prefixes: node.decode_all("CommonPrefixes")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectIdentifier {
    pub key: String,
    pub version_id: Option<String>,
}

impl ObjectIdentifier {
    pub fn new(key: impl Into<String>) -> Self {
        ObjectIdentifier {
            key: key.into(),
            version_id: None,
        }
    }

    pub fn with_version(key: impl Into<String>, version_id: impl Into<String>) -> Self {
        ObjectIdentifier {
            key: key.into(),
            version_id: Some(version_id.into()),
        }
    }
}

impl From<&str> for ObjectIdentifier {
    fn from(key: &str) -> Self {
        ObjectIdentifier::new(key)
    }
}

impl From<String> for ObjectIdentifier {
    fn from(key: String) -> Self {
        ObjectIdentifier::new(key)
    }
}

/// Body of a DeleteObjects request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteObjectsRequest {
    pub objects: Vec<ObjectIdentifier>,
    /// Only failures are reported back when set.
    pub quiet: bool,
}

impl ToXml for DeleteObjectsRequest {
    fn to_xml(&self) -> XmlNode {
        let objects = self.objects.iter().map(|o| {
            XmlNode::new()
                .with_text("Key", &o.key)
                .with_opt_text("VersionId", o.version_id.as_deref())
        });
        XmlNode::new()
            .with_all("Object", objects)
            .with_opt_text("Quiet", self.quiet.then_some(true))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeletedObject {
    pub key: Option<String>,
    pub version_id: Option<String>,
    pub delete_marker: Option<bool>,
    pub delete_marker_version_id: Option<String>,
}

impl FromXml for DeletedObject {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(DeletedObject {
            key: node.string("Key"),
            version_id: node.string("VersionId"),
            delete_marker: node.parse("DeleteMarker")?,
            delete_marker_version_id: node.string("DeleteMarkerVersionId"),
        })
    }
}

/// Per-key failure inside an otherwise successful DeleteObjects response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteError {
    pub key: Option<String>,
    pub version_id: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
}

impl FromXml for DeleteError {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(DeleteError {
            key: node.string("Key"),
            version_id: node.string("VersionId"),
            code: node.string("Code"),
            message: node.string("Message"),
        })
    }
}

/// Payload of `DeleteResult`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteObjectsResult {
    pub deleted: Vec<DeletedObject>,
    pub errors: Vec<DeleteError>,
}

impl FromXml for DeleteObjectsResult {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        let mut errors: Vec<DeleteError> = node.decode_all("Error")?;
        // some S3 implementations use the plural element name
        errors.extend(node.decode_all::<DeleteError>("Errors")?);
        Ok(DeleteObjectsResult {
            deleted: node.decode_all("Deleted")?,
            errors,
        })
    }
}

/// Payload of `CopyObjectResult`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyObjectResult {
    pub etag: Option<String>,
    pub last_modified: Option<String>,
    pub checksums: Checksums,
}

impl CopyObjectResult {
    pub fn last_modified_utc(&self) -> Result<Option<UtcTime>> {
        parse_date(self.last_modified.as_deref())
    }
}

impl FromXml for CopyObjectResult {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(CopyObjectResult {
            etag: node.text("ETag").map(trim_quotes),
            last_modified: node.string("LastModified"),
            checksums: Checksums::from_xml(node)?,
        })
    }
}

/// Object metadata carried by response headers.
#[derive(Clone, Debug, Default)]
pub struct ObjectMeta {
    pub headers: HeaderMap,
}

impl ObjectMeta {
    pub(crate) fn from_response(resp: &HttpResponse) -> Self {
        ObjectMeta {
            headers: resp.headers.clone(),
        }
    }

    /// Value of a response header, if it is valid text.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Entity tag without its surrounding quotes.
    pub fn etag(&self) -> Option<String> {
        self.header(ETAG).map(trim_quotes)
    }

    pub fn content_length(&self) -> Option<u64> {
        self.header(CONTENT_LENGTH).and_then(|v| v.parse().ok())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE)
    }

    pub fn version_id(&self) -> Option<&str> {
        self.header(X_AMZ_VERSION_ID)
    }

    pub fn last_modified(&self) -> Result<Option<UtcTime>> {
        match self.header(LAST_MODIFIED) {
            Some(v) => Ok(Some(from_http_header_value(v)?)),
            None => Ok(None),
        }
    }

    /// User metadata, `x-amz-meta-*` headers with the prefix removed.
    pub fn user_metadata(&self) -> Vec<(String, String)> {
        self.headers
            .iter()
            .filter_map(|(k, v)| {
                let name = k.as_str().strip_prefix("x-amz-meta-")?;
                Some((name.to_string(), v.to_str().ok()?.to_string()))
            })
            .collect()
    }
}

/// Response of GetObject: the headers plus the raw content.
#[derive(Clone, Debug, Default)]
pub struct GetObjectResponse {
    pub meta: ObjectMeta,
    pub body: Bytes,
}

impl GetObjectResponse {
    pub fn bytes(&self) -> Bytes {
        self.body.clone()
    }

    pub fn text(&self) -> Result<String> {
        Ok(String::from_utf8(self.body.to_vec())?)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Response of PutObject.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PutObjectResponse {
    pub etag: Option<String>,
    pub version_id: Option<String>,
}

/// Response of operations whose body carries nothing of interest.
#[derive(Clone, Debug, Default)]
pub struct EmptyResponse {
    pub headers: HeaderMap,
}
