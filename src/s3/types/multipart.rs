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

//! Multipart upload models

use super::common::{Checksums, CommonPrefix, Owner, parse_date};
use crate::s3::error::Result;
use crate::s3::utils::UtcTime;
use crate::s3::xml::{FromXml, ToXml, XmlNode};

fn trim_quotes(etag: &str) -> String {
    etag.trim_matches('"').to_string()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Initiator {
    pub id: Option<String>,
    pub display_name: Option<String>,
}

impl FromXml for Initiator {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Initiator {
            id: node.string("ID"),
            display_name: node.string("DisplayName"),
        })
    }
}

/// An in-progress multipart upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartUpload {
    pub key: Option<String>,
    pub upload_id: Option<String>,
    pub initiated: Option<String>,
    pub storage_class: Option<String>,
    pub initiator: Option<Initiator>,
    pub owner: Option<Owner>,
}

impl MultipartUpload {
    pub fn initiated_utc(&self) -> Result<Option<UtcTime>> {
        parse_date(self.initiated.as_deref())
    }
}

impl FromXml for MultipartUpload {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(MultipartUpload {
            key: node.string("Key"),
            upload_id: node.string("UploadId"),
            initiated: node.string("Initiated"),
            storage_class: node.string("StorageClass"),
            initiator: node.decode("Initiator")?,
            owner: node.decode("Owner")?,
        })
    }
}

/// Payload of `ListMultipartUploadsResult`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListMultipartUploadsResult {
    pub bucket: Option<String>,
    pub key_marker: Option<String>,
    pub upload_id_marker: Option<String>,
    pub next_key_marker: Option<String>,
    pub next_upload_id_marker: Option<String>,
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    pub max_uploads: Option<u32>,
    pub is_truncated: bool,
    pub uploads: Vec<MultipartUpload>,
    pub common_prefixes: Vec<CommonPrefix>,
}

impl FromXml for ListMultipartUploadsResult {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(ListMultipartUploadsResult {
            bucket: node.string("Bucket"),
            key_marker: node.string("KeyMarker"),
            upload_id_marker: node.string("UploadIdMarker"),
            next_key_marker: node.string("NextKeyMarker"),
            next_upload_id_marker: node.string("NextUploadIdMarker"),
            prefix: node.string("Prefix"),
            delimiter: node.string("Delimiter"),
            max_uploads: node.parse("MaxUploads")?,
            is_truncated: node.parse("IsTruncated")?.unwrap_or(false),
            uploads: node.decode_all("Upload")?,
            common_prefixes: node.decode_all("CommonPrefixes")?,
        })
    }
}

/// Payload of `InitiateMultipartUploadResult`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InitiateMultipartUploadResult {
    pub bucket: Option<String>,
    pub key: String,
    pub upload_id: String,
}

impl FromXml for InitiateMultipartUploadResult {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(InitiateMultipartUploadResult {
            bucket: node.string("Bucket"),
            key: node.required("Key")?,
            upload_id: node.required("UploadId")?,
        })
    }
}

/// A part as listed in a CompleteMultipartUpload request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletedPart {
    pub part_number: u16,
    pub etag: String,
    pub checksums: Checksums,
}

impl CompletedPart {
    pub fn new(part_number: u16, etag: impl Into<String>) -> Self {
        CompletedPart {
            part_number,
            etag: etag.into(),
            checksums: Checksums::default(),
        }
    }
}

/// Body of a CompleteMultipartUpload request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompleteMultipartUploadRequest {
    pub parts: Vec<CompletedPart>,
}

impl ToXml for CompleteMultipartUploadRequest {
    fn to_xml(&self) -> XmlNode {
        let parts = self.parts.iter().map(|p| {
            let node = p.checksums.append_to(XmlNode::new().with_text("ETag", &p.etag));
            node.with_text("PartNumber", p.part_number)
        });
        XmlNode::new().with_all("Part", parts)
    }
}

/// Payload of `CompleteMultipartUploadResult`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompleteMultipartUploadResult {
    pub location: Option<String>,
    pub bucket: Option<String>,
    pub key: Option<String>,
    pub etag: Option<String>,
    pub checksums: Checksums,
}

impl FromXml for CompleteMultipartUploadResult {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(CompleteMultipartUploadResult {
            location: node.string("Location"),
            bucket: node.string("Bucket"),
            key: node.string("Key"),
            etag: node.text("ETag").map(trim_quotes),
            checksums: Checksums::from_xml(node)?,
        })
    }
}

/// Payload of `CopyPartResult`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyPartResult {
    pub etag: Option<String>,
    pub last_modified: Option<String>,
    pub checksums: Checksums,
}

impl FromXml for CopyPartResult {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(CopyPartResult {
            etag: node.text("ETag").map(trim_quotes),
            last_modified: node.string("LastModified"),
            checksums: Checksums::from_xml(node)?,
        })
    }
}

/// Response of UploadPart, read from its headers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadPartResponse {
    pub part_number: u16,
    pub etag: Option<String>,
}

impl UploadPartResponse {
    /// The entry to list for this part when completing the upload.
    pub fn to_part(&self) -> Option<CompletedPart> {
        self.etag
            .as_ref()
            .map(|etag| CompletedPart::new(self.part_number, etag.clone()))
    }
}

/// A stored part of a multipart upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Part {
    pub part_number: Option<u16>,
    pub etag: Option<String>,
    pub last_modified: Option<String>,
    pub size: Option<u64>,
    pub checksums: Checksums,
}

impl FromXml for Part {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Part {
            part_number: node.parse("PartNumber")?,
            etag: node.text("ETag").map(trim_quotes),
            last_modified: node.string("LastModified"),
            size: node.parse("Size")?,
            checksums: Checksums::from_xml(node)?,
        })
    }
}

/// Payload of `ListPartsResult`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListPartsResult {
    pub bucket: Option<String>,
    pub key: Option<String>,
    pub upload_id: Option<String>,
    pub part_number_marker: Option<u32>,
    pub next_part_number_marker: Option<u32>,
    pub max_parts: Option<u32>,
    pub is_truncated: bool,
    pub storage_class: Option<String>,
    pub initiator: Option<Initiator>,
    pub owner: Option<Owner>,
    pub parts: Vec<Part>,
}

impl FromXml for ListPartsResult {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(ListPartsResult {
            bucket: node.string("Bucket"),
            key: node.string("Key"),
            upload_id: node.string("UploadId"),
            part_number_marker: node.parse("PartNumberMarker")?,
            next_part_number_marker: node.parse("NextPartNumberMarker")?,
            max_parts: node.parse("MaxParts")?,
            is_truncated: node.parse("IsTruncated")?.unwrap_or(false),
            storage_class: node.string("StorageClass"),
            initiator: node.decode("Initiator")?,
            owner: node.decode("Owner")?,
            parts: node.decode_all("Part")?,
        })
    }
}
