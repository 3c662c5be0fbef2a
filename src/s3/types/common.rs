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

//! Models shared by several operations

use crate::s3::error::Result;
use crate::s3::utils::{UtcTime, from_iso8601utc};
use crate::s3::xml::{FromXml, ToXml, XmlNode};

/// Parses an optional ISO-8601 date field.
pub(crate) fn parse_date(value: Option<&str>) -> Result<Option<UtcTime>> {
    Ok(value.map(from_iso8601utc).transpose()?)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Owner {
    pub display_name: Option<String>,
    pub id: Option<String>,
}

impl FromXml for Owner {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Owner {
            display_name: node.string("DisplayName"),
            id: node.string("ID"),
        })
    }
}

/// Additional checksums S3 reports for objects and parts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Checksums {
    pub crc32: Option<String>,
    pub crc32c: Option<String>,
    pub sha1: Option<String>,
    pub sha256: Option<String>,
}

impl Checksums {
    pub fn is_empty(&self) -> bool {
        self.crc32.is_none() && self.crc32c.is_none() && self.sha1.is_none() && self.sha256.is_none()
    }

    pub(crate) fn append_to(&self, node: XmlNode) -> XmlNode {
        node.with_opt_text("ChecksumCRC32", self.crc32.as_deref())
            .with_opt_text("ChecksumCRC32C", self.crc32c.as_deref())
            .with_opt_text("ChecksumSHA1", self.sha1.as_deref())
            .with_opt_text("ChecksumSHA256", self.sha256.as_deref())
    }
}

impl FromXml for Checksums {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Checksums {
            crc32: node.string("ChecksumCRC32"),
            crc32c: node.string("ChecksumCRC32C"),
            sha1: node.string("ChecksumSHA1"),
            sha256: node.string("ChecksumSHA256"),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RestoreStatus {
    pub is_restore_in_progress: Option<bool>,
    pub restore_expiry_date: Option<String>,
}

impl RestoreStatus {
    pub fn restore_expiry_date_utc(&self) -> Result<Option<UtcTime>> {
        parse_date(self.restore_expiry_date.as_deref())
    }
}

impl FromXml for RestoreStatus {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(RestoreStatus {
            is_restore_in_progress: node.parse("IsRestoreInProgress")?,
            restore_expiry_date: node.string("RestoreExpiryDate"),
        })
    }
}

/// Entry of an object listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Object {
    pub key: Option<String>,
    pub etag: Option<String>,
    /// ISO-8601 date as sent by the server
    pub last_modified: Option<String>,
    pub size: Option<u64>,
    pub storage_class: Option<String>,
    pub owner: Option<Owner>,
    pub checksum_algorithm: Vec<String>,
    pub restore_status: Option<RestoreStatus>,
}

impl Object {
    pub fn last_modified_utc(&self) -> Result<Option<UtcTime>> {
        parse_date(self.last_modified.as_deref())
    }
}

impl FromXml for Object {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Object {
            key: node.string("Key"),
            etag: node.string("ETag"),
            last_modified: node.string("LastModified"),
            size: node.parse("Size")?,
            storage_class: node.string("StorageClass"),
            owner: node.decode("Owner")?,
            checksum_algorithm: node.texts("ChecksumAlgorithm"),
            restore_status: node.decode("RestoreStatus")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommonPrefix {
    pub prefix: Option<String>,
}

impl FromXml for CommonPrefix {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(CommonPrefix {
            prefix: node.string("Prefix"),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl FromXml for Tag {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Tag {
            key: node.string("Key").unwrap_or_default(),
            value: node.string("Value").unwrap_or_default(),
        })
    }
}

impl ToXml for Tag {
    fn to_xml(&self) -> XmlNode {
        XmlNode::new()
            .with_text("Key", &self.key)
            .with_text("Value", &self.value)
    }
}
