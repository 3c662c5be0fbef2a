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

//! Bucket-level models

use super::common::{Owner, Tag, parse_date};
use crate::s3::client::DEFAULT_REGION;
use crate::s3::error::Result;
use crate::s3::utils::UtcTime;
use crate::s3::xml::{FromXml, ToXml, XmlNode, XmlValue};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Contains the bucket name and creation date
pub struct Bucket {
    pub name: Option<String>,
    pub creation_date: Option<String>,
}

impl Bucket {
    pub fn creation_date_utc(&self) -> Result<Option<UtcTime>> {
        parse_date(self.creation_date.as_deref())
    }
}

impl FromXml for Bucket {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Bucket {
            name: node.string("Name"),
            creation_date: node.string("CreationDate"),
        })
    }
}

/// Payload of `ListAllMyBucketsResult`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListBucketsResult {
    pub buckets: Vec<Bucket>,
    pub owner: Option<Owner>,
}

impl FromXml for ListBucketsResult {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        let buckets = match node.child("Buckets") {
            Some(b) => b.decode_all("Bucket")?,
            None => Vec::new(),
        };
        Ok(ListBucketsResult {
            buckets,
            owner: node.decode("Owner")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationInfo {
    pub name: Option<String>,
    pub location_type: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BucketInfo {
    pub data_redundancy: Option<String>,
    pub bucket_type: Option<String>,
}

/// Body of a CreateBucket request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateBucketConfiguration {
    pub location_constraint: Option<String>,
    pub location: Option<LocationInfo>,
    pub bucket: Option<BucketInfo>,
}

impl ToXml for CreateBucketConfiguration {
    fn to_xml(&self) -> XmlNode {
        let location = self.location.as_ref().map(|l| {
            XmlNode::new()
                .with_opt_text("Name", l.name.as_deref())
                .with_opt_text("Type", l.location_type.as_deref())
        });
        let bucket = self.bucket.as_ref().map(|b| {
            XmlNode::new()
                .with_opt_text("DataRedundancy", b.data_redundancy.as_deref())
                .with_opt_text("Type", b.bucket_type.as_deref())
        });
        XmlNode::new()
            .with_opt_text("LocationConstraint", self.location_constraint.as_deref())
            .with_opt_node("Location", location)
            .with_opt_node("Bucket", bucket)
    }
}

/// Payload of `LocationConstraint`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BucketLocation {
    /// `None` when S3 returned an empty constraint.
    pub location_constraint: Option<String>,
}

impl BucketLocation {
    /// Region of the bucket; an empty constraint means `us-east-1`.
    pub fn region(&self) -> &str {
        self.location_constraint.as_deref().unwrap_or(DEFAULT_REGION)
    }

    pub(crate) fn from_value(value: &XmlValue) -> Self {
        let location_constraint = match value {
            XmlValue::Text(t) => Some(t.clone()),
            XmlValue::Node(n) => n.string("LocationConstraint"),
            XmlValue::List(_) => None,
        };
        BucketLocation {
            location_constraint: location_constraint.filter(|l| !l.is_empty()),
        }
    }
}

/// One CORS rule. Every multi-valued field is a sequence, whether the
/// document held one occurrence or many.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsRule {
    pub id: Option<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_origins: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    pub max_age_seconds: Option<u32>,
}

impl FromXml for CorsRule {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(CorsRule {
            id: node.string("ID"),
            allowed_methods: node.texts("AllowedMethod"),
            allowed_origins: node.texts("AllowedOrigin"),
            allowed_headers: node.texts("AllowedHeader"),
            expose_headers: node.texts("ExposeHeader"),
            max_age_seconds: node.parse("MaxAgeSeconds")?,
        })
    }
}

impl ToXml for CorsRule {
    fn to_xml(&self) -> XmlNode {
        XmlNode::new()
            .with_opt_text("ID", self.id.as_deref())
            .with_all("AllowedHeader", self.allowed_headers.iter().map(String::as_str))
            .with_all("AllowedMethod", self.allowed_methods.iter().map(String::as_str))
            .with_all("AllowedOrigin", self.allowed_origins.iter().map(String::as_str))
            .with_all("ExposeHeader", self.expose_headers.iter().map(String::as_str))
            .with_opt_text("MaxAgeSeconds", self.max_age_seconds)
    }
}

/// Payload of `CORSConfiguration`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfiguration {
    pub rules: Vec<CorsRule>,
}

impl FromXml for CorsConfiguration {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(CorsConfiguration {
            rules: node.decode_all("CORSRule")?,
        })
    }
}

impl ToXml for CorsConfiguration {
    fn to_xml(&self) -> XmlNode {
        XmlNode::new().with_all("CORSRule", self.rules.iter().map(|r| r.to_xml()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LifecycleAnd {
    pub prefix: Option<String>,
    pub tags: Vec<Tag>,
    pub object_size_greater_than: Option<u64>,
    pub object_size_less_than: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LifecycleFilter {
    pub prefix: Option<String>,
    pub tag: Option<Tag>,
    pub object_size_greater_than: Option<u64>,
    pub object_size_less_than: Option<u64>,
    pub and: Option<LifecycleAnd>,
}

impl FromXml for LifecycleFilter {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        let and = match node.child("And") {
            Some(a) => Some(LifecycleAnd {
                prefix: a.string("Prefix"),
                tags: a.decode_all("Tag")?,
                object_size_greater_than: a.parse("ObjectSizeGreaterThan")?,
                object_size_less_than: a.parse("ObjectSizeLessThan")?,
            }),
            None => None,
        };
        Ok(LifecycleFilter {
            prefix: node.string("Prefix"),
            tag: node.decode("Tag")?,
            object_size_greater_than: node.parse("ObjectSizeGreaterThan")?,
            object_size_less_than: node.parse("ObjectSizeLessThan")?,
            and,
        })
    }
}

impl ToXml for LifecycleFilter {
    fn to_xml(&self) -> XmlNode {
        let and = self.and.as_ref().map(|a| {
            XmlNode::new()
                .with_opt_text("Prefix", a.prefix.as_deref())
                .with_all("Tag", a.tags.iter().map(|t| t.to_xml()))
                .with_opt_text("ObjectSizeGreaterThan", a.object_size_greater_than)
                .with_opt_text("ObjectSizeLessThan", a.object_size_less_than)
        });
        XmlNode::new()
            .with_opt_text("Prefix", self.prefix.as_deref())
            .with_opt_node("Tag", self.tag.as_ref().map(|t| t.to_xml()))
            .with_opt_text("ObjectSizeGreaterThan", self.object_size_greater_than)
            .with_opt_text("ObjectSizeLessThan", self.object_size_less_than)
            .with_opt_node("And", and)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expiration {
    pub days: Option<u32>,
    pub date: Option<String>,
    pub expired_object_delete_marker: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub days: Option<u32>,
    pub date: Option<String>,
    pub storage_class: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoncurrentVersionTransition {
    pub noncurrent_days: Option<u32>,
    pub newer_noncurrent_versions: Option<u32>,
    pub storage_class: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoncurrentVersionExpiration {
    pub noncurrent_days: Option<u32>,
    pub newer_noncurrent_versions: Option<u32>,
}

/// One lifecycle rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LifecycleRule {
    pub id: Option<String>,
    /// `Enabled` or `Disabled`
    pub status: String,
    pub filter: Option<LifecycleFilter>,
    /// Rule-level prefix, superseded by `filter`
    pub prefix: Option<String>,
    pub expiration: Option<Expiration>,
    pub transitions: Vec<Transition>,
    pub noncurrent_version_transitions: Vec<NoncurrentVersionTransition>,
    pub noncurrent_version_expiration: Option<NoncurrentVersionExpiration>,
    pub abort_incomplete_multipart_upload_days: Option<u32>,
}

impl FromXml for LifecycleRule {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        let expiration = match node.child("Expiration") {
            Some(e) => Some(Expiration {
                days: e.parse("Days")?,
                date: e.string("Date"),
                expired_object_delete_marker: e.parse("ExpiredObjectDeleteMarker")?,
            }),
            None => None,
        };

        let mut transitions = Vec::new();
        for t in node.all("Transition").iter().filter_map(XmlValue::as_node) {
            transitions.push(Transition {
                days: t.parse("Days")?,
                date: t.string("Date"),
                storage_class: t.string("StorageClass"),
            });
        }

        let mut noncurrent_version_transitions = Vec::new();
        for t in node
            .all("NoncurrentVersionTransition")
            .iter()
            .filter_map(XmlValue::as_node)
        {
            noncurrent_version_transitions.push(NoncurrentVersionTransition {
                noncurrent_days: t.parse("NoncurrentDays")?,
                newer_noncurrent_versions: t.parse("NewerNoncurrentVersions")?,
                storage_class: t.string("StorageClass"),
            });
        }

        let noncurrent_version_expiration = match node.child("NoncurrentVersionExpiration") {
            Some(e) => Some(NoncurrentVersionExpiration {
                noncurrent_days: e.parse("NoncurrentDays")?,
                newer_noncurrent_versions: e.parse("NewerNoncurrentVersions")?,
            }),
            None => None,
        };

        let abort_incomplete_multipart_upload_days = match node.child("AbortIncompleteMultipartUpload") {
            Some(a) => a.parse("DaysAfterInitiation")?,
            None => None,
        };

        Ok(LifecycleRule {
            id: node.string("ID"),
            status: node.string("Status").unwrap_or_default(),
            filter: node.decode("Filter")?,
            prefix: node.string("Prefix"),
            expiration,
            transitions,
            noncurrent_version_transitions,
            noncurrent_version_expiration,
            abort_incomplete_multipart_upload_days,
        })
    }
}

impl ToXml for LifecycleRule {
    fn to_xml(&self) -> XmlNode {
        let expiration = self.expiration.as_ref().map(|e| {
            XmlNode::new()
                .with_opt_text("Date", e.date.as_deref())
                .with_opt_text("Days", e.days)
                .with_opt_text("ExpiredObjectDeleteMarker", e.expired_object_delete_marker)
        });
        let transitions = self.transitions.iter().map(|t| {
            XmlNode::new()
                .with_opt_text("Date", t.date.as_deref())
                .with_opt_text("Days", t.days)
                .with_opt_text("StorageClass", t.storage_class.as_deref())
        });
        let noncurrent_transitions = self.noncurrent_version_transitions.iter().map(|t| {
            XmlNode::new()
                .with_opt_text("NewerNoncurrentVersions", t.newer_noncurrent_versions)
                .with_opt_text("NoncurrentDays", t.noncurrent_days)
                .with_opt_text("StorageClass", t.storage_class.as_deref())
        });
        let noncurrent_expiration = self.noncurrent_version_expiration.as_ref().map(|e| {
            XmlNode::new()
                .with_opt_text("NewerNoncurrentVersions", e.newer_noncurrent_versions)
                .with_opt_text("NoncurrentDays", e.noncurrent_days)
        });
        let abort = self
            .abort_incomplete_multipart_upload_days
            .map(|d| XmlNode::new().with_text("DaysAfterInitiation", d));

        XmlNode::new()
            .with_opt_node("AbortIncompleteMultipartUpload", abort)
            .with_opt_node("Expiration", expiration)
            .with_opt_node("Filter", self.filter.as_ref().map(|f| f.to_xml()))
            .with_opt_text("ID", self.id.as_deref())
            .with_opt_node("NoncurrentVersionExpiration", noncurrent_expiration)
            .with_all("NoncurrentVersionTransition", noncurrent_transitions)
            .with_opt_text("Prefix", self.prefix.as_deref())
            .with_text("Status", &self.status)
            .with_all("Transition", transitions)
    }
}

/// Payload of `LifecycleConfiguration`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LifecycleConfiguration {
    pub rules: Vec<LifecycleRule>,
}

impl FromXml for LifecycleConfiguration {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(LifecycleConfiguration {
            rules: node.decode_all("Rule")?,
        })
    }
}

impl ToXml for LifecycleConfiguration {
    fn to_xml(&self) -> XmlNode {
        XmlNode::new().with_all("Rule", self.rules.iter().map(|r| r.to_xml()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SseRule {
    pub sse_algorithm: Option<String>,
    pub kms_master_key_id: Option<String>,
    pub bucket_key_enabled: Option<bool>,
}

impl FromXml for SseRule {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        let default = node.child("ApplyServerSideEncryptionByDefault");
        Ok(SseRule {
            sse_algorithm: default.and_then(|d| d.string("SSEAlgorithm")),
            kms_master_key_id: default.and_then(|d| d.string("KMSMasterKeyID")),
            bucket_key_enabled: node.parse("BucketKeyEnabled")?,
        })
    }
}

/// Payload of `ServerSideEncryptionConfiguration`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerSideEncryptionConfiguration {
    pub rules: Vec<SseRule>,
}

impl FromXml for ServerSideEncryptionConfiguration {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(ServerSideEncryptionConfiguration {
            rules: node.decode_all("Rule")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::xml::{parse, serialize};

    fn decode<T: FromXml>(text: &str, envelope: &str) -> T {
        parse(text).unwrap().get(envelope).unwrap().decode().unwrap()
    }

    #[test]
    fn test_cors_round_trip_keeps_rule_order() {
        let config = CorsConfiguration {
            rules: vec![
                CorsRule {
                    id: Some("web".into()),
                    allowed_methods: vec!["GET".into(), "HEAD".into()],
                    allowed_origins: vec!["https://example.com".into()],
                    max_age_seconds: Some(3000),
                    ..Default::default()
                },
                CorsRule {
                    allowed_methods: vec!["PUT".into()],
                    allowed_origins: vec!["*".into()],
                    allowed_headers: vec!["*".into()],
                    expose_headers: vec!["ETag".into()],
                    ..Default::default()
                },
            ],
        };
        let text = serialize("CORSConfiguration", &config.to_xml());
        let parsed: CorsConfiguration = decode(&text, "CORSConfiguration");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_cors_single_rule_single_origin() {
        let parsed: CorsConfiguration = decode(
            "<CORSConfiguration><CORSRule><AllowedMethod>GET</AllowedMethod>\
             <AllowedOrigin>*</AllowedOrigin></CORSRule></CORSConfiguration>",
            "CORSConfiguration",
        );
        assert_eq!(parsed.rules.len(), 1);
        assert_eq!(parsed.rules[0].allowed_methods, vec!["GET"]);
        assert_eq!(parsed.rules[0].allowed_origins, vec!["*"]);
    }

    #[test]
    fn test_empty_configuration_element() {
        let parsed: CorsConfiguration = decode("<CORSConfiguration/>", "CORSConfiguration");
        assert!(parsed.rules.is_empty());
    }

    #[test]
    fn test_lifecycle_round_trip() {
        let config = LifecycleConfiguration {
            rules: vec![
                LifecycleRule {
                    id: Some("expire-logs".into()),
                    status: "Enabled".into(),
                    filter: Some(LifecycleFilter {
                        and: Some(LifecycleAnd {
                            prefix: Some("logs/".into()),
                            tags: vec![Tag::new("a", "1"), Tag::new("b", "2")],
                            ..Default::default()
                        }),
                        ..Default::default()
                    }),
                    expiration: Some(Expiration {
                        days: Some(30),
                        ..Default::default()
                    }),
                    transitions: vec![
                        Transition {
                            days: Some(7),
                            storage_class: Some("STANDARD_IA".into()),
                            ..Default::default()
                        },
                        Transition {
                            days: Some(14),
                            storage_class: Some("GLACIER".into()),
                            ..Default::default()
                        },
                    ],
                    abort_incomplete_multipart_upload_days: Some(2),
                    ..Default::default()
                },
                LifecycleRule {
                    status: "Disabled".into(),
                    filter: Some(LifecycleFilter {
                        tag: Some(Tag::new("tmp", "yes")),
                        ..Default::default()
                    }),
                    noncurrent_version_expiration: Some(NoncurrentVersionExpiration {
                        noncurrent_days: Some(5),
                        newer_noncurrent_versions: None,
                    }),
                    ..Default::default()
                },
            ],
        };
        let text = serialize("LifecycleConfiguration", &config.to_xml());
        let parsed: LifecycleConfiguration = decode(&text, "LifecycleConfiguration");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_list_buckets_single_and_many() {
        let one: ListBucketsResult = decode(
            "<ListAllMyBucketsResult><Buckets><Bucket><Name>a</Name>\
             <CreationDate>2019-12-11T23:32:47+00:00</CreationDate></Bucket></Buckets>\
             <Owner><ID>o1</ID></Owner></ListAllMyBucketsResult>",
            "ListAllMyBucketsResult",
        );
        assert_eq!(one.buckets.len(), 1);
        assert_eq!(one.owner.unwrap().id.as_deref(), Some("o1"));

        let many: ListBucketsResult = decode(
            "<ListAllMyBucketsResult><Buckets><Bucket><Name>a</Name></Bucket>\
             <Bucket><Name>b</Name></Bucket></Buckets></ListAllMyBucketsResult>",
            "ListAllMyBucketsResult",
        );
        let names: Vec<_> = many.buckets.iter().map(|b| b.name.clone().unwrap()).collect();
        assert_eq!(names, vec!["a", "b"]);

        let none: ListBucketsResult = decode(
            "<ListAllMyBucketsResult><Buckets></Buckets></ListAllMyBucketsResult>",
            "ListAllMyBucketsResult",
        );
        assert!(none.buckets.is_empty());
    }

    #[test]
    fn test_bucket_location() {
        let doc = parse("<LocationConstraint>eu-west-1</LocationConstraint>").unwrap();
        let loc = BucketLocation::from_value(doc.get("LocationConstraint").unwrap());
        assert_eq!(loc.region(), "eu-west-1");

        let doc = parse("<LocationConstraint/>").unwrap();
        let loc = BucketLocation::from_value(doc.get("LocationConstraint").unwrap());
        assert_eq!(loc.location_constraint, None);
        assert_eq!(loc.region(), "us-east-1");
    }

    #[test]
    fn test_encryption_rule() {
        let parsed: ServerSideEncryptionConfiguration = decode(
            "<ServerSideEncryptionConfiguration><Rule><ApplyServerSideEncryptionByDefault>\
             <SSEAlgorithm>aws:kms</SSEAlgorithm><KMSMasterKeyID>k1</KMSMasterKeyID>\
             </ApplyServerSideEncryptionByDefault><BucketKeyEnabled>true</BucketKeyEnabled>\
             </Rule></ServerSideEncryptionConfiguration>",
            "ServerSideEncryptionConfiguration",
        );
        assert_eq!(
            parsed.rules,
            vec![SseRule {
                sse_algorithm: Some("aws:kms".into()),
                kms_master_key_id: Some("k1".into()),
                bucket_key_enabled: Some(true),
            }]
        );
    }
}
