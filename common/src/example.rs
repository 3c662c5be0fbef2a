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

use s3_typed::s3::types::{
    CorsConfiguration, CorsRule, Expiration, LifecycleConfiguration, LifecycleFilter,
    LifecycleRule,
};

pub fn create_bucket_cors_config_example() -> CorsConfiguration {
    CorsConfiguration {
        rules: vec![
            CorsRule {
                id: Some(String::from("web")),
                allowed_methods: vec![String::from("GET"), String::from("HEAD")],
                allowed_origins: vec![String::from("https://www.example.com")],
                allowed_headers: vec![String::from("*")],
                expose_headers: vec![String::from("ETag")],
                max_age_seconds: Some(3000),
            },
            CorsRule {
                id: None,
                allowed_methods: vec![String::from("PUT")],
                allowed_origins: vec![String::from("*")],
                allowed_headers: vec![],
                expose_headers: vec![],
                max_age_seconds: None,
            },
        ],
    }
}

pub fn create_bucket_lifecycle_config_example() -> LifecycleConfiguration {
    LifecycleConfiguration {
        rules: vec![LifecycleRule {
            id: Some(String::from("rule1")),
            status: String::from("Enabled"),
            filter: Some(LifecycleFilter {
                prefix: Some(String::from("logs/")),
                ..Default::default()
            }),
            expiration: Some(Expiration {
                days: Some(365),
                ..Default::default()
            }),
            ..Default::default()
        }],
    }
}

/// A `<ListBucketResult>` body holding `keys`, as a version 2 listing.
pub fn list_v2_body(keys: &[&str], next_token: Option<&str>) -> String {
    let mut body = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<ListBucketResult>");
    body.push_str("<Name>examplebucket</Name>");
    body.push_str(&format!("<KeyCount>{}</KeyCount>", keys.len()));
    body.push_str(&format!("<IsTruncated>{}</IsTruncated>", next_token.is_some()));
    if let Some(t) = next_token {
        body.push_str(&format!("<NextContinuationToken>{t}</NextContinuationToken>"));
    }
    for k in keys {
        body.push_str(&format!(
            "<Contents><Key>{k}</Key><ETag>&quot;abc&quot;</ETag><Size>11</Size></Contents>"
        ));
    }
    body.push_str("</ListBucketResult>");
    body
}

pub const ACCESS_DENIED_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>AccessDenied</Code><Message>Access Denied</Message><RequestId>656c76696e6727732072657175657374</RequestId></Error>"#;
