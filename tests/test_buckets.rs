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

use http::Method;
use s3_typed::s3::multimap_ext::MultimapExt;
use s3_typed::s3::types::{
    BucketLocation, CreateBucketConfiguration, LifecycleConfiguration, S3Api,
};
use s3_typed::s3::utils::md5sum_hash;
use s3_typed::s3::xml;
use s3_typed_common::example::create_bucket_lifecycle_config_example;
use s3_typed_common::test_context::TestContext;
use s3_typed_common::utils::init_logger;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn create_bucket_without_configuration_has_no_body() {
    init_logger();
    let ctx = TestContext::new();

    ctx.client.create_bucket().build().send().await.unwrap();

    let req = ctx.transport.last_request().unwrap();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.url.to_string(), format!("{}/", ctx.endpoint()));
    assert!(req.body.is_none());
    assert!(req.headers.get_ignore_case("Content-Type").is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn create_bucket_with_location_constraint() {
    let ctx = TestContext::new();

    ctx.client
        .create_bucket()
        .configuration(CreateBucketConfiguration {
            location_constraint: Some("eu-west-1".to_string()),
            ..Default::default()
        })
        .build()
        .send()
        .await
        .unwrap();

    let req = ctx.transport.last_request().unwrap();
    let body = String::from_utf8(req.body.unwrap().to_vec()).unwrap();
    assert_eq!(
        body,
        "<CreateBucketConfiguration><LocationConstraint>eu-west-1</LocationConstraint></CreateBucketConfiguration>"
    );
    assert_eq!(
        req.headers.get_ignore_case("Content-Type"),
        Some("application/xml")
    );
    assert!(req.headers.get_ignore_case("Content-MD5").is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn head_and_delete_bucket() {
    let ctx = TestContext::new();
    ctx.transport.push_status(200, "");
    ctx.transport.push_status(204, "");

    ctx.client.head_bucket().build().send().await.unwrap();
    ctx.client.delete_bucket().build().send().await.unwrap();

    let requests = ctx.transport.requests();
    assert_eq!(requests[0].method, Method::HEAD);
    assert_eq!(requests[1].method, Method::DELETE);
    assert_eq!(requests[1].url.path, "/");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn missing_bucket_is_a_404() {
    let ctx = TestContext::new();
    ctx.transport.push_status(404, "");

    let err = ctx.client.head_bucket().build().send().await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn bucket_location_maps_empty_constraint_to_us_east_1() {
    let ctx = TestContext::new();
    ctx.transport.push_xml(
        200,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<LocationConstraint xmlns="http://s3.amazonaws.com/doc/2006-03-01/"/>"#,
    );
    ctx.transport.push_xml(
        200,
        r#"<LocationConstraint xmlns="http://s3.amazonaws.com/doc/2006-03-01/">eu-west-1</LocationConstraint>"#,
    );

    let first: BucketLocation = ctx.client.get_bucket_location().build().send().await.unwrap();
    let second = ctx.client.get_bucket_location().build().send().await.unwrap();

    assert_eq!(first.location_constraint, None);
    assert_eq!(first.region(), "us-east-1");
    assert_eq!(second.region(), "eu-west-1");

    let req = ctx.transport.last_request().unwrap();
    assert_eq!(req.url.to_string(), format!("{}/?location", ctx.endpoint()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn bucket_encryption_single_rule() {
    let ctx = TestContext::new();
    ctx.transport.push_xml(
        200,
        "<ServerSideEncryptionConfiguration><Rule>\
         <ApplyServerSideEncryptionByDefault><SSEAlgorithm>aws:kms</SSEAlgorithm>\
         <KMSMasterKeyID>arn:aws:kms:us-east-1:1234/5678example</KMSMasterKeyID>\
         </ApplyServerSideEncryptionByDefault><BucketKeyEnabled>true</BucketKeyEnabled>\
         </Rule></ServerSideEncryptionConfiguration>",
    );

    let config = ctx
        .client
        .get_bucket_encryption()
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(config.rules.len(), 1);
    assert_eq!(config.rules[0].sse_algorithm.as_deref(), Some("aws:kms"));
    assert_eq!(config.rules[0].bucket_key_enabled, Some(true));
    let req = ctx.transport.last_request().unwrap();
    assert_eq!(req.url.to_string(), format!("{}/?encryption", ctx.endpoint()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn lifecycle_put_then_get() {
    let ctx = TestContext::new();
    let config = create_bucket_lifecycle_config_example();

    ctx.client
        .put_bucket_lifecycle_configuration(config.clone())
        .build()
        .send()
        .await
        .unwrap();

    let put = ctx.transport.last_request().unwrap();
    assert_eq!(put.method, Method::PUT);
    assert_eq!(put.url.to_string(), format!("{}/?lifecycle", ctx.endpoint()));
    let body = put.body.unwrap();
    assert_eq!(
        put.headers.get_ignore_case("Content-MD5"),
        Some(md5sum_hash(&body).as_str())
    );

    // serve back exactly what was stored
    let text = String::from_utf8(body.to_vec()).unwrap();
    ctx.transport.push_xml(200, &text);
    let fetched: LifecycleConfiguration = ctx
        .client
        .get_bucket_lifecycle_configuration()
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(fetched, config);
    assert_eq!(fetched.rules.len(), 1);
    let rule = &fetched.rules[0];
    assert_eq!(rule.status, "Enabled");
    assert_eq!(rule.expiration.as_ref().unwrap().days, Some(365));
    assert!(rule.transitions.is_empty());

    let doc = xml::parse(&text).unwrap();
    assert!(doc.get("LifecycleConfiguration").is_some());
}
