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
use s3_typed::s3::params::Params;
use s3_typed::s3::types::{CorsConfiguration, S3Api};
use s3_typed::s3::utils::md5sum_hash;
use s3_typed::s3::xml::{self, FromXml};
use s3_typed_common::example::create_bucket_cors_config_example;
use s3_typed_common::test_context::TestContext;
use s3_typed_common::utils::init_logger;

const SINGLE_RULE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CORSConfiguration xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <CORSRule>
    <AllowedMethod>GET</AllowedMethod>
    <AllowedOrigin>*</AllowedOrigin>
    <MaxAgeSeconds>600</MaxAgeSeconds>
  </CORSRule>
</CORSConfiguration>"#;

const TWO_RULES: &str = r#"<CORSConfiguration>
  <CORSRule><ID>a</ID><AllowedMethod>GET</AllowedMethod><AllowedMethod>HEAD</AllowedMethod><AllowedOrigin>*</AllowedOrigin></CORSRule>
  <CORSRule><ID>b</ID><AllowedMethod>PUT</AllowedMethod><AllowedOrigin>https://www.example.com</AllowedOrigin></CORSRule>
</CORSConfiguration>"#;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn put_bucket_cors_sends_xml_with_md5() {
    init_logger();
    let ctx = TestContext::new();
    let config: CorsConfiguration = create_bucket_cors_config_example();

    ctx.client
        .put_bucket_cors(config.clone())
        .build()
        .send()
        .await
        .unwrap();

    let req = ctx.transport.last_request().unwrap();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.url.to_string(), format!("{}/?cors", ctx.endpoint()));
    assert_eq!(
        req.headers.get_ignore_case("Content-Type"),
        Some("application/xml")
    );

    let body = req.body.unwrap();
    assert_eq!(
        req.headers.get_ignore_case("Content-MD5"),
        Some(md5sum_hash(&body).as_str())
    );

    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("<CORSConfiguration><CORSRule>"));
    let mut doc = xml::parse(&text).unwrap();
    let root = doc.remove("CORSConfiguration").unwrap();
    let sent: CorsConfiguration = root.decode().unwrap();
    assert_eq!(sent, config);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn get_bucket_cors_single_rule_is_a_list() {
    let ctx = TestContext::new();
    ctx.transport.push_xml(200, SINGLE_RULE);

    let config: CorsConfiguration = ctx.client.get_bucket_cors().build().send().await.unwrap();

    assert_eq!(config.rules.len(), 1);
    let rule = &config.rules[0];
    assert_eq!(rule.allowed_methods, vec!["GET".to_string()]);
    assert_eq!(rule.allowed_origins, vec!["*".to_string()]);
    assert_eq!(rule.max_age_seconds, Some(600));
    assert!(rule.allowed_headers.is_empty());

    let req = ctx.transport.last_request().unwrap();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.url.path, "/");
    assert_eq!(req.url.to_string(), format!("{}/?cors", ctx.endpoint()));
    assert!(req.body.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn get_bucket_cors_two_rules_keep_order() {
    let ctx = TestContext::new();
    ctx.transport.push_xml(200, TWO_RULES);

    let config = ctx.client.get_bucket_cors().build().send().await.unwrap();

    let ids: Vec<_> = config.rules.iter().map(|r| r.id.clone().unwrap()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(config.rules[0].allowed_methods, vec!["GET", "HEAD"]);
    assert_eq!(config.rules[1].allowed_methods, vec!["PUT"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn cors_flag_is_owned_by_the_operation() {
    let ctx = TestContext::new();
    ctx.transport.push_xml(200, SINGLE_RULE);

    // a caller value for the flag is ignored and an unset value is dropped
    let extra = Params::new()
        .with("cors", true)
        .with_opt::<String>("prefix", None);
    ctx.client
        .get_bucket_cors()
        .extra_params(extra)
        .build()
        .send()
        .await
        .unwrap();

    let req = ctx.transport.last_request().unwrap();
    assert_eq!(req.url.to_string(), format!("{}/?cors", ctx.endpoint()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn delete_bucket_cors() {
    let ctx = TestContext::new();
    ctx.transport.push_status(204, "");

    let resp = ctx.client.delete_bucket_cors().build().send().await.unwrap();
    assert!(resp.headers.is_empty());

    let req = ctx.transport.last_request().unwrap();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(req.url.to_string(), format!("{}/?cors", ctx.endpoint()));
}

#[test]
fn cors_configuration_decodes_without_namespace_handling() {
    let mut doc = xml::parse(SINGLE_RULE).unwrap();
    let root = doc.remove("CORSConfiguration").unwrap();
    let node = root.as_node().unwrap();
    let config = CorsConfiguration::from_xml(node).unwrap();
    assert_eq!(config.rules.len(), 1);
}
