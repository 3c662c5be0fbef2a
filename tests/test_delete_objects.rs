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
use s3_typed::s3::types::{DeleteObjectsResult, ObjectIdentifier, S3Api};
use s3_typed::s3::utils::md5sum_hash;
use s3_typed_common::test_context::TestContext;
use s3_typed_common::utils::{init_logger, rand_object_name};

const PARTIAL_FAILURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DeleteResult>
  <Deleted><Key>a.txt</Key></Deleted>
  <Deleted><Key>b.txt</Key><VersionId>v2</VersionId><DeleteMarker>true</DeleteMarker></Deleted>
  <Error><Key>c.txt</Key><Code>AccessDenied</Code><Message>Access Denied</Message></Error>
</DeleteResult>"#;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn delete_objects_reports_partial_failure() {
    init_logger();
    let ctx = TestContext::new();
    ctx.transport.push_xml(200, PARTIAL_FAILURE);

    let resp: DeleteObjectsResult = ctx
        .client
        .delete_objects(vec![
            ObjectIdentifier::new("a.txt"),
            ObjectIdentifier::with_version("b.txt", "v2"),
            ObjectIdentifier::new("c.txt"),
        ])
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.deleted.len(), 2);
    assert_eq!(resp.deleted[0].key.as_deref(), Some("a.txt"));
    assert_eq!(resp.deleted[1].version_id.as_deref(), Some("v2"));
    assert_eq!(resp.deleted[1].delete_marker, Some(true));
    assert_eq!(resp.errors.len(), 1);
    assert_eq!(resp.errors[0].key.as_deref(), Some("c.txt"));
    assert_eq!(resp.errors[0].code.as_deref(), Some("AccessDenied"));

    let req = ctx.transport.last_request().unwrap();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.url.to_string(), format!("{}/?delete", ctx.endpoint()));

    let body = req.body.unwrap();
    assert_eq!(
        String::from_utf8(body.to_vec()).unwrap(),
        "<Delete><Object><Key>a.txt</Key></Object>\
         <Object><Key>b.txt</Key><VersionId>v2</VersionId></Object>\
         <Object><Key>c.txt</Key></Object></Delete>"
    );
    assert_eq!(
        req.headers.get_ignore_case("Content-MD5"),
        Some(md5sum_hash(&body).as_str())
    );
    assert_eq!(
        req.headers.get_ignore_case("Content-Type"),
        Some("application/xml")
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn delete_objects_quiet_with_single_entry() {
    let ctx = TestContext::new();
    let name = rand_object_name();
    ctx.transport
        .push_xml(200, "<DeleteResult><Deleted><Key>x</Key></Deleted></DeleteResult>");

    let resp = ctx
        .client
        .delete_objects([name.as_str()])
        .quiet(true)
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.deleted.len(), 1);
    assert!(resp.errors.is_empty());

    let req = ctx.transport.last_request().unwrap();
    let text = String::from_utf8(req.body.unwrap().to_vec()).unwrap();
    assert_eq!(
        text,
        format!("<Delete><Object><Key>{name}</Key></Object><Quiet>true</Quiet></Delete>")
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn delete_objects_empty_result() {
    let ctx = TestContext::new();
    ctx.transport.push_xml(200, "<DeleteResult/>");

    let resp = ctx.client.delete_objects(["gone"]).build().send().await.unwrap();

    assert!(resp.deleted.is_empty());
    assert!(resp.errors.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn delete_single_object_with_version() {
    let ctx = TestContext::new();
    ctx.transport.push_status(204, "");

    ctx.client
        .delete_object("old/report.csv")
        .version_id("3HL4kqtJlcpXroDTDmJ+rmSpXd3dIbrHY")
        .build()
        .send()
        .await
        .unwrap();

    let req = ctx.transport.last_request().unwrap();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(
        req.url.to_string(),
        format!(
            "{}/old/report.csv?versionId=3HL4kqtJlcpXroDTDmJ%2BrmSpXd3dIbrHY",
            ctx.endpoint()
        )
    );
}
