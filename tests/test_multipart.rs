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
use s3_typed::s3::types::{CompletedPart, S3Api};
use s3_typed_common::mock_transport::headers_response;
use s3_typed_common::test_context::TestContext;
use s3_typed_common::utils::init_logger;

const INITIATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<InitiateMultipartUploadResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Bucket>examplebucket</Bucket><Key>big.bin</Key><UploadId>u-1</UploadId>
</InitiateMultipartUploadResult>"#;

const COMPLETE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CompleteMultipartUploadResult>
  <Location>https://examplebucket.s3.amazonaws.com/big.bin</Location>
  <Bucket>examplebucket</Bucket><Key>big.bin</Key><ETag>"3858f62230ac3c915f300c664312c11f-2"</ETag>
</CompleteMultipartUploadResult>"#;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn multipart_upload_flow() {
    init_logger();
    let ctx = TestContext::new();
    ctx.transport.push_xml(200, INITIATE);
    ctx.transport.push(headers_response(&[("etag", "\"e1\"")]));
    ctx.transport.push(headers_response(&[("etag", "\"e2\"")]));
    ctx.transport.push_xml(200, COMPLETE);

    let upload = ctx
        .client
        .create_multipart_upload("big.bin")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(upload.key, "big.bin");
    assert_eq!(upload.upload_id, "u-1");

    let mut parts: Vec<CompletedPart> = Vec::new();
    for (i, chunk) in ["first chunk", "second chunk"].into_iter().enumerate() {
        let resp = ctx
            .client
            .upload_part("big.bin", &upload.upload_id, i as u16 + 1, chunk)
            .build()
            .send()
            .await
            .unwrap();
        assert_eq!(resp.part_number, i as u16 + 1);
        parts.extend(resp.to_part());
    }
    assert_eq!(parts[0].etag, "e1");
    assert_eq!(parts[1].etag, "e2");

    let done = ctx
        .client
        .complete_multipart_upload("big.bin", &upload.upload_id, parts)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(
        done.etag.as_deref(),
        Some("3858f62230ac3c915f300c664312c11f-2")
    );
    assert_eq!(done.key.as_deref(), Some("big.bin"));

    let requests = ctx.transport.requests();
    assert_eq!(requests.len(), 4);
    let endpoint = ctx.endpoint();

    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].url.to_string(), format!("{endpoint}/big.bin?uploads"));

    assert_eq!(requests[1].method, Method::PUT);
    assert_eq!(
        requests[1].url.to_string(),
        format!("{endpoint}/big.bin?partNumber=1&uploadId=u-1")
    );
    assert_eq!(
        requests[1].body.as_deref(),
        Some(b"first chunk".as_slice())
    );
    assert_eq!(
        requests[2].url.to_string(),
        format!("{endpoint}/big.bin?partNumber=2&uploadId=u-1")
    );

    let complete = &requests[3];
    assert_eq!(complete.method, Method::POST);
    assert_eq!(complete.url.to_string(), format!("{endpoint}/big.bin?uploadId=u-1"));
    assert_eq!(
        complete.headers.get_ignore_case("content-type"),
        Some("application/xml")
    );
    let body = String::from_utf8(complete.body.clone().unwrap().to_vec()).unwrap();
    assert_eq!(
        body,
        "<CompleteMultipartUpload>\
         <Part><ETag>e1</ETag><PartNumber>1</PartNumber></Part>\
         <Part><ETag>e2</ETag><PartNumber>2</PartNumber></Part>\
         </CompleteMultipartUpload>"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn complete_with_error_document_on_200_fails() {
    let ctx = TestContext::new();
    ctx.transport.push_xml(
        200,
        "<Error><Code>InternalError</Code><Message>We encountered an internal error. Please try again.</Message></Error>",
    );

    let err = ctx
        .client
        .complete_multipart_upload("big.bin", "u-1", vec![CompletedPart::new(1, "e1")])
        .build()
        .send()
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(200));
    let api = err.api_error().unwrap();
    assert_eq!(api.code(), Some("InternalError"));
    assert_eq!(api.path, "/big.bin?uploadId=u-1");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn abort_and_list_parts() {
    let ctx = TestContext::new();
    ctx.transport.push_xml(
        200,
        "<ListPartsResult><Bucket>examplebucket</Bucket><Key>big.bin</Key><UploadId>u-1</UploadId>\
         <IsTruncated>false</IsTruncated>\
         <Part><PartNumber>1</PartNumber><ETag>\"e1\"</ETag><Size>5242880</Size></Part></ListPartsResult>",
    );
    ctx.transport.push_status(204, "");

    let parts = ctx
        .client
        .list_parts("big.bin", "u-1")
        .max_parts(100u32)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(parts.parts.len(), 1);
    assert_eq!(parts.parts[0].part_number, Some(1));
    assert_eq!(parts.parts[0].size, Some(5_242_880));

    ctx.client
        .abort_multipart_upload("big.bin", "u-1")
        .build()
        .send()
        .await
        .unwrap();

    let requests = ctx.transport.requests();
    assert_eq!(
        requests[0].url.to_string(),
        format!("{}/big.bin?max-parts=100&uploadId=u-1", ctx.endpoint())
    );
    assert_eq!(requests[1].method, Method::DELETE);
    assert_eq!(
        requests[1].url.to_string(),
        format!("{}/big.bin?uploadId=u-1", ctx.endpoint())
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn list_multipart_uploads_single_upload() {
    let ctx = TestContext::new();
    ctx.transport.push_xml(
        200,
        "<ListMultipartUploadsResult><Bucket>examplebucket</Bucket>\
         <IsTruncated>false</IsTruncated>\
         <Upload><Key>big.bin</Key><UploadId>u-1</UploadId></Upload>\
         </ListMultipartUploadsResult>",
    );

    let resp = ctx
        .client
        .list_multipart_uploads()
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.uploads.len(), 1);
    assert_eq!(resp.uploads[0].upload_id.as_deref(), Some("u-1"));
    let req = ctx.transport.last_request().unwrap();
    assert_eq!(req.url.to_string(), format!("{}/?uploads", ctx.endpoint()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn upload_part_copy_sends_source_headers() {
    let ctx = TestContext::new();
    ctx.transport.push_xml(
        200,
        "<CopyPartResult><ETag>\"c1\"</ETag><LastModified>2024-01-02T03:04:05.000Z</LastModified></CopyPartResult>",
    );

    let resp = ctx
        .client
        .upload_part_copy("big.bin", "u-1", 3, "/src-bucket/src.bin")
        .copy_source_range("bytes=0-5242879")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.etag.as_deref(), Some("c1"));

    let req = ctx.transport.last_request().unwrap();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(
        req.url.to_string(),
        format!("{}/big.bin?partNumber=3&uploadId=u-1", ctx.endpoint())
    );
    assert_eq!(
        req.headers.get_ignore_case("x-amz-copy-source"),
        Some("/src-bucket/src.bin")
    );
    assert_eq!(
        req.headers.get_ignore_case("x-amz-copy-source-range"),
        Some("bytes=0-5242879")
    );
}
