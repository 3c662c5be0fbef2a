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

use super::S3Client;
use crate::s3::builders::*;
use crate::s3::types::CompletedPart;
use bytes::Bytes;

impl S3Client {
    pub fn list_multipart_uploads(&self) -> ListMultipartUploadsBldr {
        ListMultipartUploads::builder().client(self.clone())
    }

    /// Creates a [`CreateMultipartUpload`] request builder. The returned
    /// upload id is passed to every later call of the upload.
    pub fn create_multipart_upload<S: Into<String>>(&self, key: S) -> CreateMultipartUploadBldr {
        CreateMultipartUpload::builder().client(self.clone()).key(key)
    }

    /// Creates a [`CompleteMultipartUpload`] request builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3_typed::s3::S3Client;
    /// use s3_typed::s3::types::S3Api;
    ///
    /// # async fn example(client: S3Client, chunks: Vec<Vec<u8>>) -> s3_typed::s3::error::Result<()> {
    /// let upload = client.create_multipart_upload("big.bin").build().send().await?;
    /// let mut parts = Vec::new();
    /// for (i, chunk) in chunks.into_iter().enumerate() {
    ///     let resp = client
    ///         .upload_part("big.bin", &upload.upload_id, i as u16 + 1, chunk)
    ///         .build()
    ///         .send()
    ///         .await?;
    ///     parts.extend(resp.to_part());
    /// }
    /// client
    ///     .complete_multipart_upload("big.bin", &upload.upload_id, parts)
    ///     .build()
    ///     .send()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn complete_multipart_upload<S1: Into<String>, S2: Into<String>>(
        &self,
        key: S1,
        upload_id: S2,
        parts: Vec<CompletedPart>,
    ) -> CompleteMultipartUploadBldr {
        CompleteMultipartUpload::builder()
            .client(self.clone())
            .key(key)
            .upload_id(upload_id)
            .parts(parts)
    }

    pub fn abort_multipart_upload<S1: Into<String>, S2: Into<String>>(
        &self,
        key: S1,
        upload_id: S2,
    ) -> AbortMultipartUploadBldr {
        AbortMultipartUpload::builder()
            .client(self.clone())
            .key(key)
            .upload_id(upload_id)
    }

    /// Creates an [`UploadPart`] request builder. The response carries the
    /// part's ETag, needed to complete the upload.
    pub fn upload_part<S1: Into<String>, S2: Into<String>, B: Into<Bytes>>(
        &self,
        key: S1,
        upload_id: S2,
        part_number: u16,
        body: B,
    ) -> UploadPartBldr {
        UploadPart::builder()
            .client(self.clone())
            .key(key)
            .upload_id(upload_id)
            .part_number(part_number)
            .body(body)
    }

    pub fn upload_part_copy<S1: Into<String>, S2: Into<String>, C: Into<String>>(
        &self,
        key: S1,
        upload_id: S2,
        part_number: u16,
        copy_source: C,
    ) -> UploadPartCopyBldr {
        UploadPartCopy::builder()
            .client(self.clone())
            .key(key)
            .upload_id(upload_id)
            .part_number(part_number)
            .copy_source(copy_source)
    }

    pub fn list_parts<S1: Into<String>, S2: Into<String>>(
        &self,
        key: S1,
        upload_id: S2,
    ) -> ListPartsBldr {
        ListParts::builder()
            .client(self.clone())
            .key(key)
            .upload_id(upload_id)
    }
}
