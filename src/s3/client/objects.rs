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
use crate::s3::types::ObjectIdentifier;
use bytes::Bytes;

impl S3Client {
    /// Creates a [`HeadObject`] request builder.
    ///
    /// To execute the request, call [`HeadObject::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing an [`ObjectMeta`](crate::s3::types::ObjectMeta).
    ///
    /// The key is used verbatim in the request path; characters outside the
    /// unreserved set must already be percent-encoded by the caller.
    pub fn head_object<S: Into<String>>(&self, key: S) -> HeadObjectBldr {
        HeadObject::builder().client(self.clone()).key(key)
    }

    /// Creates a [`GetObject`] request builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3_typed::s3::S3Client;
    /// use s3_typed::s3::types::{PresignOptions, S3Api};
    ///
    /// # async fn example(client: S3Client) -> s3_typed::s3::error::Result<()> {
    /// let resp = client.get_object("notes/today.txt").build().send().await?;
    /// println!("{}", resp.text()?);
    ///
    /// // the same request as a link valid for one hour
    /// let url = client
    ///     .get_object("notes/today.txt")
    ///     .build()
    ///     .presign(PresignOptions::builder().expires(3600).build())
    ///     .await?;
    /// println!("{url}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_object<S: Into<String>>(&self, key: S) -> GetObjectBldr {
        GetObject::builder().client(self.clone()).key(key)
    }

    /// Creates a [`PutObject`] request builder uploading `body` in a single
    /// request.
    pub fn put_object<S: Into<String>, B: Into<Bytes>>(&self, key: S, body: B) -> PutObjectBldr {
        PutObject::builder()
            .client(self.clone())
            .key(key)
            .body(body)
    }

    pub fn delete_object<S: Into<String>>(&self, key: S) -> DeleteObjectBldr {
        DeleteObject::builder().client(self.clone()).key(key)
    }

    /// Creates a [`CopyObject`] request builder copying `copy_source`
    /// (`/{bucket}/{key}`) to `key`.
    pub fn copy_object<S1: Into<String>, S2: Into<String>>(
        &self,
        key: S1,
        copy_source: S2,
    ) -> CopyObjectBldr {
        CopyObject::builder()
            .client(self.clone())
            .key(key)
            .copy_source(copy_source)
    }

    /// Creates a [`ListObjects`] request builder (version 1 listing).
    pub fn list_objects(&self) -> ListObjectsBldr {
        ListObjects::builder().client(self.clone())
    }

    /// Creates a [`ListObjectsV2`] request builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3_typed::s3::S3Client;
    /// use s3_typed::s3::types::S3Api;
    ///
    /// # async fn example(client: S3Client) -> s3_typed::s3::error::Result<()> {
    /// let mut token: Option<String> = None;
    /// loop {
    ///     let page = match token.take() {
    ///         Some(t) => client.list_objects_v2().continuation_token(t).build(),
    ///         None => client.list_objects_v2().build(),
    ///     }
    ///     .send()
    ///     .await?;
    ///     for object in &page.contents {
    ///         println!("{:?} {:?}", object.key, object.size);
    ///     }
    ///     match page.next_continuation_token {
    ///         Some(t) if page.is_truncated => token = Some(t),
    ///         _ => break,
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_objects_v2(&self) -> ListObjectsV2Bldr {
        ListObjectsV2::builder().client(self.clone())
    }

    /// Creates a [`DeleteObjects`] request builder removing up to 1000 keys
    /// in one request.
    pub fn delete_objects<I, O>(&self, objects: I) -> DeleteObjectsBldr
    where
        I: IntoIterator<Item = O>,
        O: Into<ObjectIdentifier>,
    {
        DeleteObjects::builder()
            .client(self.clone())
            .objects(objects.into_iter().map(Into::into).collect())
    }
}
