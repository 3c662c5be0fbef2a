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

//! # s3-typed
//!
//! A strongly-typed, async client for Amazon S3 and S3-compatible object
//! storage.
//!
//! Each supported S3 operation has a corresponding request builder (e.g.
//! [`s3::builders::ListObjectsV2`], [`s3::builders::PutBucketCors`],
//! [`s3::builders::UploadPartCopy`]) obtained from an [`s3::S3Client`]. A
//! built request is used in one of two ways:
//!
//! - [`send`](crate::s3::types::S3Api::send) executes it and decodes the
//!   response into a typed result;
//! - [`presign`](crate::s3::types::S3Api::presign) returns a SigV4 presigned
//!   URL for the same request, without any network call.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use s3_typed::s3::S3Client;
//! use s3_typed::s3::creds::StaticProvider;
//! use s3_typed::s3::http::BaseUrl;
//! use s3_typed::s3::types::{PresignOptions, S3Api};
//!
//! #[tokio::main]
//! async fn main() {
//!     let base_url: BaseUrl = "http://localhost:9000/photos".parse().unwrap();
//!     let provider = StaticProvider::new("minioadmin", "minioadmin", None);
//!     let client = S3Client::new(base_url, Some(provider)).unwrap();
//!
//!     let listing = client
//!         .list_objects_v2()
//!         .prefix("2024/")
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//!     println!("{} objects", listing.contents.len());
//!
//!     let url = client
//!         .get_object("2024/cat.jpg")
//!         .build()
//!         .presign(PresignOptions::default())
//!         .await
//!         .expect("presign failed");
//!     println!("{url}");
//! }
//! ```
//!
//! ## Design
//! - Every operation is described once in a static table
//!   ([`s3::operation::describe`]): method, path shape, query flags, which
//!   parameters go to headers and the XML envelopes of its bodies.
//! - Builders implement [`s3::types::ToS3Request`]; responses implement
//!   [`s3::types::FromS3Response`].
//! - XML is decoded through [`s3::xml`], which represents repeated elements
//!   by occurrence count, so a list with one entry and a list with many are
//!   read the same way.

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod s3;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
