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

//! Argument builders for [`S3Client`](crate::s3::client::S3Client) APIs

mod bucket_common;
mod bucket_config;
mod delete_objects;
mod list_objects;
mod multipart;
mod objects;

pub use bucket_common::*;
pub use bucket_config::*;
pub use delete_objects::*;
pub use list_objects::*;
pub use multipart::*;
pub use objects::*;

use crate::s3::params::Params;

/// Merges the caller's raw parameters over the typed ones.
fn with_extra(mut params: Params, extra: Option<Params>) -> Params {
    if let Some(extra) = extra {
        params.extend(extra);
    }
    params
}
