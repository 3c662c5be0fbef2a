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

use super::with_extra;
use crate::s3::client::S3Client;
use crate::s3::error::Result;
use crate::s3::operation::ApiName;
use crate::s3::params::Params;
use crate::s3::types::{
    DeleteObjectsRequest, DeleteObjectsResult, ObjectIdentifier, S3Api, S3Request, ToS3Request,
    xml_body,
};
use typed_builder::TypedBuilder;

/// Argument builder for the [`DeleteObjects`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteObjects.html) S3 API operation.
///
/// A successful call can still report per-key failures: check
/// [`DeleteObjectsResult::errors`] as well as the result itself.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteObjects {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(!default)]
    objects: Vec<ObjectIdentifier>,
    /// Only failures are listed in the response when set.
    #[builder(default)]
    quiet: bool,
}

/// Builder type alias for [`DeleteObjects`].
pub type DeleteObjectsBldr =
    DeleteObjectsBuilder<((S3Client,), (), (Vec<ObjectIdentifier>,), ())>;

impl S3Api for DeleteObjects {
    type S3Response = DeleteObjectsResult;
}

impl ToS3Request for DeleteObjects {
    fn to_s3request(self) -> Result<S3Request> {
        let request = DeleteObjectsRequest {
            objects: self.objects,
            quiet: self.quiet,
        };

        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::DeleteObjects)
            .params(with_extra(Params::new(), self.extra_params))
            .body(xml_body(ApiName::DeleteObjects, &request))
            .build())
    }
}
