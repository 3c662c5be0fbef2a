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
    CorsConfiguration, CreateBucketConfiguration, EmptyResponse, LifecycleConfiguration, S3Api,
    S3Request, ToS3Request, xml_body,
};
use typed_builder::TypedBuilder;

/// Argument builder for the [`CreateBucket`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CreateBucket.html) S3 API operation.
///
/// Without a configuration the request carries no body and the bucket is
/// created in the region of the endpoint.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateBucket {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(default, setter(into, strip_option))]
    configuration: Option<CreateBucketConfiguration>,
}

/// Builder type alias for [`CreateBucket`].
pub type CreateBucketBldr = CreateBucketBuilder<((S3Client,), (), ())>;

impl S3Api for CreateBucket {
    type S3Response = EmptyResponse;
}

impl ToS3Request for CreateBucket {
    fn to_s3request(self) -> Result<S3Request> {
        let body = self
            .configuration
            .and_then(|c| xml_body(ApiName::CreateBucket, &c));

        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::CreateBucket)
            .params(with_extra(Params::new(), self.extra_params))
            .body(body)
            .build())
    }
}

/// Argument builder for the [`PutBucketCors`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutBucketCors.html) S3 API operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutBucketCors {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(!default)]
    config: CorsConfiguration,
}

/// Builder type alias for [`PutBucketCors`].
pub type PutBucketCorsBldr = PutBucketCorsBuilder<((S3Client,), (), (CorsConfiguration,))>;

impl S3Api for PutBucketCors {
    type S3Response = EmptyResponse;
}

impl ToS3Request for PutBucketCors {
    fn to_s3request(self) -> Result<S3Request> {
        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::PutBucketCors)
            .params(with_extra(Params::new(), self.extra_params))
            .body(xml_body(ApiName::PutBucketCors, &self.config))
            .build())
    }
}

/// Argument builder for the [`PutBucketLifecycleConfiguration`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutBucketLifecycleConfiguration.html) S3 API operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutBucketLifecycleConfiguration {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(!default)]
    config: LifecycleConfiguration,
}

/// Builder type alias for [`PutBucketLifecycleConfiguration`].
pub type PutBucketLifecycleConfigurationBldr =
    PutBucketLifecycleConfigurationBuilder<((S3Client,), (), (LifecycleConfiguration,))>;

impl S3Api for PutBucketLifecycleConfiguration {
    type S3Response = EmptyResponse;
}

impl ToS3Request for PutBucketLifecycleConfiguration {
    fn to_s3request(self) -> Result<S3Request> {
        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::PutBucketLifecycleConfiguration)
            .params(with_extra(Params::new(), self.extra_params))
            .body(xml_body(ApiName::PutBucketLifecycleConfiguration, &self.config))
            .build())
    }
}
