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
    BucketLocation, CorsConfiguration, EmptyResponse, LifecycleConfiguration, ListBucketsResult,
    S3Api, S3Request, ServerSideEncryptionConfiguration, ToS3Request,
};
use std::marker::PhantomData;
use typed_builder::TypedBuilder;

/// Common parameters for bucket operations that carry no body and no
/// parameters of their own.
#[derive(Clone, Debug, TypedBuilder)]
pub struct BucketCommon<T> {
    #[builder(!default)] // force required
    pub(crate) client: S3Client,

    #[builder(default, setter(into))]
    pub(crate) extra_params: Option<Params>,

    #[builder(default)]
    _operation: PhantomData<T>,
}

macro_rules! bucket_operation {
    ($(#[$doc:meta])* $name:ident, $bldr:ident, $phantom:ident, $response:ty) => {
        $(#[$doc])*
        pub type $name = BucketCommon<$phantom>;

        #[doc = concat!("Builder type alias for [`", stringify!($name), "`].")]
        pub type $bldr = BucketCommonBuilder<$phantom, ((S3Client,), (), ())>;

        #[derive(Clone, Debug, Default)]
        pub struct $phantom;

        impl S3Api for $name {
            type S3Response = $response;
        }

        impl ToS3Request for $name {
            fn to_s3request(self) -> Result<S3Request> {
                Ok(S3Request::builder()
                    .client(self.client)
                    .api(ApiName::$name)
                    .params(with_extra(Params::new(), self.extra_params))
                    .build())
            }
        }
    };
}

bucket_operation!(
    /// Argument builder for the [`ListBuckets`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListBuckets.html) S3 API operation.
    ListBuckets,
    ListBucketsBldr,
    ListBucketsPhantomData,
    ListBucketsResult
);

bucket_operation!(
    /// Argument builder for the [`HeadBucket`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_HeadBucket.html) S3 API operation.
    HeadBucket,
    HeadBucketBldr,
    HeadBucketPhantomData,
    EmptyResponse
);

bucket_operation!(
    /// Argument builder for the [`DeleteBucket`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteBucket.html) S3 API operation.
    DeleteBucket,
    DeleteBucketBldr,
    DeleteBucketPhantomData,
    EmptyResponse
);

bucket_operation!(
    /// Argument builder for the [`GetBucketCors`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetBucketCors.html) S3 API operation.
    GetBucketCors,
    GetBucketCorsBldr,
    GetBucketCorsPhantomData,
    CorsConfiguration
);

bucket_operation!(
    /// Argument builder for the [`DeleteBucketCors`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteBucketCors.html) S3 API operation.
    DeleteBucketCors,
    DeleteBucketCorsBldr,
    DeleteBucketCorsPhantomData,
    EmptyResponse
);

bucket_operation!(
    /// Argument builder for the [`GetBucketLifecycleConfiguration`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetBucketLifecycleConfiguration.html) S3 API operation.
    GetBucketLifecycleConfiguration,
    GetBucketLifecycleConfigurationBldr,
    GetBucketLifecycleConfigurationPhantomData,
    LifecycleConfiguration
);

bucket_operation!(
    /// Argument builder for the [`GetBucketLocation`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetBucketLocation.html) S3 API operation.
    GetBucketLocation,
    GetBucketLocationBldr,
    GetBucketLocationPhantomData,
    BucketLocation
);

bucket_operation!(
    /// Argument builder for the [`GetBucketEncryption`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetBucketEncryption.html) S3 API operation.
    GetBucketEncryption,
    GetBucketEncryptionBldr,
    GetBucketEncryptionPhantomData,
    ServerSideEncryptionConfiguration
);
