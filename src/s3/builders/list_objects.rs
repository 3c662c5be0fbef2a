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
use crate::s3::types::{ListObjectsResult, ListObjectsV2Result, S3Api, S3Request, ToS3Request};
use typed_builder::TypedBuilder;

/// Argument builder for the [`ListObjects`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListObjects.html) S3 API operation.
///
/// Version 1 listing, paginated with `marker`. The next page starts at
/// [`ListObjectsResult::next_marker`] when a delimiter is set, otherwise at
/// the last key returned.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListObjects {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(default, setter(into, strip_option))]
    prefix: Option<String>,
    #[builder(default, setter(into, strip_option))]
    delimiter: Option<String>,
    #[builder(default, setter(into, strip_option))]
    marker: Option<String>,
    #[builder(default, setter(into, strip_option))]
    max_keys: Option<u32>,
    /// `url` asks S3 to percent-encode keys in the response.
    #[builder(default, setter(into, strip_option))]
    encoding_type: Option<String>,
}

/// Builder type alias for [`ListObjects`].
pub type ListObjectsBldr = ListObjectsBuilder<((S3Client,), (), (), (), (), (), ())>;

impl S3Api for ListObjects {
    type S3Response = ListObjectsResult;
}

impl ToS3Request for ListObjects {
    fn to_s3request(self) -> Result<S3Request> {
        let params = Params::new()
            .with_opt("prefix", self.prefix)
            .with_opt("delimiter", self.delimiter)
            .with_opt("marker", self.marker)
            .with_opt("max-keys", self.max_keys)
            .with_opt("encoding-type", self.encoding_type);

        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::ListObjects)
            .params(with_extra(params, self.extra_params))
            .build())
    }
}

/// Argument builder for the [`ListObjectsV2`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListObjectsV2.html) S3 API operation.
///
/// `list-type=2` is always sent. Pages are chained through
/// [`ListObjectsV2Result::next_continuation_token`].
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListObjectsV2 {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_params: Option<Params>,
    #[builder(default, setter(into, strip_option))]
    prefix: Option<String>,
    #[builder(default, setter(into, strip_option))]
    delimiter: Option<String>,
    #[builder(default, setter(into, strip_option))]
    continuation_token: Option<String>,
    #[builder(default, setter(into, strip_option))]
    start_after: Option<String>,
    #[builder(default, setter(into, strip_option))]
    max_keys: Option<u32>,
    #[builder(default, setter(into, strip_option))]
    fetch_owner: Option<bool>,
    #[builder(default, setter(into, strip_option))]
    encoding_type: Option<String>,
}

/// Builder type alias for [`ListObjectsV2`].
pub type ListObjectsV2Bldr =
    ListObjectsV2Builder<((S3Client,), (), (), (), (), (), (), (), ())>;

impl S3Api for ListObjectsV2 {
    type S3Response = ListObjectsV2Result;
}

impl ToS3Request for ListObjectsV2 {
    fn to_s3request(self) -> Result<S3Request> {
        let params = Params::new()
            .with_opt("prefix", self.prefix)
            .with_opt("delimiter", self.delimiter)
            .with_opt("continuation-token", self.continuation_token)
            .with_opt("start-after", self.start_after)
            .with_opt("max-keys", self.max_keys)
            .with_opt("fetch-owner", self.fetch_owner)
            .with_opt("encoding-type", self.encoding_type);

        Ok(S3Request::builder()
            .client(self.client)
            .api(ApiName::ListObjectsV2)
            .params(with_extra(params, self.extra_params))
            .build())
    }
}
