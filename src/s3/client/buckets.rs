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
use crate::s3::types::{CorsConfiguration, LifecycleConfiguration};

impl S3Client {
    /// Creates a [`ListBuckets`] request builder.
    ///
    /// To execute the request, call [`ListBuckets::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`ListBucketsResult`](crate::s3::types::ListBucketsResult).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3_typed::s3::S3Client;
    /// use s3_typed::s3::creds::StaticProvider;
    /// use s3_typed::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let provider = StaticProvider::new("minioadmin", "minioadmin", None);
    ///     let client = S3Client::new("http://localhost:9000".parse().unwrap(), Some(provider)).unwrap();
    ///     let resp = client.list_buckets().build().send().await.unwrap();
    ///     for bucket in resp.buckets {
    ///         println!("{:?}", bucket.name);
    ///     }
    /// }
    /// ```
    pub fn list_buckets(&self) -> ListBucketsBldr {
        ListBuckets::builder().client(self.clone())
    }

    /// Creates a [`CreateBucket`] request builder for the bucket addressed by
    /// the base URL.
    pub fn create_bucket(&self) -> CreateBucketBldr {
        CreateBucket::builder().client(self.clone())
    }

    /// Creates a [`HeadBucket`] request builder. A missing bucket fails with
    /// status 404.
    pub fn head_bucket(&self) -> HeadBucketBldr {
        HeadBucket::builder().client(self.clone())
    }

    pub fn delete_bucket(&self) -> DeleteBucketBldr {
        DeleteBucket::builder().client(self.clone())
    }

    /// Creates a [`GetBucketCors`] request builder.
    ///
    /// To execute the request, call [`GetBucketCors::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`CorsConfiguration`].
    pub fn get_bucket_cors(&self) -> GetBucketCorsBldr {
        GetBucketCors::builder().client(self.clone())
    }

    /// Creates a [`PutBucketCors`] request builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3_typed::s3::S3Client;
    /// use s3_typed::s3::types::{CorsConfiguration, CorsRule, S3Api};
    ///
    /// # async fn example(client: S3Client) -> s3_typed::s3::error::Result<()> {
    /// let config = CorsConfiguration {
    ///     rules: vec![CorsRule {
    ///         allowed_methods: vec!["GET".into()],
    ///         allowed_origins: vec!["*".into()],
    ///         ..Default::default()
    ///     }],
    /// };
    /// client.put_bucket_cors(config).build().send().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn put_bucket_cors(&self, config: CorsConfiguration) -> PutBucketCorsBldr {
        PutBucketCors::builder().client(self.clone()).config(config)
    }

    pub fn delete_bucket_cors(&self) -> DeleteBucketCorsBldr {
        DeleteBucketCors::builder().client(self.clone())
    }

    pub fn get_bucket_lifecycle_configuration(&self) -> GetBucketLifecycleConfigurationBldr {
        GetBucketLifecycleConfiguration::builder().client(self.clone())
    }

    /// Creates a [`PutBucketLifecycleConfiguration`] request builder. The
    /// configuration replaces every existing rule.
    pub fn put_bucket_lifecycle_configuration(
        &self,
        config: LifecycleConfiguration,
    ) -> PutBucketLifecycleConfigurationBldr {
        PutBucketLifecycleConfiguration::builder()
            .client(self.clone())
            .config(config)
    }

    /// Creates a [`GetBucketLocation`] request builder.
    ///
    /// The response's [`region()`](crate::s3::types::BucketLocation::region)
    /// maps the empty constraint S3 uses for `us-east-1`.
    pub fn get_bucket_location(&self) -> GetBucketLocationBldr {
        GetBucketLocation::builder().client(self.clone())
    }

    pub fn get_bucket_encryption(&self) -> GetBucketEncryptionBldr {
        GetBucketEncryption::builder().client(self.clone())
    }
}
