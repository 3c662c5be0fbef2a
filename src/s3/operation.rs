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

//! Static descriptors for every supported S3 operation

use crate::s3::error::{Result, ValidationErr};
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::params::{Params, QueryParam, set_query_param};
use http::Method;
use std::fmt;

/// Name of an S3 API, as carried by the `x-id` marker on presigned URLs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiName {
    ListBuckets,
    CreateBucket,
    HeadBucket,
    DeleteBucket,
    GetBucketCors,
    PutBucketCors,
    DeleteBucketCors,
    GetBucketLifecycleConfiguration,
    PutBucketLifecycleConfiguration,
    GetBucketLocation,
    GetBucketEncryption,
    HeadObject,
    GetObject,
    PutObject,
    DeleteObject,
    ListObjects,
    ListObjectsV2,
    DeleteObjects,
    ListMultipartUploads,
    CreateMultipartUpload,
    CompleteMultipartUpload,
    AbortMultipartUpload,
    CopyObject,
    UploadPart,
    UploadPartCopy,
    ListParts,
}

impl ApiName {
    pub const ALL: [ApiName; 26] = [
        ApiName::ListBuckets,
        ApiName::CreateBucket,
        ApiName::HeadBucket,
        ApiName::DeleteBucket,
        ApiName::GetBucketCors,
        ApiName::PutBucketCors,
        ApiName::DeleteBucketCors,
        ApiName::GetBucketLifecycleConfiguration,
        ApiName::PutBucketLifecycleConfiguration,
        ApiName::GetBucketLocation,
        ApiName::GetBucketEncryption,
        ApiName::HeadObject,
        ApiName::GetObject,
        ApiName::PutObject,
        ApiName::DeleteObject,
        ApiName::ListObjects,
        ApiName::ListObjectsV2,
        ApiName::DeleteObjects,
        ApiName::ListMultipartUploads,
        ApiName::CreateMultipartUpload,
        ApiName::CompleteMultipartUpload,
        ApiName::AbortMultipartUpload,
        ApiName::CopyObject,
        ApiName::UploadPart,
        ApiName::UploadPartCopy,
        ApiName::ListParts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiName::ListBuckets => "ListBuckets",
            ApiName::CreateBucket => "CreateBucket",
            ApiName::HeadBucket => "HeadBucket",
            ApiName::DeleteBucket => "DeleteBucket",
            ApiName::GetBucketCors => "GetBucketCors",
            ApiName::PutBucketCors => "PutBucketCors",
            ApiName::DeleteBucketCors => "DeleteBucketCors",
            ApiName::GetBucketLifecycleConfiguration => "GetBucketLifecycleConfiguration",
            ApiName::PutBucketLifecycleConfiguration => "PutBucketLifecycleConfiguration",
            ApiName::GetBucketLocation => "GetBucketLocation",
            ApiName::GetBucketEncryption => "GetBucketEncryption",
            ApiName::HeadObject => "HeadObject",
            ApiName::GetObject => "GetObject",
            ApiName::PutObject => "PutObject",
            ApiName::DeleteObject => "DeleteObject",
            ApiName::ListObjects => "ListObjects",
            ApiName::ListObjectsV2 => "ListObjectsV2",
            ApiName::DeleteObjects => "DeleteObjects",
            ApiName::ListMultipartUploads => "ListMultipartUploads",
            ApiName::CreateMultipartUpload => "CreateMultipartUpload",
            ApiName::CompleteMultipartUpload => "CompleteMultipartUpload",
            ApiName::AbortMultipartUpload => "AbortMultipartUpload",
            ApiName::CopyObject => "CopyObject",
            ApiName::UploadPart => "UploadPart",
            ApiName::UploadPartCopy => "UploadPartCopy",
            ApiName::ListParts => "ListParts",
        }
    }
}

impl fmt::Display for ApiName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path segment an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// The bucket root, `/`.
    Bucket,
    /// An object, `/{key}`.
    Object,
}

/// Where a parameter travels on an executed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Query,
    Header,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub location: Location,
    pub required: bool,
}

const fn query(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        location: Location::Query,
        required: false,
    }
}

const fn header(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        location: Location::Header,
        required: false,
    }
}

impl ParamSpec {
    const fn required(self) -> Self {
        ParamSpec {
            required: true,
            ..self
        }
    }
}

/// Body carried by a request or response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Body {
    None,
    /// XML wrapped in the named envelope element.
    Xml(&'static str),
    /// Object content, passed through untouched.
    Raw,
}

/// Immutable description of one S3 operation.
#[derive(Debug)]
pub struct Operation {
    pub name: ApiName,
    pub method: Method,
    pub target: Target,
    /// Presence-only query keys always sent (`cors`, `uploads`...).
    pub flags: &'static [&'static str],
    /// Valued query keys always sent (`list-type=2`).
    pub fixed: &'static [(&'static str, &'static str)],
    /// Caller-supplied parameters the operation recognises.
    pub params: &'static [ParamSpec],
    pub request_body: Body,
    pub response_body: Body,
    /// S3 rejects the request body unless it carries `Content-MD5`.
    pub content_md5: bool,
}

impl Operation {
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    fn is_reserved(&self, name: &str) -> bool {
        self.flags.contains(&name) || self.fixed.iter().any(|(k, _)| *k == name)
    }

    /// Request path: `/` for bucket operations, `/{key}` with the key taken
    /// verbatim for object operations.
    pub fn path(&self, key: Option<&str>) -> Result<String> {
        match self.target {
            Target::Bucket => Ok("/".to_string()),
            Target::Object => match key {
                Some(k) if !k.is_empty() => Ok(format!("/{k}")),
                _ => Err(ValidationErr::MissingObjectKey {
                    api: self.name.as_str(),
                }
                .into()),
            },
        }
    }

    /// Splits `params` into the query string and headers of an executed
    /// request.
    pub fn request_parts(&self, params: &Params) -> Result<(Vec<QueryParam>, Multimap)> {
        self.build(params, false)
    }

    /// Query of a presigned URL: every parameter travels in the URL.
    pub fn presign_query(&self, params: &Params) -> Result<Vec<QueryParam>> {
        self.build(params, true).map(|(query, _)| query)
    }

    fn build(&self, params: &Params, all_in_query: bool) -> Result<(Vec<QueryParam>, Multimap)> {
        for declared in self.params.iter().filter(|p| p.required) {
            if !params.contains(declared.name) {
                return Err(ValidationErr::MissingParameter {
                    api: self.name.as_str(),
                    name: declared.name.to_string(),
                }
                .into());
            }
        }

        let mut query: Vec<QueryParam> = self.flags.iter().map(|f| QueryParam::flag(*f)).collect();
        for (k, v) in self.fixed {
            query.push(QueryParam::new(*k, *v));
        }

        let mut headers = Multimap::new();
        for (key, value) in params.defined() {
            if self.is_reserved(key) {
                continue;
            }
            let declared = self
                .param(key)
                .ok_or_else(|| ValidationErr::UnknownParameter {
                    api: self.name.as_str(),
                    name: key.to_string(),
                })?;
            match declared.location {
                Location::Header if !all_in_query => headers.add(key, value.to_string()),
                _ => set_query_param(&mut query, QueryParam::new(key, value.to_string())),
            }
        }

        Ok((query, headers))
    }
}

const CONDITIONAL_READ: [ParamSpec; 5] = [
    header(IF_MATCH),
    header(IF_NONE_MATCH),
    header(IF_MODIFIED_SINCE),
    header(IF_UNMODIFIED_SINCE),
    header(RANGE),
];

const CONTENT_HEADERS: [ParamSpec; 6] = [
    header(CONTENT_TYPE),
    header(CACHE_CONTROL),
    header(CONTENT_DISPOSITION),
    header(CONTENT_ENCODING),
    header(CONTENT_LANGUAGE),
    header(EXPIRES),
];

const UPLOAD_ID: ParamSpec = query("uploadId").required();
const PART_NUMBER: ParamSpec = query("partNumber").required();

static LIST_BUCKETS: Operation = Operation {
    name: ApiName::ListBuckets,
    method: Method::GET,
    target: Target::Bucket,
    flags: &[],
    fixed: &[],
    params: &[],
    request_body: Body::None,
    response_body: Body::Xml("ListAllMyBucketsResult"),
    content_md5: false,
};

static CREATE_BUCKET: Operation = Operation {
    name: ApiName::CreateBucket,
    method: Method::PUT,
    target: Target::Bucket,
    flags: &[],
    fixed: &[],
    params: &[],
    request_body: Body::Xml("CreateBucketConfiguration"),
    response_body: Body::None,
    content_md5: false,
};

static HEAD_BUCKET: Operation = Operation {
    name: ApiName::HeadBucket,
    method: Method::HEAD,
    target: Target::Bucket,
    flags: &[],
    fixed: &[],
    params: &[],
    request_body: Body::None,
    response_body: Body::None,
    content_md5: false,
};

static DELETE_BUCKET: Operation = Operation {
    name: ApiName::DeleteBucket,
    method: Method::DELETE,
    target: Target::Bucket,
    flags: &[],
    fixed: &[],
    params: &[],
    request_body: Body::None,
    response_body: Body::None,
    content_md5: false,
};

static GET_BUCKET_CORS: Operation = Operation {
    name: ApiName::GetBucketCors,
    method: Method::GET,
    target: Target::Bucket,
    flags: &["cors"],
    fixed: &[],
    params: &[],
    request_body: Body::None,
    response_body: Body::Xml("CORSConfiguration"),
    content_md5: false,
};

static PUT_BUCKET_CORS: Operation = Operation {
    name: ApiName::PutBucketCors,
    method: Method::PUT,
    target: Target::Bucket,
    flags: &["cors"],
    fixed: &[],
    params: &[],
    request_body: Body::Xml("CORSConfiguration"),
    response_body: Body::None,
    content_md5: true,
};

static DELETE_BUCKET_CORS: Operation = Operation {
    name: ApiName::DeleteBucketCors,
    method: Method::DELETE,
    target: Target::Bucket,
    flags: &["cors"],
    fixed: &[],
    params: &[],
    request_body: Body::None,
    response_body: Body::None,
    content_md5: false,
};

static GET_BUCKET_LIFECYCLE: Operation = Operation {
    name: ApiName::GetBucketLifecycleConfiguration,
    method: Method::GET,
    target: Target::Bucket,
    flags: &["lifecycle"],
    fixed: &[],
    params: &[],
    request_body: Body::None,
    response_body: Body::Xml("LifecycleConfiguration"),
    content_md5: false,
};

static PUT_BUCKET_LIFECYCLE: Operation = Operation {
    name: ApiName::PutBucketLifecycleConfiguration,
    method: Method::PUT,
    target: Target::Bucket,
    flags: &["lifecycle"],
    fixed: &[],
    params: &[],
    request_body: Body::Xml("LifecycleConfiguration"),
    response_body: Body::None,
    content_md5: true,
};

static GET_BUCKET_LOCATION: Operation = Operation {
    name: ApiName::GetBucketLocation,
    method: Method::GET,
    target: Target::Bucket,
    flags: &["location"],
    fixed: &[],
    params: &[],
    request_body: Body::None,
    response_body: Body::Xml("LocationConstraint"),
    content_md5: false,
};

static GET_BUCKET_ENCRYPTION: Operation = Operation {
    name: ApiName::GetBucketEncryption,
    method: Method::GET,
    target: Target::Bucket,
    flags: &["encryption"],
    fixed: &[],
    params: &[],
    request_body: Body::None,
    response_body: Body::Xml("ServerSideEncryptionConfiguration"),
    content_md5: false,
};

static HEAD_OBJECT: Operation = Operation {
    name: ApiName::HeadObject,
    method: Method::HEAD,
    target: Target::Object,
    flags: &[],
    fixed: &[],
    params: &[
        CONDITIONAL_READ[0],
        CONDITIONAL_READ[1],
        CONDITIONAL_READ[2],
        CONDITIONAL_READ[3],
        CONDITIONAL_READ[4],
        query("partNumber"),
        query("versionId"),
    ],
    request_body: Body::None,
    response_body: Body::None,
    content_md5: false,
};

static GET_OBJECT: Operation = Operation {
    name: ApiName::GetObject,
    method: Method::GET,
    target: Target::Object,
    flags: &[],
    fixed: &[],
    params: &[
        CONDITIONAL_READ[0],
        CONDITIONAL_READ[1],
        CONDITIONAL_READ[2],
        CONDITIONAL_READ[3],
        CONDITIONAL_READ[4],
        query("partNumber"),
        query("versionId"),
        query("response-cache-control"),
        query("response-content-disposition"),
        query("response-content-encoding"),
        query("response-content-language"),
        query("response-content-type"),
        query("response-expires"),
    ],
    request_body: Body::None,
    response_body: Body::Raw,
    content_md5: false,
};

static PUT_OBJECT: Operation = Operation {
    name: ApiName::PutObject,
    method: Method::PUT,
    target: Target::Object,
    flags: &[],
    fixed: &[],
    params: &[
        CONTENT_HEADERS[0],
        CONTENT_HEADERS[1],
        CONTENT_HEADERS[2],
        CONTENT_HEADERS[3],
        CONTENT_HEADERS[4],
        CONTENT_HEADERS[5],
        header(CONTENT_MD5),
    ],
    request_body: Body::Raw,
    response_body: Body::None,
    content_md5: false,
};

static DELETE_OBJECT: Operation = Operation {
    name: ApiName::DeleteObject,
    method: Method::DELETE,
    target: Target::Object,
    flags: &[],
    fixed: &[],
    params: &[query("versionId")],
    request_body: Body::None,
    response_body: Body::None,
    content_md5: false,
};

static LIST_OBJECTS: Operation = Operation {
    name: ApiName::ListObjects,
    method: Method::GET,
    target: Target::Bucket,
    flags: &[],
    fixed: &[],
    params: &[
        query("delimiter"),
        query("encoding-type"),
        query("marker"),
        query("max-keys"),
        query("prefix"),
    ],
    request_body: Body::None,
    response_body: Body::Xml("ListBucketResult"),
    content_md5: false,
};

static LIST_OBJECTS_V2: Operation = Operation {
    name: ApiName::ListObjectsV2,
    method: Method::GET,
    target: Target::Bucket,
    flags: &[],
    fixed: &[("list-type", "2")],
    params: &[
        query("continuation-token"),
        query("delimiter"),
        query("encoding-type"),
        query("fetch-owner"),
        query("max-keys"),
        query("prefix"),
        query("start-after"),
    ],
    request_body: Body::None,
    response_body: Body::Xml("ListBucketResult"),
    content_md5: false,
};

static DELETE_OBJECTS: Operation = Operation {
    name: ApiName::DeleteObjects,
    method: Method::POST,
    target: Target::Bucket,
    flags: &["delete"],
    fixed: &[],
    params: &[],
    request_body: Body::Xml("Delete"),
    response_body: Body::Xml("DeleteResult"),
    content_md5: true,
};

static LIST_MULTIPART_UPLOADS: Operation = Operation {
    name: ApiName::ListMultipartUploads,
    method: Method::GET,
    target: Target::Bucket,
    flags: &["uploads"],
    fixed: &[],
    params: &[
        query("delimiter"),
        query("encoding-type"),
        query("key-marker"),
        query("max-uploads"),
        query("prefix"),
        query("upload-id-marker"),
    ],
    request_body: Body::None,
    response_body: Body::Xml("ListMultipartUploadsResult"),
    content_md5: false,
};

static CREATE_MULTIPART_UPLOAD: Operation = Operation {
    name: ApiName::CreateMultipartUpload,
    method: Method::POST,
    target: Target::Object,
    flags: &["uploads"],
    fixed: &[],
    params: &[
        CONTENT_HEADERS[0],
        CONTENT_HEADERS[1],
        CONTENT_HEADERS[2],
        CONTENT_HEADERS[3],
        CONTENT_HEADERS[4],
        CONTENT_HEADERS[5],
    ],
    request_body: Body::None,
    response_body: Body::Xml("InitiateMultipartUploadResult"),
    content_md5: false,
};

static COMPLETE_MULTIPART_UPLOAD: Operation = Operation {
    name: ApiName::CompleteMultipartUpload,
    method: Method::POST,
    target: Target::Object,
    flags: &[],
    fixed: &[],
    params: &[UPLOAD_ID],
    request_body: Body::Xml("CompleteMultipartUpload"),
    response_body: Body::Xml("CompleteMultipartUploadResult"),
    content_md5: false,
};

static ABORT_MULTIPART_UPLOAD: Operation = Operation {
    name: ApiName::AbortMultipartUpload,
    method: Method::DELETE,
    target: Target::Object,
    flags: &[],
    fixed: &[],
    params: &[UPLOAD_ID],
    request_body: Body::None,
    response_body: Body::None,
    content_md5: false,
};

static COPY_OBJECT: Operation = Operation {
    name: ApiName::CopyObject,
    method: Method::PUT,
    target: Target::Object,
    flags: &[],
    fixed: &[],
    params: &[
        header(X_AMZ_COPY_SOURCE).required(),
        header(X_AMZ_COPY_SOURCE_IF_MATCH),
        header(X_AMZ_COPY_SOURCE_IF_NONE_MATCH),
        header(X_AMZ_COPY_SOURCE_IF_MODIFIED_SINCE),
        header(X_AMZ_COPY_SOURCE_IF_UNMODIFIED_SINCE),
        header(X_AMZ_METADATA_DIRECTIVE),
        CONTENT_HEADERS[0],
        CONTENT_HEADERS[1],
        CONTENT_HEADERS[2],
        CONTENT_HEADERS[3],
        CONTENT_HEADERS[4],
        CONTENT_HEADERS[5],
    ],
    request_body: Body::None,
    response_body: Body::Xml("CopyObjectResult"),
    content_md5: false,
};

static UPLOAD_PART: Operation = Operation {
    name: ApiName::UploadPart,
    method: Method::PUT,
    target: Target::Object,
    flags: &[],
    fixed: &[],
    params: &[UPLOAD_ID, PART_NUMBER, header(CONTENT_MD5)],
    request_body: Body::Raw,
    response_body: Body::None,
    content_md5: false,
};

static UPLOAD_PART_COPY: Operation = Operation {
    name: ApiName::UploadPartCopy,
    method: Method::PUT,
    target: Target::Object,
    flags: &[],
    fixed: &[],
    params: &[
        UPLOAD_ID,
        PART_NUMBER,
        header(X_AMZ_COPY_SOURCE).required(),
        header(X_AMZ_COPY_SOURCE_RANGE),
    ],
    request_body: Body::None,
    response_body: Body::Xml("CopyPartResult"),
    content_md5: false,
};

static LIST_PARTS: Operation = Operation {
    name: ApiName::ListParts,
    method: Method::GET,
    target: Target::Object,
    flags: &[],
    fixed: &[],
    params: &[UPLOAD_ID, query("max-parts"), query("part-number-marker")],
    request_body: Body::None,
    response_body: Body::Xml("ListPartsResult"),
    content_md5: false,
};

/// Returns the descriptor of `name`.
pub fn describe(name: ApiName) -> &'static Operation {
    match name {
        ApiName::ListBuckets => &LIST_BUCKETS,
        ApiName::CreateBucket => &CREATE_BUCKET,
        ApiName::HeadBucket => &HEAD_BUCKET,
        ApiName::DeleteBucket => &DELETE_BUCKET,
        ApiName::GetBucketCors => &GET_BUCKET_CORS,
        ApiName::PutBucketCors => &PUT_BUCKET_CORS,
        ApiName::DeleteBucketCors => &DELETE_BUCKET_CORS,
        ApiName::GetBucketLifecycleConfiguration => &GET_BUCKET_LIFECYCLE,
        ApiName::PutBucketLifecycleConfiguration => &PUT_BUCKET_LIFECYCLE,
        ApiName::GetBucketLocation => &GET_BUCKET_LOCATION,
        ApiName::GetBucketEncryption => &GET_BUCKET_ENCRYPTION,
        ApiName::HeadObject => &HEAD_OBJECT,
        ApiName::GetObject => &GET_OBJECT,
        ApiName::PutObject => &PUT_OBJECT,
        ApiName::DeleteObject => &DELETE_OBJECT,
        ApiName::ListObjects => &LIST_OBJECTS,
        ApiName::ListObjectsV2 => &LIST_OBJECTS_V2,
        ApiName::DeleteObjects => &DELETE_OBJECTS,
        ApiName::ListMultipartUploads => &LIST_MULTIPART_UPLOADS,
        ApiName::CreateMultipartUpload => &CREATE_MULTIPART_UPLOAD,
        ApiName::CompleteMultipartUpload => &COMPLETE_MULTIPART_UPLOAD,
        ApiName::AbortMultipartUpload => &ABORT_MULTIPART_UPLOAD,
        ApiName::CopyObject => &COPY_OBJECT,
        ApiName::UploadPart => &UPLOAD_PART,
        ApiName::UploadPartCopy => &UPLOAD_PART_COPY,
        ApiName::ListParts => &LIST_PARTS,
    }
}

/// Every descriptor, in [`ApiName::ALL`] order.
pub fn all_operations() -> impl Iterator<Item = &'static Operation> {
    ApiName::ALL.into_iter().map(describe)
}
