/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::ServerSideEncryption;

/// Output type for a single object upload
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct UploadOutput {
    /// The key the object was stored under.
    pub key: String,

    /// Entity tag of the uploaded object.
    pub e_tag: Option<String>,

    /// Version of the object, if versioning is enabled on the bucket.
    pub version_id: Option<String>,

    /// The server-side encryption algorithm S3 used to store the object.
    pub server_side_encryption: Option<ServerSideEncryption>,

    /// Number of bytes uploaded.
    pub size: u64,
}

impl UploadOutput {
    /// The key the object was stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Entity tag of the uploaded object.
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// Version of the object, if versioning is enabled on the bucket.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// The server-side encryption algorithm S3 used to store the object.
    pub fn server_side_encryption(&self) -> Option<&ServerSideEncryption> {
        self.server_side_encryption.as_ref()
    }

    /// Number of bytes uploaded.
    pub fn size(&self) -> u64 {
        self.size
    }
}
