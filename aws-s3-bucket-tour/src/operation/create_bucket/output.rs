/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::{BucketName, BucketStatus};

/// Output type for creating a bucket
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct CreateBucketOutput {
    /// The name of the bucket
    pub bucket: BucketName,

    /// The region the bucket was requested in, if known
    pub region: Option<String>,

    /// Whether the bucket was created or already owned by the caller
    pub status: BucketStatus,

    /// The location returned by S3 for a newly created bucket
    pub location: Option<String>,
}

impl CreateBucketOutput {
    /// The name of the bucket
    pub fn bucket(&self) -> &BucketName {
        &self.bucket
    }

    /// The region the bucket was requested in, if known
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Whether the bucket was created or already owned by the caller
    pub fn status(&self) -> BucketStatus {
        self.status
    }

    /// The location returned by S3 for a newly created bucket
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}
