/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::VersioningStatus;

/// Output type for enabling bucket versioning
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct EnableBucketVersioningOutput {
    /// The bucket name.
    pub bucket: String,

    /// Versioning status reported by S3 after the change.
    pub status: VersioningStatus,
}

impl EnableBucketVersioningOutput {
    /// The bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Versioning status reported by S3 after the change.
    pub fn status(&self) -> &VersioningStatus {
        &self.status
    }
}
