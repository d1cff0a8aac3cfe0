/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::{FailedDelete, ObjectVersion};

/// Output type for deleting every object version in a bucket
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct DeleteAllObjectVersionsOutput {
    /// Versions and delete markers S3 reported as deleted.
    pub deleted: Vec<ObjectVersion>,

    /// Entries S3 refused to delete.
    pub errors: Vec<FailedDelete>,
}

impl DeleteAllObjectVersionsOutput {
    /// Versions and delete markers S3 reported as deleted.
    pub fn deleted(&self) -> &[ObjectVersion] {
        &self.deleted
    }

    /// Entries S3 refused to delete.
    pub fn errors(&self) -> &[FailedDelete] {
        &self.errors
    }

    /// True when every listed version was removed.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}
