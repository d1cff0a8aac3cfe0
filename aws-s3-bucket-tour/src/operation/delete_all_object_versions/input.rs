/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for the [`DeleteAllObjectVersions`](crate::operation::delete_all_object_versions) operation
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct DeleteAllObjectVersionsInput {
    /// The bucket name.
    pub bucket: Option<String>,
}

impl DeleteAllObjectVersionsInput {
    /// Creates a new builder-style object to manufacture [`DeleteAllObjectVersionsInput`](crate::operation::delete_all_object_versions::DeleteAllObjectVersionsInput).
    pub fn builder() -> DeleteAllObjectVersionsInputBuilder {
        DeleteAllObjectVersionsInputBuilder::default()
    }

    /// The bucket name.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }
}

/// A builder for [`DeleteAllObjectVersionsInput`](crate::operation::delete_all_object_versions::DeleteAllObjectVersionsInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct DeleteAllObjectVersionsInputBuilder {
    pub(crate) bucket: Option<String>,
}

impl DeleteAllObjectVersionsInputBuilder {
    /// Set the bucket name.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket name.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Consumes the builder and constructs a [`DeleteAllObjectVersionsInput`](crate::operation::delete_all_object_versions::DeleteAllObjectVersionsInput).
    pub fn build(self) -> Result<DeleteAllObjectVersionsInput, BuildError> {
        if self.bucket.is_none() {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        Ok(DeleteAllObjectVersionsInput {
            bucket: self.bucket,
        })
    }
}
