/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for the [`EnableBucketVersioning`](crate::operation::enable_bucket_versioning) operation
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct EnableBucketVersioningInput {
    /// The bucket name.
    pub bucket: Option<String>,
}

impl EnableBucketVersioningInput {
    /// Creates a new builder-style object to manufacture [`EnableBucketVersioningInput`](crate::operation::enable_bucket_versioning::EnableBucketVersioningInput).
    pub fn builder() -> EnableBucketVersioningInputBuilder {
        EnableBucketVersioningInputBuilder::default()
    }

    /// The bucket name.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }
}

/// A builder for [`EnableBucketVersioningInput`](crate::operation::enable_bucket_versioning::EnableBucketVersioningInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct EnableBucketVersioningInputBuilder {
    pub(crate) bucket: Option<String>,
}

impl EnableBucketVersioningInputBuilder {
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

    /// Consumes the builder and constructs a [`EnableBucketVersioningInput`](crate::operation::enable_bucket_versioning::EnableBucketVersioningInput).
    pub fn build(self) -> Result<EnableBucketVersioningInput, BuildError> {
        if self.bucket.is_none() {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        Ok(EnableBucketVersioningInput {
            bucket: self.bucket,
        })
    }
}
