/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for creating a bucket
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct CreateBucketInput {
    /// Prefix used to generate a unique bucket name.
    pub bucket_prefix: Option<String>,

    /// Explicit bucket name. Takes precedence over `bucket_prefix`.
    pub bucket: Option<String>,
}

impl CreateBucketInput {
    /// Creates a new builder-style object to manufacture [`CreateBucketInput`](crate::operation::create_bucket::CreateBucketInput).
    pub fn builder() -> CreateBucketInputBuilder {
        CreateBucketInputBuilder::default()
    }

    /// Prefix used to generate a unique bucket name.
    pub fn bucket_prefix(&self) -> Option<&str> {
        self.bucket_prefix.as_deref()
    }

    /// Explicit bucket name.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }
}

/// A builder for [`CreateBucketInput`](crate::operation::create_bucket::CreateBucketInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct CreateBucketInputBuilder {
    pub(crate) bucket_prefix: Option<String>,
    pub(crate) bucket: Option<String>,
}

impl CreateBucketInputBuilder {
    /// Set the prefix used to generate a unique bucket name.
    ///
    /// A random UUID is appended to the prefix, see [`generate_bucket_name`](crate::types::generate_bucket_name).
    pub fn bucket_prefix(mut self, input: impl Into<String>) -> Self {
        self.bucket_prefix = Some(input.into());
        self
    }

    /// Set the prefix used to generate a unique bucket name.
    pub fn set_bucket_prefix(mut self, input: Option<String>) -> Self {
        self.bucket_prefix = input;
        self
    }

    /// Prefix used to generate a unique bucket name.
    pub fn get_bucket_prefix(&self) -> &Option<String> {
        &self.bucket_prefix
    }

    /// Set an explicit bucket name to create.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set an explicit bucket name to create.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// Explicit bucket name to create.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Consumes the builder and constructs a [`CreateBucketInput`](crate::operation::create_bucket::CreateBucketInput).
    pub fn build(self) -> Result<CreateBucketInput, BuildError> {
        if self.bucket.is_none() && self.bucket_prefix.is_none() {
            return Err(BuildError::missing_field(
                "bucket",
                "either a bucket name or a bucket prefix is required",
            ));
        }

        Ok(CreateBucketInput {
            bucket_prefix: self.bucket_prefix,
            bucket: self.bucket,
        })
    }
}
