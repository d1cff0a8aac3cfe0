/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error;

use super::{CreateBucketInputBuilder, CreateBucketOutput};

/// Fluent builder for constructing a bucket creation request
#[derive(Debug)]
pub struct CreateBucketFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: CreateBucketInputBuilder,
}

impl CreateBucketFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Create the bucket
    pub async fn send(self) -> Result<CreateBucketOutput, error::Error> {
        let input = self.inner.build()?;
        crate::operation::create_bucket::CreateBucket::orchestrate(self.handle, input).await
    }

    /// Set the prefix used to generate a unique bucket name.
    pub fn bucket_prefix(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket_prefix(input);
        self
    }

    /// Set the prefix used to generate a unique bucket name.
    pub fn set_bucket_prefix(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket_prefix(input);
        self
    }

    /// Prefix used to generate a unique bucket name.
    pub fn get_bucket_prefix(&self) -> &Option<String> {
        self.inner.get_bucket_prefix()
    }

    /// Set an explicit bucket name to create.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set an explicit bucket name to create.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// Explicit bucket name to create.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }
}

impl crate::operation::create_bucket::input::CreateBucketInputBuilder {
    /// Create a bucket with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<CreateBucketOutput, error::Error> {
        let mut fluent_builder = client.create_bucket();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
