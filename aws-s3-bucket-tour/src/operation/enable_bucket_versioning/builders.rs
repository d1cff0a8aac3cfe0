/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error;

use super::{EnableBucketVersioningInputBuilder, EnableBucketVersioningOutput};

/// Fluent builder for the [`EnableBucketVersioning`](crate::operation::enable_bucket_versioning) operation
#[derive(Debug)]
pub struct EnableBucketVersioningFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: EnableBucketVersioningInputBuilder,
}

impl EnableBucketVersioningFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Enable versioning and read back the bucket's versioning status
    pub async fn send(self) -> Result<EnableBucketVersioningOutput, error::Error> {
        let input = self.inner.build()?;
        crate::operation::enable_bucket_versioning::EnableBucketVersioning::orchestrate(
            self.handle,
            input,
        )
        .await
    }

    /// Set the bucket name.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket name.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket name.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }
}
