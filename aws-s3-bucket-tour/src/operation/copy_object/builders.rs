/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error;

use super::{CopyObjectInputBuilder, CopyObjectOutput};

/// Fluent builder for constructing a server-side copy
#[derive(Debug)]
pub struct CopyObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: CopyObjectInputBuilder,
}

impl CopyObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Copy the object
    pub async fn send(self) -> Result<CopyObjectOutput, error::Error> {
        let input = self.inner.build()?;
        crate::operation::copy_object::CopyObject::orchestrate(self.handle, input).await
    }

    /// Bucket to copy from.
    pub fn source_bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.source_bucket(input);
        self
    }

    /// Bucket to copy from.
    pub fn set_source_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_source_bucket(input);
        self
    }

    /// Bucket to copy from.
    pub fn get_source_bucket(&self) -> &Option<String> {
        self.inner.get_source_bucket()
    }

    /// Bucket to copy to.
    pub fn destination_bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.destination_bucket(input);
        self
    }

    /// Bucket to copy to.
    pub fn set_destination_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_destination_bucket(input);
        self
    }

    /// Bucket to copy to.
    pub fn get_destination_bucket(&self) -> &Option<String> {
        self.inner.get_destination_bucket()
    }

    /// Key of the source object.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Key of the source object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Key of the source object.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// Key of the copy. Defaults to the source key.
    pub fn destination_key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.destination_key(input);
        self
    }

    /// Key of the copy.
    pub fn set_destination_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_destination_key(input);
        self
    }
}
