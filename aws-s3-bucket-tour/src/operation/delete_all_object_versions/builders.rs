/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error;

use super::{DeleteAllObjectVersionsInputBuilder, DeleteAllObjectVersionsOutput};

/// Fluent builder for the [`DeleteAllObjectVersions`](crate::operation::delete_all_object_versions) operation
#[derive(Debug)]
pub struct DeleteAllObjectVersionsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DeleteAllObjectVersionsInputBuilder,
}

impl DeleteAllObjectVersionsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// List and delete every version and delete marker in the bucket
    pub async fn send(self) -> Result<DeleteAllObjectVersionsOutput, error::Error> {
        let input = self.inner.build()?;
        crate::operation::delete_all_object_versions::DeleteAllObjectVersions::orchestrate(
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
