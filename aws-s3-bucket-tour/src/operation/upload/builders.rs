/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use aws_sdk_s3::types::{ObjectCannedAcl, ServerSideEncryption, StorageClass};

use crate::error;

use super::{UploadInputBuilder, UploadOutput};

/// Fluent builder for constructing a single object upload
#[derive(Debug)]
pub struct UploadFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: UploadInputBuilder,
}

impl UploadFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Upload the file and wait for S3 to acknowledge it
    pub async fn send(self) -> Result<UploadOutput, error::Error> {
        let input = self.inner.build()?;
        crate::operation::upload::Upload::orchestrate(self.handle, input).await
    }

    /// The bucket name to which the object is uploaded.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket name to which the object is uploaded.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket name to which the object is uploaded.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Object key for which the upload is initiated.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Object key for which the upload is initiated.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Object key for which the upload is initiated.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// Path of the local file to upload.
    pub fn path(mut self, input: impl Into<PathBuf>) -> Self {
        self.inner = self.inner.path(input);
        self
    }

    /// Path of the local file to upload.
    pub fn set_path(mut self, input: Option<PathBuf>) -> Self {
        self.inner = self.inner.set_path(input);
        self
    }

    /// Path of the local file to upload.
    pub fn get_path(&self) -> &Option<PathBuf> {
        self.inner.get_path()
    }

    /// The canned ACL to apply to the object.
    pub fn acl(mut self, input: ObjectCannedAcl) -> Self {
        self.inner = self.inner.acl(input);
        self
    }

    /// The canned ACL to apply to the object.
    pub fn set_acl(mut self, input: Option<ObjectCannedAcl>) -> Self {
        self.inner = self.inner.set_acl(input);
        self
    }

    /// The server-side encryption algorithm used when storing this object.
    pub fn server_side_encryption(mut self, input: ServerSideEncryption) -> Self {
        self.inner = self.inner.server_side_encryption(input);
        self
    }

    /// The server-side encryption algorithm used when storing this object.
    pub fn set_server_side_encryption(mut self, input: Option<ServerSideEncryption>) -> Self {
        self.inner = self.inner.set_server_side_encryption(input);
        self
    }

    /// The storage class to store the object in.
    pub fn storage_class(mut self, input: StorageClass) -> Self {
        self.inner = self.inner.storage_class(input);
        self
    }

    /// The storage class to store the object in.
    pub fn set_storage_class(mut self, input: Option<StorageClass>) -> Self {
        self.inner = self.inner.set_storage_class(input);
        self
    }

    /// Adds a key-value pair to the user-defined object metadata.
    pub fn metadata(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.inner = self.inner.metadata(k, v);
        self
    }

    /// User-defined metadata to store with the object.
    pub fn set_metadata(mut self, input: Option<HashMap<String, String>>) -> Self {
        self.inner = self.inner.set_metadata(input);
        self
    }
}

impl crate::operation::upload::input::UploadInputBuilder {
    /// Upload a file with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<UploadOutput, error::Error> {
        let mut fluent_builder = client.upload();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
