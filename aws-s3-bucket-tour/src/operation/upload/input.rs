/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use aws_sdk_s3::types::{ObjectCannedAcl, ServerSideEncryption, StorageClass};
use aws_smithy_types::error::operation::BuildError;

/// Input type for uploading a local file as a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct UploadInput {
    /// The bucket name to which the object is uploaded.
    pub bucket: Option<String>,

    /// Object key. Defaults to the file name of `path`.
    pub key: Option<String>,

    /// Path of the local file to upload.
    pub path: Option<PathBuf>,

    /// The canned ACL to apply to the object.
    pub acl: Option<ObjectCannedAcl>,

    /// The server-side encryption algorithm used when storing this object.
    pub server_side_encryption: Option<ServerSideEncryption>,

    /// The storage class to store the object in.
    pub storage_class: Option<StorageClass>,

    /// User-defined metadata to store with the object.
    pub metadata: Option<HashMap<String, String>>,
}

impl UploadInput {
    /// Creates a new builder-style object to manufacture [`UploadInput`](crate::operation::upload::UploadInput).
    pub fn builder() -> UploadInputBuilder {
        UploadInputBuilder::default()
    }

    /// The bucket name to which the object is uploaded.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Object key.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Path of the local file to upload.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The canned ACL to apply to the object.
    pub fn acl(&self) -> Option<&ObjectCannedAcl> {
        self.acl.as_ref()
    }

    /// The server-side encryption algorithm used when storing this object.
    pub fn server_side_encryption(&self) -> Option<&ServerSideEncryption> {
        self.server_side_encryption.as_ref()
    }

    /// The storage class to store the object in.
    pub fn storage_class(&self) -> Option<&StorageClass> {
        self.storage_class.as_ref()
    }

    /// User-defined metadata to store with the object.
    pub fn metadata(&self) -> Option<&HashMap<String, String>> {
        self.metadata.as_ref()
    }
}

/// A builder for [`UploadInput`](crate::operation::upload::UploadInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct UploadInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) path: Option<PathBuf>,
    pub(crate) acl: Option<ObjectCannedAcl>,
    pub(crate) server_side_encryption: Option<ServerSideEncryption>,
    pub(crate) storage_class: Option<StorageClass>,
    pub(crate) metadata: Option<HashMap<String, String>>,
}

impl UploadInputBuilder {
    /// The bucket name to which the object is uploaded.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket name to which the object is uploaded.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name to which the object is uploaded.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Object key for which the upload is initiated.
    ///
    /// Defaults to the file name of the uploaded file.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Object key for which the upload is initiated.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Object key for which the upload is initiated.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Path of the local file to upload.
    ///
    /// NOTE: A path is required.
    pub fn path(mut self, input: impl Into<PathBuf>) -> Self {
        self.path = Some(input.into());
        self
    }

    /// Path of the local file to upload.
    pub fn set_path(mut self, input: Option<PathBuf>) -> Self {
        self.path = input;
        self
    }

    /// Path of the local file to upload.
    pub fn get_path(&self) -> &Option<PathBuf> {
        &self.path
    }

    /// The canned ACL to apply to the object, e.g. `public-read`.
    pub fn acl(mut self, input: ObjectCannedAcl) -> Self {
        self.acl = Some(input);
        self
    }

    /// The canned ACL to apply to the object.
    pub fn set_acl(mut self, input: Option<ObjectCannedAcl>) -> Self {
        self.acl = input;
        self
    }

    /// The canned ACL to apply to the object.
    pub fn get_acl(&self) -> &Option<ObjectCannedAcl> {
        &self.acl
    }

    /// The server-side encryption algorithm used when storing this object, e.g. `AES256`.
    pub fn server_side_encryption(mut self, input: ServerSideEncryption) -> Self {
        self.server_side_encryption = Some(input);
        self
    }

    /// The server-side encryption algorithm used when storing this object.
    pub fn set_server_side_encryption(mut self, input: Option<ServerSideEncryption>) -> Self {
        self.server_side_encryption = input;
        self
    }

    /// The server-side encryption algorithm used when storing this object.
    pub fn get_server_side_encryption(&self) -> &Option<ServerSideEncryption> {
        &self.server_side_encryption
    }

    /// The storage class to store the object in, e.g. `STANDARD_IA`.
    ///
    /// Default is `STANDARD`.
    pub fn storage_class(mut self, input: StorageClass) -> Self {
        self.storage_class = Some(input);
        self
    }

    /// The storage class to store the object in.
    pub fn set_storage_class(mut self, input: Option<StorageClass>) -> Self {
        self.storage_class = input;
        self
    }

    /// The storage class to store the object in.
    pub fn get_storage_class(&self) -> &Option<StorageClass> {
        &self.storage_class
    }

    /// Adds a key-value pair to the user-defined object metadata.
    ///
    /// To override the contents of this collection use [`set_metadata`](Self::set_metadata).
    pub fn metadata(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(HashMap::new)
            .insert(k.into(), v.into());
        self
    }

    /// User-defined metadata to store with the object.
    pub fn set_metadata(mut self, input: Option<HashMap<String, String>>) -> Self {
        self.metadata = input;
        self
    }

    /// User-defined metadata to store with the object.
    pub fn get_metadata(&self) -> &Option<HashMap<String, String>> {
        &self.metadata
    }

    /// Consumes the builder and constructs a [`UploadInput`](crate::operation::upload::UploadInput).
    pub fn build(self) -> Result<UploadInput, BuildError> {
        if self.bucket.is_none() {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        let path = match self.path {
            Some(path) => path,
            None => return Err(BuildError::missing_field("path", "A file path is required")),
        };

        let key = match self.key {
            Some(key) => key,
            None => path
                .file_name()
                .and_then(|name| name.to_str())
                .map(str::to_owned)
                .ok_or_else(|| {
                    BuildError::invalid_field(
                        "key",
                        format!("no key set and {} has no UTF-8 file name", path.display()),
                    )
                })?,
        };

        Ok(UploadInput {
            bucket: self.bucket,
            key: Some(key),
            path: Some(path),
            acl: self.acl,
            server_side_encryption: self.server_side_encryption,
            storage_class: self.storage_class,
            metadata: self.metadata,
        })
    }
}
