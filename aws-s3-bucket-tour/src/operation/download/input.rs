/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

use aws_smithy_types::error::operation::BuildError;

/// Input type for downloading a single object to a local file
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct DownloadInput {
    /// The bucket name containing the object.
    pub bucket: Option<String>,

    /// Key of the object to get.
    pub key: Option<String>,

    /// Version of the object to get. Default is the current version.
    pub version_id: Option<String>,

    /// Local file the object is written to. Existing files are overwritten.
    pub destination: Option<PathBuf>,
}

impl DownloadInput {
    /// Creates a new builder-style object to manufacture [`DownloadInput`](crate::operation::download::DownloadInput).
    pub fn builder() -> DownloadInputBuilder {
        DownloadInputBuilder::default()
    }

    /// The bucket name containing the object.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Key of the object to get.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Version of the object to get.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// Local file the object is written to.
    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }
}

/// A builder for [`DownloadInput`](crate::operation::download::DownloadInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct DownloadInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) version_id: Option<String>,
    pub(crate) destination: Option<PathBuf>,
}

impl DownloadInputBuilder {
    /// The bucket name containing the object.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket name containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name containing the object.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Key of the object to get.
    ///
    /// NOTE: A key is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key of the object to get.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key of the object to get.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Version of the object to get.
    pub fn version_id(mut self, input: impl Into<String>) -> Self {
        self.version_id = Some(input.into());
        self
    }

    /// Version of the object to get.
    pub fn set_version_id(mut self, input: Option<String>) -> Self {
        self.version_id = input;
        self
    }

    /// Version of the object to get.
    pub fn get_version_id(&self) -> &Option<String> {
        &self.version_id
    }

    /// Local file the object is written to.
    ///
    /// NOTE: A destination is required.
    pub fn destination(mut self, input: impl Into<PathBuf>) -> Self {
        self.destination = Some(input.into());
        self
    }

    /// Local file the object is written to.
    pub fn set_destination(mut self, input: Option<PathBuf>) -> Self {
        self.destination = input;
        self
    }

    /// Local file the object is written to.
    pub fn get_destination(&self) -> &Option<PathBuf> {
        &self.destination
    }

    /// Consumes the builder and constructs a [`DownloadInput`](crate::operation::download::DownloadInput).
    pub fn build(self) -> Result<DownloadInput, BuildError> {
        if self.bucket.is_none() {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        if self.key.is_none() {
            return Err(BuildError::missing_field("key", "A key is required"));
        }

        if self.destination.is_none() {
            return Err(BuildError::missing_field(
                "destination",
                "A destination file is required",
            ));
        }

        Ok(DownloadInput {
            bucket: self.bucket,
            key: self.key,
            version_id: self.version_id,
            destination: self.destination,
        })
    }
}
