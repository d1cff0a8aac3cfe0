/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_http::label::{fmt_string, EncodingStrategy};
use aws_smithy_types::error::operation::BuildError;

/// Input type for a server-side copy of a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct CopyObjectInput {
    /// Bucket to copy from.
    pub source_bucket: Option<String>,

    /// Bucket to copy to.
    pub destination_bucket: Option<String>,

    /// Key of the source object.
    pub key: Option<String>,

    /// Key of the copy. Defaults to `key`.
    pub destination_key: Option<String>,
}

impl CopyObjectInput {
    /// Creates a new builder-style object to manufacture [`CopyObjectInput`](crate::operation::copy_object::CopyObjectInput).
    pub fn builder() -> CopyObjectInputBuilder {
        CopyObjectInputBuilder::default()
    }

    /// Bucket to copy from.
    pub fn source_bucket(&self) -> Option<&str> {
        self.source_bucket.as_deref()
    }

    /// Bucket to copy to.
    pub fn destination_bucket(&self) -> Option<&str> {
        self.destination_bucket.as_deref()
    }

    /// Key of the source object.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Key of the copy.
    pub fn destination_key(&self) -> Option<&str> {
        self.destination_key.as_deref().or(self.key.as_deref())
    }

    /// Value of the `x-amz-copy-source` header, with the key URL-encoded
    pub(crate) fn copy_source(&self) -> String {
        format!(
            "{}/{}",
            self.source_bucket().unwrap_or_default(),
            fmt_string(self.key().unwrap_or_default(), EncodingStrategy::Greedy)
        )
    }
}

/// A builder for [`CopyObjectInput`](crate::operation::copy_object::CopyObjectInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct CopyObjectInputBuilder {
    pub(crate) source_bucket: Option<String>,
    pub(crate) destination_bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) destination_key: Option<String>,
}

impl CopyObjectInputBuilder {
    /// Bucket to copy from.
    ///
    /// NOTE: A source bucket is required.
    pub fn source_bucket(mut self, input: impl Into<String>) -> Self {
        self.source_bucket = Some(input.into());
        self
    }

    /// Bucket to copy from.
    pub fn set_source_bucket(mut self, input: Option<String>) -> Self {
        self.source_bucket = input;
        self
    }

    /// Bucket to copy from.
    pub fn get_source_bucket(&self) -> &Option<String> {
        &self.source_bucket
    }

    /// Bucket to copy to.
    ///
    /// NOTE: A destination bucket is required.
    pub fn destination_bucket(mut self, input: impl Into<String>) -> Self {
        self.destination_bucket = Some(input.into());
        self
    }

    /// Bucket to copy to.
    pub fn set_destination_bucket(mut self, input: Option<String>) -> Self {
        self.destination_bucket = input;
        self
    }

    /// Bucket to copy to.
    pub fn get_destination_bucket(&self) -> &Option<String> {
        &self.destination_bucket
    }

    /// Key of the source object.
    ///
    /// NOTE: A key is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key of the source object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key of the source object.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Key of the copy. Defaults to the source key.
    pub fn destination_key(mut self, input: impl Into<String>) -> Self {
        self.destination_key = Some(input.into());
        self
    }

    /// Key of the copy.
    pub fn set_destination_key(mut self, input: Option<String>) -> Self {
        self.destination_key = input;
        self
    }

    /// Key of the copy.
    pub fn get_destination_key(&self) -> &Option<String> {
        &self.destination_key
    }

    /// Consumes the builder and constructs a [`CopyObjectInput`](crate::operation::copy_object::CopyObjectInput).
    pub fn build(self) -> Result<CopyObjectInput, BuildError> {
        if self.source_bucket.is_none() {
            return Err(BuildError::missing_field(
                "source_bucket",
                "A source bucket is required",
            ));
        }

        if self.destination_bucket.is_none() {
            return Err(BuildError::missing_field(
                "destination_bucket",
                "A destination bucket is required",
            ));
        }

        if self.key.is_none() {
            return Err(BuildError::missing_field("key", "A key is required"));
        }

        Ok(CopyObjectInput {
            source_bucket: self.source_bucket,
            destination_bucket: self.destination_bucket,
            key: self.key,
            destination_key: self.destination_key,
        })
    }
}

#[cfg(test)]
mod test {
    use super::CopyObjectInput;

    fn copy_source(key: &str) -> String {
        CopyObjectInput::builder()
            .source_bucket("src")
            .destination_bucket("dst")
            .key(key)
            .build()
            .unwrap()
            .copy_source()
    }

    #[test]
    fn test_copy_source_plain_key() {
        assert_eq!("src/abc123firstfile.txt", copy_source("abc123firstfile.txt"));
    }

    #[test]
    fn test_copy_source_encodes_key() {
        assert_eq!("src/dir/my%20file%2B1.txt", copy_source("dir/my file+1.txt"));
        assert_eq!("src/caf%C3%A9.txt", copy_source("café.txt"));
    }

    #[test]
    fn test_destination_key_defaults_to_key() {
        let input = CopyObjectInput::builder()
            .source_bucket("src")
            .destination_bucket("dst")
            .key("a.txt")
            .build()
            .unwrap();
        assert_eq!(Some("a.txt"), input.destination_key());
    }
}
