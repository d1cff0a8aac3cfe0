/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use crate::error;

/// Minimum length of an Amazon S3 bucket name
pub const MIN_BUCKET_NAME_LEN: usize = 3;

/// Maximum length of an Amazon S3 bucket name
pub const MAX_BUCKET_NAME_LEN: usize = 63;

/// Generate a unique bucket name by appending a random (v4) UUID to `prefix`.
///
/// The UUID adds 36 characters, so the prefix must be at most 27 characters long for the
/// result to be a valid bucket name. Use [`BucketName::parse`] to check.
pub fn generate_bucket_name(prefix: &str) -> String {
    let token = uuid::Uuid::new_v4();
    format!("{prefix}{}", token.hyphenated())
}

/// A bucket name that satisfies the Amazon S3 naming rules for general purpose buckets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketName(String);

impl BucketName {
    /// Validate `name` against the S3 bucket naming rules.
    pub fn parse(name: impl Into<String>) -> Result<Self, error::Error> {
        let name = name.into();
        let len = name.len();
        if !(MIN_BUCKET_NAME_LEN..=MAX_BUCKET_NAME_LEN).contains(&len) {
            return Err(error::invalid_input(format!(
                "bucket name `{name}` must be between {MIN_BUCKET_NAME_LEN} and {MAX_BUCKET_NAME_LEN} characters long (got {len})"
            )));
        }

        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '.'))
        {
            return Err(error::invalid_input(format!(
                "bucket name `{name}` contains invalid character `{c}`"
            )));
        }

        let alnum = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());
        if !alnum(name.chars().next()) || !alnum(name.chars().last()) {
            return Err(error::invalid_input(format!(
                "bucket name `{name}` must begin and end with a letter or number"
            )));
        }

        Ok(Self(name))
    }

    /// Generate a new random bucket name from `prefix` and validate it.
    pub fn generate(prefix: &str) -> Result<Self, error::Error> {
        Self::parse(generate_bucket_name(prefix))
    }

    /// The bucket name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BucketName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<BucketName> for String {
    fn from(value: BucketName) -> Self {
        value.0
    }
}

/// Result of a successful `CreateBucket` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketStatus {
    /// The bucket was newly created by this request.
    Created,

    /// The bucket already existed and is owned by the caller.
    AlreadyOwnedByYou,
}

/// Versioning state of a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VersioningStatus {
    /// Versioning has never been enabled on the bucket.
    #[default]
    Unversioned,

    /// Versioning is enabled.
    Enabled,

    /// Versioning was enabled at some point and is now suspended.
    Suspended,
}

impl From<Option<&aws_sdk_s3::types::BucketVersioningStatus>> for VersioningStatus {
    fn from(value: Option<&aws_sdk_s3::types::BucketVersioningStatus>) -> Self {
        use aws_sdk_s3::types::BucketVersioningStatus;
        match value {
            Some(BucketVersioningStatus::Enabled) => VersioningStatus::Enabled,
            Some(BucketVersioningStatus::Suspended) => VersioningStatus::Suspended,
            // S3 omits the status for buckets that were never versioned
            _ => VersioningStatus::Unversioned,
        }
    }
}

impl fmt::Display for VersioningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersioningStatus::Unversioned => f.write_str("Unversioned"),
            VersioningStatus::Enabled => f.write_str("Enabled"),
            VersioningStatus::Suspended => f.write_str("Suspended"),
        }
    }
}

/// A single version of an object (or a delete marker) in a bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectVersion {
    key: String,
    version_id: Option<String>,
    delete_marker: bool,
}

impl ObjectVersion {
    /// Create a new object version entry.
    pub fn new(key: impl Into<String>, version_id: Option<String>) -> Self {
        Self {
            key: key.into(),
            version_id,
            delete_marker: false,
        }
    }

    pub(crate) fn delete_marker(mut self) -> Self {
        self.delete_marker = true;
        self
    }

    /// The object key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The version ID, `None` for objects written before versioning was enabled on the
    /// bucket.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// Whether this entry is a delete marker rather than an object version
    pub fn is_delete_marker(&self) -> bool {
        self.delete_marker
    }

    pub(crate) fn to_identifier(
        &self,
    ) -> Result<aws_sdk_s3::types::ObjectIdentifier, error::Error> {
        Ok(aws_sdk_s3::types::ObjectIdentifier::builder()
            .key(self.key.clone())
            .set_version_id(self.version_id.clone())
            .build()?)
    }
}

/// Failure to delete a single key as part of a bulk delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDelete {
    pub(crate) key: Option<String>,
    pub(crate) version_id: Option<String>,
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
}

impl FailedDelete {
    /// The key that could not be deleted
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The version ID that could not be deleted
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// The S3 error code
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The S3 error message
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl From<&aws_sdk_s3::types::Error> for FailedDelete {
    fn from(value: &aws_sdk_s3::types::Error) -> Self {
        Self {
            key: value.key().map(str::to_owned),
            version_id: value.version_id().map(str::to_owned),
            code: value.code().map(str::to_owned),
            message: value.message().map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{generate_bucket_name, BucketName, MAX_BUCKET_NAME_LEN, MIN_BUCKET_NAME_LEN};
    use crate::error::ErrorKind;

    #[test]
    fn test_generated_name_format() {
        let name = generate_bucket_name("test-bucket-");
        let token = name.strip_prefix("test-bucket-").expect("prefix kept");
        assert_eq!(36, token.len());
        assert!(token
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c) || c == '-'));
        assert_eq!(4, token.matches('-').count());
    }

    #[test]
    fn test_generated_names_are_unique() {
        let a = generate_bucket_name("test-bucket-");
        let b = generate_bucket_name("test-bucket-");
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_name_length_bounds() {
        for prefix in ["", "a", "first-tour-bucket-", "secondpythonbucket"] {
            let name = BucketName::generate(prefix).unwrap();
            let len = name.as_str().len();
            assert!((MIN_BUCKET_NAME_LEN..=MAX_BUCKET_NAME_LEN).contains(&len));
            assert!(name.as_str().starts_with(prefix));
        }
    }

    #[test]
    fn test_long_prefix_rejected() {
        let prefix = "a".repeat(28);
        let err = BucketName::generate(&prefix).unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }

    #[test]
    fn test_parse_rules() {
        assert!(BucketName::parse("my-bucket.logs").is_ok());
        assert!(BucketName::parse("ab").is_err());
        assert!(BucketName::parse("My-Bucket").is_err());
        assert!(BucketName::parse("bucket_name").is_err());
        assert!(BucketName::parse("-bucket").is_err());
        assert!(BucketName::parse("bucket-").is_err());
    }
}
