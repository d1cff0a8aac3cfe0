/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for a server-side copy
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct CopyObjectOutput {
    /// Bucket the copy was written to.
    pub destination_bucket: String,

    /// Key the copy was written to.
    pub destination_key: String,

    /// Entity tag of the copy.
    pub e_tag: Option<String>,

    /// Version of the copy, if versioning is enabled on the destination bucket.
    pub version_id: Option<String>,

    /// Version of the source object that was copied.
    pub copy_source_version_id: Option<String>,
}

impl CopyObjectOutput {
    /// Bucket the copy was written to.
    pub fn destination_bucket(&self) -> &str {
        &self.destination_bucket
    }

    /// Key the copy was written to.
    pub fn destination_key(&self) -> &str {
        &self.destination_key
    }

    /// Entity tag of the copy.
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// Version of the copy.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// Version of the source object that was copied.
    pub fn copy_source_version_id(&self) -> Option<&str> {
        self.copy_source_version_id.as_deref()
    }
}
