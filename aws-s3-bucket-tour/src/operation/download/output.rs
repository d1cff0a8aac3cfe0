/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

/// Output from downloading an object from Amazon S3
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct DownloadOutput {
    /// The file the object was written to.
    pub destination: PathBuf,

    /// Number of bytes written to `destination`.
    pub bytes_written: u64,

    /// Version of the object that was downloaded.
    pub version_id: Option<String>,
}

impl DownloadOutput {
    /// The file the object was written to.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Number of bytes written to the destination.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Version of the object that was downloaded.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }
}
