/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

/// Request type for uploads to Amazon S3
pub use input::{UploadInput, UploadInputBuilder};
/// Response type for uploads to Amazon S3
pub use output::UploadOutput;

use std::sync::Arc;

use aws_sdk_s3::primitives::ByteStream;

use crate::error;

/// Operation struct for single object upload
#[derive(Clone, Default, Debug)]
pub(crate) struct Upload;

impl Upload {
    /// Execute a single `Upload` operation
    ///
    /// The whole file is sent with one `PutObject` request.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: UploadInput,
    ) -> Result<UploadOutput, error::Error> {
        let path = input
            .path()
            .ok_or_else(|| error::invalid_input("a file path is required"))?;
        let key = input
            .key
            .clone()
            .ok_or_else(|| error::invalid_input("an object key is required"))?;

        let size = tokio::fs::metadata(path).await?.len();
        let body = ByteStream::from_path(path).await?;

        tracing::debug!(
            "uploading {} ({size} bytes) to s3://{}/{key}",
            path.display(),
            input.bucket().unwrap_or_default()
        );

        let resp = handle
            .client()
            .put_object()
            .set_bucket(input.bucket.clone())
            .key(key.clone())
            .body(body)
            .set_acl(input.acl.clone())
            .set_server_side_encryption(input.server_side_encryption.clone())
            .set_storage_class(input.storage_class.clone())
            .set_metadata(input.metadata.clone())
            .send()
            .await?;

        tracing::trace!("upload of {key} complete: {resp:?}");

        Ok(UploadOutput {
            key,
            e_tag: resp.e_tag,
            version_id: resp.version_id,
            server_side_encryption: resp.server_side_encryption,
            size,
        })
    }
}
