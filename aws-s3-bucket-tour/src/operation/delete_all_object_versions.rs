/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for deleting every object version in a bucket
pub use input::{DeleteAllObjectVersionsInput, DeleteAllObjectVersionsInputBuilder};
mod list_object_versions;
mod output;
/// Output type for deleting every object version in a bucket
pub use output::DeleteAllObjectVersionsOutput;

use std::sync::Arc;

use aws_sdk_s3::types::Delete;
use list_object_versions::{versions_in_page, ListObjectVersionsPaginator};

use crate::error;
use crate::types::{FailedDelete, ObjectVersion};

/// Maximum number of keys S3 accepts in a single `DeleteObjects` request.
pub(crate) const MAX_KEYS_PER_DELETE: usize = 1000;

/// Operation struct for emptying a (possibly versioned) bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct DeleteAllObjectVersions;

impl DeleteAllObjectVersions {
    /// Execute a single `DeleteAllObjectVersions` operation
    ///
    /// Every page of object versions and delete markers is listed before anything is
    /// deleted. Per-key failures are reported in the output, request failures are returned
    /// as errors.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DeleteAllObjectVersionsInput,
    ) -> Result<DeleteAllObjectVersionsOutput, error::Error> {
        let bucket = input
            .bucket
            .ok_or_else(|| error::invalid_input("a bucket is required"))?;

        let versions = list_all_versions(&handle, &bucket).await?;
        tracing::info!(
            "{:?}",
            versions
                .iter()
                .map(|v| (v.key(), v.version_id()))
                .collect::<Vec<_>>()
        );

        let mut output = DeleteAllObjectVersionsOutput::default();
        if versions.is_empty() {
            tracing::debug!("bucket {bucket} has no object versions");
            return Ok(output);
        }

        for batch in versions.chunks(MAX_KEYS_PER_DELETE) {
            let objects = batch
                .iter()
                .map(ObjectVersion::to_identifier)
                .collect::<Result<Vec<_>, _>>()?;
            let delete = Delete::builder()
                .set_objects(Some(objects))
                .quiet(false)
                .build()?;

            let resp = handle
                .client()
                .delete_objects()
                .bucket(bucket.clone())
                .delete(delete)
                .send()
                .await?;

            output.deleted.extend(resp.deleted().iter().filter_map(|d| {
                d.key().map(|key| {
                    let version = ObjectVersion::new(key, d.version_id().map(str::to_owned));
                    if d.delete_marker().unwrap_or(false) {
                        version.delete_marker()
                    } else {
                        version
                    }
                })
            }));

            for err in resp.errors() {
                let failed = FailedDelete::from(err);
                tracing::warn!(
                    "failed to delete {:?} ({:?}): {:?} {:?}",
                    failed.key(),
                    failed.version_id(),
                    failed.code(),
                    failed.message()
                );
                output.errors.push(failed);
            }
        }

        Ok(output)
    }
}

async fn list_all_versions(
    handle: &crate::client::Handle,
    bucket: &str,
) -> Result<Vec<ObjectVersion>, error::Error> {
    let mut paginator = ListObjectVersionsPaginator::new(handle.client().clone(), bucket);
    let mut versions = Vec::new();
    while let Some(page) = paginator.next_page().await {
        versions.extend(versions_in_page(&page?));
    }
    Ok(versions)
}
