/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for copying an object between buckets
pub use input::{CopyObjectInput, CopyObjectInputBuilder};
mod output;
/// Output type for copying an object between buckets
pub use output::CopyObjectOutput;

use std::sync::Arc;

use crate::error;

/// Operation struct for server-side object copies
#[derive(Clone, Default, Debug)]
pub(crate) struct CopyObject;

impl CopyObject {
    /// Execute a single `CopyObject` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: CopyObjectInput,
    ) -> Result<CopyObjectOutput, error::Error> {
        let copy_source = input.copy_source();
        let destination_bucket = input
            .destination_bucket()
            .ok_or_else(|| error::invalid_input("a destination bucket is required"))?
            .to_owned();
        let destination_key = input
            .destination_key()
            .ok_or_else(|| error::invalid_input("a key is required"))?
            .to_owned();

        tracing::debug!("copying {copy_source} to s3://{destination_bucket}/{destination_key}");

        let resp = handle
            .client()
            .copy_object()
            .copy_source(copy_source)
            .bucket(destination_bucket.clone())
            .key(destination_key.clone())
            .send()
            .await?;

        Ok(CopyObjectOutput {
            destination_bucket,
            destination_key,
            e_tag: resp.copy_object_result.and_then(|r| r.e_tag),
            version_id: resp.version_id,
            copy_source_version_id: resp.copy_source_version_id,
        })
    }
}

#[cfg(test)]
mod test {
    use aws_sdk_s3::operation::copy_object::CopyObjectOutput;
    use aws_sdk_s3::operation::delete_object::DeleteObjectOutput;
    use aws_sdk_s3::types::CopyObjectResult;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
    use test_common::{mock_client_with_stubbed_http_client, s3_error_response};

    use crate::error::ErrorKind;
    use crate::operation::test_client;

    #[tokio::test]
    async fn test_copy_then_delete_leaves_source() {
        let copy = mock!(aws_sdk_s3::Client::copy_object)
            .match_requests(|r| {
                r.copy_source() == Some("first-bucket/abc123firstfile.txt")
                    && r.bucket() == Some("second-bucket")
                    && r.key() == Some("abc123firstfile.txt")
            })
            .then_output(|| {
                CopyObjectOutput::builder()
                    .copy_object_result(CopyObjectResult::builder().e_tag("copied").build())
                    .build()
            });
        // only the copy in the destination bucket may be deleted
        let delete = mock!(aws_sdk_s3::Client::delete_object)
            .match_requests(|r| {
                r.bucket() == Some("second-bucket") && r.key() == Some("abc123firstfile.txt")
            })
            .then_output(|| DeleteObjectOutput::builder().build());
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&copy, &delete]);
        let tour = test_client(client, "us-east-1");

        let output = tour
            .copy_object()
            .source_bucket("first-bucket")
            .destination_bucket("second-bucket")
            .key("abc123firstfile.txt")
            .send()
            .await
            .unwrap();
        assert_eq!("second-bucket", output.destination_bucket());
        assert_eq!("abc123firstfile.txt", output.destination_key());
        assert_eq!(Some("copied"), output.e_tag());

        tour.delete_object("second-bucket", "abc123firstfile.txt")
            .await
            .unwrap();
        assert_eq!(1, copy.num_calls());
        assert_eq!(1, delete.num_calls());
    }

    #[tokio::test]
    async fn test_copy_to_different_key() {
        let copy = mock!(aws_sdk_s3::Client::copy_object)
            .match_requests(|r| {
                r.copy_source() == Some("src/a.txt") && r.key() == Some("b.txt")
            })
            .then_output(|| CopyObjectOutput::builder().version_id("v7").build());
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&copy]);
        let tour = test_client(client, "us-east-1");

        let output = tour
            .copy_object()
            .source_bucket("src")
            .destination_bucket("dst")
            .key("a.txt")
            .destination_key("b.txt")
            .send()
            .await
            .unwrap();
        assert_eq!("b.txt", output.destination_key());
        assert_eq!(Some("v7"), output.version_id());
    }

    #[tokio::test]
    async fn test_copy_missing_source() {
        let copy = mock!(aws_sdk_s3::Client::copy_object)
            .then_http_response(|| s3_error_response(404, "NoSuchKey"));
        let client =
            mock_client_with_stubbed_http_client!(aws_sdk_s3, RuleMode::Sequential, &[&copy]);
        let tour = test_client(client, "us-east-1");

        let err = tour
            .copy_object()
            .source_bucket("src")
            .destination_bucket("dst")
            .key("missing.txt")
            .send()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::NotFound, err.kind());
        assert_eq!(1, copy.num_calls());
    }

    #[tokio::test]
    async fn test_copy_encodes_source_key() {
        let copy = mock!(aws_sdk_s3::Client::copy_object)
            .match_requests(|r| {
                r.copy_source() == Some("src/reports/q1%20summary.txt")
                    && r.key() == Some("reports/q1 summary.txt")
            })
            .then_output(|| CopyObjectOutput::builder().build());
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&copy]);
        let tour = test_client(client, "us-east-1");

        tour.copy_object()
            .source_bucket("src")
            .destination_bucket("dst")
            .key("reports/q1 summary.txt")
            .send()
            .await
            .unwrap();
        assert_eq!(1, copy.num_calls());
    }
}
