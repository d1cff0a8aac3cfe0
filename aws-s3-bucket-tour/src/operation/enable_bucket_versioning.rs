/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for enabling bucket versioning
pub use input::{EnableBucketVersioningInput, EnableBucketVersioningInputBuilder};
mod output;
/// Output type for enabling bucket versioning
pub use output::EnableBucketVersioningOutput;

use std::sync::Arc;

use aws_sdk_s3::types::{BucketVersioningStatus, VersioningConfiguration};

use crate::error;
use crate::types::VersioningStatus;

/// Operation struct for enabling versioning on a bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct EnableBucketVersioning;

impl EnableBucketVersioning {
    /// Execute a single `EnableBucketVersioning` operation
    ///
    /// The status is only read back once the enable request succeeded.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: EnableBucketVersioningInput,
    ) -> Result<EnableBucketVersioningOutput, error::Error> {
        let bucket = input
            .bucket
            .ok_or_else(|| error::invalid_input("a bucket is required"))?;

        handle
            .client()
            .put_bucket_versioning()
            .bucket(bucket.clone())
            .versioning_configuration(
                VersioningConfiguration::builder()
                    .status(BucketVersioningStatus::Enabled)
                    .build(),
            )
            .send()
            .await?;

        let resp = handle
            .client()
            .get_bucket_versioning()
            .bucket(bucket.clone())
            .send()
            .await?;
        let status = VersioningStatus::from(resp.status());
        tracing::info!("{status}");

        Ok(EnableBucketVersioningOutput { bucket, status })
    }
}

#[cfg(test)]
mod test {
    use aws_sdk_s3::operation::get_bucket_versioning::GetBucketVersioningOutput;
    use aws_sdk_s3::operation::put_bucket_versioning::PutBucketVersioningOutput;
    use aws_sdk_s3::types::BucketVersioningStatus;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
    use test_common::{mock_client_with_stubbed_http_client, s3_error_response};

    use crate::error::ErrorKind;
    use crate::operation::test_client;
    use crate::types::VersioningStatus;

    #[tokio::test]
    async fn test_enable_is_idempotent() {
        let put = mock!(aws_sdk_s3::Client::put_bucket_versioning)
            .match_requests(|r| {
                r.bucket() == Some("test-bucket")
                    && r.versioning_configuration().and_then(|c| c.status())
                        == Some(&BucketVersioningStatus::Enabled)
            })
            .then_output(|| PutBucketVersioningOutput::builder().build());
        let get = mock!(aws_sdk_s3::Client::get_bucket_versioning)
            .match_requests(|r| r.bucket() == Some("test-bucket"))
            .then_output(|| {
                GetBucketVersioningOutput::builder()
                    .status(BucketVersioningStatus::Enabled)
                    .build()
            });
        let client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, &[&put, &get]);
        let tour = test_client(client, "us-east-1");

        for _ in 0..2 {
            let output = tour
                .enable_bucket_versioning()
                .bucket("test-bucket")
                .send()
                .await
                .unwrap();
            assert_eq!(&VersioningStatus::Enabled, output.status());
            assert_eq!("test-bucket", output.bucket());
        }
        assert_eq!(2, put.num_calls());
        assert_eq!(2, get.num_calls());
    }

    #[tokio::test]
    async fn test_failed_enable_skips_status_read() {
        let put = mock!(aws_sdk_s3::Client::put_bucket_versioning)
            .then_http_response(|| s3_error_response(404, "NoSuchBucket"));
        let get = mock!(aws_sdk_s3::Client::get_bucket_versioning)
            .then_output(|| GetBucketVersioningOutput::builder().build());
        let client =
            mock_client_with_stubbed_http_client!(aws_sdk_s3, RuleMode::MatchAny, &[&put, &get]);
        let tour = test_client(client, "us-east-1");

        let err = tour
            .enable_bucket_versioning()
            .bucket("missing-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::NotFound, err.kind());
        assert_eq!(1, put.num_calls());
        assert_eq!(0, get.num_calls());
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(VersioningStatus::Unversioned, VersioningStatus::from(None));
        assert_eq!(
            VersioningStatus::Suspended,
            VersioningStatus::from(Some(&BucketVersioningStatus::Suspended))
        );
        assert_eq!("Enabled", VersioningStatus::Enabled.to_string());
    }
}
