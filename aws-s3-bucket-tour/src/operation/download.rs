/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

/// Request type for downloading a single object from Amazon S3
pub use input::{DownloadInput, DownloadInputBuilder};
/// Response type for downloading a single object from Amazon S3
pub use output::DownloadOutput;

use std::sync::Arc;

use tokio::io::AsyncWriteExt;

use crate::error;

/// Operation struct for single object download
#[derive(Clone, Default, Debug)]
pub(crate) struct Download;

impl Download {
    /// Execute a single `Download` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DownloadInput,
    ) -> Result<DownloadOutput, error::Error> {
        let destination = input
            .destination
            .clone()
            .ok_or_else(|| error::invalid_input("a destination is required"))?;

        let resp = handle
            .client()
            .get_object()
            .set_bucket(input.bucket.clone())
            .set_key(input.key.clone())
            .set_version_id(input.version_id.clone())
            .send()
            .await?;

        let version_id = resp.version_id;
        let mut body = resp.body;
        let mut dest = tokio::fs::File::create(&destination).await?;
        let mut bytes_written = 0u64;
        while let Some(chunk) = body.try_next().await? {
            dest.write_all(&chunk).await?;
            bytes_written += chunk.len() as u64;
            tracing::trace!("wrote chunk size: {}", chunk.len());
        }
        dest.flush().await?;

        tracing::debug!(
            "downloaded s3://{}/{} to {} ({bytes_written} bytes)",
            input.bucket().unwrap_or_default(),
            input.key().unwrap_or_default(),
            destination.display()
        );

        Ok(DownloadOutput {
            destination,
            bytes_written,
            version_id,
        })
    }
}

#[cfg(test)]
mod test {
    use aws_sdk_s3::operation::get_object::GetObjectOutput;
    use aws_sdk_s3::primitives::ByteStream;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
    use test_common::{mock_client_with_stubbed_http_client, s3_error_response};

    use crate::error::ErrorKind;
    use crate::operation::download::DownloadInput;
    use crate::operation::test_client;

    #[tokio::test]
    async fn test_download_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("a1b2c3firstfile.txt");

        let get_object = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| {
                r.bucket() == Some("test-bucket") && r.key() == Some("a1b2c3firstfile.txt")
            })
            .then_output(|| {
                GetObjectOutput::builder()
                    .body(ByteStream::from_static(&[b'f'; 300]))
                    .content_length(300)
                    .version_id("v1")
                    .build()
            });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_object]);
        let tour = test_client(client, "us-east-1");

        let output = tour
            .download()
            .bucket("test-bucket")
            .key("a1b2c3firstfile.txt")
            .destination(&dest)
            .send()
            .await
            .unwrap();

        assert_eq!(300, output.bytes_written());
        assert_eq!(Some("v1"), output.version_id());
        assert_eq!("f".repeat(300), std::fs::read_to_string(&dest).unwrap());
    }

    #[tokio::test]
    async fn test_download_specific_version() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.txt");

        let get_object = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| r.version_id() == Some("v0"))
            .then_output(|| {
                GetObjectOutput::builder()
                    .body(ByteStream::from_static(b"old"))
                    .version_id("v0")
                    .build()
            });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_object]);
        let tour = test_client(client, "us-east-1");

        let output = DownloadInput::builder()
            .bucket("test-bucket")
            .key("k")
            .version_id("v0")
            .destination(&dest)
            .send_with(&tour)
            .await
            .unwrap();
        assert_eq!(3, output.bytes_written());
        assert_eq!("old", std::fs::read_to_string(&dest).unwrap());
    }

    #[tokio::test]
    async fn test_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let get_object = mock!(aws_sdk_s3::Client::get_object)
            .then_http_response(|| s3_error_response(404, "NoSuchKey"));
        let client =
            mock_client_with_stubbed_http_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_object]);
        let tour = test_client(client, "us-east-1");

        let err = tour
            .download()
            .bucket("test-bucket")
            .key("missing")
            .destination(dir.path().join("missing"))
            .send()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::NotFound, err.kind());
        assert!(!dir.path().join("missing").exists());
    }
}
