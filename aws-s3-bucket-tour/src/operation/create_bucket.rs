/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for creating a bucket
pub use input::{CreateBucketInput, CreateBucketInputBuilder};
mod output;
/// Output type for creating a bucket
pub use output::CreateBucketOutput;

use std::sync::Arc;

use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};

use crate::error::{self, ErrorKind};
use crate::types::{BucketName, BucketStatus};

/// `us-east-1` is the default location and must not be sent as a location constraint
const DEFAULT_LOCATION: &str = "us-east-1";

/// Operation struct for creating a bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct CreateBucket;

impl CreateBucket {
    /// Execute a single `CreateBucket` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: CreateBucketInput,
    ) -> Result<CreateBucketOutput, error::Error> {
        let bucket = match input.bucket {
            Some(bucket) => BucketName::parse(bucket)?,
            None => BucketName::generate(input.bucket_prefix.as_deref().unwrap_or_default())?,
        };
        let region = handle.config.region().map(|r| r.as_ref().to_owned());

        let configuration = region
            .as_deref()
            .filter(|region| *region != DEFAULT_LOCATION)
            .map(|region| {
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(region))
                    .build()
            });

        tracing::info!("{bucket} {}", region.as_deref().unwrap_or("<default region>"));

        let result = handle
            .client()
            .create_bucket()
            .bucket(bucket.as_str())
            .set_create_bucket_configuration(configuration)
            .send()
            .await;

        let (status, location) = match result {
            Ok(resp) => (BucketStatus::Created, resp.location),
            Err(err) => {
                let service_err = err.as_service_error();
                let already_owned =
                    service_err.is_some_and(|e| e.is_bucket_already_owned_by_you());
                let already_exists = service_err.is_some_and(|e| e.is_bucket_already_exists());

                if already_owned {
                    tracing::info!("bucket {bucket} already exists and is owned by you");
                    (BucketStatus::AlreadyOwnedByYou, None)
                } else if already_exists {
                    return Err(error::Error::new(ErrorKind::AlreadyExists, err));
                } else {
                    return Err(err.into());
                }
            }
        };

        Ok(CreateBucketOutput {
            bucket,
            region,
            status,
            location,
        })
    }
}
