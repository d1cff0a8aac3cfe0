/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Types for the bucket creation operation
pub mod create_bucket;

/// Types for single object upload operation
pub mod upload;

/// Types for single object download operation
pub mod download;

/// Types for the server-side copy operation
pub mod copy_object;

/// Types for the bucket versioning operation
pub mod enable_bucket_versioning;

/// Types for deleting every version in a bucket
pub mod delete_all_object_versions;

/// Read-only views of buckets, objects and ACLs
pub mod inspect;

/// Wrap a (mock) S3 client in a tour client that creates buckets in `region`.
#[cfg(test)]
pub(crate) fn test_client(client: aws_sdk_s3::Client, region: &'static str) -> crate::Client {
    let config = crate::Config::builder()
        .client(client)
        .region(aws_types::region::Region::from_static(region))
        .build()
        .expect("client set");
    crate::Client::new(config)
}
