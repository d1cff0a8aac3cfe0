/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! A guided tour of the Amazon S3 bucket and object APIs.
//!
//! The tour creates two buckets, moves a handful of small files through them (upload,
//! download, server-side copy, ACL changes, server-side encryption, storage classes and
//! versioning) and finally removes every object version and both buckets again.
//!
//! Each step is also available on its own through [`Client`].
//!
//! # Examples
//!
//! Run the whole tour with the default configuration:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_s3_bucket_tour::error::Error> {
//! let config = aws_s3_bucket_tour::from_env().load().await?;
//! let client = aws_s3_bucket_tour::Client::new(config);
//!
//! let settings = aws_s3_bucket_tour::tour::TourSettings::default();
//! let report = aws_s3_bucket_tour::tour::run(&client, &settings).await?;
//! println!("toured {} and {}", report.first_bucket(), report.second_bucket());
//! # Ok(())
//! # }
//! ```
//!
//! Empty a versioned bucket:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_s3_bucket_tour::error::Error> {
//! let config = aws_s3_bucket_tour::from_env()
//!     .region(aws_types::region::Region::from_static("eu-west-1"))
//!     .load()
//!     .await?;
//! let client = aws_s3_bucket_tour::Client::new(config);
//!
//! client
//!     .delete_all_object_versions()
//!     .bucket("my-bucket")
//!     .send()
//!     .await?;
//! client.delete_bucket("my-bucket").await?;
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`create_bucket`](crate::Client::create_bucket) - create a bucket with a generated name
//! * [`upload`](crate::Client::upload) - upload a local file as a single object
//! * [`download`](crate::Client::download) - download a single object to a local file
//! * [`copy_object`](crate::Client::copy_object) - copy an object between buckets
//! * [`enable_bucket_versioning`](crate::Client::enable_bucket_versioning) - turn on versioning
//! * [`delete_all_object_versions`](crate::Client::delete_all_object_versions) - empty a bucket

/// Error types emitted by `aws-s3-bucket-tour`
pub mod error;

/// Common types used by `aws-s3-bucket-tour`
pub mod types;

/// Types and helpers for I/O
pub mod io;

/// Bucket tour client
pub mod client;

/// Bucket tour operations
pub mod operation;

/// Bucket tour configuration
pub mod config;

/// The fixed end-to-end tour
pub mod tour;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
