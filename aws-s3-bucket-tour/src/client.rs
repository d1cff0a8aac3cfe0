/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::types::ObjectCannedAcl;

use crate::operation::inspect::{BucketSummary, ObjectAcl, ObjectDetails, ObjectSummary};
use crate::{error, Config};

/// Client for touring the Amazon S3 bucket and object APIs.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, env details, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Handle {
    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.config.client()
    }
}

impl Client {
    /// Creates a new client from a config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Create a new bucket in the configured region.
    ///
    /// Constructs a fluent builder for the
    /// [`CreateBucket`](crate::operation::create_bucket::builders::CreateBucketFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_s3_bucket_tour::types::BucketStatus;
    ///
    /// async fn create(client: &aws_s3_bucket_tour::Client) -> Result<(), aws_s3_bucket_tour::error::Error> {
    ///     let output = client
    ///         .create_bucket()
    ///         .bucket_prefix("my-bucket-")
    ///         .send()
    ///         .await?;
    ///
    ///     if output.status() == BucketStatus::AlreadyOwnedByYou {
    ///         // nothing was created
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn create_bucket(&self) -> crate::operation::create_bucket::builders::CreateBucketFluentBuilder {
        crate::operation::create_bucket::builders::CreateBucketFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Upload a local file as a single object.
    ///
    /// Constructs a fluent builder for the
    /// [`Upload`](crate::operation::upload::builders::UploadFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_sdk_s3::types::{ServerSideEncryption, StorageClass};
    ///
    /// async fn upload(client: &aws_s3_bucket_tour::Client) -> Result<(), aws_s3_bucket_tour::error::Error> {
    ///     let output = client
    ///         .upload()
    ///         .bucket("my-bucket")
    ///         .key("my-key")
    ///         .path("/tmp/my-file.txt")
    ///         .server_side_encryption(ServerSideEncryption::Aes256)
    ///         .storage_class(StorageClass::StandardIa)
    ///         .send()
    ///         .await?;
    ///     println!("uploaded version {:?}", output.version_id());
    ///     Ok(())
    /// }
    /// ```
    pub fn upload(&self) -> crate::operation::upload::builders::UploadFluentBuilder {
        crate::operation::upload::builders::UploadFluentBuilder::new(self.handle.clone())
    }

    /// Download a single object to a local file.
    ///
    /// Constructs a fluent builder for the
    /// [`Download`](crate::operation::download::builders::DownloadFluentBuilder) operation.
    pub fn download(&self) -> crate::operation::download::builders::DownloadFluentBuilder {
        crate::operation::download::builders::DownloadFluentBuilder::new(self.handle.clone())
    }

    /// Copy an object from one bucket to another without downloading it.
    ///
    /// Constructs a fluent builder for the
    /// [`CopyObject`](crate::operation::copy_object::builders::CopyObjectFluentBuilder) operation.
    pub fn copy_object(&self) -> crate::operation::copy_object::builders::CopyObjectFluentBuilder {
        crate::operation::copy_object::builders::CopyObjectFluentBuilder::new(self.handle.clone())
    }

    /// Enable versioning on a bucket and read back the resulting status.
    ///
    /// Constructs a fluent builder for the
    /// [`EnableBucketVersioning`](crate::operation::enable_bucket_versioning::builders::EnableBucketVersioningFluentBuilder) operation.
    pub fn enable_bucket_versioning(
        &self,
    ) -> crate::operation::enable_bucket_versioning::builders::EnableBucketVersioningFluentBuilder
    {
        crate::operation::enable_bucket_versioning::builders::EnableBucketVersioningFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Delete every object version and delete marker in a bucket.
    ///
    /// Constructs a fluent builder for the
    /// [`DeleteAllObjectVersions`](crate::operation::delete_all_object_versions::builders::DeleteAllObjectVersionsFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn empty_bucket(client: &aws_s3_bucket_tour::Client) -> Result<(), aws_s3_bucket_tour::error::Error> {
    ///     let output = client
    ///         .delete_all_object_versions()
    ///         .bucket("my-bucket")
    ///         .send()
    ///         .await?;
    ///
    ///     for failed in output.errors() {
    ///         println!("failed to delete {:?}: {:?}", failed.key(), failed.code());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_all_object_versions(
        &self,
    ) -> crate::operation::delete_all_object_versions::builders::DeleteAllObjectVersionsFluentBuilder
    {
        crate::operation::delete_all_object_versions::builders::DeleteAllObjectVersionsFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Get the access control list of an object.
    pub async fn get_object_acl(&self, bucket: &str, key: &str) -> Result<ObjectAcl, error::Error> {
        crate::operation::inspect::get_object_acl(&self.handle, bucket, key).await
    }

    /// Replace the access control list of an object with a canned ACL.
    pub async fn put_object_acl(
        &self,
        bucket: &str,
        key: &str,
        acl: ObjectCannedAcl,
    ) -> Result<(), error::Error> {
        crate::operation::inspect::put_object_acl(&self.handle, bucket, key, acl).await
    }

    /// Retrieve the metadata of an object without its body.
    pub async fn head_object(&self, bucket: &str, key: &str) -> Result<ObjectDetails, error::Error> {
        crate::operation::inspect::head_object(&self.handle, bucket, key).await
    }

    /// List all buckets owned by the caller.
    pub async fn list_buckets(&self) -> Result<Vec<BucketSummary>, error::Error> {
        crate::operation::inspect::list_buckets(&self.handle).await
    }

    /// List all (current) objects in a bucket.
    pub async fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectSummary>, error::Error> {
        crate::operation::inspect::list_objects(&self.handle, bucket).await
    }

    /// Delete the current version of an object.
    ///
    /// In a versioned bucket this creates a delete marker.
    pub async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), error::Error> {
        tracing::debug!("deleting s3://{bucket}/{key}");
        self.handle
            .client()
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;
        Ok(())
    }

    /// Delete an (empty) bucket.
    pub async fn delete_bucket(&self, bucket: &str) -> Result<(), error::Error> {
        tracing::debug!("deleting bucket {bucket}");
        self.handle
            .client()
            .delete_bucket()
            .bucket(bucket)
            .send()
            .await?;
        Ok(())
    }
}
