/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::{Grant, ObjectCannedAcl, ServerSideEncryption, StorageClass};

use crate::error::{self, ErrorKind};
use crate::operation::inspect::{BucketSummary, ObjectDetails, ObjectSummary};
use crate::types::{BucketName, VersioningStatus};
use crate::Client;

const FIRST_FILE: (usize, &str, char) = (300, "firstfile.txt", 'f');
const SECOND_FILE: (usize, &str, char) = (400, "secondfile.txt", 's');
const THIRD_FILE: (usize, &str, char) = (300, "thirdfile.txt", 't');

/// Where the tour creates its buckets and files.
#[derive(Clone, Debug)]
pub struct TourSettings {
    /// Name prefix of the first bucket.
    pub first_bucket_prefix: String,

    /// Name prefix of the second bucket.
    pub second_bucket_prefix: String,

    /// Directory the local files are written to before upload.
    pub work_dir: PathBuf,

    /// Directory downloaded objects are written to.
    pub download_dir: PathBuf,
}

impl Default for TourSettings {
    fn default() -> Self {
        Self {
            first_bucket_prefix: "first-tour-bucket-".to_owned(),
            second_bucket_prefix: "second-tour-bucket-".to_owned(),
            work_dir: PathBuf::from("."),
            download_dir: std::env::temp_dir(),
        }
    }
}

/// Everything the tour observed along the way.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct TourReport {
    /// The first bucket, which ends up versioned.
    pub first_bucket: BucketName,

    /// The second bucket, used as a copy target.
    pub second_bucket: BucketName,

    /// Local files written by the tour, in creation order.
    pub files: Vec<PathBuf>,

    /// Local copy of the first object.
    pub downloaded: PathBuf,

    /// Grants on the second object while it was `public-read`.
    pub public_read_grants: Vec<Grant>,

    /// Grants on the second object after it was made `private`.
    pub private_grants: Vec<Grant>,

    /// Encryption S3 reported for the third object.
    pub third_object_encryption: Option<ServerSideEncryption>,

    /// Storage class of the third object after it was re-uploaded.
    pub third_object_storage_class: StorageClass,

    /// Versioning status of the first bucket.
    pub versioning_status: VersioningStatus,

    /// Latest version of the first object once versioning was enabled.
    pub first_object_version_id: Option<String>,

    /// Every bucket owned by the caller at listing time.
    pub buckets: Vec<BucketSummary>,

    /// Objects in the first bucket along with their head-object details.
    pub objects: Vec<(ObjectSummary, ObjectDetails)>,

    /// Number of versions and delete markers removed from the first bucket.
    pub first_bucket_versions_deleted: usize,

    /// Number of versions and delete markers removed from the second bucket.
    pub second_bucket_versions_deleted: usize,
}

impl TourReport {
    /// The first bucket, which ends up versioned.
    pub fn first_bucket(&self) -> &BucketName {
        &self.first_bucket
    }

    /// The second bucket, used as a copy target.
    pub fn second_bucket(&self) -> &BucketName {
        &self.second_bucket
    }

    /// Local files written by the tour, in creation order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Local copy of the first object.
    pub fn downloaded(&self) -> &Path {
        &self.downloaded
    }
}

/// Run the full tour.
///
/// Two buckets are created, exercised and deleted again. When a step fails after the
/// buckets exist, every version in both buckets and the buckets themselves are removed
/// on a best-effort basis before the original error is returned. Local files are kept.
pub async fn run(client: &Client, settings: &TourSettings) -> Result<TourReport, error::Error> {
    let first = client
        .create_bucket()
        .bucket_prefix(settings.first_bucket_prefix.as_str())
        .send()
        .await?
        .bucket()
        .clone();

    let second = match client
        .create_bucket()
        .bucket_prefix(settings.second_bucket_prefix.as_str())
        .send()
        .await
    {
        Ok(output) => output.bucket().clone(),
        Err(err) => {
            cleanup_all(client, &[&first]).await;
            return Err(err);
        }
    };

    match visit(client, settings, &first, &second).await {
        Ok(report) => Ok(report),
        Err(err) => {
            tracing::error!("tour failed, removing buckets: {}", DisplayErrorContext(&err));
            cleanup_all(client, &[&first, &second]).await;
            Err(err)
        }
    }
}

async fn visit(
    client: &Client,
    settings: &TourSettings,
    first: &BucketName,
    second: &BucketName,
) -> Result<TourReport, error::Error> {
    let mut files = Vec::with_capacity(3);
    for (size, suffix, content) in [FIRST_FILE, SECOND_FILE, THIRD_FILE] {
        files.push(crate::io::create_temp_file_in(&settings.work_dir, size, suffix, content).await?);
    }
    let (first_file, second_file, third_file) = (&files[0], &files[1], &files[2]);

    // upload, download and copy
    let first_key = client
        .upload()
        .bucket(first.as_str())
        .path(first_file)
        .send()
        .await?
        .key()
        .to_owned();

    let downloaded = client
        .download()
        .bucket(first.as_str())
        .key(first_key.as_str())
        .destination(settings.download_dir.join(&first_key))
        .send()
        .await?
        .destination()
        .to_path_buf();

    client
        .copy_object()
        .source_bucket(first.as_str())
        .destination_bucket(second.as_str())
        .key(first_key.as_str())
        .send()
        .await?;
    client.delete_object(second.as_str(), &first_key).await?;

    // ACLs
    let second_key = client
        .upload()
        .bucket(first.as_str())
        .path(second_file)
        .acl(ObjectCannedAcl::PublicRead)
        .send()
        .await?
        .key()
        .to_owned();
    let public_read_grants = client
        .get_object_acl(first.as_str(), &second_key)
        .await?
        .grants;
    client
        .put_object_acl(first.as_str(), &second_key, ObjectCannedAcl::Private)
        .await?;
    let private_grants = client
        .get_object_acl(first.as_str(), &second_key)
        .await?
        .grants;

    // encryption and storage class
    let third = client
        .upload()
        .bucket(first.as_str())
        .path(third_file)
        .server_side_encryption(ServerSideEncryption::Aes256)
        .send()
        .await?;
    let third_key = third.key().to_owned();
    let third_object_encryption = third.server_side_encryption().cloned();
    tracing::info!("{:?}", third_object_encryption);

    client
        .upload()
        .bucket(first.as_str())
        .key(third_key.as_str())
        .path(third_file)
        .server_side_encryption(ServerSideEncryption::Aes256)
        .storage_class(StorageClass::StandardIa)
        .send()
        .await?;
    let third_object_storage_class = client
        .head_object(first.as_str(), &third_key)
        .await?
        .storage_class();
    tracing::info!("{third_object_storage_class}");

    // versioning
    let versioning_status = client
        .enable_bucket_versioning()
        .bucket(first.as_str())
        .send()
        .await?
        .status;

    for (key, path) in [
        (&first_key, first_file),
        (&first_key, third_file),
        (&second_key, second_file),
    ] {
        client
            .upload()
            .bucket(first.as_str())
            .key(key.as_str())
            .path(path)
            .send()
            .await?;
    }
    let first_object_version_id = client
        .head_object(first.as_str(), &first_key)
        .await?
        .version_id;
    tracing::info!("{:?}", first_object_version_id);

    // listings
    let buckets = client.list_buckets().await?;
    let mut objects = Vec::new();
    for summary in client.list_objects(first.as_str()).await? {
        let details = client.head_object(first.as_str(), summary.key()).await?;
        tracing::info!(
            "{} {:?} {:?} {:?} {:?}",
            summary.key(),
            summary.storage_class(),
            summary.last_modified(),
            details.version_id(),
            details.metadata()
        );
        objects.push((summary, details));
    }

    // teardown
    let first_bucket_versions_deleted = delete_versions(client, first).await?;

    client
        .upload()
        .bucket(second.as_str())
        .path(first_file)
        .send()
        .await?;
    let second_bucket_versions_deleted = delete_versions(client, second).await?;

    client.delete_bucket(first.as_str()).await?;
    client.delete_bucket(second.as_str()).await?;

    Ok(TourReport {
        first_bucket: first.clone(),
        second_bucket: second.clone(),
        downloaded,
        files,
        public_read_grants,
        private_grants,
        third_object_encryption,
        third_object_storage_class,
        versioning_status,
        first_object_version_id,
        buckets,
        objects,
        first_bucket_versions_deleted,
        second_bucket_versions_deleted,
    })
}

async fn delete_versions(client: &Client, bucket: &BucketName) -> Result<usize, error::Error> {
    let output = client
        .delete_all_object_versions()
        .bucket(bucket.as_str())
        .send()
        .await?;
    Ok(output.deleted().len())
}

async fn cleanup(client: &Client, bucket: &BucketName) -> Result<(), error::Error> {
    client
        .delete_all_object_versions()
        .bucket(bucket.as_str())
        .send()
        .await?;
    client.delete_bucket(bucket.as_str()).await
}

async fn cleanup_all(client: &Client, buckets: &[&BucketName]) {
    for bucket in buckets {
        if let Err(err) = cleanup(client, bucket)
            .await
            .map_err(error::from_kind(ErrorKind::CleanupFailed))
        {
            tracing::warn!("bucket {bucket} was left behind: {}", DisplayErrorContext(&err));
        }
    }
}
