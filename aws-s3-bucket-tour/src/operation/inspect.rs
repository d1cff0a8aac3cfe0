/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

use aws_sdk_s3::primitives::DateTime;
use aws_sdk_s3::types::{
    Grant, ObjectCannedAcl, ObjectStorageClass, Owner, ServerSideEncryption, StorageClass,
};

use crate::client::Handle;
use crate::error;

/// Access control list of a single object.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectAcl {
    /// Owner of the object.
    pub owner: Option<Owner>,

    /// Grants attached to the object.
    pub grants: Vec<Grant>,
}

impl ObjectAcl {
    /// Owner of the object.
    pub fn owner(&self) -> Option<&Owner> {
        self.owner.as_ref()
    }

    /// Grants attached to the object.
    pub fn grants(&self) -> &[Grant] {
        &self.grants
    }
}

/// Object metadata as returned by `HeadObject`.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectDetails {
    /// Storage class as reported by S3, `None` for `STANDARD`.
    pub storage_class: Option<StorageClass>,

    /// Server side encryption used to store the object.
    pub server_side_encryption: Option<ServerSideEncryption>,

    /// Version ID of the object.
    pub version_id: Option<String>,

    /// Last modified timestamp.
    pub last_modified: Option<DateTime>,

    /// User-defined metadata.
    pub metadata: HashMap<String, String>,

    /// Size of the object in bytes.
    pub content_length: Option<i64>,
}

impl ObjectDetails {
    /// Storage class of the object.
    ///
    /// S3 does not return a storage class for objects stored as `STANDARD`.
    pub fn storage_class(&self) -> StorageClass {
        self.storage_class.clone().unwrap_or(StorageClass::Standard)
    }

    /// Server side encryption used to store the object.
    pub fn server_side_encryption(&self) -> Option<&ServerSideEncryption> {
        self.server_side_encryption.as_ref()
    }

    /// Version ID of the object.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// Last modified timestamp.
    pub fn last_modified(&self) -> Option<&DateTime> {
        self.last_modified.as_ref()
    }

    /// User-defined metadata.
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// Size of the object in bytes.
    pub fn content_length(&self) -> Option<i64> {
        self.content_length
    }
}

/// A bucket from `ListBuckets`.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct BucketSummary {
    /// The bucket name.
    pub name: String,

    /// When the bucket was created.
    pub creation_date: Option<DateTime>,
}

impl BucketSummary {
    /// The bucket name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the bucket was created.
    pub fn creation_date(&self) -> Option<&DateTime> {
        self.creation_date.as_ref()
    }
}

/// An object from `ListObjectsV2`.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectSummary {
    /// The object key.
    pub key: String,

    /// Storage class of the object.
    pub storage_class: Option<ObjectStorageClass>,

    /// Last modified timestamp.
    pub last_modified: Option<DateTime>,

    /// Size of the object in bytes.
    pub size: Option<i64>,
}

impl ObjectSummary {
    /// The object key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Storage class of the object.
    pub fn storage_class(&self) -> Option<&ObjectStorageClass> {
        self.storage_class.as_ref()
    }

    /// Last modified timestamp.
    pub fn last_modified(&self) -> Option<&DateTime> {
        self.last_modified.as_ref()
    }

    /// Size of the object in bytes.
    pub fn size(&self) -> Option<i64> {
        self.size
    }
}

pub(crate) async fn get_object_acl(
    handle: &Handle,
    bucket: &str,
    key: &str,
) -> Result<ObjectAcl, error::Error> {
    let resp = handle
        .client()
        .get_object_acl()
        .bucket(bucket)
        .key(key)
        .send()
        .await?;
    tracing::info!("{:?}", resp.grants());

    Ok(ObjectAcl {
        owner: resp.owner,
        grants: resp.grants.unwrap_or_default(),
    })
}

pub(crate) async fn put_object_acl(
    handle: &Handle,
    bucket: &str,
    key: &str,
    acl: ObjectCannedAcl,
) -> Result<(), error::Error> {
    tracing::debug!("setting acl {acl} on s3://{bucket}/{key}");
    handle
        .client()
        .put_object_acl()
        .bucket(bucket)
        .key(key)
        .acl(acl)
        .send()
        .await?;
    Ok(())
}

pub(crate) async fn head_object(
    handle: &Handle,
    bucket: &str,
    key: &str,
) -> Result<ObjectDetails, error::Error> {
    let resp = handle
        .client()
        .head_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await?;

    Ok(ObjectDetails {
        storage_class: resp.storage_class,
        server_side_encryption: resp.server_side_encryption,
        version_id: resp.version_id,
        last_modified: resp.last_modified,
        metadata: resp.metadata.unwrap_or_default(),
        content_length: resp.content_length,
    })
}

pub(crate) async fn list_buckets(handle: &Handle) -> Result<Vec<BucketSummary>, error::Error> {
    let resp = handle.client().list_buckets().send().await?;
    let buckets = resp
        .buckets
        .unwrap_or_default()
        .into_iter()
        .filter_map(|b| {
            b.name.map(|name| BucketSummary {
                name,
                creation_date: b.creation_date,
            })
        })
        .collect::<Vec<_>>();
    tracing::info!(
        "{:?}",
        buckets.iter().map(BucketSummary::name).collect::<Vec<_>>()
    );
    Ok(buckets)
}

pub(crate) async fn list_objects(
    handle: &Handle,
    bucket: &str,
) -> Result<Vec<ObjectSummary>, error::Error> {
    let mut pages = handle
        .client()
        .list_objects_v2()
        .bucket(bucket)
        .into_paginator()
        .send();

    let mut objects = Vec::new();
    while let Some(page) = pages.next().await {
        let page = page?;
        objects.extend(page.contents.unwrap_or_default().into_iter().filter_map(|o| {
            o.key.map(|key| ObjectSummary {
                key,
                storage_class: o.storage_class,
                last_modified: o.last_modified,
                size: o.size,
            })
        }));
    }
    Ok(objects)
}
