/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_s3_bucket_tour::error::ErrorKind;
use aws_s3_bucket_tour::tour::{self, TourSettings};
use aws_s3_bucket_tour::types::VersioningStatus;
use aws_sdk_s3::operation::copy_object::CopyObjectOutput;
use aws_sdk_s3::operation::create_bucket::CreateBucketOutput;
use aws_sdk_s3::operation::delete_bucket::DeleteBucketOutput;
use aws_sdk_s3::operation::delete_object::DeleteObjectOutput;
use aws_sdk_s3::operation::delete_objects::DeleteObjectsOutput;
use aws_sdk_s3::operation::get_bucket_versioning::GetBucketVersioningOutput;
use aws_sdk_s3::operation::get_object::GetObjectOutput;
use aws_sdk_s3::operation::get_object_acl::GetObjectAclOutput;
use aws_sdk_s3::operation::head_object::HeadObjectOutput;
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use aws_sdk_s3::operation::list_object_versions::ListObjectVersionsOutput;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::operation::put_bucket_versioning::PutBucketVersioningOutput;
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_sdk_s3::operation::put_object_acl::PutObjectAclOutput;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{
    Bucket, BucketLocationConstraint, BucketVersioningStatus, DeletedObject, Grant, Grantee,
    Object, ObjectCannedAcl, ObjectVersion, Permission, ServerSideEncryption, StorageClass, Type,
};
use aws_smithy_mocks_experimental::{mock, Rule, RuleMode};
use aws_smithy_runtime::test_util::capture_test_logs::capture_test_logs;
use aws_types::region::Region;
use test_common::{mock_client_with_stubbed_http_client, s3_error_response};

const FIRST_PREFIX: &str = "first-test-bucket-";
const SECOND_PREFIX: &str = "second-test-bucket-";

fn tour_client(rules: &[&Rule]) -> aws_s3_bucket_tour::Client {
    let s3_client = mock_client_with_stubbed_http_client!(aws_sdk_s3, RuleMode::MatchAny, rules);
    let config = aws_s3_bucket_tour::Config::builder()
        .client(s3_client)
        .region(Region::from_static("us-west-2"))
        .build()
        .unwrap();
    aws_s3_bucket_tour::Client::new(config)
}

fn settings(work_dir: &tempfile::TempDir, download_dir: &tempfile::TempDir) -> TourSettings {
    TourSettings {
        first_bucket_prefix: FIRST_PREFIX.to_owned(),
        second_bucket_prefix: SECOND_PREFIX.to_owned(),
        work_dir: work_dir.path().to_path_buf(),
        download_dir: download_dir.path().to_path_buf(),
    }
}

fn create_bucket_rule() -> Rule {
    mock!(aws_sdk_s3::Client::create_bucket)
        .match_requests(|r| {
            let location = r
                .create_bucket_configuration()
                .and_then(|c| c.location_constraint());
            location == Some(&BucketLocationConstraint::UsWest2)
        })
        .then_output(|| CreateBucketOutput::builder().build())
}

fn grants(permission: Permission) -> GetObjectAclOutput {
    GetObjectAclOutput::builder()
        .grants(
            Grant::builder()
                .grantee(
                    Grantee::builder()
                        .r#type(Type::CanonicalUser)
                        .id("owner")
                        .build()
                        .unwrap(),
                )
                .permission(permission)
                .build(),
        )
        .build()
}

fn list_versions_rule() -> Rule {
    mock!(aws_sdk_s3::Client::list_object_versions).then_output(|| {
        ListObjectVersionsOutput::builder()
            .versions(ObjectVersion::builder().key("k1").version_id("v1").build())
            .versions(ObjectVersion::builder().key("k1").version_id("v2").build())
            .is_truncated(false)
            .build()
    })
}

fn delete_objects_rule() -> Rule {
    mock!(aws_sdk_s3::Client::delete_objects).then_output(|| {
        DeleteObjectsOutput::builder()
            .deleted(DeletedObject::builder().key("k1").version_id("v1").build())
            .deleted(DeletedObject::builder().key("k1").version_id("v2").build())
            .build()
    })
}

fn delete_bucket_rule() -> Rule {
    mock!(aws_sdk_s3::Client::delete_bucket).then_output(|| DeleteBucketOutput::builder().build())
}

#[tokio::test]
async fn test_full_tour() {
    let work_dir = tempfile::tempdir().unwrap();
    let download_dir = tempfile::tempdir().unwrap();

    let create_bucket = create_bucket_rule();
    let put_public = mock!(aws_sdk_s3::Client::put_object)
        .match_requests(|r| r.acl() == Some(&ObjectCannedAcl::PublicRead))
        .then_output(|| PutObjectOutput::builder().e_tag("public").build());
    let put_ia = mock!(aws_sdk_s3::Client::put_object)
        .match_requests(|r| r.storage_class() == Some(&StorageClass::StandardIa))
        .then_output(|| PutObjectOutput::builder().build());
    let put_object = mock!(aws_sdk_s3::Client::put_object).then_output(|| {
        PutObjectOutput::builder()
            .e_tag("etag")
            .version_id("v3")
            .server_side_encryption(ServerSideEncryption::Aes256)
            .build()
    });
    let get_object = mock!(aws_sdk_s3::Client::get_object).then_output(|| {
        GetObjectOutput::builder()
            .body(ByteStream::from_static(&[b'f'; 300]))
            .build()
    });
    let copy_object = mock!(aws_sdk_s3::Client::copy_object)
        .match_requests(|r| {
            r.copy_source().is_some_and(|s| s.starts_with(FIRST_PREFIX))
                && r.bucket().is_some_and(|b| b.starts_with(SECOND_PREFIX))
        })
        .then_output(|| CopyObjectOutput::builder().build());
    let delete_object = mock!(aws_sdk_s3::Client::delete_object)
        .match_requests(|r| r.bucket().is_some_and(|b| b.starts_with(SECOND_PREFIX)))
        .then_output(|| DeleteObjectOutput::builder().build());
    let put_acl = mock!(aws_sdk_s3::Client::put_object_acl)
        .match_requests(|r| r.acl() == Some(&ObjectCannedAcl::Private))
        .then_output(|| PutObjectAclOutput::builder().build());
    let get_acl = mock!(aws_sdk_s3::Client::get_object_acl)
        .match_requests(|r| r.bucket().is_some_and(|b| b.starts_with(FIRST_PREFIX)))
        .then_output(|| grants(Permission::Read));
    let head_object = mock!(aws_sdk_s3::Client::head_object).then_output(|| {
        HeadObjectOutput::builder()
            .storage_class(StorageClass::StandardIa)
            .version_id("v3")
            .build()
    });
    let put_versioning = mock!(aws_sdk_s3::Client::put_bucket_versioning)
        .match_requests(|r| r.bucket().is_some_and(|b| b.starts_with(FIRST_PREFIX)))
        .then_output(|| PutBucketVersioningOutput::builder().build());
    let get_versioning = mock!(aws_sdk_s3::Client::get_bucket_versioning).then_output(|| {
        GetBucketVersioningOutput::builder()
            .status(BucketVersioningStatus::Enabled)
            .build()
    });
    let list_buckets = mock!(aws_sdk_s3::Client::list_buckets).then_output(|| {
        ListBucketsOutput::builder()
            .buckets(Bucket::builder().name("first").build())
            .buckets(Bucket::builder().name("second").build())
            .build()
    });
    let list_objects = mock!(aws_sdk_s3::Client::list_objects_v2).then_output(|| {
        ListObjectsV2Output::builder()
            .contents(Object::builder().key("a-firstfile.txt").build())
            .contents(Object::builder().key("b-secondfile.txt").build())
            .contents(Object::builder().key("c-thirdfile.txt").build())
            .is_truncated(false)
            .build()
    });
    let list_versions = list_versions_rule();
    let delete_objects = delete_objects_rule();
    let delete_bucket = delete_bucket_rule();

    let client = tour_client(&[
        &create_bucket,
        &put_public,
        &put_ia,
        &put_object,
        &get_object,
        &copy_object,
        &delete_object,
        &put_acl,
        &get_acl,
        &head_object,
        &put_versioning,
        &get_versioning,
        &list_buckets,
        &list_objects,
        &list_versions,
        &delete_objects,
        &delete_bucket,
    ]);

    let report = tour::run(&client, &settings(&work_dir, &download_dir))
        .await
        .unwrap();

    assert!(report.first_bucket().as_str().starts_with(FIRST_PREFIX));
    assert!(report.second_bucket().as_str().starts_with(SECOND_PREFIX));
    assert_eq!(3, report.files().len());
    assert!(report.files()[0].to_string_lossy().ends_with("firstfile.txt"));
    assert_eq!(
        "s".repeat(400),
        std::fs::read_to_string(&report.files()[1]).unwrap()
    );
    assert!(report.downloaded().starts_with(download_dir.path()));
    assert_eq!(
        "f".repeat(300),
        std::fs::read_to_string(report.downloaded()).unwrap()
    );

    assert_eq!(1, report.public_read_grants.len());
    assert_eq!(
        Some(&ServerSideEncryption::Aes256),
        report.third_object_encryption.as_ref()
    );
    assert_eq!(StorageClass::StandardIa, report.third_object_storage_class);
    assert_eq!(VersioningStatus::Enabled, report.versioning_status);
    assert_eq!(Some("v3"), report.first_object_version_id.as_deref());
    assert_eq!(2, report.buckets.len());
    assert_eq!(3, report.objects.len());
    assert_eq!(2, report.first_bucket_versions_deleted);
    assert_eq!(2, report.second_bucket_versions_deleted);

    assert_eq!(2, create_bucket.num_calls());
    assert_eq!(1, put_public.num_calls());
    assert_eq!(1, put_ia.num_calls());
    // first, third, three versioned uploads and the second bucket upload
    assert_eq!(6, put_object.num_calls());
    assert_eq!(1, get_object.num_calls());
    assert_eq!(1, copy_object.num_calls());
    assert_eq!(1, delete_object.num_calls());
    assert_eq!(1, put_acl.num_calls());
    assert_eq!(2, get_acl.num_calls());
    // storage class, first object version and one per listed object
    assert_eq!(5, head_object.num_calls());
    assert_eq!(1, put_versioning.num_calls());
    assert_eq!(1, get_versioning.num_calls());
    assert_eq!(2, list_versions.num_calls());
    assert_eq!(2, delete_objects.num_calls());
    assert_eq!(2, delete_bucket.num_calls());
}

#[tokio::test]
async fn test_failed_step_cleans_up_both_buckets() {
    let work_dir = tempfile::tempdir().unwrap();
    let download_dir = tempfile::tempdir().unwrap();

    let create_bucket = create_bucket_rule();
    let put_object = mock!(aws_sdk_s3::Client::put_object)
        .then_http_response(|| s3_error_response(403, "AccessDenied"));
    let list_versions = list_versions_rule();
    let delete_objects = delete_objects_rule();
    let delete_bucket = delete_bucket_rule();
    let client = tour_client(&[
        &create_bucket,
        &put_object,
        &list_versions,
        &delete_objects,
        &delete_bucket,
    ]);

    let err = tour::run(&client, &settings(&work_dir, &download_dir))
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::ProviderError, err.kind());
    assert_eq!(1, put_object.num_calls());
    assert_eq!(2, list_versions.num_calls());
    assert_eq!(2, delete_bucket.num_calls());
}

#[tokio::test]
async fn test_cleanup_failure_keeps_original_error() {
    let (_guard, rx) = capture_test_logs();
    let work_dir = tempfile::tempdir().unwrap();
    let download_dir = tempfile::tempdir().unwrap();

    let create_bucket = create_bucket_rule();
    let put_object =
        mock!(aws_sdk_s3::Client::put_object).then_output(|| PutObjectOutput::builder().build());
    let get_object = mock!(aws_sdk_s3::Client::get_object)
        .then_http_response(|| s3_error_response(404, "NoSuchKey"));
    let list_versions = list_versions_rule();
    let delete_objects = delete_objects_rule();
    let delete_bucket = mock!(aws_sdk_s3::Client::delete_bucket)
        .then_http_response(|| s3_error_response(409, "BucketNotEmpty"));
    let client = tour_client(&[
        &create_bucket,
        &put_object,
        &get_object,
        &list_versions,
        &delete_objects,
        &delete_bucket,
    ]);

    let err = tour::run(&client, &settings(&work_dir, &download_dir))
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::NotFound, err.kind());
    assert_eq!(2, delete_bucket.num_calls());
    assert!(rx.contents().contains("was left behind"));
}

#[tokio::test]
async fn test_second_bucket_failure_removes_first() {
    let work_dir = tempfile::tempdir().unwrap();
    let download_dir = tempfile::tempdir().unwrap();

    let create_first = mock!(aws_sdk_s3::Client::create_bucket)
        .match_requests(|r| r.bucket().is_some_and(|b| b.starts_with(FIRST_PREFIX)))
        .then_output(|| CreateBucketOutput::builder().build());
    let create_second = mock!(aws_sdk_s3::Client::create_bucket)
        .then_http_response(|| s3_error_response(400, "TooManyBuckets"));
    let list_versions = mock!(aws_sdk_s3::Client::list_object_versions)
        .then_output(|| ListObjectVersionsOutput::builder().build());
    let delete_bucket = mock!(aws_sdk_s3::Client::delete_bucket)
        .match_requests(|r| r.bucket().is_some_and(|b| b.starts_with(FIRST_PREFIX)))
        .then_output(|| DeleteBucketOutput::builder().build());
    let client = tour_client(&[&create_first, &create_second, &list_versions, &delete_bucket]);

    let err = tour::run(&client, &settings(&work_dir, &download_dir))
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::ProviderError, err.kind());
    assert_eq!(1, create_first.num_calls());
    assert_eq!(1, delete_bucket.num_calls());
    // nothing was uploaded, so nothing was written locally
    assert_eq!(0, std::fs::read_dir(work_dir.path()).unwrap().count());
}
