/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::list_object_versions::{
    ListObjectVersionsError, ListObjectVersionsOutput,
};
use aws_smithy_runtime_api::http::Response;

use crate::types::ObjectVersion;

/// Paginator for `ListObjectVersions`, which is driven by a key marker and version id marker
/// rather than a continuation token.
#[derive(Debug)]
pub(super) struct ListObjectVersionsPaginator {
    client: aws_sdk_s3::Client,
    bucket: String,
    state: Option<State>,
}

#[derive(Debug, PartialEq)]
enum State {
    Paginating {
        key_marker: Option<String>,
        version_id_marker: Option<String>,
    },
    Done,
}

impl State {
    fn next_state(self, output: &ListObjectVersionsOutput) -> State {
        let is_truncated = output.is_truncated().unwrap_or(false);
        match self {
            State::Paginating { .. } if is_truncated && output.next_key_marker().is_some() => {
                State::Paginating {
                    key_marker: output.next_key_marker.clone(),
                    version_id_marker: output.next_version_id_marker.clone(),
                }
            }
            _ => State::Done,
        }
    }
}

impl ListObjectVersionsPaginator {
    pub(super) fn new(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            state: Some(State::Paginating {
                key_marker: None,
                version_id_marker: None,
            }),
        }
    }

    fn state(&self) -> &State {
        self.state.as_ref().expect("valid state")
    }

    pub(super) async fn next_page(
        &mut self,
    ) -> Option<Result<ListObjectVersionsOutput, SdkError<ListObjectVersionsError, Response>>> {
        let request = match self.state() {
            State::Done => return None,
            State::Paginating {
                key_marker,
                version_id_marker,
            } => self
                .client
                .list_object_versions()
                .bucket(self.bucket.clone())
                .set_key_marker(key_marker.clone())
                .set_version_id_marker(version_id_marker.clone()),
        };

        match request.send().await {
            Ok(output) => {
                let prev_state = self.state.take().expect("state set");
                self.state.replace(prev_state.next_state(&output));
                Some(Ok(output))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

/// Every object version and delete marker listed in a single page.
pub(super) fn versions_in_page(output: &ListObjectVersionsOutput) -> Vec<ObjectVersion> {
    let versions = output.versions().iter().filter_map(|v| {
        v.key()
            .map(|key| ObjectVersion::new(key, v.version_id().map(str::to_owned)))
    });
    let markers = output.delete_markers().iter().filter_map(|m| {
        m.key().map(|key| {
            ObjectVersion::new(key, m.version_id().map(str::to_owned)).delete_marker()
        })
    });
    versions.chain(markers).collect()
}
