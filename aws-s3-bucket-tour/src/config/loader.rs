/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::BehaviorVersion;
use aws_types::region::Region;

use crate::config::Builder;
use crate::{error, Config};

/// Load tour [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    profile_name: Option<String>,
    region: Option<Region>,
    endpoint_url: Option<String>,
    force_path_style: bool,
}

impl ConfigLoader {
    /// Name of the shared config/credentials profile to load credentials and the default
    /// region from.
    ///
    /// Default is the `AWS_PROFILE` environment variable, or `default`.
    pub fn profile_name(mut self, profile_name: impl Into<String>) -> Self {
        self.profile_name = Some(profile_name.into());
        self
    }

    /// Override the region resolved from the environment/profile.
    pub fn region(mut self, region: impl Into<Region>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Send requests to a custom endpoint, e.g. a local S3 compatible server.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Address buckets as `https://endpoint/bucket` instead of `https://bucket.endpoint`.
    ///
    /// Usually required together with [`endpoint_url`](Self::endpoint_url).
    pub fn force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = force_path_style;
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Result<Config, error::Error> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile_name) = &self.profile_name {
            loader = loader.profile_name(profile_name);
        }
        if let Some(region) = self.region.clone() {
            loader = loader.region(region);
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let shared_config = loader.load().await;

        tracing::debug!(
            profile = ?self.profile_name,
            region = ?shared_config.region(),
            endpoint_url = ?self.endpoint_url,
            "loaded shared config"
        );

        let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
            .force_path_style(self.force_path_style)
            .build();
        let s3_client = aws_sdk_s3::Client::from_conf(s3_config);

        self.builder
            .set_region(shared_config.region().cloned())
            .client(s3_client)
            .build()
    }
}
