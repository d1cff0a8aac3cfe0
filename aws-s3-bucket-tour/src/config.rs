/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_types::region::Region;

use crate::error;

pub(crate) mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    region: Option<Region>,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The region new buckets are created in.
    ///
    /// Falls back to the region configured on the S3 client when no explicit region was set.
    pub fn region(&self) -> Option<&Region> {
        self.region
            .as_ref()
            .or_else(|| self.client.config().region())
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    region: Option<Region>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Set the region buckets should be created in.
    ///
    /// Default is the region of the S3 client.
    pub fn region(mut self, region: impl Into<Region>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the region buckets should be created in.
    pub fn set_region(mut self, region: Option<Region>) -> Self {
        self.region = region;
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    pub fn build(self) -> Result<Config, error::Error> {
        let client = self
            .client
            .ok_or_else(|| error::invalid_input("an S3 client is required"))?;
        Ok(Config {
            region: self.region,
            client,
        })
    }
}
