/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

use crate::error::{self, Error};

/// Configuration loaders
pub mod loader;

/// Website settings read from the INI settings file
pub mod settings;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    bucket: String,
    region: String,
    site_dir: PathBuf,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The bucket the website is published to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The AWS region the bucket lives in. Used to build the website endpoint.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Local directory the manifest paths are resolved against.
    pub fn site_dir(&self) -> &Path {
        &self.site_dir
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    bucket: Option<String>,
    region: Option<String>,
    site_dir: Option<PathBuf>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// The bucket to publish the website to.
    /// Required.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// The region the bucket lives in.
    /// Required.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Directory containing the website files.
    ///
    /// Default is the current working directory.
    pub fn site_dir(mut self, site_dir: impl Into<PathBuf>) -> Self {
        self.site_dir = Some(site_dir.into());
        self
    }

    /// Set an explicit S3 client to use.
    /// Required.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    pub fn build(self) -> Result<Config, Error> {
        Ok(Config {
            bucket: self
                .bucket
                .ok_or_else(|| error::config_missing("bucket name is required"))?,
            region: self
                .region
                .ok_or_else(|| error::config_missing("region is required"))?,
            site_dir: self.site_dir.unwrap_or_else(|| PathBuf::from(".")),
            client: self
                .client
                .ok_or_else(|| error::config_missing("S3 client is required"))?,
        })
    }
}
