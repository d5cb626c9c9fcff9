/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::PathBuf;

use aws_config::BehaviorVersion;
use aws_types::region::Region;

use crate::config::settings::{WebsiteSettings, DEFAULT_SETTINGS_PATH};
use crate::config::Builder;
use crate::error::{self, Error};
use crate::Config;

/// Load publisher [`Config`] from the settings file and the environment.
#[derive(Debug)]
pub struct ConfigLoader {
    settings_path: PathBuf,
    region: Option<Region>,
    builder: Builder,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            region: None,
            builder: Builder::default(),
        }
    }
}

impl ConfigLoader {
    /// Path of the INI settings file holding the bucket name.
    ///
    /// Default is `./config.ini`
    pub fn settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = path.into();
        self
    }

    /// Directory containing the website files.
    ///
    /// Default is the current working directory.
    pub fn site_dir(mut self, site_dir: impl Into<PathBuf>) -> Self {
        self.builder = self.builder.site_dir(site_dir);
        self
    }

    /// Override the region resolved from the environment.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(Region::new(region.into()));
        self
    }

    /// Load the configuration
    ///
    /// The settings file is read before the AWS environment is consulted, so a missing or
    /// incomplete settings file fails without making any network request.
    pub async fn load(self) -> Result<Config, Error> {
        let settings = WebsiteSettings::from_file(&self.settings_path)?;
        tracing::debug!(
            "read bucket name {:?} from {}",
            settings.bucket_name(),
            self.settings_path.display()
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = self.region {
            loader = loader.region(region);
        }
        let shared_config = loader.load().await;

        let region = shared_config
            .region()
            .ok_or_else(|| error::config_missing("no AWS region configured"))?
            .to_string();
        tracing::debug!("using region {region}");

        self.builder
            .bucket(settings.bucket_name())
            .region(region)
            .client(aws_sdk_s3::Client::new(&shared_config))
            .build()
    }
}
