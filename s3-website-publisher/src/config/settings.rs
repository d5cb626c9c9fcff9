/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::Path;
use std::str::FromStr;

use ini::{Ini, Properties};

use crate::error::{self, Error};

/// Default location of the settings file, relative to the working directory
pub const DEFAULT_SETTINGS_PATH: &str = "./config.ini";

/// Section of the settings file holding the S3 settings
pub const S3_SECTION: &str = "S3";

/// Section whose keys every other section inherits
pub const DEFAULT_SECTION: &str = "DEFAULT";

const BUCKET_NAME_KEY: &str = "bucket_name";

/// Settings read from the website settings file.
///
/// The file is INI formatted:
///
/// ```ini
/// [S3]
/// bucket_name = my-website-bucket
/// ```
///
/// Key names are matched without regard to case, and keys missing from `[S3]` are taken from
/// a `[DEFAULT]` section when the file has one. Section names are case sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteSettings {
    bucket_name: String,
}

impl WebsiteSettings {
    /// Read settings from the INI file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let conf = Ini::load_from_file(path).map_err(|e| {
            error::config_missing(format!(
                "failed to read settings file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_ini(&conf)
    }

    fn from_ini(conf: &Ini) -> Result<Self, Error> {
        let section = conf.section(Some(S3_SECTION)).ok_or_else(|| {
            error::config_missing(format!("settings are missing the [{S3_SECTION}] section"))
        })?;

        let defaults = conf.section(Some(DEFAULT_SECTION));

        // no validation of bucket naming rules, S3 rejects invalid names itself
        let bucket_name = lookup(section, BUCKET_NAME_KEY)
            .or_else(|| defaults.and_then(|defaults| lookup(defaults, BUCKET_NAME_KEY)))
            .ok_or_else(|| {
                error::config_missing(format!(
                    "settings are missing `{BUCKET_NAME_KEY}` in the [{S3_SECTION}] section"
                ))
            })?;

        Ok(Self {
            bucket_name: bucket_name.to_owned(),
        })
    }

    /// The bucket to publish the website to
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }
}

fn lookup<'a>(section: &'a Properties, key: &str) -> Option<&'a str> {
    section
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| value)
}

impl FromStr for WebsiteSettings {
    type Err = Error;

    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        let conf = Ini::load_from_str(contents)
            .map_err(|e| error::config_missing(format!("invalid settings: {e}")))?;
        Self::from_ini(&conf)
    }
}
