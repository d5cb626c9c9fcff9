/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Publish a static website to an Amazon S3 bucket.
//!
//! The publisher uploads a fixed set of local files to an existing bucket, enables
//! [static website hosting] on it with `index.html` as the index document and attaches a
//! bucket policy that allows anyone to read the uploaded objects.
//!
//! [static website hosting]: https://docs.aws.amazon.com/AmazonS3/latest/userguide/WebsiteHosting.html
//!
//! # Examples
//!
//! Load the configuration from `./config.ini` and the environment, then publish:
//!
//! ```no_run
//! # async fn example() -> Result<(), s3_website_publisher::error::Error> {
//! let config = s3_website_publisher::from_env().load().await?;
//! let client = s3_website_publisher::Client::new(config);
//!
//! let output = client.publish().send().await?;
//! println!("{}", output.website_url());
//! # Ok(())
//! # }
//! ```
//!
//! Each phase of the workflow is also exposed on its own:
//!
//! * [`upload_files`](crate::Client::upload_files) - upload the website manifest
//! * [`enable_hosting`](crate::Client::enable_hosting) - turn on website hosting for the bucket
//! * [`put_policy`](crate::Client::put_policy) - allow public reads of the bucket's objects
//! * [`publish`](crate::Client::publish) - all of the above, in order

/// Error types emitted by `s3-website-publisher`
pub mod error;

/// Common types used by `s3-website-publisher`
pub mod types;

/// Bucket policy documents
pub mod policy;

/// Website publisher client
pub mod client;

/// Website publisher operations
pub mod operation;

/// Configuration for the publisher client
pub mod config;

pub use self::client::Client;
pub use self::config::Config;

use self::config::loader::ConfigLoader;

/// Create a config loader that reads the website settings file and the AWS environment.
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
