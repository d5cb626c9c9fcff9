/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::Config;
use std::sync::Arc;

/// Client for publishing a static website to Amazon Simple Storage Service.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, S3 client, env details, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Handle {
    /// The S3 client requests are sent with
    pub(crate) fn s3(&self) -> &aws_sdk_s3::Client {
        self.config.client()
    }
}

impl Client {
    /// Creates a new client from a publisher config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Upload the website manifest to the bucket.
    ///
    /// Constructs a fluent builder for the
    /// [`UploadFiles`](crate::operation::upload_files::builders::UploadFilesFluentBuilder) operation.
    ///
    /// Files are uploaded one at a time in manifest order. The first failure stops the upload,
    /// objects uploaded before it are left in place.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn upload(client: &s3_website_publisher::Client) -> Result<(), s3_website_publisher::error::Error> {
    ///     let output = client.upload_files().send().await?;
    ///     println!("uploaded {} objects", output.objects_uploaded());
    ///     Ok(())
    /// }
    /// ```
    pub fn upload_files(&self) -> crate::operation::upload_files::builders::UploadFilesFluentBuilder {
        crate::operation::upload_files::builders::UploadFilesFluentBuilder::new(self.handle.clone())
    }

    /// Enable static website hosting on the bucket with `index.html` as the index document.
    ///
    /// Constructs a fluent builder for the
    /// [`EnableHosting`](crate::operation::enable_hosting::builders::EnableHostingFluentBuilder) operation.
    pub fn enable_hosting(
        &self,
    ) -> crate::operation::enable_hosting::builders::EnableHostingFluentBuilder {
        crate::operation::enable_hosting::builders::EnableHostingFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Replace the bucket policy with one allowing public reads of every object.
    ///
    /// Constructs a fluent builder for the
    /// [`PutPolicy`](crate::operation::put_policy::builders::PutPolicyFluentBuilder) operation.
    pub fn put_policy(&self) -> crate::operation::put_policy::builders::PutPolicyFluentBuilder {
        crate::operation::put_policy::builders::PutPolicyFluentBuilder::new(self.handle.clone())
    }

    /// Publish the website: upload the files, enable hosting and make the bucket publicly
    /// readable, in that order.
    ///
    /// Constructs a fluent builder for the
    /// [`Publish`](crate::operation::publish::builders::PublishFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use s3_website_publisher::types::PublishPhase;
    ///
    /// async fn publish(client: &s3_website_publisher::Client) -> Result<(), s3_website_publisher::error::Error> {
    ///     let output = client
    ///         .publish()
    ///         .on_phase(|phase: PublishPhase| println!("{phase:?}"))
    ///         .send()
    ///         .await?;
    ///
    ///     println!("{}", output.website_url());
    ///     Ok(())
    /// }
    /// ```
    pub fn publish(&self) -> crate::operation::publish::builders::PublishFluentBuilder {
        crate::operation::publish::builders::PublishFluentBuilder::new(self.handle.clone())
    }
}

#[cfg(test)]
pub(crate) fn test_client(s3: aws_sdk_s3::Client, site_dir: &std::path::Path) -> Client {
    let config = Config::builder()
        .bucket("test-bucket")
        .region("us-west-2")
        .site_dir(site_dir)
        .client(s3)
        .build()
        .expect("valid test config");
    Client::new(config)
}

#[cfg(test)]
pub(crate) fn write_site(dir: &std::path::Path, paths: &[&str]) {
    for path in paths {
        std::fs::write(dir.join(path), format!("contents of {path}")).unwrap();
    }
}

/// S3 client whose first request is answered with an S3 XML error document.
///
/// The returned replay client records the requests that were actually sent.
#[cfg(test)]
pub(crate) fn error_response_client(
    status: u16,
    code: &str,
    message: &str,
) -> (
    aws_sdk_s3::Client,
    aws_smithy_http_client::test_util::StaticReplayClient,
) {
    use aws_smithy_http_client::test_util::{ReplayEvent, StaticReplayClient};
    use aws_smithy_types::body::SdkBody;

    let body = format!("<Error><Code>{code}</Code><Message>{message}</Message></Error>");
    let http_client = StaticReplayClient::new(vec![ReplayEvent::new(
        http::Request::builder()
            .uri("https://not-used")
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(status)
            .header("Content-Type", "application/xml")
            .body(SdkBody::from(body))
            .unwrap(),
    )]);
    let s3 = aws_sdk_s3::Client::from_conf(
        aws_sdk_s3::Config::builder()
            .http_client(http_client.clone())
            .region(aws_sdk_s3::config::Region::from_static("us-west-2"))
            .with_test_defaults()
            .build(),
    );
    (s3, http_client)
}
