/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

use std::sync::Arc;

use aws_sdk_s3::types::{IndexDocument, WebsiteConfiguration};

use crate::error;
use crate::types::INDEX_DOCUMENT;

/// Operation struct for enabling static website hosting
#[derive(Clone, Default, Debug)]
pub(crate) struct EnableHosting;

impl EnableHosting {
    /// Execute a single `EnableHosting` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        bucket: &str,
    ) -> Result<EnableHostingOutput, error::Error> {
        // no error document, missing keys get the S3 default error page
        let website = WebsiteConfiguration::builder()
            .index_document(IndexDocument::builder().suffix(INDEX_DOCUMENT).build()?)
            .build();

        tracing::debug!("enabling website hosting on {bucket} with index document {INDEX_DOCUMENT}");
        handle
            .s3()
            .put_bucket_website()
            .bucket(bucket)
            .website_configuration(website)
            .send()
            .await?;

        Ok(EnableHostingOutput {
            index_document: INDEX_DOCUMENT,
        })
    }
}

/// Output type for enabling static website hosting
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnableHostingOutput {
    index_document: &'static str,
}

impl EnableHostingOutput {
    /// The index document the bucket now serves
    pub fn index_document(&self) -> &str {
        self.index_document
    }
}
