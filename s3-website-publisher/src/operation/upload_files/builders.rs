/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::operation::resolve_bucket;
use crate::types::WEBSITE_MANIFEST;

use super::{UploadFiles, UploadFilesOutput};

/// Fluent builder for uploading the website manifest
#[derive(Debug)]
pub struct UploadFilesFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
}

impl UploadFilesFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
        }
    }

    /// Upload the website files
    #[tracing::instrument(skip_all, level = "debug", name = "upload-files", fields(
        bucket = self.bucket.as_deref().unwrap_or(self.handle.config.bucket()),
    ))]
    pub async fn send(self) -> Result<UploadFilesOutput, crate::error::Error> {
        let bucket = resolve_bucket(&self.handle, self.bucket);
        UploadFiles::orchestrate(self.handle, &bucket, WEBSITE_MANIFEST).await
    }

    /// The bucket to upload to.
    /// Defaults to the configured bucket.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket to upload to.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to upload to.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }
}
