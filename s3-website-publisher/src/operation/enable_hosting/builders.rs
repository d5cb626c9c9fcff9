/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::operation::resolve_bucket;

use super::{EnableHosting, EnableHostingOutput};

/// Fluent builder for enabling static website hosting
#[derive(Debug)]
pub struct EnableHostingFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
}

impl EnableHostingFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
        }
    }

    /// Enable website hosting
    #[tracing::instrument(skip_all, level = "debug", name = "enable-hosting", fields(
        bucket = self.bucket.as_deref().unwrap_or(self.handle.config.bucket()),
    ))]
    pub async fn send(self) -> Result<EnableHostingOutput, crate::error::Error> {
        let bucket = resolve_bucket(&self.handle, self.bucket);
        EnableHosting::orchestrate(self.handle, &bucket).await
    }

    /// The bucket to enable website hosting on.
    /// Defaults to the configured bucket.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket to enable website hosting on.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to enable website hosting on.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }
}
