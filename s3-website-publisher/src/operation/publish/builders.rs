/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::operation::resolve_bucket;
use crate::types::PhaseListener;

use super::{Publish, PublishOutput};

/// Fluent builder for publishing the website
#[derive(Debug)]
pub struct PublishFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
    listener: PhaseListener,
}

impl PublishFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
            listener: PhaseListener::default(),
        }
    }

    /// Publish the website
    #[tracing::instrument(skip_all, level = "debug", name = "publish-website", fields(
        bucket = self.bucket.as_deref().unwrap_or(self.handle.config.bucket()),
        site_dir = %self.handle.config.site_dir().display(),
    ))]
    pub async fn send(self) -> Result<PublishOutput, crate::error::Error> {
        let bucket = resolve_bucket(&self.handle, self.bucket);
        Publish::orchestrate(self.handle, &bucket, self.listener).await
    }

    /// The bucket to publish to.
    /// Defaults to the configured bucket.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket to publish to.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to publish to.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Callback invoked as each phase of the publish starts.
    pub fn on_phase(mut self, input: impl Into<PhaseListener>) -> Self {
        self.listener = input.into();
        self
    }
}
