/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::operation::resolve_bucket;

use super::{PutPolicy, PutPolicyOutput};

/// Fluent builder for attaching the public read bucket policy
#[derive(Debug)]
pub struct PutPolicyFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
}

impl PutPolicyFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
        }
    }

    /// Apply the bucket policy
    #[tracing::instrument(skip_all, level = "debug", name = "put-policy", fields(
        bucket = self.bucket.as_deref().unwrap_or(self.handle.config.bucket()),
    ))]
    pub async fn send(self) -> Result<PutPolicyOutput, crate::error::Error> {
        let bucket = resolve_bucket(&self.handle, self.bucket);
        PutPolicy::orchestrate(self.handle, &bucket).await
    }

    /// The bucket to attach the policy to.
    /// Defaults to the configured bucket.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket to attach the policy to.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to attach the policy to.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }
}
