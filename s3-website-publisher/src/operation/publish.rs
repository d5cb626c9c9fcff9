/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

use std::sync::Arc;

use crate::error;
use crate::operation::enable_hosting::EnableHosting;
use crate::operation::put_policy::PutPolicy;
use crate::operation::upload_files::{UploadFiles, UploadFilesOutput};
use crate::types::{PhaseListener, PublishPhase, WebsiteUrl, WEBSITE_MANIFEST};

/// Operation struct for publishing the website
#[derive(Clone, Default, Debug)]
pub(crate) struct Publish;

impl Publish {
    /// Execute a single `Publish` operation
    ///
    /// Phases run strictly in order and the first failure ends the operation. Nothing is rolled
    /// back: a failed run can leave objects uploaded without hosting or policy applied.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        bucket: &str,
        listener: PhaseListener,
    ) -> Result<PublishOutput, error::Error> {
        listener.notify(PublishPhase::UploadingFiles);
        let uploaded = UploadFiles::orchestrate(handle.clone(), bucket, WEBSITE_MANIFEST).await?;
        tracing::info!("uploaded {} objects to {bucket}", uploaded.objects_uploaded());

        listener.notify(PublishPhase::EnablingHosting);
        EnableHosting::orchestrate(handle.clone(), bucket).await?;
        tracing::info!("website hosting enabled on {bucket}");

        listener.notify(PublishPhase::ApplyingPolicy);
        let policy = PutPolicy::orchestrate(handle.clone(), bucket).await?;
        tracing::info!("public read policy applied to {bucket}");

        let website_url = WebsiteUrl::new(bucket, handle.config.region());
        Ok(PublishOutput {
            uploaded,
            policy: policy.policy().to_owned(),
            website_url,
        })
    }
}

/// Output type for publishing the website
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishOutput {
    uploaded: UploadFilesOutput,
    policy: String,
    website_url: WebsiteUrl,
}

impl PublishOutput {
    /// The website files that were uploaded
    pub fn uploaded(&self) -> &UploadFilesOutput {
        &self.uploaded
    }

    /// The JSON bucket policy that was applied
    pub fn policy(&self) -> &str {
        &self.policy
    }

    /// Where the published website can be reached
    pub fn website_url(&self) -> &WebsiteUrl {
        &self.website_url
    }
}
