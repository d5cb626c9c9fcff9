/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

use std::sync::Arc;

use aws_sdk_s3::primitives::ByteStream;

use crate::error;
use crate::types::ManifestEntry;

/// Operation struct for uploading the website manifest
#[derive(Clone, Default, Debug)]
pub(crate) struct UploadFiles;

impl UploadFiles {
    /// Execute a single `UploadFiles` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        bucket: &str,
        manifest: &'static [ManifestEntry],
    ) -> Result<UploadFilesOutput, error::Error> {
        let mut keys = Vec::with_capacity(manifest.len());
        for entry in manifest {
            upload_file(&handle, bucket, entry).await?;
            keys.push(entry.key().to_owned());
        }

        Ok(UploadFilesOutput { keys })
    }
}

/// Upload a single manifest entry with `PutObject`
async fn upload_file(
    handle: &crate::client::Handle,
    bucket: &str,
    entry: &ManifestEntry,
) -> Result<(), error::Error> {
    let path = handle.config.site_dir().join(entry.path());
    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|err| error::local_file(&path, err))?;
    let content_length: i64 = metadata.len().try_into().map_err(|_| {
        error::invalid_input(format!("content_length:{} is invalid.", metadata.len()))
    })?;
    let body = ByteStream::from_path(&path).await?;

    tracing::debug!(
        "uploading {} to s3://{bucket}/{} ({content_length} bytes, {})",
        path.display(),
        entry.key(),
        entry.content_type()
    );

    handle
        .s3()
        .put_object()
        .bucket(bucket)
        .key(entry.key())
        .content_type(entry.content_type())
        .content_length(content_length)
        .body(body)
        .send()
        .await?;

    Ok(())
}

/// Output type for uploading the website manifest
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFilesOutput {
    keys: Vec<String>,
}

impl UploadFilesOutput {
    /// The number of objects that were uploaded
    pub fn objects_uploaded(&self) -> usize {
        self.keys.len()
    }

    /// The keys of the uploaded objects, in upload order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}
