/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Types for uploading the website files
pub mod upload_files;

/// Types for enabling static website hosting
pub mod enable_hosting;

/// Types for applying the public read bucket policy
pub mod put_policy;

/// Types for publishing the whole website
pub mod publish;

/// Resolve the bucket for a request, falling back to the configured bucket
pub(crate) fn resolve_bucket(handle: &crate::client::Handle, bucket: Option<String>) -> String {
    bucket.unwrap_or_else(|| handle.config.bucket().to_owned())
}
