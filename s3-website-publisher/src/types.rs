/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use core::fmt;
use std::sync::Arc;

/// The object served when a visitor requests the root of the website or any "directory".
pub const INDEX_DOCUMENT: &str = "index.html";

/// A local file that is uploaded as part of the website.
///
/// The file at `path` (relative to the site directory) is uploaded to the object key `path`
/// with a `Content-Type` of `content_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    path: &'static str,
    content_type: &'static str,
}

impl ManifestEntry {
    /// Create a new manifest entry
    pub const fn new(path: &'static str, content_type: &'static str) -> Self {
        Self { path, content_type }
    }

    /// Path of the file relative to the site directory. Also used as the object key.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// The object key the file is uploaded to.
    pub fn key(&self) -> &'static str {
        self.path
    }

    /// MIME type to serve the object with.
    pub fn content_type(&self) -> &'static str {
        self.content_type
    }
}

/// Files making up the website, in upload order.
pub const WEBSITE_MANIFEST: &[ManifestEntry] = &[
    ManifestEntry::new(INDEX_DOCUMENT, "text/html"),
    ManifestEntry::new("styles.css", "text/css"),
    ManifestEntry::new("image1.jpeg", "image/jpeg"),
    ManifestEntry::new("image2.jpeg", "image/jpeg"),
    ManifestEntry::new("image3.jpeg", "image/jpeg"),
];

/// Returns true if the index document is one of the files in `manifest`.
///
/// Enabling website hosting with an index document that was never uploaded leaves the site
/// returning `404` for its root.
pub fn manifest_contains_index_document(manifest: &[ManifestEntry]) -> bool {
    manifest.iter().any(|entry| entry.key() == INDEX_DOCUMENT)
}

/// The public endpoint of an S3 bucket configured for website hosting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteUrl(String);

impl WebsiteUrl {
    /// Build the website endpoint for `bucket` in `region`.
    ///
    /// Uses the dash form of the endpoint, e.g. `http://my-bucket.s3-website-us-west-2.amazonaws.com`.
    pub fn new(bucket: &str, region: &str) -> Self {
        Self(format!("http://{bucket}.s3-website-{region}.amazonaws.com"))
    }

    /// The URL as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WebsiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A step of the publishing workflow
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishPhase {
    /// Uploading the website manifest to the bucket
    UploadingFiles,

    /// Enabling static website hosting on the bucket
    EnablingHosting,

    /// Attaching the public read bucket policy
    ApplyingPolicy,
}

/// Callback invoked when the publish operation starts a new [`PublishPhase`]
#[derive(Clone)]
pub struct PhaseListener {
    pub(crate) callback: Arc<dyn Fn(PublishPhase) + Send + Sync + 'static>,
}

impl PhaseListener {
    pub(crate) fn notify(&self, phase: PublishPhase) {
        (self.callback)(phase)
    }
}

impl fmt::Debug for PhaseListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("PhaseListener");
        formatter.field("callback", &"<closure>");
        formatter.finish()
    }
}

impl<F> From<F> for PhaseListener
where
    F: Fn(PublishPhase) + Send + Sync + 'static,
{
    fn from(value: F) -> Self {
        PhaseListener {
            callback: Arc::new(value),
        }
    }
}

impl Default for PhaseListener {
    fn default() -> Self {
        Self {
            callback: Arc::new(|_| {}),
        }
    }
}
