/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::{fs, io::Write, path::Path};

use aws_sdk_s3::config::Region;
use aws_sdk_s3::operation::put_bucket_policy::PutBucketPolicyOutput;
use aws_sdk_s3::operation::put_bucket_website::PutBucketWebsiteOutput;
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_smithy_http_client::test_util::{ReplayEvent, StaticReplayClient};
use aws_smithy_mocks_experimental::{mock, Rule};
use aws_smithy_types::body::SdkBody;
use s3_website_publisher::types::WEBSITE_MANIFEST;
use tempfile::{tempdir, TempDir};

/// Create a site directory containing every file from the website manifest except those
/// listed in `missing`.
///
/// Each file holds `size` bytes.
pub fn create_site_dir(size: usize, missing: &[&str]) -> TempDir {
    let temp_dir = tempdir().unwrap();

    for entry in WEBSITE_MANIFEST {
        if missing.contains(&entry.path()) {
            continue;
        }
        let mut file = fs::File::create(temp_dir.path().join(entry.path())).unwrap();
        file.write_all(&vec![0; size]).unwrap(); // Writing `size` bytes
    }

    temp_dir
}

/// Write an INI settings file with the given contents to `dir` and return its path
pub fn write_settings(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("config.ini");
    fs::write(&path, contents).unwrap();
    path
}

/// Successful responses for every request the publisher makes.
///
/// Returned in the order: `PutObject`, `PutBucketWebsite`, `PutBucketPolicy`.
pub fn successful_publish_rules() -> [Rule; 3] {
    [
        mock!(aws_sdk_s3::Client::put_object).then_output(|| PutObjectOutput::builder().build()),
        mock!(aws_sdk_s3::Client::put_bucket_website)
            .then_output(|| PutBucketWebsiteOutput::builder().build()),
        mock!(aws_sdk_s3::Client::put_bucket_policy)
            .then_output(|| PutBucketPolicyOutput::builder().build()),
    ]
}

/// An S3 client whose first request fails with the given S3 error code and message.
///
/// The error is served as a real XML error response, so it goes through the SDK's
/// deserializer. Use the returned replay client to inspect the requests that were sent.
pub fn service_error_client(
    status: u16,
    code: &str,
    message: &str,
) -> (aws_sdk_s3::Client, StaticReplayClient) {
    let body = format!("<Error><Code>{code}</Code><Message>{message}</Message></Error>");
    let http_client = StaticReplayClient::new(vec![ReplayEvent::new(
        // requests are asserted on directly via `actual_requests()`
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
            .region(Region::from_static("us-west-2"))
            .with_test_defaults()
            .build(),
    );
    (s3, http_client)
}
