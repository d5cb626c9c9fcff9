/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::Path;

use aws_sdk_s3::operation::put_bucket_policy::PutBucketPolicyOutput;
use aws_sdk_s3::operation::put_bucket_website::PutBucketWebsiteOutput;
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
use aws_smithy_runtime::test_util::capture_test_logs::capture_test_logs;
use s3_website_publisher::error::ErrorKind;
use s3_website_publisher::types::WEBSITE_MANIFEST;
use test_common::{
    create_site_dir, service_error_client, successful_publish_rules, write_settings,
};

const BUCKET: &str = "example-site";

fn publisher(s3: aws_sdk_s3::Client, site_dir: &Path) -> s3_website_publisher::Client {
    let config = s3_website_publisher::Config::builder()
        .bucket(BUCKET)
        .region("us-west-2")
        .site_dir(site_dir)
        .client(s3)
        .build()
        .unwrap();
    s3_website_publisher::Client::new(config)
}

fn canonical_policy() -> serde_json::Value {
    serde_json::json!({
        "Version": "2012-10-17",
        "Statement": [{
            "Effect": "Allow",
            "Principal": "*",
            "Action": ["s3:GetObject"],
            "Resource": "arn:aws:s3:::example-site/*"
        }]
    })
}

#[tokio::test]
async fn test_publish_configures_bucket() {
    let (_guard, rx) = capture_test_logs();
    let site = create_site_dir(16, &[]);

    let mut rules: Vec<_> = WEBSITE_MANIFEST
        .iter()
        .map(|entry| {
            mock!(aws_sdk_s3::Client::put_object)
                .match_requests(move |r| {
                    r.bucket() == Some(BUCKET)
                        && r.key() == Some(entry.key())
                        && r.content_type() == Some(entry.content_type())
                })
                .then_output(|| PutObjectOutput::builder().build())
        })
        .collect();
    rules.push(
        mock!(aws_sdk_s3::Client::put_bucket_website)
            .match_requests(|r| {
                r.bucket() == Some(BUCKET)
                    && r.website_configuration()
                        .and_then(|w| w.index_document())
                        .map(|d| d.suffix())
                        == Some("index.html")
            })
            .then_output(|| PutBucketWebsiteOutput::builder().build()),
    );
    rules.push(
        mock!(aws_sdk_s3::Client::put_bucket_policy)
            .match_requests(|r| {
                r.bucket() == Some(BUCKET)
                    && r.policy()
                        .and_then(|p| serde_json::from_str::<serde_json::Value>(p).ok())
                        == Some(canonical_policy())
            })
            .then_output(|| PutBucketPolicyOutput::builder().build()),
    );
    let rule_refs: Vec<_> = rules.iter().collect();
    let s3 = mock_client!(aws_sdk_s3, RuleMode::MatchAny, &rule_refs);

    let output = publisher(s3, site.path()).publish().send().await.unwrap();

    for rule in &rules {
        assert_eq!(1, rule.num_calls());
    }
    assert_eq!(
        vec!["index.html", "styles.css", "image1.jpeg", "image2.jpeg", "image3.jpeg"],
        output.uploaded().keys()
    );
    assert_eq!(
        canonical_policy(),
        serde_json::from_str::<serde_json::Value>(output.policy()).unwrap()
    );
    assert_eq!(
        "http://example-site.s3-website-us-west-2.amazonaws.com",
        output.website_url().to_string()
    );
    assert!(rx.contents().contains("uploaded 5 objects to example-site"));
}

#[tokio::test]
async fn test_publish_twice_is_idempotent() {
    let site = create_site_dir(1, &[]);
    let [put_object, put_website, put_policy] = successful_publish_rules();
    let s3 = mock_client!(
        aws_sdk_s3,
        RuleMode::MatchAny,
        &[&put_object, &put_website, &put_policy]
    );
    let client = publisher(s3, site.path());

    let first = client.publish().send().await.unwrap();
    let second = client.publish().send().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(10, put_object.num_calls());
    assert_eq!(2, put_website.num_calls());
    assert_eq!(2, put_policy.num_calls());
}

#[tokio::test]
async fn test_missing_local_file_leaves_partial_upload() {
    let site = create_site_dir(1, &["image2.jpeg"]);
    let [put_object, put_website, put_policy] = successful_publish_rules();
    let s3 = mock_client!(
        aws_sdk_s3,
        RuleMode::MatchAny,
        &[&put_object, &put_website, &put_policy]
    );

    let err = publisher(s3, site.path())
        .publish()
        .send()
        .await
        .unwrap_err();

    match err.kind() {
        ErrorKind::FileNotFound(not_found) => {
            assert!(not_found.path().ends_with("image2.jpeg"))
        }
        kind => panic!("unexpected error kind {kind:?}"),
    }
    // index.html, styles.css and image1.jpeg were already uploaded
    assert_eq!(3, put_object.num_calls());
    assert_eq!(0, put_website.num_calls());
    assert_eq!(0, put_policy.num_calls());
}

#[tokio::test]
async fn test_nonexistent_bucket_reports_service_message() {
    let site = create_site_dir(1, &[]);
    let (s3, http_client) =
        service_error_client(404, "NoSuchBucket", "The specified bucket does not exist");

    let err = publisher(s3, site.path())
        .publish()
        .send()
        .await
        .unwrap_err();

    let details = err.as_service_error().expect("service error");
    assert_eq!(Some("NoSuchBucket"), details.code());
    assert_eq!(Some("The specified bucket does not exist"), details.message());
    // the first upload fails, so hosting and policy are never requested
    let requests = http_client.actual_requests().collect::<Vec<_>>();
    assert_eq!(1, requests.len());
    assert!(requests[0].uri().contains("/index.html"));
}

#[tokio::test]
async fn test_missing_bucket_name_fails_before_any_request() {
    let dir = tempfile::tempdir().unwrap();
    let settings = write_settings(dir.path(), "[S3]\nregion = us-west-2\n");

    let err = s3_website_publisher::from_env()
        .settings_file(settings)
        .region("us-west-2")
        .load()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::ConfigMissing, err.kind());
}

#[tokio::test]
async fn test_load_from_settings_file() {
    let site = create_site_dir(1, &[]);
    let settings = write_settings(site.path(), "[S3]\nbucket_name = example-site\n");

    let config = s3_website_publisher::from_env()
        .settings_file(settings)
        .site_dir(site.path())
        .region("us-west-2")
        .load()
        .await
        .unwrap();

    assert_eq!(BUCKET, config.bucket());
    assert_eq!("us-west-2", config.region());
}
