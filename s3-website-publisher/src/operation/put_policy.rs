/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

use std::sync::Arc;

use crate::error;
use crate::policy::BucketPolicy;

/// Operation struct for attaching the public read bucket policy
#[derive(Clone, Default, Debug)]
pub(crate) struct PutPolicy;

impl PutPolicy {
    /// Execute a single `PutPolicy` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        bucket: &str,
    ) -> Result<PutPolicyOutput, error::Error> {
        let policy = BucketPolicy::public_read(bucket).to_json()?;
        tracing::debug!("applying bucket policy to {bucket}");
        tracing::trace!("bucket policy: {policy}");

        // replaces any policy already attached to the bucket
        handle
            .s3()
            .put_bucket_policy()
            .bucket(bucket)
            .policy(policy.clone())
            .send()
            .await?;

        Ok(PutPolicyOutput { policy })
    }
}

/// Output type for attaching the public read bucket policy
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PutPolicyOutput {
    policy: String,
}

impl PutPolicyOutput {
    /// The JSON policy document that was applied
    pub fn policy(&self) -> &str {
        &self.policy
    }
}

#[cfg(test)]
mod test {
    use crate::client::{error_response_client, test_client};
    use crate::error::ErrorKind;
    use aws_sdk_s3::operation::put_bucket_policy::PutBucketPolicyOutput;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
    use serde_json::json;

    fn public_read_for(bucket: &str) -> serde_json::Value {
        json!({
            "Version": "2012-10-17",
            "Statement": [{
                "Effect": "Allow",
                "Principal": "*",
                "Action": ["s3:GetObject"],
                "Resource": format!("arn:aws:s3:::{bucket}/*")
            }]
        })
    }

    #[tokio::test]
    async fn test_put_public_read_policy() {
        let put_policy = mock!(aws_sdk_s3::Client::put_bucket_policy)
            .match_requests(|r| {
                let doc: serde_json::Value =
                    serde_json::from_str(r.policy().expect("policy")).expect("valid json");
                r.bucket() == Some("test-bucket") && doc == public_read_for("test-bucket")
            })
            .then_output(|| PutBucketPolicyOutput::builder().build());
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put_policy]);

        let site = tempfile::tempdir().unwrap();
        let client = test_client(s3, site.path());
        let output = client.put_policy().send().await.unwrap();

        let applied: serde_json::Value = serde_json::from_str(output.policy()).unwrap();
        assert_eq!(public_read_for("test-bucket"), applied);
        assert_eq!(1, put_policy.num_calls());
    }

    #[tokio::test]
    async fn test_malformed_policy_rejected() {
        let (s3, http_client) =
            error_response_client(400, "MalformedPolicy", "Policy has invalid resource");

        let site = tempfile::tempdir().unwrap();
        let client = test_client(s3, site.path());
        let err = client.put_policy().send().await.unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::ServiceError(_)));
        assert_eq!(
            Some("Policy has invalid resource"),
            err.as_service_error().and_then(|e| e.message())
        );
        assert_eq!(1, http_client.actual_requests().count());
    }
}
