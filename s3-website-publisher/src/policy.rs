/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use serde::Serialize;

/// Current version of the IAM policy language
const POLICY_VERSION: &str = "2012-10-17";

/// An S3 bucket policy document.
///
/// See the [policy language reference](https://docs.aws.amazon.com/AmazonS3/latest/userguide/access-policy-language-overview.html).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BucketPolicy {
    version: &'static str,
    statement: Vec<Statement>,
}

/// A single statement of a [`BucketPolicy`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    effect: Effect,
    principal: &'static str,
    action: Vec<&'static str>,
    resource: String,
}

/// Whether a statement grants or denies access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effect {
    /// Grant access
    Allow,
    /// Deny access
    Deny,
}

impl BucketPolicy {
    /// Policy allowing anyone to read every object in `bucket`.
    pub fn public_read(bucket: &str) -> Self {
        Self {
            version: POLICY_VERSION,
            statement: vec![Statement {
                effect: Effect::Allow,
                principal: "*",
                action: vec!["s3:GetObject"],
                resource: format!("{}/*", bucket_arn(bucket)),
            }],
        }
    }

    /// Statements making up the policy
    pub fn statements(&self) -> &[Statement] {
        &self.statement
    }

    /// Serialize the policy to the JSON document expected by `PutBucketPolicy`
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Statement {
    /// The effect of this statement
    pub fn effect(&self) -> Effect {
        self.effect
    }

    /// Resource ARN pattern the statement applies to
    pub fn resource(&self) -> &str {
        &self.resource
    }
}

/// The ARN of `bucket`
pub fn bucket_arn(bucket: &str) -> String {
    format!("arn:aws:s3:::{bucket}")
}
