/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;
use s3_website_publisher::config::settings::DEFAULT_SETTINGS_PATH;
use s3_website_publisher::error::{Error, ErrorKind};
use s3_website_publisher::types::PublishPhase;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "publish-website")]
#[command(about = "Uploads the website files to an S3 bucket and serves them as a public static website.")]
pub struct Args {
    /// INI settings file containing `bucket_name` in the [S3] section
    #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
    config: PathBuf,

    /// Directory containing index.html, styles.css and the images
    #[arg(long, default_value = ".")]
    site_dir: PathBuf,
}

fn phase_message(phase: PublishPhase) -> &'static str {
    match phase {
        PublishPhase::UploadingFiles => "Uploading files for the website...",
        PublishPhase::EnablingHosting => "Enabling web hosting on the bucket...",
        PublishPhase::ApplyingPolicy => {
            "Adding a bucket policy to allow traffic from the internet..."
        }
        _ => "Publishing...",
    }
}

fn exit_status(err: &Error) -> u8 {
    match err.kind() {
        ErrorKind::ServiceError(_) => 1,
        ErrorKind::ConfigMissing => 2,
        ErrorKind::FileNotFound(_) => 3,
        _ => 4,
    }
}

/// Print `err` for the user and return the process exit status.
///
/// Service errors print only the message S3 returned, on `out`. Everything else prints the
/// full cause chain on `err_out`.
fn report(err: &Error, out: &mut impl Write, err_out: &mut impl Write) -> u8 {
    let written = match err.as_service_error() {
        Some(details) => writeln!(
            out,
            "{}",
            details.message().unwrap_or("unknown service error")
        ),
        None => writeln!(err_out, "error: {}", DisplayErrorContext(err)),
    };
    if let Err(write_err) = written {
        tracing::warn!("failed to report error: {write_err}");
    }
    exit_status(err)
}

async fn run(args: Args) -> Result<(), Error> {
    println!("Starting create website function...\n");

    println!("Reading configuration file for bucket name...");
    let config = s3_website_publisher::from_env()
        .settings_file(args.config)
        .site_dir(args.site_dir)
        .load()
        .await?;
    tracing::debug!(
        "publishing to bucket {} in {}",
        config.bucket(),
        config.region()
    );

    let client = s3_website_publisher::Client::new(config);
    let output = client
        .publish()
        .on_phase(|phase: PublishPhase| println!("{}", phase_message(phase)))
        .send()
        .await?;

    println!("\nYou can access the website at:\n");
    println!("{}", output.website_url());

    println!("\nEnd create website function...");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("publish failed: {err:?}");
            let status = report(&err, &mut std::io::stdout(), &mut std::io::stderr());
            ExitCode::from(status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use s3_website_publisher::error::{FileNotFound, ServiceError};

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["publish-website"]);
        assert_eq!(PathBuf::from("./config.ini"), args.config);
        assert_eq!(PathBuf::from("."), args.site_dir);
    }

    fn service_error(message: Option<&str>) -> Error {
        let details =
            ServiceError::new(Some("NoSuchBucket".to_owned()), message.map(str::to_owned));
        Error::new(ErrorKind::ServiceError(details), "service failure")
    }

    fn report_to_strings(err: &Error) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err_out = Vec::new();
        let status = report(err, &mut out, &mut err_out);
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err_out).unwrap(),
        )
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(1, exit_status(&service_error(Some("Access Denied"))));
        assert_eq!(2, exit_status(&Error::new(ErrorKind::ConfigMissing, "missing")));
        let not_found = FileNotFound::new(PathBuf::from("site/image2.jpeg"));
        assert_eq!(
            3,
            exit_status(&Error::new(ErrorKind::FileNotFound(not_found), "missing file"))
        );
        assert_eq!(4, exit_status(&Error::new(ErrorKind::InputInvalid, "bad")));
        assert_eq!(4, exit_status(&Error::new(ErrorKind::TransportError, "timeout")));
    }

    #[test]
    fn test_report_service_message_on_stdout() {
        let (status, out, err_out) =
            report_to_strings(&service_error(Some("The specified bucket does not exist")));

        assert_eq!(1, status);
        assert_eq!("The specified bucket does not exist\n", out);
        assert!(err_out.is_empty());
    }

    #[test]
    fn test_report_service_error_without_message() {
        let (status, out, err_out) = report_to_strings(&service_error(None));

        assert_eq!(1, status);
        assert_eq!("unknown service error\n", out);
        assert!(err_out.is_empty());
    }

    #[test]
    fn test_report_config_missing_on_stderr() {
        let err = Error::new(ErrorKind::ConfigMissing, "bucket_name not set in [S3]");
        let (status, out, err_out) = report_to_strings(&err);

        assert_eq!(2, status);
        assert!(out.is_empty());
        assert!(err_out.starts_with("error: "));
        assert!(err_out.contains("bucket_name not set in [S3]"));
    }

    #[test]
    fn test_phase_messages() {
        assert_eq!(
            "Uploading files for the website...",
            phase_message(PublishPhase::UploadingFiles)
        );
        assert_eq!(
            "Adding a bucket policy to allow traffic from the internet...",
            phase_message(PublishPhase::ApplyingPolicy)
        );
    }
}
