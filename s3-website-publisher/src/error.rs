/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::path::{Path, PathBuf};

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of publishing errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The settings file, a required setting in it, or the AWS region could not be found
    ConfigMissing,

    /// A file listed in the website manifest does not exist
    FileNotFound(FileNotFound),

    /// Amazon S3 rejected a request
    ServiceError(ServiceError),

    /// Operation input validation issues
    InputInvalid,

    /// I/O errors
    IOError,

    /// The request could not be sent or the response could not be read
    TransportError,
}

/// Stores information about a manifest file that could not be found
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileNotFound {
    path: PathBuf,
}

impl FileNotFound {
    /// Details for a manifest file missing at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The local path that was looked up.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Stores the error details returned by Amazon S3
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceError {
    code: Option<String>,
    message: Option<String>,
}

impl ServiceError {
    /// Details for an error response from the service
    pub fn new(code: Option<String>, message: Option<String>) -> Self {
        Self { code, message }
    }

    /// The error code returned by the service, e.g. `NoSuchBucket`.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The human readable error message returned by the service.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Error {
    /// Creates a new publisher [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the service error details if this error was returned by Amazon S3.
    pub fn as_service_error(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::ServiceError(details) => Some(details),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::ConfigMissing => write!(f, "configuration missing"),
            ErrorKind::FileNotFound(not_found) => {
                write!(f, "file not found: {}", not_found.path.display())
            }
            ErrorKind::ServiceError(details) => match (details.code(), details.message()) {
                (Some(code), Some(message)) => write!(f, "service error {code}: {message}"),
                (None, Some(message)) => write!(f, "service error: {message}"),
                (Some(code), None) => write!(f, "service error {code}"),
                (None, None) => write!(f, "service error"),
            },
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::IOError => write!(f, "I/O error"),
            ErrorKind::TransportError => write!(f, "transport error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<aws_smithy_types::byte_stream::error::Error> for Error {
    fn from(value: aws_smithy_types::byte_stream::error::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn config_missing<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::ConfigMissing, err)
}

/// Classify a failure to access a local manifest file.
pub(crate) fn local_file(path: &Path, err: std::io::Error) -> Error {
    match err.kind() {
        std::io::ErrorKind::NotFound => Error::new(
            ErrorKind::FileNotFound(FileNotFound::new(path)),
            err,
        ),
        _ => Error::new(ErrorKind::IOError, err),
    }
}

impl<E, R> From<SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: SdkError<E, R>) -> Self {
        let kind = match &value {
            SdkError::ServiceError(_) => ErrorKind::ServiceError(ServiceError::new(
                value.code().map(str::to_owned),
                value.message().map(str::to_owned),
            )),
            SdkError::ConstructionFailure(_) => ErrorKind::InputInvalid,
            _ => ErrorKind::TransportError,
        };

        Error::new(kind, value)
    }
}
