// SPDX-License-Identifier: MPL-2.0
use crate::application::port::ServiceError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Upload(UploadError),
    Service(ServiceError),
}

/// Reasons a picked file cannot be uploaded.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The file could not be read (removed, permission denied, ...)
    Unreadable(String),

    /// The content is not an image format the site can display
    NotAnImage,

    /// The file exceeds the upload size limit (size in bytes)
    TooLarge(u64),
}

impl UploadError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UploadError::Unreadable(_) => "error-upload-unreadable",
            UploadError::NotAnImage => "error-upload-not-an-image",
            UploadError::TooLarge(_) => "error-upload-too-large",
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Unreadable(msg) => write!(f, "Cannot read file: {}", msg),
            UploadError::NotAnImage => write!(f, "File is not a supported image"),
            UploadError::TooLarge(size) => write!(f, "File is too large ({} bytes)", size),
        }
    }
}

impl Error {
    /// Returns the i18n message key for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Upload(err) => err.i18n_key(),
            Error::Service(err) => err.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Upload(e) => write!(f, "Upload Error: {}", e),
            Error::Service(e) => write!(f, "Service Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<UploadError> for Error {
    fn from(err: UploadError) -> Self {
        Error::Upload(err)
    }
}

impl From<ServiceError> for Error {
    fn from(err: ServiceError) -> Self {
        Error::Service(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
