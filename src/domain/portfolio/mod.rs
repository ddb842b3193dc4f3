// SPDX-License-Identifier: MPL-2.0
//! Portfolio content types: projects, the info page, contact messages and
//! files picked for upload.

pub mod contact;
pub mod info_page;
pub mod project;
pub mod upload;

pub use contact::ContactMessage;
pub use info_page::InfoPage;
pub use project::{Project, ProjectDraft, ProjectId, ProjectPatch, ProjectStatus};
pub use upload::UploadFile;

use std::fmt;

/// A form value rejected before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingTitle,
    MissingName,
    MissingEmail,
    InvalidEmail,
    MissingMessage,
    MissingImage,
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::MissingTitle => "validation-missing-title",
            ValidationError::MissingName => "validation-missing-name",
            ValidationError::MissingEmail => "validation-missing-email",
            ValidationError::InvalidEmail => "validation-invalid-email",
            ValidationError::MissingMessage => "validation-missing-message",
            ValidationError::MissingImage => "validation-missing-image",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ValidationError::MissingTitle => "title is required",
            ValidationError::MissingName => "name is required",
            ValidationError::MissingEmail => "email is required",
            ValidationError::InvalidEmail => "email address is not valid",
            ValidationError::MissingMessage => "message is required",
            ValidationError::MissingImage => "an image must be selected",
        };
        write!(f, "{text}")
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_keys_are_prefixed() {
        for err in [
            ValidationError::MissingTitle,
            ValidationError::MissingName,
            ValidationError::MissingEmail,
            ValidationError::InvalidEmail,
            ValidationError::MissingMessage,
            ValidationError::MissingImage,
        ] {
            assert!(err.i18n_key().starts_with("validation-"));
        }
    }
}
