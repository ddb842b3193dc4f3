// SPDX-License-Identifier: MPL-2.0
//! Contact form message.

use super::ValidationError;

/// Message sent from the contact form to the form relay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Checks every field is filled in and the address looks like one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !is_plausible_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        Ok(())
    }

    /// Copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// `local@domain` with both parts non-empty, one `@`, no whitespace.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
