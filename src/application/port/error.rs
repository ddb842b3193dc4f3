// SPDX-License-Identifier: MPL-2.0
//! Errors reported by the managed services.

use crate::domain::portfolio::ValidationError;
use std::fmt;

/// Outcome of a failed service call.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// No endpoint or key configured for this service.
    NotConfigured,

    /// The request needs a valid session (missing, expired or refused).
    Unauthorized,

    /// The request never got a response (DNS, TLS, timeout, ...).
    Network(String),

    /// The service answered with an error.
    Rejected {
        /// HTTP status, when the error came from the transport layer.
        status: Option<u16>,
        message: String,
    },

    /// The response could not be understood.
    Decode(String),

    /// The request was refused locally before being sent.
    Invalid(ValidationError),
}

impl ServiceError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ServiceError::NotConfigured => "error-service-not-configured",
            ServiceError::Unauthorized => "error-service-unauthorized",
            ServiceError::Network(_) => "error-service-network",
            ServiceError::Rejected { .. } => "error-service-rejected",
            ServiceError::Decode(_) => "error-service-decode",
            ServiceError::Invalid(err) => err.i18n_key(),
        }
    }

    /// Detail shown next to the localized message, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            ServiceError::Network(msg)
            | ServiceError::Decode(msg)
            | ServiceError::Rejected { message: msg, .. } => Some(msg.as_str()),
            ServiceError::NotConfigured
            | ServiceError::Unauthorized
            | ServiceError::Invalid(_) => None,
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::NotConfigured => write!(f, "Service is not configured"),
            ServiceError::Unauthorized => write!(f, "Not authorized"),
            ServiceError::Network(msg) => write!(f, "Network error: {msg}"),
            ServiceError::Rejected {
                status: Some(status),
                message,
            } => write!(f, "Rejected ({status}): {message}"),
            ServiceError::Rejected {
                status: None,
                message,
            } => write!(f, "Rejected: {message}"),
            ServiceError::Decode(msg) => write!(f, "Unexpected response: {msg}"),
            ServiceError::Invalid(err) => write!(f, "Invalid input: {err}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Invalid(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status() {
        let err = ServiceError::Rejected {
            status: Some(409),
            message: "duplicate key".into(),
        };
        assert_eq!(format!("{err}"), "Rejected (409): duplicate key");
    }

    #[test]
    fn validation_error_keeps_its_key() {
        let err: ServiceError = ValidationError::MissingTitle.into();
        assert_eq!(err.i18n_key(), "validation-missing-title");
        assert!(err.detail().is_none());
    }

    #[test]
    fn network_error_has_detail() {
        let err = ServiceError::Network("timed out".into());
        assert_eq!(err.detail(), Some("timed out"));
        assert_eq!(err.i18n_key(), "error-service-network");
    }
}
