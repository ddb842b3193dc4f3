// SPDX-License-Identifier: MPL-2.0
//! Contact relay backed by the Web3Forms submission API.

use crate::application::port::{ContactRelay, ServiceError};
use crate::domain::portfolio::ContactMessage;
use crate::infrastructure::http;
use serde::{Deserialize, Serialize};

/// Public submission endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Form relay client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Web3FormsRelay {
    http: reqwest::Client,
    endpoint: String,
    access_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct Submission<'a> {
    access_key: &'a str,
    subject: &'a str,
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct Reply {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

impl Web3FormsRelay {
    /// Creates the relay. A blank key leaves it unconfigured.
    #[must_use]
    pub fn new(http: reqwest::Client, endpoint: &str, access_key: Option<&str>) -> Self {
        let endpoint = endpoint.trim();
        Self {
            http,
            endpoint: if endpoint.is_empty() {
                DEFAULT_ENDPOINT.to_string()
            } else {
                endpoint.to_string()
            },
            access_key: access_key
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string),
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.access_key.is_some()
    }
}

/// Interprets the relay's JSON reply, which reports refusals in the body.
fn check_reply(body: &str) -> Result<(), ServiceError> {
    let reply: Reply = http::decode(body)?;
    if reply.success {
        Ok(())
    } else {
        Err(ServiceError::Rejected {
            status: None,
            message: reply
                .message
                .unwrap_or_else(|| "submission refused".to_string()),
        })
    }
}

impl ContactRelay for Web3FormsRelay {
    async fn submit(&self, message: &ContactMessage) -> Result<(), ServiceError> {
        let access_key = self
            .access_key
            .as_deref()
            .ok_or(ServiceError::NotConfigured)?;
        let subject = format!("Portfolio contact from {}", message.name);
        let request = self.http.post(&self.endpoint).json(&Submission {
            access_key,
            subject: &subject,
            name: &message.name,
            email: &message.email,
            message: &message.message,
        });

        // A 4xx refusal carries its reason in `message`, which `send` extracts.
        let body = http::send(request).await?;
        check_reply(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_reply_is_ok() {
        assert_eq!(
            check_reply(r#"{"success":true,"message":"Email sent successfully!"}"#),
            Ok(())
        );
    }

    #[test]
    fn refusal_keeps_relay_message() {
        let err = check_reply(r#"{"success":false,"message":"Invalid Access Key"}"#).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Rejected {
                status: None,
                message: "Invalid Access Key".into()
            }
        );
    }

    #[test]
    fn html_reply_is_decode_error() {
        assert!(matches!(
            check_reply("<html>rate limited</html>"),
            Err(ServiceError::Decode(_))
        ));
    }

    #[test]
    fn blank_key_is_unconfigured() {
        let relay = Web3FormsRelay::new(reqwest::Client::new(), "", Some("  "));
        assert!(!relay.is_configured());
        assert_eq!(relay.endpoint, DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn unconfigured_relay_does_not_send() {
        let relay = Web3FormsRelay::new(reqwest::Client::new(), DEFAULT_ENDPOINT, None);
        let message = ContactMessage {
            name: "A".into(),
            email: "a@b.c".into(),
            message: "hi".into(),
        };
        assert_eq!(relay.submit(&message).await, Err(ServiceError::NotConfigured));
    }
}
