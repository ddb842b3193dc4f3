// SPDX-License-Identifier: MPL-2.0
//! Shared HTTP plumbing for the service adapters.

use crate::application::port::ServiceError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Per-request timeout. Uploads of large photos stay well within it on a
/// normal connection.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Builds the client shared (by clone) between all adapters.
///
/// # Errors
///
/// Returns [`ServiceError::Network`] if the TLS backend cannot initialise.
pub fn build_client() -> Result<reqwest::Client, ServiceError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("IcedFolio/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| ServiceError::Network(e.to_string()))
}

/// Maps a transport failure.
pub fn network_error(err: &reqwest::Error) -> ServiceError {
    if err.is_decode() {
        ServiceError::Decode(err.to_string())
    } else {
        ServiceError::Network(err.to_string())
    }
}

/// Maps a non-success status and its body to a [`ServiceError`].
///
/// The message is taken from the usual JSON error fields when present,
/// falling back to the raw body.
pub fn status_error(status: StatusCode, body: &str) -> ServiceError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return ServiceError::Unauthorized;
    }
    ServiceError::Rejected {
        status: Some(status.as_u16()),
        message: error_message(body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        }),
    }
}

fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) else {
        return Some(trimmed.to_string());
    };
    ["message", "msg", "error_description", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::to_string)
}

/// Sends a request and checks its status, returning the body text.
pub async fn send(request: reqwest::RequestBuilder) -> Result<String, ServiceError> {
    let response = request.send().await.map_err(|e| network_error(&e))?;
    let status = response.status();
    let body = response.text().await.map_err(|e| network_error(&e))?;
    if !status.is_success() {
        tracing::warn!(%status, "service request failed");
        return Err(status_error(status, &body));
    }
    Ok(body)
}

/// Sends a request and decodes its JSON body.
pub async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ServiceError> {
    let body = send(request).await?;
    decode(&body)
}

/// Downloads a public resource (an image URL) as raw bytes.
pub async fn fetch_bytes(http: &reqwest::Client, url: &str) -> Result<Vec<u8>, ServiceError> {
    let response = http.get(url).send().await.map_err(|e| network_error(&e))?;
    let status = response.status();
    if !status.is_success() {
        tracing::debug!(%status, url, "image download failed");
        return Err(status_error(status, ""));
    }
    let bytes = response.bytes().await.map_err(|e| network_error(&e))?;
    Ok(bytes.to_vec())
}

/// Decodes a JSON body.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ServiceError> {
    serde_json::from_str(body).map_err(|e| ServiceError::Decode(e.to_string()))
}
