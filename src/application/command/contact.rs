// SPDX-License-Identifier: MPL-2.0
//! Contact form use case.

use crate::application::port::{ContactRelay, ServiceError};
use crate::domain::portfolio::ContactMessage;

/// Validates and submits a contact message.
///
/// # Errors
///
/// Returns [`ServiceError::Invalid`] without contacting the relay when a
/// field is missing, otherwise the relay's error.
pub async fn send_contact_message<R>(
    relay: &R,
    message: &ContactMessage,
) -> Result<(), ServiceError>
where
    R: ContactRelay,
{
    message.validate()?;
    let message = message.trimmed();
    relay.submit(&message).await?;
    tracing::info!("contact message relayed");
    Ok(())
}
