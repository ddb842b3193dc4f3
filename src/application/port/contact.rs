// SPDX-License-Identifier: MPL-2.0
//! Contact relay port definition.

use super::ServiceError;
use crate::domain::portfolio::ContactMessage;
use std::future::Future;

/// Port for the third-party service that forwards contact messages by email.
pub trait ContactRelay: Send + Sync {
    /// Submits one message. A single attempt, no retry.
    fn submit(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;
}
