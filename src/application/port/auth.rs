// SPDX-License-Identifier: MPL-2.0
//! Authentication port definition.

use super::ServiceError;
use std::fmt;
use std::future::Future;

/// Signed-in admin session.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// Bearer token sent with every write.
    pub access_token: String,
    /// Address the admin signed in with.
    pub email: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("email", &self.email)
            .finish()
    }
}

/// Port for password sign-in against the hosted auth service.
pub trait Authenticator: Send + Sync {
    /// Exchanges credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Unauthorized`] for wrong credentials, or a
    /// transport error.
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Session, ServiceError>> + Send;
}
