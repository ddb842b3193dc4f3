// SPDX-License-Identifier: MPL-2.0
//! Object storage port definition.

use super::{ServiceError, Session};
use crate::domain::portfolio::UploadFile;
use std::future::Future;

/// Port for the public image bucket.
pub trait MediaStorage: Send + Sync {
    /// Stores `file` and returns its public URL.
    fn upload(
        &self,
        session: &Session,
        file: &UploadFile,
    ) -> impl Future<Output = Result<String, ServiceError>> + Send;
}
