// SPDX-License-Identifier: MPL-2.0
//! Info page use cases.

use crate::application::port::{InfoPageStore, MediaStorage, ServiceError, Session};
use crate::domain::portfolio::{InfoPage, UploadFile, ValidationError};

/// Uploads `file` and makes it the info page image.
///
/// # Errors
///
/// Returns [`ValidationError::MissingImage`] when no file was picked,
/// otherwise the first failing port call.
pub async fn publish_info_image<P, S>(
    pages: &P,
    storage: &S,
    session: &Session,
    file: Option<UploadFile>,
) -> Result<InfoPage, ServiceError>
where
    P: InfoPageStore,
    S: MediaStorage,
{
    let file = file.ok_or(ValidationError::MissingImage)?;
    let url = storage.upload(session, &file).await?;
    let page = pages.create_info_page(session, &url).await?;
    tracing::info!(id = page.id, "info page published");
    Ok(page)
}

/// Removes every info page record, leaving the page empty.
///
/// # Errors
///
/// Returns the store error unchanged.
pub async fn clear_info_page<P>(pages: &P, session: &Session) -> Result<(), ServiceError>
where
    P: InfoPageStore,
{
    pages.clear_info_pages(session).await?;
    tracing::info!("info page cleared");
    Ok(())
}
