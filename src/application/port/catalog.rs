// SPDX-License-Identifier: MPL-2.0
//! Record ports: projects and the info page.

use super::{ServiceError, Session};
use crate::domain::portfolio::{InfoPage, Project, ProjectId, ProjectPatch};
use std::future::Future;

/// Port for the `projects` table.
pub trait ProjectCatalog: Send + Sync {
    /// All projects, newest first. Readable without a session.
    fn list_projects(&self) -> impl Future<Output = Result<Vec<Project>, ServiceError>> + Send;

    /// Inserts a project and returns the stored row.
    fn create_project(
        &self,
        session: &Session,
        patch: &ProjectPatch,
    ) -> impl Future<Output = Result<Project, ServiceError>> + Send;

    /// Updates a project. Image fields absent from `patch` are left as stored.
    fn update_project(
        &self,
        session: &Session,
        id: ProjectId,
        patch: &ProjectPatch,
    ) -> impl Future<Output = Result<Project, ServiceError>> + Send;

    fn delete_project(
        &self,
        session: &Session,
        id: ProjectId,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;
}

/// Port for the `info_page` table.
pub trait InfoPageStore: Send + Sync {
    /// The record on display, if any. Readable without a session.
    fn current_info_page(
        &self,
    ) -> impl Future<Output = Result<Option<InfoPage>, ServiceError>> + Send;

    /// Appends a record; it becomes the one on display.
    fn create_info_page(
        &self,
        session: &Session,
        image_url: &str,
    ) -> impl Future<Output = Result<InfoPage, ServiceError>> + Send;

    /// Deletes every record.
    fn clear_info_pages(
        &self,
        session: &Session,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;
}
