// SPDX-License-Identifier: MPL-2.0
//! JSON rows exchanged with the REST and auth endpoints.

use crate::application::port::Session;
use crate::domain::portfolio::{InfoPage, Project, ProjectId, ProjectPatch, ProjectStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

#[derive(Debug, Deserialize)]
pub struct ProjectRow {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub camera_gear: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub gallery_urls: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: ProjectId(row.id),
            title: row.title.unwrap_or_default(),
            category: row.category.unwrap_or_default(),
            // Rows created before the status column existed were public.
            status: row
                .status
                .as_deref()
                .map_or(ProjectStatus::Visible, ProjectStatus::parse),
            camera_gear: row.camera_gear.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            thumbnail_url: row.thumbnail_url.filter(|url| !url.trim().is_empty()),
            gallery_urls: row.gallery_urls.unwrap_or_default(),
            created_at: row.created_at.map(SystemTime::from),
        }
    }
}

/// Insert/update body. Absent image fields are left out of the JSON so an
/// update keeps the stored values.
#[derive(Debug, Serialize)]
pub struct ProjectBody<'a> {
    pub title: &'a str,
    pub category: &'a str,
    pub status: &'static str,
    pub camera_gear: &'a str,
    pub description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_urls: Option<&'a [String]>,
}

impl<'a> From<&'a ProjectPatch> for ProjectBody<'a> {
    fn from(patch: &'a ProjectPatch) -> Self {
        Self {
            title: patch.draft.title.trim(),
            category: patch.draft.category.trim(),
            status: patch.draft.status.as_str(),
            camera_gear: patch.draft.camera_gear.trim(),
            description: &patch.draft.description,
            thumbnail_url: patch.thumbnail_url.as_deref(),
            gallery_urls: patch.gallery_urls.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InfoPageRow {
    pub id: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl InfoPageRow {
    /// Rows without an image are treated as absent.
    pub fn into_page(self) -> Option<InfoPage> {
        let image_url = self.image_url.filter(|url| !url.trim().is_empty())?;
        Some(InfoPage {
            id: self.id,
            image_url,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct InfoPageBody<'a> {
    pub image_url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub user: Option<UserRow>,
}

#[derive(Debug, Deserialize)]
pub struct UserRow {
    #[serde(default)]
    pub email: Option<String>,
}

impl TokenResponse {
    /// Builds the session, keeping the typed address when the user record
    /// carries none.
    pub fn into_session(self, typed_email: &str) -> Session {
        let email = self
            .user
            .and_then(|user| user.email)
            .unwrap_or_else(|| typed_email.to_string());
        Session {
            access_token: self.access_token,
            email,
        }
    }
}
