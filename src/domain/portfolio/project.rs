// SPDX-License-Identifier: MPL-2.0
//! Portfolio project records.

use super::ValidationError;
use std::fmt;
use std::time::SystemTime;

/// Backend identifier of a project row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(pub i64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Publication status. Hidden projects only show up in the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectStatus {
    #[default]
    Visible,
    Hidden,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Visible, ProjectStatus::Hidden];

    /// Wire/storage spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Visible => "visible",
            ProjectStatus::Hidden => "hidden",
        }
    }

    /// Parses the storage spelling. Unknown values count as hidden so that a
    /// typo in the backend never publishes a project by accident.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("visible") {
            ProjectStatus::Visible
        } else {
            ProjectStatus::Hidden
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ProjectStatus::Visible => "project-status-visible",
            ProjectStatus::Hidden => "project-status-hidden",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A published (or hidden) portfolio project.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: String,
    pub status: ProjectStatus,
    pub camera_gear: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub gallery_urls: Vec<String>,
    pub created_at: Option<SystemTime>,
}

impl Project {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.status == ProjectStatus::Visible
    }

    /// Editable fields of this project, for the admin form.
    #[must_use]
    pub fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            category: self.category.clone(),
            status: self.status,
            camera_gear: self.camera_gear.clone(),
            description: self.description.clone(),
        }
    }
}

/// Text fields of the project form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub category: String,
    pub status: ProjectStatus,
    pub camera_gear: String,
    pub description: String,
}

impl ProjectDraft {
    /// Checks the draft can be saved.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        Ok(())
    }
}

/// Values written on insert or update.
///
/// Image fields are only present when new files were uploaded; on update an
/// absent field keeps the stored value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectPatch {
    pub draft: ProjectDraft,
    pub thumbnail_url: Option<String>,
    pub gallery_urls: Option<Vec<String>>,
}

impl ProjectPatch {
    #[must_use]
    pub fn new(draft: ProjectDraft) -> Self {
        Self {
            draft,
            thumbnail_url: None,
            gallery_urls: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        Project {
            id: ProjectId(7),
            title: "Hanoi at dawn".into(),
            category: "Street".into(),
            status: ProjectStatus::Visible,
            camera_gear: "X100V".into(),
            description: "Early walks".into(),
            thumbnail_url: Some("https://cdn.example/t.jpg".into()),
            gallery_urls: vec!["https://cdn.example/1.jpg".into()],
            created_at: None,
        }
    }

    #[test]
    fn status_round_trips_through_storage_spelling() {
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::parse(status.as_str()), status);
        }
    }

    #[test]
    fn unknown_status_is_hidden() {
        assert_eq!(ProjectStatus::parse("draft"), ProjectStatus::Hidden);
        assert_eq!(ProjectStatus::parse(" Visible "), ProjectStatus::Visible);
    }

    #[test]
    fn draft_copies_editable_fields() {
        let draft = sample().draft();
        assert_eq!(draft.title, "Hanoi at dawn");
        assert_eq!(draft.status, ProjectStatus::Visible);
        assert_eq!(draft.camera_gear, "X100V");
    }

    #[test]
    fn blank_title_is_rejected() {
        let draft = ProjectDraft {
            title: "   ".into(),
            ..ProjectDraft::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::MissingTitle));
    }

    #[test]
    fn hidden_project_is_not_visible() {
        let mut project = sample();
        assert!(project.is_visible());
        project.status = ProjectStatus::Hidden;
        assert!(!project.is_visible());
    }
}
