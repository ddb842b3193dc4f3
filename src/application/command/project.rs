// SPDX-License-Identifier: MPL-2.0
//! Project save/delete use cases.

use crate::application::port::{MediaStorage, ProjectCatalog, ServiceError, Session};
use crate::domain::portfolio::{Project, ProjectDraft, ProjectId, ProjectPatch, UploadFile};

/// Everything the project form submits.
#[derive(Debug, Clone, Default)]
pub struct SaveProject {
    /// `Some` when editing an existing project.
    pub id: Option<ProjectId>,
    pub draft: ProjectDraft,
    /// New cover image, replacing the stored one.
    pub thumbnail: Option<UploadFile>,
    /// New gallery images, replacing the stored list when non-empty.
    pub gallery: Vec<UploadFile>,
}

/// Uploads the picked files, then inserts or updates the project.
///
/// Gallery files are uploaded one after the other so the stored URL list
/// keeps the order they were picked in.
///
/// # Errors
///
/// Returns [`ServiceError::Invalid`] for a draft without title, otherwise the
/// first failing port call.
pub async fn save_project<C, S>(
    catalog: &C,
    storage: &S,
    session: &Session,
    request: SaveProject,
) -> Result<Project, ServiceError>
where
    C: ProjectCatalog,
    S: MediaStorage,
{
    request.draft.validate()?;

    let mut patch = ProjectPatch::new(request.draft);

    if let Some(thumbnail) = &request.thumbnail {
        patch.thumbnail_url = Some(storage.upload(session, thumbnail).await?);
    }

    if !request.gallery.is_empty() {
        let mut urls = Vec::with_capacity(request.gallery.len());
        for file in &request.gallery {
            urls.push(storage.upload(session, file).await?);
        }
        patch.gallery_urls = Some(urls);
    }

    let project = match request.id {
        Some(id) => catalog.update_project(session, id, &patch).await?,
        None => catalog.create_project(session, &patch).await?,
    };

    tracing::info!(
        id = %project.id,
        title = %project.title,
        updated = request.id.is_some(),
        "project saved"
    );
    Ok(project)
}

/// Deletes one project.
///
/// # Errors
///
/// Returns the catalog error unchanged.
pub async fn delete_project<C>(
    catalog: &C,
    session: &Session,
    id: ProjectId,
) -> Result<(), ServiceError>
where
    C: ProjectCatalog,
{
    catalog.delete_project(session, id).await?;
    tracing::info!(%id, "project deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::command::fakes::{session, upload, MemoryBackend};
    use crate::domain::portfolio::{ProjectStatus, ValidationError};

    fn draft(title: &str) -> ProjectDraft {
        ProjectDraft {
            title: title.into(),
            category: "Portrait".into(),
            status: ProjectStatus::Visible,
            camera_gear: "Nikon Zf".into(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn create_uploads_thumbnail_and_gallery_in_order() {
        let backend = MemoryBackend::default();
        let request = SaveProject {
            id: None,
            draft: draft("Studio"),
            thumbnail: Some(upload("cover.jpg")),
            gallery: vec![upload("1.jpg"), upload("2.jpg"), upload("3.jpg")],
        };

        let project = save_project(&backend, &backend, &session(), request)
            .await
            .unwrap();

        assert_eq!(
            backend.uploaded_names(),
            vec!["cover.jpg", "1.jpg", "2.jpg", "3.jpg"]
        );
        assert_eq!(
            project.thumbnail_url.as_deref(),
            Some("mem://portfolio/cover.jpg")
        );
        assert_eq!(
            project.gallery_urls,
            vec![
                "mem://portfolio/1.jpg",
                "mem://portfolio/2.jpg",
                "mem://portfolio/3.jpg"
            ]
        );
    }

    #[tokio::test]
    async fn update_without_files_keeps_stored_images() {
        let backend = MemoryBackend::default();
        let created = save_project(
            &backend,
            &backend,
            &session(),
            SaveProject {
                draft: draft("Before"),
                thumbnail: Some(upload("cover.jpg")),
                gallery: vec![upload("a.jpg")],
                ..SaveProject::default()
            },
        )
        .await
        .unwrap();

        let updated = save_project(
            &backend,
            &backend,
            &session(),
            SaveProject {
                id: Some(created.id),
                draft: draft("After"),
                ..SaveProject::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "After");
        assert_eq!(updated.thumbnail_url, created.thumbnail_url);
        assert_eq!(updated.gallery_urls, created.gallery_urls);
        assert_eq!(backend.uploaded_names().len(), 2);
    }

    #[tokio::test]
    async fn invalid_draft_uploads_nothing() {
        let backend = MemoryBackend::default();
        let err = save_project(
            &backend,
            &backend,
            &session(),
            SaveProject {
                draft: draft(""),
                thumbnail: Some(upload("cover.jpg")),
                ..SaveProject::default()
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err, ServiceError::Invalid(ValidationError::MissingTitle));
        assert!(backend.uploaded_names().is_empty());
        assert!(backend.projects().is_empty());
    }

    #[tokio::test]
    async fn failed_upload_stops_before_insert() {
        let backend = MemoryBackend::default();
        backend.fail_uploads_after(1);

        let err = save_project(
            &backend,
            &backend,
            &session(),
            SaveProject {
                draft: draft("Half"),
                gallery: vec![upload("1.jpg"), upload("2.jpg")],
                ..SaveProject::default()
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ServiceError::Network(_)));
        assert!(backend.projects().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_project() {
        let backend = MemoryBackend::default();
        let project = save_project(
            &backend,
            &backend,
            &session(),
            SaveProject {
                draft: draft("Gone soon"),
                ..SaveProject::default()
            },
        )
        .await
        .unwrap();

        delete_project(&backend, &session(), project.id)
            .await
            .unwrap();
        assert!(backend.projects().is_empty());
    }

    #[tokio::test]
    async fn writes_need_a_valid_session() {
        let backend = MemoryBackend::default();
        let stranger = Session {
            access_token: "forged".into(),
            email: "x@example.com".into(),
        };

        let err = save_project(
            &backend,
            &backend,
            &stranger,
            SaveProject {
                draft: draft("Nope"),
                ..SaveProject::default()
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err, ServiceError::Unauthorized);
    }
}
