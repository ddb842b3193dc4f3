// SPDX-License-Identifier: MPL-2.0
//! In-memory port implementations shared by the command tests.

use crate::application::port::{
    Authenticator, ContactRelay, InfoPageStore, MediaStorage, ProjectCatalog, ServiceError,
    Session,
};
use crate::domain::portfolio::{
    ContactMessage, InfoPage, Project, ProjectId, ProjectPatch, UploadFile,
};
use std::future::{ready, Future};
use std::sync::{Arc, Mutex};

const TOKEN: &str = "valid-token";
const PASSWORD: &str = "secret";

pub fn session() -> Session {
    Session {
        access_token: TOKEN.into(),
        email: "owner@example.com".into(),
    }
}

pub fn upload(name: &str) -> UploadFile {
    UploadFile {
        file_name: name.into(),
        bytes: name.as_bytes().to_vec(),
        content_type: "image/jpeg".into(),
    }
}

#[derive(Default)]
struct Tables {
    projects: Vec<Project>,
    info_pages: Vec<InfoPage>,
    uploads: Vec<String>,
    upload_budget: Option<usize>,
    next_id: i64,
}

/// Auth, catalog, info-page store and bucket in one. Clones share tables.
#[derive(Default, Clone)]
pub struct MemoryBackend {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryBackend {
    pub fn projects(&self) -> Vec<Project> {
        self.tables.lock().unwrap().projects.clone()
    }

    pub fn uploaded_names(&self) -> Vec<String> {
        self.tables.lock().unwrap().uploads.clone()
    }

    /// Lets `count` uploads through, then fails every following one.
    pub fn fail_uploads_after(&self, count: usize) {
        self.tables.lock().unwrap().upload_budget = Some(count);
    }

    fn authorize(session: &Session) -> Result<(), ServiceError> {
        if session.access_token == TOKEN {
            Ok(())
        } else {
            Err(ServiceError::Unauthorized)
        }
    }

    fn apply(project: &mut Project, patch: &ProjectPatch) {
        let draft = patch.draft.clone();
        project.title = draft.title;
        project.category = draft.category;
        project.status = draft.status;
        project.camera_gear = draft.camera_gear;
        project.description = draft.description;
        if let Some(url) = &patch.thumbnail_url {
            project.thumbnail_url = Some(url.clone());
        }
        if let Some(urls) = &patch.gallery_urls {
            project.gallery_urls = urls.clone();
        }
    }
}

impl ProjectCatalog for MemoryBackend {
    fn list_projects(&self) -> impl Future<Output = Result<Vec<Project>, ServiceError>> + Send {
        let mut projects = self.projects();
        projects.reverse();
        ready(Ok(projects))
    }

    fn create_project(
        &self,
        session: &Session,
        patch: &ProjectPatch,
    ) -> impl Future<Output = Result<Project, ServiceError>> + Send {
        let result = Self::authorize(session).map(|()| {
            let mut tables = self.tables.lock().unwrap();
            tables.next_id += 1;
            let mut project = Project {
                id: ProjectId(tables.next_id),
                title: String::new(),
                category: String::new(),
                status: patch.draft.status,
                camera_gear: String::new(),
                description: String::new(),
                thumbnail_url: None,
                gallery_urls: Vec::new(),
                created_at: None,
            };
            Self::apply(&mut project, patch);
            tables.projects.push(project.clone());
            project
        });
        ready(result)
    }

    fn update_project(
        &self,
        session: &Session,
        id: ProjectId,
        patch: &ProjectPatch,
    ) -> impl Future<Output = Result<Project, ServiceError>> + Send {
        let result = Self::authorize(session).and_then(|()| {
            let mut tables = self.tables.lock().unwrap();
            let project = tables
                .projects
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| ServiceError::Rejected {
                    status: Some(404),
                    message: "no such project".into(),
                })?;
            Self::apply(project, patch);
            Ok(project.clone())
        });
        ready(result)
    }

    fn delete_project(
        &self,
        session: &Session,
        id: ProjectId,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send {
        let result = Self::authorize(session).map(|()| {
            self.tables.lock().unwrap().projects.retain(|p| p.id != id);
        });
        ready(result)
    }
}

impl InfoPageStore for MemoryBackend {
    fn current_info_page(
        &self,
    ) -> impl Future<Output = Result<Option<InfoPage>, ServiceError>> + Send {
        let pages = self.tables.lock().unwrap().info_pages.clone();
        ready(Ok(InfoPage::current(pages)))
    }

    fn create_info_page(
        &self,
        session: &Session,
        image_url: &str,
    ) -> impl Future<Output = Result<InfoPage, ServiceError>> + Send {
        let result = Self::authorize(session).map(|()| {
            let mut tables = self.tables.lock().unwrap();
            tables.next_id += 1;
            let page = InfoPage {
                id: tables.next_id,
                image_url: image_url.to_string(),
            };
            tables.info_pages.push(page.clone());
            page
        });
        ready(result)
    }

    fn clear_info_pages(
        &self,
        session: &Session,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send {
        let result = Self::authorize(session).map(|()| {
            self.tables.lock().unwrap().info_pages.clear();
        });
        ready(result)
    }
}

impl Authenticator for MemoryBackend {
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Session, ServiceError>> + Send {
        let result = if password == PASSWORD {
            Ok(Session {
                email: email.into(),
                ..session()
            })
        } else {
            Err(ServiceError::Unauthorized)
        };
        ready(result)
    }
}

impl MediaStorage for MemoryBackend {
    fn upload(
        &self,
        session: &Session,
        file: &UploadFile,
    ) -> impl Future<Output = Result<String, ServiceError>> + Send {
        let result = Self::authorize(session).and_then(|()| {
            let mut tables = self.tables.lock().unwrap();
            if let Some(budget) = tables.upload_budget.as_mut() {
                if *budget == 0 {
                    return Err(ServiceError::Network("connection reset".into()));
                }
                *budget -= 1;
            }
            tables.uploads.push(file.file_name.clone());
            Ok(format!("mem://portfolio/{}", file.file_name))
        });
        ready(result)
    }
}

/// Contact relay that records what it was given.
#[derive(Default, Clone)]
pub struct MemoryRelay {
    sent: Arc<Mutex<Vec<ContactMessage>>>,
    rejection: Option<String>,
}

impl MemoryRelay {
    pub fn rejecting(message: &str) -> Self {
        Self {
            sent: Arc::default(),
            rejection: Some(message.into()),
        }
    }

    pub fn sent(&self) -> Vec<ContactMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl ContactRelay for MemoryRelay {
    fn submit(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send {
        let result = match &self.rejection {
            Some(reason) => Err(ServiceError::Rejected {
                status: None,
                message: reason.clone(),
            }),
            None => {
                self.sent.lock().unwrap().push(message.clone());
                Ok(())
            }
        };
        ready(result)
    }
}
