// SPDX-License-Identifier: MPL-2.0
//! Content management panel.
//!
//! Signed out, the panel shows the sign-in form. Signed in, it has two tabs:
//! the project list with its editor, and the info page image. Every request
//! runs as a task; while one is in flight the panel is busy and its buttons
//! are disabled. Outcomes are reported to the application as [`Event`]s,
//! which turns them into toasts and refreshes the public pages.

pub mod form;
pub mod login;
mod view;

pub use view::ViewContext;

use crate::application::command;
use crate::application::port::{
    Authenticator, InfoPageStore, MediaStorage, ProjectCatalog, ServiceError, Session,
};
use crate::domain::portfolio::{InfoPage, Project, ProjectId, UploadFile, ValidationError};
use crate::error::UploadError;
use crate::infrastructure::upload;
use iced::Task;

/// Everything the admin panel talks to.
pub trait Backend:
    Authenticator + ProjectCatalog + InfoPageStore + MediaStorage + Clone + 'static
{
}

impl<T> Backend for T where
    T: Authenticator + ProjectCatalog + InfoPageStore + MediaStorage + Clone + 'static
{
}

/// Admin tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Projects,
    InfoPage,
}

#[derive(Debug, Clone)]
pub enum Message {
    Login(login::Message),
    SignedIn(Result<Session, ServiceError>),
    SignOut,
    SelectTab(Tab),
    ProjectsLoaded(Result<Vec<Project>, ServiceError>),
    NewProject,
    EditProject(ProjectId),
    Form(form::Message),
    /// `None` when the file dialog was cancelled.
    ThumbnailRead(Option<Result<UploadFile, UploadError>>),
    GalleryRead(Option<Result<Vec<UploadFile>, UploadError>>),
    ProjectSaved(Result<Project, ServiceError>),
    DeleteProject(ProjectId),
    DeleteConfirmed(ProjectId),
    ProjectDeleted(Result<(), ServiceError>),
    InfoLoaded(Result<Option<InfoPage>, ServiceError>),
    PickInfoImage,
    InfoImageRead(Option<Result<UploadFile, UploadError>>),
    PublishInfo,
    InfoPublished(Result<InfoPage, ServiceError>),
    ClearInfo,
    ClearConfirmed,
    InfoCleared(Result<(), ServiceError>),
    /// A confirmation dialog was answered with "no".
    DialogDismissed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    SignedIn,
    SignedOut,
    ProjectSaved,
    ProjectDeleted,
    InfoPublished(InfoPage),
    InfoCleared,
    Invalid(ValidationError),
    UploadRejected(UploadError),
    Failed(ServiceError),
    RequestImages(Vec<String>),
}

/// Admin panel state.
#[derive(Debug, Default)]
pub struct State {
    session: Option<Session>,
    login: login::State,
    tab: Tab,
    projects: Vec<Project>,
    form: Option<form::State>,
    info_page: Option<InfoPage>,
    info_file: Option<UploadFile>,
    busy: bool,
}

impl State {
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn form(&self) -> Option<&form::State> {
        self.form.as_ref()
    }

    pub fn update<B: Backend>(&mut self, message: Message, backend: &B) -> (Event, Task<Message>) {
        match message {
            Message::Login(login::Message::Submit) => self.sign_in(backend),
            Message::Login(message) => {
                self.login.update(message);
                (Event::None, Task::none())
            }
            Message::SignedIn(result) => {
                self.busy = false;
                self.login.clear_password();
                match result {
                    Ok(session) => {
                        tracing::info!(email = %session.email, "admin signed in");
                        self.session = Some(session);
                        (Event::SignedIn, self.refresh(backend))
                    }
                    Err(err) => (Event::Failed(err), Task::none()),
                }
            }
            Message::SignOut => {
                self.sign_out();
                (Event::SignedOut, Task::none())
            }
            Message::SelectTab(tab) => {
                self.tab = tab;
                let urls = match tab {
                    Tab::Projects => self.project_thumbnails(),
                    Tab::InfoPage => self.info_page.iter().map(|p| p.image_url.clone()).collect(),
                };
                (Event::RequestImages(urls), Task::none())
            }
            Message::ProjectsLoaded(result) => match result {
                Ok(projects) => {
                    self.projects = projects;
                    (Event::RequestImages(self.project_thumbnails()), Task::none())
                }
                Err(err) => self.fail(err),
            },
            Message::NewProject => {
                self.form = Some(form::State::new());
                (Event::None, Task::none())
            }
            Message::EditProject(id) => {
                let Some(project) = self.projects.iter().find(|p| p.id == id) else {
                    return (Event::None, Task::none());
                };
                let form = form::State::edit(project);
                let urls = form.current_images();
                self.form = Some(form);
                (Event::RequestImages(urls), Task::none())
            }
            Message::Form(message) => self.handle_form(message, backend),
            Message::ThumbnailRead(result) => {
                match (result, self.form.as_mut()) {
                    (Some(Ok(file)), Some(form)) => form.set_thumbnail(file),
                    (Some(Err(err)), _) => return (Event::UploadRejected(err), Task::none()),
                    _ => {}
                }
                (Event::None, Task::none())
            }
            Message::GalleryRead(result) => {
                match (result, self.form.as_mut()) {
                    (Some(Ok(files)), Some(form)) => form.set_gallery(files),
                    (Some(Err(err)), _) => return (Event::UploadRejected(err), Task::none()),
                    _ => {}
                }
                (Event::None, Task::none())
            }
            Message::ProjectSaved(result) => {
                self.busy = false;
                match result {
                    Ok(_) => {
                        self.form = None;
                        (Event::ProjectSaved, self.load_projects(backend))
                    }
                    Err(err) => self.fail(err),
                }
            }
            Message::DeleteProject(id) => (Event::None, confirm_delete(id)),
            Message::DeleteConfirmed(id) => self.delete_project(id, backend),
            Message::ProjectDeleted(result) => {
                self.busy = false;
                match result {
                    Ok(()) => (Event::ProjectDeleted, self.load_projects(backend)),
                    Err(err) => self.fail(err),
                }
            }
            Message::InfoLoaded(result) => match result {
                Ok(page) => {
                    let urls = page.iter().map(|p| p.image_url.clone()).collect();
                    self.info_page = page;
                    (Event::RequestImages(urls), Task::none())
                }
                Err(err) => self.fail(err),
            },
            Message::PickInfoImage => (
                Event::None,
                Task::perform(pick_image(), Message::InfoImageRead),
            ),
            Message::InfoImageRead(result) => match result {
                Some(Ok(file)) => {
                    self.info_file = Some(file);
                    (Event::None, Task::none())
                }
                Some(Err(err)) => (Event::UploadRejected(err), Task::none()),
                None => (Event::None, Task::none()),
            },
            Message::PublishInfo => self.publish_info(backend),
            Message::InfoPublished(result) => {
                self.busy = false;
                match result {
                    Ok(page) => {
                        self.info_file = None;
                        self.info_page = Some(page.clone());
                        (Event::InfoPublished(page), Task::none())
                    }
                    Err(err) => self.fail(err),
                }
            }
            Message::ClearInfo => (Event::None, confirm_clear()),
            Message::ClearConfirmed => self.clear_info(backend),
            Message::InfoCleared(result) => {
                self.busy = false;
                match result {
                    Ok(()) => {
                        self.info_page = None;
                        (Event::InfoCleared, Task::none())
                    }
                    Err(err) => self.fail(err),
                }
            }
            Message::DialogDismissed => (Event::None, Task::none()),
        }
    }

    fn handle_form<B: Backend>(
        &mut self,
        message: form::Message,
        backend: &B,
    ) -> (Event, Task<Message>) {
        match message {
            form::Message::PickThumbnail => (
                Event::None,
                Task::perform(pick_image(), Message::ThumbnailRead),
            ),
            form::Message::PickGallery => (
                Event::None,
                Task::perform(pick_images(), Message::GalleryRead),
            ),
            form::Message::Save => self.save_project(backend),
            form::Message::Cancel => {
                self.form = None;
                (Event::None, Task::none())
            }
            edit => {
                if let Some(form) = self.form.as_mut() {
                    form.update(edit);
                }
                (Event::None, Task::none())
            }
        }
    }

    fn sign_in<B: Backend>(&mut self, backend: &B) -> (Event, Task<Message>) {
        if self.busy || !self.login.is_complete() {
            return (Event::None, Task::none());
        }
        self.busy = true;

        let backend = backend.clone();
        let email = self.login.email().trim().to_string();
        let password = self.login.password().to_string();
        let task = Task::perform(
            async move { backend.sign_in(&email, &password).await },
            Message::SignedIn,
        );
        (Event::None, task)
    }

    fn sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(email = %session.email, "admin signed out");
        }
        self.form = None;
        self.info_file = None;
        self.projects.clear();
        self.busy = false;
    }

    /// Reports a failed request. A refused session signs the admin out.
    fn fail(&mut self, err: ServiceError) -> (Event, Task<Message>) {
        if err == ServiceError::Unauthorized && self.session.is_some() {
            self.sign_out();
        }
        (Event::Failed(err), Task::none())
    }

    fn refresh<B: Backend>(&self, backend: &B) -> Task<Message> {
        let pages = backend.clone();
        let info = Task::perform(
            async move { pages.current_info_page().await },
            Message::InfoLoaded,
        );
        Task::batch([self.load_projects(backend), info])
    }

    fn load_projects<B: Backend>(&self, backend: &B) -> Task<Message> {
        let catalog = backend.clone();
        Task::perform(
            async move { catalog.list_projects().await },
            Message::ProjectsLoaded,
        )
    }

    fn project_thumbnails(&self) -> Vec<String> {
        self.projects
            .iter()
            .filter_map(|p| p.thumbnail_url.clone())
            .collect()
    }

    fn save_project<B: Backend>(&mut self, backend: &B) -> (Event, Task<Message>) {
        let (Some(session), Some(form)) = (self.session.clone(), self.form.as_ref()) else {
            return (Event::None, Task::none());
        };
        if self.busy {
            return (Event::None, Task::none());
        }
        let request = form.request();
        if let Err(err) = request.draft.validate() {
            return (Event::Invalid(err), Task::none());
        }
        self.busy = true;

        let backend = backend.clone();
        let task = Task::perform(
            async move { command::save_project(&backend, &backend, &session, request).await },
            Message::ProjectSaved,
        );
        (Event::None, task)
    }

    fn delete_project<B: Backend>(&mut self, id: ProjectId, backend: &B) -> (Event, Task<Message>) {
        let Some(session) = self.session.clone() else {
            return (Event::None, Task::none());
        };
        if self.busy {
            return (Event::None, Task::none());
        }
        self.busy = true;

        let backend = backend.clone();
        let task = Task::perform(
            async move { command::delete_project(&backend, &session, id).await },
            Message::ProjectDeleted,
        );
        (Event::None, task)
    }

    fn publish_info<B: Backend>(&mut self, backend: &B) -> (Event, Task<Message>) {
        let Some(session) = self.session.clone() else {
            return (Event::None, Task::none());
        };
        if self.busy {
            return (Event::None, Task::none());
        }
        let Some(file) = self.info_file.clone() else {
            return (Event::Invalid(ValidationError::MissingImage), Task::none());
        };
        self.busy = true;

        let backend = backend.clone();
        let task = Task::perform(
            async move {
                command::publish_info_image(&backend, &backend, &session, Some(file)).await
            },
            Message::InfoPublished,
        );
        (Event::None, task)
    }

    fn clear_info<B: Backend>(&mut self, backend: &B) -> (Event, Task<Message>) {
        let Some(session) = self.session.clone() else {
            return (Event::None, Task::none());
        };
        if self.busy {
            return (Event::None, Task::none());
        }
        self.busy = true;

        let backend = backend.clone();
        let task = Task::perform(
            async move { command::clear_info_page(&backend, &session).await },
            Message::InfoCleared,
        );
        (Event::None, task)
    }
}

fn image_dialog() -> rfd::AsyncFileDialog {
    rfd::AsyncFileDialog::new().add_filter("Images", upload::IMAGE_EXTENSIONS)
}

async fn pick_image() -> Option<Result<UploadFile, UploadError>> {
    let handle = image_dialog().pick_file().await?;
    Some(upload::read_upload(handle.path()).await)
}

async fn pick_images() -> Option<Result<Vec<UploadFile>, UploadError>> {
    let handles = image_dialog().pick_files().await?;
    let paths: Vec<_> = handles.iter().map(|h| h.path().to_path_buf()).collect();
    Some(upload::read_uploads(paths.as_slice()).await)
}

async fn confirm(description: &str) -> bool {
    let answer = rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title("Iced Folio")
        .set_description(description)
        .set_buttons(rfd::MessageButtons::YesNo)
        .show()
        .await;
    matches!(answer, rfd::MessageDialogResult::Yes)
}

fn confirm_delete(id: ProjectId) -> Task<Message> {
    Task::perform(
        async move { confirm("Delete this project? This cannot be undone.").await },
        move |yes| {
            if yes {
                Message::DeleteConfirmed(id)
            } else {
                Message::DialogDismissed
            }
        },
    )
}

fn confirm_clear() -> Task<Message> {
    Task::perform(
        async { confirm("Remove the info page image?").await },
        |yes| {
            if yes {
                Message::ClearConfirmed
            } else {
                Message::DialogDismissed
            }
        },
    )
}
