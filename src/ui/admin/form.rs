// SPDX-License-Identifier: MPL-2.0
//! Project editor: text fields, status and the picked image files.

use crate::app::i18n::fluent::I18n;
use crate::application::command::SaveProject;
use crate::domain::portfolio::{Project, ProjectDraft, ProjectId, ProjectStatus, UploadFile};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::remote_image;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, radio, text_editor, text_input, Column, Container, Row, Space, Text};
use iced::{ContentFit, Element, Length};
use std::fmt;

#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    CategoryChanged(String),
    StatusSelected(ProjectStatus),
    CameraGearChanged(String),
    DescriptionEdited(text_editor::Action),
    PickThumbnail,
    PickGallery,
    Save,
    Cancel,
}

pub struct State {
    id: Option<ProjectId>,
    title: String,
    category: String,
    status: ProjectStatus,
    camera_gear: String,
    description: text_editor::Content,
    /// Stored images, shown until replaced.
    current_thumbnail: Option<String>,
    current_gallery: Vec<String>,
    /// Files picked in this session, uploaded on save.
    thumbnail: Option<UploadFile>,
    gallery: Vec<UploadFile>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("status", &self.status)
            .field("thumbnail", &self.thumbnail)
            .field("gallery", &self.gallery.len())
            .finish_non_exhaustive()
    }
}

impl Default for State {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            category: String::new(),
            status: ProjectStatus::default(),
            camera_gear: String::new(),
            description: text_editor::Content::new(),
            current_thumbnail: None,
            current_gallery: Vec::new(),
            thumbnail: None,
            gallery: Vec::new(),
        }
    }
}

impl State {
    /// Empty form for a new project.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with a stored project.
    #[must_use]
    pub fn edit(project: &Project) -> Self {
        Self {
            id: Some(project.id),
            title: project.title.clone(),
            category: project.category.clone(),
            status: project.status,
            camera_gear: project.camera_gear.clone(),
            description: text_editor::Content::with_text(&project.description),
            current_thumbnail: project.thumbnail_url.clone(),
            current_gallery: project.gallery_urls.clone(),
            thumbnail: None,
            gallery: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<ProjectId> {
        self.id
    }

    /// Stored image URLs the form displays.
    #[must_use]
    pub fn current_images(&self) -> Vec<String> {
        self.current_thumbnail
            .iter()
            .chain(self.current_gallery.iter())
            .cloned()
            .collect()
    }

    pub fn set_thumbnail(&mut self, file: UploadFile) {
        self.thumbnail = Some(file);
    }

    /// Replaces the picked gallery files. An empty pick keeps the previous
    /// selection.
    pub fn set_gallery(&mut self, files: Vec<UploadFile>) {
        if !files.is_empty() {
            self.gallery = files;
        }
    }

    /// Applies a field edit. Buttons are handled by the admin panel.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::TitleChanged(value) => self.title = value,
            Message::CategoryChanged(value) => self.category = value,
            Message::StatusSelected(status) => self.status = status,
            Message::CameraGearChanged(value) => self.camera_gear = value,
            Message::DescriptionEdited(action) => self.description.perform(action),
            Message::PickThumbnail | Message::PickGallery | Message::Save | Message::Cancel => {}
        }
    }

    /// Everything needed to save the project.
    #[must_use]
    pub fn request(&self) -> SaveProject {
        SaveProject {
            id: self.id,
            draft: ProjectDraft {
                title: self.title.clone(),
                category: self.category.clone(),
                status: self.status,
                camera_gear: self.camera_gear.clone(),
                description: self.description.text().trim_end().to_string(),
            },
            thumbnail: self.thumbnail.clone(),
            gallery: self.gallery.clone(),
        }
    }

    pub fn view<'a>(
        &'a self,
        i18n: &'a I18n,
        images: &'a remote_image::Cache,
        busy: bool,
    ) -> Element<'a, Message> {
        let heading = if self.id.is_some() {
            i18n.tr("admin-edit-project")
        } else {
            i18n.tr("admin-new-project")
        };

        let mut title = text_input(&i18n.tr("project-title"), &self.title).padding(spacing::XS);
        let mut category =
            text_input(&i18n.tr("project-category"), &self.category).padding(spacing::XS);
        let mut camera_gear =
            text_input(&i18n.tr("project-camera-gear"), &self.camera_gear).padding(spacing::XS);
        let mut description = text_editor(&self.description)
            .placeholder(i18n.tr("project-description"))
            .height(Length::Fixed(sizing::INPUT_HEIGHT * 4.0))
            .padding(spacing::XS);
        if !busy {
            title = title.on_input(Message::TitleChanged);
            category = category.on_input(Message::CategoryChanged);
            camera_gear = camera_gear.on_input(Message::CameraGearChanged);
            description = description.on_action(Message::DescriptionEdited);
        }

        let status = ProjectStatus::ALL.iter().fold(
            Row::new().spacing(spacing::MD),
            |row, &value| {
                row.push(radio(
                    i18n.tr(value.i18n_key()),
                    value,
                    Some(self.status),
                    Message::StatusSelected,
                ))
            },
        );

        let thumbnail_row = file_row(
            i18n.tr("admin-pick-thumbnail"),
            Message::PickThumbnail,
            self.thumbnail.iter().map(|f| f.file_name.as_str()).collect(),
            self.current_thumbnail.iter().map(String::as_str).collect(),
            images,
            busy,
        );
        let gallery_row = file_row(
            i18n.tr("admin-pick-gallery"),
            Message::PickGallery,
            self.gallery.iter().map(|f| f.file_name.as_str()).collect(),
            self.current_gallery.iter().map(String::as_str).collect(),
            images,
            busy,
        );

        let save = button(Text::new(i18n.tr("admin-save")))
            .on_press_maybe((!busy).then_some(Message::Save))
            .style(styles::button::primary);
        let cancel = button(Text::new(i18n.tr("admin-cancel")))
            .on_press_maybe((!busy).then_some(Message::Cancel))
            .style(styles::button::link(false));

        let form = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(heading).size(typography::TITLE_MD))
            .push(title)
            .push(category)
            .push(status)
            .push(camera_gear)
            .push(description)
            .push(thumbnail_row)
            .push(gallery_row)
            .push(Row::new().spacing(spacing::SM).push(save).push(cancel));

        Container::new(form)
            .padding(spacing::LG)
            .max_width(sizing::FORM_MAX_WIDTH)
            .style(styles::container::panel)
            .into()
    }

}

/// Picker button followed by the picked file names, or the stored images
/// while nothing new was picked.
fn file_row<'a>(
    label: String,
    pick: Message,
    picked: Vec<&'a str>,
    stored: Vec<&'a str>,
    images: &'a remote_image::Cache,
    busy: bool,
) -> Element<'a, Message> {
    let picker = button(Text::new(label))
        .on_press_maybe((!busy).then_some(pick))
        .style(styles::button::link(false));

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(picker);

    if picked.is_empty() {
        for url in stored {
            row = row.push(
                Container::new(images.view(url, ContentFit::Cover))
                    .width(Length::Fixed(sizing::ADMIN_THUMBNAIL))
                    .height(Length::Fixed(sizing::ADMIN_THUMBNAIL)),
            );
        }
    } else {
        row = row.push(Text::new(picked.join(", ")).size(typography::CAPTION));
    }

    row.push(Space::new().width(Length::Fill)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> UploadFile {
        UploadFile {
            file_name: name.into(),
            bytes: vec![1, 2, 3],
            content_type: "image/jpeg".into(),
        }
    }

    fn stored() -> Project {
        Project {
            id: ProjectId(7),
            title: "Harbour".into(),
            category: "Landscape".into(),
            status: ProjectStatus::Hidden,
            camera_gear: "X100V".into(),
            description: "Early morning".into(),
            thumbnail_url: Some("https://cdn/t.jpg".into()),
            gallery_urls: vec!["https://cdn/1.jpg".into()],
            created_at: None,
        }
    }

    #[test]
    fn new_form_creates() {
        let form = State::new();
        let request = form.request();
        assert!(request.id.is_none());
        assert_eq!(request.draft.status, ProjectStatus::Visible);
    }

    #[test]
    fn edit_form_keeps_id_and_fields() {
        let form = State::edit(&stored());
        let request = form.request();
        assert_eq!(request.id, Some(ProjectId(7)));
        assert_eq!(request.draft.title, "Harbour");
        assert_eq!(request.draft.status, ProjectStatus::Hidden);
        assert_eq!(request.draft.description, "Early morning");
        assert!(request.thumbnail.is_none());
        assert!(request.gallery.is_empty());
    }

    #[test]
    fn edits_flow_into_request() {
        let mut form = State::new();
        form.update(Message::TitleChanged("Night".into()));
        form.update(Message::StatusSelected(ProjectStatus::Hidden));
        form.update(Message::CameraGearChanged("Leica".into()));
        let request = form.request();
        assert_eq!(request.draft.title, "Night");
        assert_eq!(request.draft.status, ProjectStatus::Hidden);
        assert_eq!(request.draft.camera_gear, "Leica");
    }

    #[test]
    fn picked_files_are_sent_in_order() {
        let mut form = State::edit(&stored());
        form.set_thumbnail(file("cover.jpg"));
        form.set_gallery(vec![file("b.jpg"), file("a.jpg")]);
        let request = form.request();
        assert_eq!(request.thumbnail.map(|f| f.file_name).as_deref(), Some("cover.jpg"));
        let names: Vec<_> = request.gallery.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["b.jpg", "a.jpg"]);
    }

    #[test]
    fn empty_pick_keeps_previous_gallery() {
        let mut form = State::new();
        form.set_gallery(vec![file("a.jpg")]);
        form.set_gallery(Vec::new());
        assert_eq!(form.request().gallery.len(), 1);
    }

    #[test]
    fn current_images_lists_thumbnail_first() {
        let form = State::edit(&stored());
        assert_eq!(
            form.current_images(),
            vec!["https://cdn/t.jpg".to_string(), "https://cdn/1.jpg".to_string()]
        );
    }
}
