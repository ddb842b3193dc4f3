// SPDX-License-Identifier: MPL-2.0
//! Admin sign-in form.

use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{Element, Length};
use std::fmt;

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
}

#[derive(Default)]
pub struct State {
    email: String,
    password: String,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl State {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Both fields filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }

    /// Forgets the password, keeping the address for the next attempt.
    pub fn clear_password(&mut self) {
        self.password.clear();
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::EmailChanged(email) => self.email = email,
            Message::PasswordChanged(password) => self.password = password,
            Message::Submit => {}
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, busy: bool) -> Element<'a, Message> {
        let can_submit = !busy && self.is_complete();

        let mut email = text_input(&i18n.tr("admin-email"), &self.email).padding(spacing::XS);
        let mut password = text_input(&i18n.tr("admin-password"), &self.password)
            .secure(true)
            .padding(spacing::XS);
        if !busy {
            email = email.on_input(Message::EmailChanged);
            password = password
                .on_input(Message::PasswordChanged)
                .on_submit_maybe(can_submit.then_some(Message::Submit));
        }

        let label = if busy {
            i18n.tr("admin-signing-in")
        } else {
            i18n.tr("admin-sign-in")
        };
        let submit = button(Text::new(label))
            .on_press_maybe(can_submit.then_some(Message::Submit))
            .style(styles::button::primary);

        let form = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("admin-sign-in-title")).size(typography::TITLE_MD))
            .push(email)
            .push(password)
            .push(submit);

        Container::new(
            Container::new(form)
                .padding(spacing::LG)
                .max_width(sizing::FORM_MAX_WIDTH)
                .style(styles::container::panel),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::XL)
        .into()
    }
}
