// SPDX-License-Identifier: MPL-2.0
//! Contact form.
//!
//! Fields are checked locally before anything is sent. While the request is
//! in flight the submit button is disabled; a failure keeps what the visitor
//! typed so they can try again.

use crate::app::i18n::fluent::I18n;
use crate::application::command;
use crate::application::port::{ContactRelay, ServiceError};
use crate::domain::portfolio::{ContactMessage, ValidationError};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text_editor, text_input, Column, Container, Text};
use iced::{Element, Length, Task};
use std::fmt;

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    Submit,
    Sent(Result<(), ServiceError>),
    SendAnother,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The form is valid; the parent starts the request.
    Submit(ContactMessage),
    Invalid(ValidationError),
    Sent,
    Failed(ServiceError),
}

pub struct State {
    name: String,
    email: String,
    message: text_editor::Content,
    sending: bool,
    sent: bool,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("sending", &self.sending)
            .field("sent", &self.sent)
            .finish()
    }
}

impl Default for State {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: text_editor::Content::new(),
            sending: false,
            sent: false,
        }
    }
}

/// Sends `message` through the relay.
pub fn send<R>(relay: &R, message: ContactMessage) -> Task<Message>
where
    R: ContactRelay + Clone + 'static,
{
    let relay = relay.clone();
    Task::perform(
        async move { command::send_contact_message(&relay, &message).await },
        Message::Sent,
    )
}

impl State {
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    #[must_use]
    pub fn is_sent(&self) -> bool {
        self.sent
    }

    fn current(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.text(),
        }
    }

    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message = text_editor::Content::new();
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(name) => {
                self.name = name;
                Event::None
            }
            Message::EmailChanged(email) => {
                self.email = email;
                Event::None
            }
            Message::MessageEdited(action) => {
                self.message.perform(action);
                Event::None
            }
            Message::Submit => {
                if self.sending {
                    return Event::None;
                }
                let message = self.current();
                if let Err(err) = message.validate() {
                    return Event::Invalid(err);
                }
                self.sending = true;
                Event::Submit(message)
            }
            Message::Sent(Ok(())) => {
                self.sending = false;
                self.sent = true;
                self.reset();
                Event::Sent
            }
            Message::Sent(Err(err)) => {
                self.sending = false;
                Event::Failed(err)
            }
            Message::SendAnother => {
                self.sent = false;
                Event::None
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("contact-title")).size(typography::TITLE_LG);

        let body: Element<'a, Message> = if self.sent {
            let panel = Column::new()
                .spacing(spacing::MD)
                .push(Text::new(i18n.tr("contact-sent-title")).size(typography::TITLE_SM))
                .push(Text::new(i18n.tr("contact-sent-body")))
                .push(
                    button(Text::new(i18n.tr("contact-send-another")))
                        .on_press(Message::SendAnother)
                        .style(styles::button::primary),
                );
            Container::new(panel)
                .padding(spacing::LG)
                .width(Length::Fill)
                .style(styles::container::success)
                .into()
        } else {
            self.view_form(i18n)
        };

        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .max_width(sizing::FORM_MAX_WIDTH)
            .push(title)
            .push(Text::new(i18n.tr("contact-intro")).size(typography::BODY))
            .push(body);

        scrollable(Container::new(content).center_x(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_form<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut name = text_input(&i18n.tr("contact-name"), &self.name).padding(spacing::XS);
        let mut email = text_input(&i18n.tr("contact-email"), &self.email).padding(spacing::XS);
        let mut message = text_editor(&self.message)
            .placeholder(i18n.tr("contact-message"))
            .height(Length::Fixed(sizing::INPUT_HEIGHT * 5.0))
            .padding(spacing::XS);

        if !self.sending {
            name = name.on_input(Message::NameChanged);
            email = email.on_input(Message::EmailChanged);
            message = message.on_action(Message::MessageEdited);
        }

        let label = if self.sending {
            i18n.tr("contact-sending")
        } else {
            i18n.tr("contact-send")
        };
        let submit = button(Text::new(label))
            .on_press_maybe((!self.sending).then_some(Message::Submit))
            .style(styles::button::primary);

        Column::new()
            .spacing(spacing::SM)
            .push(name)
            .push(email)
            .push(message)
            .push(submit)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> State {
        State {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: text_editor::Content::with_text("Hello there"),
            ..State::default()
        }
    }

    #[test]
    fn valid_form_submits_and_disables() {
        let mut state = filled();
        let event = state.update(Message::Submit);
        let Event::Submit(message) = event else {
            panic!("expected submit, got {event:?}");
        };
        assert_eq!(message.name, "Ada");
        assert!(message.message.starts_with("Hello there"));
        assert!(state.is_sending());
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut state = filled();
        state.update(Message::Submit);
        assert_eq!(state.update(Message::Submit), Event::None);
    }

    #[test]
    fn missing_name_is_reported_locally() {
        let mut state = filled();
        state.update(Message::NameChanged("  ".into()));
        assert_eq!(
            state.update(Message::Submit),
            Event::Invalid(ValidationError::MissingName)
        );
        assert!(!state.is_sending());
    }

    #[test]
    fn bad_email_is_reported_locally() {
        let mut state = filled();
        state.update(Message::EmailChanged("nobody".into()));
        assert_eq!(
            state.update(Message::Submit),
            Event::Invalid(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn success_clears_form_and_shows_panel() {
        let mut state = filled();
        state.update(Message::Submit);
        assert_eq!(state.update(Message::Sent(Ok(()))), Event::Sent);
        assert!(state.is_sent());
        assert!(!state.is_sending());
        assert!(state.name.is_empty());

        state.update(Message::SendAnother);
        assert!(!state.is_sent());
    }

    #[test]
    fn failure_keeps_form_contents() {
        let mut state = filled();
        state.update(Message::Submit);
        let err = ServiceError::Rejected {
            status: None,
            message: "quota".into(),
        };
        assert_eq!(
            state.update(Message::Sent(Err(err.clone()))),
            Event::Failed(err)
        );
        assert!(!state.is_sending());
        assert_eq!(state.name, "Ada");
        assert_eq!(state.email, "ada@example.com");
    }
}
