// SPDX-License-Identifier: MPL-2.0
//! Command services (write side).
//!
//! Each command is one admin or visitor action: validate locally, call the
//! ports in order, report a single outcome. Nothing is retried; a failure
//! part-way leaves whatever the backend already accepted.
//!
//! # Available Commands
//!
//! - [`project`]: Save (with uploads) and delete projects
//! - [`info_page`]: Publish and clear the info image
//! - [`contact`]: Send a contact message

pub mod contact;
pub mod info_page;
pub mod project;

pub use contact::send_contact_message;
pub use info_page::{clear_info_page, publish_info_image};
pub use project::{delete_project, save_project, SaveProject};

#[cfg(test)]
pub(crate) mod fakes;
