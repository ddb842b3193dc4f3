// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a photography portfolio built with the Iced GUI framework.
//!
//! Visitors browse projects through a gallery with a keyboard and touch
//! friendly lightbox, read the info page and send a message through the
//! contact form. The owner signs in to an admin panel to publish projects
//! and images to a hosted backend.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
