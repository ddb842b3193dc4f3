// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Pages
//!
//! - [`portfolio`] - Project list and project pages
//! - [`gallery`] - Thumbnail grid and lightbox overlay of one project
//! - [`info`] - Info page image
//! - [`contact`] - Contact form
//! - [`admin`] - Sign-in, project editor and info page management
//!
//! # Shared Infrastructure
//!
//! - [`remote_image`] - Download cache for images served by URL
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar
//! - [`notifications`] - Toast notification system for user feedback

pub mod admin;
pub mod contact;
pub mod design_tokens;
pub mod gallery;
pub mod info;
pub mod navbar;
pub mod notifications;
pub mod portfolio;
pub mod remote_image;
pub mod styles;
pub mod theming;
