// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Lightbox state machine ([`Lightbox`](gallery::Lightbox)),
//!   swipe detection ([`SwipeTracker`](gallery::SwipeTracker)) and gallery
//!   value objects ([`SwipeThreshold`](gallery::SwipeThreshold))
//! - [`portfolio`]: Content records ([`Project`](portfolio::Project),
//!   [`InfoPage`](portfolio::InfoPage), [`ContactMessage`](portfolio::ContactMessage))

pub mod gallery;
pub mod portfolio;
