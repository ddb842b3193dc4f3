// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the interfaces to the managed services the portfolio
//! delegates to. Infrastructure adapters implement them over HTTP; tests
//! implement them in memory.
//!
//! # Available Ports
//!
//! - [`auth`]: Password sign-in ([`Authenticator`])
//! - [`catalog`]: Project and info-page records ([`ProjectCatalog`], [`InfoPageStore`])
//! - [`storage`]: Public image storage ([`MediaStorage`])
//! - [`contact`]: Contact form relay ([`ContactRelay`])
//!
//! # Design Notes
//!
//! - Traits use domain types only (no `reqwest` or Iced types)
//! - Methods return `Send` futures so callers can hand them to `Task::perform`
//! - Every call is a single attempt; failures come back as [`ServiceError`]

pub mod auth;
pub mod catalog;
pub mod contact;
pub mod error;
pub mod storage;

pub use auth::{Authenticator, Session};
pub use catalog::{InfoPageStore, ProjectCatalog};
pub use contact::ContactRelay;
pub use error::ServiceError;
pub use storage::MediaStorage;
