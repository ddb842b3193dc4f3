// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap the managed services the site
//! delegates to, plus local file reading for uploads.
//!
//! # Available Adapters
//!
//! - [`supabase`]: Sign-in, records and image storage (implements
//!   [`Authenticator`], [`ProjectCatalog`], [`InfoPageStore`], [`MediaStorage`])
//! - [`web3forms`]: Contact form relay (implements [`ContactRelay`])
//! - [`upload`]: Reading picked files into upload payloads
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - One `reqwest::Client` is built once and cloned into each adapter
//!
//! [`Authenticator`]: crate::application::port::Authenticator
//! [`ProjectCatalog`]: crate::application::port::ProjectCatalog
//! [`InfoPageStore`]: crate::application::port::InfoPageStore
//! [`MediaStorage`]: crate::application::port::MediaStorage
//! [`ContactRelay`]: crate::application::port::ContactRelay

pub mod http;
pub mod supabase;
pub mod upload;
pub mod web3forms;

pub use supabase::{Endpoint, SupabaseClient};
pub use web3forms::Web3FormsRelay;
