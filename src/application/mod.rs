// SPDX-License-Identifier: MPL-2.0
//! Application layer - use cases and ports.
//!
//! # Modules
//!
//! - [`port`]: Traits the managed backend and the form relay are reached
//!   through ([`ProjectCatalog`](port::ProjectCatalog),
//!   [`MediaStorage`](port::MediaStorage), [`ContactRelay`](port::ContactRelay), ...)
//! - [`command`]: Write-side use cases orchestrating those ports
//!   (save a project with its uploads, publish the info image, send a message)

pub mod command;
pub mod port;
