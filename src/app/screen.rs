// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Pages the visitor can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Portfolio,
    Info,
    Contact,
    Admin,
}
