// SPDX-License-Identifier: MPL-2.0
//! Gallery interaction types.
//!
//! Framework-independent pieces of the project gallery: the lightbox state
//! machine, the swipe gesture tracker and their value objects.

pub mod lightbox;
pub mod newtypes;
pub mod swipe;

pub use lightbox::{Lightbox, LightboxKey, Position, ScrollFlag, ScrollLock, ViewerState};
pub use newtypes::{GridColumns, SwipeThreshold};
pub use swipe::{SwipeDirection, SwipeTracker};
