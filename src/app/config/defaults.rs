// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Swipe threshold and grid layout
//! - **Layout**: Window size breakpoints
//! - **Backend**: Storage bucket and relay endpoint
//! - **Image Cache**: Remote image cache capacity

use crate::domain::gallery::newtypes::swipe_bounds;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default horizontal travel a swipe must exceed, in logical pixels.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = swipe_bounds::DEFAULT;

/// Minimum swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = swipe_bounds::MIN;

/// Maximum swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = swipe_bounds::MAX;

/// Default number of thumbnail columns in a project gallery.
pub const DEFAULT_GRID_COLUMNS: usize = 2;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Window width from which the desktop layout is used (lightbox arrows,
/// wider project grid).
pub const DESKTOP_BREAKPOINT: f32 = 768.0;

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Public storage bucket holding the portfolio images.
pub const DEFAULT_BUCKET: &str = "portfolio";

/// Contact form relay endpoint.
pub const DEFAULT_CONTACT_ENDPOINT: &str = crate::infrastructure::web3forms::DEFAULT_ENDPOINT;

// ==========================================================================
// Image Cache Defaults
// ==========================================================================

/// Number of decoded remote images kept in memory.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 96;

/// Minimum image cache size.
pub const MIN_IMAGE_CACHE_ENTRIES: usize = 8;

/// Maximum image cache size.
pub const MAX_IMAGE_CACHE_ENTRIES: usize = 1024;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Swipe threshold validation
    assert!(MIN_SWIPE_THRESHOLD > 0.0);
    assert!(MAX_SWIPE_THRESHOLD > MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);

    // Grid validation
    assert!(DEFAULT_GRID_COLUMNS >= 1);

    // Image cache validation
    assert!(MIN_IMAGE_CACHE_ENTRIES > 0);
    assert!(MAX_IMAGE_CACHE_ENTRIES >= MIN_IMAGE_CACHE_ENTRIES);
    assert!(DEFAULT_IMAGE_CACHE_ENTRIES >= MIN_IMAGE_CACHE_ENTRIES);
    assert!(DEFAULT_IMAGE_CACHE_ENTRIES <= MAX_IMAGE_CACHE_ENTRIES);
};
