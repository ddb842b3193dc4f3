// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! Type-safe wrappers for gallery interaction values, guaranteed to stay
//! within their valid ranges.

// =============================================================================
// Swipe Bounds
// =============================================================================

/// Swipe threshold bounds, in logical pixels.
pub mod swipe_bounds {
    /// Smallest accepted threshold.
    pub const MIN: f32 = 10.0;
    /// Largest accepted threshold.
    pub const MAX: f32 = 400.0;
    /// Default threshold.
    pub const DEFAULT: f32 = 50.0;
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum horizontal travel a touch gesture must exceed to count as a swipe.
///
/// The comparison is strict: a drag of exactly the threshold is treated as a
/// tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_nan() {
            return Self::default();
        }
        Self(pixels.clamp(swipe_bounds::MIN, swipe_bounds::MAX))
    }

    /// Returns the raw value in logical pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether `distance` is a swipe beyond this threshold, in
    /// either direction.
    #[must_use]
    pub fn is_exceeded_by(self, distance: f32) -> bool {
        distance.abs() > self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT)
    }
}

// =============================================================================
// GridColumns
// =============================================================================

/// Number of thumbnail columns in the gallery grid (1–6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridColumns(usize);

impl GridColumns {
    /// Fewest columns.
    pub const MIN: usize = 1;
    /// Most columns.
    pub const MAX: usize = 6;

    /// Creates a column count, clamping to the valid range.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self(columns.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for GridColumns {
    fn default() -> Self {
        Self(2)
    }
}
