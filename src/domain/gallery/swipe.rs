// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection for touch screens.
//!
//! The tracker holds the two transient positions of a single gesture. Every
//! completed (or cancelled) gesture clears them, so a later gesture that only
//! fires one of the touch events can never reuse a stale position.

use super::newtypes::SwipeThreshold;

/// Navigation requested by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled right-to-left: show the next image.
    Next,
    /// Finger travelled left-to-right: show the previous image.
    Previous,
}

/// Transient state of the gesture in progress.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    end_x: Option<f32>,
    threshold: SwipeThreshold,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            start_x: None,
            end_x: None,
            threshold,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    /// Finger down. Starts a fresh gesture.
    pub fn touch_start(&mut self, x: f32) {
        self.end_x = None;
        self.start_x = Some(x);
    }

    /// Finger moved. Only the latest position is kept.
    pub fn touch_move(&mut self, x: f32) {
        self.end_x = Some(x);
    }

    /// Finger up. Evaluates the gesture and clears the tracker.
    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        let start = self.start_x.take();
        let end = self.end_x.take();

        let distance = start? - end?;
        if !self.threshold.is_exceeded_by(distance) {
            return None;
        }

        if distance > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    }

    /// Gesture aborted by the platform (finger lost).
    pub fn cancel(&mut self) {
        self.start_x = None;
        self.end_x = None;
    }

    /// Returns whether a gesture is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some() || self.end_x.is_some()
    }
}
