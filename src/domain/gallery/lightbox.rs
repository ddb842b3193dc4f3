// SPDX-License-Identifier: MPL-2.0
//! Lightbox interaction state machine.
//!
//! The lightbox shows one image of an ordered, read-only sequence at a time.
//! It is either `Closed` or `Open { index }`, and while open the index is
//! always valid for the sequence. Navigation wraps around at both ends.
//!
//! The host page must not scroll underneath an open lightbox. That side effect
//! is an injected [`ScrollLock`] owned by the lightbox: it is acquired on the
//! `Closed → Open` transition and released on every way out of `Open`,
//! including dropping the lightbox while it is still open.
//!
//! ```
//! use iced_folio::domain::gallery::{Lightbox, LightboxKey, ScrollFlag, ScrollLock};
//!
//! let images = vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()];
//! let mut lightbox = Lightbox::new(images, ScrollFlag::default());
//!
//! assert!(lightbox.open(2));
//! lightbox.next();
//! assert_eq!(lightbox.current_index(), Some(0));
//! assert_eq!(lightbox.position().map(|p| p.to_string()).as_deref(), Some("1 / 3"));
//!
//! lightbox.handle_key(LightboxKey::Escape);
//! assert!(!lightbox.is_open());
//! assert!(!lightbox.scroll_lock().is_locked());
//! ```

use std::fmt;

/// Capability to stop the host page from scrolling.
///
/// Both operations are idempotent: acquiring a held lock or releasing a free
/// one changes nothing.
pub trait ScrollLock {
    /// Disables host scrolling.
    fn acquire(&mut self);
    /// Re-enables host scrolling.
    fn release(&mut self);
    /// Returns whether host scrolling is currently disabled.
    fn is_locked(&self) -> bool;
}

/// Plain in-memory scroll lock. The gallery view reads it to decide whether
/// the overlay swallows input meant for the page underneath.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollFlag {
    locked: bool,
}

impl ScrollLock for ScrollFlag {
    fn acquire(&mut self) {
        self.locked = true;
    }

    fn release(&mut self) {
        self.locked = false;
    }

    fn is_locked(&self) -> bool {
        self.locked
    }
}

/// Viewer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

/// Keys the lightbox reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// One-based position of the displayed image, rendered as `"3 / 8"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current, self.total)
    }
}

/// Full-screen image viewer over an immutable image sequence.
#[derive(Debug)]
pub struct Lightbox<L: ScrollLock> {
    images: Vec<String>,
    state: ViewerState,
    lock: L,
}

impl<L: ScrollLock> Lightbox<L> {
    /// Creates a closed lightbox over `images`.
    ///
    /// `lock` must start unlocked. Construction never touches it, so a lock
    /// shared with another open viewer stays held.
    pub fn new(images: Vec<String>, lock: L) -> Self {
        Self {
            images,
            state: ViewerState::Closed,
            lock,
        }
    }

    /// The image sequence, in display order.
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> ViewerState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open { .. })
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            ViewerState::Open { index } => Some(index),
            ViewerState::Closed => None,
        }
    }

    /// Reference of the image on display, if open.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.current_index()
            .and_then(|index| self.images.get(index))
            .map(String::as_str)
    }

    /// Position indicator, if open.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.current_index().map(|index| Position {
            current: index + 1,
            total: self.images.len(),
        })
    }

    #[must_use]
    pub fn scroll_lock(&self) -> &L {
        &self.lock
    }

    /// Opens the viewer at `index`, or jumps there if already open.
    ///
    /// Returns `false` and leaves the state untouched when `index` is not a
    /// valid position (which includes every index of an empty sequence).
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.state = ViewerState::Open { index };
        self.lock.acquire();
        true
    }

    /// Closes the viewer. No-op while closed.
    pub fn close(&mut self) {
        if self.is_open() {
            self.state = ViewerState::Closed;
        }
        self.lock.release();
    }

    /// Shows the next image, wrapping from last to first.
    pub fn next(&mut self) {
        self.step(|index, len| (index + 1) % len);
    }

    /// Shows the previous image, wrapping from first to last.
    pub fn previous(&mut self) {
        self.step(|index, len| (index + len - 1) % len);
    }

    /// Applies a keyboard key. Returns whether the key was consumed.
    ///
    /// Keys are ignored while closed.
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowLeft => self.previous(),
            LightboxKey::ArrowRight => self.next(),
            LightboxKey::Other => return false,
        }
        true
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> usize) {
        let len = self.images.len();
        if let ViewerState::Open { index } = self.state {
            if len > 0 {
                self.state = ViewerState::Open {
                    index: advance(index, len),
                };
            }
        }
    }
}

impl<L: ScrollLock> Drop for Lightbox<L> {
    fn drop(&mut self) {
        if self.is_open() {
            self.state = ViewerState::Closed;
            self.lock.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Lock whose flag survives the lightbox, to observe release on drop.
    #[derive(Debug, Clone, Default)]
    struct SharedLock {
        locked: Rc<Cell<bool>>,
        acquisitions: Rc<Cell<u32>>,
    }

    impl ScrollLock for SharedLock {
        fn acquire(&mut self) {
            if !self.locked.get() {
                self.acquisitions.set(self.acquisitions.get() + 1);
            }
            self.locked.set(true);
        }

        fn release(&mut self) {
            self.locked.set(false);
        }

        fn is_locked(&self) -> bool {
            self.locked.get()
        }
    }

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://cdn.example/{i}.jpg")).collect()
    }

    fn lightbox(n: usize) -> Lightbox<ScrollFlag> {
        Lightbox::new(images(n), ScrollFlag::default())
    }

    #[test]
    fn starts_closed_and_unlocked() {
        let lb = lightbox(3);
        assert_eq!(lb.state(), ViewerState::Closed);
        assert!(!lb.scroll_lock().is_locked());
        assert!(lb.position().is_none());
        assert!(lb.current_image().is_none());
    }

    #[test]
    fn new_leaves_a_shared_lock_alone() {
        let lock = SharedLock::default();
        let mut first = Lightbox::new(images(2), lock.clone());
        first.open(0);

        let second = Lightbox::new(images(3), lock.clone());
        assert!(lock.is_locked());
        assert!(!second.is_open());

        drop(second);
        assert!(lock.is_locked());

        first.close();
        assert!(!lock.is_locked());
    }

    #[test]
    fn open_valid_index_opens_there() {
        let mut lb = lightbox(5);
        assert!(lb.open(3));
        assert_eq!(lb.state(), ViewerState::Open { index: 3 });
        assert!(lb.scroll_lock().is_locked());
        assert_eq!(lb.current_image(), Some("https://cdn.example/3.jpg"));
    }

    #[test]
    fn open_on_empty_sequence_is_noop() {
        let mut lb = lightbox(0);
        assert!(!lb.open(0));
        assert_eq!(lb.state(), ViewerState::Closed);
        assert!(!lb.scroll_lock().is_locked());
    }

    #[test]
    fn open_out_of_range_is_noop() {
        let mut lb = lightbox(2);
        assert!(!lb.open(2));
        assert!(!lb.is_open());

        lb.open(1);
        assert!(!lb.open(7));
        assert_eq!(lb.current_index(), Some(1));
    }

    #[test]
    fn repeated_open_resets_index_and_keeps_lock() {
        let lock = SharedLock::default();
        let acquisitions = lock.acquisitions.clone();
        let mut lb = Lightbox::new(images(4), lock);

        lb.open(0);
        lb.open(3);
        lb.open(1);

        assert_eq!(lb.current_index(), Some(1));
        assert!(lb.scroll_lock().is_locked());
        assert_eq!(acquisitions.get(), 1);
    }

    #[test]
    fn next_wraps_to_first() {
        let mut lb = lightbox(3);
        lb.open(0);
        lb.next();
        lb.next();
        lb.next();
        assert_eq!(lb.current_index(), Some(0));
        assert_eq!(lb.position().unwrap().to_string(), "1 / 3");
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut lb = lightbox(3);
        lb.open(1);
        lb.previous();
        assert_eq!(lb.position().unwrap().to_string(), "1 / 3");
        lb.previous();
        assert_eq!(lb.position().unwrap().to_string(), "3 / 3");
    }

    #[test]
    fn next_n_times_is_identity() {
        for n in 1..=7 {
            for start in 0..n {
                let mut lb = lightbox(n);
                lb.open(start);
                for _ in 0..n {
                    lb.next();
                }
                assert_eq!(lb.current_index(), Some(start), "n={n} start={start}");
            }
        }
    }

    #[test]
    fn previous_then_next_is_identity() {
        for n in 1..=7 {
            for start in 0..n {
                let mut lb = lightbox(n);
                lb.open(start);
                lb.previous();
                lb.next();
                assert_eq!(lb.current_index(), Some(start), "n={n} start={start}");
            }
        }
    }

    #[test]
    fn single_image_navigation_stays_put() {
        let mut lb = lightbox(1);
        lb.open(0);
        lb.next();
        assert_eq!(lb.current_index(), Some(0));
        lb.previous();
        assert_eq!(lb.current_index(), Some(0));
    }

    #[test]
    fn navigation_while_closed_is_noop() {
        let mut lb = lightbox(3);
        lb.next();
        lb.previous();
        assert_eq!(lb.state(), ViewerState::Closed);
    }

    #[test]
    fn keys_ignored_while_closed() {
        let mut lb = lightbox(3);
        assert!(!lb.handle_key(LightboxKey::ArrowRight));
        assert!(!lb.handle_key(LightboxKey::Escape));
        assert_eq!(lb.state(), ViewerState::Closed);
        assert!(!lb.scroll_lock().is_locked());
    }

    #[test]
    fn arrow_keys_navigate_when_open() {
        let mut lb = lightbox(4);
        lb.open(0);
        assert!(lb.handle_key(LightboxKey::ArrowRight));
        assert_eq!(lb.current_index(), Some(1));
        assert!(lb.handle_key(LightboxKey::ArrowLeft));
        assert!(lb.handle_key(LightboxKey::ArrowLeft));
        assert_eq!(lb.current_index(), Some(3));
    }

    #[test]
    fn other_keys_are_not_consumed() {
        let mut lb = lightbox(4);
        lb.open(2);
        assert!(!lb.handle_key(LightboxKey::Other));
        assert_eq!(lb.current_index(), Some(2));
    }

    #[test]
    fn escape_closes_and_releases_lock() {
        let mut lb = lightbox(5);
        lb.open(2);
        assert!(lb.handle_key(LightboxKey::Escape));
        assert_eq!(lb.state(), ViewerState::Closed);
        assert!(!lb.scroll_lock().is_locked());
    }

    #[test]
    fn close_is_idempotent() {
        let mut lb = lightbox(2);
        lb.close();
        lb.open(1);
        lb.close();
        lb.close();
        assert!(!lb.is_open());
        assert!(!lb.scroll_lock().is_locked());
    }

    #[test]
    fn drop_while_open_releases_lock() {
        let lock = SharedLock::default();
        let flag = lock.locked.clone();
        {
            let mut lb = Lightbox::new(images(3), lock);
            lb.open(1);
            assert!(flag.get());
        }
        assert!(!flag.get());
    }

    #[test]
    fn lock_follows_open_state_across_transitions() {
        enum Step {
            Open(usize),
            Next,
            Previous,
            Key(LightboxKey),
            Close,
        }

        let script = [
            Step::Open(1),
            Step::Next,
            Step::Key(LightboxKey::Escape),
            Step::Previous,
            Step::Open(9),
            Step::Open(2),
            Step::Key(LightboxKey::Other),
            Step::Key(LightboxKey::ArrowLeft),
            Step::Close,
            Step::Close,
            Step::Key(LightboxKey::ArrowRight),
        ];

        let mut lb = lightbox(3);
        for step in script {
            match step {
                Step::Open(index) => {
                    lb.open(index);
                }
                Step::Next => lb.next(),
                Step::Previous => lb.previous(),
                Step::Key(key) => {
                    lb.handle_key(key);
                }
                Step::Close => lb.close(),
            }
            assert_eq!(lb.scroll_lock().is_locked(), lb.is_open());
        }
    }

    #[test]
    fn position_display_format() {
        let position = Position {
            current: 3,
            total: 8,
        };
        assert_eq!(position.to_string(), "3 / 8");
    }
}
