//! Shared gesture constants and the horizontal drag session.
//!
//! # Gesture Flow
//! 1. **Down**: [`DragSession::begin`] records the start position.
//! 2. **Move**: [`DragSession::update`] recomputes the accumulated delta from
//!    the start position (not incrementally, so dropped samples do not drift).
//! 3. **Up**: [`DragSession::finish`] consumes the session and reports whether
//!    the gesture crossed [`SWIPE_COMMIT_THRESHOLD`].
//! 4. **Cancel**: [`DragSession::abandon`] consumes the session as a
//!    zero-delta release.

use crate::input::Point;

/// Horizontal distance in CSS pixels a drag must exceed to change slides.
///
/// Compared strictly: a release at exactly this distance snaps back. Taps and
/// small jitters never advance the carousel.
pub const SWIPE_COMMIT_THRESHOLD: f32 = 40.0;

/// What a finished drag asks the carousel to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Dragged left past the threshold: show the next slide.
    Advance,
    /// Dragged right past the threshold: show the previous slide.
    Retreat,
    /// Below the threshold or cancelled: return to the current slide.
    SnapBack,
}

/// State that only exists between pointer-down and pointer-up/cancel.
///
/// Owners hold it as `Option<DragSession>`; `finish` and `abandon` take
/// `self` so a session cannot be committed twice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    start_x: f32,
    delta_x: f32,
}

impl DragSession {
    pub fn begin(position: Point) -> Self {
        Self {
            start_x: position.x,
            delta_x: 0.0,
        }
    }

    /// Updates the accumulated horizontal delta and returns it.
    pub fn update(&mut self, position: Point) -> f32 {
        self.delta_x = position.x - self.start_x;
        self.delta_x
    }

    pub fn delta(&self) -> f32 {
        self.delta_x
    }

    pub fn finish(self) -> DragOutcome {
        if self.delta_x.abs() > SWIPE_COMMIT_THRESHOLD {
            if self.delta_x < 0.0 {
                DragOutcome::Advance
            } else {
                DragOutcome::Retreat
            }
        } else {
            DragOutcome::SnapBack
        }
    }

    pub fn abandon(self) -> DragOutcome {
        DragOutcome::SnapBack
    }
}
