//! Assertion utilities for robot testing
//!
//! Helpers for checking carousel snapshots with readable failure messages.

use crate::robot::CarouselSnapshot;
use std::ops::Range;

/// Assert that a value is within an expected range.
///
/// Pixel offsets are computed in `f32`, so they may differ from the exact
/// decimal by a few ulps.
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that exactly the slides in `expected` are active.
pub fn assert_active_range(snapshot: &CarouselSnapshot, expected: Range<usize>, msg: &str) {
    let expected: Vec<usize> = expected.collect();
    assert_eq!(
        snapshot.active_slides, expected,
        "{}: active slides mismatch (cursor {})",
        msg, snapshot.cursor
    );
}

/// Assert the indicator count and which one is active.
pub fn assert_indicator(snapshot: &CarouselSnapshot, count: usize, active: usize, msg: &str) {
    assert_eq!(
        (snapshot.indicator_count, snapshot.active_indicator),
        (count, active),
        "{}: (indicator count, active indicator) mismatch",
        msg
    );
}

/// Assert the cursor sits inside `[0, max(0, slides - visible)]`.
pub fn assert_cursor_in_bounds(snapshot: &CarouselSnapshot, slide_count: usize, msg: &str) {
    let max_cursor = slide_count.saturating_sub(snapshot.visible_count);
    assert!(
        snapshot.cursor <= max_cursor,
        "{}: cursor {} outside [0, {}]",
        msg,
        snapshot.cursor,
        max_cursor
    );
}
