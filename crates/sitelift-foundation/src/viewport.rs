//! Viewport width breakpoints.
//!
//! The number of simultaneously visible slides is a pure function of the
//! viewport width. The breakpoints are design constants and are not exposed
//! as configuration.

/// Widths at or above this show three slides.
pub const WIDE_MIN_WIDTH: f32 = 1024.0;

/// Widths at or above this (and below [`WIDE_MIN_WIDTH`]) show two slides.
pub const COMPACT_MIN_WIDTH: f32 = 640.0;

/// How many slides fit side by side at the current viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportBucket {
    Narrow,
    Compact,
    Wide,
}

impl ViewportBucket {
    pub fn for_width(width: f32) -> Self {
        if width >= WIDE_MIN_WIDTH {
            ViewportBucket::Wide
        } else if width >= COMPACT_MIN_WIDTH {
            ViewportBucket::Compact
        } else {
            ViewportBucket::Narrow
        }
    }

    /// Number of visible slides, always at least one.
    pub fn visible_count(self) -> usize {
        match self {
            ViewportBucket::Narrow => 1,
            ViewportBucket::Compact => 2,
            ViewportBucket::Wide => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_inclusive_lower_bounds() {
        assert_eq!(ViewportBucket::for_width(0.0).visible_count(), 1);
        assert_eq!(ViewportBucket::for_width(639.0).visible_count(), 1);
        assert_eq!(ViewportBucket::for_width(640.0).visible_count(), 2);
        assert_eq!(ViewportBucket::for_width(1023.0).visible_count(), 2);
        assert_eq!(ViewportBucket::for_width(1024.0).visible_count(), 3);
        assert_eq!(ViewportBucket::for_width(2560.0).visible_count(), 3);
    }

    #[test]
    fn fractional_widths_below_breakpoint_stay_in_lower_bucket() {
        assert_eq!(ViewportBucket::for_width(1023.5), ViewportBucket::Compact);
    }
}
