//! The rendered description of one carousel state.
//!
//! A [`CarouselFrame`] is everything a surface needs to bring the DOM in line
//! with the controller: the track offset, which slides are active and the
//! page indicators. Surfaces never compute any of it themselves.

use std::ops::Range;

/// Geometry of the first slide, used by [`OffsetMode::Measured`](super::OffsetMode::Measured).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlideMetrics {
    /// Rendered width of a slide in CSS pixels.
    pub width: f32,
    /// Gap between slides in CSS pixels.
    pub gap: f32,
}

impl SlideMetrics {
    /// Creates metrics from a slide width and gap.
    pub fn new(width: f32, gap: f32) -> Self {
        Self { width, gap }
    }

    /// Distance between the left edges of two neighbouring slides.
    pub fn pitch(&self) -> f32 {
        self.width + self.gap
    }
}

/// How far the track is shifted left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackOffset {
    /// Percent of the track width.
    Percent(f64),
    /// CSS pixels.
    Pixels(f32),
}

impl TrackOffset {
    /// Offset placing slide `cursor` at the left edge of a percentage track.
    pub fn percent(cursor: usize, slide_count: usize, visible: usize) -> Self {
        if slide_count == 0 || visible == 0 {
            return TrackOffset::Percent(0.0);
        }
        let n = slide_count as f64;
        TrackOffset::Percent((cursor as f64 / n) * 100.0 * (n / visible as f64))
    }

    /// Offset placing slide `cursor` at the left edge of a measured track.
    pub fn pixels(cursor: usize, metrics: SlideMetrics) -> Self {
        TrackOffset::Pixels(cursor as f32 * metrics.pitch())
    }

    /// The magnitude of the offset, in its own unit.
    pub fn amount(&self) -> f64 {
        match *self {
            TrackOffset::Percent(value) => value,
            TrackOffset::Pixels(value) => f64::from(value),
        }
    }

    fn css_length(&self) -> String {
        match *self {
            TrackOffset::Percent(value) => format!("-{value}%"),
            TrackOffset::Pixels(value) => format!("-{value}px"),
        }
    }

    /// The settled `transform` value.
    pub fn css_transform(&self) -> String {
        format!("translateX({})", self.css_length())
    }

    /// The `transform` value while a drag is in progress.
    pub fn css_transform_with_drag(&self, delta_px: f32) -> String {
        format!("translateX(calc({} + {delta_px}px))", self.css_length())
    }
}

/// Page indicators: one per page, one active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorSet {
    /// Number of indicators, `ceil(slides / visible)`.
    pub count: usize,
    /// Index of the page containing the cursor.
    pub active: usize,
}

impl IndicatorSet {
    /// Builds the set for a settled cursor.
    pub fn for_cursor(cursor: usize, slide_count: usize, visible: usize) -> Self {
        let visible = visible.max(1);
        Self {
            count: slide_count.div_ceil(visible),
            active: cursor / visible,
        }
    }

    /// Cursor target for selecting indicator `page`.
    pub fn target_for(page: usize, visible: usize) -> isize {
        (page * visible.max(1)) as isize
    }
}

/// The complete rendered state for one settle.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselFrame {
    /// Settled cursor.
    pub cursor: usize,
    /// Slides visible at once.
    pub visible_count: usize,
    /// Track translation.
    pub offset: TrackOffset,
    /// Slides marked active, `cursor..min(cursor + visible, slides)`.
    pub active: Range<usize>,
    /// Page indicators.
    pub indicators: IndicatorSet,
}

impl CarouselFrame {
    /// Whether slide `index` carries the active marker.
    pub fn is_slide_active(&self, index: usize) -> bool {
        self.active.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_offset_is_one_visible_width_per_slide() {
        let offset = TrackOffset::percent(3, 6, 3);
        assert!((offset.amount() - 100.0).abs() < 1e-4);
        let offset = TrackOffset::percent(1, 7, 2);
        assert!((offset.amount() - 50.0).abs() < 1e-4);
    }

    #[test]
    fn percent_offset_keeps_double_precision() {
        let offset = TrackOffset::percent(1, 7, 3);
        assert!((offset.amount() - 100.0 / 3.0).abs() < 1e-12);
        assert_eq!(offset.css_transform(), "translateX(-33.333333333333336%)");
    }

    #[test]
    fn empty_track_has_no_offset() {
        assert_eq!(TrackOffset::percent(0, 0, 3), TrackOffset::Percent(0.0));
    }

    #[test]
    fn pixel_offset_includes_gap() {
        let offset = TrackOffset::pixels(2, SlideMetrics::new(300.0, 24.0));
        assert_eq!(offset, TrackOffset::Pixels(648.0));
    }

    #[test]
    fn css_transforms() {
        assert_eq!(
            TrackOffset::Pixels(648.0).css_transform(),
            "translateX(-648px)"
        );
        assert_eq!(
            TrackOffset::Percent(50.0).css_transform_with_drag(-12.0),
            "translateX(calc(-50% + -12px))"
        );
    }

    #[test]
    fn indicator_counts() {
        assert_eq!(IndicatorSet::for_cursor(0, 7, 3).count, 3);
        assert_eq!(IndicatorSet::for_cursor(0, 7, 2).count, 4);
        assert_eq!(IndicatorSet::for_cursor(4, 7, 3).active, 1);
        assert_eq!(IndicatorSet::for_cursor(0, 0, 3).count, 0);
        assert_eq!(IndicatorSet::target_for(2, 3), 6);
    }
}
