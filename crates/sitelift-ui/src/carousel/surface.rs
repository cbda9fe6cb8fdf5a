//! The seam between the carousel controller and the page.

use super::frame::{CarouselFrame, SlideMetrics, TrackOffset};

/// Read-only geometry inputs plus the styling side effects of a carousel.
///
/// Implementations own the DOM handles (or a recording of them in tests).
/// They write only what they are told: the track transform, the visible-count
/// custom property, slide active markers and the indicator buttons.
///
/// The controller publishes the visible count before it reads
/// [`slide_metrics`](CarouselSurface::slide_metrics), because page styles may
/// size slides from it.
pub trait CarouselSurface {
    /// Current viewport width in CSS pixels.
    fn viewport_width(&self) -> f32;

    /// Width of a slide and the track gap. Only queried for measured offsets.
    fn slide_metrics(&self) -> SlideMetrics;

    /// Exposes the number of slides visible at once to the page styles.
    fn publish_visible_count(&mut self, visible: usize);

    /// Brings the page in line with a settled frame.
    fn apply_frame(&mut self, frame: &CarouselFrame);

    /// Shows the track following the pointer, `delta_px` from `offset`.
    fn preview_drag(&mut self, offset: TrackOffset, delta_px: f32);

    /// Enables or suppresses the CSS transition on the track.
    fn set_transitions_enabled(&mut self, enabled: bool);
}
