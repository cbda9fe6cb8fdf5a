//! Headless stand-ins for the browser collaborators.

use sitelift_ui::{AutoAdvance, CarouselFrame, CarouselSurface, SlideMetrics, TrackOffset};
use std::cell::Cell;
use std::rc::Rc;

/// A [`CarouselSurface`] that records what it is told instead of touching a DOM.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    viewport_width: f32,
    metrics: SlideMetrics,
    fluid_gap: Option<f32>,
    published_visible: Option<usize>,
    frames: Vec<CarouselFrame>,
    previews: Vec<(TrackOffset, f32)>,
    transitions_enabled: bool,
    transition_toggles: usize,
}

impl RecordingSurface {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            viewport_width,
            metrics: SlideMetrics::new(320.0, 24.0),
            fluid_gap: None,
            published_visible: None,
            frames: Vec::new(),
            previews: Vec::new(),
            transitions_enabled: true,
            transition_toggles: 0,
        }
    }

    pub fn with_metrics(mut self, metrics: SlideMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Sizes slides like a stylesheet reading the visible-count property:
    /// `(viewport - (visible - 1) * gap) / visible`, using the last published
    /// count (1 before anything was published).
    pub fn with_fluid_slides(mut self, gap: f32) -> Self {
        self.fluid_gap = Some(gap);
        self
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    pub fn set_metrics(&mut self, metrics: SlideMetrics) {
        self.metrics = metrics;
    }

    /// The last visible count the controller published.
    pub fn published_visible(&self) -> Option<usize> {
        self.published_visible
    }

    /// Every frame applied so far, oldest first.
    pub fn frames(&self) -> &[CarouselFrame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&CarouselFrame> {
        self.frames.last()
    }

    /// Drag previews since the last settled frame.
    pub fn previews(&self) -> &[(TrackOffset, f32)] {
        &self.previews
    }

    /// The transform currently on the track: the last preview if a drag is
    /// showing, otherwise the last settled frame.
    pub fn track_transform(&self) -> Option<String> {
        if let Some((offset, delta)) = self.previews.last() {
            return Some(offset.css_transform_with_drag(*delta));
        }
        self.frames.last().map(|frame| frame.offset.css_transform())
    }

    pub fn transitions_enabled(&self) -> bool {
        self.transitions_enabled
    }

    pub fn transition_toggles(&self) -> usize {
        self.transition_toggles
    }
}

impl CarouselSurface for RecordingSurface {
    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn slide_metrics(&self) -> SlideMetrics {
        let Some(gap) = self.fluid_gap else {
            return self.metrics;
        };
        let visible = self.published_visible.unwrap_or(1).max(1) as f32;
        SlideMetrics::new(
            (self.viewport_width - (visible - 1.0) * gap) / visible,
            gap,
        )
    }

    fn publish_visible_count(&mut self, visible: usize) {
        self.published_visible = Some(visible);
    }

    fn apply_frame(&mut self, frame: &CarouselFrame) {
        self.previews.clear();
        self.frames.push(frame.clone());
    }

    fn preview_drag(&mut self, offset: TrackOffset, delta_px: f32) {
        self.previews.push((offset, delta_px));
    }

    fn set_transitions_enabled(&mut self, enabled: bool) {
        if self.transitions_enabled != enabled {
            self.transition_toggles += 1;
        }
        self.transitions_enabled = enabled;
    }
}

/// Counts start/stop calls of an auto-advance strategy.
///
/// Clone the probe before boxing it; the clones share counters.
#[derive(Clone, Debug, Default)]
pub struct AutoAdvanceProbe {
    starts: Rc<Cell<usize>>,
    stops: Rc<Cell<usize>>,
}

impl AutoAdvanceProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starts(&self) -> usize {
        self.starts.get()
    }

    pub fn stops(&self) -> usize {
        self.stops.get()
    }

    /// Whether the last call was `start`.
    pub fn is_running(&self) -> bool {
        self.starts.get() > self.stops.get()
    }
}

impl AutoAdvance for AutoAdvanceProbe {
    fn start(&mut self) {
        self.starts.set(self.starts.get() + 1);
    }

    fn stop(&mut self) {
        self.stops.set(self.stops.get() + 1);
    }
}
