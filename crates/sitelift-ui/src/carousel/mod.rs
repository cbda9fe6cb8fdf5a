//! Carousel controller.
//!
//! # Overview
//! One [`CarouselController`] per named slider region. It owns the cursor
//! (index of the leftmost visible slide) and the optional drag session, and
//! keeps the page consistent with them through a [`CarouselSurface`]:
//! - **Commands**: [`go_to`](CarouselController::go_to), `next`, `previous`,
//!   `select_indicator`
//! - **Gestures**: [`on_pointer`](CarouselController::on_pointer) dispatches
//!   a [`PointerEvent`] by phase to `on_drag_start` / `on_drag_move` /
//!   `on_drag_end`, or to `on_drag_cancel` for blur and touch cancellation
//! - **Environment**: `on_resize`, and the auto-advance gates
//!
//! # Settling
//! Every command settles a *target* index against
//! `max_cursor = max(0, slides - visible)`: targets past the end wrap to 0 and
//! targets before the start wrap to `max_cursor`. The viewport bucket is always
//! recomputed before settling, so the invariant
//! `0 <= cursor <= max_cursor` holds after every render.

mod auto_advance;
mod frame;
mod options;
mod surface;

pub use auto_advance::{AutoAdvance, AutoAdvanceGates, DisabledAutoAdvance};
pub use frame::{CarouselFrame, IndicatorSet, SlideMetrics, TrackOffset};
pub use options::{CarouselOptions, OffsetMode};
pub use surface::CarouselSurface;

use sitelift_foundation::{DragOutcome, DragSession, Point, PointerEvent, PointerPhase, ViewportBucket};

/// Settles a requested cursor against the slide count and visible count.
///
/// Past the end restarts at 0, before the start jumps to the last valid
/// cursor. When every slide fits (`slides <= visible`) the only valid cursor
/// is 0.
pub fn settle_cursor(target: isize, slide_count: usize, visible: usize) -> usize {
    let max_cursor = slide_count.saturating_sub(visible);
    if target < 0 {
        max_cursor
    } else if target as usize > max_cursor {
        0
    } else {
        target as usize
    }
}

/// Cursor, drag and auto-advance state for a single carousel instance.
pub struct CarouselController<S: CarouselSurface> {
    namespace: String,
    slide_count: usize,
    options: CarouselOptions,
    surface: S,
    bucket: ViewportBucket,
    /// Last measured slide pitch, tracked only for measured offsets.
    measured_pitch: Option<f32>,
    cursor: usize,
    frame: Option<CarouselFrame>,
    drag: Option<DragSession>,
    gates: AutoAdvanceGates,
    auto_advance: Box<dyn AutoAdvance>,
    auto_advance_running: bool,
    render_count: u64,
}

impl<S: CarouselSurface> CarouselController<S> {
    /// Binds a controller to `surface` and performs the first render.
    ///
    /// Returns `None` for an empty slide list: the carousel stays inert and
    /// the page keeps its static layout.
    pub fn initialize(
        namespace: impl Into<String>,
        slide_count: usize,
        options: CarouselOptions,
        surface: S,
    ) -> Option<Self> {
        let namespace = namespace.into();
        if slide_count == 0 {
            log::debug!("carousel `{namespace}` has no slides; leaving it inert");
            return None;
        }

        let bucket = ViewportBucket::for_width(surface.viewport_width());
        let gates = AutoAdvanceGates::new(options.visibility_threshold.is_none());
        let mut controller = Self {
            namespace,
            slide_count,
            options,
            surface,
            bucket,
            measured_pitch: None,
            cursor: 0,
            frame: None,
            drag: None,
            gates,
            auto_advance: Box::new(DisabledAutoAdvance),
            auto_advance_running: false,
            render_count: 0,
        };
        controller.render(0);
        controller.refresh_auto_advance();
        log::debug!(
            "carousel `{}` bound: {} slides, {} visible",
            controller.namespace,
            controller.slide_count,
            controller.visible_count()
        );
        Some(controller)
    }

    /// Replaces the auto-advance strategy, stopping the previous one.
    pub fn with_auto_advance(mut self, strategy: Box<dyn AutoAdvance>) -> Self {
        if self.auto_advance_running {
            self.auto_advance.stop();
            self.auto_advance_running = false;
        }
        self.auto_advance = strategy;
        self.refresh_auto_advance();
        self
    }

    /// Namespace this controller was bound under.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Number of slides, fixed at initialization.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Options resolved at initialization.
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Index of the leftmost visible slide.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Slides visible at once for the last observed viewport.
    pub fn visible_count(&self) -> usize {
        self.bucket.visible_count()
    }

    /// Largest valid cursor for the current viewport.
    pub fn max_cursor(&self) -> usize {
        self.slide_count.saturating_sub(self.visible_count())
    }

    /// Number of indicator pages for the current viewport.
    pub fn page_count(&self) -> usize {
        self.slide_count.div_ceil(self.visible_count())
    }

    /// The last rendered frame.
    pub fn frame(&self) -> Option<&CarouselFrame> {
        self.frame.as_ref()
    }

    /// How many settled renders have been applied.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Whether a drag session is open.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Current auto-advance gates.
    pub fn gates(&self) -> AutoAdvanceGates {
        self.gates
    }

    /// Whether the auto-advance strategy has been started and not stopped.
    pub fn is_auto_advance_running(&self) -> bool {
        self.auto_advance_running
    }

    /// The surface the controller renders into.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to feed new geometry in tests.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Moves to `target`, wrapping past either end, and re-renders.
    pub fn go_to(&mut self, target: isize) {
        self.render(target);
    }

    /// Shows the next slide, restarting at 0 after the last valid cursor.
    pub fn next(&mut self) {
        self.go_to(self.cursor as isize + 1);
        self.restart_auto_advance();
    }

    /// Shows the previous slide, jumping to the last valid cursor from 0.
    pub fn previous(&mut self) {
        self.go_to(self.cursor as isize - 1);
        self.restart_auto_advance();
    }

    /// Jumps to the first slide of indicator page `page`.
    pub fn select_indicator(&mut self, page: usize) {
        let target = IndicatorSet::target_for(page, self.visible_count());
        self.go_to(target);
        self.restart_auto_advance();
    }

    /// Reacts to a viewport resize.
    ///
    /// An open drag is abandoned first. Re-renders when the bucket changed,
    /// when the measured slide pitch changed, or when a drag was abandoned
    /// and the track has to snap back.
    pub fn on_resize(&mut self) -> bool {
        let abandoned = self.abandon_drag();
        let bucket = ViewportBucket::for_width(self.surface.viewport_width());
        let bucket_changed = bucket != self.bucket;
        let pitch_changed = match self.options.offset {
            OffsetMode::Measured => {
                // Slides are measured under the bucket they will render in.
                self.surface.publish_visible_count(bucket.visible_count());
                Some(self.surface.slide_metrics().pitch()) != self.measured_pitch
            }
            OffsetMode::Percent => false,
        };

        if bucket_changed || pitch_changed || abandoned {
            if bucket_changed {
                log::debug!(
                    "carousel `{}`: viewport bucket {:?} -> {:?}",
                    self.namespace,
                    self.bucket,
                    bucket
                );
            }
            self.render(self.cursor as isize);
            true
        } else {
            false
        }
    }

    /// Feeds one pointer sample from a mouse or touch source.
    pub fn on_pointer(&mut self, event: PointerEvent) {
        match event.phase {
            PointerPhase::Start => self.on_drag_start(event.position),
            PointerPhase::Move => self.on_drag_move(event.position),
            PointerPhase::End => self.on_drag_end(),
            PointerPhase::Cancel => self.on_drag_cancel(),
        }
    }

    /// Opens a drag session at `position` and freezes track transitions.
    pub fn on_drag_start(&mut self, position: Point) {
        self.drag = Some(DragSession::begin(position));
        self.surface.set_transitions_enabled(false);
        self.gates.dragging = true;
        self.refresh_auto_advance();
    }

    /// Follows the pointer while a drag session is open.
    pub fn on_drag_move(&mut self, position: Point) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        let delta = session.update(position);
        if let Some(frame) = &self.frame {
            self.surface.preview_drag(frame.offset, delta);
        }
    }

    /// Closes the drag session, committing one step if it crossed the
    /// threshold and snapping back otherwise.
    pub fn on_drag_end(&mut self) {
        let Some(session) = self.drag.take() else {
            return;
        };
        let outcome = session.finish();
        log::trace!(
            "carousel `{}`: drag released at {}px -> {:?}",
            self.namespace,
            session.delta(),
            outcome
        );
        self.settle_drag(outcome);
    }

    /// Treats an interrupted pointer session as a zero-delta release.
    pub fn on_drag_cancel(&mut self) {
        if self.abandon_drag() {
            self.render(self.cursor as isize);
        }
    }

    /// Pointer entered or left the carousel root.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.gates.hovered = hovered;
        self.refresh_auto_advance();
    }

    /// Document visibility changed.
    pub fn set_document_hidden(&mut self, hidden: bool) {
        self.gates.document_hidden = hidden;
        self.refresh_auto_advance();
    }

    /// Carousel started or stopped intersecting the viewport.
    pub fn set_in_view(&mut self, in_view: bool) {
        self.gates.in_view = in_view;
        self.refresh_auto_advance();
    }

    fn settle_drag(&mut self, outcome: DragOutcome) {
        self.surface.set_transitions_enabled(true);
        self.gates.dragging = false;
        let target = match outcome {
            DragOutcome::Advance => self.cursor as isize + 1,
            DragOutcome::Retreat => self.cursor as isize - 1,
            DragOutcome::SnapBack => self.cursor as isize,
        };
        self.render(target);
        self.refresh_auto_advance();
    }

    /// Drops an open drag session without committing it.
    fn abandon_drag(&mut self) -> bool {
        let Some(session) = self.drag.take() else {
            return false;
        };
        let _ = session.abandon();
        self.surface.set_transitions_enabled(true);
        self.gates.dragging = false;
        self.refresh_auto_advance();
        true
    }

    fn render(&mut self, target: isize) {
        self.bucket = ViewportBucket::for_width(self.surface.viewport_width());
        let visible = self.bucket.visible_count();
        self.cursor = settle_cursor(target, self.slide_count, visible);
        self.surface.publish_visible_count(visible);

        let offset = match self.options.offset {
            OffsetMode::Percent => TrackOffset::percent(self.cursor, self.slide_count, visible),
            OffsetMode::Measured => {
                let metrics = self.surface.slide_metrics();
                self.measured_pitch = Some(metrics.pitch());
                TrackOffset::pixels(self.cursor, metrics)
            }
        };

        let frame = CarouselFrame {
            cursor: self.cursor,
            visible_count: visible,
            offset,
            active: self.cursor..(self.cursor + visible).min(self.slide_count),
            indicators: IndicatorSet::for_cursor(self.cursor, self.slide_count, visible),
        };
        log::trace!(
            "carousel `{}`: render cursor={} visible={} offset={:?}",
            self.namespace,
            frame.cursor,
            frame.visible_count,
            frame.offset
        );
        self.surface.apply_frame(&frame);
        self.frame = Some(frame);
        self.render_count += 1;
    }

    fn refresh_auto_advance(&mut self) {
        let open = self.gates.is_open();
        if open && !self.auto_advance_running {
            self.auto_advance.start();
            self.auto_advance_running = true;
        } else if !open && self.auto_advance_running {
            self.auto_advance.stop();
            self.auto_advance_running = false;
        }
    }

    /// Restarts a running strategy so a manual step resets its interval.
    fn restart_auto_advance(&mut self) {
        if self.auto_advance_running {
            self.auto_advance.stop();
            self.auto_advance.start();
        }
    }
}

impl<S: CarouselSurface> std::fmt::Debug for CarouselController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("namespace", &self.namespace)
            .field("slide_count", &self.slide_count)
            .field("cursor", &self.cursor)
            .field("bucket", &self.bucket)
            .field("dragging", &self.drag.is_some())
            .field("gates", &self.gates)
            .finish()
    }
}
