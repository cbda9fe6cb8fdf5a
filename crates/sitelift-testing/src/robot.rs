//! Robot-style driver for carousel scenarios.
//!
//! Mirrors how a user interacts with a carousel: resize the window, click
//! arrows and dots, drag the track. Every step goes through the public
//! controller API, and [`CarouselRobot::snapshot`] captures what the page
//! would show.

use crate::recording::RecordingSurface;
use sitelift_foundation::{Point, PointerEvent, PointerEventKind};
use sitelift_ui::{CarouselController, CarouselOptions, SlideMetrics, TrackOffset};

/// A carousel bound to a [`RecordingSurface`].
pub struct CarouselRobot {
    controller: CarouselController<RecordingSurface>,
}

impl CarouselRobot {
    /// Launches a percentage-offset carousel. Panics on zero slides.
    pub fn launch(slide_count: usize, viewport_width: f32) -> Self {
        Self::launch_with(slide_count, viewport_width, CarouselOptions::paged())
    }

    /// Launches with explicit options. Panics on zero slides.
    pub fn launch_with(slide_count: usize, viewport_width: f32, options: CarouselOptions) -> Self {
        Self::try_launch(
            slide_count,
            RecordingSurface::new(viewport_width),
            options,
        )
        .expect("carousel with slides should initialize")
    }

    /// Launches on a prepared surface; `None` when the carousel stays inert.
    pub fn try_launch(
        slide_count: usize,
        surface: RecordingSurface,
        options: CarouselOptions,
    ) -> Option<Self> {
        CarouselController::initialize("robot", slide_count, options, surface)
            .map(|controller| Self { controller })
    }

    /// Wraps an already initialized controller, e.g. one with a custom
    /// auto-advance strategy.
    pub fn from_controller(controller: CarouselController<RecordingSurface>) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &CarouselController<RecordingSurface> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CarouselController<RecordingSurface> {
        &mut self.controller
    }

    pub fn surface(&self) -> &RecordingSurface {
        self.controller.surface()
    }

    /// Changes the window width and dispatches a resize. Returns whether the
    /// carousel re-rendered.
    pub fn resize(&mut self, width: f32) -> bool {
        self.controller.surface_mut().set_viewport_width(width);
        self.controller.on_resize()
    }

    /// Changes slide geometry without a resize event.
    pub fn set_slide_metrics(&mut self, metrics: SlideMetrics) {
        self.controller.surface_mut().set_metrics(metrics);
    }

    pub fn click_next(&mut self) {
        self.controller.next();
    }

    pub fn click_prev(&mut self) {
        self.controller.previous();
    }

    pub fn click_indicator(&mut self, page: usize) {
        self.controller.select_indicator(page);
    }

    /// Dispatches a raw pointer sample, as the web adapter does.
    pub fn pointer(&mut self, kind: PointerEventKind, x: f32) {
        self.controller
            .on_pointer(PointerEvent::new(kind, Point::new(x, 0.0)));
    }

    pub fn press(&mut self, x: f32) {
        self.pointer(PointerEventKind::Down, x);
    }

    pub fn move_pointer(&mut self, x: f32) {
        self.pointer(PointerEventKind::Move, x);
    }

    pub fn release(&mut self) {
        self.controller
            .on_pointer(PointerEvent::without_position(PointerEventKind::Up));
    }

    pub fn cancel(&mut self) {
        self.controller
            .on_pointer(PointerEvent::without_position(PointerEventKind::Cancel));
    }

    /// Press at `from`, move to `to`, release.
    pub fn drag(&mut self, from: f32, to: f32) {
        self.press(from);
        self.move_pointer(to);
        self.release();
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        let frame = self
            .controller
            .frame()
            .expect("initialized carousel always has a frame");
        CarouselSnapshot {
            cursor: frame.cursor,
            visible_count: frame.visible_count,
            offset: frame.offset,
            active_slides: (0..self.controller.slide_count())
                .filter(|&index| frame.is_slide_active(index))
                .collect(),
            indicator_count: frame.indicators.count,
            active_indicator: frame.indicators.active,
            render_count: self.controller.render_count(),
            transform: self.surface().track_transform().unwrap_or_default(),
        }
    }
}

/// What the page shows after the last render.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselSnapshot {
    pub cursor: usize,
    pub visible_count: usize,
    pub offset: TrackOffset,
    pub active_slides: Vec<usize>,
    pub indicator_count: usize,
    pub active_indicator: usize,
    pub render_count: u64,
    pub transform: String,
}
