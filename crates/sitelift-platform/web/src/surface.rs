//! `CarouselSurface` backed by the live DOM.

use crate::binding::BoundCarousel;
use crate::dom::{parse_css_px, toggle_class};
use sitelift_ui::{CarouselFrame, CarouselSurface, SlideMetrics, TrackOffset};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

/// Writes carousel frames into the bound elements.
///
/// The only DOM writes are the root's visible-count property, the track's
/// `transform`/`transition`, slide active classes and the indicator buttons.
/// The property is written before slides are measured, so
/// `getBoundingClientRect` sees the layout of the new bucket.
pub struct WebCarouselSurface {
    window: Window,
    document: Document,
    bound: Rc<BoundCarousel>,
    publishes_visible_count: bool,
}

impl WebCarouselSurface {
    pub fn new(
        window: Window,
        document: Document,
        bound: Rc<BoundCarousel>,
        publish_visible_count: bool,
    ) -> Self {
        Self {
            window,
            document,
            bound,
            publishes_visible_count: publish_visible_count,
        }
    }

    pub fn bound(&self) -> &BoundCarousel {
        &self.bound
    }

    fn rebuild_indicators(&self, container: &Element, frame: &CarouselFrame) -> Result<(), JsValue> {
        let selectors = &self.bound.selectors;
        container.set_inner_html("");
        for page in 0..frame.indicators.count {
            let button = self.document.create_element("button")?;
            if page == frame.indicators.active {
                button.set_class_name(&format!("{} active", selectors.indicator_class));
            } else {
                button.set_class_name(&selectors.indicator_class);
            }
            button.set_attribute("aria-label", &format!("Go to slide {}", page + 1))?;
            button.set_attribute("data-index", &page.to_string())?;
            container.append_child(&button)?;
        }
        Ok(())
    }

    fn write_frame(&self, frame: &CarouselFrame) -> Result<(), JsValue> {
        let bound = &self.bound;
        bound
            .track
            .style()
            .set_property("transform", &frame.offset.css_transform())?;

        for (index, slide) in bound.slides.iter().enumerate() {
            toggle_class(slide, &bound.selectors.active_class, frame.is_slide_active(index));
        }

        if let Some(container) = &bound.indicators {
            self.rebuild_indicators(container, frame)?;
        }
        Ok(())
    }
}

impl CarouselSurface for WebCarouselSurface {
    fn viewport_width(&self) -> f32 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0) as f32
    }

    fn slide_metrics(&self) -> SlideMetrics {
        let width = self
            .bound
            .slides
            .first()
            .map(|slide| slide.get_bounding_client_rect().width() as f32)
            .unwrap_or(0.0);
        let gap = self
            .window
            .get_computed_style(&self.bound.track)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("gap").ok())
            .map(|value| parse_css_px(&value))
            .unwrap_or(0.0);
        SlideMetrics::new(width, gap)
    }

    fn publish_visible_count(&mut self, visible: usize) {
        if !self.publishes_visible_count {
            return;
        }
        let bound = &self.bound;
        if let Err(err) = bound
            .root
            .style()
            .set_property(&bound.selectors.visible_property, &visible.to_string())
        {
            log::warn!("visible count not published: {err:?}");
        }
    }

    fn apply_frame(&mut self, frame: &CarouselFrame) {
        if let Err(err) = self.write_frame(frame) {
            log::warn!("carousel render rejected by the page: {err:?}");
        }
    }

    fn preview_drag(&mut self, offset: TrackOffset, delta_px: f32) {
        let _ = self
            .bound
            .track
            .style()
            .set_property("transform", &offset.css_transform_with_drag(delta_px));
    }

    fn set_transitions_enabled(&mut self, enabled: bool) {
        let style = self.bound.track.style();
        let _ = if enabled {
            style.remove_property("transition").map(|_| ())
        } else {
            style.set_property("transition", "none")
        };
    }
}
