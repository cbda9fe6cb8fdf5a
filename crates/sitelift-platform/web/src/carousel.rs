//! Browser event wiring for carousels.

use crate::binding::{resolve_carousel, BoundCarousel};
use crate::dom::{listen, listen_passive};
use crate::surface::WebCarouselSurface;
use sitelift_foundation::{Point, PointerEvent, PointerEventKind};
use sitelift_ui::{CarouselController, CarouselOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, TouchEvent, Window,
};

/// A mounted carousel, shared between its event handlers.
pub type SharedCarousel = Rc<RefCell<CarouselController<WebCarouselSurface>>>;

/// Binds and wires the carousel for `namespace`.
///
/// Returns `None`, after logging why, when the markup is missing.
pub fn mount_carousel(
    window: &Window,
    document: &Document,
    namespace: &str,
    options: &CarouselOptions,
) -> Option<SharedCarousel> {
    let bound = match resolve_carousel(document, namespace, options) {
        Ok(bound) => Rc::new(bound),
        Err(err) => {
            log::debug!("carousel `{namespace}` left inert: {err}");
            return None;
        }
    };

    let surface = WebCarouselSurface::new(
        window.clone(),
        document.clone(),
        bound.clone(),
        options.publish_visible_count,
    );
    let controller =
        CarouselController::initialize(namespace, bound.slides.len(), options.clone(), surface)?;
    let shared = Rc::new(RefCell::new(controller));

    if let Err(err) = wire(window, document, &bound, &shared, options) {
        log::warn!("carousel `{namespace}` partially wired: {err:?}");
    }
    Some(shared)
}

/// Runs `f` on the controller unless a handler further up the stack holds it.
fn with_controller(
    shared: &SharedCarousel,
    f: impl FnOnce(&mut CarouselController<WebCarouselSurface>),
) {
    match shared.try_borrow_mut() {
        Ok(mut controller) => f(&mut controller),
        Err(_) => log::trace!("carousel busy; dropping re-entrant event"),
    }
}

/// First touch point as a pointer sample. Touches ending or cancelled carry
/// no usable position.
fn touch_pointer(kind: PointerEventKind, event: &TouchEvent) -> Option<PointerEvent> {
    match kind {
        PointerEventKind::Down | PointerEventKind::Move => event.touches().get(0).map(|touch| {
            PointerEvent::new(
                kind,
                Point::new(touch.client_x() as f32, touch.client_y() as f32),
            )
        }),
        PointerEventKind::Up | PointerEventKind::Cancel => {
            Some(PointerEvent::without_position(kind))
        }
    }
}

fn mouse_pointer(kind: PointerEventKind, event: &MouseEvent) -> PointerEvent {
    PointerEvent::new(
        kind,
        Point::new(event.client_x() as f32, event.client_y() as f32),
    )
}

fn forward_mouse(
    target: &EventTarget,
    event_type: &str,
    kind: PointerEventKind,
    shared: &SharedCarousel,
) -> Result<(), JsValue> {
    let carousel = shared.clone();
    listen(target, event_type, move |event: MouseEvent| {
        let pointer = mouse_pointer(kind, &event);
        with_controller(&carousel, |c| c.on_pointer(pointer));
    })
}

fn forward_touch(
    target: &EventTarget,
    event_type: &str,
    kind: PointerEventKind,
    shared: &SharedCarousel,
) -> Result<(), JsValue> {
    let carousel = shared.clone();
    let handler = move |event: TouchEvent| {
        if let Some(pointer) = touch_pointer(kind, &event) {
            with_controller(&carousel, |c| c.on_pointer(pointer));
        }
    };
    match kind {
        PointerEventKind::Down | PointerEventKind::Move => {
            listen_passive(target, event_type, handler)
        }
        PointerEventKind::Up | PointerEventKind::Cancel => listen(target, event_type, handler),
    }
}

fn wire(
    window: &Window,
    document: &Document,
    bound: &BoundCarousel,
    shared: &SharedCarousel,
    options: &CarouselOptions,
) -> Result<(), JsValue> {
    wire_controls(bound, shared)?;
    wire_drag(window, bound, shared)?;

    let carousel = shared.clone();
    listen(&bound.root, "mouseenter", move |_: Event| {
        with_controller(&carousel, |c| c.set_hovered(true));
    })?;
    let carousel = shared.clone();
    listen(&bound.root, "mouseleave", move |_: Event| {
        with_controller(&carousel, |c| c.set_hovered(false));
    })?;

    let carousel = shared.clone();
    let doc = document.clone();
    listen(document, "visibilitychange", move |_: Event| {
        let hidden = doc.hidden();
        with_controller(&carousel, |c| c.set_document_hidden(hidden));
    })?;

    let carousel = shared.clone();
    listen(window, "resize", move |_: Event| {
        with_controller(&carousel, |c| {
            c.on_resize();
        });
    })?;

    if let Some(threshold) = options.visibility_threshold {
        let target: &Element = bound.section.as_ref().unwrap_or(bound.root.as_ref());
        observe_visibility(target, threshold, shared.clone())?;
    }
    Ok(())
}

fn wire_controls(bound: &BoundCarousel, shared: &SharedCarousel) -> Result<(), JsValue> {
    if let Some(prev) = &bound.prev {
        let carousel = shared.clone();
        listen(prev, "click", move |_: Event| {
            with_controller(&carousel, |c| c.previous());
        })?;
    }
    if let Some(next) = &bound.next {
        let carousel = shared.clone();
        listen(next, "click", move |_: Event| {
            with_controller(&carousel, |c| c.next());
        })?;
    }

    // Indicator buttons are rebuilt on every render, so clicks are delegated
    // to the container.
    if let Some(container) = &bound.indicators {
        let carousel = shared.clone();
        let button_selector = bound.selectors.indicator_button();
        listen(container, "click", move |event: Event| {
            let page = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest(&button_selector).ok().flatten())
                .and_then(|button| button.get_attribute("data-index"))
                .and_then(|index| index.parse::<usize>().ok());
            if let Some(page) = page {
                with_controller(&carousel, |c| c.select_indicator(page));
            }
        })?;
    }
    Ok(())
}

fn wire_drag(window: &Window, bound: &BoundCarousel, shared: &SharedCarousel) -> Result<(), JsValue> {
    forward_mouse(&bound.track, "mousedown", PointerEventKind::Down, shared)?;
    forward_mouse(window, "mousemove", PointerEventKind::Move, shared)?;
    forward_mouse(window, "mouseup", PointerEventKind::Up, shared)?;

    forward_touch(&bound.track, "touchstart", PointerEventKind::Down, shared)?;
    forward_touch(window, "touchmove", PointerEventKind::Move, shared)?;
    forward_touch(window, "touchend", PointerEventKind::Up, shared)?;
    forward_touch(window, "touchcancel", PointerEventKind::Cancel, shared)?;

    let carousel = shared.clone();
    listen(window, "blur", move |_: Event| {
        let pointer = PointerEvent::without_position(PointerEventKind::Cancel);
        with_controller(&carousel, |c| c.on_pointer(pointer));
    })?;
    Ok(())
}

fn observe_visibility(
    target: &Element,
    threshold: f64,
    shared: SharedCarousel,
) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    let in_view = entry.is_intersecting();
                    with_controller(&shared, |c| c.set_in_view(in_view));
                }
            }
        },
    );
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(target);
    callback.forget();
    Ok(())
}
