//! Reveal-on-scroll wiring.

use crate::dom::{add_class, query_document};
use sitelift_ui::reveal::REDUCED_MOTION_QUERY;
use sitelift_ui::{RevealAction, RevealPolicy, RevealStart, RevealState};
use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

fn observer_available(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Reveals the element matching `policy.selector`. Returns `false` when the
/// page has no such element.
pub fn mount_reveal(window: &Window, document: &Document, policy: &RevealPolicy) -> bool {
    let Some(element) = query_document(document, &policy.selector) else {
        return false;
    };

    match policy.start(prefers_reduced_motion(window), observer_available(window)) {
        RevealStart::Immediate => add_class(&element, &policy.class),
        RevealStart::Observe { threshold } => {
            if let Err(err) = observe(element.clone(), threshold, policy) {
                log::warn!("reveal for `{}` falling back: {err:?}", policy.selector);
                add_class(&element, &policy.class);
            }
        }
    }
    true
}

fn observe(element: Element, threshold: f64, policy: &RevealPolicy) -> Result<(), JsValue> {
    let state = Cell::new(RevealState::default());
    let class = policy.class.clone();
    let once = policy.once;
    let target = element.clone();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let mut current = state.get();
                let action = current.on_intersection(entry.is_intersecting(), once);
                state.set(current);
                match action {
                    RevealAction::None => {}
                    RevealAction::Reveal => add_class(&target, &class),
                    RevealAction::RevealAndUnobserve => {
                        add_class(&target, &class);
                        observer.unobserve(&target);
                    }
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(&element);
    callback.forget();
    Ok(())
}
