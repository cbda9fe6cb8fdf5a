//! Small helpers over `web-sys` lookups and listeners.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement};

/// First match of `selector` under `scope`. Invalid selectors count as no match.
pub(crate) fn query_in(scope: &Element, selector: &str) -> Option<Element> {
    scope.query_selector(selector).ok().flatten()
}

/// First match of `selector` in the document.
pub(crate) fn query_document(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// All matches of `selector` under `scope`, in document order.
pub(crate) fn query_all_in(scope: &Element, selector: &str) -> Vec<Element> {
    scope
        .query_selector_all(selector)
        .map(|list| collect_elements(&list))
        .unwrap_or_default()
}

/// All matches of `selector` in the document, in document order.
pub(crate) fn query_all_document(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| collect_elements(&list))
        .unwrap_or_default()
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn as_html(element: &Element) -> Option<HtmlElement> {
    element.clone().dyn_into::<HtmlElement>().ok()
}

pub(crate) fn toggle_class(element: &Element, class: &str, force: bool) {
    let _ = element.class_list().toggle_with_force(class, force);
}

pub(crate) fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub(crate) fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub(crate) fn focus(element: &Element) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}

/// Registers `handler` for `event_type` for the lifetime of the page.
///
/// Events that are not an `E` are dropped.
pub(crate) fn listen<E>(
    target: &EventTarget,
    event_type: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: JsCast + 'static,
{
    let closure = event_closure(handler);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], registered as a passive listener.
pub(crate) fn listen_passive<E>(
    target: &EventTarget,
    event_type: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: JsCast + 'static,
{
    let closure = event_closure(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event_type,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

fn event_closure<E>(mut handler: impl FnMut(E) + 'static) -> Closure<dyn FnMut(Event)>
where
    E: JsCast + 'static,
{
    Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    })
}

/// Leading CSS pixel number of a computed value, `parseFloat` style.
///
/// `"24px"` is 24, `"12.5px 8px"` is 12.5, and anything without a leading
/// number (`"normal"`, `""`) is 0.
pub fn parse_css_px(value: &str) -> f32 {
    let value = value.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (index, c) in value.char_indices() {
        match c {
            '+' | '-' if index == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = index + c.len_utf8();
    }
    if !seen_digit {
        return 0.0;
    }
    value[..end]
        .trim_end_matches('.')
        .parse::<f32>()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::parse_css_px;

    #[test]
    fn parses_leading_number() {
        assert_eq!(parse_css_px("24px"), 24.0);
        assert_eq!(parse_css_px("  12.5px 8px"), 12.5);
        assert_eq!(parse_css_px("0px"), 0.0);
        assert_eq!(parse_css_px(".5rem"), 0.5);
        assert_eq!(parse_css_px("16."), 16.0);
    }

    #[test]
    fn non_numeric_gap_is_zero() {
        assert_eq!(parse_css_px("normal"), 0.0);
        assert_eq!(parse_css_px(""), 0.0);
        assert_eq!(parse_css_px("-"), 0.0);
    }
}
