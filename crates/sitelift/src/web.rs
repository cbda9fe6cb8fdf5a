//! Web runtime for Sitelift pages.
//!
//! Installs console logging and mounts every configured behavior once the
//! document has been parsed.

use crate::launcher::{parse_log_level, SiteSettings};
use sitelift_platform_web::{
    mount_anchor_scrolling, mount_carousel, mount_contact_form, mount_mobile_menu, mount_modal,
    mount_reveal,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

const LOG_QUERY_KEY: &str = "sitelift-log";

fn log_level_override(window: &Window) -> Option<log::Level> {
    let search = window.location().search().ok()?;
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == LOG_QUERY_KEY)
        .and_then(|(_, value)| parse_log_level(value))
}

fn mount_all(window: &Window, document: &Document, settings: &SiteSettings) {
    let menu = mount_mobile_menu(document);
    let anchors = mount_anchor_scrolling(window, document, menu.clone(), &settings.anchor_hints);
    let form = mount_contact_form(window, document);

    let modals = settings
        .modals
        .iter()
        .filter(|name| mount_modal(document, name))
        .count();
    let reveals = settings
        .reveals
        .iter()
        .filter(|policy| mount_reveal(window, document, policy))
        .count();

    let mut carousels = 0;
    for spec in &settings.carousels {
        // Handlers keep the controller alive.
        if mount_carousel(window, document, &spec.namespace, &spec.options).is_some() {
            carousels += 1;
        }
    }

    log::info!(
        "sitelift mounted: menu={} anchors={anchors} form={form} modals={modals} reveals={reveals} carousels={carousels}",
        menu.is_some()
    );
}

/// Runs the configured page behaviors in the browser.
pub fn run(settings: SiteSettings) {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let level = log_level_override(&window).unwrap_or(settings.log_level);
    wasm_logger::init(wasm_logger::Config::new(level));

    let Some(document) = window.document() else {
        log::error!("no document; nothing to enhance");
        return;
    };

    if document.ready_state() != "loading" {
        mount_all(&window, &document, &settings);
        return;
    }

    let target = document.clone();
    let on_ready = Closure::once_into_js(move || mount_all(&window, &target, &settings));
    if let Err(err) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        log::error!("failed to defer mounting: {err:?}");
    }
}
