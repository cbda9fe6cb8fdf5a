//! Smooth scrolling for in-page links.

use crate::dom::{add_class, listen, query_all_document, query_document};
use crate::menu::MenuHandle;
use crate::timers::set_timeout;
use sitelift_ui::{AnchorHint, ScrollPlan};
use std::rc::Rc;
use web_sys::{
    Document, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]:not([data-modal])";

/// Wires every in-page link. Returns how many links were wired.
pub fn mount_anchor_scrolling(
    window: &Window,
    document: &Document,
    menu: Option<Rc<MenuHandle>>,
    hints: &[AnchorHint],
) -> usize {
    let hints: Rc<[AnchorHint]> = hints.into();
    let mut wired = 0;

    for anchor in query_all_document(document, ANCHOR_SELECTOR) {
        let link = anchor.clone();
        let window = window.clone();
        let document = document.clone();
        let menu = menu.clone();
        let hints = hints.clone();

        let result = listen(&anchor, "click", move |event: MouseEvent| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(plan) = ScrollPlan::for_href(&href, &hints) else {
                return;
            };
            let Some(target) = query_document(&document, plan.selector) else {
                return;
            };

            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);

            if plan.close_menu {
                if let Some(menu) = &menu {
                    menu.close();
                }
            }
            if let Some(hint) = plan.hint {
                let class = hint.class.clone();
                let target = target.clone();
                if let Err(err) = set_timeout(&window, hint.delay, move || add_class(&target, &class)) {
                    log::warn!("anchor hint for `{href}` not scheduled: {err:?}");
                }
            }
        });

        match result {
            Ok(()) => wired += 1,
            Err(err) => log::warn!("in-page link not wired: {err:?}"),
        }
    }
    log::debug!("wired {wired} in-page links");
    wired
}
