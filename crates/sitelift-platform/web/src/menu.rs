//! Mobile navigation drawer wiring.

use crate::dom::{listen, query_document, toggle_class};
use sitelift_ui::{MenuMarkup, MenuState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event};

const TOGGLE_SELECTOR: &str = ".mobile-toggle";
const PANEL_SELECTOR: &str = ".mobile-menu";
const OPEN_CLASS: &str = "open";

/// The mounted drawer. In-page navigation closes it through [`MenuHandle::close`].
#[derive(Debug)]
pub struct MenuHandle {
    state: RefCell<MenuState>,
    toggle: Option<Element>,
    panel: Element,
}

impl MenuHandle {
    fn sync(&self) {
        let state = *self.state.borrow();
        toggle_class(&self.panel, OPEN_CLASS, state.is_open());
        if let Some(toggle) = &self.toggle {
            let _ = toggle.set_attribute("aria-expanded", state.aria_expanded());
        }
    }

    pub fn toggle(&self) {
        self.state.borrow_mut().toggle();
        self.sync();
    }

    pub fn close(&self) {
        self.state.borrow_mut().close();
        self.sync();
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }
}

/// Wires `.mobile-toggle` to `.mobile-menu`.
///
/// `None` without a panel. A panel without a toggle is still returned so
/// in-page navigation can close it.
pub fn mount_mobile_menu(document: &Document) -> Option<Rc<MenuHandle>> {
    let toggle = query_document(document, TOGGLE_SELECTOR);
    let panel = query_document(document, PANEL_SELECTOR);
    let markup = MenuMarkup::from_parts(toggle.is_some(), panel.is_some());
    if !markup.is_closable() {
        return None;
    }
    let handle = Rc::new(MenuHandle {
        state: RefCell::new(MenuState::new()),
        toggle,
        panel: panel?,
    });
    if !markup.is_toggleable() {
        log::debug!("mobile menu has no toggle; only navigation closes it");
        return Some(handle);
    }

    let menu = handle.clone();
    let wired: Result<(), JsValue> = match &handle.toggle {
        Some(toggle) => listen(toggle, "click", move |_: Event| {
            menu.toggle();
        }),
        None => Ok(()),
    };
    if let Err(err) = wired {
        log::warn!("mobile menu toggle not wired: {err:?}");
    }
    Some(handle)
}
