//! Modal dialog wiring.

use crate::dom::{add_class, focus, listen, query_all_document, query_all_in, query_in, remove_class};
use sitelift_ui::modal::{FOCUSABLE_SELECTOR, MODAL_CLOSE_SELECTOR};
use sitelift_ui::ModalState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, KeyboardEvent};

struct ModalBinding {
    document: Document,
    dialog: Element,
    state: RefCell<ModalState<Element>>,
}

impl ModalBinding {
    fn sync_attributes(&self, open: bool) {
        let state = self.state.borrow();
        let _ = self.dialog.set_attribute("aria-hidden", state.aria_hidden());
        if let Some(body) = self.document.body() {
            let style = body.style();
            let _ = if open {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(|_| ())
            };
        }
    }

    fn open(&self) {
        let opened = self
            .state
            .borrow_mut()
            .open(self.document.active_element());
        if !opened {
            return;
        }
        add_class(&self.dialog, "open");
        self.sync_attributes(true);
        if let Some(target) = query_in(&self.dialog, MODAL_CLOSE_SELECTOR)
            .or_else(|| query_in(&self.dialog, FOCUSABLE_SELECTOR))
        {
            focus(&target);
        }
    }

    fn close(&self) {
        let Some(dismissal) = self.state.borrow_mut().close() else {
            return;
        };
        remove_class(&self.dialog, "open");
        self.sync_attributes(false);
        if let Some(previous) = dismissal.return_focus {
            focus(&previous);
        }
    }
}

/// Wires `#{name}-modal` to its `[data-modal]` triggers and `[data-close]`
/// buttons. Returns `false` when the dialog or every trigger is missing.
pub fn mount_modal(document: &Document, name: &str) -> bool {
    let state: ModalState<Element> = ModalState::new(name);
    let Some(dialog) = document.get_element_by_id(&state.element_id()) else {
        log::debug!("modal `{name}` has no dialog");
        return false;
    };
    let triggers = query_all_document(document, &state.trigger_selector());
    if triggers.is_empty() {
        log::debug!("modal `{name}` has no triggers");
        return false;
    }
    let closers = query_all_in(&dialog, &state.close_selector());

    let binding = Rc::new(ModalBinding {
        document: document.clone(),
        dialog,
        state: RefCell::new(state),
    });

    let wired = (|| -> Result<(), JsValue> {
        for trigger in &triggers {
            let modal = binding.clone();
            listen(trigger, "click", move |event: Event| {
                event.prevent_default();
                modal.open();
            })?;
        }
        for closer in &closers {
            let modal = binding.clone();
            listen(closer, "click", move |_: Event| modal.close())?;
        }
        let modal = binding.clone();
        listen(document, "keydown", move |event: KeyboardEvent| {
            let closes = modal.state.borrow().closes_on_key(&event.key());
            if closes {
                modal.close();
            }
        })
    })();

    if let Err(err) = wired {
        log::warn!("modal `{name}` partially wired: {err:?}");
    }
    true
}
