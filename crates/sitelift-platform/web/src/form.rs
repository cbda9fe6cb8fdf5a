//! Contact form wiring: value markers, inline validation and the simulated send.

use crate::dom::{focus, listen, query_all_in, query_document, query_in, remove_class, toggle_class};
use crate::timers::set_timeout;
use sitelift_ui::form::has_value;
use sitelift_ui::{ContactField, ContactForm, FieldState, FormHint, HintKind, SubmitOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement, Window};

const FORM_SELECTOR: &str = ".contact-form";
const FIELD_WRAPPER_SELECTOR: &str = ".form-field";
const FIELD_INPUT_SELECTOR: &str = ".form-field .input";
const HINT_SELECTOR: &str = ".form-hint";
const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";

fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn clear_value(element: &Element) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value("");
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value("");
    }
}

struct FormBinding {
    window: Window,
    hint: Option<Element>,
    submit: Option<HtmlButtonElement>,
    fields: Vec<(ContactField, Element)>,
    state: RefCell<ContactForm>,
    submit_label: RefCell<Option<String>>,
}

impl FormBinding {
    fn element(&self, field: ContactField) -> Option<&Element> {
        self.fields
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, element)| element)
    }

    fn validate(&self, field: ContactField, element: &Element) -> FieldState {
        let state = field.validate(&field_value(element));
        toggle_class(element, "invalid", state.has_invalid_class());
        toggle_class(element, "valid", state.has_valid_class());
        state
    }

    fn set_hint(&self, hint: FormHint) {
        let Some(element) = &self.hint else {
            return;
        };
        element.set_text_content(Some(hint.text));
        for kind in HintKind::ALL {
            remove_class(element, kind.class_name());
        }
        if let Some(kind) = hint.kind {
            toggle_class(element, kind.class_name(), true);
        }
    }

    fn on_submit(self: &Rc<Self>) {
        for (field, element) in &self.fields {
            self.validate(*field, element);
        }

        let outcome = self
            .state
            .borrow_mut()
            .submit(|field| self.element(field).map(field_value));

        match outcome {
            SubmitOutcome::Busy => {}
            SubmitOutcome::Rejected { first_invalid } => {
                self.set_hint(FormHint::INCOMPLETE);
                if let Some(element) = first_invalid.and_then(|field| self.element(field)) {
                    focus(element);
                }
            }
            SubmitOutcome::Sending => {
                self.set_hint(FormHint::SENDING);
                if let Some(button) = &self.submit {
                    button.set_disabled(true);
                    *self.submit_label.borrow_mut() = Some(button.inner_html());
                    button.set_inner_html(ContactForm::SENDING_BUTTON_HTML);
                }
                let binding = self.clone();
                let scheduled = set_timeout(&self.window, ContactForm::SEND_DELAY, move || {
                    binding.on_sent();
                });
                if let Err(err) = scheduled {
                    log::warn!("contact form completion not scheduled: {err:?}");
                    self.on_sent();
                }
            }
        }
    }

    fn on_sent(&self) {
        let hint = self.state.borrow_mut().complete();
        self.set_hint(hint);
        if let Some(button) = &self.submit {
            button.set_disabled(false);
            if let Some(label) = self.submit_label.borrow_mut().take() {
                button.set_inner_html(&label);
            }
        }
        if let Some(message) = self.element(ContactField::Message) {
            clear_value(message);
        }
        for (_, element) in &self.fields {
            remove_class(element, "valid");
            remove_class(element, "invalid");
        }
    }
}

fn wire_value_markers(form: &Element) -> Result<(), JsValue> {
    for input in query_all_in(form, FIELD_INPUT_SELECTOR) {
        let Some(wrapper) = input.closest(FIELD_WRAPPER_SELECTOR).ok().flatten() else {
            continue;
        };
        let update = {
            let input = input.clone();
            move || toggle_class(&wrapper, "has-value", has_value(&field_value(&input)))
        };
        update();
        let on_input = update.clone();
        listen(&input, "input", move |_: Event| on_input())?;
        listen(&input, "change", move |_: Event| update())?;
    }
    Ok(())
}

/// Wires `.contact-form`. Returns `false` when the page has no form.
pub fn mount_contact_form(window: &Window, document: &Document) -> bool {
    let Some(form) = query_document(document, FORM_SELECTOR) else {
        return false;
    };

    let fields = ContactField::VALIDATED
        .into_iter()
        .filter_map(|field| {
            query_in(&form, &format!("#{}", field.element_id())).map(|element| (field, element))
        })
        .collect();
    let binding = Rc::new(FormBinding {
        window: window.clone(),
        hint: query_in(&form, HINT_SELECTOR),
        submit: query_in(&form, SUBMIT_SELECTOR)
            .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok()),
        fields,
        state: RefCell::new(ContactForm::new()),
        submit_label: RefCell::new(None),
    });

    let wired = wire_value_markers(&form).and_then(|()| {
        for (field, element) in &binding.fields {
            for event_type in ["blur", "input"] {
                let handler = binding.clone();
                let (field, target) = (*field, element.clone());
                listen(element, event_type, move |_: Event| {
                    handler.validate(field, &target);
                })?;
            }
        }

        let handler = binding.clone();
        listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            handler.on_submit();
        })
    });

    if let Err(err) = wired {
        log::warn!("contact form partially wired: {err:?}");
    }
    true
}
