//! Modal dialog bookkeeping.
//!
//! Generic over the focus handle `F` so the browser layer can store the
//! previously focused element while tests store anything comparable.

/// Open state and focus restoration for one modal.
#[derive(Clone, Debug)]
pub struct ModalState<F> {
    name: String,
    open: bool,
    return_focus: Option<F>,
}

impl<F> ModalState<F> {
    /// A closed modal called `name` (bound to `#{name}-modal`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            open: false,
            return_focus: None,
        }
    }

    /// Modal name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the dialog element.
    pub fn element_id(&self) -> String {
        format!("{}-modal", self.name)
    }

    /// Selector for elements that open this modal.
    pub fn trigger_selector(&self) -> String {
        format!("[data-modal=\"{}\"]", self.name)
    }

    /// Selector for elements inside the modal that close it.
    pub fn close_selector(&self) -> String {
        format!("[data-close=\"{}\"]", self.name)
    }

    /// Whether the modal is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the modal, remembering what had focus. Returns `false` if it
    /// was already open (the first recorded focus is kept).
    pub fn open(&mut self, previously_focused: Option<F>) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.return_focus = previously_focused;
        true
    }

    /// Closes the modal. `None` if it was not open; otherwise the element
    /// to refocus, if one was recorded.
    pub fn close(&mut self) -> Option<Dismissal<F>> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(Dismissal {
            return_focus: self.return_focus.take(),
        })
    }

    /// Whether a key press should close the modal.
    pub fn closes_on_key(&self, key: &str) -> bool {
        self.open && key == "Escape"
    }

    /// Value for the dialog's `aria-hidden` attribute.
    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }
}

/// Result of closing an open modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dismissal<F> {
    /// Element that had focus before the modal opened.
    pub return_focus: Option<F>,
}

/// Focus target used when a modal opens: the close button if present,
/// otherwise the first focusable descendant.
pub const MODAL_CLOSE_SELECTOR: &str = ".modal-close";

/// Elements that can take focus inside a modal.
pub const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";
