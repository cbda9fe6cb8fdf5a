//! Mobile navigation drawer.

/// Which parts of the drawer markup a page provides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuMarkup {
    /// Toggle button and panel.
    Complete,
    /// A panel without a toggle. Nothing opens it, but in-page navigation
    /// still closes it.
    PanelOnly,
    /// No panel; the menu stays inert.
    Absent,
}

impl MenuMarkup {
    pub fn from_parts(has_toggle: bool, has_panel: bool) -> Self {
        match (has_toggle, has_panel) {
            (_, false) => MenuMarkup::Absent,
            (true, true) => MenuMarkup::Complete,
            (false, true) => MenuMarkup::PanelOnly,
        }
    }

    /// Whether navigation can close the panel.
    pub fn is_closable(self) -> bool {
        self != MenuMarkup::Absent
    }

    /// Whether a click handler toggles the panel.
    pub fn is_toggleable(self) -> bool {
        self == MenuMarkup::Complete
    }
}

/// Open/closed bookkeeping for the mobile menu toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// A closed menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the drawer is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the drawer and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the drawer, e.g. after in-page navigation.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_and_close() {
        let mut menu = MenuState::new();
        assert_eq!(menu.aria_expanded(), "false");
        assert!(menu.toggle());
        assert_eq!(menu.aria_expanded(), "true");
        assert!(!menu.toggle());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn panel_without_toggle_is_still_closable() {
        let markup = MenuMarkup::from_parts(false, true);
        assert_eq!(markup, MenuMarkup::PanelOnly);
        assert!(markup.is_closable());
        assert!(!markup.is_toggleable());

        assert!(MenuMarkup::from_parts(true, true).is_toggleable());
        assert!(!MenuMarkup::from_parts(true, false).is_closable());
    }
}
