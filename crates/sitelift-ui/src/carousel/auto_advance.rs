//! Hook points for timer-driven auto-advance.
//!
//! The controller decides *when* auto-advance may run from a set of gates;
//! the [`AutoAdvance`] strategy decides *what* running means. The shipped
//! strategy does nothing.

/// Start/stop hooks a timer-based implementation plugs into.
pub trait AutoAdvance {
    /// All gates are open. Called only on a closed-to-open transition.
    fn start(&mut self);

    /// Some gate closed. Called only on an open-to-closed transition.
    fn stop(&mut self);
}

/// Auto-advance that never advances.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledAutoAdvance;

impl AutoAdvance for DisabledAutoAdvance {
    fn start(&mut self) {}

    fn stop(&mut self) {}
}

/// Conditions under which auto-advance must not run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoAdvanceGates {
    /// Pointer is over the carousel root.
    pub hovered: bool,
    /// `document.hidden`.
    pub document_hidden: bool,
    /// Carousel intersects the viewport.
    pub in_view: bool,
    /// A drag session is open.
    pub dragging: bool,
}

impl AutoAdvanceGates {
    /// Gates for a freshly bound carousel.
    pub fn new(in_view: bool) -> Self {
        Self {
            hovered: false,
            document_hidden: false,
            in_view,
            dragging: false,
        }
    }

    /// Whether auto-advance may run.
    pub fn is_open(&self) -> bool {
        !self.hovered && !self.document_hidden && self.in_view && !self.dragging
    }
}

impl Default for AutoAdvanceGates {
    fn default() -> Self {
        Self::new(true)
    }
}
