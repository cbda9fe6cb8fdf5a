//! Reveal-on-scroll: add a class when an element enters the viewport.

/// Configuration for one revealed element.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealPolicy {
    /// Selector of the element to reveal.
    pub selector: String,
    /// Class added on reveal.
    pub class: String,
    /// Intersection ratio that counts as visible.
    pub threshold: f64,
    /// Stop observing after the first reveal.
    pub once: bool,
}

impl RevealPolicy {
    /// Reveal `selector` with the `in-view` class.
    pub fn new(selector: impl Into<String>, threshold: f64, once: bool) -> Self {
        Self {
            selector: selector.into(),
            class: "in-view".to_string(),
            threshold,
            once,
        }
    }

    /// Overrides the revealed class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Decides how to start given the environment.
    pub fn start(&self, prefers_reduced_motion: bool, observer_available: bool) -> RevealStart {
        if prefers_reduced_motion || !observer_available {
            RevealStart::Immediate
        } else {
            RevealStart::Observe {
                threshold: self.threshold,
            }
        }
    }
}

/// How a reveal begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealStart {
    /// Add the class now; no observer.
    Immediate,
    /// Observe at the given threshold.
    Observe {
        /// Intersection ratio.
        threshold: f64,
    },
}

/// What to do for one intersection notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Not intersecting; nothing to do.
    None,
    /// Add the class.
    Reveal,
    /// Add the class and stop observing.
    RevealAndUnobserve,
}

/// Tracks whether an observed element has been revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    /// Whether the class has been added at least once.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Handles an intersection change.
    pub fn on_intersection(&mut self, is_intersecting: bool, once: bool) -> RevealAction {
        if !is_intersecting {
            return RevealAction::None;
        }
        self.revealed = true;
        if once {
            RevealAction::RevealAndUnobserve
        } else {
            RevealAction::Reveal
        }
    }
}

/// Media query for users who asked for less motion.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
