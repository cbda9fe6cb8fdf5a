//! Behavior models for progressively enhanced static pages.
//!
//! Every model here is a plain state machine. The DOM is reached only through
//! small traits (for example [`CarouselSurface`]) so the same logic runs in the
//! browser and in headless tests.

pub mod anchors;
pub mod carousel;
pub mod form;
pub mod menu;
pub mod modal;
pub mod reveal;

pub use anchors::{anchor_target, AnchorHint, ScrollPlan};
pub use carousel::{
    settle_cursor, AutoAdvance, AutoAdvanceGates, CarouselController, CarouselFrame,
    CarouselOptions, CarouselSurface, DisabledAutoAdvance, IndicatorSet, OffsetMode,
    SlideMetrics, TrackOffset,
};
pub use form::{
    is_plausible_email, ContactField, ContactForm, FieldState, FormHint, HintKind, SubmitOutcome,
};
pub use menu::{MenuMarkup, MenuState};
pub use modal::{Dismissal, ModalState};
pub use reveal::{RevealAction, RevealPolicy, RevealStart, RevealState};

/// Convenience imports for wiring layers.
pub mod prelude {
    pub use crate::anchors::*;
    pub use crate::carousel::*;
    pub use crate::form::*;
    pub use crate::menu::*;
    pub use crate::modal::*;
    pub use crate::reveal::*;
    pub use sitelift_foundation::prelude::*;
}
