//! Foundation elements for Sitelift: geometry, pointer input, gestures and viewport buckets.

pub mod gesture;
pub mod input;
pub mod viewport;

// Re-export commonly used items
pub use gesture::{DragOutcome, DragSession, SWIPE_COMMIT_THRESHOLD};
pub use input::{Point, PointerEvent, PointerEventKind, PointerPhase};
pub use viewport::{ViewportBucket, COMPACT_MIN_WIDTH, WIDE_MIN_WIDTH};

pub mod prelude {
    pub use crate::gesture::*;
    pub use crate::input::*;
    pub use crate::viewport::*;
}
