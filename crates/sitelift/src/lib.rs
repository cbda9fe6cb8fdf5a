#![deny(missing_docs)]

//! High level utilities for enhancing a static page with minimal boilerplate.
//!
//! ```no_run
//! use sitelift::SiteLauncher;
//!
//! SiteLauncher::new()
//!     .with_carousel("team", sitelift::CarouselOptions::paged())
//!     .with_modal("cookies")
//!     .build();
//! ```

mod launcher;
pub use launcher::{parse_log_level, CarouselSpec, SiteLauncher, SiteSettings};

/// Re-export the behavior models so pages can depend on a single crate.
pub use sitelift_ui::*;

/// Input primitives shared by every behavior.
pub use sitelift_foundation::{DragSession, Point, ViewportBucket, SWIPE_COMMIT_THRESHOLD};

/// Convenience imports for Sitelift pages.
pub mod prelude {
    pub use crate::{CarouselSpec, SiteLauncher, SiteSettings};
    pub use sitelift_ui::prelude::*;
}

// Platform-specific runtime modules
#[cfg(feature = "web")]
pub mod web;
