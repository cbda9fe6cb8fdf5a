//! Web platform adapter for Sitelift.
//!
//! Resolves the page markup into bound-element descriptors once, then wires
//! browser events into the behavior models from `sitelift-ui`. Every mount
//! function is a no-op when its markup is absent.

mod anchors;
mod binding;
mod carousel;
mod dom;
mod form;
mod menu;
mod modal;
mod reveal;
mod surface;
mod timers;

pub use anchors::mount_anchor_scrolling;
pub use binding::{resolve_carousel, BindError, BoundCarousel, CarouselSelectors};
pub use carousel::{mount_carousel, SharedCarousel};
pub use dom::parse_css_px;
pub use form::mount_contact_form;
pub use menu::{mount_mobile_menu, MenuHandle};
pub use modal::mount_modal;
pub use reveal::mount_reveal;
pub use surface::WebCarouselSurface;
pub use timers::set_timeout;
