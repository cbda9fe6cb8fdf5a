//! Resolution of a carousel's markup into an immutable descriptor.
//!
//! Lookups happen once, at mount time. Everything after that works on the
//! [`BoundCarousel`] and never queries the DOM for structure again.

use crate::dom::{as_html, query_all_in, query_document, query_in};
use sitelift_ui::CarouselOptions;
use std::fmt;
use web_sys::{Document, Element, HtmlElement};

/// Class-name selectors for one carousel namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselSelectors {
    pub root: String,
    pub track: String,
    pub slide: String,
    pub prev: String,
    pub next: String,
    pub indicators: String,
    pub global_prev: String,
    pub global_next: String,
    /// Class toggled on visible slides.
    pub active_class: String,
    /// Class of every indicator button.
    pub indicator_class: String,
    /// Custom property carrying the visible count.
    pub visible_property: String,
}

impl CarouselSelectors {
    pub fn new(namespace: &str) -> Self {
        Self {
            root: format!(".{namespace}-slider"),
            track: format!(".{namespace}-slides"),
            slide: format!(".{namespace}-slide"),
            prev: format!(".{namespace}-arrow.prev"),
            next: format!(".{namespace}-arrow.next"),
            indicators: format!(".{namespace}-dots"),
            global_prev: format!(".{namespace}-arrow-global.prev"),
            global_next: format!(".{namespace}-arrow-global.next"),
            active_class: format!("{namespace}-active"),
            indicator_class: format!("{namespace}-dot"),
            visible_property: format!("--{namespace}-visible"),
        }
    }

    /// Selector matching any indicator button.
    pub fn indicator_button(&self) -> String {
        format!(".{}", self.indicator_class)
    }
}

/// Why a carousel stayed inert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindError {
    MissingRoot(String),
    MissingTrack(String),
    NoSlides(String),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::MissingRoot(selector) => write!(f, "no element matches `{selector}`"),
            BindError::MissingTrack(selector) => {
                write!(f, "root has no track matching `{selector}`")
            }
            BindError::NoSlides(selector) => write!(f, "track has no `{selector}` slides"),
        }
    }
}

impl std::error::Error for BindError {}

/// The elements one carousel instance works with. Optional parts are absent
/// when the page does not provide them.
#[derive(Clone, Debug)]
pub struct BoundCarousel {
    pub selectors: CarouselSelectors,
    pub root: HtmlElement,
    pub track: HtmlElement,
    pub slides: Vec<Element>,
    pub prev: Option<Element>,
    pub next: Option<Element>,
    pub indicators: Option<Element>,
    /// Closest enclosing `section`, used as the visibility target.
    pub section: Option<Element>,
}

/// Resolves the markup for `namespace`.
pub fn resolve_carousel(
    document: &Document,
    namespace: &str,
    options: &CarouselOptions,
) -> Result<BoundCarousel, BindError> {
    let selectors = CarouselSelectors::new(namespace);

    let root = query_document(document, &selectors.root)
        .as_ref()
        .and_then(as_html)
        .ok_or_else(|| BindError::MissingRoot(selectors.root.clone()))?;
    let track = query_in(&root, &selectors.track)
        .as_ref()
        .and_then(as_html)
        .ok_or_else(|| BindError::MissingTrack(selectors.track.clone()))?;
    let slides = query_all_in(&track, &selectors.slide);
    if slides.is_empty() {
        return Err(BindError::NoSlides(selectors.slide.clone()));
    }

    let mut prev = query_in(&root, &selectors.prev);
    let mut next = query_in(&root, &selectors.next);
    let mut indicators = query_in(&root, &selectors.indicators).or_else(|| {
        root.parent_element()
            .and_then(|parent| query_in(&parent, &selectors.indicators))
    });
    let section = root.closest("section").ok().flatten();

    if options.section_fallback {
        let in_scope = |selector: &str| match &section {
            Some(section) => query_in(section, selector),
            None => query_document(document, selector),
        };
        prev = prev.or_else(|| in_scope(&selectors.global_prev));
        next = next.or_else(|| in_scope(&selectors.global_next));
        indicators = indicators.or_else(|| in_scope(&selectors.indicators));
    }

    Ok(BoundCarousel {
        selectors,
        root,
        track,
        slides,
        prev,
        next,
        indicators,
        section,
    })
}
