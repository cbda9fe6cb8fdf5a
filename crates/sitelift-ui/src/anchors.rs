//! In-page smooth scrolling for `#fragment` links.

use std::time::Duration;

/// A class added to an anchor's target shortly after scrolling starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorHint {
    /// Exact `href` this hint applies to, e.g. `#services`.
    pub href: String,
    /// Class added to the scroll target.
    pub class: String,
    /// Delay after the scroll begins.
    pub delay: Duration,
}

impl AnchorHint {
    /// Creates a hint for `href`.
    pub fn new(href: impl Into<String>, class: impl Into<String>, delay: Duration) -> Self {
        Self {
            href: href.into(),
            class: class.into(),
            delay,
        }
    }
}

/// What to do for a clicked in-page link whose target exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollPlan<'a> {
    /// Selector of the scroll target.
    pub selector: &'a str,
    /// Close the mobile menu after scrolling starts.
    pub close_menu: bool,
    /// Optional deferred class on the target.
    pub hint: Option<&'a AnchorHint>,
}

impl<'a> ScrollPlan<'a> {
    /// Plans the scroll for `href`, or `None` when the link should keep its
    /// default behavior.
    pub fn for_href(href: &'a str, hints: &'a [AnchorHint]) -> Option<Self> {
        let selector = anchor_target(href)?;
        Some(Self {
            selector,
            close_menu: true,
            hint: hints.iter().find(|hint| hint.href == href),
        })
    }
}

/// Selector for an in-page link, skipping bare `#` and blank hrefs.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href == "#" || href.trim().is_empty() || !href.starts_with('#') {
        None
    } else {
        Some(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_links_are_skipped() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("   "), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/pricing"), None);
        assert_eq!(anchor_target("#contact"), Some("#contact"));
    }

    #[test]
    fn hint_matches_exact_href() {
        let hints = vec![AnchorHint::new(
            "#services",
            "in-view",
            Duration::from_millis(250),
        )];
        let plan = ScrollPlan::for_href("#services", &hints).expect("plan");
        assert!(plan.close_menu);
        assert_eq!(plan.hint.map(|h| h.class.as_str()), Some("in-view"));

        let plan = ScrollPlan::for_href("#services-detail", &hints).expect("plan");
        assert!(plan.hint.is_none());
    }
}
