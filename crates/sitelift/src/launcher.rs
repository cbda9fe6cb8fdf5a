//! Page configuration and launcher.
//!
//! `SiteSettings` lists which behaviors to mount and under which names.
//! The defaults describe the marketing page the markup conventions come from.

use sitelift_ui::{AnchorHint, CarouselOptions, RevealPolicy};
use std::time::Duration;

/// A carousel namespace with its options.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselSpec {
    /// Class prefix, e.g. `pricing` for `.pricing-slider`.
    pub namespace: String,
    /// Options resolved at mount time.
    pub options: CarouselOptions,
}

impl CarouselSpec {
    /// Creates an entry for `namespace`.
    pub fn new(namespace: impl Into<String>, options: CarouselOptions) -> Self {
        Self {
            namespace: namespace.into(),
            options,
        }
    }
}

/// Configuration for one page.
#[derive(Clone, Debug)]
pub struct SiteSettings {
    /// Carousels, mounted in order.
    pub carousels: Vec<CarouselSpec>,
    /// Modal names; each binds `#{name}-modal`.
    pub modals: Vec<String>,
    /// Elements revealed on scroll.
    pub reveals: Vec<RevealPolicy>,
    /// Deferred classes for in-page link targets.
    pub anchor_hints: Vec<AnchorHint>,
    /// Console log level. The `sitelift-log` query parameter overrides it.
    pub log_level: log::Level,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            carousels: vec![
                CarouselSpec::new("cap", CarouselOptions::paged()),
                CarouselSpec::new("pricing", CarouselOptions::paged()),
                CarouselSpec::new("why", CarouselOptions::rail()),
            ],
            modals: vec!["privacy".into(), "terms".into()],
            reveals: vec![
                RevealPolicy::new("#services", 0.15, true),
                RevealPolicy::new(".site-footer", 0.2, false),
            ],
            anchor_hints: vec![AnchorHint::new(
                "#services",
                "in-view",
                Duration::from_millis(250),
            )],
            log_level: log::Level::Info,
        }
    }
}

/// Builder for [`SiteSettings`] that also starts the page on the web.
///
/// # Example
///
/// ```no_run
/// use sitelift::SiteLauncher;
///
/// #[cfg(target_arch = "wasm32")]
/// fn start() {
///     SiteLauncher::new()
///         .with_log_level(log::Level::Debug)
///         .run();
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct SiteLauncher {
    settings: SiteSettings,
}

impl SiteLauncher {
    /// A launcher with the default page configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A launcher that mounts nothing until configured.
    pub fn empty() -> Self {
        Self {
            settings: SiteSettings {
                carousels: Vec::new(),
                modals: Vec::new(),
                reveals: Vec::new(),
                anchor_hints: Vec::new(),
                log_level: log::Level::Info,
            },
        }
    }

    /// Adds or replaces the carousel for `namespace`.
    pub fn with_carousel(mut self, namespace: impl Into<String>, options: CarouselOptions) -> Self {
        let spec = CarouselSpec::new(namespace, options);
        match self
            .settings
            .carousels
            .iter_mut()
            .find(|existing| existing.namespace == spec.namespace)
        {
            Some(existing) => *existing = spec,
            None => self.settings.carousels.push(spec),
        }
        self
    }

    /// Adds a modal by name. Names already present are wired once.
    pub fn with_modal(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.settings.modals.contains(&name) {
            self.settings.modals.push(name);
        }
        self
    }

    /// Adds a reveal-on-scroll element.
    pub fn with_reveal(mut self, policy: RevealPolicy) -> Self {
        self.settings.reveals.push(policy);
        self
    }

    /// Adds a deferred class for an in-page link target.
    pub fn with_anchor_hint(mut self, hint: AnchorHint) -> Self {
        self.settings.anchor_hints.push(hint);
        self
    }

    /// Sets the console log level.
    pub fn with_log_level(mut self, level: log::Level) -> Self {
        self.settings.log_level = level;
        self
    }

    /// The configured settings.
    pub fn build(self) -> SiteSettings {
        self.settings
    }

    /// Installs logging and mounts every configured behavior on the current page.
    #[cfg(feature = "web")]
    pub fn run(self) {
        crate::web::run(self.settings)
    }
}

/// Parses a log level name from the `sitelift-log` query parameter.
///
/// Supported values: `error`, `warn`, `info`, `debug`, `trace`.
pub fn parse_log_level(value: &str) -> Option<log::Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => Some(log::Level::Error),
        "warn" | "warning" => Some(log::Level::Warn),
        "info" => Some(log::Level::Info),
        "debug" => Some(log::Level::Debug),
        "trace" | "verbose" => Some(log::Level::Trace),
        _ => None,
    }
}
