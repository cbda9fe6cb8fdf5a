//! Per-instance carousel configuration.

/// How the track offset is expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OffsetMode {
    /// Percentage of the track width; slides are sized as `100% / visible`.
    #[default]
    Percent,
    /// Pixels, from the measured width of the first slide plus the track gap.
    /// Required when slide widths are not percentage based.
    Measured,
}

/// Options resolved once when a carousel is bound.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselOptions {
    /// Offset unit for the track transform.
    pub offset: OffsetMode,
    /// Publish `--{ns}-visible` on the root so CSS can size slides.
    pub publish_visible_count: bool,
    /// Look for controls and indicators in the enclosing `section` when
    /// they are not inside the root.
    pub section_fallback: bool,
    /// Gate auto-advance on the carousel intersecting the viewport by at
    /// least this ratio. `None` means the carousel is always treated as
    /// visible.
    pub visibility_threshold: Option<f64>,
}

impl CarouselOptions {
    /// Uniform, percentage-sized slides paged with arrows and dots.
    pub fn paged() -> Self {
        Self {
            offset: OffsetMode::Percent,
            publish_visible_count: false,
            section_fallback: false,
            visibility_threshold: None,
        }
    }

    /// A rail of fixed-width cards with controls that may sit outside it.
    pub fn rail() -> Self {
        Self {
            offset: OffsetMode::Measured,
            publish_visible_count: true,
            section_fallback: true,
            visibility_threshold: Some(0.4),
        }
    }

    /// Sets the offset mode.
    pub fn with_offset(mut self, offset: OffsetMode) -> Self {
        self.offset = offset;
        self
    }

    /// Sets whether the visible count is published as a CSS property.
    pub fn with_visible_count_property(mut self, publish: bool) -> Self {
        self.publish_visible_count = publish;
        self
    }

    /// Sets whether controls are searched in the enclosing section.
    pub fn with_section_fallback(mut self, enabled: bool) -> Self {
        self.section_fallback = enabled;
        self
    }

    /// Sets the intersection ratio gating auto-advance.
    pub fn with_visibility_threshold(mut self, threshold: Option<f64>) -> Self {
        self.visibility_threshold = threshold;
        self
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::paged()
    }
}
