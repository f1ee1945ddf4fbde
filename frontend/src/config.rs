//! Tunables for the page behaviors.

/// Distance, in CSS pixels, a section is treated as "reached" before its top
/// edge scrolls past the top of the viewport. Covers the fixed header.
pub const SCROLL_LEAD_MARGIN: f64 = 120.0;

/// Configuration handed to [`install`](crate::install).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorConfig {
    /// See [`SCROLL_LEAD_MARGIN`].
    pub scroll_lead_margin: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            scroll_lead_margin: SCROLL_LEAD_MARGIN,
        }
    }
}
