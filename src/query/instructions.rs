//! Parsed representation of a query string.

use crate::debounce::SettlePolicy;
use crate::orientation::Orientation;

/// Settings found in a query string. `None` means "keep the base value".
///
/// Produced by [`crate::query::parse()`], consumed by
/// [`to_config()`](Self::to_config) and [`to_settle()`](Self::to_settle).
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Instructions {
    /// Initial logical orientation (`orientation`, `mode`).
    pub orientation: Option<Orientation>,
    /// Container width cap (`maxwidth`).
    pub max_width: Option<f64>,
    /// Container height cap (`maxheight`).
    pub max_height: Option<f64>,
    /// Shared ratio (`aspect`). Portrait uses the reciprocal.
    pub aspect: Option<f64>,
    /// Landscape ratio (`aspect.landscape`). Wins over `aspect`.
    pub aspect_landscape: Option<f64>,
    /// Portrait ratio (`aspect.portrait`). Wins over `aspect`.
    pub aspect_portrait: Option<f64>,
    /// Settle delay in milliseconds (`settle`, `debounce`).
    pub settle_ms: Option<u64>,
    /// Settle policy (`settle.policy`).
    pub settle_policy: Option<SettlePolicy>,
}

impl Instructions {
    /// Create empty instructions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing was set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
