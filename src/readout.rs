//! Dimensions readout text.

use core::fmt;

use crate::constraint::Size;

/// Rendered surface size and its normalized aspect ratio.
///
/// Displays as `Canvas: 960px × 720px :: 75%`, where the percentage is the
/// shorter side over the longer side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Readout {
    /// Rendered surface size.
    pub size: Size,
    /// Shorter / longer side as a whole percentage.
    pub percent: u32,
}

impl Readout {
    /// Readout for a rendered surface size.
    ///
    /// `round(100 × shorter / longer)`, halves rounding up, computed in
    /// integers so no size lands on the wrong side of a half.
    pub fn new(size: Size) -> Self {
        let (short, long) = size.short_long();
        let percent = if long == 0 {
            0
        } else {
            let (short, long) = (u64::from(short), u64::from(long));
            ((200 * short + long) / (2 * long)) as u32
        };
        Self { size, percent }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Canvas: {}px × {}px :: {}%",
            self.size.width, self.size.height, self.percent
        )
    }
}
