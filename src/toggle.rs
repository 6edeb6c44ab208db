//! The single piece of mutable layout state: the logical orientation.

use crate::constraint::LayoutConfig;
use crate::orientation::Orientation;

/// Owns the [`LayoutConfig`] and flips its logical orientation on demand.
///
/// No history and no undo. Everything else in the config stays fixed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ToggleController {
    config: LayoutConfig,
}

impl ToggleController {
    /// Take ownership of a config.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Current logical orientation.
    pub fn logical(&self) -> Orientation {
        self.config.logical_orientation
    }

    /// Flip the logical orientation and return the new value.
    pub fn toggle(&mut self) -> Orientation {
        self.config.logical_orientation = self.config.logical_orientation.flipped();
        self.config.logical_orientation
    }

    /// Button label: names the orientation a press switches *to*.
    pub fn current_label(&self) -> &'static str {
        match self.config.logical_orientation {
            Orientation::Landscape => "Switch to Portrait",
            Orientation::Portrait => "Switch to Landscape",
        }
    }
}

impl Default for ToggleController {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
