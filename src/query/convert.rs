//! Overlay parsed [`Instructions`] onto base configs.

use core::time::Duration;

use crate::constraint::LayoutConfig;
use crate::debounce::SettleConfig;

use super::instructions::Instructions;

impl Instructions {
    /// Apply these settings on top of `base`.
    ///
    /// The result is not validated; [`plan`](crate::plan()) rejects bad
    /// combinations that individually parsed fine.
    pub fn to_config(&self, base: LayoutConfig) -> LayoutConfig {
        let mut config = base;
        if let Some(o) = self.orientation {
            config.logical_orientation = o;
        }
        if let Some(w) = self.max_width {
            config = config.max_width(w);
        }
        if let Some(h) = self.max_height {
            config = config.max_height(h);
        }
        if let Some(r) = self.aspect {
            config = config.aspect_landscape(r).aspect_portrait(1.0 / r);
        }
        if let Some(r) = self.aspect_landscape {
            config = config.aspect_landscape(r);
        }
        if let Some(r) = self.aspect_portrait {
            config = config.aspect_portrait(r);
        }
        config
    }

    /// Apply the settle settings on top of `base`.
    pub fn to_settle(&self, base: SettleConfig) -> SettleConfig {
        let mut settle = base;
        if let Some(ms) = self.settle_ms {
            settle.delay = Duration::from_millis(ms);
        }
        if let Some(policy) = self.settle_policy {
            settle.policy = policy;
        }
        settle
    }
}
