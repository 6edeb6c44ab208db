//! Trigger handling and host side effects.
//!
//! [`LayoutCoordinator`] owns the [`Host`], the [`ToggleController`] and the
//! settle [`Debouncer`]. Every trigger that reaches it re-runs [`plan`] from a
//! fresh viewport sample and pushes the result out through the host callbacks
//! in a fixed order:
//!
//! 1. [`Host::place_container`]
//! 2. [`Host::place_surface`]
//! 3. [`Host::render_content`]
//! 4. [`Host::place_ui_region`]
//! 5. [`Host::set_readout_text`]
//!
//! Failures are never shown to the user. They come back as a [`SkipReason`],
//! are logged at debug level, and the next trigger starts over.

use alloc::string::ToString;
use core::time::Duration;

use log::{debug, trace};
use thiserror_no_std::Error;

use crate::constraint::{LayoutConfig, LayoutError, Rect, Viewport};
use crate::debounce::{Debouncer, SettleConfig};
use crate::orientation::Orientation;
use crate::plan::{LayoutFrame, SurfacePlacement, plan};
use crate::toggle::ToggleController;
use crate::transform::{ContentFrame, UiPlacement};

/// Events that cause a recompute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Initial load. Also pushes the toggle label.
    Load,
    /// Viewport resized.
    Resize,
    /// Device orientation changed. Recomputes after the settle delay.
    OrientationChange,
    /// Toggle button pressed.
    Toggle,
}

/// The render target could not produce a drawing context.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("drawing context unavailable")]
pub struct DrawContextUnavailable;

/// Why a recompute did not fully apply.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum SkipReason {
    /// The surface or container element is absent. Nothing was applied.
    #[error("drawing surface or container missing")]
    MissingElement,
    /// The layout could not be computed. Nothing was applied.
    #[error("layout skipped: {0}")]
    Layout(#[from] LayoutError),
    /// Content was not drawn this cycle. Placement and readout still applied.
    #[error("drawing context unavailable, content not rendered")]
    UnavailableDrawContext,
}

impl From<DrawContextUnavailable> for SkipReason {
    fn from(_: DrawContextUnavailable) -> Self {
        Self::UnavailableDrawContext
    }
}

/// The environment the layout is applied to.
///
/// All callbacks are synchronous. Rects are in CSS-like pixels: the container
/// rect is viewport-relative, everything else is container-relative.
pub trait Host {
    /// Current viewport size. Sampled once per recompute.
    fn viewport(&self) -> Viewport;

    /// Whether the surface and container elements exist.
    fn elements_ready(&self) -> bool {
        true
    }

    /// Position and size the container.
    fn place_container(&mut self, rect: Rect);

    /// Size the surface and pin it to its anchor edge.
    fn place_surface(&mut self, placement: &SurfacePlacement);

    /// Draw content at `frame.logical` size under `frame.transform`.
    fn render_content(&mut self, frame: &ContentFrame) -> Result<(), DrawContextUnavailable>;

    /// Size and transform the UI region.
    fn place_ui_region(&mut self, placement: &UiPlacement);

    /// Replace the dimensions readout.
    fn set_readout_text(&mut self, text: &str);

    /// Replace the toggle button label.
    fn set_toggle_label(&mut self, text: &str);
}

/// Drives [`plan`] from triggers and applies the result to a [`Host`].
#[derive(Debug)]
pub struct LayoutCoordinator<H> {
    host: H,
    toggle: ToggleController,
    settle: Debouncer,
    last: Option<LayoutFrame>,
}

impl<H: Host> LayoutCoordinator<H> {
    /// Coordinator with the default 500 ms coalescing settle delay.
    pub fn new(host: H, config: LayoutConfig) -> Self {
        Self::with_settle(host, config, SettleConfig::default())
    }

    /// Coordinator with an explicit settle delay and policy.
    pub fn with_settle(host: H, config: LayoutConfig, settle: SettleConfig) -> Self {
        Self {
            host,
            toggle: ToggleController::new(config),
            settle: Debouncer::new(settle),
            last: None,
        }
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Give the host back.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Current configuration, including the logical orientation.
    pub fn config(&self) -> &LayoutConfig {
        self.toggle.config()
    }

    /// Current logical orientation.
    pub fn logical(&self) -> Orientation {
        self.toggle.logical()
    }

    /// Pending settle tasks.
    pub fn settle(&self) -> &Debouncer {
        &self.settle
    }

    /// Last frame whose placement reached the host.
    pub fn last_frame(&self) -> Option<&LayoutFrame> {
        self.last.as_ref()
    }

    /// Handle a trigger at time `now`.
    ///
    /// Returns `Ok(None)` when the recompute was deferred to [`tick`](Self::tick).
    pub fn dispatch(
        &mut self,
        trigger: Trigger,
        now: Duration,
    ) -> Result<Option<LayoutFrame>, SkipReason> {
        trace!("trigger {trigger:?} at {now:?}");
        match trigger {
            Trigger::Load => {
                self.push_label();
                self.recompute().map(Some)
            }
            Trigger::Resize => self.recompute().map(Some),
            Trigger::OrientationChange => {
                self.settle.schedule(now);
                Ok(None)
            }
            Trigger::Toggle => self.toggle().map(Some),
        }
    }

    /// Run every settle task due at `now`.
    ///
    /// Returns how many recomputes applied fully. Skipped ones are logged by
    /// [`recompute`](Self::recompute) and their tasks are still consumed.
    pub fn tick(&mut self, now: Duration) -> usize {
        let due = self.settle.take_due(now);
        (0..due).filter(|_| self.recompute().is_ok()).count()
    }

    /// Flip the logical orientation, relabel the button, and recompute.
    pub fn toggle(&mut self) -> Result<LayoutFrame, SkipReason> {
        let logical = self.toggle.toggle();
        debug!("logical orientation now {}", logical.name());
        self.push_label();
        self.recompute()
    }

    /// Re-derive the full layout and apply it to the host.
    ///
    /// A missing element or a layout error returns before any host callback
    /// runs. A draw-context failure skips only the content render: the UI
    /// region and readout are still applied, and the frame is kept as
    /// [`last_frame`](Self::last_frame).
    pub fn recompute(&mut self) -> Result<LayoutFrame, SkipReason> {
        let result = self.apply();
        if let Err(reason) = &result {
            debug!("recompute skipped: {reason}");
        }
        result
    }

    fn apply(&mut self) -> Result<LayoutFrame, SkipReason> {
        if !self.host.elements_ready() {
            return Err(SkipReason::MissingElement);
        }
        let viewport = self.host.viewport();
        let frame = plan(viewport, self.toggle.config())?;
        debug!(
            "layout {}x{} {} -> container {}x{}, surface {}x{}, rotation {:?}",
            viewport.width,
            viewport.height,
            frame.logical.name(),
            frame.container.width,
            frame.container.height,
            frame.surface.size.width,
            frame.surface.size.height,
            frame.decision.rotation(),
        );

        self.host.place_container(frame.container_rect);
        self.host.place_surface(&frame.surface);
        let rendered = self.host.render_content(&frame.content);
        self.host.place_ui_region(&frame.ui);
        self.host.set_readout_text(&frame.readout.to_string());
        self.last = Some(frame);

        rendered?;
        Ok(frame)
    }

    fn push_label(&mut self) {
        let label = self.toggle.current_label();
        self.host.set_toggle_label(label);
    }
}
