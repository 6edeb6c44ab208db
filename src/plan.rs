//! One full layout cycle as a pure function.
//!
//! [`plan`] runs the whole chain from a fresh viewport sample: container and
//! surface sizing, placement, rotation, both transforms and the readout.
//! Nothing is cached between calls.
//!
//! # Example
//!
//! ```
//! use zenstage::{LayoutConfig, Orientation, Viewport, plan};
//!
//! let config = LayoutConfig::new(Orientation::Landscape);
//! let frame = plan(Viewport::new(400.0, 800.0), &config).unwrap();
//!
//! assert_eq!(frame.physical, Orientation::Portrait);
//! assert!(frame.decision.needs_rotation);
//! // Content draws landscape: the surface dimensions, swapped.
//! assert_eq!(frame.content.logical, frame.surface.size.transposed());
//! ```

use crate::constraint::{LayoutConfig, LayoutError, Rect, Size, Viewport, solve_container, solve_surface};
use crate::orientation::{Orientation, RotationDecision, resolve};
use crate::readout::Readout;
use crate::transform::{ContentFrame, UiPlacement, build_content_transform, build_ui_transform};

/// Which container edge the surface is pinned to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceAnchor {
    /// Right edge, vertically centered. Physical landscape.
    RightCenter,
    /// Bottom edge, horizontally centered. Physical portrait.
    BottomCenter,
}

impl SurfaceAnchor {
    /// Anchor used for a physical orientation.
    pub fn for_physical(physical: Orientation) -> Self {
        match physical {
            Orientation::Landscape => Self::RightCenter,
            Orientation::Portrait => Self::BottomCenter,
        }
    }
}

/// Surface size and where it sits in the container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfacePlacement {
    /// Surface pixel size.
    pub size: Size,
    /// Container-local rect.
    pub rect: Rect,
    /// Edge the surface is pinned to.
    pub anchor: SurfaceAnchor,
}

impl SurfacePlacement {
    /// Pin `size` to the edge for `physical` inside `container`.
    pub fn new(container: Size, size: Size, physical: Orientation) -> Self {
        let (cw, ch) = (container.width as f64, container.height as f64);
        let (sw, sh) = (size.width as f64, size.height as f64);
        let anchor = SurfaceAnchor::for_physical(physical);
        let rect = match anchor {
            SurfaceAnchor::RightCenter => Rect::new(cw - sw, (ch - sh) / 2.0, sw, sh),
            SurfaceAnchor::BottomCenter => Rect::new((cw - sw) / 2.0, ch - sh, sw, sh),
        };
        Self { size, rect, anchor }
    }
}

/// Everything one recomputation produces.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutFrame {
    /// Viewport sample this frame was computed from.
    pub viewport: Viewport,
    /// Orientation of the viewport.
    pub physical: Orientation,
    /// Orientation the content is drawn in.
    pub logical: Orientation,
    /// Container size.
    pub container: Size,
    /// Container rect in viewport coordinates, centered.
    pub container_rect: Rect,
    /// Surface size and container-local placement.
    pub surface: SurfacePlacement,
    /// Rotation between physical and logical orientation.
    pub decision: RotationDecision,
    /// What the content renderer receives.
    pub content: ContentFrame,
    /// UI region placement, container-local.
    pub ui: UiPlacement,
    /// Dimensions readout for the surface.
    pub readout: Readout,
}

impl LayoutFrame {
    /// Surface rect in viewport coordinates.
    pub fn surface_in_viewport(&self) -> Rect {
        let r = self.surface.rect;
        Rect::new(
            self.container_rect.x + r.x,
            self.container_rect.y + r.y,
            r.width,
            r.height,
        )
    }
}

/// Compute a full layout frame.
///
/// Fails without producing anything on an invalid config, a degenerate
/// viewport, or a surface that floors to zero area.
pub fn plan(viewport: Viewport, config: &LayoutConfig) -> Result<LayoutFrame, LayoutError> {
    config.validate()?;
    let viewport = viewport.validate()?;
    let physical = viewport.orientation();

    let container = solve_container(viewport, physical, config);
    let surface = solve_surface(container, physical, config);
    if surface.is_empty() {
        return Err(LayoutError::EmptySurface {
            width: surface.width,
            height: surface.height,
        });
    }

    let container_rect = Rect::new(
        (viewport.width - container.width as f64) / 2.0,
        (viewport.height - container.height as f64) / 2.0,
        container.width as f64,
        container.height as f64,
    );

    let logical = config.logical_orientation;
    let decision = resolve(physical, logical);
    let content = build_content_transform(surface, decision);
    let ui = build_ui_transform(container, surface, decision, physical);

    Ok(LayoutFrame {
        viewport,
        physical,
        logical,
        container,
        container_rect,
        surface: SurfacePlacement::new(container, surface, physical),
        decision,
        content,
        ui,
        readout: Readout::new(surface),
    })
}
