//! Aspect-ratio constraint solving for the container and the drawing surface.
//!
//! Computes the outer container box and the drawing surface inside it from a
//! viewport size, the physical orientation, and a [`LayoutConfig`]. Pure
//! geometry: no host access, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zenstage::{LayoutConfig, Orientation, Size, Viewport, solve_container, solve_surface};
//!
//! let config = LayoutConfig::default();
//! let viewport = Viewport::new(1920.0, 1080.0);
//! let physical = viewport.orientation();
//!
//! let container = solve_container(viewport, physical, &config);
//! assert_eq!(container, Size::new(1280, 720));
//!
//! // The surface keeps at most 75% of the long axis; the rest is the UI band.
//! let surface = solve_surface(container, physical, &config);
//! assert_eq!(surface, Size::new(960, 720));
//! assert_eq!(physical, Orientation::Landscape);
//! ```

use num_traits::Float;
use thiserror_no_std::Error;

use crate::orientation::Orientation;

/// Largest share of the container's long axis the surface may take.
///
/// The remaining band (at least 25%) is reserved for the UI region.
pub const SURFACE_SHARE: f64 = 0.75;

/// Host viewport size in (possibly fractional) pixels.
///
/// Sampled fresh on every recomputation and never stored across cycles.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a viewport size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Physical orientation: landscape iff `width >= height`.
    pub fn orientation(self) -> Orientation {
        Orientation::of(self.width, self.height)
    }

    /// Whether both dimensions are positive and finite.
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Reject zero, negative, or non-finite viewports.
    pub fn validate(self) -> Result<Self, LayoutError> {
        if self.is_drawable() {
            Ok(self)
        } else {
            Err(LayoutError::DegenerateViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Width × height dimensions in whole pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width and height swapped.
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Whether either dimension is zero.
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Orientation of this size (landscape iff `width >= height`).
    pub fn orientation(self) -> Orientation {
        Orientation::of(self.width as f64, self.height as f64)
    }

    /// `(shorter, longer)` side lengths.
    pub fn short_long(self) -> (u32, u32) {
        match self.orientation() {
            Orientation::Landscape => (self.height, self.width),
            Orientation::Portrait => (self.width, self.height),
        }
    }
}

/// Axis-aligned rectangle in host pixels.
///
/// Positions may be fractional (a container centered in an odd-sized viewport
/// sits on a half pixel), so this uses `f64` throughout.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect at the origin with the given size.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width as f64, size.height as f64)
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the two rects share any area (touching edges do not count).
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether `other` lies entirely inside `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Layout configuration.
///
/// Only [`logical_orientation`](Self::logical_orientation) changes at runtime
/// (through [`ToggleController`](crate::ToggleController)); everything else is
/// fixed configuration. Aspect ratios are width / height in both orientations
/// and are independent inputs: `aspect_portrait` is conventionally the
/// reciprocal of `aspect_landscape`, but nothing enforces that.
///
/// # Example
///
/// ```
/// use zenstage::{LayoutConfig, Orientation};
///
/// let config = LayoutConfig::new(Orientation::Portrait)
///     .max_width(1920.0)
///     .aspect_landscape(4.0 / 3.0)
///     .aspect_portrait(3.0 / 4.0);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Orientation the content is designed for.
    pub logical_orientation: Orientation,
    /// Container width cap in physical landscape.
    pub max_width: f64,
    /// Container height cap in physical portrait.
    pub max_height: f64,
    /// Container width / height in physical landscape.
    pub aspect_landscape: f64,
    /// Container width / height in physical portrait.
    pub aspect_portrait: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            logical_orientation: Orientation::Landscape,
            max_width: 1280.0,
            max_height: 1280.0,
            aspect_landscape: 16.0 / 9.0,
            aspect_portrait: 9.0 / 16.0,
        }
    }
}

impl LayoutConfig {
    /// Default configuration with the given logical orientation.
    pub fn new(logical_orientation: Orientation) -> Self {
        Self {
            logical_orientation,
            ..Self::default()
        }
    }

    /// Set the landscape container width cap.
    pub fn max_width(mut self, max_width: f64) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set the portrait container height cap.
    pub fn max_height(mut self, max_height: f64) -> Self {
        self.max_height = max_height;
        self
    }

    /// Set the landscape width / height ratio.
    pub fn aspect_landscape(mut self, ratio: f64) -> Self {
        self.aspect_landscape = ratio;
        self
    }

    /// Set the portrait width / height ratio.
    pub fn aspect_portrait(mut self, ratio: f64) -> Self {
        self.aspect_portrait = ratio;
        self
    }

    /// Aspect ratio used for the given physical orientation.
    pub fn aspect_for(&self, physical: Orientation) -> f64 {
        match physical {
            Orientation::Landscape => self.aspect_landscape,
            Orientation::Portrait => self.aspect_portrait,
        }
    }

    /// Check that aspect ratios and size caps are positive and finite.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for ratio in [self.aspect_landscape, self.aspect_portrait] {
            if !(ratio.is_finite() && ratio > 0.0) {
                return Err(LayoutError::InvalidAspectRatio(ratio));
            }
        }
        for cap in [self.max_width, self.max_height] {
            if !(cap.is_finite() && cap > 0.0) {
                return Err(LayoutError::InvalidMaxSize(cap));
            }
        }
        Ok(())
    }
}

/// Layout computation error.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum LayoutError {
    /// Viewport width or height is zero, negative, or not finite.
    #[error("degenerate viewport {width}x{height}")]
    DegenerateViewport { width: f64, height: f64 },
    /// An aspect ratio is zero, negative, or not finite.
    #[error("invalid aspect ratio {0}")]
    InvalidAspectRatio(f64),
    /// A maximum container size is zero, negative, or not finite.
    #[error("invalid maximum size {0}")]
    InvalidMaxSize(f64),
    /// The solved surface has no area (tiny viewport or extreme ratio).
    #[error("surface collapsed to {width}x{height}")]
    EmptySurface { width: u32, height: u32 },
}

/// Solve the container size for a viewport.
///
/// Sequential constraint tightening, not a joint optimization. In physical
/// landscape the container starts at the full viewport height, then is
/// clamped to the viewport width, then to `max_width`; each clamp re-derives
/// the other axis from the aspect ratio, so the later clamp wins and the
/// ratio is kept exactly (before flooring). Portrait mirrors this with the
/// width as the starting axis and `max_height` as the final cap.
///
/// Degenerate viewports are not special-cased here; use
/// [`Viewport::validate`] first.
pub fn solve_container(viewport: Viewport, physical: Orientation, config: &LayoutConfig) -> Size {
    let (width, height) = match physical {
        Orientation::Landscape => {
            let aspect = config.aspect_landscape;
            let mut height = viewport.height;
            let mut width = height * aspect;
            if width > viewport.width {
                width = viewport.width;
                height = width / aspect;
            }
            if width > config.max_width {
                width = config.max_width;
                height = width / aspect;
            }
            (width, height)
        }
        Orientation::Portrait => {
            let aspect = config.aspect_portrait;
            let mut width = viewport.width;
            let mut height = width / aspect;
            if height > viewport.height {
                height = viewport.height;
                width = height * aspect;
            }
            if height > config.max_height {
                height = config.max_height;
                width = height * aspect;
            }
            (width, height)
        }
    };
    Size::new(floor_px(width), floor_px(height))
}

/// Solve the drawing-surface size inside a container.
///
/// The surface spans the container's full cross axis. Along the long axis it
/// takes at most [`SURFACE_SHARE`] of the container, and never more than the
/// aspect ratio allows for the cross-axis length.
pub fn solve_surface(container: Size, physical: Orientation, config: &LayoutConfig) -> Size {
    let cw = container.width as f64;
    let ch = container.height as f64;
    let (width, height) = match physical {
        Orientation::Landscape => {
            let width = (cw * SURFACE_SHARE).min(ch * config.aspect_landscape);
            (width, ch)
        }
        Orientation::Portrait => {
            let height = (ch * SURFACE_SHARE).min(cw / config.aspect_portrait);
            (cw, height)
        }
    };
    Size::new(floor_px(width), floor_px(height))
}

/// Floor to whole pixels. Negative and NaN inputs become 0.
fn floor_px(v: f64) -> u32 {
    Float::floor(v) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(vw: f64, vh: f64, config: &LayoutConfig) -> (Size, Size) {
        let viewport = Viewport::new(vw, vh);
        let physical = viewport.orientation();
        let container = solve_container(viewport, physical, config);
        let surface = solve_surface(container, physical, config);
        (container, surface)
    }

    #[test]
    fn landscape_max_width_binds() {
        let (container, surface) = solve(1920.0, 1080.0, &LayoutConfig::default());
        assert_eq!(container, Size::new(1280, 720));
        assert_eq!(surface, Size::new(960, 720));
    }

    #[test]
    fn landscape_viewport_width_binds() {
        // 600 * 16/9 = 1066.67 > 800 → width clamps to 800, height = 450.
        let (container, surface) = solve(800.0, 600.0, &LayoutConfig::default());
        assert_eq!(container, Size::new(800, 450));
        assert_eq!(surface, Size::new(600, 450));
    }

    #[test]
    fn landscape_height_binds() {
        // 16:9 fits inside a very wide viewport at full height.
        let (container, _) = solve(1200.0, 450.0, &LayoutConfig::default());
        assert_eq!(container, Size::new(800, 450));
    }

    #[test]
    fn portrait_width_binds() {
        let (container, surface) = solve(400.0, 800.0, &LayoutConfig::default());
        // 400 / (9/16) = 711.1
        assert_eq!(container, Size::new(400, 711));
        // min(711 * 0.75, 400 / (9/16)) = 533.25
        assert_eq!(surface, Size::new(400, 533));
    }

    #[test]
    fn portrait_viewport_height_binds() {
        // 600 / (9/16) = 1066 > 700 → height clamps to 700, width = 393.75.
        let (container, _) = solve(600.0, 700.0, &LayoutConfig::default());
        assert_eq!(container, Size::new(393, 700));
    }

    #[test]
    fn portrait_max_height_binds() {
        let config = LayoutConfig::default().max_height(800.0);
        let (container, surface) = solve(1000.0, 2000.0, &config);
        assert_eq!(container, Size::new(450, 800));
        assert_eq!(surface, Size::new(450, 600));
    }

    #[test]
    fn loose_max_cap_is_noop() {
        let tight = solve(800.0, 600.0, &LayoutConfig::default()).0;
        let loose = solve(800.0, 600.0, &LayoutConfig::default().max_width(100_000.0)).0;
        assert_eq!(tight, loose);
    }

    #[test]
    fn later_clamp_wins() {
        // Both caps bind: viewport width first (1000), then max_width (640).
        let config = LayoutConfig::default().max_width(640.0);
        let (container, _) = solve(1000.0, 900.0, &config);
        assert_eq!(container, Size::new(640, 360));
    }

    #[test]
    fn square_viewport_is_landscape() {
        let viewport = Viewport::new(500.0, 500.0);
        assert_eq!(viewport.orientation(), Orientation::Landscape);
        let (container, _) = solve(500.0, 500.0, &LayoutConfig::default());
        assert_eq!(container, Size::new(500, 281));
    }

    #[test]
    fn surface_limited_by_aspect_when_container_is_narrow() {
        // 1:1 ratio: the aspect bound (300) is tighter than 75% (750).
        let config = LayoutConfig::default().aspect_landscape(1.0);
        let surface = solve_surface(Size::new(1000, 300), Orientation::Landscape, &config);
        assert_eq!(surface, Size::new(300, 300));
    }

    #[test]
    fn fractional_viewport_floors() {
        let (container, surface) = solve(1001.7, 563.9, &LayoutConfig::default());
        assert_eq!(container, Size::new(1001, 563));
        assert_eq!(surface.height, 563);
        assert!(surface.width <= 750);
    }

    #[test]
    fn degenerate_viewport_not_special_cased() {
        let config = LayoutConfig::default();
        let container = solve_container(Viewport::new(0.0, 0.0), Orientation::Landscape, &config);
        assert_eq!(container, Size::new(0, 0));
        let container = solve_container(Viewport::new(-10.0, 5.0), Orientation::Portrait, &config);
        assert!(container.is_empty());
    }

    #[test]
    fn viewport_validate() {
        assert!(Viewport::new(1.0, 1.0).validate().is_ok());
        assert_eq!(
            Viewport::new(0.0, 10.0).validate(),
            Err(LayoutError::DegenerateViewport {
                width: 0.0,
                height: 10.0
            })
        );
        assert!(Viewport::new(10.0, -1.0).validate().is_err());
        assert!(Viewport::new(f64::NAN, 10.0).validate().is_err());
        assert!(Viewport::new(f64::INFINITY, 10.0).validate().is_err());
    }

    #[test]
    fn config_validate() {
        assert!(LayoutConfig::default().validate().is_ok());
        assert_eq!(
            LayoutConfig::default().aspect_landscape(0.0).validate(),
            Err(LayoutError::InvalidAspectRatio(0.0))
        );
        assert!(
            LayoutConfig::default()
                .aspect_portrait(f64::NAN)
                .validate()
                .is_err()
        );
        assert_eq!(
            LayoutConfig::default().max_height(-1.0).validate(),
            Err(LayoutError::InvalidMaxSize(-1.0))
        );
    }

    #[test]
    fn size_orientation_and_sides() {
        assert_eq!(Size::new(960, 720).orientation(), Orientation::Landscape);
        assert_eq!(Size::new(720, 960).orientation(), Orientation::Portrait);
        assert_eq!(Size::new(500, 500).orientation(), Orientation::Landscape);
        assert_eq!(Size::new(960, 720).short_long(), (720, 960));
        assert_eq!(Size::new(720, 960).short_long(), (720, 960));
        assert_eq!(Size::new(0, 0).short_long(), (0, 0));
    }

    #[test]
    fn rect_overlap_and_containment() {
        let outer = Rect::new(0.0, 0.0, 100.0, 50.0);
        let left = Rect::new(0.0, 0.0, 25.0, 50.0);
        let right = Rect::new(25.0, 0.0, 75.0, 50.0);
        assert!(outer.contains_rect(&left));
        assert!(outer.contains_rect(&right));
        assert!(!left.overlaps(&right));
        assert!(outer.overlaps(&left));
    }

    const VIEWPORTS: [(f64, f64); 14] = [
        (1920.0, 1080.0),
        (1080.0, 1920.0),
        (800.0, 600.0),
        (600.0, 800.0),
        (400.0, 800.0),
        (3840.0, 2160.0),
        (2160.0, 3840.0),
        (1000.0, 1000.0),
        (320.0, 568.0),
        (568.0, 320.0),
        (1366.0, 768.0),
        (2560.0, 400.0),
        (400.0, 2560.0),
        (17.0, 9.0),
    ];

    #[test]
    fn parametric_invariants() {
        let configs = [
            LayoutConfig::default(),
            LayoutConfig::default().max_width(640.0).max_height(640.0),
            LayoutConfig::default()
                .aspect_landscape(4.0 / 3.0)
                .aspect_portrait(3.0 / 4.0),
            LayoutConfig::default()
                .aspect_landscape(2.0)
                .aspect_portrait(0.8),
        ];
        let mut failures = Vec::new();

        for config in &configs {
            for &(vw, vh) in &VIEWPORTS {
                let viewport = Viewport::new(vw, vh);
                let physical = viewport.orientation();
                let container = solve_container(viewport, physical, config);
                let surface = solve_surface(container, physical, config);
                let tag = format!("{vw}x{vh} {config:?}");
                let (cw, ch) = (container.width as f64, container.height as f64);
                let aspect = config.aspect_for(physical);

                if cw > vw || ch > vh {
                    failures.push(format!("{tag}: container {container:?} exceeds viewport"));
                }
                // Aspect ratio holds within flooring of either axis.
                match physical {
                    Orientation::Landscape => {
                        if cw > config.max_width {
                            failures.push(format!("{tag}: width above cap"));
                        }
                        if (ch - cw / aspect).abs() > 1.0 {
                            failures.push(format!("{tag}: {container:?} off ratio {aspect}"));
                        }
                        if surface.height != container.height {
                            failures.push(format!("{tag}: surface not full height"));
                        }
                        if surface.width as f64 > cw * SURFACE_SHARE {
                            failures.push(format!("{tag}: surface above 75%"));
                        }
                    }
                    Orientation::Portrait => {
                        if ch > config.max_height {
                            failures.push(format!("{tag}: height above cap"));
                        }
                        if (cw - ch * aspect).abs() > 1.0 {
                            failures.push(format!("{tag}: {container:?} off ratio {aspect}"));
                        }
                        if surface.width != container.width {
                            failures.push(format!("{tag}: surface not full width"));
                        }
                        if surface.height as f64 > ch * SURFACE_SHARE {
                            failures.push(format!("{tag}: surface above 75%"));
                        }
                    }
                }
            }
        }

        assert!(failures.is_empty(), "{} failures:\n{}", failures.len(), failures.join("\n"));
    }
}
