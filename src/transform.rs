//! Affine transforms for rotated content and the companion UI region.
//!
//! Transforms are kept as the ordered primitive list a host applies to its
//! drawing context (canvas `translate`/`rotate`/`scale`, CSS transform lists),
//! and can be flattened to a [`glam::DAffine2`] for point mapping.
//!
//! All coordinates are y-down raster pixels. A positive quarter turn is
//! clockwise on screen, matching canvas `rotate(PI / 2)` and CSS `rotate(90deg)`.

use core::fmt;

use glam::{DAffine2, DMat2, DVec2};

use crate::constraint::{Rect, Size};
use crate::orientation::{Orientation, RotationDecision, RotationSense};

/// Maximum number of primitives in one [`AffineTransform`].
const MAX_OPS: usize = 4;

/// A single transform step.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive {
    /// Move the origin.
    Translate { x: f64, y: f64 },
    /// Rotate by a multiple of 90°. Positive = clockwise on screen.
    Rotate { quarter_turns: i8 },
    /// Scale each axis. `(-1, -1)` is a half turn.
    Scale { x: f64, y: f64 },
}

impl Primitive {
    /// Matrix form of this step.
    pub fn matrix(self) -> DAffine2 {
        match self {
            Self::Translate { x, y } => DAffine2::from_translation(DVec2::new(x, y)),
            Self::Scale { x, y } => DAffine2::from_scale(DVec2::new(x, y)),
            Self::Rotate { quarter_turns } => {
                // Exact cos/sin for quarter turns; no trig rounding.
                let (cos, sin) = match quarter_turns.rem_euclid(4) {
                    0 => (1.0, 0.0),
                    1 => (0.0, 1.0),
                    2 => (-1.0, 0.0),
                    _ => (0.0, -1.0),
                };
                DAffine2::from_mat2(DMat2::from_cols(
                    DVec2::new(cos, sin),
                    DVec2::new(-sin, cos),
                ))
            }
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Translate { x, y } => write!(f, "translate({x}px, {y}px)"),
            Self::Rotate { quarter_turns } => write!(f, "rotate({}deg)", quarter_turns as i32 * 90),
            Self::Scale { x, y } => write!(f, "scale({x}, {y})"),
        }
    }
}

/// Ordered list of [`Primitive`]s, applied first to last.
///
/// Fixed capacity and `Copy`; never allocates. Applying the list to a drawing
/// context in order is equivalent to pre-multiplying points by
/// [`matrix`](Self::matrix).
///
/// ```
/// use zenstage::{AffineTransform, Primitive};
///
/// let t = AffineTransform::IDENTITY;
/// assert!(t.is_identity());
/// assert!(t.primitives().is_empty());
/// assert_eq!(t.to_string(), "none");
/// ```
#[derive(Copy, Clone, PartialEq)]
pub struct AffineTransform {
    ops: [Primitive; MAX_OPS],
    len: u8,
}

impl AffineTransform {
    /// No transformation.
    pub const IDENTITY: Self = Self {
        ops: [Primitive::Translate { x: 0.0, y: 0.0 }; MAX_OPS],
        len: 0,
    };

    /// Primitives in application order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.ops[..self.len as usize]
    }

    /// Whether the flattened matrix is the identity.
    pub fn is_identity(&self) -> bool {
        self.matrix().abs_diff_eq(DAffine2::IDENTITY, 1e-12)
    }

    /// Flatten to a single matrix.
    pub fn matrix(&self) -> DAffine2 {
        self.primitives()
            .iter()
            .fold(DAffine2::IDENTITY, |m, op| m * op.matrix())
    }

    /// The transform that undoes this one: primitives inverted, in reverse order.
    pub fn inverse(&self) -> Self {
        self.primitives()
            .iter()
            .rev()
            .fold(Self::IDENTITY, |t, op| {
                t.then(match *op {
                    Primitive::Translate { x, y } => Primitive::Translate { x: -x, y: -y },
                    Primitive::Rotate { quarter_turns } => Primitive::Rotate {
                        quarter_turns: -quarter_turns,
                    },
                    Primitive::Scale { x, y } => Primitive::Scale {
                        x: 1.0 / x,
                        y: 1.0 / y,
                    },
                })
            })
    }

    /// Map a point from the transformed (inner) space to the outer space.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let p = self.matrix().transform_point2(DVec2::new(x, y));
        (p.x, p.y)
    }

    /// Map a point from the outer space back into the inner space.
    pub fn apply_inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let p = self.matrix().inverse().transform_point2(DVec2::new(x, y));
        (p.x, p.y)
    }

    /// Axis-aligned bounds of `rect` after mapping through this transform.
    ///
    /// Exact for quarter-turn transforms, which only move corners to corners.
    pub fn map_rect(&self, rect: Rect) -> Rect {
        let m = self.matrix();
        bounds_of(&m, rect)
    }

    /// Axis-aligned bounds of `rect` after mapping through the inverse.
    pub fn unmap_rect(&self, rect: Rect) -> Rect {
        let m = self.matrix().inverse();
        bounds_of(&m, rect)
    }

    fn then(mut self, op: Primitive) -> Self {
        debug_assert!((self.len as usize) < MAX_OPS, "transform capacity exceeded");
        if let Some(slot) = self.ops.get_mut(self.len as usize) {
            *slot = op;
            self.len += 1;
        }
        self
    }

    fn translate(self, x: f64, y: f64) -> Self {
        self.then(Primitive::Translate { x, y })
    }

    fn rotate(self, quarter_turns: i8) -> Self {
        self.then(Primitive::Rotate { quarter_turns })
    }

    fn scale(self, x: f64, y: f64) -> Self {
        self.then(Primitive::Scale { x, y })
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Debug for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.primitives()).finish()
    }
}

/// CSS transform-list notation, e.g. `rotate(-90deg) translate(-720px, 0px)`.
impl fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len == 0 {
            return f.write_str("none");
        }
        for (i, op) in self.primitives().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

fn bounds_of(m: &DAffine2, rect: Rect) -> Rect {
    let corners = [
        DVec2::new(rect.x, rect.y),
        DVec2::new(rect.right(), rect.y),
        DVec2::new(rect.x, rect.bottom()),
        DVec2::new(rect.right(), rect.bottom()),
    ]
    .map(|c| m.transform_point2(c));
    let min = corners[1..].iter().fold(corners[0], |a, &c| a.min(c));
    let max = corners[1..].iter().fold(corners[0], |a, &c| a.max(c));
    Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
}

/// What the content renderer receives: logical size plus the context transform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContentFrame {
    /// Physical surface size in pixels.
    pub surface: Size,
    /// Size the content should draw at, in its own (logical) coordinates.
    pub logical: Size,
    /// Transform to apply to the surface's drawing context before drawing.
    pub transform: AffineTransform,
}

/// Build the drawing-context transform for the content.
///
/// Without rotation this is the identity and the logical size equals the
/// surface size. With rotation the logical size is the surface transposed,
/// and the context is turned a quarter about the surface center.
///
/// The two senses are distinct compositions, not mirror images of each
/// other. Both rotate `+90°`; the clockwise case additionally composes a
/// half turn (`scale(-1, -1)`) so that the logical top edge lands on the
/// physical left and left-to-right content still reads from the viewer's
/// left once the device is turned.
///
/// ```text
///     Clockwise:        translate(w/2, h/2) rotate(90deg) scale(-1, -1) translate(-h/2, -w/2)
///     CounterClockwise: translate(w/2, h/2) rotate(90deg)               translate(-h/2, -w/2)
/// ```
pub fn build_content_transform(surface: Size, decision: RotationDecision) -> ContentFrame {
    let (w, h) = (surface.width as f64, surface.height as f64);
    let Some(sense) = decision.rotation() else {
        return ContentFrame {
            surface,
            logical: surface,
            transform: AffineTransform::IDENTITY,
        };
    };

    let centered = AffineTransform::IDENTITY.translate(w / 2.0, h / 2.0).rotate(1);
    let transform = match sense {
        RotationSense::Clockwise => centered.scale(-1.0, -1.0),
        RotationSense::CounterClockwise => centered,
    }
    .translate(-h / 2.0, -w / 2.0);

    ContentFrame {
        surface,
        logical: surface.transposed(),
        transform,
    }
}

/// Placement of the UI region inside the container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UiPlacement {
    /// Declared box, container-local, anchored at the container's top-left.
    /// Transposed relative to [`band`](Self::band) when rotated.
    pub rect: Rect,
    /// Transform applied to the declared box, origin at its top-left corner.
    pub transform: AffineTransform,
    /// Leftover band of the container the region visually occupies.
    pub band: Rect,
}

/// Leftover band of the container after the surface takes its share.
///
/// Physical landscape: the strip left of the surface, full height.
/// Physical portrait: the strip above the surface, full width.
pub fn ui_band(container: Size, surface: Size, physical: Orientation) -> Rect {
    let cw = container.width;
    let ch = container.height;
    match physical {
        Orientation::Landscape => {
            Rect::new(0.0, 0.0, cw.saturating_sub(surface.width) as f64, ch as f64)
        }
        Orientation::Portrait => {
            Rect::new(0.0, 0.0, cw as f64, ch.saturating_sub(surface.height) as f64)
        }
    }
}

/// Build the UI region's declared box and transform.
///
/// Without rotation the box is the leftover band and the transform is the
/// identity. With rotation the box is declared transposed, so its own
/// coordinate space matches the logical orientation, and is turned back
/// into the band: translate to the anchor (top-left), rotate by the sense,
/// then translate by the negative of the swapped dimension to re-anchor.
///
/// ```text
///     Clockwise:        rotate(-90deg) translate(-box.width, 0)
///     CounterClockwise: rotate(90deg)  translate(0, -box.height)
/// ```
pub fn build_ui_transform(
    container: Size,
    surface: Size,
    decision: RotationDecision,
    physical: Orientation,
) -> UiPlacement {
    let band = ui_band(container, surface, physical);
    let Some(sense) = decision.rotation() else {
        return UiPlacement {
            rect: band,
            transform: AffineTransform::IDENTITY,
            band,
        };
    };

    let rect = Rect::new(band.x, band.y, band.height, band.width);
    let anchored = AffineTransform::IDENTITY
        .translate(rect.x, rect.y)
        .rotate(sense.quarter_turns());
    let transform = match sense {
        RotationSense::Clockwise => anchored.translate(-rect.width, 0.0),
        RotationSense::CounterClockwise => anchored.translate(0.0, -rect.height),
    };

    UiPlacement {
        rect,
        transform,
        band,
    }
}
