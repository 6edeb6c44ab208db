//! Physical vs. logical orientation and the rotation decision between them.

/// Landscape (wide) or portrait (tall).
///
/// Used both for the *physical* orientation, derived from the viewport each
/// cycle, and the *logical* orientation the content is designed for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Width ≥ height.
    #[default]
    Landscape,
    /// Width < height.
    Portrait,
}

impl Orientation {
    /// Orientation of a `width × height` box. Square counts as landscape.
    pub fn of(width: f64, height: f64) -> Self {
        if width >= height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// The other orientation.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Landscape => Self::Portrait,
            Self::Portrait => Self::Landscape,
        }
    }

    /// Whether this is [`Landscape`](Self::Landscape).
    pub const fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape)
    }

    /// Lowercase name, as used in configuration strings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }
}

/// Direction of the quarter turn between logical and physical orientation.
///
/// Named by the way a viewer turns the device to see the content upright:
///
/// ```text
///     Clockwise                      CounterClockwise
///     (landscape device,             (portrait device,
///      portrait content)              landscape content)
///
///     ┌────┬───────────┐             ┌──────────┐
///     │ UI │ ◀ top     │             │    UI    │
///     │    │  content  │             ├──────────┤
///     │    │           │             │ content  │
///     └────┴───────────┘             │   top ▶  │
///                                    └──────────┘
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationSense {
    /// Physical landscape showing logical portrait content.
    #[default]
    Clockwise,
    /// Physical portrait showing logical landscape content.
    CounterClockwise,
}

impl RotationSense {
    /// Signed quarter turns on a y-down raster (positive = screen-clockwise)
    /// that rotate the UI region into place.
    ///
    /// The content transform uses a fixed `+1` turn for both senses and
    /// mirrors instead; see [`build_content_transform`](crate::build_content_transform).
    pub const fn quarter_turns(self) -> i8 {
        match self {
            Self::Clockwise => -1,
            Self::CounterClockwise => 1,
        }
    }
}

/// Whether content needs a quarter turn this cycle, and which way.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationDecision {
    /// True iff physical and logical orientation differ.
    pub needs_rotation: bool,
    /// Meaningful only when `needs_rotation`; reported as
    /// [`RotationSense::Clockwise`] otherwise.
    pub sense: RotationSense,
}

impl RotationDecision {
    /// No rotation.
    pub const NONE: Self = Self {
        needs_rotation: false,
        sense: RotationSense::Clockwise,
    };

    /// The sense, if a rotation is needed.
    pub fn rotation(self) -> Option<RotationSense> {
        self.needs_rotation.then_some(self.sense)
    }
}

/// Decide whether logical content must be rotated on this physical layout.
///
/// A 2 × 2 truth table with no hidden state:
///
/// | physical  | logical   | rotation           |
/// |-----------|-----------|--------------------|
/// | Landscape | Landscape | none               |
/// | Landscape | Portrait  | `Clockwise`        |
/// | Portrait  | Landscape | `CounterClockwise` |
/// | Portrait  | Portrait  | none               |
pub fn resolve(physical: Orientation, logical: Orientation) -> RotationDecision {
    match (physical, logical) {
        (Orientation::Landscape, Orientation::Portrait) => RotationDecision {
            needs_rotation: true,
            sense: RotationSense::Clockwise,
        },
        (Orientation::Portrait, Orientation::Landscape) => RotationDecision {
            needs_rotation: true,
            sense: RotationSense::CounterClockwise,
        },
        _ => RotationDecision::NONE,
    }
}
