//! Responsive layout for a fixed-aspect drawing surface with a companion UI region.
//!
//! Sizes a container to a viewport, splits it into a drawing surface and a UI
//! band, and rotates the content when the device is held the other way from
//! the orientation the content was designed for. No drawing, no DOM: the
//! environment is reached through the [`Host`] trait.
//!
//! # Modules
//!
//! - [`constraint`]: viewport, config, container and surface sizing
//! - [`orientation`]: physical vs logical orientation and the rotation between them
//! - [`transform`]: content and UI transforms
//! - [`plan`]: one full layout cycle as a pure function
//! - [`readout`]: dimensions readout text
//! - [`toggle`]: logical orientation state and button label
//! - [`coordinator`]: triggers and host side effects (`alloc`)
//! - [`debounce`]: settle delay for orientation changes (`alloc`)
//! - [`query`]: config from query strings (`query` feature)
//! - [`svg`]: frame visualization (`svg` feature)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod constraint;
pub mod orientation;
pub mod plan;
pub mod readout;
pub mod toggle;
pub mod transform;

#[cfg(feature = "alloc")]
pub mod coordinator;
#[cfg(feature = "alloc")]
pub mod debounce;

#[cfg(feature = "query")]
pub mod query;
#[cfg(feature = "svg")]
pub mod svg;

pub use constraint::{
    LayoutConfig, LayoutError, Rect, SURFACE_SHARE, Size, Viewport, solve_container, solve_surface,
};
pub use orientation::{Orientation, RotationDecision, RotationSense, resolve};
pub use plan::{LayoutFrame, SurfaceAnchor, SurfacePlacement, plan};
pub use readout::Readout;
pub use toggle::ToggleController;
pub use transform::{
    AffineTransform, ContentFrame, Primitive, UiPlacement, build_content_transform,
    build_ui_transform, ui_band,
};

#[cfg(feature = "alloc")]
pub use coordinator::{DrawContextUnavailable, Host, LayoutCoordinator, SkipReason, Trigger};
#[cfg(feature = "alloc")]
pub use debounce::{DEFAULT_SETTLE_DELAY, Debouncer, SettleConfig, SettlePolicy, TaskHandle};
