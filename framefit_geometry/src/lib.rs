// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Framefit Geometry: where a clip's content lands on the canvas and on screen.
//!
//! This crate is the headless geometry core of a clip editor. Given a clip
//! placed in a (possibly multi-cell) layout on a fixed-size canvas, it computes
//! the exact content rectangle after:
//! - object-fit ([`FitMode::Contain`], [`FitMode::Cover`], [`FitMode::Fill`]),
//! - percentage cropping ([`CropSpec`]),
//! - scale, translation and rotation ([`ClipTransform`]).
//!
//! It also projects canvas pixels to screen pixels, both for a plain zoom and
//! device pixel ratio ([`apply_screen_transform`]) and for a canvas displayed
//! inside a letterboxed player container ([`StageView`]).
//!
//! It does **not** render pixels, decode media or own the clips. Callers keep
//! their clips and layouts and ask this crate for derived rectangles.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use framefit_geometry::{Clip, LayoutKind, content_rect};
//!
//! let canvas = Size::new(960.0, 540.0);
//! let clip = Clip::new(0).with_intrinsic(1920.0, 1080.0);
//!
//! let rect = content_rect(&clip, canvas, LayoutKind::Single);
//! assert_eq!(rect, Rect::new(0.0, 0.0, 960.0, 540.0));
//! ```
//!
//! ## Editing a transform
//!
//! Transforms are only changed through [`validate_transform`], usually via
//! [`ClipTransform::apply`]. Out-of-range values are clamped, rotations are
//! wrapped into `0..360`, and non-finite values fall back to defaults.
//!
//! ```rust
//! use framefit_geometry::{Clip, PreviewQuality, TransformPatch};
//!
//! let quality = PreviewQuality::Low;
//! let mut clip = Clip::new(0);
//! clip.transform_mut()
//!     .apply(&TransformPatch::new().scale(8.0).rotation(-45.0), &quality.bounds());
//!
//! let t = clip.effective_transform();
//! assert_eq!(t.scale, 5.0);
//! assert_eq!(t.rotation, 315.0);
//! ```
//!
//! ## Pipeline
//!
//! [`content_frame`] chains the stages for a clip:
//! 1. [`Clip::intrinsic_size`], falling back to 1920×1080 for unknown media.
//! 2. [`fit_dimensions`] into the size of the clip's [`LayoutCell`].
//! 3. [`apply_crop`].
//! 4. [`compose_frame`], centering on the cell and applying the transform.
//!
//! The result is a [`ContentFrame`]: the unrotated rectangle plus rotation,
//! which overlays rotate as a whole. [`ContentFrame::bounding_box`] (and
//! [`content_rect`] / [`apply_transforms`]) give the axis-aligned bound.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` float math.
//! - `serde`: `Serialize`/`Deserialize` for the persisted model.
//!
//! This crate is `no_std`.

#![no_std]

mod clip;
mod compose;
mod crop;
mod fit;
mod layout;
mod quality;
mod screen;
mod stage;
mod transform;

pub use clip::Clip;
pub use compose::{
    ContentFrame, apply_transforms, compose_frame, content_frame, content_rect, rotated_bounds,
};
pub use crop::{CropSpec, CroppedSize, apply_crop};
pub use fit::{FitMode, UnknownFitMode, fit_dimensions};
pub use layout::{LayoutCell, LayoutKind, UnknownLayout, layout_cells};
pub use quality::{PreviewQuality, UnknownQuality};
pub use screen::{ScreenProjection, apply_screen_transform};
pub use stage::StageView;
pub use transform::{
    ClipTransform, CssTransform, TransformBounds, TransformPatch, normalize_rotation,
    validate_transform,
};
