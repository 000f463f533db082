// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The clip transform model and its validator.
//!
//! A [`ClipTransform`] is only ever mutated through [`validate_transform`]
//! (directly, or via [`ClipTransform::apply`]), so its fields always sit
//! inside the ranges described by [`TransformBounds`].

use core::fmt;

use kurbo::{Size, Vec2};

use crate::crop::{CropSpec, clamp_percent};
use crate::fit::FitMode;

/// Legal ranges for [`ClipTransform`] fields.
///
/// Position bounds follow the active canvas: a clip may be pushed at most one
/// full canvas width/height away from its natural center.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformBounds {
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Horizontal position limit; positions are clamped to `-max_x..=max_x`.
    pub max_x: f64,
    /// Vertical position limit; positions are clamped to `-max_y..=max_y`.
    pub max_y: f64,
}

impl TransformBounds {
    /// Default lower scale bound.
    pub const MIN_SCALE: f64 = 0.1;
    /// Default upper scale bound.
    pub const MAX_SCALE: f64 = 5.0;

    /// Bounds for a canvas of the given size.
    #[must_use]
    pub fn for_canvas(canvas: Size) -> Self {
        Self {
            min_scale: Self::MIN_SCALE,
            max_scale: Self::MAX_SCALE,
            max_x: canvas.width.abs(),
            max_y: canvas.height.abs(),
        }
    }
}

impl Default for TransformBounds {
    /// Bounds for a 1920×1080 canvas.
    fn default() -> Self {
        Self::for_canvas(Size::new(1920.0, 1080.0))
    }
}

/// Scale, translation, rotation, fit and crop applied to a clip.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ClipTransform {
    /// Uniform scale multiplier.
    pub scale: f64,
    /// Horizontal offset from the natural center, in canvas pixels.
    pub position_x: f64,
    /// Vertical offset from the natural center, in canvas pixels.
    pub position_y: f64,
    /// Clockwise rotation in degrees, in `0.0..360.0`.
    pub rotation: f64,
    /// How the media is fitted into its cell.
    pub fit_mode: FitMode,
    /// Optional crop; `None` shows the whole fitted media.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub crop: Option<CropSpec>,
}

impl Default for ClipTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ClipTransform {
    /// The transform given to a newly placed clip.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        position_x: 0.0,
        position_y: 0.0,
        rotation: 0.0,
        fit_mode: FitMode::Contain,
        crop: None,
    };

    /// Offset from the natural center as a vector.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.position_x, self.position_y)
    }

    /// Validates `patch` and merges the present fields into this transform.
    pub fn apply(&mut self, patch: &TransformPatch, bounds: &TransformBounds) {
        let patch = validate_transform(patch, bounds);
        if let Some(scale) = patch.scale {
            self.scale = scale;
        }
        if let Some(x) = patch.position_x {
            self.position_x = x;
        }
        if let Some(y) = patch.position_y {
            self.position_y = y;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(fit_mode) = patch.fit_mode {
            self.fit_mode = fit_mode;
        }
        if let Some(crop) = patch.crop {
            self.crop = (!crop.is_empty()).then_some(crop);
        }
    }

    /// Returns a copy with `patch` applied.
    #[must_use]
    pub fn with_patch(mut self, patch: &TransformPatch, bounds: &TransformBounds) -> Self {
        self.apply(patch, bounds);
        self
    }

    /// Re-validates every field against `bounds`.
    ///
    /// Useful after the canvas shrinks, e.g. when switching to a lower preview tier.
    #[must_use]
    pub fn validated(self, bounds: &TransformBounds) -> Self {
        Self::IDENTITY.with_patch(&self.to_patch(), bounds)
    }

    /// A patch that sets every field of this transform.
    #[must_use]
    pub fn to_patch(&self) -> TransformPatch {
        TransformPatch {
            scale: Some(self.scale),
            position_x: Some(self.position_x),
            position_y: Some(self.position_y),
            rotation: Some(self.rotation),
            fit_mode: Some(self.fit_mode),
            crop: Some(self.crop.unwrap_or(CropSpec::NONE)),
        }
    }

    /// CSS-style rendering of this transform for the media renderer.
    ///
    /// ```
    /// use framefit_geometry::ClipTransform;
    ///
    /// let t = ClipTransform {
    ///     scale: 1.5,
    ///     position_x: 12.0,
    ///     position_y: -4.0,
    ///     rotation: 90.0,
    ///     ..ClipTransform::IDENTITY
    /// };
    /// assert_eq!(t.css().to_string(), "translate(12px, -4px) scale(1.5) rotate(90deg)");
    /// ```
    #[must_use]
    pub fn css(&self) -> CssTransform {
        CssTransform(*self)
    }
}

/// [`Display`](fmt::Display) adapter producing `translate(x, y) scale(s) rotate(d deg)`.
///
/// The order is fixed; renderers must not reorder the functions.
#[derive(Clone, Copy, Debug)]
pub struct CssTransform(ClipTransform);

impl fmt::Display for CssTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.0;
        write!(
            f,
            "translate({}px, {}px) scale({}) rotate({}deg)",
            t.position_x, t.position_y, t.scale, t.rotation
        )
    }
}

/// A partial update to a [`ClipTransform`]; absent fields are left untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TransformPatch {
    /// New scale.
    pub scale: Option<f64>,
    /// New horizontal offset.
    pub position_x: Option<f64>,
    /// New vertical offset.
    pub position_y: Option<f64>,
    /// New rotation in degrees; any value, it is normalized.
    pub rotation: Option<f64>,
    /// New fit mode.
    pub fit_mode: Option<FitMode>,
    /// New crop; an all-zero crop clears it.
    pub crop: Option<CropSpec>,
}

impl TransformPatch {
    /// An empty patch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scale: None,
            position_x: None,
            position_y: None,
            rotation: None,
            fit_mode: None,
            crop: None,
        }
    }

    /// Sets the scale.
    #[must_use]
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Sets both position components.
    #[must_use]
    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.position_x = Some(x);
        self.position_y = Some(y);
        self
    }

    /// Sets the rotation in degrees.
    #[must_use]
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Sets the fit mode.
    #[must_use]
    pub fn fit_mode(mut self, mode: FitMode) -> Self {
        self.fit_mode = Some(mode);
        self
    }

    /// Sets the crop.
    #[must_use]
    pub fn crop(mut self, crop: CropSpec) -> Self {
        self.crop = Some(crop);
        self
    }

    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }
}

/// Clamps and wraps every present field of `patch`.
///
/// - `scale` is clamped to `bounds.min_scale..=bounds.max_scale`.
/// - positions are clamped to `±bounds.max_x` / `±bounds.max_y`.
/// - `rotation` is wrapped into `0.0..360.0`, including negative input.
/// - each crop side is clamped to `0.0..=100.0`.
/// - `fit_mode` passes through.
///
/// Non-finite numbers collapse to the field's default (scale `1`, position
/// `0`, rotation `0`, crop side `0`) before clamping.
///
/// ```
/// use framefit_geometry::{TransformBounds, TransformPatch, validate_transform};
///
/// let bounds = TransformBounds::default();
/// let patch = validate_transform(&TransformPatch::new().scale(10.0).rotation(-10.0), &bounds);
/// assert_eq!(patch.scale, Some(5.0));
/// assert_eq!(patch.rotation, Some(350.0));
/// assert_eq!(patch.position_x, None);
/// ```
#[must_use]
pub fn validate_transform(patch: &TransformPatch, bounds: &TransformBounds) -> TransformPatch {
    TransformPatch {
        scale: patch
            .scale
            .map(|s| finite_or(s, 1.0).clamp(bounds.min_scale, bounds.max_scale)),
        position_x: patch
            .position_x
            .map(|x| finite_or(x, 0.0).clamp(-bounds.max_x, bounds.max_x)),
        position_y: patch
            .position_y
            .map(|y| finite_or(y, 0.0).clamp(-bounds.max_y, bounds.max_y)),
        rotation: patch.rotation.map(normalize_rotation),
        fit_mode: patch.fit_mode,
        crop: patch.crop.map(|c| CropSpec {
            top: clamp_percent(c.top),
            right: clamp_percent(c.right),
            bottom: clamp_percent(c.bottom),
            left: clamp_percent(c.left),
        }),
    }
}

/// Wraps `degrees` into `0.0..360.0`.
///
/// Plain `%` keeps the sign of the dividend, so negative angles are shifted by
/// a full turn before the second reduction. Non-finite input yields `0.0`.
#[must_use]
pub fn normalize_rotation(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = ((degrees % 360.0) + 360.0) % 360.0;
    // `-0.0` and tiny negatives can round up to exactly one turn.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}
