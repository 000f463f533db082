// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Four-sided percentage cropping.

use kurbo::{Size, Vec2};

/// Percentage crop from each edge, in CSS order.
///
/// Each side is a percentage (`0.0..=100.0`) of the corresponding dimension
/// and is clamped independently. Opposite sides may sum past 100; the cropped
/// extent then collapses to zero rather than going negative.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CropSpec {
    /// Percentage removed from the top edge.
    pub top: f64,
    /// Percentage removed from the right edge.
    pub right: f64,
    /// Percentage removed from the bottom edge.
    pub bottom: f64,
    /// Percentage removed from the left edge.
    pub left: f64,
}

impl CropSpec {
    /// No cropping on any side.
    pub const NONE: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a crop from CSS-ordered sides.
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Crops the same percentage from every edge.
    #[must_use]
    pub const fn uniform(percent: f64) -> Self {
        Self::new(percent, percent, percent, percent)
    }

    /// Returns this crop with every side clamped to `0.0..=100.0`.
    ///
    /// Negative and non-finite sides become `0.0`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            top: clamp_percent(self.top),
            right: clamp_percent(self.right),
            bottom: clamp_percent(self.bottom),
            left: clamp_percent(self.left),
        }
    }

    /// Whether every side is zero after clamping.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clamped() == Self::NONE
    }
}

/// Clamps a single crop side into `0.0..=100.0`, treating non-finite input as `0.0`.
pub(crate) fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Visible sub-rectangle produced by [`apply_crop`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CroppedSize {
    /// Size of the visible region; never negative.
    pub size: Size,
    /// Offset of the visible region from the uncropped top-left corner.
    ///
    /// Only meaningful for display; the uncropped size is not recoverable from it.
    pub offset: Vec2,
}

/// Applies `crop` to already-fitted `size`.
///
/// Without a crop this is a passthrough with zero offset.
///
/// ```
/// use kurbo::Size;
/// use framefit_geometry::{CropSpec, apply_crop};
///
/// let cropped = apply_crop(Size::new(960.0, 540.0), Some(&CropSpec::new(10.0, 0.0, 10.0, 0.0)));
/// assert_eq!(cropped.size, Size::new(960.0, 432.0));
/// assert_eq!(cropped.offset.y, 54.0);
/// ```
#[must_use]
pub fn apply_crop(size: Size, crop: Option<&CropSpec>) -> CroppedSize {
    let Some(crop) = crop else {
        return CroppedSize {
            size,
            offset: Vec2::ZERO,
        };
    };
    let crop = crop.clamped();

    let width = size.width * (1.0 - (crop.left + crop.right) / 100.0);
    let height = size.height * (1.0 - (crop.top + crop.bottom) / 100.0);

    CroppedSize {
        size: Size::new(width.max(0.0), height.max(0.0)),
        offset: Vec2::new(size.width * crop.left / 100.0, size.height * crop.top / 100.0),
    }
}
