// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Object-fit semantics for placing media inside a container.

use core::fmt;
use core::str::FromStr;

use kurbo::Size;

/// How intrinsic media dimensions are mapped onto a container.
///
/// These follow the CSS `object-fit` keywords of the same name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FitMode {
    /// Largest aspect-preserving size that fits entirely inside the container.
    #[default]
    Contain,
    /// Smallest aspect-preserving size that fully covers the container.
    ///
    /// The result overflows the container on at most one axis.
    Cover,
    /// Exactly the container size; the aspect ratio may be distorted.
    Fill,
}

impl FitMode {
    /// All fit modes, in declaration order.
    pub const ALL: [Self; 3] = [Self::Contain, Self::Cover, Self::Fill];

    /// The keyword used for this mode in persisted data and CSS.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Contain => "contain",
            Self::Cover => "cover",
            Self::Fill => "fill",
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a [`FitMode`] from an unrecognized keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownFitMode;

impl fmt::Display for UnknownFitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown fit mode, expected one of `contain`, `cover`, `fill`")
    }
}

impl core::error::Error for UnknownFitMode {}

impl FromStr for FitMode {
    type Err = UnknownFitMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or(UnknownFitMode)
    }
}

/// Computes the displayed size of media with `intrinsic` dimensions inside `container`.
///
/// - [`FitMode::Fill`] returns `container` unchanged.
/// - [`FitMode::Contain`] is width-bound when the media is relatively wider than
///   the container, height-bound otherwise.
/// - [`FitMode::Cover`] picks the opposite bound.
///
/// When either size has a zero or non-finite extent there is no meaningful
/// aspect ratio; `container` is returned instead of dividing by zero.
///
/// ```
/// use kurbo::Size;
/// use framefit_geometry::{FitMode, fit_dimensions};
///
/// let fitted = fit_dimensions(
///     Size::new(1000.0, 500.0),
///     Size::new(400.0, 300.0),
///     FitMode::Contain,
/// );
/// assert_eq!(fitted, Size::new(400.0, 200.0));
/// ```
#[must_use]
pub fn fit_dimensions(intrinsic: Size, container: Size, mode: FitMode) -> Size {
    if mode == FitMode::Fill || !has_area(intrinsic) || !has_area(container) {
        return container;
    }

    let intrinsic_aspect = intrinsic.width / intrinsic.height;
    let container_aspect = container.width / container.height;
    let relatively_wider = intrinsic_aspect > container_aspect;

    let width_bound = match mode {
        FitMode::Contain => relatively_wider,
        FitMode::Cover => !relatively_wider,
        FitMode::Fill => unreachable!("handled above"),
    };

    if width_bound {
        Size::new(container.width, container.width / intrinsic_aspect)
    } else {
        Size::new(container.height * intrinsic_aspect, container.height)
    }
}

fn has_area(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
