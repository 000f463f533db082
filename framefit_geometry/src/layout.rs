// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named multi-cell layouts.
//!
//! A layout splits the canvas into percentage cells; clip layer `n` is placed in
//! cell `n`. Every layout tiles the canvas exactly, with no gaps or overlap.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size};

/// A sub-region of the canvas, in percentages (`0.0..=100.0`) of canvas size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutCell {
    /// Left edge, percent of canvas width.
    pub x: f64,
    /// Top edge, percent of canvas height.
    pub y: f64,
    /// Width, percent of canvas width.
    pub width: f64,
    /// Height, percent of canvas height.
    pub height: f64,
}

impl LayoutCell {
    /// Creates a cell from percentages.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Converts this cell into canvas pixels.
    #[must_use]
    pub fn to_canvas_rect(&self, canvas: Size) -> Rect {
        let x0 = canvas.width * self.x / 100.0;
        let y0 = canvas.height * self.y / 100.0;
        Rect::from_origin_size(
            (x0, y0),
            (
                canvas.width * self.width / 100.0,
                canvas.height * self.height / 100.0,
            ),
        )
    }

    /// Center of this cell in canvas pixels.
    #[must_use]
    pub fn center_on(&self, canvas: Size) -> Point {
        Point::new(
            canvas.width * (self.x + self.width / 2.0) / 100.0,
            canvas.height * (self.y + self.height / 2.0) / 100.0,
        )
    }

    /// Area in percent² (the full canvas is `10_000`).
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

const THIRD: f64 = 33.33;
const LAST_THIRD: f64 = 33.34;

const SINGLE: [LayoutCell; 1] = [LayoutCell::new(0.0, 0.0, 100.0, 100.0)];

const TWO_LAYER: [LayoutCell; 2] = [
    LayoutCell::new(0.0, 0.0, 50.0, 100.0),
    LayoutCell::new(50.0, 0.0, 50.0, 100.0),
];

// Stacked horizontal bands; the last band absorbs the rounding remainder.
const V_TRIPTYCH: [LayoutCell; 3] = [
    LayoutCell::new(0.0, 0.0, 100.0, THIRD),
    LayoutCell::new(0.0, THIRD, 100.0, THIRD),
    LayoutCell::new(0.0, 2.0 * THIRD, 100.0, LAST_THIRD),
];

// Side-by-side columns.
const H_TRIPTYCH: [LayoutCell; 3] = [
    LayoutCell::new(0.0, 0.0, THIRD, 100.0),
    LayoutCell::new(THIRD, 0.0, THIRD, 100.0),
    LayoutCell::new(2.0 * THIRD, 0.0, LAST_THIRD, 100.0),
];

const GRID_2X2: [LayoutCell; 4] = [
    LayoutCell::new(0.0, 0.0, 50.0, 50.0),
    LayoutCell::new(50.0, 0.0, 50.0, 50.0),
    LayoutCell::new(0.0, 50.0, 50.0, 50.0),
    LayoutCell::new(50.0, 50.0, 50.0, 50.0),
];

/// A named, static layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutKind {
    /// One cell covering the whole canvas.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "single"))]
    Single,
    /// Left and right halves.
    #[cfg_attr(feature = "serde", serde(rename = "2-layer"))]
    TwoLayer,
    /// Three stacked horizontal bands.
    #[cfg_attr(feature = "serde", serde(rename = "v-triptych"))]
    VerticalTriptych,
    /// Three side-by-side columns.
    #[cfg_attr(feature = "serde", serde(rename = "h-triptych"))]
    HorizontalTriptych,
    /// Four quadrants, row-major.
    #[cfg_attr(feature = "serde", serde(rename = "2x2-grid"))]
    Grid2x2,
}

impl LayoutKind {
    /// Every named layout.
    pub const ALL: [Self; 5] = [
        Self::Single,
        Self::TwoLayer,
        Self::VerticalTriptych,
        Self::HorizontalTriptych,
        Self::Grid2x2,
    ];

    /// The persisted name of this layout.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::TwoLayer => "2-layer",
            Self::VerticalTriptych => "v-triptych",
            Self::HorizontalTriptych => "h-triptych",
            Self::Grid2x2 => "2x2-grid",
        }
    }

    /// Looks up a layout by name, falling back to [`LayoutKind::Single`].
    ///
    /// Unknown names are not an error; the fallback is logged at debug level.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|err| {
            log::debug!("{err}, falling back to `single`");
            Self::Single
        })
    }

    /// The cells of this layout, in layer order.
    #[must_use]
    pub const fn cells(self) -> &'static [LayoutCell] {
        match self {
            Self::Single => &SINGLE,
            Self::TwoLayer => &TWO_LAYER,
            Self::VerticalTriptych => &V_TRIPTYCH,
            Self::HorizontalTriptych => &H_TRIPTYCH,
            Self::Grid2x2 => &GRID_2X2,
        }
    }

    /// The cell for `layer`, if this layout has one.
    #[must_use]
    pub fn cell(self, layer: usize) -> Option<&'static LayoutCell> {
        self.cells().get(layer)
    }

    /// Number of cells (and therefore usable layers).
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.cells().len()
    }

    /// Whether this layout places more than one layer.
    #[must_use]
    pub const fn is_multi_cell(self) -> bool {
        self.cell_count() > 1
    }
}

/// Cells for a layout name; unknown names yield the `single` layout.
#[must_use]
pub fn layout_cells(name: &str) -> &'static [LayoutCell] {
    LayoutKind::from_name(name).cells()
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a layout name is not recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownLayout;

impl fmt::Display for UnknownLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown layout name")
    }
}

impl core::error::Error for UnknownLayout {}

impl FromStr for LayoutKind {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or(UnknownLayout)
    }
}
