// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};
use smallvec::SmallVec;

use framefit_geometry::LayoutKind;

/// Separator bars between the cells of `layout`, in canvas pixels.
///
/// Each cell contributes a bar along its right and bottom edges unless that
/// edge is the canvas border. Bars are `thickness` wide and centered on the
/// shared edge. A single-cell layout has none.
///
/// ```
/// use kurbo::{Rect, Size};
/// use framefit_geometry::LayoutKind;
/// use framefit_style::cell_separators;
///
/// let bars = cell_separators(LayoutKind::TwoLayer, Size::new(1000.0, 500.0), 4.0);
/// assert_eq!(bars.as_slice(), &[Rect::new(498.0, 0.0, 502.0, 500.0)]);
/// ```
#[must_use]
pub fn cell_separators(layout: LayoutKind, canvas: Size, thickness: f64) -> SmallVec<[Rect; 4]> {
    let half = thickness.max(0.0) / 2.0;
    let mut bars = SmallVec::new();
    if half == 0.0 {
        return bars;
    }
    for cell in layout.cells() {
        let r = cell.to_canvas_rect(canvas);
        if cell.x + cell.width < 100.0 - 1e-9 {
            bars.push(Rect::new(r.x1 - half, r.y0, r.x1 + half, r.y1));
        }
        if cell.y + cell.height < 100.0 - 1e-9 {
            bars.push(Rect::new(r.x0, r.y1 - half, r.x1, r.y1 + half));
        }
    }
    bars
}
