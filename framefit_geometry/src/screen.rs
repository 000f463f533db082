// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas-pixel to device-pixel projection.

use kurbo::{Point, Rect};

use crate::compose::ContentFrame;

/// Multiplies every component of `rect` by `zoom * device_pixel_ratio`.
///
/// The factor is not clamped; callers own sane zoom values.
///
/// ```
/// use kurbo::Rect;
/// use framefit_geometry::apply_screen_transform;
///
/// let rect = apply_screen_transform(Rect::new(10.0, 20.0, 110.0, 70.0), 0.5, 2.0);
/// assert_eq!(rect, Rect::new(10.0, 20.0, 110.0, 70.0));
/// ```
#[must_use]
pub fn apply_screen_transform(rect: Rect, zoom: f64, device_pixel_ratio: f64) -> Rect {
    rect.scale_from_origin(zoom * device_pixel_ratio)
}

/// A fixed zoom and device pixel ratio pair.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ScreenProjection {
    /// User zoom.
    pub zoom: f64,
    /// Physical pixels per logical pixel.
    pub device_pixel_ratio: f64,
}

impl Default for ScreenProjection {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl ScreenProjection {
    /// Creates a projection.
    #[must_use]
    pub const fn new(zoom: f64, device_pixel_ratio: f64) -> Self {
        Self {
            zoom,
            device_pixel_ratio,
        }
    }

    /// The combined scale factor.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.zoom * self.device_pixel_ratio
    }

    /// Projects a canvas rect into device pixels.
    #[must_use]
    pub fn project_rect(&self, rect: Rect) -> Rect {
        apply_screen_transform(rect, self.zoom, self.device_pixel_ratio)
    }

    /// Projects a frame; rotation is preserved since the scale is uniform.
    #[must_use]
    pub fn project_frame(&self, frame: &ContentFrame) -> ContentFrame {
        frame.scale_from_origin(self.factor())
    }

    /// Maps a device-pixel point back into canvas pixels.
    ///
    /// Returns `None` when the factor is zero or non-finite.
    #[must_use]
    pub fn unproject_point(&self, point: Point) -> Option<Point> {
        let factor = self.factor();
        (factor.is_finite() && factor != 0.0)
            .then(|| Point::new(point.x / factor, point.y / factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_every_component() {
        let rect = Rect::from_origin_size((10.0, 20.0), (30.0, 40.0));
        let projected = apply_screen_transform(rect, 1.5, 2.0);
        assert_eq!(projected, Rect::from_origin_size((30.0, 60.0), (90.0, 120.0)));
    }

    #[test]
    fn zero_factor_collapses_without_clamping() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(apply_screen_transform(rect, 0.0, 2.0), Rect::ZERO);
        assert!(ScreenProjection::new(0.0, 2.0).unproject_point(Point::ORIGIN).is_none());
    }

    #[test]
    fn projection_round_trips_points() {
        let projection = ScreenProjection::new(1.25, 2.0);
        let canvas = Point::new(40.0, 16.0);
        let device = Point::new(canvas.x * 2.5, canvas.y * 2.5);
        assert_eq!(projection.unproject_point(device), Some(canvas));
        let frame = ContentFrame::new(Rect::new(0.0, 0.0, 8.0, 4.0), 30.0);
        let projected = projection.project_frame(&frame);
        assert_eq!(projected.rect, Rect::new(0.0, 0.0, 20.0, 10.0));
        assert_eq!(projected.rotation, 30.0);
    }
}
