// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composing scale, translation and rotation into a canvas-space frame.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Size};

use crate::clip::Clip;
use crate::crop::apply_crop;
use crate::fit::fit_dimensions;
use crate::layout::{LayoutCell, LayoutKind};
use crate::transform::ClipTransform;

/// The placed content: an unrotated rectangle plus a rotation about its center.
///
/// Renderers and overlays apply [`ContentFrame::rotation`] as a true rotation,
/// so handles follow the rotated content. [`ContentFrame::bounding_box`] is the
/// axis-aligned bound used for measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentFrame {
    /// Unrotated content rectangle.
    pub rect: Rect,
    /// Clockwise rotation in degrees about `rect.center()`.
    pub rotation: f64,
}

impl ContentFrame {
    /// Creates a frame.
    #[must_use]
    pub const fn new(rect: Rect, rotation: f64) -> Self {
        Self { rect, rotation }
    }

    /// Center of the frame; rotation does not move it.
    #[must_use]
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// Unrotated size of the frame.
    #[must_use]
    pub fn size(&self) -> Size {
        self.rect.size()
    }

    /// Maps frame-local coordinates (the unrotated rect) into the rotated frame.
    #[must_use]
    pub fn rotation_transform(&self) -> Affine {
        Affine::rotate_about(self.rotation.to_radians(), self.center())
    }

    /// Rotates a point into the frame's local, unrotated axes.
    #[must_use]
    pub fn to_local(&self, point: Point) -> Point {
        if self.rotation == 0.0 {
            return point;
        }
        Affine::rotate_about(-self.rotation.to_radians(), self.center()) * point
    }

    /// Whether `point` lies inside the rotated frame.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(self.to_local(point))
    }

    /// Corners of the rotated frame, clockwise from the unrotated top-left.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        let r = self.rect;
        let t = self.rotation_transform();
        [
            t * Point::new(r.x0, r.y0),
            t * Point::new(r.x1, r.y0),
            t * Point::new(r.x1, r.y1),
            t * Point::new(r.x0, r.y1),
        ]
    }

    /// Axis-aligned bounding box of the rotated frame.
    ///
    /// Exactly `rect` when the frame is not rotated.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        if self.rotation == 0.0 {
            return self.rect;
        }
        Rect::from_center_size(self.center(), rotated_bounds(self.size(), self.rotation))
    }

    /// Scales the frame about the coordinate origin.
    #[must_use]
    pub fn scale_from_origin(&self, factor: f64) -> Self {
        Self {
            rect: self.rect.scale_from_origin(factor),
            rotation: self.rotation,
        }
    }
}

/// Size of the axis-aligned box enclosing `size` rotated by `degrees`.
///
/// `w|cos θ| + h|sin θ|` by `w|sin θ| + h|cos θ|`.
#[must_use]
pub fn rotated_bounds(size: Size, degrees: f64) -> Size {
    let theta = degrees.to_radians();
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
    Size::new(
        size.width * cos + size.height * sin,
        size.width * sin + size.height * cos,
    )
}

/// Places `cropped` content on the canvas.
///
/// The content is scaled by `transform.scale` and centered on the cell center
/// (or the canvas center without a cell), offset by the transform position.
#[must_use]
pub fn compose_frame(
    cropped: Size,
    transform: &ClipTransform,
    canvas: Size,
    cell: Option<&LayoutCell>,
) -> ContentFrame {
    let size = cropped * transform.scale;
    let base = cell.map_or_else(
        || Point::new(canvas.width / 2.0, canvas.height / 2.0),
        |cell| cell.center_on(canvas),
    );
    let center = base + transform.position();
    ContentFrame::new(Rect::from_center_size(center, size), transform.rotation)
}

/// Canvas-space content rect: the bounding box of [`compose_frame`].
///
/// ```
/// use kurbo::{Rect, Size};
/// use framefit_geometry::{ClipTransform, apply_transforms};
///
/// let canvas = Size::new(960.0, 540.0);
/// let rect = apply_transforms(canvas, &ClipTransform::IDENTITY, canvas, None);
/// assert_eq!(rect, Rect::new(0.0, 0.0, 960.0, 540.0));
/// ```
#[must_use]
pub fn apply_transforms(
    cropped: Size,
    transform: &ClipTransform,
    canvas: Size,
    cell: Option<&LayoutCell>,
) -> Rect {
    compose_frame(cropped, transform, canvas, cell).bounding_box()
}

/// Runs the whole pipeline for `clip`: fit into its cell, crop, then compose.
///
/// A clip whose layer has no cell in `layout` is fitted into and centered on
/// the whole canvas.
#[must_use]
pub fn content_frame(clip: &Clip, canvas: Size, layout: LayoutKind) -> ContentFrame {
    let cell = layout.cell(clip.layer);
    if cell.is_none() {
        log::trace!(
            "layer {} has no cell in `{layout}`, using the whole canvas",
            clip.layer
        );
    }
    let container = cell.map_or(canvas, |cell| cell.to_canvas_rect(canvas).size());
    let transform = clip.effective_transform();
    let fitted = fit_dimensions(clip.intrinsic_size(), container, transform.fit_mode);
    let cropped = apply_crop(fitted, transform.crop.as_ref());
    compose_frame(cropped.size, &transform, canvas, cell)
}

/// Canvas-space content rect for `clip`; the bounding box of [`content_frame`].
#[must_use]
pub fn content_rect(clip: &Clip, canvas: Size, layout: LayoutKind) -> Rect {
    content_frame(clip, canvas, layout).bounding_box()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Size = Size::new(1000.0, 1000.0);

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn unrotated_frame_is_centered_on_cell() {
        let cell = LayoutKind::TwoLayer.cell(1);
        let frame = compose_frame(Size::new(200.0, 100.0), &ClipTransform::IDENTITY, CANVAS, cell);
        assert_eq!(frame.center(), Point::new(750.0, 500.0));
        assert_eq!(frame.rect, Rect::new(650.0, 450.0, 850.0, 550.0));
        assert_eq!(frame.bounding_box(), frame.rect);
    }

    #[test]
    fn scale_and_position_apply_about_center() {
        let t = ClipTransform {
            scale: 2.0,
            position_x: 10.0,
            position_y: -20.0,
            ..ClipTransform::IDENTITY
        };
        let rect = apply_transforms(Size::new(100.0, 50.0), &t, CANVAS, None);
        assert_eq!(rect, Rect::new(410.0, 430.0, 610.0, 530.0));
    }

    #[test]
    fn quarter_turn_swaps_extents() {
        let bounds = rotated_bounds(Size::new(300.0, 100.0), 90.0);
        assert!(close(bounds.width, 100.0) && close(bounds.height, 300.0));
    }

    #[test]
    fn rotated_bounding_box_contains_every_corner() {
        let sizes = [Size::new(300.0, 100.0), Size::new(50.0, 400.0), Size::new(10.0, 10.0)];
        for size in sizes {
            for step in 0_u32..72 {
                let rotation = f64::from(step) * 5.0;
                let t = ClipTransform {
                    rotation,
                    ..ClipTransform::IDENTITY
                };
                let frame = compose_frame(size, &t, CANVAS, None);
                let bbox = frame.bounding_box().inflate(1e-9, 1e-9);
                for corner in frame.corners() {
                    assert!(bbox.contains(corner), "{corner:?} outside {bbox:?} at {rotation}°");
                }
                assert!(bbox.area() >= size.width * size.height - 1e-6);
                assert!(close(bbox.center().x, 500.0) && close(bbox.center().y, 500.0));
            }
        }
    }

    #[test]
    fn local_coordinates_undo_rotation() {
        let frame = ContentFrame::new(Rect::new(0.0, 0.0, 200.0, 100.0), 90.0);
        // After a clockwise quarter turn the unrotated right edge points down.
        let below = Point::new(100.0, 140.0);
        assert!(frame.contains(below));
        let local = frame.to_local(below);
        assert!(close(local.x, 190.0) && close(local.y, 50.0));
        assert!(!frame.contains(Point::new(190.0, 50.0)));
    }

    #[test]
    fn missing_layer_falls_back_to_canvas() {
        let clip = Clip::new(5).with_intrinsic(1000.0, 1000.0);
        let frame = content_frame(&clip, CANVAS, LayoutKind::TwoLayer);
        assert_eq!(frame.rect, Rect::new(0.0, 0.0, 1000.0, 1000.0));
    }

    #[test]
    fn pipeline_fits_into_cell_size() {
        let clip = Clip::new(0).with_intrinsic(1920.0, 1080.0);
        let rect = content_rect(&clip, CANVAS, LayoutKind::TwoLayer);
        // A 500×1000 cell holds 16:9 media width-bound.
        assert!(close(rect.width(), 500.0));
        assert!(close(rect.height(), 500.0 * 1080.0 / 1920.0));
        assert!(close(rect.center().x, 250.0) && close(rect.center().y, 500.0));
    }
}
