// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::compose::ContentFrame;

/// The canvas as displayed inside a player container.
///
/// `StageView` fits the fixed-size canvas into the container with `contain`
/// semantics, centering it and leaving letterbox or pillarbox bars on one axis.
/// It converts between container (screen) coordinates and canvas pixels:
/// - canvas → screen, to place overlays over the rendered media.
/// - screen → canvas, to turn pointer movement into transform edits.
///
/// The mapping is a uniform scale plus a translation, so rectangles map to
/// rectangles and rotations are preserved.
#[derive(Clone, Debug, PartialEq)]
pub struct StageView {
    container: Rect,
    canvas: Size,
    scale: f64,
    canvas_to_screen: Affine,
    screen_to_canvas: Affine,
}

impl StageView {
    /// Creates a stage for `canvas` displayed inside `container`.
    ///
    /// Returns `None` while either has no area, e.g. before the container's
    /// first layout; pointer input should be ignored until a stage exists.
    #[must_use]
    pub fn new(container: Rect, canvas: Size) -> Option<Self> {
        let view = container.size();
        if !has_area(view) || !has_area(canvas) {
            return None;
        }
        let scale = (view.width / canvas.width).min(view.height / canvas.height);
        let displayed = canvas * scale;
        let offset = container.origin().to_vec2()
            + Vec2::new(
                (view.width - displayed.width) / 2.0,
                (view.height - displayed.height) / 2.0,
            );
        let canvas_to_screen = Affine::translate(offset) * Affine::scale(scale);
        Some(Self {
            container,
            canvas,
            scale,
            canvas_to_screen,
            screen_to_canvas: canvas_to_screen.inverse(),
        })
    }

    /// The container rectangle in screen coordinates.
    #[must_use]
    pub fn container(&self) -> Rect {
        self.container
    }

    /// The canvas size in canvas pixels.
    #[must_use]
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Screen pixels per canvas pixel.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The region of the container the canvas is drawn into.
    #[must_use]
    pub fn displayed_rect(&self) -> Rect {
        self.canvas_to_screen_rect(self.canvas.to_rect())
    }

    /// Padding between the container and the displayed canvas on each side.
    ///
    /// One component is always zero.
    #[must_use]
    pub fn letterbox(&self) -> Vec2 {
        self.displayed_rect().origin() - self.container.origin()
    }

    /// Converts a canvas-space point into screen coordinates.
    #[must_use]
    pub fn canvas_to_screen_point(&self, point: Point) -> Point {
        self.canvas_to_screen * point
    }

    /// Converts a screen-space point into canvas pixels.
    #[must_use]
    pub fn screen_to_canvas_point(&self, point: Point) -> Point {
        self.screen_to_canvas * point
    }

    /// Converts a canvas-space rectangle into screen coordinates.
    #[must_use]
    pub fn canvas_to_screen_rect(&self, rect: Rect) -> Rect {
        self.canvas_to_screen.transform_rect_bbox(rect)
    }

    /// Converts a screen-space rectangle into canvas pixels.
    #[must_use]
    pub fn screen_to_canvas_rect(&self, rect: Rect) -> Rect {
        self.screen_to_canvas.transform_rect_bbox(rect)
    }

    /// Converts a screen-space movement into a canvas-space movement.
    ///
    /// Deltas are unaffected by the letterbox offset.
    #[must_use]
    pub fn screen_delta_to_canvas(&self, delta: Vec2) -> Vec2 {
        delta / self.scale
    }

    /// Converts a canvas-space frame into screen coordinates.
    #[must_use]
    pub fn canvas_to_screen_frame(&self, frame: &ContentFrame) -> ContentFrame {
        ContentFrame::new(self.canvas_to_screen_rect(frame.rect), frame.rotation)
    }
}

fn has_area(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
