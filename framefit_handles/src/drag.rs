// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag controller: turns pointer movement on a handle into transform edits.
//!
//! ## Usage
//!
//! 1) On pointer-down over a handle, call [`DragController::begin`] with the
//!    handle, the pointer position, the clip's current transform and its
//!    screen-space frame.
//! 2) On each pointer move, call [`DragController::update`]. It returns the
//!    candidate transform, already validated, for the caller to store.
//! 3) On pointer-up call [`DragController::end`]; on window blur or escape call
//!    [`DragController::cancel`] and optionally restore the returned snapshot.
//!
//! Every update is computed from the snapshot taken at `begin` plus the total
//! pointer offset, never from the live transform. Coalesced or dropped move
//! events therefore end in the same transform as the full event stream.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use ui_events::keyboard::Modifiers;
//! use framefit_geometry::{ClipTransform, ContentFrame, StageView, TransformBounds};
//! use framefit_handles::{DragController, HandleConfig, HandleKind};
//!
//! let stage = StageView::new(Rect::new(0.0, 0.0, 960.0, 540.0), Size::new(1920.0, 1080.0));
//! let frame = ContentFrame::new(Rect::new(0.0, 0.0, 960.0, 540.0), 0.0);
//! let mut drag = DragController::new(HandleConfig::default());
//!
//! drag.begin(HandleKind::Move, Point::new(100.0, 100.0), ClipTransform::IDENTITY, frame);
//! // 12 screen px at half scale is 24 canvas px, snapped to 20.
//! let bounds = TransformBounds::default();
//! let t = drag
//!     .update(Point::new(112.0, 100.0), Modifiers::empty(), stage.as_ref(), &bounds)
//!     .unwrap();
//! assert_eq!(t.position_x, 20.0);
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};
use ui_events::keyboard::Modifiers;

use framefit_geometry::{ClipTransform, ContentFrame, StageView, TransformBounds, TransformPatch};

use crate::config::HandleConfig;
use crate::handle::HandleKind;

/// Everything captured at pointer-down, immutable for the rest of the gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    /// The grabbed handle.
    pub handle: HandleKind,
    /// Pointer position at pointer-down, in screen coordinates.
    pub start_pointer: Point,
    /// The clip transform at pointer-down.
    pub start_transform: ClipTransform,
    /// The clip's content frame at pointer-down, in screen coordinates.
    pub start_frame: ContentFrame,
}

/// Controller phase.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture started from the contained snapshot.
    Dragging(DragState),
}

/// Stateful drag controller; see the [module docs](self).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragController {
    phase: DragPhase,
    config: HandleConfig,
}

impl DragController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new(config: HandleConfig) -> Self {
        Self {
            phase: DragPhase::Idle,
            config,
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &HandleConfig {
        &self.config
    }

    /// Replaces the configuration; an ongoing gesture picks it up on its next update.
    pub fn set_config(&mut self, config: HandleConfig) {
        self.config = config;
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// The active gesture snapshot, if dragging.
    #[must_use]
    pub fn state(&self) -> Option<&DragState> {
        match &self.phase {
            DragPhase::Dragging(state) => Some(state),
            DragPhase::Idle => None,
        }
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    /// Starts a gesture, snapshotting the start state.
    ///
    /// A gesture already in progress is replaced; its pointer-up was lost.
    pub fn begin(
        &mut self,
        handle: HandleKind,
        pointer: Point,
        start_transform: ClipTransform,
        start_frame: ContentFrame,
    ) {
        if self.is_dragging() {
            log::debug!("drag restarted before the previous gesture ended");
        }
        log::debug!("drag begin on {handle:?} at {pointer:?}");
        self.phase = DragPhase::Dragging(DragState {
            handle,
            start_pointer: pointer,
            start_transform,
            start_frame,
        });
    }

    /// Computes the candidate transform for the pointer at `pointer`.
    ///
    /// Returns `None` when idle, or when `stage` is `None` because the player
    /// container has not been laid out yet.
    #[must_use]
    pub fn update(
        &self,
        pointer: Point,
        modifiers: Modifiers,
        stage: Option<&StageView>,
        bounds: &TransformBounds,
    ) -> Option<ClipTransform> {
        let state = self.state()?;
        let Some(stage) = stage else {
            log::trace!("drag update skipped, stage not laid out");
            return None;
        };
        let delta = pointer - state.start_pointer;
        let start = state.start_transform;
        let patch = match state.handle {
            HandleKind::Move => {
                self.move_patch(&start, stage.screen_delta_to_canvas(delta), modifiers)
            }
            HandleKind::Rotate => rotate_patch(state, pointer),
            handle => scale_patch(state, handle, delta, modifiers),
        };
        Some(start.with_patch(&patch, bounds))
    }

    /// Ends the gesture, leaving the last stored transform in place.
    ///
    /// Returns the finished gesture, or `None` if idle.
    pub fn end(&mut self) -> Option<DragState> {
        let state = self.take();
        if let Some(state) = &state {
            log::debug!("drag end on {:?}", state.handle);
        }
        state
    }

    /// Forces the controller idle, e.g. on window blur.
    ///
    /// Returns the transform captured at `begin`, for callers that revert.
    pub fn cancel(&mut self) -> Option<ClipTransform> {
        let state = self.take()?;
        log::debug!("drag cancelled on {:?}", state.handle);
        Some(state.start_transform)
    }

    fn take(&mut self) -> Option<DragState> {
        match core::mem::take(&mut self.phase) {
            DragPhase::Dragging(state) => Some(state),
            DragPhase::Idle => None,
        }
    }

    fn move_patch(
        &self,
        start: &ClipTransform,
        delta: Vec2,
        modifiers: Modifiers,
    ) -> TransformPatch {
        let mut x = start.position_x + delta.x;
        let mut y = start.position_y + delta.y;
        if self.config.snaps(modifiers) {
            let step = self.config.snap_step;
            x = (x / step).round() * step;
            y = (y / step).round() * step;
        }
        TransformPatch::new().position(x, y)
    }
}

/// Angle swept around the frame center since pointer-down, added to the start rotation.
fn rotate_patch(state: &DragState, pointer: Point) -> TransformPatch {
    let center = state.start_frame.center();
    let start_angle = (state.start_pointer - center).atan2();
    let angle = (pointer - center).atan2();
    let swept = (angle - start_angle).to_degrees();
    TransformPatch::new().rotation(state.start_transform.rotation + swept)
}

/// Scale relative to half the displayed size, along the handle's local axes.
fn scale_patch(
    state: &DragState,
    handle: HandleKind,
    delta: Vec2,
    modifiers: Modifiers,
) -> TransformPatch {
    let Some((dir_x, dir_y)) = handle.direction() else {
        return TransformPatch::new();
    };
    let half = state.start_frame.size() / 2.0;
    if half.width <= 0.0 || half.height <= 0.0 {
        return TransformPatch::new();
    }

    // Rotate the screen delta into the frame's unrotated axes.
    let theta = state.start_frame.rotation.to_radians();
    let (sin, cos) = (theta.sin(), theta.cos());
    let local = Vec2::new(delta.x * cos + delta.y * sin, -delta.x * sin + delta.y * cos);

    let fx = ((half.width + dir_x * local.x) / half.width).max(0.0);
    let fy = ((half.height + dir_y * local.y) / half.height).max(0.0);
    let factor = if handle.is_corner() {
        if modifiers.contains(Modifiers::SHIFT) {
            fx.min(fy)
        } else {
            (fx * fy).sqrt()
        }
    } else if dir_x != 0.0 {
        fx
    } else {
        fy
    };
    TransformPatch::new().scale(state.start_transform.scale * factor)
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::*;

    fn stage() -> StageView {
        StageView::new(Rect::new(0.0, 0.0, 960.0, 540.0), Size::new(1920.0, 1080.0)).unwrap()
    }

    fn frame(rotation: f64) -> ContentFrame {
        ContentFrame::new(Rect::new(280.0, 170.0, 680.0, 370.0), rotation)
    }

    fn dragging(handle: HandleKind, start: ClipTransform, rotation: f64) -> DragController {
        let mut drag = DragController::new(HandleConfig::default());
        drag.begin(handle, Point::new(480.0, 270.0), start, frame(rotation));
        drag
    }

    fn update(drag: &DragController, pointer: Point, modifiers: Modifiers) -> ClipTransform {
        drag.update(pointer, modifiers, Some(&stage()), &TransformBounds::default())
            .unwrap()
    }

    #[test]
    fn idle_controller_ignores_updates() {
        let drag = DragController::default();
        assert!(!drag.is_dragging());
        let stage = stage();
        let bounds = TransformBounds::default();
        assert!(
            drag.update(Point::ORIGIN, Modifiers::empty(), Some(&stage), &bounds)
                .is_none()
        );
    }

    #[test]
    fn move_divides_by_stage_scale_and_snaps() {
        let drag = dragging(HandleKind::Move, ClipTransform::IDENTITY, 0.0);
        let t = update(&drag, Point::new(483.0, 262.0), Modifiers::empty());
        // (6, -16) canvas px snaps to (10, -20).
        assert_eq!((t.position_x, t.position_y), (10.0, -20.0));
        let t = update(&drag, Point::new(483.0, 262.0), Modifiers::ALT);
        assert_eq!((t.position_x, t.position_y), (6.0, -16.0));
    }

    #[test]
    fn move_respects_position_bounds() {
        let drag = dragging(HandleKind::Move, ClipTransform::IDENTITY, 0.0);
        let t = update(&drag, Point::new(5_000.0, 270.0), Modifiers::empty());
        assert_eq!(t.position_x, 1920.0);
    }

    #[test]
    fn east_edge_scales_by_half_width() {
        let drag = dragging(HandleKind::East, ClipTransform::IDENTITY, 0.0);
        // Half width is 200; pushing the edge out by 100 gives 1.5.
        let t = update(&drag, Point::new(580.0, 300.0), Modifiers::empty());
        assert!((t.scale - 1.5).abs() < 1e-12);
        let t = update(&drag, Point::new(380.0, 270.0), Modifiers::empty());
        assert!((t.scale - 0.5).abs() < 1e-12);
    }

    #[test]
    fn west_edge_grows_when_dragged_left() {
        let drag = dragging(HandleKind::West, ClipTransform::IDENTITY, 0.0);
        let t = update(&drag, Point::new(380.0, 270.0), Modifiers::empty());
        assert!((t.scale - 1.5).abs() < 1e-12);
    }

    #[test]
    fn corner_uses_geometric_mean_or_min_with_shift() {
        let drag = dragging(HandleKind::SouthEast, ClipTransform::IDENTITY, 0.0);
        // fx = (200 + 200) / 200 = 2, fy = (100 + 0) / 100 = 1.
        let pointer = Point::new(680.0, 270.0);
        let t = update(&drag, pointer, Modifiers::empty());
        assert!((t.scale - 2.0_f64.sqrt()).abs() < 1e-12);
        let t = update(&drag, pointer, Modifiers::SHIFT);
        assert!((t.scale - 1.0).abs() < 1e-12);
    }

    #[test]
    fn scale_factor_floors_at_zero_then_clamps() {
        let drag = dragging(HandleKind::East, ClipTransform::IDENTITY, 0.0);
        let t = update(&drag, Point::new(-2_000.0, 270.0), Modifiers::empty());
        assert_eq!(t.scale, 0.1);
    }

    #[test]
    fn scale_follows_rotated_axes() {
        let drag = dragging(HandleKind::East, ClipTransform::IDENTITY, 90.0);
        // Rotated a quarter turn clockwise, the east handle points down.
        let t = update(&drag, Point::new(480.0, 370.0), Modifiers::empty());
        assert!((t.scale - 1.5).abs() < 1e-12);
    }

    #[test]
    fn rotate_adds_swept_angle_to_start() {
        let start = ClipTransform {
            rotation: 350.0,
            ..ClipTransform::IDENTITY
        };
        let mut drag = DragController::new(HandleConfig::default());
        // Grab straight above the center (480, 270).
        drag.begin(HandleKind::Rotate, Point::new(480.0, 170.0), start, frame(350.0));
        let t = update(&drag, Point::new(580.0, 270.0), Modifiers::empty());
        // A quarter turn clockwise wraps past 360.
        assert!((t.rotation - 80.0).abs() < 1e-9);
    }

    #[test]
    fn no_stage_is_a_no_op() {
        let drag = dragging(HandleKind::Move, ClipTransform::IDENTITY, 0.0);
        assert!(
            drag.update(Point::ORIGIN, Modifiers::empty(), None, &TransformBounds::default())
                .is_none()
        );
        assert!(drag.is_dragging());
    }

    #[test]
    fn cancel_returns_snapshot_and_goes_idle() {
        let start = ClipTransform {
            scale: 2.0,
            ..ClipTransform::IDENTITY
        };
        let mut drag = dragging(HandleKind::North, start, 0.0);
        assert_eq!(drag.cancel(), Some(start));
        assert!(!drag.is_dragging());
        assert_eq!(drag.cancel(), None);
        assert_eq!(drag.end(), None);
    }

    #[test]
    fn end_returns_the_gesture() {
        let mut drag = dragging(HandleKind::Rotate, ClipTransform::IDENTITY, 0.0);
        let ended = drag.end().unwrap();
        assert_eq!(ended.handle, HandleKind::Rotate);
        assert_eq!(drag.phase(), &DragPhase::Idle);
    }
}
