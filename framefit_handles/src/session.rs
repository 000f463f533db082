// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use ui_events::keyboard::{Key, Modifiers};

use framefit_geometry::{
    Clip, ClipTransform, LayoutKind, StageView, TransformBounds, content_frame,
};

use crate::config::HandleConfig;
use crate::drag::DragController;
use crate::handle::{HandleKind, hit_test};

/// Per-editor selection and drag state.
///
/// An `EditSession` tracks which clip is selected, a revision counter bumped on
/// every selection change, and the [`DragController`] for that clip. Sessions
/// are plain values; several editors can each own one.
///
/// Clips stay with the caller. Methods that edit take the clip by reference,
/// together with the key it is stored under, and only touch it when that key is
/// the selected one.
///
/// Position clamps follow the canvas of the [`StageView`] passed to the pointer
/// methods, unless bounds were set explicitly with [`EditSession::set_bounds`].
#[derive(Clone, Debug)]
pub struct EditSession<K> {
    selected: Option<K>,
    revision: u64,
    drag: DragController,
    bounds: Option<TransformBounds>,
    canvas: Option<Size>,
}

impl<K> Default for EditSession<K> {
    fn default() -> Self {
        Self::new(HandleConfig::default())
    }
}

impl<K> EditSession<K> {
    /// Creates a session with nothing selected and default bounds.
    #[must_use]
    pub fn new(config: HandleConfig) -> Self {
        Self {
            selected: None,
            revision: 0,
            drag: DragController::new(config),
            bounds: None,
            canvas: None,
        }
    }

    /// Fixes the transform bounds used for every edit.
    #[must_use]
    pub fn with_bounds(mut self, bounds: TransformBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// The transform bounds for the next edit.
    ///
    /// Explicit bounds win. Otherwise they are derived from the canvas of the
    /// last stage seen by [`EditSession::pointer_down`], or from a 1920×1080
    /// canvas before any stage was seen.
    #[must_use]
    pub fn bounds(&self) -> TransformBounds {
        self.bounds.unwrap_or_else(|| {
            self.canvas
                .map_or_else(TransformBounds::default, TransformBounds::for_canvas)
        })
    }

    /// Fixes the transform bounds, overriding the stage canvas.
    pub fn set_bounds(&mut self, bounds: TransformBounds) {
        self.bounds = Some(bounds);
    }

    /// Drops explicit bounds so edits follow the stage canvas again.
    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }

    fn bounds_for(&self, stage: &StageView) -> TransformBounds {
        self.bounds
            .unwrap_or_else(|| TransformBounds::for_canvas(stage.canvas()))
    }

    /// The selected key, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&K> {
        self.selected.as_ref()
    }

    /// Returns the current revision counter.
    ///
    /// Bumped only when the selected key actually changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The drag controller.
    #[must_use]
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Clears the selection, cancelling any drag on the deselected clip.
    pub fn clear_selection(&mut self) {
        if self.selected.is_none() {
            return;
        }
        self.drag.cancel();
        self.selected = None;
        self.bump_revision();
    }

    /// Ends the current drag; the last written transform stands.
    ///
    /// Returns `false` if no drag was in progress.
    pub fn pointer_up(&mut self) -> bool {
        self.drag.end().is_some()
    }

    /// Forces the drag idle, returning the transform from before it started.
    pub fn cancel_drag(&mut self) -> Option<ClipTransform> {
        self.drag.cancel()
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        log::debug!("selection changed, revision {}", self.revision);
    }
}

impl<K: PartialEq> EditSession<K> {
    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.as_ref() == Some(key)
    }

    /// Selects `key`; a drag on a different clip is cancelled.
    pub fn select(&mut self, key: K) {
        if self.is_selected(&key) {
            return;
        }
        self.drag.cancel();
        self.selected = Some(key);
        self.bump_revision();
    }

    /// Hit-tests `clip` at `pointer` and, on a hit, selects it and starts a drag.
    ///
    /// Returns the grabbed handle, or `None` on a miss or while `stage` is
    /// unknown. A miss leaves the selection alone.
    pub fn pointer_down(
        &mut self,
        key: K,
        clip: &Clip,
        layout: LayoutKind,
        stage: Option<&StageView>,
        pointer: Point,
    ) -> Option<HandleKind> {
        let Some(stage) = stage else {
            log::trace!("pointer down ignored, stage not laid out");
            return None;
        };
        self.canvas = Some(stage.canvas());
        let frame = stage.canvas_to_screen_frame(&content_frame(clip, stage.canvas(), layout));
        let hit = hit_test(&frame, pointer, self.drag.config())?;
        self.select(key);
        self.drag.begin(hit.kind, pointer, clip.effective_transform(), frame);
        Some(hit.kind)
    }

    /// Writes the drag candidate for `pointer` into `clip`.
    ///
    /// Returns `true` if the clip was updated. Nothing happens when idle, when
    /// `key` is not the selected clip, or while `stage` is unknown. Positions
    /// are clamped to the stage canvas unless bounds were set explicitly.
    pub fn pointer_move(
        &self,
        key: &K,
        clip: &mut Clip,
        pointer: Point,
        modifiers: Modifiers,
        stage: Option<&StageView>,
    ) -> bool {
        if !self.is_selected(key) {
            return false;
        }
        let Some(stage) = stage else {
            log::trace!("pointer move ignored, stage not laid out");
            return false;
        };
        let bounds = self.bounds_for(stage);
        match self.drag.update(pointer, modifiers, Some(stage), &bounds) {
            Some(transform) => {
                *clip.transform_mut() = transform;
                true
            }
            None => false,
        }
    }

    /// Nudges the selected `clip` for an arrow key press.
    ///
    /// Returns `true` if the clip was updated. Positions are clamped to
    /// [`EditSession::bounds`].
    pub fn nudge(&self, key: &K, clip: &mut Clip, pressed: &Key, modifiers: Modifiers) -> bool {
        if !self.is_selected(key) {
            return false;
        }
        let current = clip.effective_transform();
        match self.drag.nudge(pressed, modifiers, &current, &self.bounds()) {
            Some(transform) => {
                *clip.transform_mut() = transform;
                true
            }
            None => false,
        }
    }
}
