// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow-key nudging of the clip position.

use kurbo::Vec2;
use ui_events::keyboard::{Key, KeyboardEvent, Modifiers, NamedKey};

use framefit_geometry::{ClipTransform, TransformBounds, TransformPatch};

use crate::config::NudgeSteps;
use crate::drag::DragController;

/// Canvas-space offset for an arrow key, or `None` for any other key.
///
/// ```
/// use kurbo::Vec2;
/// use ui_events::keyboard::{Key, Modifiers, NamedKey};
/// use framefit_handles::{NudgeSteps, nudge_delta};
///
/// let steps = NudgeSteps::default();
/// let left = Key::Named(NamedKey::ArrowLeft);
/// assert_eq!(nudge_delta(&left, Modifiers::SHIFT, &steps), Some(Vec2::new(-10.0, 0.0)));
/// assert_eq!(nudge_delta(&Key::Named(NamedKey::Enter), Modifiers::empty(), &steps), None);
/// ```
#[must_use]
pub fn nudge_delta(key: &Key, modifiers: Modifiers, steps: &NudgeSteps) -> Option<Vec2> {
    let Key::Named(named) = key else {
        return None;
    };
    let unit = match named {
        NamedKey::ArrowLeft => Vec2::new(-1.0, 0.0),
        NamedKey::ArrowRight => Vec2::new(1.0, 0.0),
        NamedKey::ArrowUp => Vec2::new(0.0, -1.0),
        NamedKey::ArrowDown => Vec2::new(0.0, 1.0),
        _ => return None,
    };
    Some(unit * steps.step(modifiers))
}

impl DragController {
    /// Moves `current` by one arrow-key step.
    ///
    /// Returns `None` while a drag is in progress or when `key` is not an arrow.
    #[must_use]
    pub fn nudge(
        &self,
        key: &Key,
        modifiers: Modifiers,
        current: &ClipTransform,
        bounds: &TransformBounds,
    ) -> Option<ClipTransform> {
        if self.is_dragging() {
            log::trace!("nudge ignored during drag");
            return None;
        }
        let delta = nudge_delta(key, modifiers, &self.config().nudge)?;
        let patch = TransformPatch::new().position(
            current.position_x + delta.x,
            current.position_y + delta.y,
        );
        Some(current.with_patch(&patch, bounds))
    }

    /// [`DragController::nudge`] for a keyboard event; key releases are ignored.
    #[must_use]
    pub fn nudge_event(
        &self,
        event: &KeyboardEvent,
        current: &ClipTransform,
        bounds: &TransformBounds,
    ) -> Option<ClipTransform> {
        if !event.state.is_down() {
            return None;
        }
        self.nudge(&event.key, event.modifiers, current, bounds)
    }
}
