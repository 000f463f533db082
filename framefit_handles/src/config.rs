// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use ui_events::keyboard::Modifiers;

/// Tunables for handle placement, hit testing and drag behavior.
///
/// Distances are in screen pixels, except [`HandleConfig::snap_step`] which is
/// in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct HandleConfig {
    /// Maximum distance from a handle center that still grabs it.
    pub hit_radius: f64,
    /// Distance of the rotate handle above the top edge.
    pub rotate_offset: f64,
    /// Frames narrower or shorter than this hide their edge handles.
    pub min_size_for_edges: f64,
    /// Position snapping grid for move drags.
    pub snap_step: f64,
    /// Whether move drags snap to [`HandleConfig::snap_step`].
    pub snap_enabled: bool,
    /// Keyboard nudge distances.
    pub nudge: NudgeSteps,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            hit_radius: 8.0,
            rotate_offset: 24.0,
            min_size_for_edges: 40.0,
            snap_step: 10.0,
            snap_enabled: true,
            nudge: NudgeSteps::default(),
        }
    }
}

impl HandleConfig {
    /// Whether a move drag with `modifiers` held should snap.
    ///
    /// Alt suppresses snapping.
    #[must_use]
    pub fn snaps(&self, modifiers: Modifiers) -> bool {
        self.snap_enabled && self.snap_step > 0.0 && !modifiers.contains(Modifiers::ALT)
    }
}

/// Canvas-pixel distances moved per arrow key press.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NudgeSteps {
    /// Step without modifiers.
    pub normal: f64,
    /// Step with Alt held.
    pub fine: f64,
    /// Step with Shift held.
    pub coarse: f64,
}

impl Default for NudgeSteps {
    fn default() -> Self {
        Self {
            normal: 1.0,
            fine: 0.1,
            coarse: 10.0,
        }
    }
}

impl NudgeSteps {
    /// The step for `modifiers`; Alt wins over Shift.
    #[must_use]
    pub fn step(&self, modifiers: Modifiers) -> f64 {
        if modifiers.contains(Modifiers::ALT) {
            self.fine
        } else if modifiers.contains(Modifiers::SHIFT) {
            self.coarse
        } else {
            self.normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_suppresses_snapping() {
        let config = HandleConfig::default();
        assert!(config.snaps(Modifiers::empty()));
        assert!(config.snaps(Modifiers::SHIFT));
        assert!(!config.snaps(Modifiers::ALT));
        let off = HandleConfig {
            snap_enabled: false,
            ..HandleConfig::default()
        };
        assert!(!off.snaps(Modifiers::empty()));
    }

    #[test]
    fn nudge_step_by_modifier() {
        let steps = NudgeSteps::default();
        assert_eq!(steps.step(Modifiers::empty()), 1.0);
        assert_eq!(steps.step(Modifiers::ALT), 0.1);
        assert_eq!(steps.step(Modifiers::SHIFT), 10.0);
        assert_eq!(steps.step(Modifiers::SHIFT | Modifiers::ALT), 0.1);
    }
}
