// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-preset style overrides.

use smallvec::SmallVec;

use crate::preset::FramePreset;
use crate::style::FrameStyle;

/// A set of style overrides keyed by [`FramePreset`].
///
/// Presets without an override resolve to their builtin style, so an empty
/// theme reproduces [`FramePreset::style`] exactly.
///
/// Overrides are kept sorted by preset for binary search lookup.
///
/// # Example
///
/// ```rust
/// use peniko::Color;
/// use framefit_style::{FramePreset, FrameStyle, FrameTheme};
///
/// let brand = Color::from_rgba8(255, 90, 0, 255);
/// let theme = FrameTheme::new().with(
///     FramePreset::Bold,
///     FrameStyle { border_color: brand, ..FramePreset::Bold.style() },
/// );
///
/// assert_eq!(theme.style(FramePreset::Bold).border_color, brand);
/// assert_eq!(theme.style(FramePreset::Thin), FramePreset::Thin.style());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameTheme {
    overrides: SmallVec<[(FramePreset, FrameStyle); 4]>,
}

impl FrameTheme {
    /// Creates a theme with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if this theme overrides nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Returns the number of overridden presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Sets the override for `preset`, replacing any previous one.
    #[must_use]
    pub fn with(mut self, preset: FramePreset, style: FrameStyle) -> Self {
        self.set(preset, style);
        self
    }

    /// Sets the override for `preset`, replacing any previous one.
    pub fn set(&mut self, preset: FramePreset, style: FrameStyle) {
        match self.overrides.binary_search_by_key(&preset, |(p, _)| *p) {
            Ok(idx) => self.overrides[idx].1 = style,
            Err(idx) => self.overrides.insert(idx, (preset, style)),
        }
    }

    /// Removes the override for `preset`, returning it.
    pub fn remove(&mut self, preset: FramePreset) -> Option<FrameStyle> {
        let idx = self
            .overrides
            .binary_search_by_key(&preset, |(p, _)| *p)
            .ok()?;
        Some(self.overrides.remove(idx).1)
    }

    /// Returns `true` if `preset` is overridden.
    #[must_use]
    pub fn contains(&self, preset: FramePreset) -> bool {
        self.overrides
            .binary_search_by_key(&preset, |(p, _)| *p)
            .is_ok()
    }

    /// The style for `preset`: the override if present, else the builtin.
    #[must_use]
    pub fn style(&self, preset: FramePreset) -> FrameStyle {
        self.overrides
            .binary_search_by_key(&preset, |(p, _)| *p)
            .map_or_else(|_| preset.style(), |idx| self.overrides[idx].1)
    }

    /// Overridden presets, in preset order.
    pub fn presets(&self) -> impl Iterator<Item = FramePreset> + '_ {
        self.overrides.iter().map(|(p, _)| *p)
    }
}
