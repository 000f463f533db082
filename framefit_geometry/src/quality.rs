// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use kurbo::Size;

use crate::transform::TransformBounds;

/// Preview render tiers, each with a fixed 16:9 canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PreviewQuality {
    /// 960×540.
    Low,
    /// 1280×720.
    Medium,
    /// 1920×1080.
    #[default]
    High,
}

impl PreviewQuality {
    /// Every tier, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Canvas size rendered at this tier.
    #[must_use]
    pub const fn canvas_size(self) -> Size {
        match self {
            Self::Low => Size::new(960.0, 540.0),
            Self::Medium => Size::new(1280.0, 720.0),
            Self::High => Size::new(1920.0, 1080.0),
        }
    }

    /// Transform bounds for this tier's canvas.
    #[must_use]
    pub fn bounds(self) -> TransformBounds {
        TransformBounds::for_canvas(self.canvas_size())
    }

    /// The persisted name of this tier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for PreviewQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a preview quality name is not recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownQuality;

impl fmt::Display for UnknownQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown preview quality, expected one of `low`, `medium`, `high`")
    }
}

impl core::error::Error for UnknownQuality {}

impl FromStr for PreviewQuality {
    type Err = UnknownQuality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|quality| quality.name() == s)
            .ok_or(UnknownQuality)
    }
}
