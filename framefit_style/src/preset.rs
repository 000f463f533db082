// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use kurbo::Vec2;
use peniko::Color;

use crate::style::{FrameStyle, Glow, Shadow};

/// Named frame presets offered by the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FramePreset {
    /// No decoration.
    #[default]
    None,
    /// Hairline white border.
    Thin,
    /// Heavy white border.
    Bold,
    /// Rounded corners with a light border.
    Rounded,
    /// Drop shadow only.
    Shadow,
    /// Colored border with a matching glow.
    Glow,
    /// Wide off-white matte with a soft shadow.
    Polaroid,
}

impl FramePreset {
    /// Every preset, in menu order.
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::Thin,
        Self::Bold,
        Self::Rounded,
        Self::Shadow,
        Self::Glow,
        Self::Polaroid,
    ];

    /// The persisted name of this preset.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Thin => "thin",
            Self::Bold => "bold",
            Self::Rounded => "rounded",
            Self::Shadow => "shadow",
            Self::Glow => "glow",
            Self::Polaroid => "polaroid",
        }
    }

    /// The builtin style for this preset.
    #[must_use]
    pub fn style(self) -> FrameStyle {
        let white = Color::from_rgba8(255, 255, 255, 255);
        match self {
            Self::None => FrameStyle::NONE,
            Self::Thin => FrameStyle {
                border_width: 1.0,
                border_color: white,
                ..FrameStyle::NONE
            },
            Self::Bold => FrameStyle {
                border_width: 4.0,
                border_color: white,
                ..FrameStyle::NONE
            },
            Self::Rounded => FrameStyle {
                border_width: 2.0,
                border_color: white,
                corner_radius: 16.0,
                ..FrameStyle::NONE
            },
            Self::Shadow => FrameStyle {
                shadow: Some(Shadow {
                    offset: Vec2::new(0.0, 8.0),
                    blur: 24.0,
                    color: Color::from_rgba8(0, 0, 0, 128),
                }),
                ..FrameStyle::NONE
            },
            Self::Glow => FrameStyle {
                border_width: 2.0,
                border_color: Color::from_rgba8(120, 200, 255, 255),
                glow: Some(Glow {
                    radius: 16.0,
                    color: Color::from_rgba8(120, 200, 255, 180),
                }),
                ..FrameStyle::NONE
            },
            Self::Polaroid => FrameStyle {
                border_width: 12.0,
                border_color: Color::from_rgba8(250, 250, 250, 255),
                corner_radius: 2.0,
                shadow: Some(Shadow {
                    offset: Vec2::new(0.0, 4.0),
                    blur: 12.0,
                    color: Color::from_rgba8(0, 0, 0, 96),
                }),
                glow: None,
            },
        }
    }
}

impl fmt::Display for FramePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a frame preset name is not recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownPreset;

impl fmt::Display for UnknownPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown frame preset")
    }
}

impl core::error::Error for UnknownPreset {}

impl FromStr for FramePreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or(UnknownPreset)
    }
}
