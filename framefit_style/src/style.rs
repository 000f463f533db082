// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Rect, RoundedRect, Vec2};
use peniko::Color;

/// A drop shadow behind the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Shadow offset in canvas pixels.
    pub offset: Vec2,
    /// Blur radius in canvas pixels.
    pub blur: f64,
    /// Shadow color.
    pub color: Color,
}

/// A soft, unoffset halo around the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    /// Blur radius in canvas pixels.
    pub radius: f64,
    /// Glow color.
    pub color: Color,
}

/// Resolved visual decoration for one clip or cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyle {
    /// Border stroke width; `0.0` draws no border.
    pub border_width: f64,
    /// Border stroke color.
    pub border_color: Color,
    /// Corner radius of the content rect.
    pub corner_radius: f64,
    /// Optional drop shadow.
    pub shadow: Option<Shadow>,
    /// Optional glow.
    pub glow: Option<Glow>,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self::NONE
    }
}

impl FrameStyle {
    /// No decoration at all.
    pub const NONE: Self = Self {
        border_width: 0.0,
        border_color: Color::TRANSPARENT,
        corner_radius: 0.0,
        shadow: None,
        glow: None,
    };

    /// Whether anything would be drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.border_width > 0.0 || self.shadow.is_some() || self.glow.is_some()
    }

    /// The border stroke centerline around `content`.
    ///
    /// The border sits outside the content, so the outline is grown by half the
    /// stroke width and its radius follows.
    #[must_use]
    pub fn outline(&self, content: Rect) -> RoundedRect {
        let half = self.border_width.max(0.0) / 2.0;
        let radius = if self.corner_radius > 0.0 {
            self.corner_radius + half
        } else {
            0.0
        };
        RoundedRect::from_rect(content.inflate(half, half), radius)
    }

    /// Area covered by the frame and its effects around `content`.
    #[must_use]
    pub fn paint_bounds(&self, content: Rect) -> Rect {
        let mut bounds = content.inflate(self.border_width.max(0.0), self.border_width.max(0.0));
        if let Some(shadow) = self.shadow {
            let blurred = content.inflate(shadow.blur, shadow.blur) + shadow.offset;
            bounds = bounds.union(blurred);
        }
        if let Some(glow) = self.glow {
            bounds = bounds.union(content.inflate(glow.radius, glow.radius));
        }
        bounds
    }

    /// CSS declarations for this style.
    ///
    /// ```
    /// use framefit_style::FramePreset;
    ///
    /// let css = FramePreset::Rounded.style().css().to_string();
    /// assert_eq!(css, "border: 2px solid #ffffffff; border-radius: 16px;");
    /// ```
    #[must_use]
    pub fn css(&self) -> FrameCss<'_> {
        FrameCss(self)
    }
}

/// [`Display`](fmt::Display) adapter rendering a [`FrameStyle`] as CSS declarations.
#[derive(Clone, Copy, Debug)]
pub struct FrameCss<'a>(&'a FrameStyle);

impl fmt::Display for FrameCss<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.0;
        if style.border_width > 0.0 {
            write!(
                f,
                "border: {}px solid {};",
                style.border_width,
                Hex(style.border_color)
            )?;
        } else {
            f.write_str("border: none;")?;
        }
        if style.corner_radius > 0.0 {
            write!(f, " border-radius: {}px;", style.corner_radius)?;
        }
        if style.shadow.is_none() && style.glow.is_none() {
            return Ok(());
        }
        f.write_str(" box-shadow: ")?;
        if let Some(shadow) = style.shadow {
            write!(
                f,
                "{}px {}px {}px {}",
                shadow.offset.x,
                shadow.offset.y,
                shadow.blur,
                Hex(shadow.color)
            )?;
        }
        if let Some(glow) = style.glow {
            if style.shadow.is_some() {
                f.write_str(", ")?;
            }
            write!(f, "0px 0px {}px {}", glow.radius, Hex(glow.color))?;
        }
        f.write_str(";")
    }
}

/// `#rrggbbaa`.
struct Hex(Color);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0.to_rgba8();
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    fn white() -> Color {
        Color::from_rgba8(255, 255, 255, 255)
    }

    #[test]
    fn no_style_is_invisible() {
        assert!(!FrameStyle::NONE.is_visible());
        assert_eq!(FrameStyle::NONE.css().to_string(), "border: none;");
    }

    #[test]
    fn outline_wraps_the_content() {
        let style = FrameStyle {
            border_width: 4.0,
            border_color: white(),
            corner_radius: 10.0,
            ..FrameStyle::NONE
        };
        let outline = style.outline(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(outline.rect(), Rect::new(-2.0, -2.0, 102.0, 52.0));
        assert_eq!(outline.radii().top_left, 12.0);
    }

    #[test]
    fn square_corners_stay_square() {
        let style = FrameStyle {
            border_width: 4.0,
            border_color: white(),
            ..FrameStyle::NONE
        };
        let outline = style.outline(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(outline.radii().top_left, 0.0);
    }

    #[test]
    fn shadow_and_glow_share_one_box_shadow() {
        let style = FrameStyle {
            shadow: Some(Shadow {
                offset: Vec2::new(0.0, 4.0),
                blur: 12.0,
                color: Color::from_rgba8(0, 0, 0, 128),
            }),
            glow: Some(Glow {
                radius: 8.0,
                color: Color::from_rgba8(0, 128, 255, 255),
            }),
            ..FrameStyle::NONE
        };
        assert_eq!(
            style.css().to_string(),
            "border: none; box-shadow: 0px 4px 12px #00000080, 0px 0px 8px #0080ffff;"
        );
    }

    #[test]
    fn paint_bounds_include_offset_shadow() {
        let style = FrameStyle {
            shadow: Some(Shadow {
                offset: Vec2::new(0.0, 10.0),
                blur: 5.0,
                color: Color::from_rgba8(0, 0, 0, 128),
            }),
            ..FrameStyle::NONE
        };
        let bounds = style.paint_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(bounds, Rect::new(-5.0, 0.0, 105.0, 115.0));
    }
}
