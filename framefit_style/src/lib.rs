// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Framefit Style: frame presets for clips and layout cells.
//!
//! A [`FramePreset`] names a decoration (border, rounded corners, drop shadow,
//! glow) and resolves to a [`FrameStyle`]. A [`FrameTheme`] overrides the
//! builtin style of individual presets. Styles are plain data:
//! - [`FrameStyle::outline`] gives the border centerline around a content rect,
//! - [`FrameStyle::paint_bounds`] gives the area the decoration can touch,
//! - [`FrameStyle::css`] renders CSS declarations for DOM-based previews.
//!
//! [`cell_separators`] gives the divider bars between the cells of a
//! multi-cell layout.
//!
//! Nothing here rasterizes; renderers consume these shapes and colors.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use framefit_geometry::{Clip, LayoutKind, content_rect};
//! use framefit_style::{FramePreset, FrameTheme};
//!
//! let canvas = Size::new(1920.0, 1080.0);
//! let clip = Clip::new(0).with_intrinsic(1080.0, 1080.0);
//! let content = content_rect(&clip, canvas, LayoutKind::Single);
//!
//! let style = FrameTheme::new().style("bold".parse().unwrap());
//! assert_eq!(style, FramePreset::Bold.style());
//! assert_eq!(style.paint_bounds(content), content.inflate(4.0, 4.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std` and `peniko/std`.
//! - `libm`: forwards to `kurbo/libm` and `peniko/libm`.
//! - `serde`: `Serialize`/`Deserialize` for [`FramePreset`].
//!
//! This crate is `no_std`.

#![no_std]

mod preset;
mod separators;
mod style;
mod theme;

pub use preset::{FramePreset, UnknownPreset};
pub use separators::cell_separators;
pub use style::{FrameCss, FrameStyle, Glow, Shadow};
pub use theme::FrameTheme;
