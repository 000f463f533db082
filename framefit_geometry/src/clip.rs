// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::transform::ClipTransform;

/// A clip as seen by the geometry core.
///
/// Clips are owned by the caller's timeline; this crate only reads them, and
/// writes [`Clip::transform`] on behalf of interactive editing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Clip {
    /// Intrinsic media size, when the decoder has reported it.
    pub intrinsic: Option<Size>,
    /// Index of the layout cell this clip is placed in.
    pub layer: usize,
    /// Transform, created lazily on first edit.
    pub transform: Option<ClipTransform>,
}

impl Clip {
    /// Intrinsic size assumed when media metadata is missing or degenerate.
    pub const FALLBACK_INTRINSIC: Size = Size::new(1920.0, 1080.0);

    /// Creates a clip on `layer` with unknown media size and no transform.
    #[must_use]
    pub const fn new(layer: usize) -> Self {
        Self {
            intrinsic: None,
            layer,
            transform: None,
        }
    }

    /// Sets the intrinsic media size.
    #[must_use]
    pub const fn with_intrinsic(mut self, width: f64, height: f64) -> Self {
        self.intrinsic = Some(Size::new(width, height));
        self
    }

    /// Sets the transform.
    #[must_use]
    pub const fn with_transform(mut self, transform: ClipTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Intrinsic size, or [`Clip::FALLBACK_INTRINSIC`] when it is missing,
    /// zero or non-finite.
    #[must_use]
    pub fn intrinsic_size(&self) -> Size {
        match self.intrinsic {
            Some(size)
                if size.width.is_finite()
                    && size.height.is_finite()
                    && size.width > 0.0
                    && size.height > 0.0 =>
            {
                size
            }
            _ => Self::FALLBACK_INTRINSIC,
        }
    }

    /// The effective transform; [`ClipTransform::IDENTITY`] until one is set.
    #[must_use]
    pub fn effective_transform(&self) -> ClipTransform {
        self.transform.unwrap_or_default()
    }

    /// Mutable access to the transform, creating the default one if needed.
    pub fn transform_mut(&mut self) -> &mut ClipTransform {
        self.transform.get_or_insert(ClipTransform::IDENTITY)
    }
}
