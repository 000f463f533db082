// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handle kinds, their placement around a content frame, and hit testing.
//!
//! Handles are placed on the unrotated frame and then rotated with it, so a
//! rotated clip shows rotated handles. Hit testing works the other way around:
//! the pointer is rotated into the frame's local axes first.

use kurbo::{Point, Size};
use smallvec::SmallVec;

use framefit_geometry::ContentFrame;

use crate::config::HandleConfig;

/// What a pointer-down grabbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandleKind {
    /// The content body; drags translate.
    Move,
    /// The handle above the top edge; drags rotate about the center.
    Rotate,
    /// Top-left corner.
    NorthWest,
    /// Top edge.
    North,
    /// Top-right corner.
    NorthEast,
    /// Right edge.
    East,
    /// Bottom-right corner.
    SouthEast,
    /// Bottom edge.
    South,
    /// Bottom-left corner.
    SouthWest,
    /// Left edge.
    West,
}

impl HandleKind {
    /// The four corner handles, clockwise from top-left.
    pub const CORNERS: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// The four edge handles, clockwise from the top.
    pub const EDGES: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Whether this is a corner handle.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::NorthWest | Self::NorthEast | Self::SouthEast | Self::SouthWest
        )
    }

    /// Whether this is an edge handle.
    #[must_use]
    pub const fn is_edge(self) -> bool {
        matches!(self, Self::North | Self::East | Self::South | Self::West)
    }

    /// Whether dragging this handle scales the content.
    #[must_use]
    pub const fn is_scale(self) -> bool {
        self.is_corner() || self.is_edge()
    }

    /// Outward direction of a scale handle in the frame's local axes.
    ///
    /// Each component is `-1`, `0` or `1`; `None` for move and rotate.
    #[must_use]
    pub const fn direction(self) -> Option<(f64, f64)> {
        match self {
            Self::NorthWest => Some((-1.0, -1.0)),
            Self::North => Some((0.0, -1.0)),
            Self::NorthEast => Some((1.0, -1.0)),
            Self::East => Some((1.0, 0.0)),
            Self::SouthEast => Some((1.0, 1.0)),
            Self::South => Some((0.0, 1.0)),
            Self::SouthWest => Some((-1.0, 1.0)),
            Self::West => Some((-1.0, 0.0)),
            Self::Move | Self::Rotate => None,
        }
    }

    /// The mask bit for this handle; empty for [`HandleKind::Move`].
    #[must_use]
    pub const fn mask(self) -> HandleMask {
        match self {
            Self::Move => HandleMask::empty(),
            Self::Rotate => HandleMask::ROTATE,
            Self::NorthWest => HandleMask::NORTH_WEST,
            Self::North => HandleMask::NORTH,
            Self::NorthEast => HandleMask::NORTH_EAST,
            Self::East => HandleMask::EAST,
            Self::SouthEast => HandleMask::SOUTH_EAST,
            Self::South => HandleMask::SOUTH,
            Self::SouthWest => HandleMask::SOUTH_WEST,
            Self::West => HandleMask::WEST,
        }
    }
}

bitflags::bitflags! {
    /// Which handles are shown and hit-testable.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HandleMask: u16 {
        /// Rotate handle.
        const ROTATE     = 1 << 0;
        /// Top-left corner.
        const NORTH_WEST = 1 << 1;
        /// Top edge.
        const NORTH      = 1 << 2;
        /// Top-right corner.
        const NORTH_EAST = 1 << 3;
        /// Right edge.
        const EAST       = 1 << 4;
        /// Bottom-right corner.
        const SOUTH_EAST = 1 << 5;
        /// Bottom edge.
        const SOUTH      = 1 << 6;
        /// Bottom-left corner.
        const SOUTH_WEST = 1 << 7;
        /// Left edge.
        const WEST       = 1 << 8;
        /// All corners.
        const CORNERS = Self::NORTH_WEST.bits()
            | Self::NORTH_EAST.bits()
            | Self::SOUTH_EAST.bits()
            | Self::SOUTH_WEST.bits();
        /// All edges.
        const EDGES = Self::NORTH.bits()
            | Self::EAST.bits()
            | Self::SOUTH.bits()
            | Self::WEST.bits();
    }
}

impl Default for HandleMask {
    fn default() -> Self {
        Self::all()
    }
}

impl HandleMask {
    /// Handles to show for a frame of `size` screen pixels.
    ///
    /// Edge handles crowd the corners on small frames and are dropped.
    #[must_use]
    pub fn for_size(size: Size, config: &HandleConfig) -> Self {
        if size.width < config.min_size_for_edges || size.height < config.min_size_for_edges {
            Self::all() - Self::EDGES
        } else {
            Self::all()
        }
    }
}

/// A handle and where it is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandlePlacement {
    /// The handle.
    pub kind: HandleKind,
    /// Center of the handle in the frame's coordinate space.
    pub position: Point,
}

/// The visible handles of a frame, rotate handle first, then corners, then edges.
#[derive(Clone, Debug, PartialEq)]
pub struct HandlePlacements {
    mask: HandleMask,
    placements: SmallVec<[HandlePlacement; 9]>,
}

impl HandlePlacements {
    /// Places the handles for `frame`.
    #[must_use]
    pub fn for_frame(frame: &ContentFrame, config: &HandleConfig) -> Self {
        let mask = HandleMask::for_size(frame.size(), config);
        let rotate = frame.rotation_transform();
        let placements = ordered_handles()
            .filter(|kind| mask.contains(kind.mask()))
            .map(|kind| HandlePlacement {
                kind,
                position: rotate * local_position(frame, kind, config),
            })
            .collect();
        Self { mask, placements }
    }

    /// Which handles are shown.
    #[must_use]
    pub fn mask(&self) -> HandleMask {
        self.mask
    }

    /// The placed handles.
    #[must_use]
    pub fn as_slice(&self) -> &[HandlePlacement] {
        &self.placements
    }

    /// Position of `kind`, if it is shown.
    #[must_use]
    pub fn get(&self, kind: HandleKind) -> Option<Point> {
        self.placements
            .iter()
            .find(|p| p.kind == kind)
            .map(|p| p.position)
    }
}

/// Result of [`hit_test`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleHit {
    /// The grabbed handle.
    pub kind: HandleKind,
    /// Distance from the pointer to the handle center; `0.0` for [`HandleKind::Move`].
    pub distance: f64,
}

/// Finds the handle under `pointer`.
///
/// The rotate handle and corners take priority over edges; among a group the
/// nearest handle within [`HandleConfig::hit_radius`] wins. A pointer inside
/// the frame but on no handle grabs [`HandleKind::Move`].
///
/// ```
/// use kurbo::{Point, Rect};
/// use framefit_geometry::ContentFrame;
/// use framefit_handles::{HandleConfig, HandleKind, hit_test};
///
/// let frame = ContentFrame::new(Rect::new(0.0, 0.0, 200.0, 100.0), 0.0);
/// let config = HandleConfig::default();
/// let hit = hit_test(&frame, Point::new(198.0, 3.0), &config).unwrap();
/// assert_eq!(hit.kind, HandleKind::NorthEast);
/// assert_eq!(hit_test(&frame, Point::new(100.0, 50.0), &config).unwrap().kind, HandleKind::Move);
/// assert!(hit_test(&frame, Point::new(400.0, 50.0), &config).is_none());
/// ```
#[must_use]
pub fn hit_test(frame: &ContentFrame, pointer: Point, config: &HandleConfig) -> Option<HandleHit> {
    let mask = HandleMask::for_size(frame.size(), config);
    let local = frame.to_local(pointer);
    let nearest = |group: &[HandleKind]| {
        group
            .iter()
            .filter(|kind| mask.contains(kind.mask()))
            .map(|&kind| HandleHit {
                kind,
                distance: (local - local_position(frame, kind, config)).hypot(),
            })
            .filter(|hit| hit.distance <= config.hit_radius)
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    };

    let priority = [
        HandleKind::Rotate,
        HandleKind::NorthWest,
        HandleKind::NorthEast,
        HandleKind::SouthEast,
        HandleKind::SouthWest,
    ];
    nearest(&priority)
        .or_else(|| nearest(&HandleKind::EDGES))
        .or_else(|| {
            frame.rect.contains(local).then_some(HandleHit {
                kind: HandleKind::Move,
                distance: 0.0,
            })
        })
}

fn ordered_handles() -> impl Iterator<Item = HandleKind> {
    [HandleKind::Rotate]
        .into_iter()
        .chain(HandleKind::CORNERS)
        .chain(HandleKind::EDGES)
}

/// Handle center on the unrotated frame.
fn local_position(frame: &ContentFrame, kind: HandleKind, config: &HandleConfig) -> Point {
    let r = frame.rect;
    let center = r.center();
    match kind.direction() {
        Some((dx, dy)) => Point::new(
            center.x + dx * r.width() / 2.0,
            center.y + dy * r.height() / 2.0,
        ),
        None if kind == HandleKind::Rotate => Point::new(center.x, r.y0 - config.rotate_offset),
        None => center,
    }
}
