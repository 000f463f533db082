// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Framefit Handles: interactive move, scale and rotate editing for clips.
//!
//! This crate turns pointer and keyboard input over a clip's on-screen frame
//! into validated [`ClipTransform`](framefit_geometry::ClipTransform) edits:
//! - [`HandlePlacements`] and [`hit_test`] place the eight scale handles and the
//!   rotate handle around a (possibly rotated) content frame and find the one
//!   under the pointer.
//! - [`DragController`] snapshots the clip at pointer-down and derives each
//!   candidate transform from that snapshot plus the total pointer offset.
//! - [`nudge_delta`] and [`DragController::nudge`] map arrow keys to position
//!   steps.
//! - [`EditSession`] bundles the selected clip, a revision counter and the drag
//!   controller into one explicit, per-editor value.
//!
//! It does **not** draw handles or own clips. Screen coordinates are those of
//! the player container described by a [`StageView`](framefit_geometry::StageView).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use ui_events::keyboard::Modifiers;
//! use framefit_geometry::{Clip, LayoutKind, StageView};
//! use framefit_handles::{EditSession, HandleKind};
//!
//! let stage = StageView::new(Rect::new(0.0, 0.0, 960.0, 540.0), Size::new(1920.0, 1080.0));
//! let mut clip = Clip::new(0).with_intrinsic(1920.0, 1080.0);
//! let mut session = EditSession::<u32>::default();
//!
//! // Grab the middle of the clip and drag 50 screen px to the right.
//! let grab = Point::new(480.0, 270.0);
//! let handle = session.pointer_down(1, &clip, LayoutKind::Single, stage.as_ref(), grab);
//! assert_eq!(handle, Some(HandleKind::Move));
//! let to = Point::new(530.0, 270.0);
//! session.pointer_move(&1, &mut clip, to, Modifiers::empty(), stage.as_ref());
//! session.pointer_up();
//!
//! assert_eq!(clip.effective_transform().position_x, 100.0);
//! ```
//!
//! ## Modifiers
//!
//! - Shift locks the aspect ratio on corner handles and makes nudges coarse.
//! - Alt suppresses move snapping and makes nudges fine.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` float math.
//! - `serde`: `Serialize`/`Deserialize` for [`HandleConfig`] and [`HandleKind`].
//!
//! This crate is `no_std`.

#![no_std]

mod config;
pub mod drag;
mod handle;
mod nudge;
mod session;

pub use config::{HandleConfig, NudgeSteps};
pub use drag::{DragController, DragPhase, DragState};
pub use handle::{HandleHit, HandleKind, HandleMask, HandlePlacement, HandlePlacements, hit_test};
pub use nudge::nudge_delta;
pub use session::EditSession;
