// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # SWF-Lite Shape
//!
//! Contour reconstruction and path export for decoded SWF shapes.
//!
//! A decoded shape arrives as a flat record stream referencing indexed
//! fill/line styles. Edges of a fill region are stored as two independent
//! half-edge soups (one per side, pointing in opposite absolute directions),
//! so turning the stream into drawable paths takes three passes:
//!
//! 1. **Record interpretation** ([`interpret`]) partitions edges into
//!    per-group, per-style buckets, reversing left-side fills so both sides
//!    of a region run the same way.
//! 2. **Contour stitching** ([`stitch`]) reorders each bucket into maximal
//!    connected traversals using forward/backward endpoint adjacency,
//!    reversing stray edges in place.
//! 3. **Path export** ([`Shape::export`]) walks the stitched contours in
//!    style order and drives a [`ShapeSink`] with fill/stroke/move/line/curve
//!    commands. Rasterization belongs to the sink, never to this crate.
//!
//! The engine is synchronous and per-shape; stitching is memoized on
//! [`Shape`], so repeated exports replay identical command sequences.

pub mod edge;
pub mod error;
pub mod export;
pub mod interpret;
pub mod shape;
pub mod sink;
pub mod stitch;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};

pub use edge::{Edge, EdgeKind};
pub use error::{Error, Result};
pub use export::export_groups;
pub use interpret::{interpret, EdgeBucket, ShapeGroup};
pub use shape::Shape;
pub use sink::{Command, CommandRecorder, ShapeSink};
pub use stitch::stitch;

/// Twip-space point used throughout the engine. Integer coordinates make
/// endpoint equality exact, which the stitcher relies on for map keys.
pub type Point = Point2<swf_lite_core::Twips>;

/// Twip-space displacement.
pub type Delta = Vector2<swf_lite_core::Twips>;
