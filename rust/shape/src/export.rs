// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Path export.
//!
//! Walks stitched groups in order and drives a [`ShapeSink`]: per group a
//! fill pass over the fill buckets in ascending style index, then a stroke
//! pass over the line buckets. A `move_to` is emitted only when the pen is
//! not already at the next edge's start, so connected traversals come out as
//! single subpaths.

use tracing::debug;

use swf_lite_core::{Color, FillStyle};

use crate::edge::EdgeKind;
use crate::error::{Error, Result};
use crate::interpret::ShapeGroup;
use crate::sink::ShapeSink;
use crate::Point;

/// Exports stitched groups to a sink.
pub fn export_groups(groups: &[ShapeGroup], sink: &mut dyn ShapeSink) -> Result<()> {
    sink.begin_shape();
    for group in groups {
        export_fill_pass(group, sink)?;
        export_stroke_pass(group, sink)?;
    }
    sink.end_shape();
    debug!(groups = groups.len(), "exported shape");
    Ok(())
}

/// Ascending style indices present in a bucket. Index 0 is never stored.
fn sorted_indices(bucket: &crate::interpret::EdgeBucket) -> Vec<usize> {
    let mut indices: Vec<usize> = bucket.keys().copied().collect();
    indices.sort_unstable();
    indices
}

fn export_fill_pass(group: &ShapeGroup, sink: &mut dyn ShapeSink) -> Result<()> {
    if group.fills.is_empty() {
        return Ok(());
    }

    sink.begin_fill_pass();
    for index in sorted_indices(&group.fills) {
        let color = resolve_fill(group, index)?;
        sink.set_fill_color(color);

        let mut pos: Option<Point> = None;
        for edge in &group.fills[&index] {
            if pos != Some(edge.from) {
                sink.move_to(edge.from);
            }
            match edge.kind {
                EdgeKind::Line => sink.line_to(edge.to),
                EdgeKind::Quad { control } => sink.curve_to(control, edge.to),
            }
            pos = Some(edge.to);
        }

        sink.clear_fill();
        sink.flush_path();
    }
    sink.end_fill_pass();
    Ok(())
}

fn export_stroke_pass(group: &ShapeGroup, sink: &mut dyn ShapeSink) -> Result<()> {
    if group.lines.is_empty() {
        return Ok(());
    }

    sink.begin_stroke_pass();
    let mut pos: Option<Point> = None;
    let mut last_move: Option<Point> = None;
    let indices = sorted_indices(&group.lines);
    for (i, &index) in indices.iter().enumerate() {
        if i > 0 {
            sink.flush_path();
            // Force a move_to for the new style's first edge.
            pos = None;
        }
        let (width, color) = resolve_line(group, index)?;
        sink.set_stroke_style(width, color);

        for edge in &group.lines[&index] {
            if pos != Some(edge.from) {
                sink.move_to(edge.from);
                last_move = Some(edge.from);
            }
            match edge.kind {
                EdgeKind::Line => sink.line_to(edge.to),
                EdgeKind::Quad { control } => sink.curve_to(control, edge.to),
            }
            pos = Some(edge.to);
        }
    }
    // Close the figure only when the pen came back to its last move point.
    let close = pos.is_some() && pos == last_move;
    sink.end_stroke_pass(close);
    sink.flush_path();
    Ok(())
}

/// Resolves a fill-style index against the group's table.
///
/// Index 0 ("no style") falls back to flat opaque black rather than
/// erroring; it is excluded from buckets, so this arm is a documented
/// safety net, not a normal path.
fn resolve_fill(group: &ShapeGroup, index: usize) -> Result<Color> {
    if index == 0 {
        return Ok(Color::BLACK);
    }
    let style = group
        .fill_styles
        .get(index - 1)
        .ok_or(Error::StyleOutOfRange {
            kind: "fill",
            index,
            len: group.fill_styles.len(),
        })?;
    match style {
        FillStyle::Solid(color) => Ok(*color),
        other => Err(Error::UnsupportedStyle(other.kind())),
    }
}

/// Resolves a line-style index; index 0 is a hairline fallback.
fn resolve_line(group: &ShapeGroup, index: usize) -> Result<(i32, Color)> {
    if index == 0 {
        return Ok((0, Color::BLACK));
    }
    let style = group
        .line_styles
        .get(index - 1)
        .ok_or(Error::StyleOutOfRange {
            kind: "line",
            index,
            len: group.line_styles.len(),
        })?;
    Ok((style.width, style.color))
}
