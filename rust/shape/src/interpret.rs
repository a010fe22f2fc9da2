// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Record interpretation.
//!
//! Consumes a decoded record stream and partitions its edges into per-group,
//! per-style buckets. Edges accumulate into a run between style changes;
//! when a style change selects new styles, the pending run is dispatched
//! under the *previous* selection: left-side fills are reversed (and the run
//! order flipped) so both sides of a region run the same way, right-side
//! fills and strokes go in as decoded. An all-zero style selection closes
//! the current group; each closed group is stitched immediately so style
//! index reuse in a later group cannot touch it.
//!
//! Style selectors in the stream are biased by the running new-styles
//! offsets here, and each group snapshots the working tables when it closes.
//! Every index an edge carries is therefore absolute, and no offset
//! arithmetic survives past interpretation.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use swf_lite_core::{FillStyle, LineStyle, ShapeDefinition, ShapeRecord, StyleChangeRecord};

use crate::edge::Edge;
use crate::error::{Error, Result};
use crate::stitch::stitch;
use crate::{Delta, Point};

/// Edges grouped by absolute style index. Index 0 ("no style") never
/// appears as a key.
pub type EdgeBucket = FxHashMap<usize, Vec<Edge>>;

/// One independent sub-shape: stitched fill and line buckets plus the style
/// tables its indices resolve against.
#[derive(Debug, Clone, Default)]
pub struct ShapeGroup {
    pub fills: EdgeBucket,
    pub lines: EdgeBucket,
    /// Snapshot of the working fill-style table at group close.
    pub fill_styles: Vec<FillStyle>,
    /// Snapshot of the working line-style table at group close.
    pub line_styles: Vec<LineStyle>,
}

impl ShapeGroup {
    /// Whether the group holds no edges at all.
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty() && self.lines.is_empty()
    }

    /// Total number of edge entries across both buckets. An edge filled on
    /// both sides (or filled and stroked) counts once per bucket entry.
    pub fn edge_entries(&self) -> usize {
        self.fills.values().map(Vec::len).sum::<usize>()
            + self.lines.values().map(Vec::len).sum::<usize>()
    }
}

/// Interprets a shape's record stream into stitched groups.
pub fn interpret(shape: &ShapeDefinition) -> Result<Vec<ShapeGroup>> {
    Interpreter::new(shape).consume(&shape.records)
}

/// Walks the record stream, maintaining cursor, current style selection, and
/// new-styles offsets.
struct Interpreter {
    cursor: Point,
    fill_style_0: usize,
    fill_style_1: usize,
    line_style: usize,
    fill_offset: usize,
    line_offset: usize,
    fill_styles: Vec<FillStyle>,
    line_styles: Vec<LineStyle>,
    run: SmallVec<[Edge; 8]>,
    fills: EdgeBucket,
    lines: EdgeBucket,
    groups: Vec<ShapeGroup>,
}

impl Interpreter {
    fn new(shape: &ShapeDefinition) -> Self {
        Self {
            cursor: Point::new(0, 0),
            fill_style_0: 0,
            fill_style_1: 0,
            line_style: 0,
            fill_offset: 0,
            line_offset: 0,
            fill_styles: shape.fill_styles.clone(),
            line_styles: shape.line_styles.clone(),
            run: SmallVec::new(),
            fills: EdgeBucket::default(),
            lines: EdgeBucket::default(),
            groups: Vec::new(),
        }
    }

    fn consume(mut self, records: &[ShapeRecord]) -> Result<Vec<ShapeGroup>> {
        let mut ended = false;
        for record in records {
            if ended {
                return Err(Error::MalformedShape(
                    "record after end-of-shape".to_string(),
                ));
            }
            match record {
                ShapeRecord::StyleChange(change) => self.style_change(change),
                ShapeRecord::StraightEdge { delta_x, delta_y } => {
                    self.straight_edge(Delta::new(*delta_x, *delta_y));
                }
                ShapeRecord::CurvedEdge {
                    control_dx,
                    control_dy,
                    anchor_dx,
                    anchor_dy,
                } => {
                    self.curved_edge(
                        Delta::new(*control_dx, *control_dy),
                        Delta::new(*anchor_dx, *anchor_dy),
                    );
                }
                ShapeRecord::End => {
                    self.flush_run();
                    self.close_group();
                    ended = true;
                }
            }
        }
        if !ended {
            return Err(Error::MalformedShape(
                "record stream has no end-of-shape".to_string(),
            ));
        }
        debug!(groups = self.groups.len(), "interpreted shape records");
        Ok(self.groups)
    }

    fn style_change(&mut self, change: &StyleChangeRecord) {
        if change.selects_styles() {
            self.flush_run();
        }

        if let Some(new_styles) = &change.new_styles {
            self.fill_offset = self.fill_styles.len();
            self.line_offset = self.line_styles.len();
            self.fill_styles.extend(new_styles.fill_styles.iter().cloned());
            self.line_styles.extend(new_styles.line_styles.iter().cloned());
        }

        if change.is_group_terminator() {
            self.close_group();
            self.fill_style_0 = 0;
            self.fill_style_1 = 0;
            self.line_style = 0;
        } else {
            if let Some(fill_0) = change.fill_style_0 {
                self.fill_style_0 = Self::bias(fill_0, self.fill_offset);
            }
            if let Some(fill_1) = change.fill_style_1 {
                self.fill_style_1 = Self::bias(fill_1, self.fill_offset);
            }
            if let Some(line) = change.line_style {
                self.line_style = Self::bias(line, self.line_offset);
            }
        }

        if let Some((x, y)) = change.move_to {
            self.cursor = Point::new(x, y);
        }
    }

    /// Biases a nonzero selector by the new-styles offset; 0 stays "none".
    fn bias(index: u32, offset: usize) -> usize {
        let index = index as usize;
        if index > 0 {
            index + offset
        } else {
            0
        }
    }

    fn straight_edge(&mut self, delta: Delta) {
        let from = self.cursor;
        let to = from + delta;
        self.run
            .push(Edge::line(from, to, self.fill_style_1, self.line_style));
        self.cursor = to;
    }

    fn curved_edge(&mut self, control_delta: Delta, anchor_delta: Delta) {
        let from = self.cursor;
        let control = from + control_delta;
        let to = control + anchor_delta;
        self.run.push(Edge::quad(
            from,
            control,
            to,
            self.fill_style_1,
            self.line_style,
        ));
        self.cursor = to;
    }

    /// Dispatches the pending run under the current style selection.
    fn flush_run(&mut self) {
        if self.run.is_empty() {
            return;
        }

        if self.fill_style_0 != 0 {
            // Left-side fill: flip every edge and the run order so the left
            // soup runs the same way as a right-side soup would.
            let fill_0 = self.fill_style_0;
            self.fills
                .entry(fill_0)
                .or_default()
                .extend(self.run.iter().rev().map(|edge| edge.reversed_with_fill(fill_0)));
        }

        if self.fill_style_1 != 0 {
            self.fills
                .entry(self.fill_style_1)
                .or_default()
                .extend(self.run.iter().copied());
        }

        if self.line_style != 0 {
            self.lines
                .entry(self.line_style)
                .or_default()
                .extend(self.run.iter().copied());
        }

        self.run.clear();
    }

    /// Stitches the working buckets and pushes them as a finished group.
    fn close_group(&mut self) {
        let mut fills = std::mem::take(&mut self.fills);
        let mut lines = std::mem::take(&mut self.lines);
        for edges in fills.values_mut() {
            *edges = stitch(std::mem::take(edges));
        }
        for edges in lines.values_mut() {
            *edges = stitch(std::mem::take(edges));
        }
        debug!(
            fill_styles = fills.len(),
            line_styles = lines.len(),
            "closed shape group"
        );
        self.groups.push(ShapeGroup {
            fills,
            lines,
            fill_styles: self.fill_styles.clone(),
            line_styles: self.line_styles.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swf_lite_core::{Color, NewStyles, Rect};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn shape(records: Vec<ShapeRecord>, fill_styles: Vec<FillStyle>) -> ShapeDefinition {
        ShapeDefinition {
            bounds: Rect::new(0, 0, 200, 200),
            fill_styles,
            line_styles: vec![LineStyle::new(20, Color::BLACK)],
            records,
        }
    }

    fn select(
        move_to: Option<(i32, i32)>,
        fill_0: Option<u32>,
        fill_1: Option<u32>,
        line: Option<u32>,
    ) -> ShapeRecord {
        ShapeRecord::StyleChange(StyleChangeRecord {
            move_to,
            fill_style_0: fill_0,
            fill_style_1: fill_1,
            line_style: line,
            new_styles: None,
        })
    }

    fn straight(dx: i32, dy: i32) -> ShapeRecord {
        ShapeRecord::StraightEdge {
            delta_x: dx,
            delta_y: dy,
        }
    }

    fn red() -> Vec<FillStyle> {
        vec![FillStyle::Solid(Color::rgb(255, 0, 0))]
    }

    #[test]
    fn test_triangle_fill_right() {
        let records = vec![
            select(Some((0, 0)), None, Some(1), None),
            straight(10, 0),
            straight(0, 10),
            straight(-10, -10),
            ShapeRecord::End,
        ];
        let groups = interpret(&shape(records, red())).unwrap();
        assert_eq!(groups.len(), 1);
        let edges = &groups[0].fills[&1];
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].from, p(0, 0));
        assert_eq!(edges[2].to, p(0, 0));
        for pair in edges.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        assert!(groups[0].lines.is_empty());
    }

    #[test]
    fn test_fill_left_is_reversed() {
        let records = vec![
            select(Some((0, 0)), Some(1), None, None),
            straight(10, 0),
            straight(0, 10),
            ShapeRecord::End,
        ];
        let groups = interpret(&shape(records, red())).unwrap();
        let edges = &groups[0].fills[&1];
        assert_eq!(edges.len(), 2);
        // Run order flipped and each edge reversed: traversal now starts at
        // the old endpoint.
        assert_eq!(edges[0].from, p(10, 10));
        assert_eq!(edges[0].to, p(10, 0));
        assert_eq!(edges[1].to, p(0, 0));
        assert!(edges.iter().all(|e| e.reversed));
    }

    #[test]
    fn test_edge_in_multiple_buckets() {
        // Both sides filled and stroked: one edge, three bucket entries.
        let records = vec![
            select(
                Some((0, 0)),
                Some(1),
                Some(2),
                Some(1),
            ),
            straight(10, 0),
            ShapeRecord::End,
        ];
        let styles = vec![
            FillStyle::Solid(Color::rgb(255, 0, 0)),
            FillStyle::Solid(Color::rgb(0, 255, 0)),
        ];
        let groups = interpret(&shape(records, styles)).unwrap();
        let group = &groups[0];
        assert_eq!(group.fills[&1].len(), 1);
        assert_eq!(group.fills[&2].len(), 1);
        assert_eq!(group.lines[&1].len(), 1);
        // Left copy reversed, right copy as decoded.
        assert_eq!(group.fills[&1][0].from, p(10, 0));
        assert_eq!(group.fills[&2][0].from, p(0, 0));
    }

    #[test]
    fn test_group_boundary_resets_styles() {
        let records = vec![
            select(Some((0, 0)), None, Some(1), None),
            straight(10, 0),
            // All-zero selection: group boundary.
            select(None, Some(0), Some(0), Some(0)),
            straight(10, 0),
            select(None, None, Some(1), None),
            straight(0, 10),
            ShapeRecord::End,
        ];
        let groups = interpret(&shape(records, red())).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].fills[&1].len(), 1);
        // The edge drawn right after the boundary had no style selected and
        // lands nowhere; only the re-selected edge survives.
        assert_eq!(groups[1].fills[&1].len(), 1);
        assert_eq!(groups[1].fills[&1][0].from, p(20, 0));
    }

    #[test]
    fn test_new_styles_offset_biasing() {
        let new_styles = NewStyles {
            fill_styles: vec![FillStyle::Solid(Color::rgb(0, 0, 255))],
            line_styles: Vec::new(),
        };
        let records = vec![
            select(Some((0, 0)), None, Some(1), None),
            straight(10, 0),
            ShapeRecord::StyleChange(StyleChangeRecord {
                move_to: Some((100, 100)),
                fill_style_0: None,
                fill_style_1: Some(1),
                line_style: None,
                new_styles: Some(new_styles),
            }),
            straight(10, 0),
            ShapeRecord::End,
        ];
        let groups = interpret(&shape(records, red())).unwrap();
        let group = &groups[0];
        // Second selection of "1" resolves to absolute index 2.
        assert_eq!(group.fills[&1].len(), 1);
        assert_eq!(group.fills[&2].len(), 1);
        assert_eq!(group.fill_styles.len(), 2);
        assert_eq!(group.fills[&2][0].from, p(100, 100));
    }

    #[test]
    fn test_bucket_partition_counts() {
        // Every decoded edge appears in exactly the buckets its styles name,
        // across exactly one group.
        let records = vec![
            select(Some((0, 0)), None, Some(1), Some(1)),
            straight(10, 0),
            straight(0, 10),
            select(None, Some(0), Some(0), Some(0)),
            select(None, None, Some(1), None),
            straight(-10, 0),
            ShapeRecord::End,
        ];
        let groups = interpret(&shape(records, red())).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].edge_entries(), 4); // 2 fill + 2 line
        assert_eq!(groups[1].edge_entries(), 1);
    }

    #[test]
    fn test_adjacent_triangles_share_edge() {
        // Two triangles share the edge (10,0)-(10,10), recorded once with
        // the second region on its left side. The left-fill reversal plus
        // stitching must leave each fill bucket a clean closed 3-edge loop.
        let styles = vec![
            FillStyle::Solid(Color::rgb(255, 0, 0)),
            FillStyle::Solid(Color::rgb(0, 255, 0)),
        ];
        let records = vec![
            select(Some((0, 0)), None, Some(1), None),
            straight(10, 0),
            straight(0, 10),
            straight(-10, -10),
            // Shared edge: region 2 on the left, nothing on the right.
            select(Some((10, 0)), Some(2), Some(0), None),
            straight(0, 10),
            // Rest of triangle 2, right side filled.
            select(Some((10, 0)), Some(0), Some(2), None),
            straight(10, 5),
            straight(-10, 5),
            ShapeRecord::End,
        ];
        let groups = interpret(&shape(records, styles)).unwrap();
        let group = &groups[0];

        for &style in &[1usize, 2] {
            let edges = &group.fills[&style];
            assert_eq!(edges.len(), 3, "fill {} is not a triangle", style);
            for pair in edges.windows(2) {
                assert_eq!(pair[0].to, pair[1].from, "dangling half-edge");
            }
            assert_eq!(edges[2].to, edges[0].from, "loop not closed");
        }
        // The shared edge went in reversed so region 2 runs consistently.
        assert!(group.fills[&2].iter().any(|e| e.reversed));
    }

    #[test]
    fn test_missing_end_is_malformed() {
        let records = vec![select(Some((0, 0)), None, Some(1), None), straight(10, 0)];
        let err = interpret(&shape(records, red())).unwrap_err();
        assert!(matches!(err, Error::MalformedShape(_)));
    }

    #[test]
    fn test_record_after_end_is_malformed() {
        let records = vec![ShapeRecord::End, straight(10, 0)];
        let err = interpret(&shape(records, red())).unwrap_err();
        assert!(matches!(err, Error::MalformedShape(_)));
    }

    #[test]
    fn test_curved_edge_cursor_advance() {
        let records = vec![
            select(Some((0, 0)), None, Some(1), None),
            ShapeRecord::CurvedEdge {
                control_dx: 10,
                control_dy: 0,
                anchor_dx: 0,
                anchor_dy: 10,
            },
            straight(5, 5),
            ShapeRecord::End,
        ];
        let groups = interpret(&shape(records, red())).unwrap();
        let edges = &groups[0].fills[&1];
        assert_eq!(edges[0].to, p(10, 10));
        assert_eq!(edges[1].from, p(10, 10));
        assert_eq!(edges[1].to, p(15, 15));
    }
}
