// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Directed edge value type.
//!
//! An edge is a straight segment or a quadratic Bézier, tagged with the fill
//! region identity on each side of its drawn direction and an optional stroke
//! identity. Edges are immutable after construction; the only operation is
//! [`Edge::reversed_with_fill`], which the interpreter and stitcher use to
//! make both half-edge soups of a region run the same way.

use crate::Point;

/// Geometric kind of an edge. A closed two-case variant: SWF shapes contain
/// only straight segments and quadratic curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Line,
    Quad { control: Point },
}

/// A directed edge bounding a fill region and/or carrying a stroke.
///
/// `fill_style` and `line_style` are absolute indices into the owning
/// group's style tables (0 = none); the interpreter resolves new-styles
/// offsets before edges are built, so no offset arithmetic survives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
    pub kind: EdgeKind,
    pub fill_style: usize,
    pub line_style: usize,
    /// Toggled on every reversal. Diagnostic only: a double reversal
    /// restores the geometry but leaves this flag as it lies, so nothing may
    /// rely on it for correctness.
    pub reversed: bool,
}

impl Edge {
    /// Creates a straight edge.
    pub fn line(from: Point, to: Point, fill_style: usize, line_style: usize) -> Self {
        Self {
            from,
            to,
            kind: EdgeKind::Line,
            fill_style,
            line_style,
            reversed: false,
        }
    }

    /// Creates a quadratic curve edge.
    pub fn quad(
        from: Point,
        control: Point,
        to: Point,
        fill_style: usize,
        line_style: usize,
    ) -> Self {
        Self {
            from,
            to,
            kind: EdgeKind::Quad { control },
            fill_style,
            line_style,
            reversed: false,
        }
    }

    /// Returns this edge with direction flipped and the fill identity
    /// replaced. The control point is unchanged (a quadratic curve traversed
    /// backwards has the same control point).
    pub fn reversed_with_fill(&self, new_fill_style: usize) -> Self {
        Self {
            from: self.to,
            to: self.from,
            kind: self.kind,
            fill_style: new_fill_style,
            line_style: self.line_style,
            reversed: !self.reversed,
        }
    }
}
