// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded shape records.
//!
//! A shape definition is a flat stream of records: style changes, straight
//! edges, curved edges, and a terminating end marker. Edge deltas are
//! relative to the running cursor; only a style change's move-to is absolute.

use serde::{Deserialize, Serialize};

use crate::geom::{Rect, Twips};
use crate::style::{FillStyle, LineStyle};

/// One decoded shape record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeRecord {
    /// Style selection, cursor move, optional new style tables.
    StyleChange(StyleChangeRecord),
    /// Straight edge from the cursor, displaced by the deltas.
    StraightEdge { delta_x: Twips, delta_y: Twips },
    /// Quadratic curve: control point at cursor + control delta, anchor at
    /// control + anchor delta.
    CurvedEdge {
        control_dx: Twips,
        control_dy: Twips,
        anchor_dx: Twips,
        anchor_dy: Twips,
    },
    /// End of the record stream.
    End,
}

/// Payload of a style-change record.
///
/// Every field is optional; the record only acts on what it carries. Style
/// selectors are raw 1-based table indices as decoded (0 = "no style"),
/// before any new-styles offset is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleChangeRecord {
    /// Absolute cursor position, when the record moves the pen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_to: Option<(Twips, Twips)>,
    /// Fill style for the left side of subsequent edges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_style_0: Option<u32>,
    /// Fill style for the right side of subsequent edges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_style_1: Option<u32>,
    /// Line style for subsequent edges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<u32>,
    /// Replacement style tables appended to the working tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_styles: Option<NewStyles>,
}

impl StyleChangeRecord {
    /// Whether the record carries any explicit style selector.
    pub fn selects_styles(&self) -> bool {
        self.fill_style_0.is_some() || self.fill_style_1.is_some() || self.line_style.is_some()
    }

    /// Whether the record explicitly zeroes all three selectors, which marks
    /// a group boundary inside the stream.
    pub fn is_group_terminator(&self) -> bool {
        self.fill_style_0 == Some(0) && self.fill_style_1 == Some(0) && self.line_style == Some(0)
    }
}

/// Style tables declared mid-stream by a style-change record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewStyles {
    #[serde(default)]
    pub fill_styles: Vec<FillStyle>,
    #[serde(default)]
    pub line_styles: Vec<LineStyle>,
}

/// One fully decoded shape: bounds, initial style tables, record stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDefinition {
    pub bounds: Rect,
    #[serde(default)]
    pub fill_styles: Vec<FillStyle>,
    #[serde(default)]
    pub line_styles: Vec<LineStyle>,
    pub records: Vec<ShapeRecord>,
}
