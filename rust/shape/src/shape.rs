// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shape processing entry point.
//!
//! [`Shape`] owns a decoded definition and memoizes the interpreted,
//! stitched groups: the record stream is walked once, and every export
//! afterwards replays the same contours.

use swf_lite_core::{Rect, ShapeDefinition};

use crate::error::Result;
use crate::export::export_groups;
use crate::interpret::{interpret, ShapeGroup};
use crate::sink::ShapeSink;

/// A decoded shape with lazily built, memoized contour groups.
#[derive(Debug)]
pub struct Shape {
    definition: ShapeDefinition,
    groups: Option<Vec<ShapeGroup>>,
}

impl Shape {
    /// Wraps a decoded shape definition. No work happens until the groups
    /// are first needed.
    pub fn new(definition: ShapeDefinition) -> Self {
        Self {
            definition,
            groups: None,
        }
    }

    /// The shape's bounding rectangle, as decoded.
    pub fn bounds(&self) -> Rect {
        self.definition.bounds
    }

    /// The stitched groups, built on first call and cached.
    pub fn groups(&mut self) -> Result<&[ShapeGroup]> {
        if self.groups.is_none() {
            self.groups = Some(interpret(&self.definition)?);
        }
        Ok(self.groups.as_deref().unwrap())
    }

    /// Exports the shape to a drawing sink. Repeated calls emit identical
    /// command sequences.
    pub fn export(&mut self, sink: &mut dyn ShapeSink) -> Result<()> {
        self.groups()?;
        export_groups(self.groups.as_deref().unwrap(), sink)
    }
}

impl From<ShapeDefinition> for Shape {
    fn from(definition: ShapeDefinition) -> Self {
        Self::new(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swf_lite_core::{Color, FillStyle, Rect, ShapeRecord, StyleChangeRecord};

    fn triangle() -> ShapeDefinition {
        ShapeDefinition {
            bounds: Rect::new(0, 0, 200, 200),
            fill_styles: vec![FillStyle::Solid(Color::rgb(255, 0, 0))],
            line_styles: Vec::new(),
            records: vec![
                ShapeRecord::StyleChange(StyleChangeRecord {
                    move_to: Some((0, 0)),
                    fill_style_1: Some(1),
                    ..Default::default()
                }),
                ShapeRecord::StraightEdge {
                    delta_x: 10,
                    delta_y: 0,
                },
                ShapeRecord::StraightEdge {
                    delta_x: 0,
                    delta_y: 10,
                },
                ShapeRecord::StraightEdge {
                    delta_x: -10,
                    delta_y: -10,
                },
                ShapeRecord::End,
            ],
        }
    }

    #[test]
    fn test_groups_are_memoized() {
        let mut shape = Shape::new(triangle());
        let first = shape.groups().unwrap().as_ptr();
        let second = shape.groups().unwrap().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bounds_passthrough() {
        let shape = Shape::new(triangle());
        assert_eq!(shape.bounds().width(), 200);
    }
}
