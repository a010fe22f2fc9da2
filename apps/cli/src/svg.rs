// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SVG drawing sink.
//!
//! Buffers path data per fill/stroke segment and flushes each finished
//! segment as a `<path>` element. Coordinates are offset so the bounds
//! minimum maps to the document origin, and scaled from twips to pixels.

use std::fmt::Write;

use swf_lite_core::{Color, Rect, Twips, TWIPS_PER_PIXEL};
use swf_lite_shape::{Point, ShapeSink};

/// A [`ShapeSink`] that renders to an SVG document.
pub struct SvgSink {
    bounds: Rect,
    elements: Vec<String>,
    path_data: String,
    fill: Option<Color>,
    stroke: Option<(Twips, Color)>,
}

impl SvgSink {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            elements: Vec::new(),
            path_data: String::new(),
            fill: None,
            stroke: None,
        }
    }

    /// Finishes the document and returns the SVG text.
    pub fn into_svg(mut self) -> String {
        self.flush_path();
        let width = self.bounds.width_px();
        let height = self.bounds.height_px();
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        for element in &self.elements {
            let _ = writeln!(out, "  {element}");
        }
        out.push_str("</svg>\n");
        out
    }

    /// Twip point to pixel coordinates, offset to the bounds origin.
    fn px(&self, pos: Point) -> (f32, f32) {
        (
            (pos.x - self.bounds.x_min) as f32 / TWIPS_PER_PIXEL as f32,
            (pos.y - self.bounds.y_min) as f32 / TWIPS_PER_PIXEL as f32,
        )
    }

    fn css(color: Color) -> String {
        if color.a == 255 {
            format!("rgb({},{},{})", color.r, color.g, color.b)
        } else {
            format!(
                "rgba({},{},{},{:.3})",
                color.r,
                color.g,
                color.b,
                color.a as f32 / 255.0
            )
        }
    }
}

impl ShapeSink for SvgSink {
    fn begin_shape(&mut self) {}

    fn end_shape(&mut self) {}

    fn begin_fill_pass(&mut self) {}

    fn end_fill_pass(&mut self) {}

    fn begin_stroke_pass(&mut self) {}

    fn end_stroke_pass(&mut self, close: bool) {
        if close {
            self.path_data.push_str(" Z");
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        self.flush_path();
        self.fill = Some(color);
    }

    fn clear_fill(&mut self) {
        // The pending path is drawn by the flush that follows.
    }

    fn set_stroke_style(&mut self, width: Twips, color: Color) {
        self.flush_path();
        self.stroke = Some((width, color));
    }

    fn move_to(&mut self, pos: Point) {
        let (x, y) = self.px(pos);
        if !self.path_data.is_empty() {
            self.path_data.push(' ');
        }
        let _ = write!(self.path_data, "M {x} {y}");
    }

    fn line_to(&mut self, pos: Point) {
        let (x, y) = self.px(pos);
        let _ = write!(self.path_data, " L {x} {y}");
    }

    fn curve_to(&mut self, control: Point, anchor: Point) {
        let (cx, cy) = self.px(control);
        let (x, y) = self.px(anchor);
        let _ = write!(self.path_data, " Q {cx} {cy} {x} {y}");
    }

    fn flush_path(&mut self) {
        if !self.path_data.is_empty() && (self.fill.is_some() || self.stroke.is_some()) {
            let fill = match self.fill {
                Some(color) => Self::css(color),
                None => "none".to_string(),
            };
            let stroke = match self.stroke {
                Some((_, color)) => Self::css(color),
                None => "none".to_string(),
            };
            let mut element = format!(
                r#"<path d="{}" fill="{}" stroke="{}""#,
                self.path_data, fill, stroke
            );
            if let Some((width, _)) = self.stroke {
                // Width 0 is the container's hairline convention.
                let width_px = if width == 0 {
                    1.0
                } else {
                    width as f32 / TWIPS_PER_PIXEL as f32
                };
                let _ = write!(element, r#" stroke-width="{width_px}""#);
            }
            element.push_str("/>");
            self.elements.push(element);
        }
        self.path_data.clear();
        self.fill = None;
        self.stroke = None;
    }
}
