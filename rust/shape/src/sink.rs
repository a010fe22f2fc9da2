// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Drawing-sink interface.
//!
//! The exporter drives a [`ShapeSink`] with path commands; the sink owns
//! everything downstream (rasterization, vector encoding, color spaces,
//! files). [`CommandRecorder`] captures the raw command sequence, which is
//! what the engine's tests assert against and what embedders can replay.

use swf_lite_core::{Color, Twips};

use crate::Point;

/// Receiver of path-drawing commands emitted by the exporter.
///
/// Calls arrive in a fixed discipline: `begin_shape` .. `end_shape`
/// bracketing everything; per group an optional fill pass
/// (`begin_fill_pass` .. `end_fill_pass`) followed by an optional stroke
/// pass (`begin_stroke_pass` .. `end_stroke_pass`); inside a pass, style
/// changes precede the move/line/curve commands they apply to.
pub trait ShapeSink {
    fn begin_shape(&mut self);
    fn end_shape(&mut self);

    fn begin_fill_pass(&mut self);
    fn end_fill_pass(&mut self);

    fn begin_stroke_pass(&mut self);
    /// `close` is true when the stroke path returned to its initial move
    /// point; open polylines are left unclosed.
    fn end_stroke_pass(&mut self, close: bool);

    fn set_fill_color(&mut self, color: Color);
    fn clear_fill(&mut self);

    fn set_stroke_style(&mut self, width: Twips, color: Color);

    fn move_to(&mut self, pos: Point);
    fn line_to(&mut self, pos: Point);
    fn curve_to(&mut self, control: Point, anchor: Point);

    /// Draw whatever path is pending and reset it.
    fn flush_path(&mut self);
}

/// One recorded sink command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    BeginShape,
    EndShape,
    BeginFillPass,
    EndFillPass,
    BeginStrokePass,
    EndStrokePass { close: bool },
    SetFillColor(Color),
    ClearFill,
    SetStrokeStyle { width: Twips, color: Color },
    MoveTo(Point),
    LineTo(Point),
    CurveTo { control: Point, anchor: Point },
    FlushPath,
}

/// A sink that records the exact command sequence it receives.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    pub commands: Vec<Command>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShapeSink for CommandRecorder {
    fn begin_shape(&mut self) {
        self.commands.push(Command::BeginShape);
    }

    fn end_shape(&mut self) {
        self.commands.push(Command::EndShape);
    }

    fn begin_fill_pass(&mut self) {
        self.commands.push(Command::BeginFillPass);
    }

    fn end_fill_pass(&mut self) {
        self.commands.push(Command::EndFillPass);
    }

    fn begin_stroke_pass(&mut self) {
        self.commands.push(Command::BeginStrokePass);
    }

    fn end_stroke_pass(&mut self, close: bool) {
        self.commands.push(Command::EndStrokePass { close });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(Command::SetFillColor(color));
    }

    fn clear_fill(&mut self) {
        self.commands.push(Command::ClearFill);
    }

    fn set_stroke_style(&mut self, width: Twips, color: Color) {
        self.commands.push(Command::SetStrokeStyle { width, color });
    }

    fn move_to(&mut self, pos: Point) {
        self.commands.push(Command::MoveTo(pos));
    }

    fn line_to(&mut self, pos: Point) {
        self.commands.push(Command::LineTo(pos));
    }

    fn curve_to(&mut self, control: Point, anchor: Point) {
        self.commands.push(Command::CurveTo { control, anchor });
    }

    fn flush_path(&mut self) {
        self.commands.push(Command::FlushPath);
    }
}
