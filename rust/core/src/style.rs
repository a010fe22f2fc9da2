// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fill and line style tables.
//!
//! Shape records reference styles by 1-based index into these tables. Only
//! flat-color fills are renderable; the gradient and bitmap kinds are modeled
//! so a decoded shape can carry them, but export fails with an
//! `UnsupportedStyle` error when one is referenced.

use serde::{Deserialize, Serialize};

use crate::geom::Twips;

/// RGBA color. Shapes decoded from RGB containers carry alpha 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque black, the documented fallback for style index 0.
    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Opaque color from RGB components.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA components.
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// One entry of a fill-style table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FillStyle {
    Solid(Color),
    LinearGradient,
    RadialGradient,
    FocalGradient,
    RepeatingBitmap,
    ClippedBitmap,
}

impl FillStyle {
    /// The style kind, for diagnostics and error reporting.
    pub fn kind(&self) -> FillStyleKind {
        match self {
            FillStyle::Solid(_) => FillStyleKind::Solid,
            FillStyle::LinearGradient => FillStyleKind::LinearGradient,
            FillStyle::RadialGradient => FillStyleKind::RadialGradient,
            FillStyle::FocalGradient => FillStyleKind::FocalGradient,
            FillStyle::RepeatingBitmap => FillStyleKind::RepeatingBitmap,
            FillStyle::ClippedBitmap => FillStyleKind::ClippedBitmap,
        }
    }
}

/// Discriminant of [`FillStyle`], used in `UnsupportedStyle` errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStyleKind {
    Solid,
    LinearGradient,
    RadialGradient,
    FocalGradient,
    RepeatingBitmap,
    ClippedBitmap,
}

impl std::fmt::Display for FillStyleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FillStyleKind::Solid => "solid",
            FillStyleKind::LinearGradient => "linear gradient",
            FillStyleKind::RadialGradient => "radial gradient",
            FillStyleKind::FocalGradient => "focal gradient",
            FillStyleKind::RepeatingBitmap => "repeating bitmap",
            FillStyleKind::ClippedBitmap => "clipped bitmap",
        };
        f.write_str(name)
    }
}

/// One entry of a line-style table: stroke width in twips plus color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    pub width: Twips,
    pub color: Color,
}

impl LineStyle {
    pub fn new(width: Twips, color: Color) -> Self {
        Self { width, color }
    }
}
