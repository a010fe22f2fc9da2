// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Twip-space units and shape bounds.

use serde::{Deserialize, Serialize};

/// Integer twip coordinate unit. SWF stores all geometry in twips.
pub type Twips = i32;

/// Twips per screen pixel.
pub const TWIPS_PER_PIXEL: i32 = 20;

/// Axis-aligned shape bounds in twips.
///
/// Used only to size the output canvas and to offset coordinates so the
/// minimum visible point maps to the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: Twips,
    pub y_min: Twips,
    pub x_max: Twips,
    pub y_max: Twips,
}

impl Rect {
    /// Creates bounds from min/max corners.
    pub fn new(x_min: Twips, y_min: Twips, x_max: Twips, y_max: Twips) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Width in twips.
    pub fn width(&self) -> Twips {
        self.x_max - self.x_min
    }

    /// Height in twips.
    pub fn height(&self) -> Twips {
        self.y_max - self.y_min
    }

    /// Width in whole pixels, rounded up so the shape always fits.
    pub fn width_px(&self) -> i32 {
        (self.width() + TWIPS_PER_PIXEL - 1) / TWIPS_PER_PIXEL
    }

    /// Height in whole pixels, rounded up.
    pub fn height_px(&self) -> i32 {
        (self.height() + TWIPS_PER_PIXEL - 1) / TWIPS_PER_PIXEL
    }
}
