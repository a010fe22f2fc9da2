// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # SWF-Lite Core
//!
//! Decoded SWF shape data model and shape-library documents.
//!
//! This crate defines the primitive record stream a shape definition decodes
//! into (style changes, straight and curved edges, end marker), the indexed
//! fill/line style tables, and the JSON shape-library document that bundles
//! shapes, sprites, and symbol names the way an SWF container does.
//!
//! The actual geometry work (contour reconstruction and path export) lives in
//! `swf-lite-shape`; this crate is plain data plus lookup.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use swf_lite_core::ShapeDocument;
//!
//! let doc = ShapeDocument::from_path("shapes.json")?;
//! let shape = doc.shape_for_symbol("a_DemonAnimation_IdleHeavyFrame14")?;
//! println!("{} records", shape.records.len());
//! ```

pub mod document;
pub mod error;
pub mod geom;
pub mod record;
pub mod style;

pub use document::{ShapeDocument, Sprite};
pub use error::{Error, Result};
pub use geom::{Rect, Twips, TWIPS_PER_PIXEL};
pub use record::{NewStyles, ShapeDefinition, ShapeRecord, StyleChangeRecord};
pub use style::{Color, FillStyle, FillStyleKind, LineStyle};
