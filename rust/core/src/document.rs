// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shape-library documents.
//!
//! A document is the decoded remnant of an SWF container: shape definitions
//! keyed by character id, sprites that place characters, and a symbol table
//! mapping exported names to character ids. Symbol lookup follows the
//! container's indirection: a symbol names either a shape directly or a
//! sprite whose first placed shape is used.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::ShapeDefinition;

/// A sprite character: an ordered list of placed character ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    #[serde(default)]
    pub placed: Vec<u32>,
}

/// A decoded shape library.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeDocument {
    /// Shape definitions by character id.
    #[serde(default)]
    pub shapes: FxHashMap<u32, ShapeDefinition>,
    /// Sprite characters by character id.
    #[serde(default)]
    pub sprites: FxHashMap<u32, Sprite>,
    /// Exported symbol names to character ids.
    #[serde(default)]
    pub symbols: FxHashMap<String, u32>,
}

impl ShapeDocument {
    /// Parses a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Loads a document from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Looks up a shape definition by character id.
    pub fn shape(&self, id: u32) -> Result<&ShapeDefinition> {
        self.shapes.get(&id).ok_or(Error::ShapeNotFound(id))
    }

    /// Resolves an exported symbol name to a shape definition.
    ///
    /// The symbol may name a shape character directly, or a sprite; for a
    /// sprite the first placed character that is a shape wins.
    pub fn shape_for_symbol(&self, name: &str) -> Result<&ShapeDefinition> {
        let id = *self
            .symbols
            .get(name)
            .ok_or_else(|| Error::SymbolNotFound(name.to_string()))?;

        if let Some(shape) = self.shapes.get(&id) {
            return Ok(shape);
        }

        if let Some(sprite) = self.sprites.get(&id) {
            return sprite
                .placed
                .iter()
                .find_map(|placed| self.shapes.get(placed))
                .ok_or(Error::EmptySprite(id));
        }

        Err(Error::ShapeNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Rect;
    use crate::record::ShapeRecord;

    fn empty_shape() -> ShapeDefinition {
        ShapeDefinition {
            bounds: Rect::new(0, 0, 100, 100),
            fill_styles: Vec::new(),
            line_styles: Vec::new(),
            records: vec![ShapeRecord::End],
        }
    }

    fn document() -> ShapeDocument {
        let mut doc = ShapeDocument::default();
        doc.shapes.insert(7, empty_shape());
        doc.sprites.insert(
            9,
            Sprite {
                placed: vec![3, 7],
            },
        );
        doc.symbols.insert("direct".to_string(), 7);
        doc.symbols.insert("via_sprite".to_string(), 9);
        doc.symbols.insert("dangling".to_string(), 42);
        doc
    }

    #[test]
    fn test_symbol_to_shape_direct() {
        let doc = document();
        assert!(doc.shape_for_symbol("direct").is_ok());
    }

    #[test]
    fn test_symbol_via_sprite_skips_non_shapes() {
        let doc = document();
        // Placed id 3 is not a shape; resolution falls through to 7.
        let shape = doc.shape_for_symbol("via_sprite").unwrap();
        assert_eq!(shape.bounds.width(), 100);
    }

    #[test]
    fn test_missing_symbol() {
        let doc = document();
        assert!(matches!(
            doc.shape_for_symbol("nope"),
            Err(Error::SymbolNotFound(_))
        ));
    }

    #[test]
    fn test_dangling_character_id() {
        let doc = document();
        assert!(matches!(
            doc.shape_for_symbol("dangling"),
            Err(Error::ShapeNotFound(42))
        ));
    }

    #[test]
    fn test_empty_sprite() {
        let mut doc = document();
        doc.sprites.insert(9, Sprite { placed: vec![3] });
        assert!(matches!(
            doc.shape_for_symbol("via_sprite"),
            Err(Error::EmptySprite(9))
        ));
    }

    #[test]
    fn test_document_json() {
        let json = r#"{
            "shapes": {
                "1": {
                    "bounds": {"x_min":0,"y_min":0,"x_max":200,"y_max":200},
                    "fill_styles": [{"type":"solid","r":255,"g":0,"b":0,"a":255}],
                    "records": [{"type":"end"}]
                }
            },
            "symbols": {"square": 1}
        }"#;
        let doc = ShapeDocument::from_json(json).unwrap();
        let shape = doc.shape_for_symbol("square").unwrap();
        assert_eq!(shape.fill_styles.len(), 1);
    }
}
