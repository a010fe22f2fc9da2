// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for document loading and symbol lookup.

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a shape library or resolving a symbol.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not match the schema.
    #[error("invalid shape document: {0}")]
    Json(#[from] serde_json::Error),

    /// No symbol with the given name exists in the document.
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    /// A character id referenced by a symbol or sprite has no shape.
    #[error("no shape with character id {0}")]
    ShapeNotFound(u32),

    /// A sprite resolved from a symbol places no shape characters.
    #[error("sprite {0} places no shape")]
    EmptySprite(u32),
}
