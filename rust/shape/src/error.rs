// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for shape processing.

use swf_lite_core::FillStyleKind;

/// Result type alias for shape operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while interpreting or exporting a shape.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The record stream violates the decode contract (unexpected record
    /// type or ordering). Aborts the whole shape.
    #[error("malformed shape: {0}")]
    MalformedShape(String),

    /// A referenced fill style is not flat color; there is no rendering
    /// fallback for gradients or bitmap fills.
    #[error("unsupported fill style: {0}")]
    UnsupportedStyle(FillStyleKind),

    /// An edge references a style index past the end of its group's table.
    #[error("{kind} style index {index} out of range (table has {len} entries)")]
    StyleOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    /// Document/lookup error from the core crate.
    #[error("core error: {0}")]
    Core(#[from] swf_lite_core::Error),
}
