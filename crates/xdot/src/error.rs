//! Error types for xdot operations.
//!
//! [`XdotError`] wraps every failure that can occur while loading, parsing or
//! rendering a scene.

use std::io;

use thiserror::Error;

use xdot_parser::error::ParseError;

use crate::layout::LayoutError;

/// The main error type for xdot operations.
///
/// The `Parse` variant keeps the source text next to the parse error so
/// that callers can render the diagnostic with a snippet.
#[derive(Debug, Error)]
pub enum XdotError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for XdotError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl XdotError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
