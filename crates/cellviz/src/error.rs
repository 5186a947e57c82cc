//! Error types for cellviz operations.
//!
//! This module provides the main error type [`CellvizError`] which wraps
//! the failures that can stop the pipeline. Input-contract violations found
//! while normalizing are not errors; they are logged and skipped.

use std::io;

use thiserror::Error;

use cellviz_parser::error::ParseError;

/// The main error type for cellviz operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the structured
/// diagnostic so that reporters can render a labeled snippet.
#[derive(Debug, Error)]
pub enum CellvizError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for CellvizError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl CellvizError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
