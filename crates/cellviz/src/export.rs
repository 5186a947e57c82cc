//! Export of normalized diagrams.
//!
//! This module provides the [`Exporter`] trait implemented by output
//! backends. It is the last stage of the pipeline:
//!
//! ```text
//! SVG text
//!     ↓ parse
//! RawDiagram
//!     ↓ normalize
//! Diagram (+ pointer releases)
//!     ↓ export (this module)
//! SVG text
//! ```
//!
//! Export operations return [`Error`], which converts into
//! [`CellvizError::Export`] at the crate boundary.
//!
//! [`CellvizError::Export`]: crate::CellvizError::Export

/// SVG export backend.
pub mod svg;

use std::io;

use cellviz_core::Document;

/// Abstraction for document export backends.
pub trait Exporter {
    /// Writes `document` to `writer` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing the output fails.
    fn export_document(&self, document: &Document, writer: &mut dyn io::Write)
    -> Result<(), Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// An I/O error encountered while writing output.
    Io(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}
