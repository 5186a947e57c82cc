//! The ParseError type returned by [`parse`](crate::parse).
//!
//! Reading stops at the first problem, so a [`ParseError`] carries exactly
//! one [`Diagnostic`].

use std::fmt;

use crate::error::Diagnostic;

/// A type alias for `Result<T, Diagnostic>`.
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// Error type for reading an SVG document.
#[derive(Debug)]
pub struct ParseError(Diagnostic);

impl ParseError {
    /// Get the diagnostic describing where reading failed.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.0
    }

    /// Consume the error and return its diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        self.0
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(diagnostic)
    }
}
