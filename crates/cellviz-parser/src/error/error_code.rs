//! Error codes for the cellviz diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - XML reading errors
//! - `E2xx` - Document structure errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // XML Errors (E1xx)
    // =========================================================================
    /// Malformed XML.
    ///
    /// The input is not well-formed XML at the reported position.
    E100,

    /// Incomplete input.
    ///
    /// The input ended before the document was closed.
    E101,

    // =========================================================================
    // Structure Errors (E2xx)
    // =========================================================================
    /// Root element is not `svg`.
    ///
    /// Only SVG documents can be turned into diagrams.
    E200,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "malformed XML",
            ErrorCode::E101 => "incomplete input",
            ErrorCode::E200 => "root element is not svg",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
