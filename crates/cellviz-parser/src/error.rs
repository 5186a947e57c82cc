//! Error and diagnostic system for the cellviz SVG reader.
//!
//! Reading stops at the first problem, so a [`ParseError`] carries a
//! single [`Diagnostic`]: an error code, a labeled source span and an
//! optional help text.
//!
//! # Example
//!
//! ```
//! # use cellviz_parser::error::{Diagnostic, ErrorCode};
//! # use cellviz_parser::Span;
//!
//! let diag = Diagnostic::error("root element is `html`, expected `svg`")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(0..6), "document root")
//!     .with_help("pass the SVG produced by `dot -Tsvg`");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
