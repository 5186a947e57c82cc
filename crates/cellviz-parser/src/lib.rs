//! # cellviz Parser
//!
//! Reads generator SVG output into a [`cellviz_core::Document`].
//!
//! ## Usage
//!
//! ```
//! # use cellviz_parser::{parse, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         <svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
//!           <g id="graph0" class="graph">
//!             <g id="a -> b" class="edge"><path d="M0,0C1,1 2,2 3,3"/></g>
//!           </g>
//!         </svg>
//!     "#;
//!
//!     let document = parse(source)?;
//!     assert!(document.find_by_id("a -> b").is_some());
//!     Ok(())
//! }
//! ```

pub mod error;

mod reader;
mod span;

pub use error::ParseError;
pub use span::Span;

use log::{debug, info};

use cellviz_core::Document;

/// Parse SVG source text into a document tree.
///
/// # Arguments
///
/// * `source` - The SVG text, typically `dot -Tsvg` output
///
/// # Errors
///
/// Returns a [`ParseError`] with a located diagnostic if the text is not
/// well-formed XML or its root element is not `svg`.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    info!(bytes = source.len(); "Reading SVG document");

    let document = reader::read_document(source)?;

    debug!(
        elements = document.select(|_| true).len();
        "SVG document read"
    );

    Ok(document)
}
