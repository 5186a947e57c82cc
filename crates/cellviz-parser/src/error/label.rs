//! Labeled source spans for diagnostic messages.
//!
//! A label associates a message with a span in the SVG source, pointing the
//! reader at the place where reading failed.

use crate::span::Span;

/// A labeled span in source text.
///
/// Reading reports a single label per diagnostic, marking the primary
/// location of the failure.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
