//! miette reporting for [`CellvizError`].
//!
//! A failed run produces exactly one [`Report`]. What it shows depends on
//! where the run stopped:
//!
//! - Reading the SVG: the parser's code (`E100` malformed XML, `E101`
//!   truncated input, `E200` a root other than `svg`) with the input text
//!   and a label at the failing position.
//! - Loading configuration or reading the input file: `cellviz::io`.
//! - Writing the result: `cellviz::export`.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use cellviz::CellvizError;
use cellviz_parser::{Span, error::Diagnostic};

/// A [`CellvizError`] prepared for miette's report handlers.
pub struct Report<'a> {
    err: &'a CellvizError,
}

impl<'a> Report<'a> {
    pub fn new(err: &'a CellvizError) -> Self {
        Self { err }
    }

    /// The reading diagnostic, if the run stopped while reading the SVG.
    fn diagnostic(&self) -> Option<&'a Diagnostic> {
        match self.err {
            CellvizError::Parse { err, .. } => Some(err.diagnostic()),
            CellvizError::Io(_) | CellvizError::Export(_) => None,
        }
    }
}

impl fmt::Debug for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Report").field(self.err).finish()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.diagnostic() {
            Some(diag) => f.write_str(diag.message()),
            None => fmt::Display::fmt(self.err, f),
        }
    }
}

impl std::error::Error for Report<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.err {
            CellvizError::Parse { .. } => None,
            other => std::error::Error::source(other),
        }
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        match self.err {
            CellvizError::Parse { err, .. } => err
                .diagnostic()
                .code()
                .map(|code| Box::new(code) as Box<dyn fmt::Display>),
            CellvizError::Io(_) => Some(Box::new("cellviz::io")),
            CellvizError::Export(_) => Some(Box::new("cellviz::export")),
        }
    }

    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        let help = match self.err {
            CellvizError::Parse { err, .. } => err.diagnostic().help()?,
            CellvizError::Io(_) => "check the input path and the configuration file",
            CellvizError::Export(_) => "check that the output location is writable",
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self.err {
            CellvizError::Parse { src, .. } => Some(src as &dyn SourceCode),
            CellvizError::Io(_) | CellvizError::Export(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let diag = self.diagnostic()?;
        if diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(diag.labels().iter().map(|label| {
            LabeledSpan::new_primary_with_span(
                Some(label.message().to_string()),
                source_span(label.span()),
            )
        })))
    }
}

fn source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}
