//! cellviz - Explorable call-graph diagrams from Graphviz SVG.
//!
//! Graphviz output is normalized once (curve rectification, hit areas,
//! sentinel-link unwrapping, edge endpoints, tooltip removal) and then
//! driven by pointer releases that highlight the selected edge, cell or
//! node together with its incoming and outgoing edges.

pub mod config;

mod diagram;
mod error;
mod export;
mod normalize;
mod selection;

pub use cellviz_core::{Document, Element, NodeId, NodeKind};

pub use diagram::{Diagram, RawDiagram};
pub use error::CellvizError;
pub use normalize::{EDGE_FROM, EDGE_TO, NormalizeReport};
pub use selection::{ElementKind, Selection};

use log::{debug, info, trace};

use config::AppConfig;
use export::Exporter;

/// Builder for parsing, normalizing and rendering cellviz diagrams.
///
/// # Examples
///
/// ```rust
/// use cellviz::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"<svg xmlns="http://www.w3.org/2000/svg">
///   <g id="1" class="node"><text>main.go</text></g>
/// </svg>"#;
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = DiagramBuilder::new(config);
///
/// // Parse and normalize
/// let mut diagram = builder.build(source)
///     .expect("Failed to build");
/// diagram.click_by_id("1");
///
/// // Render the current state to SVG
/// let svg = builder.render_svg(&diagram)
///     .expect("Failed to render");
/// assert!(svg.contains("selected"));
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Marker and highlight class settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse SVG source into a raw, not yet normalized diagram.
    ///
    /// # Errors
    ///
    /// Returns [`CellvizError::Parse`] if the source is not well-formed XML
    /// or its root element is not `svg`.
    pub fn parse(&self, source: &str) -> Result<RawDiagram, CellvizError> {
        info!("Parsing diagram");

        let document = cellviz_parser::parse(source)
            .map_err(|err| CellvizError::new_parse_error(err, source))?;

        debug!("Diagram parsed successfully");
        trace!(document:?; "Parsed document");

        Ok(RawDiagram::new(document))
    }

    /// Parse and normalize SVG source into an interactive diagram.
    ///
    /// # Errors
    ///
    /// Returns [`CellvizError::Parse`] for the same inputs as
    /// [`parse`](Self::parse). Normalization itself never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cellviz::DiagramBuilder;
    ///
    /// let source = r#"<svg><g id="a_1:1"><a href="remove_me_url.cell.fn"/></g></svg>"#;
    /// let diagram = DiagramBuilder::default().build(source).unwrap();
    ///
    /// let cell = diagram.element_by_id("1:1").unwrap();
    /// assert!(cell.has_class("cell"));
    /// assert_eq!(diagram.report().unwrapped_links, 1);
    /// ```
    pub fn build(&self, source: &str) -> Result<Diagram, CellvizError> {
        let diagram = self.parse(source)?.normalize(&self.config);
        debug!("Diagram built successfully");
        Ok(diagram)
    }

    /// Render the current state of a diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`CellvizError::Export`] if the document cannot be written.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, CellvizError> {
        info!("Rendering SVG");

        let mut buffer = Vec::new();
        export::svg::Svg.export_document(diagram.document(), &mut buffer)?;
        let svg_string =
            String::from_utf8(buffer).map_err(|err| CellvizError::Export(Box::new(err)))?;

        info!(bytes = svg_string.len(); "SVG rendered successfully");
        Ok(svg_string)
    }
}
