//! Configuration types for cellviz diagram processing.
//!
//! This module provides configuration structures that name the classes and
//! tokens the normalizer and the selection controller look for. All types
//! implement [`serde::Deserialize`] for flexible loading from external
//! sources, and every field falls back to the generator's conventions.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining marker and highlight settings.
//! - [`MarkerConfig`] - Classes and tokens emitted by the diagram generator.
//! - [`HighlightConfig`] - Classes written by the selection controller.
//!
//! # Example
//!
//! ```
//! # use cellviz::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.markers().edge(), "edge");
//! assert_eq!(config.highlight().fade(), "fade");
//! ```

use serde::Deserialize;

/// Top-level application configuration.
///
/// Groups [`MarkerConfig`] and [`HighlightConfig`] into a single
/// configuration root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Generator marker section.
    #[serde(default)]
    markers: MarkerConfig,

    /// Highlight class section.
    #[serde(default)]
    highlight: HighlightConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `markers` - Classes and tokens found in generator output.
    /// * `highlight` - Classes written when an element is selected.
    pub fn new(markers: MarkerConfig, highlight: HighlightConfig) -> Self {
        Self { markers, highlight }
    }

    /// Returns the marker configuration.
    pub fn markers(&self) -> &MarkerConfig {
        &self.markers
    }

    /// Returns the highlight configuration.
    pub fn highlight(&self) -> &HighlightConfig {
        &self.highlight
    }
}

/// Classes and tokens emitted by the diagram generator.
///
/// Field defaults match the call-graph generator this tool is paired with.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Class of node (table) groups.
    node: String,
    /// Class of edge groups.
    edge: String,
    /// Class of cell (table row) groups.
    cell: String,
    /// Extra class making a cell selectable.
    function: String,
    /// Class on edges whose curve must be rectified.
    rectify: String,
    /// Class given to duplicated hit-area paths.
    hit_path: String,
    /// First `.`-separated component of anchor hrefs that must be unwrapped.
    sentinel: String,
    /// Prefix the generator adds to the ids of anchor-wrapping groups.
    id_prefix: String,
    /// Separator between the endpoints in edge ids.
    edge_separator: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            node: "node".to_string(),
            edge: "edge".to_string(),
            cell: "cell".to_string(),
            function: "fn".to_string(),
            rectify: "modify-me".to_string(),
            hit_path: "hover-path".to_string(),
            sentinel: "remove_me_url".to_string(),
            id_prefix: "a_".to_string(),
            edge_separator: " -> ".to_string(),
        }
    }
}

impl MarkerConfig {
    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn edge(&self) -> &str {
        &self.edge
    }

    pub fn cell(&self) -> &str {
        &self.cell
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn rectify(&self) -> &str {
        &self.rectify
    }

    pub fn hit_path(&self) -> &str {
        &self.hit_path
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    pub fn id_prefix(&self) -> &str {
        &self.id_prefix
    }

    pub fn edge_separator(&self) -> &str {
        &self.edge_separator
    }

    /// Returns `true` if `element` is a node, edge or cell group.
    pub(crate) fn is_group(&self, element: &cellviz_core::Element) -> bool {
        element.has_class(&self.node)
            || element.has_class(&self.edge)
            || element.has_class(&self.cell)
    }
}

/// Classes written by the selection controller.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    selected: String,
    fade: String,
    incoming: String,
    outgoing: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            selected: "selected".to_string(),
            fade: "fade".to_string(),
            incoming: "incoming".to_string(),
            outgoing: "outgoing".to_string(),
        }
    }
}

impl HighlightConfig {
    /// Class on the selected element.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Class on edges unrelated to the selection.
    pub fn fade(&self) -> &str {
        &self.fade
    }

    /// Class on edges whose source is the selection.
    pub fn incoming(&self) -> &str {
        &self.incoming
    }

    /// Class on edges whose target is the selection.
    pub fn outgoing(&self) -> &str {
        &self.outgoing
    }

    /// All highlight classes, in the order they are cleared.
    pub fn all(&self) -> [&str; 4] {
        [&self.selected, &self.fade, &self.incoming, &self.outgoing]
    }
}
