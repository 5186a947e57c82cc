//! Diagram lifecycle types.
//!
//! A [`RawDiagram`] is a freshly parsed document. Normalizing it consumes
//! it and yields a [`Diagram`], which owns the normalized document together
//! with its [`Selection`] and reacts to pointer releases.

use log::{debug, info};

use cellviz_core::{Document, Element, NodeId};

use crate::{
    config::{AppConfig, HighlightConfig, MarkerConfig},
    normalize::{self, NormalizeReport},
    selection::{Controller, ElementKind, Selection},
};

/// A parsed but not yet normalized diagram.
#[derive(Debug, Clone)]
pub struct RawDiagram {
    document: Document,
}

impl RawDiagram {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Runs every normalization step and returns the interactive diagram.
    ///
    /// Normalization rewrites geometry in place, so it must run exactly
    /// once; taking `self` by value guarantees that.
    pub fn normalize(self, config: &AppConfig) -> Diagram {
        let mut document = self.document;
        let report = normalize::normalize(&mut document, config.markers());

        Diagram {
            document,
            selection: Selection::None,
            markers: config.markers().clone(),
            highlight: config.highlight().clone(),
            report,
        }
    }
}

/// A normalized diagram and its current selection.
///
/// # Example
///
/// ```
/// use cellviz::{DiagramBuilder, Selection};
///
/// let source = r#"<svg xmlns="http://www.w3.org/2000/svg">
///   <g id="a -> b" class="edge"><path d="M0,0C1,1 2,2 3,3"/></g>
/// </svg>"#;
///
/// let mut diagram = DiagramBuilder::default().build(source).unwrap();
/// assert_eq!(diagram.click_by_id("a -> b"), &Selection::Edge("a -> b".to_string()));
/// assert_eq!(diagram.click_by_id("a -> b"), &Selection::None);
/// ```
#[derive(Debug, Clone)]
pub struct Diagram {
    document: Document,
    selection: Selection,
    markers: MarkerConfig,
    highlight: HighlightConfig,
    report: NormalizeReport,
}

impl Diagram {
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns what normalization changed.
    pub fn report(&self) -> &NormalizeReport {
        &self.report
    }

    /// Looks up the element whose `id` attribute equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.document
            .find_by_id(id)
            .and_then(|node| self.document.element(node))
    }

    /// Returns the kind and group of the interactive element `target`
    /// belongs to, if any.
    pub fn classify(&self, target: NodeId) -> Option<(ElementKind, NodeId)> {
        self.controller().classify(&self.document, target)
    }

    /// Handles a pointer release on `target`.
    ///
    /// Highlight classes are always cleared first, so a release outside any
    /// group (or on a cell without the function marker) leaves the diagram
    /// idle.
    pub fn on_pointer_release(&mut self, target: NodeId) -> &Selection {
        let controller = Controller::new(&self.markers, &self.highlight);
        self.selection = controller.release(&mut self.document, &self.selection, target);
        &self.selection
    }

    /// Handles a pointer release on the element with the given id.
    ///
    /// An unknown id is treated as a release on the diagram background.
    pub fn click_by_id(&mut self, id: &str) -> &Selection {
        let target = match self.document.find_by_id(id) {
            Some(target) => target,
            None => {
                debug!(id; "No element with id, releasing on background");
                self.document.root()
            }
        };
        info!(id; "Replaying pointer release");
        self.on_pointer_release(target)
    }

    /// Clears every highlight and returns to the idle state.
    pub fn clear_selection(&mut self) {
        Controller::new(&self.markers, &self.highlight).clear(&mut self.document);
        self.selection = Selection::None;
    }

    fn controller(&self) -> Controller<'_> {
        Controller::new(&self.markers, &self.highlight)
    }
}
