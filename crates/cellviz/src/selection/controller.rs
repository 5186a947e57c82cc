use log::{debug, trace, warn};

use cellviz_core::{Document, NodeId, ancestry::closest};

use crate::config::{HighlightConfig, MarkerConfig};

use super::{
    highlight::{self, EndpointMatch},
    state::{ElementKind, Selection},
};

/// Applies pointer releases to a document using the configured classes.
pub(crate) struct Controller<'a> {
    markers: &'a MarkerConfig,
    highlight: &'a HighlightConfig,
}

impl<'a> Controller<'a> {
    pub(crate) fn new(markers: &'a MarkerConfig, highlight: &'a HighlightConfig) -> Self {
        Self { markers, highlight }
    }

    /// Finds the group `target` belongs to, trying edges, then cells, then
    /// nodes. The target itself counts as a candidate; the root never does.
    pub(crate) fn classify(
        &self,
        document: &Document,
        target: NodeId,
    ) -> Option<(ElementKind, NodeId)> {
        if !document.is_attached(target) {
            return None;
        }
        ElementKind::PRIORITY.into_iter().find_map(|kind| {
            closest(document, target, kind.marker(self.markers)).map(|group| (kind, group))
        })
    }

    /// Removes every highlight class from the document.
    pub(crate) fn clear(&self, document: &mut Document) {
        highlight::clear(document, self.markers, self.highlight);
    }

    /// Handles a pointer release on `target` and returns the new selection.
    pub(crate) fn release(
        &self,
        document: &mut Document,
        current: &Selection,
        target: NodeId,
    ) -> Selection {
        self.clear(document);

        let Some((kind, group)) = self.classify(document, target) else {
            debug!(node = target.index(); "Release outside any group");
            return Selection::None;
        };

        let Some(element) = document.element(group) else {
            return Selection::None;
        };
        if kind == ElementKind::Cell && !element.has_class(self.markers.function()) {
            debug!(group = group.index(); "Cell is not selectable");
            return Selection::None;
        }
        let id = match element.id() {
            Some(id) => id.to_string(),
            None => {
                warn!(kind:%, group = group.index(); "Selected group has no id");
                String::new()
            }
        };

        if current.is(kind, &id) {
            debug!(kind:%, id; "Selection toggled off");
            return Selection::None;
        }

        match kind {
            ElementKind::Edge => {
                highlight::select_edge(document, self.markers, self.highlight, group);
            }
            ElementKind::Cell => highlight::select_endpoints(
                document,
                self.markers,
                self.highlight,
                group,
                &id,
                EndpointMatch::Exact,
            ),
            ElementKind::Node => highlight::select_endpoints(
                document,
                self.markers,
                self.highlight,
                group,
                &id,
                EndpointMatch::Prefix,
            ),
        }

        let selection = Selection::new(kind, id);
        debug!(selection:%; "Selection changed");
        trace!(previous:% = current; "Previous selection");
        selection
    }
}
