//! Class bookkeeping for highlights.

use cellviz_core::{Document, NodeId};

use crate::{
    config::{HighlightConfig, MarkerConfig},
    normalize::{EDGE_FROM, EDGE_TO},
};

/// How an edge endpoint is compared with the selected id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum EndpointMatch {
    /// The endpoint is the selected cell.
    Exact,
    /// The endpoint is a cell of the selected node.
    Prefix,
}

impl EndpointMatch {
    fn matches(self, endpoint: Option<&str>, id: &str) -> bool {
        let Some(endpoint) = endpoint else {
            return false;
        };
        match self {
            Self::Exact => endpoint == id,
            Self::Prefix => !id.is_empty() && endpoint.starts_with(id),
        }
    }
}

/// Removes every highlight class from every node, edge and cell group.
pub(super) fn clear(document: &mut Document, markers: &MarkerConfig, highlight: &HighlightConfig) {
    let groups = document.select(|el| markers.is_group(el));
    document.remove_classes(&groups, &highlight.all());
}

/// Marks `edge` as selected and fades every other edge.
pub(super) fn select_edge(
    document: &mut Document,
    markers: &MarkerConfig,
    highlight: &HighlightConfig,
    edge: NodeId,
) {
    let others: Vec<_> = document
        .select(|el| el.has_class(markers.edge()))
        .into_iter()
        .filter(|other| *other != edge)
        .collect();
    document.add_class(&others, highlight.fade());
    document.add_class(&[edge], highlight.selected());
}

/// Marks `group` as selected and classifies every edge by whether it
/// starts or ends at `id`.
///
/// Edges starting at `id` become incoming, edges ending there outgoing
/// (a self-loop gets both) and all others fade.
pub(super) fn select_endpoints(
    document: &mut Document,
    markers: &MarkerConfig,
    highlight: &HighlightConfig,
    group: NodeId,
    id: &str,
    matching: EndpointMatch,
) {
    let mut incoming = Vec::new();
    let mut outgoing = Vec::new();
    let mut faded = Vec::new();

    for edge in document.select(|el| el.has_class(markers.edge())) {
        let Some(element) = document.element(edge) else {
            continue;
        };
        let from = matching.matches(element.attribute(EDGE_FROM), id);
        let to = matching.matches(element.attribute(EDGE_TO), id);

        if from {
            incoming.push(edge);
        }
        if to {
            outgoing.push(edge);
        }
        if !from && !to {
            faded.push(edge);
        }
    }

    document.add_class(&incoming, highlight.incoming());
    document.add_class(&outgoing, highlight.outgoing());
    document.add_class(&faded, highlight.fade());
    document.add_class(&[group], highlight.selected());
}

#[cfg(test)]
mod tests {
    use cellviz_core::Element;

    use super::*;

    #[test]
    fn test_endpoint_match() {
        assert!(EndpointMatch::Exact.matches(Some("1:1"), "1:1"));
        assert!(!EndpointMatch::Exact.matches(Some("1:10"), "1:1"));
        assert!(EndpointMatch::Prefix.matches(Some("1:10"), "1"));
        assert!(!EndpointMatch::Prefix.matches(Some("2:1"), "1"));
        assert!(!EndpointMatch::Prefix.matches(Some("2:1"), ""));
        assert!(!EndpointMatch::Exact.matches(None, "1:1"));
    }

    #[test]
    fn test_clear_only_touches_groups() {
        let mut doc = Document::new(Element::new("svg"));
        let edge = doc.append_element(
            doc.root(),
            Element::new("g").with_class("edge").with_class("fade"),
        );
        let cell = doc.append_element(
            doc.root(),
            Element::new("g")
                .with_class("cell")
                .with_class("fn")
                .with_class("selected"),
        );
        let other = doc.append_element(doc.root(), Element::new("text").with_class("fade"));

        clear(&mut doc, &MarkerConfig::default(), &HighlightConfig::default());

        assert_eq!(doc.element(edge).unwrap().classes().to_string(), "edge");
        assert_eq!(doc.element(cell).unwrap().classes().to_string(), "cell fn");
        assert!(doc.element(other).unwrap().has_class("fade"));
    }

    #[test]
    fn test_self_loop_is_incoming_and_outgoing() {
        let mut doc = Document::new(Element::new("svg"));
        let cell = doc.append_element(doc.root(), Element::new("g").with_class("cell"));
        let edge = doc.append_element(
            doc.root(),
            Element::new("g")
                .with_class("edge")
                .with_attribute(EDGE_FROM, "1:1")
                .with_attribute(EDGE_TO, "1:1"),
        );

        select_endpoints(
            &mut doc,
            &MarkerConfig::default(),
            &HighlightConfig::default(),
            cell,
            "1:1",
            EndpointMatch::Exact,
        );

        let element = doc.element(edge).unwrap();
        assert!(element.has_class("incoming"));
        assert!(element.has_class("outgoing"));
        assert!(!element.has_class("fade"));
        assert!(doc.element(cell).unwrap().has_class("selected"));
    }
}
