//! Edge endpoint attributes.

use log::warn;

use cellviz_core::Document;

use crate::config::MarkerConfig;

/// Attribute holding the id of the element an edge starts at.
pub const EDGE_FROM: &str = "edge-from";

/// Attribute holding the id of the element an edge points to.
pub const EDGE_TO: &str = "edge-to";

/// Copies the endpoints encoded in every edge id (`from -> to`) into the
/// [`EDGE_FROM`] and [`EDGE_TO`] attributes.
///
/// Only the first two separator-delimited parts are used. Edges without an
/// id or without a separator in it are logged and left without endpoint
/// attributes. Returns the number of edges updated.
pub(super) fn materialize_endpoints(document: &mut Document, markers: &MarkerConfig) -> usize {
    let mut updated = 0;
    for edge in document.select(|el| el.has_class(markers.edge())) {
        let Some(element) = document.element_mut(edge) else {
            continue;
        };
        let Some((from, to)) = element
            .id()
            .and_then(|id| split_endpoints(id, markers.edge_separator()))
        else {
            warn!(
                edge = element.id().unwrap_or_default(),
                separator = markers.edge_separator();
                "Edge id does not name its endpoints"
            );
            continue;
        };

        element.set_attribute(EDGE_FROM, from);
        element.set_attribute(EDGE_TO, to);
        updated += 1;
    }
    updated
}

fn split_endpoints(id: &str, separator: &str) -> Option<(String, String)> {
    if separator.is_empty() {
        return None;
    }
    let mut parts = id.split(separator);
    let from = parts.next()?;
    let to = parts.next()?;
    Some((from.to_string(), to.to_string()))
}
