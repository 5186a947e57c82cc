//! One-shot structural rewrite of generator output.
//!
//! The generator's SVG is close to what the selection controller needs but
//! not quite: some edge curves have exaggerated control handles, strokes are
//! too thin to click, metadata is smuggled through fake anchor URLs, edge
//! endpoints are only encoded in ids, and every group carries a hover
//! tooltip. [`normalize`] fixes all of that in five ordered steps:
//!
//! 1. [`curves`] - rectify the curves of marked edges
//! 2. [`hit_area`] - duplicate every edge stroke as a solid hit area
//! 3. [`links`] - unwrap sentinel anchors into classes on their group
//! 4. [`endpoints`] - copy edge endpoints into `edge-from` / `edge-to`
//! 5. [`tooltips`] - drop `<title>` elements
//!
//! Step 1 must run before step 2 so hit areas follow the rectified curve.
//! The steps rewrite geometry in place, so normalization is not idempotent;
//! [`RawDiagram::normalize`](crate::RawDiagram::normalize) consumes the raw
//! diagram to make a second pass impossible.
//!
//! Every step iterates a snapshot of its matching elements and handles each
//! element on its own: an element that breaks the input conventions is
//! logged and skipped without affecting the others.

mod curves;
mod endpoints;
mod hit_area;
mod links;
mod tooltips;

pub use endpoints::{EDGE_FROM, EDGE_TO};

use log::{debug, info};

use cellviz_core::Document;

use crate::config::MarkerConfig;

/// Number of elements touched by each normalization step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Edge paths whose curve was rewritten.
    pub rectified_curves: usize,
    /// Hit-area paths added.
    pub hit_areas: usize,
    /// Sentinel anchors removed.
    pub unwrapped_links: usize,
    /// Edge groups that received endpoint attributes.
    pub endpoints: usize,
    /// `<title>` elements removed.
    pub removed_tooltips: usize,
}

/// Runs all normalization steps over `document`.
pub(crate) fn normalize(document: &mut Document, markers: &MarkerConfig) -> NormalizeReport {
    info!("Normalizing diagram");

    let rectified_curves = curves::rectify_curves(document, markers);
    debug!(rectified_curves; "Curves rectified");

    let hit_areas = hit_area::duplicate_hit_areas(document, markers);
    debug!(hit_areas; "Hit areas added");

    let unwrapped_links = links::unwrap_sentinel_links(document, markers);
    debug!(unwrapped_links; "Sentinel links unwrapped");

    let endpoints = endpoints::materialize_endpoints(document, markers);
    debug!(endpoints; "Edge endpoints materialized");

    let removed_tooltips = tooltips::strip_tooltips(document);
    debug!(removed_tooltips; "Tooltips removed");

    let report = NormalizeReport {
        rectified_curves,
        hit_areas,
        unwrapped_links,
        endpoints,
        removed_tooltips,
    };
    info!(report:?; "Diagram normalized");

    report
}
