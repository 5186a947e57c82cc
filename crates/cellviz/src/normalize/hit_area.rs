//! Wide, invisible hit areas for edge strokes.

use log::trace;

use cellviz_core::{Document, ancestry::closest};

use crate::config::MarkerConfig;

/// Appends a solid copy of every edge path to the path's own parent.
///
/// The copy keeps the geometry and presentation attributes, gains the
/// hit-path class and loses `stroke-dasharray` so a dashed edge is still
/// clickable along its whole length. Copies are appended after their
/// source and are therefore painted on top of it. Returns the number of
/// copies added.
pub(super) fn duplicate_hit_areas(document: &mut Document, markers: &MarkerConfig) -> usize {
    // Snapshot before mutating: the copies are paths inside edges too
    let paths: Vec<_> = document
        .select(|el| el.is("path"))
        .into_iter()
        .filter(|path| {
            document
                .parent(*path)
                .and_then(|parent| closest(document, parent, markers.edge()))
                .is_some()
        })
        .collect();

    let mut added = 0;
    for path in paths {
        let Some(parent) = document.parent(path) else {
            continue;
        };
        let Some(copy) = document.clone_element(path) else {
            continue;
        };
        if let Some(element) = document.element_mut(copy) {
            element.classes_mut().insert(markers.hit_path());
            element.remove_attribute("stroke-dasharray");
        }
        document.append_child(parent, copy);
        trace!(source = path.index(), copy = copy.index(); "Added hit area");
        added += 1;
    }
    added
}
