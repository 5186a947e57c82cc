//! Sentinel anchor unwrapping.
//!
//! The generator cannot attach classes to table cells, so it wraps each
//! cell in an anchor whose href encodes them: `remove_me_url.cell.fn` means
//! "classes `cell` and `fn`". The anchor must go (it would make the cell a
//! hyperlink) and its classes must move to the enclosing group.

use log::trace;

use cellviz_core::{Document, Element};

use crate::config::MarkerConfig;

/// Unwraps every anchor whose href starts with the sentinel component.
///
/// For each such anchor the children are spliced into the anchor's place,
/// the id prefix is stripped once from the parent group's id and the
/// remaining href components are added to the parent's classes. Anchors
/// with other hrefs are left untouched. Returns the number of anchors
/// removed.
pub(super) fn unwrap_sentinel_links(document: &mut Document, markers: &MarkerConfig) -> usize {
    let mut unwrapped = 0;
    for anchor in document.select(|el| el.is("a")) {
        let Some(classes) = document
            .element(anchor)
            .and_then(href)
            .and_then(|href| sentinel_classes(href, markers.sentinel()))
        else {
            continue;
        };
        let Some(parent) = document.parent(anchor) else {
            continue;
        };

        document.unwrap(anchor);
        if let Some(group) = document.element_mut(parent) {
            strip_id_prefix(group, markers.id_prefix());
            group.classes_mut().extend(classes.iter().map(String::as_str));
            trace!(group = group.id().unwrap_or_default(), classes:?; "Unwrapped link");
        }
        unwrapped += 1;
    }
    unwrapped
}

/// Reads the anchor target, preferring the plain `href` over `xlink:href`.
fn href(anchor: &Element) -> Option<&str> {
    anchor
        .attribute("href")
        .or_else(|| anchor.attribute("xlink:href"))
}

/// Returns the class components of a sentinel href, or `None` if `href`
/// does not start with `sentinel`.
fn sentinel_classes(href: &str, sentinel: &str) -> Option<Vec<String>> {
    let mut components = href.split('.');
    if components.next()? != sentinel {
        return None;
    }
    Some(
        components
            .filter(|class| !class.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

fn strip_id_prefix(group: &mut Element, prefix: &str) {
    if prefix.is_empty() {
        return;
    }
    let stripped = group
        .id()
        .and_then(|id| id.strip_prefix(prefix))
        .map(str::to_string);
    if let Some(id) = stripped {
        group.set_attribute("id", id);
    }
}
