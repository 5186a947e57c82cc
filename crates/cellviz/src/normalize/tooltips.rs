use log::trace;

use cellviz_core::Document;

/// Removes every `<title>` element, so hovering a group shows no native
/// tooltip. Returns the number of elements removed.
pub(super) fn strip_tooltips(document: &mut Document) -> usize {
    let titles = document.select(|el| el.is("title"));
    for title in &titles {
        document.detach(*title);
    }
    trace!(count = titles.len(); "Stripped titles");
    titles.len()
}
