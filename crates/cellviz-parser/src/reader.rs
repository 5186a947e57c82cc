//! Conversion from SVG text to a [`Document`].
//!
//! XML is read with `roxmltree`. Generator output routinely carries a
//! DOCTYPE, so DTDs are accepted; the DOCTYPE itself, processing
//! instructions and indentation-only text are not kept. Namespace
//! declarations are re-emitted as `xmlns` attributes on the element that
//! introduces them, and namespaced names keep their prefix (`xlink:href`).

use log::trace;
use roxmltree::{Node, NodeType, ParsingOptions};

use cellviz_core::{Document, Element, NodeId};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    span::Span,
};

const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Reads `source` into a document rooted at its `<svg>` element.
pub(crate) fn read_document(source: &str) -> Result<Document> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let xml = roxmltree::Document::parse_with_options(source, options)
        .map_err(|err| xml_error(source, &err))?;

    let root = xml.root_element();
    let root_name = root.tag_name().name();
    if root_name != "svg" {
        return Err(
            Diagnostic::error(format!("root element is `{root_name}`, expected `svg`"))
                .with_code(ErrorCode::E200)
                .with_label(tag_span(source, root), "document root")
                .with_help("pass the SVG produced by the diagram generator"),
        );
    }

    let mut document = Document::new(convert_element(root));
    let root_id = document.root();
    copy_children(root, &mut document, root_id);

    Ok(document)
}

fn copy_children(source: Node<'_, '_>, document: &mut Document, parent: NodeId) {
    for child in source.children() {
        match child.node_type() {
            NodeType::Element => {
                let id = document.append_element(parent, convert_element(child));
                trace!(node = id.index(), name = child.tag_name().name(); "Read element");
                copy_children(child, document, id);
            }
            NodeType::Text => {
                let text = child.text().unwrap_or_default();
                if !is_layout_whitespace(source.tag_name().name(), text) {
                    document.append_text(parent, text);
                }
            }
            NodeType::Comment => {
                document.append_comment(parent, child.text().unwrap_or_default());
            }
            NodeType::Root | NodeType::PI => {}
        }
    }
}

fn convert_element(node: Node<'_, '_>) -> Element {
    let tag = node.tag_name();
    let mut element = Element::new(qualified_name(node, tag.namespace(), tag.name()));

    for (prefix, uri) in declared_namespaces(node) {
        match prefix {
            Some(prefix) => element.set_attribute(&format!("xmlns:{prefix}"), uri),
            None => element.set_attribute("xmlns", uri),
        }
    }

    for attribute in node.attributes() {
        let name = qualified_name(node, attribute.namespace(), attribute.name());
        element.set_attribute(&name, attribute.value());
    }

    element
}

/// Namespaces in scope at `node` that its parent element does not have.
fn declared_namespaces(node: Node<'_, '_>) -> Vec<(Option<String>, String)> {
    let parent = node.parent_element();
    node.namespaces()
        .filter(|ns| ns.uri() != XML_NS)
        .filter(|ns| {
            !parent.is_some_and(|parent| {
                parent
                    .namespaces()
                    .any(|inherited| inherited.name() == ns.name() && inherited.uri() == ns.uri())
            })
        })
        .map(|ns| (ns.name().map(str::to_string), ns.uri().to_string()))
        .collect()
}

fn qualified_name(node: Node<'_, '_>, namespace: Option<&str>, local: &str) -> String {
    match namespace {
        Some(XML_NS) => format!("xml:{local}"),
        Some(uri) => match node.lookup_prefix(uri) {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
            _ => local.to_string(),
        },
        None => local.to_string(),
    }
}

/// Whitespace-only text between tags is indentation. Inside `text` and
/// `tspan` a run without a line break is rendered, so it is kept.
fn is_layout_whitespace(parent: &str, text: &str) -> bool {
    if !text.chars().all(|c| c.is_ascii_whitespace()) {
        return false;
    }
    !matches!(parent, "text" | "tspan") || text.contains('\n')
}

fn xml_error(source: &str, err: &roxmltree::Error) -> Diagnostic {
    if ends_early(source, err) {
        return Diagnostic::error(err.to_string())
            .with_code(ErrorCode::E101)
            .with_label(Span::point(source.len()), "document ends here")
            .with_help("the file may be truncated");
    }

    let pos = err.pos();
    let offset = offset_of(source, pos.row, pos.col);
    Diagnostic::error(err.to_string())
        .with_code(ErrorCode::E100)
        .with_label(Span::new(offset..(offset + 1).min(source.len())), "here")
        .with_help("the input is not well-formed XML")
}

/// Returns `true` if the input stopped before the markup was complete.
///
/// roxmltree reports an unclosed root and a stream ending inside a token
/// without a useful position, so those are matched by variant.
fn ends_early(source: &str, err: &roxmltree::Error) -> bool {
    match err {
        roxmltree::Error::UnclosedRootNode | roxmltree::Error::UnexpectedEndOfStream => true,
        other => {
            let pos = other.pos();
            offset_of(source, pos.row, pos.col) >= source.trim_end().len()
        }
    }
}

/// Converts a 1-based row/column (in characters) into a byte offset.
fn offset_of(source: &str, row: u32, col: u32) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(row.saturating_sub(1) as usize)
        .map(str::len)
        .sum();
    let line = source[line_start..].split('\n').next().unwrap_or_default();

    line.char_indices()
        .nth(col.saturating_sub(1) as usize)
        .map_or(line_start + line.len(), |(idx, _)| line_start + idx)
}

/// Span of `<name` for an element.
fn tag_span(source: &str, node: Node<'_, '_>) -> Span {
    let start = node.range().start;
    let end = (start + 1 + node.tag_name().name().len()).min(source.len());
    Span::new(start..end)
}
