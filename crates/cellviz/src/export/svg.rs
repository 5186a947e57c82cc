//! SVG backend built on the [`svg`](::svg) crate's node types.

use std::io;

use ::svg::{
    Node,
    node::{Comment, Text, element::Element as SvgElement},
};
use log::{debug, error};

use cellviz_core::{Document, Element, NodeId, NodeKind};

use crate::export;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

/// SVG exporter.
///
/// Converts a [`Document`] into the `svg` crate's node tree and writes it
/// after an XML declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Svg;

impl Svg {
    /// Builds the `svg` crate element tree for everything reachable from
    /// the document root.
    pub fn render(&self, document: &Document) -> SvgElement {
        let root = document.root();
        document
            .element(root)
            .map(|element| render_element(document, root, element))
            .unwrap_or_else(|| SvgElement::new("svg"))
    }
}

impl export::Exporter for Svg {
    fn export_document(
        &self,
        document: &Document,
        writer: &mut dyn io::Write,
    ) -> Result<(), export::Error> {
        let element = self.render(document);
        debug!("SVG document rendered");

        if let Err(err) = writeln!(writer, "{XML_DECLARATION}\n{element}") {
            error!(err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }
        Ok(())
    }
}

fn render_element(document: &Document, id: NodeId, element: &Element) -> SvgElement {
    let mut rendered = open_element(element);
    for child in document.children(id) {
        match document.kind(*child) {
            NodeKind::Element(child_element) => {
                rendered.append(render_element(document, *child, child_element));
            }
            NodeKind::Text(text) => rendered.append(Text::new(text.as_str())),
            NodeKind::Comment(comment) => {
                let comment = comment.trim();
                if !comment.is_empty() {
                    rendered.append(Comment::new(comment));
                }
            }
        }
    }
    rendered
}

/// Copies the element's name, attributes and class list.
///
/// Values are passed unescaped: the `svg` crate escapes `&`, `<`, `>` and
/// quotes when writing, and emits attributes sorted by name.
fn open_element(element: &Element) -> SvgElement {
    let mut rendered = SvgElement::new(element.name());
    for (name, value) in element.attributes() {
        rendered.assign(name, value);
    }
    if !element.classes().is_empty() {
        rendered.assign("class", element.classes().to_string());
    }
    rendered
}
