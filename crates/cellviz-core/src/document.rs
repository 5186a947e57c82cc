//! In-memory SVG document tree.
//!
//! This module provides the owned tree that every diagram operation works
//! on. Nodes live in an arena and refer to each other through [`NodeId`]
//! handles.
//!
//! # Overview
//!
//! - [`Document`]: the arena, rooted at the `<svg>` element
//! - [`NodeId`]: handle to a node inside one document
//! - [`NodeKind`]: element, text or comment payload
//! - [`Element`]: tag name, ordered attributes and a [`ClassSet`]
//!
//! Removing a node only detaches it; the arena slot stays allocated so
//! handles held elsewhere never dangle. Detached subtrees are unreachable
//! from the root and therefore invisible to queries and export.
//!
//! # Example
//!
//! ```
//! use cellviz_core::{Document, Element};
//!
//! let mut doc = Document::new(Element::new("svg"));
//! let group = doc.append_element(
//!     doc.root(),
//!     Element::new("g").with_attribute("id", "a -> b").with_class("edge"),
//! );
//! doc.append_element(group, Element::new("path").with_attribute("d", "M0,0"));
//!
//! let edges = doc.select(|el| el.has_class("edge"));
//! assert_eq!(edges, vec![group]);
//! assert_eq!(doc.find_by_id("a -> b"), Some(group));
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::{ancestry::Ancestry, class_set::ClassSet};

// =============================================================================
// Node payloads
// =============================================================================

/// Handle to a node inside a [`Document`].
///
/// Handles are only meaningful for the document that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the arena index of this node.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The payload stored in a document node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Element(Element),
    Text(String),
    Comment(String),
}

/// An SVG element: qualified tag name, attributes and classes.
///
/// The `class` attribute is never stored with the other attributes; it is
/// kept as a [`ClassSet`] so classes can be toggled without re-parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    classes: ClassSet,
}

impl Element {
    /// Creates an element with the given qualified tag name (e.g. `g`,
    /// `path`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            classes: ClassSet::new(),
        }
    }

    /// Builder form of [`Element::set_attribute`].
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of adding one class.
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class);
        self
    }

    /// Returns the qualified tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the tag name equals `name`.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Returns the value of attribute `name`, if set.
    ///
    /// Classes live in [`Element::classes`], so `class` always yields `None`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterates over the attributes in document order, excluding `class`.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Sets attribute `name` to `value`.
    ///
    /// Setting `class` replaces the whole class set with the parsed value.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        if name == "class" {
            self.classes = ClassSet::parse(&value.into());
            return;
        }
        self.attributes.insert(name.to_string(), value.into());
    }

    /// Removes attribute `name`, returning its previous value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(name)
    }

    /// Returns the `id` attribute.
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Returns the class set.
    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }

    /// Returns the class set for modification.
    pub fn classes_mut(&mut self) -> &mut ClassSet {
        &mut self.classes
    }

    /// Returns `true` if the element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Copies the element without any children.
    pub fn shallow_clone(&self) -> Self {
        self.clone()
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

// =============================================================================
// Document
// =============================================================================

/// An SVG document held as an arena of nodes.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Document {
    /// Creates a document whose root is `root`.
    pub fn new(root: Element) -> Self {
        Self {
            nodes: vec![NodeData {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Element(root),
            }],
            root: NodeId(0),
        }
    }

    /// Returns the root element handle.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the payload of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this document.
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    /// Returns the element at `id`, or `None` for text and comment nodes.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes.get(id.0)?.kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the element at `id` for modification.
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes.get_mut(id.0)?.kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the parent of `id`.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent
    }

    /// Returns the children of `id` in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    /// Returns `true` if `id` is reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == self.root {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Appends an element as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeId, element: Element) -> NodeId {
        self.append(parent, NodeKind::Element(element))
    }

    /// Appends a text node as the last child of `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.append(parent, NodeKind::Text(text.into()))
    }

    /// Appends a comment as the last child of `parent`.
    pub fn append_comment(&mut self, parent: NodeId, comment: impl Into<String>) -> NodeId {
        self.append(parent, NodeKind::Comment(comment.into()))
    }

    fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            parent: Some(parent),
            children: Vec::new(),
            kind,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Creates a detached copy of the element at `id` without its children.
    ///
    /// Returns `None` if `id` is not an element.
    pub fn clone_element(&mut self, id: NodeId) -> Option<NodeId> {
        let element = self.element(id)?.shallow_clone();
        let clone = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            parent: None,
            children: Vec::new(),
            kind: NodeKind::Element(element),
        });
        Some(clone)
    }

    /// Moves `child` to the end of `parent`'s children, detaching it from its
    /// current parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Detaches `id` (and its subtree) from its parent.
    ///
    /// The root cannot be detached.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|child| *child != id);
        }
    }

    /// Replaces `id` with its own children, in place.
    ///
    /// The children keep their order and take the position `id` had among
    /// its siblings; `id` ends up detached and childless. Does nothing for
    /// the root or for detached nodes.
    pub fn unwrap(&mut self, id: NodeId) {
        let Some(parent) = self.nodes[id.0].parent else {
            return;
        };
        let children = std::mem::take(&mut self.nodes[id.0].children);
        for child in &children {
            self.nodes[child.0].parent = Some(parent);
        }

        let siblings = &mut self.nodes[parent.0].children;
        if let Some(position) = siblings.iter().position(|sibling| *sibling == id) {
            siblings.splice(position..=position, children);
        }
        self.nodes[id.0].parent = None;
    }

    /// Iterates over the descendants of `id` in document (pre-)order,
    /// excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        Descendants {
            document: self,
            stack,
        }
    }

    /// Collects every element below the root that satisfies `predicate`,
    /// in document order.
    ///
    /// The result is a snapshot: later mutations do not change it.
    pub fn select<F>(&self, mut predicate: F) -> Vec<NodeId>
    where
        F: FnMut(&Element) -> bool,
    {
        self.descendants(self.root)
            .filter(|id| self.element(*id).is_some_and(&mut predicate))
            .collect()
    }

    /// Collects every element below `scope` that satisfies `predicate`.
    pub fn select_within<F>(&self, scope: NodeId, mut predicate: F) -> Vec<NodeId>
    where
        F: FnMut(&Element) -> bool,
    {
        self.descendants(scope)
            .filter(|id| self.element(*id).is_some_and(&mut predicate))
            .collect()
    }

    /// Finds the first element (root included) whose `id` attribute equals
    /// `id`.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|node| self.element(*node).and_then(Element::id) == Some(id))
    }

    /// Adds `class` to every element in `nodes`.
    pub fn add_class(&mut self, nodes: &[NodeId], class: &str) {
        for node in nodes {
            if let Some(element) = self.element_mut(*node) {
                element.classes_mut().insert(class);
            }
        }
    }

    /// Removes every class in `classes` from every element in `nodes`.
    pub fn remove_classes(&mut self, nodes: &[NodeId], classes: &[&str]) {
        for node in nodes {
            if let Some(element) = self.element_mut(*node) {
                for class in classes {
                    element.classes_mut().remove(class);
                }
            }
        }
    }
}

impl Ancestry for Document {
    type Handle = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        Document::parent(self, node)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|el| el.has_class(class))
    }

    fn is_boundary(&self, node: NodeId) -> bool {
        node == self.root
    }
}

/// Pre-order iterator returned by [`Document::descendants`].
pub struct Descendants<'a> {
    document: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let next = self.stack.pop()?;
        self.stack
            .extend(self.document.children(next).iter().rev().copied());
        Some(next)
    }
}
