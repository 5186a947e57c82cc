//! Upward traversal over marker classes.
//!
//! Interaction code never needs the full tree; it only asks "which enclosing
//! group carries this marker class?". [`Ancestry`] is the minimal capability
//! set for answering that question, so the walk in [`closest`] works over
//! any tree that can report a parent, a class test and a boundary.

/// Capabilities needed to walk from a node towards the diagram root.
pub trait Ancestry {
    /// Lightweight handle identifying a node in the tree.
    type Handle: Copy;

    /// Returns the parent of `node`, or `None` for detached nodes and the
    /// tree root.
    fn parent(&self, node: Self::Handle) -> Option<Self::Handle>;

    /// Returns `true` if `node` carries `class`.
    fn has_class(&self, node: Self::Handle, class: &str) -> bool;

    /// Returns `true` if `node` is the diagram boundary where a walk stops.
    fn is_boundary(&self, node: Self::Handle) -> bool;
}

/// Finds the nearest node carrying `class`, starting at `start` itself.
///
/// The walk stops at the boundary without testing it, so the diagram root
/// never matches. Returns `None` when no node up to the boundary carries
/// the class, or when `start` is not connected to the boundary at all.
///
/// # Example
///
/// ```
/// use cellviz_core::{Document, Element, ancestry::closest};
///
/// let mut doc = Document::new(Element::new("svg"));
/// let edge = doc.append_element(doc.root(), Element::new("g").with_class("edge"));
/// let path = doc.append_element(edge, Element::new("path"));
///
/// assert_eq!(closest(&doc, path, "edge"), Some(edge));
/// assert_eq!(closest(&doc, path, "node"), None);
/// ```
pub fn closest<T>(tree: &T, start: T::Handle, class: &str) -> Option<T::Handle>
where
    T: Ancestry + ?Sized,
{
    let mut current = Some(start);
    while let Some(node) = current {
        if tree.is_boundary(node) {
            return None;
        }
        if tree.has_class(node, class) {
            return Some(node);
        }
        current = tree.parent(node);
    }
    None
}
