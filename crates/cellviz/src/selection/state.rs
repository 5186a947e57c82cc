use std::fmt;

use crate::config::MarkerConfig;

/// Kind of interactive group a release target belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Edge,
    Cell,
    Node,
}

impl ElementKind {
    /// Classification order: cells sit inside nodes and edges never overlap
    /// either, so the first kind with a marked ancestor wins.
    pub const PRIORITY: [ElementKind; 3] =
        [ElementKind::Edge, ElementKind::Cell, ElementKind::Node];

    /// Returns the marker class identifying groups of this kind.
    pub fn marker(self, markers: &MarkerConfig) -> &str {
        match self {
            Self::Edge => markers.edge(),
            Self::Cell => markers.cell(),
            Self::Node => markers.node(),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edge => f.write_str("edge"),
            Self::Cell => f.write_str("cell"),
            Self::Node => f.write_str("node"),
        }
    }
}

/// The element currently highlighted, identified by its group id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing is selected.
    #[default]
    None,
    Edge(String),
    Cell(String),
    Node(String),
}

impl Selection {
    pub(crate) fn new(kind: ElementKind, id: impl Into<String>) -> Self {
        let id = id.into();
        match kind {
            ElementKind::Edge => Self::Edge(id),
            ElementKind::Cell => Self::Cell(id),
            ElementKind::Node => Self::Node(id),
        }
    }

    /// Returns the kind of the selected element, or `None` when idle.
    pub fn kind(&self) -> Option<ElementKind> {
        match self {
            Self::None => None,
            Self::Edge(_) => Some(ElementKind::Edge),
            Self::Cell(_) => Some(ElementKind::Cell),
            Self::Node(_) => Some(ElementKind::Node),
        }
    }

    /// Returns the id of the selected element, or `None` when idle.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Edge(id) | Self::Cell(id) | Self::Node(id) => Some(id),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this selection is exactly `kind` with `id`.
    pub(crate) fn is(&self, kind: ElementKind, id: &str) -> bool {
        self.kind() == Some(kind) && self.id() == Some(id)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind(), self.id()) {
            (Some(kind), Some(id)) => write!(f, "{kind} `{id}`"),
            _ => f.write_str("none"),
        }
    }
}
