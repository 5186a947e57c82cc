//! cellviz Core Types and Definitions
//!
//! This crate provides the foundational types shared by the cellviz parser
//! and the diagram pipeline. It includes:
//!
//! - **Document**: Owned SVG tree addressed through [`NodeId`] handles ([`document`] module)
//! - **Classes**: Ordered, idempotent CSS class sets ([`ClassSet`])
//! - **Ancestry**: Marker-class lookup towards the diagram root ([`ancestry`] module)
//! - **Path**: Edge geometry made of absolute move and cubic commands ([`path`] module)

pub mod ancestry;
pub mod class_set;
pub mod document;
pub mod path;

pub use class_set::ClassSet;
pub use document::{Document, Element, NodeId, NodeKind};
