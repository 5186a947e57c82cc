//! Selection controller.
//!
//! Each pointer release first clears every highlight class, then classifies
//! the release target by its nearest marked group and applies the matching
//! highlight. Because the current [`Selection`] is a single tagged value,
//! selecting any element replaces the previous selection whatever its kind,
//! and a toggle only happens when the same element of the same kind is
//! released on twice in a row.

mod controller;
mod highlight;
mod state;

pub(crate) use controller::Controller;
pub use state::{ElementKind, Selection};
