//! Per-element CSS class sets.
//!
//! A [`ClassSet`] is the parsed form of an element's `class` attribute. It
//! keeps tokens in insertion order so that a document rendered back to SVG
//! lists its classes the way the generator emitted them, followed by any
//! classes added afterwards.
//!
//! # Example
//!
//! ```
//! use cellviz_core::ClassSet;
//!
//! let mut classes = ClassSet::parse("edge modify-me");
//! assert!(classes.contains("edge"));
//!
//! // Adding and removing are idempotent
//! classes.insert("fade");
//! classes.insert("fade");
//! classes.remove("modify-me");
//! classes.remove("modify-me");
//!
//! assert_eq!(classes.to_string(), "edge fade");
//! ```

use std::fmt;

use indexmap::IndexSet;

/// An ordered set of class tokens attached to one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet(IndexSet<String>);

impl ClassSet {
    /// Creates an empty class set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whitespace-separated `class` attribute value.
    ///
    /// Duplicate tokens collapse into one.
    pub fn parse(value: &str) -> Self {
        value.split_whitespace().collect()
    }

    /// Returns `true` if the set contains `class`.
    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    /// Adds `class` to the set.
    ///
    /// Returns `true` if the class was not present before. Empty tokens are
    /// ignored.
    pub fn insert(&mut self, class: &str) -> bool {
        if class.is_empty() || self.0.contains(class) {
            return false;
        }
        self.0.insert(class.to_string())
    }

    /// Removes `class` from the set, keeping the order of the remaining
    /// tokens.
    ///
    /// Returns `true` if the class was present.
    pub fn remove(&mut self, class: &str) -> bool {
        self.0.shift_remove(class)
    }

    /// Returns the number of classes in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set has no classes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the classes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for ClassSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut classes = Self::new();
        for class in iter {
            classes.insert(class);
        }
        classes
    }
}

impl<'a> Extend<&'a str> for ClassSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for class in iter {
            self.insert(class);
        }
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for class in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
            first = false;
        }
        Ok(())
    }
}
