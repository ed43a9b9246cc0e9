//! Scope paths for locating violations in nested structures.
//!
//! This module provides [`ScopePath`] and [`PathSegment`] for building the two
//! path renderings every [`ValidationError`](crate::ValidationError) carries:
//!
//! - the **template** path, where collection positions are replaced by a
//!   wildcard (slices) or dropped (maps) so it is stable across instances;
//! - the **exact** path, with the literal index or key that failed.

use std::fmt::{self, Display};

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Template placeholder for a slice position.
pub const WILDCARD: &str = "*";

/// A segment of a scope path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named field or scope (e.g. `customer`, `email`).
    Field(String),
    /// A slice position. Rendered as `*` in template paths.
    Index(usize),
    /// A map key. Omitted from template paths.
    Key(String),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }

    /// Creates a new key segment.
    pub fn key(key: impl Display) -> Self {
        PathSegment::Key(key.to_string())
    }

    fn template(&self) -> Option<String> {
        match self {
            PathSegment::Field(name) => Some(name.clone()),
            PathSegment::Index(_) => Some(WILDCARD.to_string()),
            PathSegment::Key(_) => None,
        }
    }

    fn exact(&self) -> String {
        match self {
            PathSegment::Field(name) => name.clone(),
            PathSegment::Index(idx) => idx.to_string(),
            PathSegment::Key(key) => key.clone(),
        }
    }
}

/// A path to a scope in a nested structure.
///
/// Empty field names are skipped when rendering, so a traversal with an empty
/// field name yields `items.0` rather than `items.0.`.
///
/// # Example
///
/// ```rust
/// use inquest::ScopePath;
///
/// let path = ScopePath::root()
///     .push_field("orders")
///     .push_index(3)
///     .push_field("lines")
///     .push_key("sku-1")
///     .push_field("qty");
///
/// assert_eq!(path.template(), "orders.*.lines.qty");
/// assert_eq!(path.exact(), "orders.3.lines.sku-1.qty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ScopePath {
    segments: Vec<PathSegment>,
}

impl ScopePath {
    /// Creates an empty path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Field(name.into()))
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Returns a new path with a key segment appended.
    pub fn push_key(&self, key: impl Display) -> Self {
        self.push(PathSegment::key(key))
    }

    fn push(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Returns true if this path has no segments.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Renders the template path.
    pub fn template(&self) -> String {
        render(self.segments.iter().filter_map(PathSegment::template))
    }

    /// Renders the exact path.
    pub fn exact(&self) -> String {
        render(self.segments.iter().map(PathSegment::exact))
    }
}

impl Display for ScopePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.exact())
    }
}

fn render(parts: impl Iterator<Item = String>) -> String {
    parts.fold(String::new(), |acc, part| join_path(&acc, &part))
}

/// Joins two dotted paths, skipping empty operands.
///
/// ```rust
/// use inquest::path::join_path;
///
/// assert_eq!(join_path("customer", "email"), "customer.email");
/// assert_eq!(join_path("", "email"), "email");
/// assert_eq!(join_path("customer", ""), "customer");
/// ```
pub fn join_path(prefix: &str, path: &str) -> String {
    match (prefix.is_empty(), path.is_empty()) {
        (true, _) => path.to_string(),
        (_, true) => prefix.to_string(),
        _ => format!("{}{}{}", prefix, SEPARATOR, path),
    }
}

/// Returns the part of a dotted path after the last separator.
///
/// ```rust
/// use inquest::last_path_segment;
///
/// assert_eq!(last_path_segment("address.name"), "name");
/// assert_eq!(last_path_segment("name"), "name");
/// ```
pub fn last_path_segment(path: &str) -> &str {
    path.rsplit(SEPARATOR).next().unwrap_or(path)
}
