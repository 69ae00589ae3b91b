//! Edge lookup capability consumed by the walker

use std::fmt;

use serde::Serialize;

use crate::error::LookupResult;

/// Kind of a `categorylinks` edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Child is itself a category
    Subcat,
    /// Child is a content page
    Page,
}

impl EdgeKind {
    /// Value stored in `categorylinks.cl_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Subcat => "subcat",
            EdgeKind::Page => "page",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A direct child returned by a lookup: `(page_id, page_title)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: i64,
    pub name: String,
}

impl Edge {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Source of parent → child edges.
///
/// Implementations return children in a stable order for a fixed database.
/// An unknown parent is not an error: it simply has no children.
pub trait EdgeLookup {
    fn children(&self, parent: &str, kind: EdgeKind) -> LookupResult<Vec<Edge>>;
}

impl<L: EdgeLookup + ?Sized> EdgeLookup for &L {
    fn children(&self, parent: &str, kind: EdgeKind) -> LookupResult<Vec<Edge>> {
        (**self).children(parent, kind)
    }
}
