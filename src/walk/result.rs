//! Walk results, serializable for JSON output

use std::collections::HashSet;

use serde::Serialize;

/// A category discovered during a walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredCategory {
    pub id: i64,
    pub name: String,
    /// Expansion level it was found at (direct children of the root are 1)
    pub depth: usize,
    /// Category it was found under
    pub parent: String,
}

/// A page contained in an expanded category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredPage {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub depth: usize,
}

/// Ordered accumulator for one walk.
///
/// Every branch of the traversal appends into the same value. A fresh one is
/// created per top-level walk and never reused.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WalkResult {
    pub root: String,
    pub categories: Vec<DiscoveredCategory>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<DiscoveredPage>,
    #[serde(skip)]
    seen_categories: HashSet<String>,
    #[serde(skip)]
    seen_pages: HashSet<String>,
}

impl WalkResult {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Whether a category with this name has been emitted in this run
    pub fn has_category(&self, name: &str) -> bool {
        self.seen_categories.contains(name)
    }

    pub fn has_page(&self, title: &str) -> bool {
        self.seen_pages.contains(title)
    }

    pub fn push_category(&mut self, category: DiscoveredCategory) {
        self.seen_categories.insert(category.name.clone());
        self.categories.push(category);
    }

    pub fn push_page(&mut self, page: DiscoveredPage) {
        self.seen_pages.insert(page.title.clone());
        self.pages.push(page);
    }

    /// Category names in discovery order
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn page_titles(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.title.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
