//! CategoryWalker - depth-first walk over subcategory edges

use std::vec::IntoIter;

use tracing::{debug, trace};

use crate::dump::{Edge, EdgeKind, EdgeLookup};
use crate::error::{ConfigError, LookupError, WalkError};

use super::config::WalkConfig;
use super::path::AncestorPath;
use super::result::{DiscoveredCategory, DiscoveredPage, WalkResult};

/// A category whose children are being visited.
struct Frame {
    depth: usize,
    children: IntoIter<Edge>,
}

/// Walks the category graph below a root, parent before child.
///
/// The graph may contain cycles. Termination comes from the depth limit and,
/// unless loops are allowed, from refusing to expand a category that is
/// already on the ancestor path.
///
/// The walk keeps its own stack of frames instead of recursing, so the depth
/// limit is bounded by memory rather than by the thread's stack.
pub struct CategoryWalker<L> {
    config: WalkConfig,
    lookup: L,
}

impl<L: EdgeLookup> CategoryWalker<L> {
    /// Build a walker. The configuration is validated here, before any lookup.
    pub fn new(config: WalkConfig, lookup: L) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, lookup })
    }

    /// Walk everything below `root` and return the discovered categories.
    ///
    /// Any lookup failure aborts the whole walk.
    pub fn walk(&self, root: &str) -> Result<WalkResult, WalkError> {
        if root.trim().is_empty() {
            return Err(ConfigError::MissingRoot.into());
        }

        let mut result = WalkResult::new(root);
        self.walk_from(root, &mut result)?;
        debug!(
            "walk of '{}' found {} categories, {} pages",
            root,
            result.categories.len(),
            result.pages.len()
        );
        Ok(result)
    }

    fn walk_from(&self, root: &str, result: &mut WalkResult) -> Result<(), LookupError> {
        let mut path = AncestorPath::new();
        let mut stack = vec![self.expand(root, 1, result)?];
        path.push(root);

        while let Some(frame) = stack.last_mut() {
            let Some(child) = frame.children.next() else {
                stack.pop();
                path.pop();
                continue;
            };
            let depth = frame.depth;

            if self.config.unique && result.has_category(&child.name) {
                continue;
            }
            if self.config.is_excluded(&child.name) {
                continue;
            }

            debug!("[{}] {}", depth, path.trace(&child.name));
            result.push_category(DiscoveredCategory {
                id: child.id,
                name: child.name.clone(),
                depth,
                parent: path.current().to_string(),
            });

            if !self.should_descend(&child.name, depth, &path) {
                continue;
            }

            stack.push(self.expand(&child.name, depth + 1, result)?);
            path.push(&child.name);
        }

        Ok(())
    }

    /// Fetch the subcategories of `category` (and its pages, when asked for).
    fn expand(
        &self,
        category: &str,
        depth: usize,
        result: &mut WalkResult,
    ) -> Result<Frame, LookupError> {
        let children = self.lookup.children(category, EdgeKind::Subcat)?;
        trace!("{} has {} subcategories", category, children.len());

        if self.config.include_pages {
            self.collect_pages(category, depth, result)?;
        }

        Ok(Frame {
            depth,
            children: children.into_iter(),
        })
    }

    /// Pages sit beside subcategories and are never expanded.
    fn collect_pages(
        &self,
        category: &str,
        depth: usize,
        result: &mut WalkResult,
    ) -> Result<(), LookupError> {
        for page in self.lookup.children(category, EdgeKind::Page)? {
            if self.config.unique && result.has_page(&page.name) {
                continue;
            }
            result.push_page(DiscoveredPage {
                id: page.id,
                title: page.name,
                category: category.to_string(),
                depth,
            });
        }
        Ok(())
    }

    /// The loop guard looks at the path above the current node only, and it
    /// stops expansion, not emission.
    fn should_descend(&self, child: &str, depth: usize, path: &AncestorPath) -> bool {
        if depth >= self.config.depth_limit {
            return false;
        }
        if !self.config.allow_loop && path.has_ancestor(child) {
            return false;
        }
        true
    }
}

/// Validate `config` and walk below `root` in one call.
pub fn walk_categories<L: EdgeLookup>(
    lookup: L,
    root: &str,
    config: WalkConfig,
) -> Result<WalkResult, WalkError> {
    CategoryWalker::new(config, lookup)?.walk(root)
}
