//! Category tree walking logic
//!
//! `CategoryWalker` does a depth-first, parent-before-child walk over the
//! `subcat` edges below a root category. Children are filtered in this order:
//!
//! - already discovered in this run (only with `unique`): skipped
//! - in the exclusion set: skipped
//! - otherwise emitted, then expanded unless the depth limit is reached or
//!   the child is already on the ancestor path (unless loops are allowed)
//!
//! Skipped children contribute no descendants. The loop guard only stops
//! expansion; the looping category is still emitted.

mod config;
mod path;
mod result;
mod walker;

pub use config::WalkConfig;
pub use path::AncestorPath;
pub use result::{DiscoveredCategory, DiscoveredPage, WalkResult};
pub use walker::{CategoryWalker, walk_categories};
