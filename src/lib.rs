//! Wikicat - walk the category tree of a Wikipedia SQLite dump

pub mod dump;
pub mod error;
pub mod output;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use dump::{Edge, EdgeKind, EdgeLookup, SqliteDump};
pub use error::{ConfigError, Error, LookupError, WalkError};
pub use output::{ListFormatter, OutputConfig, print_json, print_list};
pub use walk::{
    AncestorPath, CategoryWalker, DiscoveredCategory, DiscoveredPage, WalkConfig, WalkResult,
    walk_categories,
};
