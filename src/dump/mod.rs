//! Category edge lookup over a wiki database dump
//!
//! The walker only needs one capability from storage: "give me the direct
//! children of this category". That capability is the `EdgeLookup` trait.
//! `SqliteDump` implements it on top of the `page` and `categorylinks`
//! tables of a MediaWiki dump converted to SQLite.

mod lookup;
pub mod schema;
mod sqlite;

pub use lookup::{Edge, EdgeKind, EdgeLookup};
pub use sqlite::SqliteDump;
