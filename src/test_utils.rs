//! Test utilities for building category graphs.
//!
//! This module is only compiled for tests and benchmarks.

use std::cell::Cell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};
use tempfile::TempDir;

use crate::dump::schema::{create_indexes, create_tables};
use crate::dump::{Edge, EdgeKind, EdgeLookup};
use crate::error::{LookupError, LookupResult};

/// In-memory edge lookup that counts how often it is queried.
#[derive(Default)]
pub struct MemoryLookup {
    edges: HashMap<(String, EdgeKind), Vec<Edge>>,
    ids: HashMap<String, i64>,
    fail_on: Option<String>,
    calls: Cell<usize>,
}

impl MemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `parent -> child` subcategory edge.
    pub fn subcat(self, parent: &str, child: &str) -> Self {
        self.edge(parent, child, EdgeKind::Subcat)
    }

    /// Add a page contained in `category`.
    pub fn page(self, category: &str, title: &str) -> Self {
        self.edge(category, title, EdgeKind::Page)
    }

    /// Make every lookup of `parent` fail.
    pub fn fail_on(mut self, parent: &str) -> Self {
        self.fail_on = Some(parent.to_string());
        self
    }

    /// Number of lookups made so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn edge(mut self, parent: &str, child: &str, kind: EdgeKind) -> Self {
        let next_id = self.ids.len() as i64 + 1;
        let id = *self.ids.entry(child.to_string()).or_insert(next_id);
        self.edges
            .entry((parent.to_string(), kind))
            .or_default()
            .push(Edge::new(id, child));
        self
    }
}

impl EdgeLookup for MemoryLookup {
    fn children(&self, parent: &str, kind: EdgeKind) -> LookupResult<Vec<Edge>> {
        self.calls.set(self.calls.get() + 1);
        if self.fail_on.as_deref() == Some(parent) {
            return Err(LookupError::Backend {
                parent: parent.to_string(),
                reason: "injected failure".to_string(),
            });
        }
        Ok(self
            .edges
            .get(&(parent.to_string(), kind))
            .cloned()
            .unwrap_or_default())
    }
}

/// A temporary SQLite dump with the `page` and `categorylinks` tables.
///
/// The file is removed when dropped.
pub struct TestDump {
    dir: TempDir,
    conn: Connection,
}

impl TestDump {
    pub const FILE_NAME: &'static str = "wikipedia.db";

    /// Create an empty dump with tables and indexes.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let conn = Connection::open(dir.path().join(Self::FILE_NAME))
            .expect("Failed to create dump");
        create_tables(&conn).expect("Failed to create tables");
        create_indexes(&conn).expect("Failed to create indexes");
        Self { dir, conn }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join(Self::FILE_NAME)
    }

    /// Add a `parent -> child` subcategory edge, creating the child page.
    pub fn add_subcat(&self, parent: &str, child: &str) -> i64 {
        self.add_edge(parent, child, EdgeKind::Subcat)
    }

    /// Add a page contained in `category`.
    pub fn add_page(&self, category: &str, title: &str) -> i64 {
        self.add_edge(category, title, EdgeKind::Page)
    }

    fn add_edge(&self, parent: &str, child: &str, kind: EdgeKind) -> i64 {
        let id = self.page_id(child);
        self.conn
            .execute(
                "INSERT INTO categorylinks (cl_from, cl_to, cl_type) VALUES (?1, ?2, ?3)",
                params![id, parent, kind.as_str()],
            )
            .expect("Failed to insert categorylink");
        id
    }

    /// Id of the page titled `title`, inserting it if needed.
    fn page_id(&self, title: &str) -> i64 {
        let existing: Option<i64> = self
            .conn
            .query_row(
                "SELECT page_id FROM page WHERE page_title = ?1",
                params![title],
                |row| row.get(0),
            )
            .ok();
        if let Some(id) = existing {
            return id;
        }
        self.conn
            .execute("INSERT INTO page (page_title) VALUES (?1)", params![title])
            .expect("Failed to insert page");
        self.conn.last_insert_rowid()
    }
}

impl Default for TestDump {
    fn default() -> Self {
        Self::new()
    }
}
