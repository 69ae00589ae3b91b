//! SQLite-backed edge lookup

use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Row, params};
use tracing::debug;

use crate::error::{LookupError, LookupResult};

use super::lookup::{Edge, EdgeKind, EdgeLookup};
use super::schema::SELECT_CHILDREN;

/// A wiki dump stored in a SQLite file.
///
/// Holds a single read-only connection for the lifetime of the walk.
pub struct SqliteDump {
    conn: Connection,
}

impl SqliteDump {
    /// Open an existing dump read-only. A missing file is an error.
    pub fn open(path: &Path) -> LookupResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| LookupError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("opened dump {}", path.display());
        Ok(Self { conn })
    }

    /// Wrap an already open connection (in-memory databases, fixtures).
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    fn query_children(&self, parent: &str, kind: EdgeKind) -> rusqlite::Result<Vec<Edge>> {
        let mut stmt = self.conn.prepare_cached(SELECT_CHILDREN)?;
        let rows = stmt.query_map(params![kind.as_str(), parent], |row| {
            Ok(Edge {
                id: row.get(0)?,
                name: title_from_row(row)?,
            })
        })?;
        rows.collect()
    }
}

impl EdgeLookup for SqliteDump {
    fn children(&self, parent: &str, kind: EdgeKind) -> LookupResult<Vec<Edge>> {
        self.query_children(parent, kind)
            .map_err(|source| LookupError::Query {
                parent: parent.to_string(),
                kind,
                source,
            })
    }
}

/// `page_title` is `varbinary` in MediaWiki, so dumps may hold TEXT or BLOB.
fn title_from_row(row: &Row<'_>) -> rusqlite::Result<String> {
    match row.get_ref(1)? {
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
        other => Err(rusqlite::Error::InvalidColumnType(
            1,
            "page_title".to_string(),
            other.data_type(),
        )),
    }
}
