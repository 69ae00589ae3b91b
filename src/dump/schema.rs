//! Table layout and query text for the dump
//!
//! Only the columns the walker reads are described here. Real dumps carry
//! many more columns on both tables; the queries ignore them.

use rusqlite::Connection;

/// Direct children of a category, filtered by `cl_type`.
///
/// `?1` is the edge kind (`subcat` or `page`), `?2` the parent title.
pub const SELECT_CHILDREN: &str = r#"
SELECT
    p.page_id, p.page_title
FROM
    categorylinks AS c
JOIN
    page AS p ON c.cl_from = p.page_id
WHERE
    c.cl_type = ?1 AND c.cl_to = ?2
"#;

const CREATE_PAGE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS page (
    page_id INTEGER PRIMARY KEY,
    page_namespace INTEGER NOT NULL DEFAULT 0,
    page_title TEXT NOT NULL
)
"#;

const CREATE_CATEGORYLINKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS categorylinks (
    cl_from INTEGER NOT NULL,   -- page_id of the child
    cl_to TEXT NOT NULL,        -- title of the parent category
    cl_type TEXT NOT NULL       -- 'subcat', 'page' or 'file'
)
"#;

/// Indexes that make `SELECT_CHILDREN` a lookup instead of a scan
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_categorylinks_to_type ON categorylinks(cl_to, cl_type)",
];

/// Create the minimal `page` / `categorylinks` tables.
pub fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(CREATE_PAGE_TABLE, [])?;
    conn.execute(CREATE_CATEGORYLINKS_TABLE, [])?;
    Ok(())
}

/// Create lookup indexes. Safe to run more than once.
pub fn create_indexes(conn: &Connection) -> rusqlite::Result<()> {
    for sql in CREATE_INDEXES {
        conn.execute(sql, [])?;
    }
    Ok(())
}
