/// Schema Module
///
/// Defines the `TEST_TABLE` schema and the catalog operations run against
/// it: creating the table, enumerating tables from `sqlite_master`, and
/// reading a table's column layout back out of `PRAGMA table_info`.

use crate::core::db::connection::ConnectionPool;
use crate::core::{Result, SessionError};
use rusqlite::Row;
use tracing::debug;

/// Name of the table the session creates and writes to.
pub const TEST_TABLE: &str = "TEST_TABLE";

/// DDL for `TEST_TABLE`. Deliberately not `IF NOT EXISTS`: a second run
/// against the same file is expected to fail here.
pub const TEST_TABLE_DDL: &str = "CREATE TABLE TEST_TABLE(
    id INTEGER PRIMARY KEY,
    fname VARCHAR(25),
    lname VARCHAR(25),
    address VARCHAR(100),
    bio TEXT
)";

const LIST_TABLES_SQL: &str = "SELECT name FROM sqlite_master WHERE type='table'";

/// Represents a database column with its metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Declared type as written in the DDL (e.g., "VARCHAR(25)")
    pub type_name: String,
    /// Whether the column is declared NOT NULL
    pub notnull: bool,
    /// Whether this column is part of the primary key
    pub pk: bool,
    /// Default value expression (if any)
    pub dflt_value: Option<String>,
}

impl Column {
    /// Creates a Column from a PRAGMA table_info result row
    fn from_pragma_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Column {
            name: row.get(1)?,
            type_name: row.get(2)?,
            notnull: row.get(3)?,
            pk: row.get::<_, i64>(5)? > 0,
            dflt_value: row.get(4)?,
        })
    }
}

/// Executes DDL text against the pool
///
/// No existence check is made first, so re-creating a table fails with
/// `SessionError::Schema`.
pub fn create_table(pool: &ConnectionPool, ddl: &str) -> Result<()> {
    let conn = pool.get()?;
    conn.execute_batch(ddl).map_err(SessionError::Schema)?;
    debug!("Executed DDL against {:?}", pool.path());
    Ok(())
}

/// Lists table names from the catalog, in the order the engine returns them
///
/// The result is rebuilt on every call. A column that fails to decode
/// yields `SessionError::Scan`; an error raised while stepping the cursor
/// yields `SessionError::Cursor`. Statement and cursor are released when
/// this function returns, on either path.
pub fn list_tables(pool: &ConnectionPool) -> Result<Vec<String>> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(LIST_TABLES_SQL).map_err(SessionError::Query)?;
    let mut rows = stmt.query([]).map_err(SessionError::Query)?;

    let mut tables = Vec::new();
    while let Some(row) = rows.next().map_err(SessionError::Cursor)? {
        let name: String = row.get(0).map_err(SessionError::Scan)?;
        tables.push(name);
    }

    debug!("Found {} tables", tables.len());
    Ok(tables)
}

/// Reads the column layout of `table` in declaration order
///
/// Returns an empty list if the table does not exist.
pub fn table_columns(pool: &ConnectionPool, table: &str) -> Result<Vec<Column>> {
    let conn = pool.get()?;
    let mut stmt = conn
        .prepare("SELECT * FROM pragma_table_info(?1)")
        .map_err(SessionError::Query)?;
    let column_iter = stmt
        .query_map([table], |row| Column::from_pragma_row(row))
        .map_err(SessionError::Query)?;

    let mut columns = Vec::new();
    for column_result in column_iter {
        columns.push(column_result.map_err(SessionError::Scan)?);
    }

    Ok(columns)
}
