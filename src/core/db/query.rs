/// Query Module
///
/// Read-side helpers used to check what the session wrote.

use crate::core::db::connection::ConnectionPool;
use crate::core::db::transaction::Person;
use crate::core::{Result, SessionError};
use rusqlite::OptionalExtension;

/// Quotes an identifier for interpolation into SQL text.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Counts the rows currently in `table`
pub fn count_rows(pool: &ConnectionPool, table: &str) -> Result<i64> {
    let conn = pool.get()?;
    let sql = format!("SELECT COUNT(*) FROM {}", quote_identifier(table));
    conn.query_row(&sql, [], |row| row.get(0))
        .map_err(SessionError::Query)
}

/// Fetches the `TEST_TABLE` row with the given id, if there is one
pub fn fetch_person(pool: &ConnectionPool, id: i64) -> Result<Option<Person>> {
    let conn = pool.get()?;
    conn.query_row(
        "SELECT id, fname, lname, address, bio FROM TEST_TABLE WHERE id = ?1",
        [id],
        |row| {
            Ok(Person {
                id: row.get(0)?,
                fname: row.get(1)?,
                lname: row.get(2)?,
                address: row.get(3)?,
                bio: row.get(4)?,
            })
        },
    )
    .optional()
    .map_err(SessionError::Query)
}
