/// Database Module
///
/// The database layer is split by concern:
/// - **Connection Management** (`connection.rs`): the pool, ping and release
/// - **Schema** (`schema.rs`): table DDL, catalog enumeration, column metadata
/// - **Transactions** (`transaction.rs`): the transactional insert and its states
/// - **Queries** (`query.rs`): read helpers for checking written data
///
/// All operations take the pool explicitly and return the crate-wide
/// `SessionError`.
pub mod connection;
pub mod query;
pub mod schema;
pub mod transaction;

pub use connection::*;
pub use query::*;
pub use schema::*;
pub use transaction::*;
