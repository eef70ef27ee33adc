/// Session Error Module
///
/// This module defines the error type shared by every database operation
/// in the session, together with the recoverable/fatal split the runner
/// uses to decide whether to keep going.
use crate::core::db::transaction::TxState;
use thiserror::Error;

/// Error type for the database session.
///
/// Each variant corresponds to one step of the session that can fail:
/// - Opening and pinging the connection pool
/// - Schema definition and catalog enumeration
/// - The transactional insert (begin, insert, commit)
/// - Configuration loading and console output
#[derive(Error, Debug)]
pub enum SessionError {
    /// Pool configuration was rejected before any connection was made
    #[error("Open error: {0}")]
    Open(String),

    /// No connection could be checked out of the pool
    #[error("Connectivity error: {0}")]
    Connectivity(#[from] r2d2::Error),

    /// DDL execution failed (table exists, bad column definition, ...)
    #[error("Schema error: {0}")]
    Schema(rusqlite::Error),

    /// A read statement could not be prepared or executed
    #[error("Query error: {0}")]
    Query(rusqlite::Error),

    /// A column value could not be decoded from a row
    #[error("Scan error: {0}")]
    Scan(rusqlite::Error),

    /// Advancing the cursor surfaced a deferred error
    #[error("Cursor error: {0}")]
    Cursor(rusqlite::Error),

    /// The transaction could not be started
    #[error("Transaction error: begin failed: {0}")]
    Begin(rusqlite::Error),

    /// The insert failed and the transaction was rolled back
    #[error("Transaction error: insert failed, rolled back: {0}")]
    InsertRolledBack(rusqlite::Error),

    /// The insert succeeded but the commit did not
    #[error("Transaction error: commit failed: {0}")]
    Commit(rusqlite::Error),

    /// Configuration parsing and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system and console I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Whether the session must stop after this error.
    ///
    /// Connectivity and schema failures are logged and the session moves on
    /// to its next step; everything else ends the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            SessionError::Connectivity(_) | SessionError::Schema(_)
        )
    }

    /// Final state of the write transaction this error ended, if it ended one.
    ///
    /// Insert and commit failures both leave the table untouched.
    pub fn tx_state(&self) -> Option<TxState> {
        match self {
            SessionError::InsertRolledBack(_) | SessionError::Commit(_) => {
                Some(TxState::RolledBack)
            }
            SessionError::Begin(_) => Some(TxState::Idle),
            _ => None,
        }
    }
}

/// Type alias for Result to use SessionError as the error type.
pub type Result<T> = std::result::Result<T, SessionError>;
