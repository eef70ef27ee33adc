/// Transaction Module
///
/// The transactional insert into `TEST_TABLE` and the states it moves
/// through. A write either commits in full or leaves the table untouched.

use crate::core::db::connection::ConnectionPool;
use crate::core::{Result, SessionError};
use rusqlite::ToSql;
use tracing::{debug, error, warn};

const INSERT_PERSON_SQL: &str =
    "INSERT INTO TEST_TABLE (id, fname, lname, address, bio) VALUES (?,?,?,?,?)";

/// Lifecycle of a single write transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxState {
    /// Nothing started yet
    #[default]
    Idle,
    /// BEGIN issued, writes pending
    TransactionOpen,
    /// Pending writes are durable
    Committed,
    /// Pending writes were discarded
    RolledBack,
}

impl TxState {
    /// `Committed` and `RolledBack` are final; nothing follows them.
    pub fn is_terminal(self) -> bool {
        matches!(self, TxState::Committed | TxState::RolledBack)
    }
}

/// One row of `TEST_TABLE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub fname: String,
    pub lname: String,
    pub address: String,
    pub bio: String,
}

impl Person {
    pub fn new(id: i64, fname: &str, lname: &str, address: &str, bio: &str) -> Self {
        Person {
            id,
            fname: fname.to_string(),
            lname: lname.to_string(),
            address: address.to_string(),
            bio: bio.to_string(),
        }
    }

    /// The row the session writes.
    pub fn sample() -> Self {
        Person::new(
            1,
            "Humfried",
            "Ritelli",
            "6 Center Road",
            "repurpose extensible systems",
        )
    }

    /// Values in table column order, for positional binding.
    pub fn params(&self) -> [&dyn ToSql; 5] {
        [
            &self.id,
            &self.fname,
            &self.lname,
            &self.address,
            &self.bio,
        ]
    }
}

/// Inserts `person` inside its own transaction
///
/// # Returns
///
/// `TxState::Committed` once the row is durable. If the insert fails the
/// transaction is rolled back and `SessionError::InsertRolledBack` is
/// returned; if the commit fails, `SessionError::Commit`. Neither case
/// leaves a partial write behind, and both report `TxState::RolledBack`
/// through `SessionError::tx_state`.
pub fn insert_row(pool: &ConnectionPool, person: &Person) -> Result<TxState> {
    let mut conn = pool.get()?;

    let tx = conn.transaction().map_err(SessionError::Begin)?;
    transition(TxState::Idle, TxState::TransactionOpen);

    let params = person.params();
    if let Err(e) = tx.execute(INSERT_PERSON_SQL, &params[..]) {
        error!("Insert of id {} failed: {}", person.id, e);
        if let Err(rollback_err) = tx.rollback() {
            // Dropping the transaction handle rolls back regardless.
            warn!("Explicit rollback failed: {}", rollback_err);
        }
        transition(TxState::TransactionOpen, TxState::RolledBack);
        return Err(SessionError::InsertRolledBack(e));
    }

    // A failed COMMIT leaves the transaction open; the handle rolls it back on drop.
    if let Err(e) = tx.commit() {
        error!("Commit of id {} failed: {}", person.id, e);
        transition(TxState::TransactionOpen, TxState::RolledBack);
        return Err(SessionError::Commit(e));
    }

    transition(TxState::TransactionOpen, TxState::Committed);
    Ok(TxState::Committed)
}

fn transition(from: TxState, to: TxState) {
    debug!("Transaction {:?} -> {:?}", from, to);
}
