//! Runs the fixed session sequence against one database file:
//! connect, ping, create `TEST_TABLE`, list tables, insert one row.
//!
//! Connectivity and schema failures are logged and the run continues.
//! Catalog scan and transaction failures are logged and end the run with
//! the error. Status lines go to the writer the caller passes in.

use crate::config::Config;
use crate::core::db::{
    create_table, insert_row, list_tables, ConnectionPool, Person, TxState, TEST_TABLE,
    TEST_TABLE_DDL,
};
use crate::core::{Result, SessionError};
use std::io::Write;
use tracing::{error, info};

/// What a completed run observed.
#[derive(Debug, Default)]
pub struct RunReport {
    pub connected: bool,
    pub table_created: bool,
    pub tables: Vec<String>,
    pub transaction: TxState,
    /// Failures that were logged without stopping the run.
    pub warnings: Vec<SessionError>,
}

/// A pool plus the row the session writes.
pub struct DatabaseSession {
    pool: ConnectionPool,
    person: Person,
}

impl DatabaseSession {
    /// Allocates the pool described by `config`
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;
        let pool = ConnectionPool::connect(&config.database)?;
        Ok(DatabaseSession {
            pool,
            person: Person::sample(),
        })
    }

    /// Replaces the row written by `run_steps`.
    pub fn with_person(mut self, person: Person) -> Self {
        self.person = person;
        self
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Opens a session for `config`, runs every step, then releases the pool.
    pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunReport> {
        let session = DatabaseSession::open(config).map_err(|e| {
            error!("{}", e);
            e
        })?;
        let result = session.run_steps(out);
        session.close();
        result
    }

    /// Runs ping, create, list and insert in order.
    pub fn run_steps<W: Write>(&self, out: &mut W) -> Result<RunReport> {
        let mut report = RunReport::default();

        match self.pool.ping() {
            Ok(()) => {
                report.connected = true;
                writeln!(out, "Connected!")?;
            }
            Err(e) => recover(&mut report, e)?,
        }

        match create_table(&self.pool, TEST_TABLE_DDL) {
            Ok(()) => {
                report.table_created = true;
                writeln!(out, "Table `{}` created.", TEST_TABLE)?;
            }
            Err(e) => recover(&mut report, e)?,
        }

        report.tables = list_tables(&self.pool).map_err(fatal)?;
        writeln!(out, "[{}]", report.tables.join(" "))?;

        report.transaction = insert_row(&self.pool, &self.person).map_err(|e| {
            if matches!(e, SessionError::InsertRolledBack(_)) {
                error!("transaction failed");
            }
            fatal(e)
        })?;
        writeln!(out, "transaction committed!")?;

        info!(
            "Session finished with {} recovered error(s)",
            report.warnings.len()
        );
        Ok(report)
    }

    /// Releases the pool.
    pub fn close(self) {
        self.pool.close();
    }
}

/// Logs a recoverable failure into the report, or hands back a fatal one.
fn recover(report: &mut RunReport, e: SessionError) -> Result<()> {
    if e.is_fatal() {
        return Err(fatal(e));
    }
    error!("{}", e);
    report.warnings.push(e);
    Ok(())
}

fn fatal(e: SessionError) -> SessionError {
    error!("{}", e);
    e
}
