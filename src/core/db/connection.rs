/// Connection Management Module
///
/// This module owns the pool of SQLite connections backing a session.
/// Building the pool is lazy: nothing touches the database file until the
/// first checkout, which is what `ping` is for.

use crate::config::DatabaseConfig;
use crate::core::{Result, SessionError};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// A connection checked out of the pool; returned to it on drop.
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Pool of connections to a single SQLite database file
#[derive(Clone)]
pub struct ConnectionPool {
    pool: Pool<SqliteConnectionManager>,
    path: PathBuf,
}

impl fmt::Debug for ConnectionPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionPool")
            .field("path", &self.path)
            .field("connections", &self.open_connections())
            .finish()
    }
}

impl ConnectionPool {
    /// Allocates a pool for the database file named in `config`
    ///
    /// No connection is opened here, so success says nothing about whether
    /// the file is reachable.
    ///
    /// # Returns
    ///
    /// `SessionError::Open` if the pool settings are unusable.
    pub fn connect(config: &DatabaseConfig) -> Result<Self> {
        if config.pool_size == 0 {
            return Err(SessionError::Open(
                "pool size must be greater than zero".to_string(),
            ));
        }
        if config.path.as_os_str().is_empty() {
            return Err(SessionError::Open("database path is empty".to_string()));
        }

        let foreign_keys = config.foreign_keys;
        let busy_timeout = Duration::from_millis(config.busy_timeout_ms);
        let manager = SqliteConnectionManager::file(&config.path).with_init(move |conn| {
            conn.busy_timeout(busy_timeout)?;
            conn.pragma_update(None, "foreign_keys", foreign_keys)?;
            Ok(())
        });

        let pool = Pool::builder()
            .max_size(config.pool_size)
            .min_idle(Some(0))
            .connection_timeout(Duration::from_millis(config.connection_timeout_ms))
            .build_unchecked(manager);

        debug!(
            "Allocated pool for {:?} (max {} connections)",
            config.path, config.pool_size
        );

        Ok(ConnectionPool {
            pool,
            path: config.path.clone(),
        })
    }

    /// Verifies that at least one connection can be established
    ///
    /// The engine creates the database file on first open if it is missing.
    pub fn ping(&self) -> Result<()> {
        let conn = self.get()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(SessionError::Query)?;
        debug!("Ping succeeded for {:?}", self.path);
        Ok(())
    }

    /// Checks a connection out of the pool
    pub fn get(&self) -> Result<PooledConn> {
        Ok(self.pool.get()?)
    }

    /// Path of the database file this pool serves
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of connections currently held open by the pool
    pub fn open_connections(&self) -> u32 {
        self.pool.state().connections
    }

    /// Releases the pool and every idle connection in it
    pub fn close(self) {
        info!("Closing connection pool for {:?}", self.path);
        drop(self.pool);
    }
}
