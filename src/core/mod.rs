/// Core Module
///
/// Shared infrastructure for the session: the database layer and the
/// error type every operation returns.

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{Result, SessionError};
