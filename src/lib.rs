// Core infrastructure modules
pub mod core;

// Session-level modules
pub mod config;
pub mod session;

pub use crate::config::{load_config, Config, DatabaseConfig};
pub use crate::core::{Result, SessionError};
pub use crate::session::{DatabaseSession, RunReport};
