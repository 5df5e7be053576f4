//! Constants used throughout the crate
//!
//! Default values, file names and environment variable names live here so
//! the config, storage and logging modules agree on them.

/// Id carried by a command that the store has not persisted yet
pub const UNASSIGNED_ID: i32 = 0;

// Configuration
pub const APP_NAME: &str = "commander";
pub const CONFIG_FILE_NAME: &str = "commander.toml";
pub const CONFIG_DIR_FILE_NAME: &str = "config.toml";
pub const DATABASE_URL_ENV: &str = "COMMANDER_DATABASE_URL";
pub const CONFIG_GENERATED: &str = "# Commander Configuration File";

// Database
pub const DEFAULT_DATABASE_URL: &str = "sqlite://commander.db?mode=rwc";
/// Prefix of the shared-cache in-memory database names; a unique suffix is appended
pub const IN_MEMORY_DATABASE_PREFIX: &str = "commander_memdb_";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;
pub const MAX_CONNECTIONS_LIMIT: u32 = 64;

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_FILE_NAME: &str = "commander.log";
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
