//! Constants used throughout the application
//!
//! This module centralizes magic strings, user-facing messages, and other
//! constant values to improve maintainability and consistency.

// User-facing error messages
pub const ERROR_MISSING_DEMARCACIO: &str = "❌ Error: a demarcació must be specified";
pub const ERROR_DB_UNREACHABLE: &str = "❌ Error: cannot connect to the election database";
pub const ERROR_UNKNOWN_DEMARCACIO: &str = "❌ Error: the demarcació does not exist";

// UI messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

/// Upper bound accepted for database.max_connections
pub const POOL_MAX_CONNECTIONS_LIMIT: u32 = 16;
