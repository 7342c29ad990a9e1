//! Infrastructure layer constants
//!
//! Domain-level constants (text format, resolution depth) live in
//! `tang_domain::constants`.

// ============================================================================
// SETTINGS CONSTANTS
// ============================================================================

/// Default settings file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tang.toml";

/// Default settings directory name
pub const DEFAULT_CONFIG_DIR: &str = "tang";

/// Environment variable prefix for settings
pub const CONFIG_ENV_PREFIX: &str = "TANG";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "TANG_LOG";

/// File stem used when a log file path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "tang";
