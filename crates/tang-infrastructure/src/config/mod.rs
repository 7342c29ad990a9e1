//! Application settings
//!
//! Settings are separate from the binding stores the container resolves
//! against: they tune the process (log output, resolution limits) and are
//! loaded once at startup.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, InjectorConfig, LoggingConfig};
