//! # Infrastructure Layer
//!
//! Technical concerns around the container: application settings, logging
//! and the explicit file I/O for configuration text and declaration tables.
//! Nothing here runs during resolution.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | `tang.toml` settings loaded through Figment |
//! | [`logging`] | Structured logging with tracing |
//! | [`files`] | Reading and writing configuration text and declaration tables |
//! | [`error_ext`] | Context helpers mapping foreign errors into [`tang_domain::Error`] |
//! | [`constants`] | Centralized infrastructure constants |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod files;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
