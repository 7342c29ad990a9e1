//! Error extension utilities
//!
//! Maps foreign errors (I/O, TOML, Figment) into the domain error type while
//! keeping the original error as the source.

use std::fmt;
use tang_domain::error::{Error, Result};

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```no_run
/// use tang_infrastructure::error_ext::ErrorContext;
///
/// let text = std::fs::read_to_string("bindings.conf")
///     .io_context("Failed to read configuration text")?;
/// # Ok::<(), tang_domain::Error>(())
/// ```
pub trait ErrorContext<T> {
    /// Add context to any infrastructure failure, reported as I/O
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for settings and declaration-table operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add I/O context with lazy evaluation
    fn with_io_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::Io {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }

    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::io_with_source(format!("{context}: {err}"), err))
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }

    fn with_io_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::io_with_source(format!("{}: {err}", f()), err))
    }
}
