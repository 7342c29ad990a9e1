//! Configuration files
//!
//! Explicit I/O for the two file kinds the container consumes:
//!
//! | File | Format | Loaded into |
//! |------|--------|-------------|
//! | Declarations | TOML [`DeclarationTable`] | [`DeclarationRegistry`] |
//! | Bindings | `key=value` text | [`ConfigurationBuilder`] |

use crate::error_ext::ErrorContext;
use std::path::Path;
use tang_application::{
    Configuration, ConfigurationBuilder, ConfigurationSerializer, DeclarationRegistry,
    DeclarationTable,
};
use tang_domain::error::Result;
use tracing::{debug, info};

/// Replay a configuration text file into `builder`
pub fn read_configuration_file<'b, P: AsRef<Path>>(
    path: P,
    builder: &'b mut ConfigurationBuilder,
) -> Result<&'b mut ConfigurationBuilder> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_io_context(|| format!("Failed to read configuration file {}", path.display()))?;
    debug!(path = %path.display(), bytes = text.len(), "Read configuration file");
    ConfigurationSerializer::from_text(&text, builder)
}

/// Write the canonical text of `configuration` to a file
pub fn write_configuration_file<P: AsRef<Path>>(path: P, configuration: &Configuration) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_io_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, ConfigurationSerializer::to_text(configuration))
        .with_io_context(|| format!("Failed to write configuration file {}", path.display()))?;
    info!(path = %path.display(), bindings = configuration.binding_count(), "Wrote configuration file");
    Ok(())
}

/// Parse a declaration table from a TOML file
pub fn load_declaration_table<P: AsRef<Path>>(path: P) -> Result<DeclarationTable> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_io_context(|| format!("Failed to read declaration file {}", path.display()))?;
    let table: DeclarationTable = toml::from_str(&text)
        .config_context(format!("Invalid declaration file {}", path.display()))?;
    debug!(
        path = %path.display(),
        parameters = table.parameters.len(),
        classes = table.classes.len(),
        "Loaded declaration table"
    );
    Ok(table)
}

/// Build a registry from a TOML declaration file
pub fn load_registry<P: AsRef<Path>>(path: P) -> Result<DeclarationRegistry> {
    load_declaration_table(path)?.into_registry()
}
