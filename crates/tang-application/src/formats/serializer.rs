//! Configuration text format
//!
//! One binding per line, `key=value`, sorted by key and then by value so the
//! text is a pure function of the store's logical content:
//!
//! ```text
//! # comment lines and blank lines are ignored
//! com.example.Port=8080
//! com.example.SetOfNumbers=five
//! com.example.SetOfNumbers=four
//! Number=Integer
//! ```
//!
//! The key decides the binding kind: a set parameter gets a set entry, a
//! scalar parameter a value and a declared type an implementation binding.
//! Volatile instances are never written.

use crate::configuration::{Configuration, ConfigurationBuilder};
use crate::registry::DeclaredName;
use tang_domain::constants::{COMMENT_PREFIX, KEY_VALUE_SEPARATOR};
use tang_domain::error::{Error, Result};
use tang_domain::value_objects::ParameterKind;
use tracing::{debug, info};

/// Converts stores to canonical text and replays text into builders
pub struct ConfigurationSerializer;

impl ConfigurationSerializer {
    /// Render a store as canonical configuration text
    pub fn to_text(configuration: &Configuration) -> String {
        let mut lines: Vec<(&str, &str)> = Vec::with_capacity(configuration.binding_count());
        lines.extend(configuration.values().map(|(id, value)| (id.as_str(), value)));
        for (id, entries) in configuration.sets() {
            lines.extend(entries.iter().map(|entry| (id.as_str(), entry.as_str())));
        }
        lines.extend(
            configuration
                .implementations()
                .map(|(interface, concrete)| (interface.as_str(), concrete.as_str())),
        );
        lines.sort_unstable();

        let mut text = String::new();
        for (key, value) in lines {
            text.push_str(key);
            text.push(KEY_VALUE_SEPARATOR);
            text.push_str(&escape(value));
            text.push('\n');
        }
        text
    }

    /// Parse configuration text and replay its bindings into `builder`
    ///
    /// Lines are applied in order to a staged copy of the builder, which
    /// replaces `builder` only once every line has applied. On error the
    /// builder is left untouched.
    pub fn from_text<'b>(text: &str, builder: &'b mut ConfigurationBuilder) -> Result<&'b mut ConfigurationBuilder> {
        let mut staged = builder.clone();
        let mut applied = 0_usize;
        for (index, raw) in text.lines().enumerate() {
            let line_number = index + 1;
            let line = raw.trim_start();
            if line.trim_end().is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            let Some((key, raw_value)) = line.split_once(KEY_VALUE_SEPARATOR) else {
                return Err(Error::malformed(line_number, "expected 'key=value'"));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(Error::malformed(line_number, "empty key"));
            }
            let value = unescape(raw_value).map_err(|message| Error::malformed(line_number, message))?;

            apply_line(&mut staged, key, value)?;
            applied += 1;
        }
        *builder = staged;
        info!(bindings = applied, "Loaded configuration text");
        Ok(builder)
    }
}

fn apply_line(builder: &mut ConfigurationBuilder, key: &str, value: String) -> Result<()> {
    let registry = builder.registry().clone();
    match registry.find(key) {
        Some(DeclaredName::Parameter(declaration)) => match declaration.kind() {
            ParameterKind::Set => {
                builder.bind_set_entry(key, value)?;
            }
            ParameterKind::Scalar => {
                builder.bind_value(key, value)?;
            }
        },
        Some(DeclaredName::Class(_)) => {
            builder.bind_implementation(key, &value)?;
        }
        None => return Err(Error::unknown_parameter(key)),
    }
    debug!(key, "Applied configuration line");
    Ok(())
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn unescape(value: &str) -> std::result::Result<String, String> {
    let mut unescaped = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => unescaped.push('\\'),
            Some('n') => unescaped.push('\n'),
            Some('r') => unescaped.push('\r'),
            Some('t') => unescaped.push('\t'),
            Some(other) => return Err(format!("unknown escape sequence '\\{other}'")),
            None => return Err("dangling '\\' at end of line".to_string()),
        }
    }
    Ok(unescaped)
}
