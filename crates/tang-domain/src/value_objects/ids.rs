//! Canonical names for named parameters and types
//!
//! Parameters and types share one namespace: a line of configuration text is
//! routed to the right binding by looking its key up in the declaration
//! registry, so a name can never denote both.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! canonical_name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a name from any string-like value
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Borrow the canonical name
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the name can be written as a configuration key
            pub fn is_valid(&self) -> bool {
                is_valid_name(&self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl From<&$name> for $name {
            fn from(name: &$name) -> Self {
                name.clone()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

canonical_name!(
    /// Identifier of a named parameter, e.g. `com.example.SetOfNumbers`
    ///
    /// # Example
    ///
    /// ```
    /// use tang_domain::value_objects::ParameterId;
    ///
    /// let id = ParameterId::from("com.example.SetOfNumbers");
    /// assert!(id.is_valid());
    /// assert_eq!(id.to_string(), "com.example.SetOfNumbers");
    /// ```
    ParameterId
);

canonical_name!(
    /// Name of a class or interface known to the container
    TypeName
);

/// Keys are written as `key=value`, so they may not contain `=` or
/// whitespace and may not start a comment line.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('#')
        && !name.contains('=')
        && !name.chars().any(char::is_whitespace)
}
