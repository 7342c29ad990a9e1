//! Parameter kinds and element types

use super::ids::TypeName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a named parameter holds one value or a set of values
///
/// Scalars merge with "last binding wins"; sets merge by union of explicit
/// entries. The distinction is made on this tag, never on the runtime type
/// of a bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    /// A single value
    Scalar,
    /// A set of values
    Set,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.write_str("scalar"),
            Self::Set => f.write_str("set"),
        }
    }
}

/// Declared type of the elements of a named parameter
///
/// Literals are always carried as strings in bindings and configuration
/// text; the element type decides how a literal is validated and what
/// [`Value`](super::Value) it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// Free-form text
    String,
    /// Signed 64-bit integer
    Integer,
    /// 64-bit float
    Float,
    /// `true` or `false`
    Boolean,
    /// The literal names a type that is a subtype of the given interface;
    /// the injector resolves it to an instance
    Type(TypeName),
}

impl ElementType {
    /// Interface the literal must implement, for type-valued parameters
    pub fn interface(&self) -> Option<&TypeName> {
        match self {
            Self::Type(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Integer => f.write_str("integer"),
            Self::Float => f.write_str("float"),
            Self::Boolean => f.write_str("boolean"),
            Self::Type(name) => write!(f, "type<{name}>"),
        }
    }
}
