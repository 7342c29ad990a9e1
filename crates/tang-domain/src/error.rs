//! Error handling types
//!
//! Every failure carries the offending identifier (parameter, type or line
//! number) so a configuration defect can be located without inspecting the
//! container internals. Resolution is deterministic, so none of these errors
//! are transient and nothing in the container retries.

use crate::value_objects::{ParameterId, ParameterKind, TypeName};
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Tang container
#[derive(Error, Debug)]
pub enum Error {
    /// A named parameter was referenced but never declared
    #[error("Unknown parameter: {parameter}")]
    UnknownParameter {
        /// The undeclared parameter
        parameter: ParameterId,
    },

    /// A type was referenced but never declared
    #[error("Unknown type: {type_name}")]
    UnknownType {
        /// The undeclared type
        type_name: TypeName,
    },

    /// A declared name cannot appear in configuration text
    #[error("Invalid name '{name}': names must be non-empty and contain no whitespace, '=' or leading '#'")]
    InvalidName {
        /// The rejected name
        name: String,
    },

    /// A name was declared twice with incompatible facts
    #[error("Conflicting declaration for {name}: {message}")]
    ConflictingDeclaration {
        /// The name declared twice
        name: String,
        /// What differs between the two declarations
        message: String,
    },

    /// A binding used the wrong kind of parameter (set entry on a scalar, ...)
    #[error("Parameter {parameter} is declared as {expected}, not {found}")]
    KindMismatch {
        /// The parameter that was bound
        parameter: ParameterId,
        /// Kind the parameter was declared with
        expected: ParameterKind,
        /// Kind the binding required
        found: ParameterKind,
    },

    /// A literal does not parse as the parameter's element type
    #[error("Invalid value '{value}' for parameter {parameter}: {message}")]
    InvalidValue {
        /// The parameter being bound or declared
        parameter: ParameterId,
        /// The offending literal
        value: String,
        /// Why the literal was rejected
        message: String,
    },

    /// An implementation binding names a type that does not implement the interface
    #[error("{concrete_type} does not implement {abstract_type}")]
    IncompatibleImplementation {
        /// The interface or abstract type
        abstract_type: TypeName,
        /// The type that was bound to it
        concrete_type: TypeName,
    },

    /// An abstract or non-constructible type has no implementation binding
    #[error("No implementation bound for {type_name}")]
    NoImplementationBound {
        /// The type that could not be constructed
        type_name: TypeName,
    },

    /// A scalar parameter has neither a binding nor a default value
    #[error("No value bound for parameter {parameter} and no default declared")]
    UnboundParameter {
        /// The unbound parameter
        parameter: ParameterId,
    },

    /// Resolving a type required resolving the same type again
    #[error("Cyclic dependency: {}", format_chain(.cycle))]
    CyclicDependency {
        /// The resolution chain, starting and ending with the repeated type
        cycle: Vec<TypeName>,
    },

    /// The resolution chain grew past the configured bound
    #[error("Resolution of {type_name} exceeded the maximum depth of {limit}")]
    DepthExceeded {
        /// Type being resolved when the limit was hit
        type_name: TypeName,
        /// The configured maximum depth
        limit: usize,
    },

    /// A volatile instance was bound after the session already resolved the type
    #[error("{type_name} was already instantiated in this session")]
    AlreadyInstantiated {
        /// The type that already has an instance
        type_name: TypeName,
    },

    /// A different volatile instance is already bound to the type
    #[error("A different instance is already bound to {type_name}")]
    AlreadyBound {
        /// The type bound twice
        type_name: TypeName,
    },

    /// A constructor rejected its arguments
    #[error("Failed to construct {type_name}: {message}")]
    Construction {
        /// The type whose constructor failed
        type_name: TypeName,
        /// Description of the failure
        message: String,
    },

    /// Configuration text could not be parsed
    #[error("Malformed configuration at line {line}: {message}")]
    MalformedConfiguration {
        /// 1-based line number of the offending line
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Application settings error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

fn format_chain(chain: &[TypeName]) -> String {
    chain
        .iter()
        .map(TypeName::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

// Declaration and binding error creation methods
impl Error {
    /// Create an unknown parameter error
    pub fn unknown_parameter(parameter: impl Into<ParameterId>) -> Self {
        Self::UnknownParameter {
            parameter: parameter.into(),
        }
    }

    /// Create an unknown type error
    pub fn unknown_type(type_name: impl Into<TypeName>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }

    /// Create a conflicting declaration error
    pub fn conflicting_declaration<N: Into<String>, S: Into<String>>(name: N, message: S) -> Self {
        Self::ConflictingDeclaration {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value<V: Into<String>, S: Into<String>>(
        parameter: impl Into<ParameterId>,
        value: V,
        message: S,
    ) -> Self {
        Self::InvalidValue {
            parameter: parameter.into(),
            value: value.into(),
            message: message.into(),
        }
    }
}

// Resolution error creation methods
impl Error {
    /// Create a missing implementation error
    pub fn no_implementation(type_name: impl Into<TypeName>) -> Self {
        Self::NoImplementationBound {
            type_name: type_name.into(),
        }
    }

    /// Create a constructor failure error
    pub fn construction<S: Into<String>>(type_name: impl Into<TypeName>, message: S) -> Self {
        Self::Construction {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Create a malformed configuration error
    pub fn malformed<S: Into<String>>(line: usize, message: S) -> Self {
        Self::MalformedConfiguration {
            line,
            message: message.into(),
        }
    }
}

// I/O and settings error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
