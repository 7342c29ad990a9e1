//! # Tang
//!
//! Named-parameter dependency injection. Types declare which named parameters
//! and other types they depend on; bindings are accumulated in a validating
//! builder, frozen into immutable stores and resolved per session by an
//! injector. Stores round-trip through a canonical `key=value` text format.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use tang::application::{ClassDeclaration, ConfigurationBuilder, DeclarationRegistry, Injector};
//! use tang::domain::{ElementType, ParameterKind};
//!
//! let mut registry = DeclarationRegistry::new();
//! registry.declare("com.example.SetOfNumbers", ParameterKind::Set, ElementType::String, Some("one,two,three"))?;
//! registry.declare_class(
//!     ClassDeclaration::concrete("Box")
//!         .depends_on_parameter("com.example.SetOfNumbers")
//!         .with_constructor(|args| Ok(args.set("com.example.SetOfNumbers")?.len())),
//! )?;
//! let registry = Arc::new(registry);
//!
//! let mut builder = ConfigurationBuilder::new(registry.clone());
//! builder.bind_set_entry("com.example.SetOfNumbers", "four")?;
//!
//! let mut injector = Injector::new(registry, [Arc::new(builder.build())]);
//! assert_eq!(*injector.get::<usize>("Box")?, 1);
//! # Ok::<(), tang::domain::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - `domain` - identifiers, values, the error taxonomy
//! - `application` - registry, builder, stores, serializer, injector
//! - `infrastructure` - settings, logging, configuration file I/O
//! - `cli` - the `tang` command line tool

/// Domain layer - identifiers, values and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use tang_domain::*;
}

/// Application layer - the container itself
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use tang_application::*;
}

/// Infrastructure layer - settings, logging and file I/O
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use tang_infrastructure::*;
}

pub mod cli;

pub use tang_application::{ConfigurationBuilder, ConfigurationSerializer, DeclarationRegistry, Injector};
pub use tang_domain::{Error, Result};
