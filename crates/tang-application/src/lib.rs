//! Application Layer - Tang
//!
//! Everything the container does at runtime, written against the domain
//! vocabulary only.
//!
//! ## Architecture
//!
//! ```text
//!  DeclarationRegistry ──► ConfigurationBuilder ──build──► Configuration
//!          │                        ▲                          │
//!          │                        └── ConfigurationSerializer┤
//!          └──────────────────────► Injector ◄────────────────┘
//! ```
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`registry`] | Parameter and class declarations |
//! | [`configuration`] | Validating builder, immutable stores, layering rules |
//! | [`formats`] | Canonical `key=value` text |
//! | [`injector`] | Per-session resolution with cycle detection |
//! | [`ports`] | Constructor contract implemented by callers |
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `tang-domain`: identifiers, values and the error taxonomy
//! - `serde` for declaration tables and `tracing` for diagnostics

pub mod configuration;
pub mod formats;
pub mod injector;
pub mod ports;
pub mod registry;

pub use configuration::{Configuration, ConfigurationBuilder};
pub use formats::ConfigurationSerializer;
pub use injector::{Injector, InjectorOptions};
pub use ports::{Arguments, Constructor, FnConstructor};
pub use registry::{ClassDeclaration, DeclarationRegistry, DeclarationTable, ParameterDeclaration};
