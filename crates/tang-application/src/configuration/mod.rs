//! Binding Store and Configuration Builder
//!
//! | Type | Role |
//! |------|------|
//! | [`ConfigurationBuilder`] | Validating, mutable accumulator |
//! | [`Configuration`] | Immutable snapshot shared by injectors |
//! | [`merge`] | Layered resolution rules used by the injector |

pub mod builder;
pub mod merge;
pub mod store;

pub use builder::ConfigurationBuilder;
pub use merge::{LiteralSource, ResolvedLiterals, resolve_literals};
pub use store::Configuration;
