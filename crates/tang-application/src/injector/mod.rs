//! Injector
//!
//! Per-session resolution of types and named parameters over layered
//! binding stores.

#[allow(clippy::module_inception)]
pub mod injector;
pub mod options;

pub use injector::Injector;
pub use options::InjectorOptions;
