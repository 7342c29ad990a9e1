//! Ports (interfaces) between the resolution engine and caller code

pub mod constructor;

pub use constructor::{Arguments, Constructor, FnConstructor};
