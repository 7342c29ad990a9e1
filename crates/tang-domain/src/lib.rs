//! # Tang Domain
//!
//! Core types of the Tang named-parameter dependency-injection container.
//!
//! This crate has no knowledge of how bindings are stored, merged or
//! serialized; it only defines the vocabulary the other layers share:
//!
//! - [`value_objects`] - parameter ids, type names, kinds, values, instances
//! - [`error`] - the error taxonomy and [`Result`] alias
//! - [`constants`] - text format and resolution constants

pub mod constants;
pub mod error;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::*;
