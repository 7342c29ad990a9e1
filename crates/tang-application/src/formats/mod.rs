//! Configuration Serializer
//!
//! Canonical text encoding of binding stores and its inverse.

pub mod serializer;

pub use serializer::ConfigurationSerializer;
