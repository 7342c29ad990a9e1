//! Parameter Declaration Registry
//!
//! Static facts about named parameters and classes, supplied once at startup
//! either from code or from a [`DeclarationTable`].

pub mod declaration;
#[allow(clippy::module_inception)]
pub mod registry;
pub mod table;

pub use declaration::{ClassDeclaration, DependencySpec, ParameterDeclaration, split_set_literal};
pub use registry::{DeclarationRegistry, DeclaredName};
pub use table::{ClassSpec, DeclarationTable, ParameterSpec};
