//! Declaration tables
//!
//! A serializable list of parameter and class declarations, used to build a
//! registry from a file instead of from code. Classes declared this way have
//! no constructor: they can be checked and bound, and instantiated only
//! through volatile instances or implementation bindings.
//!
//! ```toml
//! [[parameter]]
//! name = "com.example.SetOfNumbers"
//! kind = "set"
//! element = "string"
//! default = "one,two,three"
//!
//! [[class]]
//! name = "Integer"
//! implements = ["Number"]
//! ```

use super::declaration::{ClassDeclaration, DependencySpec, ParameterDeclaration};
use super::registry::DeclarationRegistry;
use serde::{Deserialize, Serialize};
use tang_domain::error::Result;
use tang_domain::value_objects::{ElementType, ParameterId, ParameterKind, TypeName};

/// Serializable parameter declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter identifier
    pub name: ParameterId,
    /// Scalar or set
    pub kind: ParameterKind,
    /// Element type
    pub element: ElementType,
    /// Default literal (comma-delimited for sets)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Serializable class declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSpec {
    /// Class name
    pub name: TypeName,
    /// Whether the class is an interface or abstract class
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// Implemented interfaces
    #[serde(default)]
    pub implements: Vec<TypeName>,
    /// Constructor dependencies
    #[serde(default)]
    pub dependencies: Vec<DependencySpec>,
}

/// A full declaration table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationTable {
    /// Parameter declarations
    #[serde(default, rename = "parameter")]
    pub parameters: Vec<ParameterSpec>,
    /// Class declarations
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassSpec>,
}

impl DeclarationTable {
    /// Declare every entry of the table into `registry`
    pub fn apply(&self, registry: &mut DeclarationRegistry) -> Result<()> {
        for class in &self.classes {
            let base = if class.is_abstract {
                ClassDeclaration::interface(&class.name)
            } else {
                ClassDeclaration::concrete(&class.name)
            };
            let declaration = class
                .implements
                .iter()
                .fold(base, |decl, interface| decl.implements(interface))
                .with_dependencies(class.dependencies.clone());
            registry.declare_class(declaration)?;
        }
        for parameter in &self.parameters {
            let mut declaration =
                ParameterDeclaration::new(&parameter.name, parameter.kind, parameter.element.clone());
            if let Some(default) = &parameter.default {
                declaration = declaration.with_default(default.as_str());
            }
            registry.declare_parameter(declaration)?;
        }
        Ok(())
    }

    /// Build a fresh registry from the table
    pub fn into_registry(self) -> Result<DeclarationRegistry> {
        let mut registry = DeclarationRegistry::new();
        self.apply(&mut registry)?;
        Ok(registry)
    }
}
