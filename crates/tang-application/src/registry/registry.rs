//! Declaration Registry
//!
//! Maps parameter identifiers and type names to their declarations. The
//! registry is populated once at startup and then shared read-only (behind
//! an `Arc`) by builders, serializers and injectors.

use super::declaration::{ClassDeclaration, ParameterDeclaration};
use std::collections::{BTreeMap, BTreeSet};
use tang_domain::error::{Error, Result};
use tang_domain::value_objects::{ElementType, Literal, ParameterId, ParameterKind, TypeName};
use tracing::debug;

/// What a declared name refers to
#[derive(Debug, Clone, Copy)]
pub enum DeclaredName<'a> {
    /// A named parameter
    Parameter(&'a ParameterDeclaration),
    /// A class or interface
    Class(&'a ClassDeclaration),
}

/// Registry of parameter and class declarations
#[derive(Debug, Clone, Default)]
pub struct DeclarationRegistry {
    parameters: BTreeMap<ParameterId, ParameterDeclaration>,
    classes: BTreeMap<TypeName, ClassDeclaration>,
}

impl DeclarationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a named parameter
    ///
    /// `default_literal` is a single literal; for set parameters it is a
    /// comma-delimited list of element literals.
    pub fn declare(
        &mut self,
        id: impl Into<ParameterId>,
        kind: ParameterKind,
        element: ElementType,
        default_literal: Option<&str>,
    ) -> Result<&mut Self> {
        let mut declaration = ParameterDeclaration::new(id, kind, element);
        if let Some(literal) = default_literal {
            declaration = declaration.with_default(literal);
        }
        self.declare_parameter(declaration)
    }

    /// Register a parameter declaration
    ///
    /// Declaring the same facts twice is accepted; declaring a different
    /// kind, element type or default for an existing id is a conflict.
    pub fn declare_parameter(&mut self, declaration: ParameterDeclaration) -> Result<&mut Self> {
        let id = declaration.id().clone();
        if !id.is_valid() {
            return Err(Error::InvalidName {
                name: id.to_string(),
            });
        }
        if self.classes.contains_key(id.as_str()) {
            return Err(Error::conflicting_declaration(
                id.as_str(),
                "name is already declared as a type",
            ));
        }
        if let Some(existing) = self.parameters.get(&id) {
            return if existing == &declaration {
                Ok(self)
            } else {
                Err(Error::conflicting_declaration(
                    id.as_str(),
                    describe_conflict(existing, &declaration),
                ))
            };
        }
        for literal in declaration.defaults() {
            declaration
                .element()
                .parse(literal)
                .map_err(|message| Error::invalid_value(&id, literal.as_str(), message))?;
        }

        debug!(parameter = %id, kind = %declaration.kind(), element = %declaration.element(), "Declared parameter");
        self.parameters.insert(id, declaration);
        Ok(self)
    }

    /// Register a class declaration (its dependency list and interfaces)
    pub fn declare_class(&mut self, declaration: ClassDeclaration) -> Result<&mut Self> {
        let name = declaration.name().clone();
        if !name.is_valid() {
            return Err(Error::InvalidName {
                name: name.to_string(),
            });
        }
        if self.parameters.contains_key(name.as_str()) {
            return Err(Error::conflicting_declaration(
                name.as_str(),
                "name is already declared as a parameter",
            ));
        }
        if let Some(existing) = self.classes.get(&name) {
            if !existing.same_facts(&declaration) {
                return Err(Error::conflicting_declaration(
                    name.as_str(),
                    "class redeclared with different interfaces or dependencies",
                ));
            }
            if declaration.constructor().is_none() {
                return Ok(self);
            }
        }

        debug!(class = %name, is_abstract = declaration.is_abstract(), "Declared class");
        self.classes.insert(name, declaration);
        Ok(self)
    }

    /// Look up a parameter declaration
    pub fn lookup(&self, id: &str) -> Result<&ParameterDeclaration> {
        self.parameters
            .get(id)
            .ok_or_else(|| Error::unknown_parameter(id))
    }

    /// Look up a class declaration
    pub fn lookup_class(&self, type_name: &str) -> Result<&ClassDeclaration> {
        self.classes
            .get(type_name)
            .ok_or_else(|| Error::unknown_type(type_name))
    }

    /// Find what a name refers to, if it was declared at all
    pub fn find(&self, name: &str) -> Option<DeclaredName<'_>> {
        self.parameters
            .get(name)
            .map(DeclaredName::Parameter)
            .or_else(|| self.classes.get(name).map(DeclaredName::Class))
    }

    /// Iterate over parameter declarations in canonical order
    pub fn parameters(&self) -> impl Iterator<Item = &ParameterDeclaration> {
        self.parameters.values()
    }

    /// Iterate over class declarations in canonical order
    pub fn classes(&self) -> impl Iterator<Item = &ClassDeclaration> {
        self.classes.values()
    }

    /// Whether `concrete` is `interface` or implements it, transitively
    pub fn is_subtype(&self, concrete: &str, interface: &str) -> bool {
        let mut pending = vec![concrete];
        let mut seen = BTreeSet::new();
        while let Some(current) = pending.pop() {
            if current == interface {
                return true;
            }
            if !seen.insert(current) {
                continue;
            }
            if let Some(class) = self.classes.get(current) {
                pending.extend(class.interfaces().iter().map(TypeName::as_str));
            }
        }
        false
    }

    /// Validate a literal for a parameter
    ///
    /// Type-valued literals must name a declared type implementing the
    /// parameter's element interface.
    pub fn parse_literal(&self, declaration: &ParameterDeclaration, literal: &str) -> Result<Literal> {
        let parsed = declaration
            .element()
            .parse(literal)
            .map_err(|message| Error::invalid_value(declaration.id(), literal, message))?;

        if let (Literal::Type(concrete), Some(interface)) = (&parsed, declaration.element().interface()) {
            self.lookup_class(concrete.as_str())?;
            if !self.is_subtype(concrete.as_str(), interface.as_str()) {
                return Err(Error::invalid_value(
                    declaration.id(),
                    literal,
                    format!("{concrete} does not implement {interface}"),
                ));
            }
        }
        Ok(parsed)
    }
}

fn describe_conflict(existing: &ParameterDeclaration, new: &ParameterDeclaration) -> String {
    if existing.kind() != new.kind() {
        format!("declared as {} and as {}", existing.kind(), new.kind())
    } else if existing.element() != new.element() {
        format!(
            "declared with element type {} and {}",
            existing.element(),
            new.element()
        )
    } else {
        format!(
            "declared with defaults {:?} and {:?}",
            existing.default_literal(),
            new.default_literal()
        )
    }
}
