//! Configuration Builder
//!
//! Mutable accumulator for explicit bindings. Every binding is validated
//! against the declaration registry when it is recorded, so a built store
//! only ever holds bindings that resolve.

use super::merge::insert_volatile;
use super::store::Configuration;
use std::collections::BTreeMap;
use std::sync::Arc;
use tang_domain::error::{Error, Result};
use tang_domain::value_objects::{Instance, ParameterId, ParameterKind, TypeName};
use tracing::debug;

use crate::registry::{DeclarationRegistry, ParameterDeclaration};

/// Builder for [`Configuration`] stores
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tang_application::configuration::ConfigurationBuilder;
/// use tang_application::registry::DeclarationRegistry;
/// use tang_domain::value_objects::{ElementType, ParameterKind};
///
/// let mut registry = DeclarationRegistry::new();
/// registry.declare("SetOfNumbers", ParameterKind::Set, ElementType::String, Some("one,two"))?;
///
/// let mut builder = ConfigurationBuilder::new(Arc::new(registry));
/// builder.bind_set_entry("SetOfNumbers", "four")?.bind_set_entry("SetOfNumbers", "five")?;
/// let store = builder.build();
/// assert_eq!(store.set_entries("SetOfNumbers").map(|s| s.len()), Some(2));
/// # Ok::<(), tang_domain::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    registry: Arc<DeclarationRegistry>,
    values: BTreeMap<ParameterId, String>,
    set_entries: BTreeMap<ParameterId, Vec<String>>,
    implementations: BTreeMap<TypeName, TypeName>,
    volatile: BTreeMap<TypeName, Instance>,
}

impl ConfigurationBuilder {
    /// Create an empty builder validating against `registry`
    pub fn new(registry: Arc<DeclarationRegistry>) -> Self {
        Self {
            registry,
            values: BTreeMap::new(),
            set_entries: BTreeMap::new(),
            implementations: BTreeMap::new(),
            volatile: BTreeMap::new(),
        }
    }

    /// Registry the builder validates against
    pub fn registry(&self) -> &Arc<DeclarationRegistry> {
        &self.registry
    }

    /// Add one entry to a set parameter
    ///
    /// Duplicate entries are accepted and collapse when the store is built.
    pub fn bind_set_entry(&mut self, parameter: &str, value: impl Into<String>) -> Result<&mut Self> {
        let value = value.into();
        let declaration = self.declaration_of_kind(parameter, ParameterKind::Set)?;
        self.registry.parse_literal(declaration, &value)?;
        let id = declaration.id().clone();

        debug!(parameter = %id, value = %value, "Bound set entry");
        self.set_entries.entry(id).or_default().push(value);
        Ok(self)
    }

    /// Bind a scalar parameter; the last call wins
    pub fn bind_value(&mut self, parameter: &str, value: impl Into<String>) -> Result<&mut Self> {
        let value = value.into();
        let declaration = self.declaration_of_kind(parameter, ParameterKind::Scalar)?;
        self.registry.parse_literal(declaration, &value)?;
        let id = declaration.id().clone();

        debug!(parameter = %id, value = %value, "Bound value");
        self.values.insert(id, value);
        Ok(self)
    }

    /// Choose the implementation used when `interface` must be constructed
    pub fn bind_implementation(&mut self, interface: &str, concrete: &str) -> Result<&mut Self> {
        let interface = self.registry.lookup_class(interface)?.name().clone();
        let concrete = self.registry.lookup_class(concrete)?.name().clone();
        if !self
            .registry
            .is_subtype(concrete.as_str(), interface.as_str())
        {
            return Err(Error::IncompatibleImplementation {
                abstract_type: interface,
                concrete_type: concrete,
            });
        }

        debug!(interface = %interface, concrete = %concrete, "Bound implementation");
        self.implementations.insert(interface, concrete);
        Ok(self)
    }

    /// Bind a live instance to a type
    ///
    /// Volatile instances travel with the built store into injectors but are
    /// never serialized. Rebinding the same instance is a no-op; a different
    /// one fails with `AlreadyBound`.
    pub fn bind_volatile_instance(&mut self, type_name: &str, instance: Instance) -> Result<&mut Self> {
        let type_name = self.registry.lookup_class(type_name)?.name().clone();

        if insert_volatile(&mut self.volatile, type_name.clone(), instance)? {
            debug!(type_name = %type_name, "Bound volatile instance");
        }
        Ok(self)
    }

    /// Merge an existing store into this builder
    pub fn add_configuration(&mut self, configuration: &Configuration) -> Result<&mut Self> {
        for (id, value) in configuration.values() {
            self.bind_value(id.as_str(), value)?;
        }
        for (id, entries) in configuration.sets() {
            for entry in entries {
                self.bind_set_entry(id.as_str(), entry.as_str())?;
            }
        }
        for (interface, concrete) in configuration.implementations() {
            self.bind_implementation(interface.as_str(), concrete.as_str())?;
        }
        for (type_name, instance) in configuration.volatile_instances() {
            self.bind_volatile_instance(type_name.as_str(), instance.clone())?;
        }
        Ok(self)
    }

    /// Snapshot the bindings into an immutable store
    ///
    /// The builder can keep being used; the snapshot is unaffected.
    pub fn build(&self) -> Configuration {
        let configuration = Configuration {
            values: self.values.clone(),
            set_entries: self
                .set_entries
                .iter()
                .map(|(id, entries)| (id.clone(), entries.iter().cloned().collect()))
                .collect(),
            implementations: self.implementations.clone(),
            volatile: self.volatile.clone(),
        };
        debug!(
            bindings = configuration.binding_count(),
            volatile = self.volatile.len(),
            "Built configuration"
        );
        configuration
    }

    fn declaration_of_kind(&self, parameter: &str, kind: ParameterKind) -> Result<&ParameterDeclaration> {
        let declaration = self.registry.lookup(parameter)?;
        if declaration.kind() != kind {
            return Err(Error::KindMismatch {
                parameter: declaration.id().clone(),
                expected: declaration.kind(),
                found: kind,
            });
        }
        Ok(declaration)
    }
}
