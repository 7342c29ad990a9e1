//! Binding Store
//!
//! An immutable snapshot of explicit bindings. Stores are produced by
//! [`ConfigurationBuilder::build`](super::ConfigurationBuilder::build) and
//! never change afterwards, so they can be shared through `Arc` by any number
//! of injector sessions.

use super::merge::insert_volatile;
use std::collections::{BTreeMap, BTreeSet};
use tang_domain::error::Result;
use tang_domain::value_objects::{Instance, ParameterId, TypeName};

/// Immutable set of bindings
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    pub(crate) values: BTreeMap<ParameterId, String>,
    pub(crate) set_entries: BTreeMap<ParameterId, BTreeSet<String>>,
    pub(crate) implementations: BTreeMap<TypeName, TypeName>,
    pub(crate) volatile: BTreeMap<TypeName, Instance>,
}

impl Configuration {
    /// A store with no bindings
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scalar literal bound to a parameter
    pub fn value(&self, parameter: &str) -> Option<&str> {
        self.values.get(parameter).map(String::as_str)
    }

    /// Set-entry literals bound to a parameter
    pub fn set_entries(&self, parameter: &str) -> Option<&BTreeSet<String>> {
        self.set_entries.get(parameter).filter(|entries| !entries.is_empty())
    }

    /// Concrete type bound to an interface
    pub fn implementation(&self, interface: &str) -> Option<&TypeName> {
        self.implementations.get(interface)
    }

    /// Volatile instance bound to a type
    pub fn volatile_instance(&self, type_name: &str) -> Option<&Instance> {
        self.volatile.get(type_name)
    }

    /// All scalar bindings, in canonical order
    pub fn values(&self) -> impl Iterator<Item = (&ParameterId, &str)> {
        self.values.iter().map(|(id, value)| (id, value.as_str()))
    }

    /// All set bindings, in canonical order
    pub fn sets(&self) -> impl Iterator<Item = (&ParameterId, &BTreeSet<String>)> {
        self.set_entries.iter()
    }

    /// All implementation bindings, in canonical order
    pub fn implementations(&self) -> impl Iterator<Item = (&TypeName, &TypeName)> {
        self.implementations.iter()
    }

    /// All volatile instances
    pub fn volatile_instances(&self) -> impl Iterator<Item = (&TypeName, &Instance)> {
        self.volatile.iter()
    }

    /// Number of serializable bindings (set entries count individually)
    pub fn binding_count(&self) -> usize {
        self.values.len()
            + self.set_entries.values().map(BTreeSet::len).sum::<usize>()
            + self.implementations.len()
    }

    /// Whether the store binds nothing at all
    pub fn is_empty(&self) -> bool {
        self.binding_count() == 0 && self.volatile.is_empty()
    }

    /// Layer `later` over this store
    ///
    /// Set entries are unioned; scalars and implementations bound in `later`
    /// replace the ones bound here. Volatile instances are not merge-able:
    /// a different instance for a type already bound fails with
    /// `AlreadyBound`.
    pub fn merge(&self, later: &Configuration) -> Result<Configuration> {
        let mut merged = self.clone();
        merged.absorb(later)?;
        Ok(merged)
    }

    pub(crate) fn absorb(&mut self, later: &Configuration) -> Result<()> {
        for (id, value) in &later.values {
            self.values.insert(id.clone(), value.clone());
        }
        for (id, entries) in &later.set_entries {
            self.set_entries
                .entry(id.clone())
                .or_default()
                .extend(entries.iter().cloned());
        }
        for (interface, concrete) in &later.implementations {
            self.implementations
                .insert(interface.clone(), concrete.clone());
        }
        for (type_name, instance) in &later.volatile {
            insert_volatile(&mut self.volatile, type_name.clone(), instance.clone())?;
        }
        Ok(())
    }
}
