//! Layered resolution of bindings
//!
//! An injector consults several stores at once, earliest first, with the
//! declaration defaults underneath all of them:
//!
//! ```text
//!   store N   ─┐  scalars: latest explicit binding wins
//!   ...        ├─ sets:    union of explicit entries across stores
//!   store 1   ─┘
//!   defaults  ──  used only when no store binds the parameter at all
//! ```
//!
//! An explicit set binding replaces the declared default, it never adds to
//! it. A store that binds nothing for a set parameter does not clear the
//! default.
//!
//! Volatile instances do not merge: two stores binding different instances
//! to the same type conflict with `AlreadyBound`.

use super::store::Configuration;
use crate::registry::ParameterDeclaration;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tang_domain::error::{Error, Result};
use tang_domain::value_objects::{Instance, ParameterKind, TypeName};

/// Where the literals of a resolved parameter came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralSource {
    /// At least one store bound the parameter
    Explicit,
    /// The declaration default applied
    Default,
    /// Nothing bound and no default declared
    Unbound,
}

/// Literals a parameter resolves to, before element conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLiterals {
    /// Origin of the literals
    pub source: LiteralSource,
    /// The literals; one at most for scalars, deduplicated for sets
    pub literals: Vec<String>,
}

/// Resolve the literals of a parameter against layered stores
pub fn resolve_literals(layers: &[Arc<Configuration>], declaration: &ParameterDeclaration) -> ResolvedLiterals {
    match declaration.kind() {
        ParameterKind::Scalar => resolve_scalar(layers, declaration),
        ParameterKind::Set => resolve_set(layers, declaration),
    }
}

fn resolve_scalar(layers: &[Arc<Configuration>], declaration: &ParameterDeclaration) -> ResolvedLiterals {
    let id = declaration.id().as_str();
    if let Some(value) = layers.iter().rev().find_map(|layer| layer.value(id)) {
        return ResolvedLiterals {
            source: LiteralSource::Explicit,
            literals: vec![value.to_string()],
        };
    }
    from_defaults(declaration)
}

fn resolve_set(layers: &[Arc<Configuration>], declaration: &ParameterDeclaration) -> ResolvedLiterals {
    let id = declaration.id().as_str();
    let explicit: BTreeSet<&str> = layers
        .iter()
        .filter_map(|layer| layer.set_entries(id))
        .flatten()
        .map(String::as_str)
        .collect();

    if explicit.is_empty() {
        return from_defaults(declaration);
    }
    ResolvedLiterals {
        source: LiteralSource::Explicit,
        literals: explicit.into_iter().map(str::to_string).collect(),
    }
}

fn from_defaults(declaration: &ParameterDeclaration) -> ResolvedLiterals {
    if !declaration.has_default() {
        return ResolvedLiterals {
            source: LiteralSource::Unbound,
            literals: Vec::new(),
        };
    }
    let mut seen = BTreeSet::new();
    ResolvedLiterals {
        source: LiteralSource::Default,
        literals: declaration
            .defaults()
            .iter()
            .filter(|literal| seen.insert(literal.as_str()))
            .cloned()
            .collect(),
    }
}

/// Implementation bound to an interface; the latest store wins
pub fn resolve_implementation<'a>(layers: &'a [Arc<Configuration>], interface: &str) -> Option<&'a TypeName> {
    layers
        .iter()
        .rev()
        .find_map(|layer| layer.implementation(interface))
}

/// Volatile instance bound to a type by any of the stores
pub fn resolve_volatile<'a>(layers: &'a [Arc<Configuration>], type_name: &str) -> Result<Option<&'a Instance>> {
    let mut found: Option<&Instance> = None;
    for instance in layers.iter().filter_map(|layer| layer.volatile_instance(type_name)) {
        match found {
            Some(bound) if bound != instance => {
                return Err(Error::AlreadyBound {
                    type_name: TypeName::from(type_name),
                });
            }
            _ => found = Some(instance),
        }
    }
    Ok(found)
}

/// Record a volatile instance, rejecting a different one for the same type
///
/// Returns `false` when that exact instance was already bound.
pub(crate) fn insert_volatile(
    bound: &mut BTreeMap<TypeName, Instance>,
    type_name: TypeName,
    instance: Instance,
) -> Result<bool> {
    match bound.entry(type_name) {
        Entry::Occupied(existing) if *existing.get() == instance => Ok(false),
        Entry::Occupied(existing) => Err(Error::AlreadyBound {
            type_name: existing.key().clone(),
        }),
        Entry::Vacant(slot) => {
            slot.insert(instance);
            Ok(true)
        }
    }
}
