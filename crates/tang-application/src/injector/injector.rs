//! Injector
//!
//! Resolves a type to an instance by walking its declared dependencies.
//!
//! ```text
//! get_instance(T)
//!   ├─ session cache hit ─────────────► cached instance
//!   ├─ volatile instance ─────────────► caller's instance (cached)
//!   ├─ implementation binding T → C ──► get_instance(C), cached under T and C
//!   └─ constructible T
//!        ├─ Type(D)       ──► get_instance(D)          (cycle / depth checked)
//!        ├─ Parameter(P)  ──► layered stores ▸ defaults
//!        └─ Constructor::construct(args) ──► cached instance
//! ```
//!
//! An injector is one session: it owns its cache exclusively and is driven
//! through `&mut self`. Concurrent callers each use their own injector (see
//! [`Injector::fork`]); stores and the registry are shared read-only.

use super::options::InjectorOptions;
use crate::configuration::{Configuration, LiteralSource, resolve_literals};
use crate::configuration::merge::{insert_volatile, resolve_implementation, resolve_volatile};
use crate::ports::Arguments;
use crate::registry::{DeclarationRegistry, DependencySpec, ParameterDeclaration};
use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tang_domain::error::{Error, Result};
use tang_domain::value_objects::{
    Instance, Literal, ParameterKind, ParameterValue, TypeName, Value, ValueSet,
};
use tracing::{debug, trace};

/// One resolution session over a set of stores
pub struct Injector {
    registry: Arc<DeclarationRegistry>,
    layers: Vec<Arc<Configuration>>,
    volatile: BTreeMap<TypeName, Instance>,
    instances: HashMap<TypeName, Instance>,
    chain: Vec<TypeName>,
    options: InjectorOptions,
}

impl Injector {
    /// Create a session over `stores`, earliest first
    pub fn new(
        registry: Arc<DeclarationRegistry>,
        stores: impl IntoIterator<Item = Arc<Configuration>>,
    ) -> Self {
        let layers: Vec<_> = stores.into_iter().collect();
        debug!(stores = layers.len(), "Created injector");
        Self {
            registry,
            layers,
            volatile: BTreeMap::new(),
            instances: HashMap::new(),
            chain: Vec::new(),
            options: InjectorOptions::default(),
        }
    }

    /// Replace the resolution options
    pub fn with_options(mut self, options: InjectorOptions) -> Self {
        self.options = options;
        self
    }

    /// Registry the injector resolves against
    pub fn registry(&self) -> &Arc<DeclarationRegistry> {
        &self.registry
    }

    /// Bind a live instance for this session only
    ///
    /// Fails with `AlreadyInstantiated` once the session has produced an
    /// instance of the type, and with `AlreadyBound` when this session or one
    /// of its stores already binds a different instance to it.
    pub fn bind_volatile_instance(&mut self, type_name: &str, instance: Instance) -> Result<&mut Self> {
        let type_name = self.registry.lookup_class(type_name)?.name().clone();
        if self.instances.contains_key(&type_name) {
            return Err(Error::AlreadyInstantiated { type_name });
        }
        if resolve_volatile(&self.layers, type_name.as_str())?.is_some_and(|bound| *bound != instance) {
            return Err(Error::AlreadyBound { type_name });
        }
        if insert_volatile(&mut self.volatile, type_name.clone(), instance)? {
            debug!(type_name = %type_name, "Bound session volatile instance");
        }
        Ok(self)
    }

    /// Resolve a type to an instance
    pub fn get_instance(&mut self, type_name: &str) -> Result<Instance> {
        let type_name = TypeName::from(type_name);
        let result = self.resolve_type(&type_name);
        self.chain.clear();
        result
    }

    /// Resolve a type and downcast it to `T`
    pub fn get<T: Any + Send + Sync>(&mut self, type_name: &str) -> Result<Arc<T>> {
        let instance = self.get_instance(type_name)?;
        instance.downcast::<T>().ok_or_else(|| {
            Error::construction(
                instance.type_name(),
                format!("instance is not a {}", std::any::type_name::<T>()),
            )
        })
    }

    /// Resolve a single named parameter
    pub fn parameter_value(&mut self, parameter: &str) -> Result<ParameterValue> {
        let result = self.resolve_parameter(parameter);
        self.chain.clear();
        result
    }

    /// Whether `type_name` could be resolved with the current bindings
    ///
    /// Nothing is constructed; constructors may still fail at resolution time.
    pub fn is_injectable(&self, type_name: &str) -> bool {
        let mut chain = Vec::new();
        self.check_type(type_name, &mut chain)
    }

    /// Start an independent session over the same stores
    ///
    /// Volatile instances bound so far are carried over; the instance cache
    /// starts empty, and later bindings on either session stay private.
    pub fn fork(&self) -> Injector {
        Injector {
            registry: Arc::clone(&self.registry),
            layers: self.layers.clone(),
            volatile: self.volatile.clone(),
            instances: HashMap::new(),
            chain: Vec::new(),
            options: self.options.clone(),
        }
    }

    /// Number of instances cached by this session
    pub fn cached_instances(&self) -> usize {
        self.instances.len()
    }

    fn resolve_type(&mut self, type_name: &TypeName) -> Result<Instance> {
        if let Some(instance) = self.instances.get(type_name) {
            trace!(type_name = %type_name, "Session cache hit");
            return Ok(instance.clone());
        }
        if let Some(instance) = self.volatile_instance(type_name)? {
            debug!(type_name = %type_name, "Using volatile instance");
            self.instances.insert(type_name.clone(), instance.clone());
            return Ok(instance);
        }
        if let Some(position) = self.chain.iter().position(|t| t == type_name) {
            let mut cycle = self.chain[position..].to_vec();
            cycle.push(type_name.clone());
            return Err(Error::CyclicDependency { cycle });
        }
        if self.chain.len() >= self.options.max_resolution_depth {
            return Err(Error::DepthExceeded {
                type_name: type_name.clone(),
                limit: self.options.max_resolution_depth,
            });
        }

        self.chain.push(type_name.clone());
        let result = self.construct(type_name);
        self.chain.pop();

        let instance = result?;
        Ok(self
            .instances
            .entry(type_name.clone())
            .or_insert(instance)
            .clone())
    }

    fn volatile_instance(&self, type_name: &TypeName) -> Result<Option<Instance>> {
        if let Some(instance) = self.volatile.get(type_name) {
            return Ok(Some(instance.clone()));
        }
        Ok(resolve_volatile(&self.layers, type_name.as_str())?.cloned())
    }

    fn construct(&mut self, type_name: &TypeName) -> Result<Instance> {
        let registry = Arc::clone(&self.registry);
        let class = registry.lookup_class(type_name.as_str())?;

        if let Some(concrete) = resolve_implementation(&self.layers, type_name.as_str())
            .filter(|concrete| *concrete != type_name)
            .cloned()
        {
            debug!(interface = %type_name, concrete = %concrete, "Following implementation binding");
            return self.resolve_type(&concrete);
        }

        let Some(constructor) = class.constructor().filter(|_| !class.is_abstract()) else {
            return Err(Error::no_implementation(type_name));
        };

        let mut args = Arguments::new(type_name);
        for dependency in class.dependencies() {
            match dependency {
                DependencySpec::Type(dependency) => {
                    let instance = self.resolve_type(dependency)?;
                    args.insert_instance(dependency, instance);
                }
                DependencySpec::Parameter(parameter) => {
                    let value = self.resolve_parameter(parameter.as_str())?;
                    args.insert_parameter(parameter, value);
                }
            }
        }

        debug!(type_name = %type_name, "Constructing instance");
        constructor.construct(&args)
    }

    fn resolve_parameter(&mut self, parameter: &str) -> Result<ParameterValue> {
        let registry = Arc::clone(&self.registry);
        let declaration = registry.lookup(parameter)?;
        let resolved = resolve_literals(&self.layers, declaration);
        trace!(parameter, source = ?resolved.source, "Resolved parameter literals");

        match declaration.kind() {
            ParameterKind::Set => {
                let mut set = ValueSet::new();
                for literal in &resolved.literals {
                    set.insert(self.literal_value(declaration, literal)?);
                }
                Ok(ParameterValue::Set(set))
            }
            ParameterKind::Scalar => {
                let literal = resolved
                    .literals
                    .first()
                    .ok_or_else(|| Error::UnboundParameter {
                        parameter: declaration.id().clone(),
                    })?;
                Ok(ParameterValue::Scalar(self.literal_value(declaration, literal)?))
            }
        }
    }

    fn literal_value(&mut self, declaration: &ParameterDeclaration, literal: &str) -> Result<Value> {
        match self.registry.parse_literal(declaration, literal)? {
            Literal::Value(value) => Ok(value),
            Literal::Type(type_name) => Ok(Value::Instance(self.resolve_type(&type_name)?)),
        }
    }

    fn check_type(&self, type_name: &str, chain: &mut Vec<String>) -> bool {
        if self.instances.contains_key(type_name)
            || self.volatile.contains_key(type_name)
            || matches!(resolve_volatile(&self.layers, type_name), Ok(Some(_)))
        {
            return true;
        }
        if chain.iter().any(|t| t == type_name) || chain.len() >= self.options.max_resolution_depth {
            return false;
        }
        let Ok(class) = self.registry.lookup_class(type_name) else {
            return false;
        };

        chain.push(type_name.to_string());
        let injectable = match resolve_implementation(&self.layers, type_name) {
            Some(concrete) if concrete.as_str() != type_name => self.check_type(concrete.as_str(), chain),
            _ => {
                class.is_constructible()
                    && class.dependencies().iter().all(|dependency| match dependency {
                        DependencySpec::Type(dependency) => self.check_type(dependency.as_str(), chain),
                        DependencySpec::Parameter(parameter) => self.check_parameter(parameter.as_str(), chain),
                    })
            }
        };
        chain.pop();
        injectable
    }

    fn check_parameter(&self, parameter: &str, chain: &mut Vec<String>) -> bool {
        let Ok(declaration) = self.registry.lookup(parameter) else {
            return false;
        };
        let resolved = resolve_literals(&self.layers, declaration);
        if declaration.kind() == ParameterKind::Scalar && resolved.source == LiteralSource::Unbound {
            return false;
        }
        resolved.literals.iter().all(|literal| {
            match self.registry.parse_literal(declaration, literal) {
                Ok(Literal::Value(_)) => true,
                Ok(Literal::Type(type_name)) => self.check_type(type_name.as_str(), chain),
                Err(_) => false,
            }
        })
    }
}

impl std::fmt::Debug for Injector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Injector")
            .field("stores", &self.layers.len())
            .field("volatile", &self.volatile.keys().collect::<Vec<_>>())
            .field("cached_instances", &self.instances.len())
            .field("options", &self.options)
            .finish()
    }
}
