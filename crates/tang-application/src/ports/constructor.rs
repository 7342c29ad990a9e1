//! Constructor port
//!
//! The container never introspects types. A class declaration carries a
//! [`Constructor`] that receives the already resolved dependencies as
//! [`Arguments`] and builds the instance.
//!
//! ```text
//! Injector ──resolves deps──► Arguments ──► Constructor::construct ──► Instance
//! ```

use std::any::Any;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;
use tang_domain::error::{Error, Result};
use tang_domain::value_objects::{Instance, ParameterId, ParameterValue, TypeName, Value, ValueSet};

/// Builds an instance of a declared class from its resolved dependencies
pub trait Constructor: Send + Sync {
    /// Construct the instance; the returned instance should carry
    /// `args.type_name()`
    fn construct(&self, args: &Arguments) -> Result<Instance>;
}

/// Adapter turning a typed closure into a [`Constructor`]
pub struct FnConstructor<F, T> {
    build: F,
    _output: PhantomData<fn() -> T>,
}

impl<F, T> FnConstructor<F, T>
where
    F: Fn(&Arguments) -> Result<T> + Send + Sync,
    T: Any + Send + Sync,
{
    /// Wrap a closure returning the constructed value
    pub fn new(build: F) -> Self {
        Self {
            build,
            _output: PhantomData,
        }
    }
}

impl<F, T> Constructor for FnConstructor<F, T>
where
    F: Fn(&Arguments) -> Result<T> + Send + Sync,
    T: Any + Send + Sync,
{
    fn construct(&self, args: &Arguments) -> Result<Instance> {
        let value = (self.build)(args)?;
        Ok(Instance::new(args.type_name().clone(), value))
    }
}

/// Resolved dependencies of one constructor call
///
/// # Example
///
/// ```
/// use tang_application::ports::Arguments;
/// use tang_domain::value_objects::{ParameterValue, Value};
///
/// let mut args = Arguments::new("Server");
/// args.insert_parameter("com.example.Port", ParameterValue::Scalar(Value::Integer(8080)));
/// assert_eq!(args.scalar("com.example.Port").unwrap().as_integer(), Some(8080));
/// assert!(args.scalar("com.example.Host").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Arguments {
    type_name: TypeName,
    instances: BTreeMap<TypeName, Instance>,
    parameters: BTreeMap<ParameterId, ParameterValue>,
}

impl Arguments {
    /// Create an empty argument list for constructing `type_name`
    pub fn new(type_name: impl Into<TypeName>) -> Self {
        Self {
            type_name: type_name.into(),
            instances: BTreeMap::new(),
            parameters: BTreeMap::new(),
        }
    }

    /// Type being constructed
    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    /// Record a resolved type dependency
    pub fn insert_instance(&mut self, dependency: impl Into<TypeName>, instance: Instance) {
        self.instances.insert(dependency.into(), instance);
    }

    /// Record a resolved named parameter
    pub fn insert_parameter(&mut self, parameter: impl Into<ParameterId>, value: ParameterValue) {
        self.parameters.insert(parameter.into(), value);
    }

    /// Instance resolved for a type dependency
    pub fn instance(&self, dependency: &str) -> Result<&Instance> {
        self.instances.get(dependency).ok_or_else(|| {
            Error::construction(
                &self.type_name,
                format!("{dependency} is not a declared dependency"),
            )
        })
    }

    /// Typed handle to a type dependency
    pub fn get<T: Any + Send + Sync>(&self, dependency: &str) -> Result<Arc<T>> {
        self.instance(dependency)?.downcast::<T>().ok_or_else(|| {
            Error::construction(
                &self.type_name,
                format!(
                    "dependency {dependency} is not a {}",
                    std::any::type_name::<T>()
                ),
            )
        })
    }

    /// Resolved value of a named parameter
    pub fn parameter(&self, parameter: &str) -> Result<&ParameterValue> {
        self.parameters.get(parameter).ok_or_else(|| {
            Error::construction(
                &self.type_name,
                format!("{parameter} is not a declared parameter dependency"),
            )
        })
    }

    /// Value of a scalar parameter
    pub fn scalar(&self, parameter: &str) -> Result<&Value> {
        self.parameter(parameter)?.as_scalar().ok_or_else(|| {
            Error::construction(&self.type_name, format!("{parameter} is not a scalar"))
        })
    }

    /// Members of a set parameter
    pub fn set(&self, parameter: &str) -> Result<&ValueSet> {
        self.parameter(parameter)?
            .as_set()
            .ok_or_else(|| Error::construction(&self.type_name, format!("{parameter} is not a set")))
    }
}
