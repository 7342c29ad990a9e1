//! Parameter and class declarations
//!
//! Declarations are the facts a metadata layer would normally discover by
//! reflection. Here they are built explicitly and handed to the
//! [`DeclarationRegistry`](super::DeclarationRegistry).

use crate::ports::{Arguments, Constructor, FnConstructor};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tang_domain::constants::SET_DEFAULT_SEPARATOR;
use tang_domain::error::Result;
use tang_domain::value_objects::{ElementType, ParameterId, ParameterKind, TypeName};

/// Declaration of a named parameter
///
/// # Example
///
/// ```
/// use tang_application::registry::ParameterDeclaration;
/// use tang_domain::value_objects::ElementType;
///
/// let decl = ParameterDeclaration::set("com.example.SetOfNumbers", ElementType::String)
///     .with_default("one, two,three");
/// assert_eq!(decl.defaults(), ["one", "two", "three"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDeclaration {
    id: ParameterId,
    kind: ParameterKind,
    element: ElementType,
    default_literal: Option<String>,
    defaults: Vec<String>,
}

impl ParameterDeclaration {
    /// Declare a parameter of the given kind with no default
    pub fn new(id: impl Into<ParameterId>, kind: ParameterKind, element: ElementType) -> Self {
        Self {
            id: id.into(),
            kind,
            element,
            default_literal: None,
            defaults: Vec::new(),
        }
    }

    /// Declare a scalar parameter
    pub fn scalar(id: impl Into<ParameterId>, element: ElementType) -> Self {
        Self::new(id, ParameterKind::Scalar, element)
    }

    /// Declare a set parameter
    pub fn set(id: impl Into<ParameterId>, element: ElementType) -> Self {
        Self::new(id, ParameterKind::Set, element)
    }

    /// Attach a default literal
    ///
    /// Set defaults are one comma-delimited literal; it is split here, once,
    /// into the ordered element literals.
    pub fn with_default(mut self, literal: impl Into<String>) -> Self {
        let literal = literal.into();
        self.defaults = match self.kind {
            ParameterKind::Scalar => vec![literal.clone()],
            ParameterKind::Set => split_set_literal(&literal),
        };
        self.default_literal = Some(literal);
        self
    }

    /// Parameter identifier
    pub fn id(&self) -> &ParameterId {
        &self.id
    }

    /// Scalar or set
    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// Declared element type
    pub fn element(&self) -> &ElementType {
        &self.element
    }

    /// The default literal exactly as declared
    pub fn default_literal(&self) -> Option<&str> {
        self.default_literal.as_deref()
    }

    /// Default element literals, in declaration order
    pub fn defaults(&self) -> &[String] {
        &self.defaults
    }

    /// Whether a default value was declared
    pub fn has_default(&self) -> bool {
        self.default_literal.is_some()
    }
}

/// Split a set default on commas, trimming each element and dropping empty ones
pub fn split_set_literal(literal: &str) -> Vec<String> {
    literal
        .split(SET_DEFAULT_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// One constructor dependency of a class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencySpec {
    /// Another type, resolved recursively
    Type(TypeName),
    /// A named parameter, resolved from bindings and defaults
    Parameter(ParameterId),
}

/// Declaration of a class or interface
#[derive(Clone)]
pub struct ClassDeclaration {
    name: TypeName,
    is_abstract: bool,
    implements: Vec<TypeName>,
    dependencies: Vec<DependencySpec>,
    constructor: Option<Arc<dyn Constructor>>,
}

impl ClassDeclaration {
    /// Declare a concrete class
    pub fn concrete(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            is_abstract: false,
            implements: Vec::new(),
            dependencies: Vec::new(),
            constructor: None,
        }
    }

    /// Declare an interface or abstract class
    pub fn interface(name: impl Into<TypeName>) -> Self {
        Self {
            is_abstract: true,
            ..Self::concrete(name)
        }
    }

    /// Mark the class as implementing an interface
    pub fn implements(mut self, interface: impl Into<TypeName>) -> Self {
        self.implements.push(interface.into());
        self
    }

    /// Add a type dependency
    pub fn depends_on_type(mut self, type_name: impl Into<TypeName>) -> Self {
        self.dependencies.push(DependencySpec::Type(type_name.into()));
        self
    }

    /// Add a named-parameter dependency
    pub fn depends_on_parameter(mut self, parameter: impl Into<ParameterId>) -> Self {
        self.dependencies
            .push(DependencySpec::Parameter(parameter.into()));
        self
    }

    /// Replace the dependency list
    pub fn with_dependencies(mut self, dependencies: Vec<DependencySpec>) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// Attach a constructor building a `T` from the resolved arguments
    pub fn with_constructor<T, F>(self, build: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&Arguments) -> Result<T> + Send + Sync + 'static,
    {
        self.with_dyn_constructor(Arc::new(FnConstructor::new(build)))
    }

    /// Attach an already boxed constructor
    pub fn with_dyn_constructor(mut self, constructor: Arc<dyn Constructor>) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Class name
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Whether the class is an interface or abstract class
    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Directly implemented interfaces
    pub fn interfaces(&self) -> &[TypeName] {
        &self.implements
    }

    /// Constructor dependencies, in order
    pub fn dependencies(&self) -> &[DependencySpec] {
        &self.dependencies
    }

    /// Constructor, if the class can be built by the injector
    pub fn constructor(&self) -> Option<&Arc<dyn Constructor>> {
        self.constructor.as_ref()
    }

    /// Whether the injector can call a constructor for this class
    pub fn is_constructible(&self) -> bool {
        !self.is_abstract && self.constructor.is_some()
    }

    /// Whether two declarations state the same facts (constructors aside)
    pub(crate) fn same_facts(&self, other: &Self) -> bool {
        self.name == other.name
            && self.is_abstract == other.is_abstract
            && self.implements == other.implements
            && self.dependencies == other.dependencies
    }
}

impl fmt::Debug for ClassDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDeclaration")
            .field("name", &self.name)
            .field("is_abstract", &self.is_abstract)
            .field("implements", &self.implements)
            .field("dependencies", &self.dependencies)
            .field("constructor", &self.constructor.is_some())
            .finish()
    }
}
