//! Resolved parameter values

use super::ids::TypeName;
use super::instance::Instance;
use super::kind::ElementType;

/// One resolved element of a named parameter
#[derive(Debug, Clone)]
pub enum Value {
    /// Text literal
    String(String),
    /// Integer literal
    Integer(i64),
    /// Float literal
    Float(f64),
    /// Boolean literal
    Boolean(bool),
    /// Instance resolved from a type-valued literal
    Instance(Instance),
}

impl Value {
    /// Borrow the text, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer, if this is an integer value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The float, if this is a float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The boolean, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the instance, if this is an instance value
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Self::Instance(i) => Some(i),
            _ => None,
        }
    }
}

// Floats compare by bit pattern so that set membership is reflexive.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Instance(a), Self::Instance(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Instance> for Value {
    fn from(i: Instance) -> Self {
        Self::Instance(i)
    }
}

/// A set of values with set semantics
///
/// Insertion order is kept only so iteration is deterministic; duplicates
/// collapse on insert and equality ignores order.
///
/// # Example
///
/// ```
/// use tang_domain::value_objects::ValueSet;
///
/// let a: ValueSet = ["one", "two", "two"].into_iter().collect();
/// let b: ValueSet = ["two", "one"].into_iter().collect();
/// assert_eq!(a.len(), 2);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValueSet {
    values: Vec<Value>,
}

impl ValueSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning `false` if it was already a member
    pub fn insert(&mut self, value: Value) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Membership test
    pub fn contains(&self, value: &Value) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Number of distinct members
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the members
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Collect the string members; `None` if any member is not a string
    pub fn strings(&self) -> Option<Vec<&str>> {
        self.values.iter().map(Value::as_str).collect()
    }

    /// Collect the instance members; `None` if any member is not an instance
    pub fn instances(&self) -> Option<Vec<&Instance>> {
        self.values.iter().map(Value::as_instance).collect()
    }
}

impl PartialEq for ValueSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.values.iter().all(|v| other.contains(v))
    }
}

impl Eq for ValueSet {}

impl<V: Into<Value>> FromIterator<V> for ValueSet {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value.into());
        }
        set
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for ValueSet {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// Fully resolved value of a named parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    /// Value of a scalar parameter
    Scalar(Value),
    /// Members of a set parameter
    Set(ValueSet),
}

impl ParameterValue {
    /// Borrow the scalar value
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(v) => Some(v),
            Self::Set(_) => None,
        }
    }

    /// Borrow the set members
    pub fn as_set(&self) -> Option<&ValueSet> {
        match self {
            Self::Set(s) => Some(s),
            Self::Scalar(_) => None,
        }
    }
}

/// A literal after validation against its element type
///
/// Type-valued literals stay names until the injector resolves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Literal that is already a value
    Value(Value),
    /// Literal naming a type to instantiate
    Type(TypeName),
}

impl ElementType {
    /// Parse a literal according to this element type
    ///
    /// Subtyping of type-valued literals is checked by the registry, which
    /// knows the class hierarchy; here only the name itself is validated.
    ///
    /// # Example
    ///
    /// ```
    /// use tang_domain::value_objects::{ElementType, Literal, Value};
    ///
    /// assert_eq!(ElementType::Integer.parse("42"), Ok(Literal::Value(Value::Integer(42))));
    /// assert!(ElementType::Boolean.parse("yes").is_err());
    /// ```
    pub fn parse(&self, literal: &str) -> std::result::Result<Literal, String> {
        match self {
            Self::String => Ok(Literal::Value(Value::String(literal.to_string()))),
            Self::Integer => literal
                .parse::<i64>()
                .map(|i| Literal::Value(Value::Integer(i)))
                .map_err(|e| format!("expected an integer ({e})")),
            Self::Float => literal
                .parse::<f64>()
                .map(|f| Literal::Value(Value::Float(f)))
                .map_err(|e| format!("expected a float ({e})")),
            Self::Boolean => match literal {
                "true" => Ok(Literal::Value(Value::Boolean(true))),
                "false" => Ok(Literal::Value(Value::Boolean(false))),
                _ => Err("expected 'true' or 'false'".to_string()),
            },
            Self::Type(_) => {
                let name = TypeName::from(literal);
                if name.is_valid() {
                    Ok(Literal::Type(name))
                } else {
                    Err("expected a type name".to_string())
                }
            }
        }
    }
}
