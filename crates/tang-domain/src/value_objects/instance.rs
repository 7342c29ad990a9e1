//! Type-erased live objects handed out by the injector

use super::ids::TypeName;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A constructed (or caller-supplied) object, shared by reference
///
/// Instances compare by identity: two handles are equal only when they point
/// at the same allocation. Volatile instances are bound by identity, and a
/// session hands every dependent the very same handle.
///
/// # Example
///
/// ```
/// use tang_domain::value_objects::Instance;
///
/// let answer = Instance::new("Integer", 42_i64);
/// assert_eq!(answer.downcast_ref::<i64>(), Some(&42));
/// assert_eq!(answer, answer.clone());
/// assert_ne!(answer, Instance::new("Integer", 42_i64));
/// ```
#[derive(Clone)]
pub struct Instance {
    type_name: TypeName,
    value: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    /// Wrap a value under the type name it is bound as
    pub fn new<T: Any + Send + Sync>(type_name: impl Into<TypeName>, value: T) -> Self {
        Self {
            type_name: type_name.into(),
            value: Arc::new(value),
        }
    }

    /// Wrap an already shared value without reallocating
    pub fn from_arc<T: Any + Send + Sync>(type_name: impl Into<TypeName>, value: Arc<T>) -> Self {
        Self {
            type_name: type_name.into(),
            value,
        }
    }

    /// Type name the instance was constructed or bound as
    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    /// Borrow the value if it is a `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Get a shared handle to the value if it is a `T`
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.value).downcast::<T>().ok()
    }

    /// Whether both handles refer to the same object
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Instance {}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type_name", &self.type_name)
            .field("ptr", &Arc::as_ptr(&self.value).cast::<()>())
            .finish()
    }
}
