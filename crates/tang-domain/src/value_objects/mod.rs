//! Value objects shared by every layer
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`ParameterId`] | Canonical name of a named parameter |
//! | [`TypeName`] | Canonical name of a class or interface |
//! | [`ParameterKind`] | `Scalar` or `Set` |
//! | [`ElementType`] | How literals of a parameter are parsed |
//! | [`Value`] / [`ValueSet`] / [`ParameterValue`] | Resolved parameter values |
//! | [`Instance`] | Type-erased live object |

pub mod ids;
pub mod instance;
pub mod kind;
pub mod value;

pub use ids::{ParameterId, TypeName};
pub use instance::Instance;
pub use kind::{ElementType, ParameterKind};
pub use value::{Literal, ParameterValue, Value, ValueSet};
