//! Core constraint trait and its type-erased handle.

use crate::error::{Error, Result};
use crate::value::Value;
use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A pass/fail predicate over a single value.
///
/// Identity is value equality: two constraints with the same parameters
/// are the same constraint, so implementors derive `PartialEq`, `Eq` and
/// `Hash` consistently. Evaluation must be deterministic and free of side
/// effects.
///
/// # Examples
///
/// ```
/// use std::fmt;
/// use u_probgen::{Constraint, Value};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Prime;
///
/// impl fmt::Display for Prime {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("Prime")
///     }
/// }
///
/// impl Constraint for Prime {
///     fn evaluate(&self, value: &Value) -> Result<(), String> {
///         let n = value.as_int().ok_or("not an integer")?;
///         if n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0) {
///             Ok(())
///         } else {
///             Err(format!("{n} is not prime"))
///         }
///     }
/// }
///
/// assert!(Prime.evaluate(&Value::Int(7)).is_ok());
/// assert!(Prime.evaluate(&Value::Int(9)).is_err());
/// ```
pub trait Constraint:
    fmt::Debug + fmt::Display + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Checks `value`, returning the reason on failure.
    fn evaluate(&self, value: &Value) -> std::result::Result<(), String>;
}

/// Object-safe view of [`Constraint`] used behind [`ConstraintRef`].
trait ErasedConstraint: fmt::Debug + fmt::Display + Send + Sync {
    fn erased_evaluate(&self, value: &Value) -> std::result::Result<(), String>;
    fn as_any(&self) -> &dyn Any;
    fn erased_eq(&self, other: &dyn ErasedConstraint) -> bool;
    fn erased_hash(&self, state: &mut dyn Hasher);
}

impl<C: Constraint> ErasedConstraint for C {
    fn erased_evaluate(&self, value: &Value) -> std::result::Result<(), String> {
        Constraint::evaluate(self, value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn erased_eq(&self, other: &dyn ErasedConstraint) -> bool {
        other
            .as_any()
            .downcast_ref::<C>()
            .is_some_and(|other| other == self)
    }

    fn erased_hash(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<C>().hash(&mut state);
        self.hash(&mut state);
    }
}

/// Shared, immutable handle to any [`Constraint`].
///
/// Equality and hashing delegate to the wrapped constraint; handles to
/// different constraint types never compare equal. Cloning is cheap and
/// never copies the constraint itself.
#[derive(Clone)]
pub struct ConstraintRef(Arc<dyn ErasedConstraint>);

impl ConstraintRef {
    /// Wraps a constraint.
    pub fn new<C: Constraint>(constraint: C) -> Self {
        Self(Arc::new(constraint))
    }

    /// Evaluates the wrapped constraint.
    pub fn evaluate(&self, value: &Value) -> std::result::Result<(), String> {
        self.0.erased_evaluate(value)
    }

    /// Evaluates and converts a failure into [`Error::Validation`].
    pub fn check(&self, value: &Value) -> Result<()> {
        self.evaluate(value).map_err(|reason| Error::Validation {
            constraint: self.clone(),
            value: value.clone(),
            reason,
        })
    }

    /// Returns the concrete constraint if it has type `C`.
    pub fn downcast_ref<C: Constraint>(&self) -> Option<&C> {
        self.0.as_any().downcast_ref::<C>()
    }
}

impl<C: Constraint> From<C> for ConstraintRef {
    fn from(constraint: C) -> Self {
        Self::new(constraint)
    }
}

impl PartialEq for ConstraintRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.erased_eq(other.0.as_ref())
    }
}

impl Eq for ConstraintRef {}

impl Hash for ConstraintRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.erased_hash(state);
    }
}

impl fmt::Debug for ConstraintRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for ConstraintRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}
