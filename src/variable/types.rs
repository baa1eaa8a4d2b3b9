//! Constraint-guarded variables.

use crate::constraint::{ConstraintRef, ConstraintSet};
use crate::error::{Error, Result};
use crate::value::Value;
use tracing::trace;

/// A named slot holding one value, guarded by a [`ConstraintSet`].
///
/// Whenever the variable is bound, its binding satisfies every constraint in
/// its set. Both [`bind`](Variable::bind) and
/// [`constrain`](Variable::constrain) are atomic: on failure the variable is
/// left exactly as it was.
///
/// # Examples
///
/// ```
/// use u_probgen::{Error, Range, Value, Variable};
///
/// let mut x = Variable::constrained("x", "digit", [Range::new(0, 9)]);
/// x.bind(5)?;
/// assert_eq!(x.binding(), Some(Value::Int(5)));
///
/// assert!(matches!(x.bind(15), Err(Error::Validation { .. })));
/// assert_eq!(x.binding(), Some(Value::Int(5)));
///
/// // Narrowing the domain below the current value is rejected.
/// assert!(x.constrain([Range::new(0, 4)]).is_err());
/// assert_eq!(x.constraints().len(), 1);
/// # Ok::<(), u_probgen::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    description: String,
    constraints: ConstraintSet,
    binding: Option<Value>,
}

impl Variable {
    /// Creates an unbound, unconstrained variable.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            constraints: ConstraintSet::new(),
            binding: None,
        }
    }

    /// Creates an unbound variable guarded by `constraints`.
    pub fn constrained<I>(
        name: impl Into<String>,
        description: impl Into<String>,
        constraints: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ConstraintRef>,
    {
        let mut var = Self::new(name, description);
        var.constraints.add_many(constraints);
        var
    }

    /// Binds an initial value, consuming the variable.
    pub fn with_binding(mut self, value: impl Into<Value>) -> Result<Self> {
        self.bind(value)?;
        Ok(self)
    }

    pub(super) fn bound_unchecked(
        name: impl Into<String>,
        description: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            binding: Some(value),
            ..Self::new(name, description)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Snapshot of the constraints guarding this variable.
    pub fn constraints(&self) -> Vec<ConstraintRef> {
        self.constraints.constraints()
    }

    pub fn constraint_set(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Copy of the current binding, `None` when unbound.
    pub fn binding(&self) -> Option<Value> {
        self.binding.clone()
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Copy of the current binding, or [`Error::Precondition`] when unbound.
    pub fn require_binding(&self) -> Result<Value> {
        self.binding
            .clone()
            .ok_or_else(|| Error::Precondition(format!("variable `{}` is unbound", self.name)))
    }

    /// Validates `value` against every constraint and replaces the binding.
    ///
    /// On the first violation the previous binding is kept and the
    /// violation is returned as [`Error::Validation`].
    pub fn bind(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if let Err(err) = self.constraints.check(&value) {
            trace!(variable = %self.name, %value, "binding rejected");
            return Err(err);
        }
        self.binding = Some(value);
        Ok(())
    }

    /// Like [`bind`](Variable::bind), but `None` clears the binding without
    /// validation.
    pub fn bind_optional(&mut self, value: Option<Value>) -> Result<()> {
        match value {
            Some(value) => self.bind(value),
            None => {
                self.unbind();
                Ok(())
            }
        }
    }

    /// Clears the binding.
    pub fn unbind(&mut self) {
        self.binding = None;
    }

    /// Adds constraints and re-validates the current binding.
    ///
    /// Takes any iterable of constraints; pass a single one as `[c]`.
    /// If the binding violates the augmented set, the addition is rejected:
    /// both the constraint set and the binding stay unchanged.
    pub fn constrain<I>(&mut self, constraints: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<ConstraintRef>,
    {
        let mut augmented = self.constraints.clone();
        augmented.add_many(constraints);
        if let Some(value) = &self.binding {
            if let Err(err) = augmented.check(value) {
                trace!(variable = %self.name, %value, "constraint rejected");
                return Err(err);
            }
        }
        self.constraints = augmented;
        Ok(())
    }

    /// Removes constraints, given as an iterable like
    /// [`constrain`](Variable::constrain). Never re-validates, since removal
    /// only relaxes.
    pub fn unconstrain<I>(&mut self, constraints: I)
    where
        I: IntoIterator,
        I::Item: Into<ConstraintRef>,
    {
        self.constraints.remove_many(constraints);
    }
}
