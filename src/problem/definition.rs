//! Shared problem state: identity, description and ordered variables.

use crate::error::{Error, Result};
use crate::value::Value;
use crate::variable::{Domain, Variable, SOLUTION_NAME};
use rand::Rng;
use std::collections::HashSet;

/// Identity and variables of a problem.
///
/// Concrete problems embed a `Definition` and expose it through
/// [`Problem::definition`](super::Problem::definition). Construction
/// enforces a positive id and pairwise-distinct, non-reserved variable
/// names; variables can be rebound but never renamed, added or removed, so
/// the invariant holds for the lifetime of the value.
///
/// # Examples
///
/// ```
/// use u_probgen::{Definition, Range, Variable};
///
/// let def = Definition::new(
///     1,
///     "Sum of multiples",
///     vec![
///         Variable::constrained("a", "first divisor", [Range::new(2, 10)]),
///         Variable::new("limit", "exclusive upper bound"),
///     ],
/// )?;
/// assert_eq!(def.variable("a").map(|v| v.description()), Some("first divisor"));
///
/// let dup = Definition::new(1, "bad", vec![Variable::new("a", ""), Variable::new("a", "")]);
/// assert!(dup.is_err());
/// # Ok::<(), u_probgen::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    id: u32,
    description: String,
    variables: Vec<Variable>,
}

impl Definition {
    /// Validates and assembles a definition.
    pub fn new(id: u32, description: impl Into<String>, variables: Vec<Variable>) -> Result<Self> {
        validate_variables(id, &variables)?;
        Ok(Self {
            id,
            description: description.into(),
            variables,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Variables in declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Mutable access for rebinding. The slice cannot grow or shrink.
    pub fn variables_mut(&mut self) -> &mut [Variable] {
        &mut self.variables
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name() == name)
    }

    pub fn variable_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.variables.iter_mut().find(|v| v.name() == name)
    }

    /// Copy of the named variable's binding.
    ///
    /// Fails with [`Error::Precondition`] when the variable is missing or
    /// unbound.
    pub fn value(&self, name: &str) -> Result<Value> {
        self.variable(name)
            .ok_or_else(|| Error::Precondition(format!("no variable named `{name}`")))?
            .require_binding()
    }

    /// Integer binding of the named variable.
    pub fn int(&self, name: &str) -> Result<i64> {
        let value = self.value(name)?;
        value.as_int().ok_or_else(|| {
            Error::Precondition(format!("variable `{name}` is bound to non-integer {value}"))
        })
    }

    /// Fails with [`Error::Precondition`] naming the first unbound variable.
    pub fn require_bound(&self) -> Result<()> {
        self.variables
            .iter()
            .try_for_each(|v| v.require_binding().map(drop))
    }

    /// Returns an independent copy with every variable rebound from the
    /// domain at the same position.
    pub fn randomized<R: Rng>(
        &self,
        domains: &[Domain],
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<Self> {
        if domains.len() != self.variables.len() {
            return Err(Error::InvalidProblem(format!(
                "{} domains for {} variables",
                domains.len(),
                self.variables.len()
            )));
        }
        let mut instance = self.clone();
        for (var, domain) in instance.variables.iter_mut().zip(domains) {
            var.bind_random(domain, rng, max_attempts)?;
        }
        Ok(instance)
    }
}

/// Checks the problem invariants: positive id and unique, non-empty,
/// non-reserved variable names.
pub fn validate_variables(id: u32, variables: &[Variable]) -> Result<()> {
    if id == 0 {
        return Err(Error::InvalidProblem("problem id must be positive".into()));
    }
    let mut seen = HashSet::with_capacity(variables.len());
    for var in variables {
        let name = var.name();
        if name.is_empty() {
            return Err(Error::InvalidProblem("variable name must not be empty".into()));
        }
        if name == SOLUTION_NAME {
            return Err(Error::InvalidProblem(format!(
                "`{SOLUTION_NAME}` is reserved for the solution column"
            )));
        }
        if !seen.insert(name) {
            return Err(Error::InvalidProblem(format!("duplicate variable `{name}`")));
        }
    }
    Ok(())
}
