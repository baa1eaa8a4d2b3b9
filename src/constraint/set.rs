//! Deduplicated constraint container.

use super::types::{Constraint, ConstraintRef};
use crate::error::Result;
use crate::value::Value;
use std::collections::HashSet;

/// An unordered set of unique constraints.
///
/// Duplicates (by equality) are absorbed on insert and removing an absent
/// constraint is a no-op. Iteration order carries no meaning.
///
/// # Examples
///
/// ```
/// use u_probgen::{ConstraintSet, Parity, Range};
///
/// let mut set = ConstraintSet::from(Range::new(0, 9));
/// set.add(Range::new(0, 9));
/// set.add(Parity::Even);
/// assert_eq!(set.len(), 2);
///
/// set.remove(Range::new(0, 100));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    constraints: HashSet<ConstraintRef>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one constraint.
    pub fn add(&mut self, constraint: impl Into<ConstraintRef>) {
        self.constraints.insert(constraint.into());
    }

    /// Inserts every constraint yielded by `constraints`.
    pub fn add_many<I>(&mut self, constraints: I)
    where
        I: IntoIterator,
        I::Item: Into<ConstraintRef>,
    {
        self.constraints
            .extend(constraints.into_iter().map(Into::into));
    }

    /// Removes one constraint if present.
    pub fn remove(&mut self, constraint: impl Into<ConstraintRef>) {
        self.constraints.remove(&constraint.into());
    }

    /// Removes every listed constraint that is present.
    pub fn remove_many<I>(&mut self, constraints: I)
    where
        I: IntoIterator,
        I::Item: Into<ConstraintRef>,
    {
        for constraint in constraints {
            self.constraints.remove(&constraint.into());
        }
    }

    pub fn clear(&mut self) {
        self.constraints.clear();
    }

    /// Snapshot of the current constraints.
    pub fn constraints(&self) -> Vec<ConstraintRef> {
        self.constraints.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConstraintRef> {
        self.constraints.iter()
    }

    pub fn contains(&self, constraint: &ConstraintRef) -> bool {
        self.constraints.contains(constraint)
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Evaluates `value` against every constraint, stopping at the first
    /// violation.
    pub fn check(&self, value: &Value) -> Result<()> {
        self.constraints.iter().try_for_each(|c| c.check(value))
    }
}

impl<C: Constraint> From<C> for ConstraintSet {
    fn from(constraint: C) -> Self {
        let mut set = Self::new();
        set.add(constraint);
        set
    }
}

impl FromIterator<ConstraintRef> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = ConstraintRef>>(iter: I) -> Self {
        Self {
            constraints: iter.into_iter().collect(),
        }
    }
}

impl Extend<ConstraintRef> for ConstraintSet {
    fn extend<I: IntoIterator<Item = ConstraintRef>>(&mut self, iter: I) {
        self.add_many(iter);
    }
}
