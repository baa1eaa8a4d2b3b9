//! Problem output.

use super::types::Variable;
use crate::constraint::ConstraintRef;
use crate::error::{Error, Result};
use crate::value::Value;

/// Reserved name of the solution slot and of the solution column in
/// generated batches. Problem variables may not use it.
pub const SOLUTION_NAME: &str = "solution";

/// The computed result of a problem.
///
/// A solution is a variable that is always bound and never constrained:
/// it reports a result and cannot be narrowed afterwards.
///
/// # Examples
///
/// ```
/// use u_probgen::{Error, Range, Solution, Value};
///
/// let mut s = Solution::new(233_168, "sum of multiples of 3 or 5 below 1000");
/// assert_eq!(s.name(), "solution");
/// assert_eq!(s.value(), Value::Int(233_168));
/// assert!(matches!(
///     s.constrain([Range::new(0, 10)]),
///     Err(Error::UnsupportedOperation(_))
/// ));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    description: String,
    value: Value,
}

impl Solution {
    /// Creates a solution holding `value`. No constraint applies.
    pub fn new(value: impl Into<Value>, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        SOLUTION_NAME
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Copy of the solution value.
    pub fn value(&self) -> Value {
        self.value.clone()
    }

    /// Always empty.
    pub fn constraints(&self) -> Vec<ConstraintRef> {
        Vec::new()
    }

    /// The solution as a plain, unconstrained variable.
    pub fn to_variable(&self) -> Variable {
        Variable::bound_unchecked(SOLUTION_NAME, self.description.clone(), self.value.clone())
    }

    /// Solutions cannot be constrained; always returns
    /// [`Error::UnsupportedOperation`]. Accepts the same iterable argument
    /// as [`Variable::constrain`].
    pub fn constrain<I>(&mut self, _constraints: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<ConstraintRef>,
    {
        Err(Error::UnsupportedOperation(
            "a solution cannot be constrained".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{OfKind, Parity};
    use crate::value::ValueKind;

    #[test]
    fn test_accepts_any_value() {
        let s = Solution::new(vec![1.5, -2.0], "roots");
        assert_eq!(s.value(), Value::from(vec![1.5, -2.0]));
        assert!(s.constraints().is_empty());
        let var = s.to_variable();
        assert_eq!(var.name(), SOLUTION_NAME);
        assert!(var.constraints().is_empty());
        assert_eq!(var.binding(), Some(s.value()));
    }

    #[test]
    fn test_constrain_always_unsupported() {
        let mut s = Solution::new(4, "four");
        assert!(matches!(
            s.constrain([Parity::Even]),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(matches!(
            s.constrain(Vec::<ConstraintRef>::new()),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(matches!(
            s.constrain([OfKind(ValueKind::Int)]),
            Err(Error::UnsupportedOperation(_))
        ));
        assert_eq!(s.value(), Value::Int(4));
    }
}
