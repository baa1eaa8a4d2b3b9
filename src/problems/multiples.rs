//! Sum of multiples of two divisors below a limit.

use crate::constraint::Range;
use crate::error::Result;
use crate::problem::{Definition, Problem};
use crate::variable::{Domain, Solution, Variable};
use rand::Rng;

/// Largest limit the generator draws.
const MAX_LIMIT: i64 = 100_000;

/// Sum of all natural numbers below `limit` that are multiples of `a` or
/// `b` (problem 1 with its constants lifted into variables).
///
/// # Examples
///
/// ```
/// use u_probgen::problems::MultiplesSum;
/// use u_probgen::{Problem, Value};
///
/// let p = MultiplesSum::bound(3, 5, 1000)?;
/// assert_eq!(p.solve()?.value(), Value::Int(233_168));
/// # Ok::<(), u_probgen::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MultiplesSum {
    def: Definition,
}

impl MultiplesSum {
    /// Unbound template.
    pub fn new() -> Self {
        let variables = vec![
            Variable::constrained("a", "first divisor", [Range::new(2, 20)]),
            Variable::constrained("b", "second divisor", [Range::new(2, 20)]),
            Variable::constrained("limit", "exclusive upper bound", [Range::new(1, MAX_LIMIT)]),
        ];
        let def = Definition::new(
            1,
            "Find the sum of all the multiples of a or b below limit.",
            variables,
        );
        Self {
            def: def.expect("static definition is valid"),
        }
    }

    /// Template with all variables bound.
    pub fn bound(a: i64, b: i64, limit: i64) -> Result<Self> {
        let mut p = Self::new();
        for (var, value) in p.def.variables_mut().iter_mut().zip([a, b, limit]) {
            var.bind(value)?;
        }
        Ok(p)
    }
}

impl Default for MultiplesSum {
    fn default() -> Self {
        Self::new()
    }
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Sum of the positive multiples of `k` below `limit`.
fn multiples_below(k: i64, limit: i64) -> i64 {
    let m = (limit - 1) / k;
    k * m * (m + 1) / 2
}

impl Problem for MultiplesSum {
    fn definition(&self) -> &Definition {
        &self.def
    }

    fn solve(&self) -> Result<Solution> {
        let a = self.def.int("a")?;
        let b = self.def.int("b")?;
        let limit = self.def.int("limit")?;
        let lcm = a / gcd(a, b) * b;
        let sum =
            multiples_below(a, limit) + multiples_below(b, limit) - multiples_below(lcm, limit);
        Ok(Solution::new(
            sum,
            format!("sum of multiples of {a} or {b} below {limit}"),
        ))
    }

    fn randomize_with<R: Rng>(&self, rng: &mut R, max_attempts: usize) -> Result<Self> {
        let domains = [
            Domain::int(2, 20),
            Domain::int(2, 20),
            Domain::int(1, MAX_LIMIT),
        ];
        Ok(Self {
            def: self.def.randomized(&domains, rng, max_attempts)?,
        })
    }
}
