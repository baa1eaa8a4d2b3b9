//! Sum of the even Fibonacci terms up to a limit.

use crate::constraint::Range;
use crate::error::Result;
use crate::problem::{Definition, Problem};
use crate::variable::{Domain, Solution, Variable};
use rand::Rng;

const MAX_LIMIT: i64 = 10_000_000_000;

/// Sum of the even-valued Fibonacci terms (1, 2, 3, 5, ...) not exceeding
/// `limit` (problem 2).
///
/// # Examples
///
/// ```
/// use u_probgen::problems::EvenFibonacciSum;
/// use u_probgen::{Problem, Value};
///
/// let p = EvenFibonacciSum::bound(4_000_000)?;
/// assert_eq!(p.solve()?.value(), Value::Int(4_613_732));
/// # Ok::<(), u_probgen::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EvenFibonacciSum {
    def: Definition,
}

impl EvenFibonacciSum {
    /// Unbound template.
    pub fn new() -> Self {
        let def = Definition::new(
            2,
            "Find the sum of the even-valued Fibonacci terms not exceeding limit.",
            vec![Variable::constrained(
                "limit",
                "inclusive upper bound on the terms",
                [Range::new(1, MAX_LIMIT)],
            )],
        );
        Self {
            def: def.expect("static definition is valid"),
        }
    }

    pub fn bound(limit: i64) -> Result<Self> {
        let mut p = Self::new();
        p.def.variables_mut()[0].bind(limit)?;
        Ok(p)
    }
}

impl Default for EvenFibonacciSum {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for EvenFibonacciSum {
    fn definition(&self) -> &Definition {
        &self.def
    }

    fn solve(&self) -> Result<Solution> {
        let limit = self.def.int("limit")?;
        // every third term is even: E(n) = 4 E(n-1) + E(n-2)
        let (mut prev, mut cur, mut sum) = (0_i64, 2_i64, 0_i64);
        while cur <= limit {
            sum += cur;
            (prev, cur) = (cur, 4 * cur + prev);
        }
        Ok(Solution::new(
            sum,
            format!("sum of even Fibonacci terms up to {limit}"),
        ))
    }

    fn randomize_with<R: Rng>(&self, rng: &mut R, max_attempts: usize) -> Result<Self> {
        Ok(Self {
            def: self
                .def
                .randomized(&[Domain::int(1, MAX_LIMIT)], rng, max_attempts)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn brute_force(limit: i64) -> i64 {
        let (mut a, mut b, mut sum) = (1_i64, 2_i64, 0_i64);
        while b <= limit {
            if b % 2 == 0 {
                sum += b;
            }
            (a, b) = (b, a + b);
        }
        sum
    }

    #[test]
    fn test_small_limits() {
        for (limit, expected) in [(1, 0), (2, 2), (8, 10), (33, 10), (34, 44)] {
            let p = EvenFibonacciSum::bound(limit).unwrap();
            assert_eq!(p.solve().unwrap().value(), Value::Int(expected), "limit {limit}");
        }
    }

    #[test]
    fn test_randomized_matches_brute_force() {
        let template = EvenFibonacciSum::new();
        for seed in 0..20 {
            let p = template.randomize(Some(seed)).unwrap();
            let limit = p.def.int("limit").unwrap();
            assert_eq!(p.solve().unwrap().value(), Value::Int(brute_force(limit)));
        }
    }

    #[test]
    fn test_limit_out_of_range() {
        assert!(EvenFibonacciSum::bound(0).is_err());
        assert!(EvenFibonacciSum::bound(MAX_LIMIT + 1).is_err());
    }
}
