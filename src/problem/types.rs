//! Core trait for parameterized problems.

use super::definition::Definition;
use crate::error::Result;
use crate::random::create_rng;
use crate::value::Value;
use crate::variable::{Solution, Variable, DEFAULT_MAX_ATTEMPTS};
use rand::Rng;

/// URL prefix of the official problem pages.
pub const PROBLEM_URL: &str = "https://projecteuler.net/problem=";

/// A parameterized problem template.
///
/// The user implements solving and randomization; identity, variables and
/// the derived link come from the embedded [`Definition`].
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_probgen::{Definition, Domain, Problem, Range, Result, Solution, Variable};
///
/// #[derive(Clone)]
/// struct Square(Definition);
///
/// impl Problem for Square {
///     fn definition(&self) -> &Definition {
///         &self.0
///     }
///
///     fn solve(&self) -> Result<Solution> {
///         let n = self.0.int("n")?;
///         Ok(Solution::new(n * n, "n squared"))
///     }
///
///     fn randomize_with<R: Rng>(&self, rng: &mut R, max_attempts: usize) -> Result<Self> {
///         let def = self.0.randomized(&[Domain::int(0, 100)], rng, max_attempts)?;
///         Ok(Square(def))
///     }
/// }
///
/// let template = Square(Definition::new(
///     99,
///     "square a number",
///     vec![Variable::constrained("n", "base", [Range::new(1, 12)])],
/// )?);
/// assert!(template.solve().is_err());
///
/// let a = template.randomize(Some(7))?;
/// let b = template.randomize(Some(7))?;
/// assert_eq!(a.bindings(), b.bindings());
/// assert_eq!(template.link(), "https://projecteuler.net/problem=99");
/// # Ok::<(), u_probgen::Error>(())
/// ```
pub trait Problem: Send + Sync {
    /// Identity and variables of this problem.
    fn definition(&self) -> &Definition;

    /// Computes the solution from the current bindings.
    ///
    /// Must fail with [`Error::Precondition`](crate::Error::Precondition)
    /// when a variable is unbound; [`Definition::int`] and
    /// [`Definition::value`] already do.
    fn solve(&self) -> Result<Solution>;

    /// Produces a new, independent instance with every variable bound to a
    /// freshly sampled valid value.
    ///
    /// Each assignment must go through [`Variable::bind`] (directly or via
    /// [`Variable::bind_random`]). Returns
    /// [`Error::Generation`](crate::Error::Generation) when a variable
    /// cannot be satisfied within `max_attempts` samples.
    fn randomize_with<R: Rng>(&self, rng: &mut R, max_attempts: usize) -> Result<Self>
    where
        Self: Sized;

    /// Randomizes from `seed`, or from OS entropy when `None`.
    ///
    /// Identical seeds produce identical bindings.
    fn randomize(&self, seed: Option<u64>) -> Result<Self>
    where
        Self: Sized,
    {
        let mut rng = create_rng(seed);
        self.randomize_with(&mut rng, DEFAULT_MAX_ATTEMPTS)
    }

    fn id(&self) -> u32 {
        self.definition().id()
    }

    fn description(&self) -> &str {
        self.definition().description()
    }

    fn variables(&self) -> &[Variable] {
        self.definition().variables()
    }

    fn variable(&self, name: &str) -> Option<&Variable> {
        self.definition().variable(name)
    }

    /// `(name, binding)` pairs in declaration order.
    fn bindings(&self) -> Vec<(String, Option<Value>)> {
        self.variables()
            .iter()
            .map(|v| (v.name().to_owned(), v.binding()))
            .collect()
    }

    /// Link to the official problem page.
    fn link(&self) -> String {
        format!("{PROBLEM_URL}{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Range;
    use crate::error::Error;
    use crate::variable::Domain;

    #[derive(Debug, Clone)]
    struct Pair(Definition);

    impl Problem for Pair {
        fn definition(&self) -> &Definition {
            &self.0
        }

        fn solve(&self) -> Result<Solution> {
            Ok(Solution::new(self.0.int("x")? + self.0.int("y")?, "x + y"))
        }

        fn randomize_with<R: Rng>(&self, rng: &mut R, max_attempts: usize) -> Result<Self> {
            let domains = [Domain::int(0, 1_000), Domain::int(0, 1_000)];
            Ok(Pair(self.0.randomized(&domains, rng, max_attempts)?))
        }
    }

    fn template() -> Pair {
        Pair(
            Definition::new(
                3,
                "add two numbers",
                vec![
                    Variable::constrained("x", "left", [Range::new(0, 1_000)]),
                    Variable::constrained("y", "right", [Range::new(0, 1_000)]),
                ],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_solve_unbound_is_precondition_error() {
        assert!(matches!(template().solve(), Err(Error::Precondition(_))));
    }

    #[test]
    fn test_same_seed_same_bindings() {
        let t = template();
        let a = t.randomize(Some(42)).unwrap();
        let b = t.randomize(Some(42)).unwrap();
        assert_eq!(a.bindings(), b.bindings());
    }

    #[test]
    fn test_different_seeds_differ() {
        let t = template();
        let a = t.randomize(Some(1)).unwrap();
        let b = t.randomize(Some(2)).unwrap();
        assert_ne!(a.bindings(), b.bindings());
    }

    #[test]
    fn test_unseeded_randomize_binds_everything() {
        let instance = template().randomize(None).unwrap();
        assert!(instance.variables().iter().all(|v| v.is_bound()));
        let sum = instance.solve().unwrap().value().as_int().unwrap();
        assert_eq!(sum, instance.0.int("x").unwrap() + instance.0.int("y").unwrap());
    }

    #[test]
    fn test_template_untouched() {
        let t = template();
        let _ = t.randomize(Some(5)).unwrap();
        assert!(t.variables().iter().all(|v| !v.is_bound()));
    }

    #[test]
    fn test_read_surface() {
        let t = template();
        let dynamic: &dyn Problem = &t;
        assert_eq!(dynamic.id(), 3);
        assert_eq!(dynamic.description(), "add two numbers");
        assert_eq!(dynamic.link(), "https://projecteuler.net/problem=3");
        assert_eq!(
            dynamic.variables().iter().map(|v| v.name()).collect::<Vec<_>>(),
            ["x", "y"]
        );
        assert!(dynamic.variable("y").is_some());
    }
}
