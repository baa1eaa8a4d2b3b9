//! Random sampling domains for problem generation.

use super::types::Variable;
use crate::error::{Error, Result};
use crate::value::Value;
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{trace, warn};

/// Default number of samples drawn per variable before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// A source of candidate values for a variable.
///
/// Domains propose values; the variable's constraints decide. A domain
/// wider than the constraints is fine, the extra samples are rejected and
/// redrawn by [`Variable::bind_random`].
#[derive(Debug, Clone, PartialEq)]
pub enum Domain {
    /// Uniform integer in `[min, max]`.
    IntRange { min: i64, max: i64 },
    /// Uniform float in `[min, max]`. Empty when the width `max - min` is
    /// not finite, which includes non-finite bounds.
    FloatRange { min: f64, max: f64 },
    /// Fair coin.
    Bool,
    /// Uniform pick from a fixed list.
    Choice(Vec<Value>),
}

impl Domain {
    pub fn int(min: i64, max: i64) -> Self {
        Domain::IntRange { min, max }
    }

    pub fn float(min: f64, max: f64) -> Self {
        Domain::FloatRange { min, max }
    }

    pub fn choice<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Domain::Choice(values.into_iter().map(Into::into).collect())
    }

    /// Draws one candidate. Returns `None` when the domain is empty.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<Value> {
        match self {
            Domain::IntRange { min, max } => {
                (min <= max).then(|| Value::Int(rng.random_range(*min..=*max)))
            }
            Domain::FloatRange { min, max } => (min <= max && (max - min).is_finite())
                .then(|| Value::Float(rng.random_range(*min..=*max))),
            Domain::Bool => Some(Value::Bool(rng.random_bool(0.5))),
            Domain::Choice(values) => values.choose(rng).cloned(),
        }
    }
}

impl Variable {
    /// Binds a value drawn from `domain`, redrawing rejected samples.
    ///
    /// Every candidate goes through [`bind`](Variable::bind), so the
    /// constraint invariant holds. After `max_attempts` rejected samples
    /// (or immediately, for an empty domain) returns
    /// [`Error::Generation`] and leaves the previous binding in place.
    pub fn bind_random<R: Rng>(
        &mut self,
        domain: &Domain,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<()> {
        let mut attempts = 0;
        while attempts < max_attempts {
            let Some(candidate) = domain.sample(rng) else {
                break;
            };
            attempts += 1;
            match self.bind(candidate) {
                Ok(()) => {
                    trace!(variable = %self.name(), attempts, "sampled binding");
                    return Ok(());
                }
                Err(Error::Validation { .. }) => continue,
                Err(other) => return Err(other),
            }
        }
        warn!(variable = %self.name(), attempts, "no valid sample within budget");
        Err(Error::Generation {
            variable: self.name().to_owned(),
            attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{Parity, Range};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_range_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let d = Domain::int(-3, 3);
        for _ in 0..200 {
            let n = d.sample(&mut rng).and_then(|v| v.as_int()).unwrap();
            assert!((-3..=3).contains(&n));
        }
    }

    #[test]
    fn test_empty_domains() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Domain::int(5, 4).sample(&mut rng), None);
        assert_eq!(Domain::float(1.0, 0.0).sample(&mut rng), None);
        assert_eq!(Domain::Choice(Vec::new()).sample(&mut rng), None);
        assert_eq!(Domain::float(0.0, f64::INFINITY).sample(&mut rng), None);
        assert_eq!(Domain::float(f64::NAN, 1.0).sample(&mut rng), None);
    }

    #[test]
    fn test_float_range_overflowing_width_is_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(Domain::float(-f64::MAX, f64::MAX).sample(&mut rng), None);

        let mut x = Variable::new("x", "any float");
        let err = x
            .bind_random(&Domain::float(-f64::MAX, f64::MAX), &mut rng, 10)
            .unwrap_err();
        assert!(matches!(err, Error::Generation { attempts: 0, .. }));

        let v = Domain::float(-1.0e300, 1.0e300).sample(&mut rng).unwrap();
        let x = v.as_float().unwrap();
        assert!((-1.0e300..=1.0e300).contains(&x));
    }

    #[test]
    fn test_choice_picks_member() {
        let mut rng = StdRng::seed_from_u64(7);
        let d = Domain::choice(["a", "b"]);
        let v = d.sample(&mut rng).unwrap();
        assert!(v == Value::from("a") || v == Value::from("b"));
    }

    #[test]
    fn test_bind_random_respects_constraints() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut x = Variable::constrained("x", "even digit", [Parity::Even]);
        x.constrain([Range::new(0, 9)]).unwrap();
        for _ in 0..50 {
            x.bind_random(&Domain::int(0, 100), &mut rng, DEFAULT_MAX_ATTEMPTS)
                .unwrap();
            let n = x.binding().and_then(|v| v.as_int()).unwrap();
            assert!(n % 2 == 0 && (0..=9).contains(&n));
        }
    }

    #[test]
    fn test_bind_random_exhausts_budget() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut x = Variable::constrained("x", "impossible", [Range::new(50, 60)]);
        let err = x
            .bind_random(&Domain::int(0, 9), &mut rng, 25)
            .unwrap_err();
        assert_eq!(
            err,
            Error::Generation {
                variable: "x".into(),
                attempts: 25
            }
        );
        assert!(!x.is_bound());
    }

    #[test]
    fn test_bind_random_empty_domain() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut x = Variable::new("x", "free");
        let err = x
            .bind_random(&Domain::Choice(Vec::new()), &mut rng, 10)
            .unwrap_err();
        assert!(matches!(err, Error::Generation { attempts: 0, .. }));
    }
}
