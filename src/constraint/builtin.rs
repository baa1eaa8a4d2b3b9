//! Built-in constraints over integers, kinds and lengths.

use super::types::Constraint;
use crate::value::{Value, ValueKind};
use std::fmt;

fn require_int(value: &Value) -> Result<i64, String> {
    value
        .as_int()
        .ok_or_else(|| format!("expected an integer, got {}", value.kind()))
}

/// Inclusive integer range `[min, max]`.
///
/// Integral floats (e.g. `4.0`) are accepted as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub min: i64,
    pub max: i64,
}

impl Range {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range({}..={})", self.min, self.max)
    }
}

impl Constraint for Range {
    fn evaluate(&self, value: &Value) -> Result<(), String> {
        let n = require_int(value)?;
        if n < self.min {
            Err(format!("{n} is below {}", self.min))
        } else if n > self.max {
            Err(format!("{n} is above {}", self.max))
        } else {
            Ok(())
        }
    }
}

/// Integer parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => f.write_str("Even"),
            Parity::Odd => f.write_str("Odd"),
        }
    }
}

impl Constraint for Parity {
    fn evaluate(&self, value: &Value) -> Result<(), String> {
        let n = require_int(value)?;
        let even = n.rem_euclid(2) == 0;
        match (self, even) {
            (Parity::Even, true) | (Parity::Odd, false) => Ok(()),
            (Parity::Even, false) => Err(format!("{n} is odd")),
            (Parity::Odd, true) => Err(format!("{n} is even")),
        }
    }
}

/// Integer divisible by the given factor.
///
/// A zero factor only admits zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MultipleOf(pub i64);

impl fmt::Display for MultipleOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MultipleOf({})", self.0)
    }
}

impl Constraint for MultipleOf {
    fn evaluate(&self, value: &Value) -> Result<(), String> {
        let n = require_int(value)?;
        let ok = match self.0 {
            0 => n == 0,
            d => n.wrapping_rem(d) == 0,
        };
        if ok {
            Ok(())
        } else {
            Err(format!("{n} is not a multiple of {}", self.0))
        }
    }
}

/// Value kind check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OfKind(pub ValueKind);

impl fmt::Display for OfKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OfKind({})", self.0)
    }
}

impl Constraint for OfKind {
    fn evaluate(&self, value: &Value) -> Result<(), String> {
        if value.kind() == self.0 {
            Ok(())
        } else {
            Err(format!("expected {}, got {}", self.0, value.kind()))
        }
    }
}

/// Inclusive length bounds on text (chars) or list values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Length {
    pub min: usize,
    pub max: usize,
}

impl Length {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Exactly `n` elements.
    pub fn exactly(n: usize) -> Self {
        Self { min: n, max: n }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Length({}..={})", self.min, self.max)
    }
}

impl Constraint for Length {
    fn evaluate(&self, value: &Value) -> Result<(), String> {
        let len = value
            .length()
            .ok_or_else(|| format!("{} has no length", value.kind()))?;
        if (self.min..=self.max).contains(&len) {
            Ok(())
        } else {
            Err(format!(
                "length {len} is outside {}..={}",
                self.min, self.max
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        let r = Range::new(0, 9);
        assert!(r.evaluate(&Value::Int(0)).is_ok());
        assert!(r.evaluate(&Value::Int(9)).is_ok());
        assert!(r.evaluate(&Value::Float(5.0)).is_ok());
        assert_eq!(r.evaluate(&Value::Int(15)), Err("15 is above 9".into()));
        assert_eq!(r.evaluate(&Value::Int(-1)), Err("-1 is below 0".into()));
        assert!(r.evaluate(&Value::from("5")).is_err());
    }

    #[test]
    fn test_float_beyond_i64_is_not_an_integer() {
        let big = Value::Float(1e19);
        assert!(Range::new(0, i64::MAX).evaluate(&big).is_err());
        assert_eq!(
            MultipleOf(2).evaluate(&big),
            Err("expected an integer, got float".into())
        );
        assert!(Parity::Even.evaluate(&Value::Float(-1e19)).is_err());
    }

    #[test]
    fn test_parity_negative_numbers() {
        assert!(Parity::Odd.evaluate(&Value::Int(-3)).is_ok());
        assert!(Parity::Even.evaluate(&Value::Int(-4)).is_ok());
        assert!(Parity::Even.evaluate(&Value::Int(7)).is_err());
    }

    #[test]
    fn test_multiple_of() {
        assert!(MultipleOf(3).evaluate(&Value::Int(12)).is_ok());
        assert!(MultipleOf(3).evaluate(&Value::Int(13)).is_err());
        assert!(MultipleOf(0).evaluate(&Value::Int(0)).is_ok());
        assert!(MultipleOf(0).evaluate(&Value::Int(1)).is_err());
        assert!(MultipleOf(-1).evaluate(&Value::Int(i64::MIN)).is_ok());
    }

    #[test]
    fn test_of_kind() {
        let c = OfKind(ValueKind::Bool);
        assert!(c.evaluate(&Value::Bool(true)).is_ok());
        assert_eq!(
            c.evaluate(&Value::Int(1)),
            Err("expected bool, got int".into())
        );
    }

    #[test]
    fn test_length() {
        let c = Length::new(1, 3);
        assert!(c.evaluate(&Value::from("ab")).is_ok());
        assert!(c.evaluate(&Value::from(vec![1, 2, 3, 4])).is_err());
        assert!(c.evaluate(&Value::from("")).is_err());
        assert!(c.evaluate(&Value::Int(2)).is_err());
        assert!(Length::exactly(2).evaluate(&Value::from(vec![0, 0])).is_ok());
    }
}
