//! Value constraints.
//!
//! A constraint is a pass/fail predicate over a single [`Value`](crate::Value).
//! Constraints never derive satisfying values; they only accept or reject a
//! proposed one.
//!
//! # Key Components
//!
//! - [`Constraint`]: the predicate trait, with value-equality identity
//! - [`ConstraintRef`]: shared, type-erased handle used by containers
//! - [`ConstraintSet`]: deduplicated, unordered container
//! - Built-ins: [`Range`], [`Parity`], [`MultipleOf`], [`OfKind`], [`Length`]

mod builtin;
mod set;
mod types;

pub use builtin::{Length, MultipleOf, OfKind, Parity, Range};
pub use set::ConstraintSet;
pub use types::{Constraint, ConstraintRef};
