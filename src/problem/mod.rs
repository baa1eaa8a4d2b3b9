//! Parameterized problem templates.
//!
//! A [`Problem`] owns an ordered list of variables (through its
//! [`Definition`]), solves from their current bindings and randomizes into
//! fresh, independent instances. Randomization is the only way instances
//! are derived from a template; the template itself is never mutated.

mod definition;
mod types;

pub use definition::{validate_variables, Definition};
pub use types::{Problem, PROBLEM_URL};
