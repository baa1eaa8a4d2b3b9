//! Variables, solutions and sampling domains.
//!
//! A [`Variable`] holds one binding guarded by a
//! [`ConstraintSet`](crate::ConstraintSet); a [`Solution`] is the
//! permanently unconstrained slot a problem reports its result in. A
//! [`Domain`] proposes random candidates that
//! [`Variable::bind_random`] routes through the normal validated bind.

mod domain;
mod solution;
mod types;

pub use domain::{Domain, DEFAULT_MAX_ATTEMPTS};
pub use solution::{Solution, SOLUTION_NAME};
pub use types::Variable;
