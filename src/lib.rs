//! Constraint-validated problem variables and a randomized instance
//! generator.
//!
//! Models parameterized puzzle problems as ordered, named variables, each
//! guarded by a set of constraints, bound to concrete values and fed to a
//! solve routine. Two guarantees sit at the core:
//!
//! - **Validated binding**: a bound [`Variable`] always satisfies every
//!   constraint attached to it, across rebinding, constraint changes and
//!   re-randomization. Failed operations leave the variable untouched.
//! - **Reproducible generation**: a [`ProblemGenerator`] turns one template
//!   into an endless stream, or a tabular [`Batch`], of independent,
//!   randomized and solved instances. Equal seeds give equal output.
//!
//! # Modules
//!
//! - [`constraint`]: the [`Constraint`] trait, built-ins and [`ConstraintSet`]
//! - [`variable`]: [`Variable`], [`Solution`] and sampling [`Domain`]s
//! - [`problem`]: the [`Problem`] trait and its [`Definition`]
//! - [`generator`]: [`ProblemGenerator`], [`GeneratorConfig`], [`Batch`]
//! - [`problems`]: reference problem implementations
//!
//! This is not a constraint solver: constraints only accept or reject a
//! proposed value, they never derive one.
//!
//! # Features
//!
//! - `parallel`: generate batch rows on rayon
//! - `serde`: derive `Serialize`/`Deserialize` for values, configs and batches

pub mod constraint;
mod error;
pub mod generator;
pub mod problem;
pub mod problems;
pub mod random;
mod value;
pub mod variable;

pub use constraint::{
    Constraint, ConstraintRef, ConstraintSet, Length, MultipleOf, OfKind, Parity, Range,
};
pub use error::{Error, Result};
pub use generator::{Batch, GeneratorConfig, Instances, ProblemGenerator, Row};
pub use problem::{Definition, Problem};
pub use value::{Value, ValueKind};
pub use variable::{Domain, Solution, Variable, DEFAULT_MAX_ATTEMPTS, SOLUTION_NAME};
