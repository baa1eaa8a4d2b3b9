//! Randomized instance generation.
//!
//! A [`ProblemGenerator`] wraps an immutable template problem and derives
//! instances from it:
//!
//! - [`ProblemGenerator::instances`]: lazy, endless stream of instances
//! - [`ProblemGenerator::batch`]: fixed-size table of solved instances
//!
//! # Key Types
//!
//! - [`GeneratorConfig`]: batch size, seed, retry budget, parallelism
//! - [`Batch`] / [`Row`]: tabular output, one column per variable plus
//!   the solution

mod batch;
mod config;
mod runner;

pub use batch::{Batch, Row};
pub use config::GeneratorConfig;
pub use runner::{Instances, ProblemGenerator};
