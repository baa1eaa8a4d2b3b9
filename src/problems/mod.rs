//! Reference problem implementations.
//!
//! Two classic puzzles with their constants lifted into constrained
//! variables. They show the shape of a [`Problem`](crate::Problem)
//! implementation and give the generator something concrete to run.

mod even_fibonacci;
mod multiples;

pub use even_fibonacci::EvenFibonacciSum;
pub use multiples::MultiplesSum;
