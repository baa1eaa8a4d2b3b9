//! Instance streams and batch assembly.
//!
//! [`ProblemGenerator`] turns one template into an endless stream of
//! randomized instances, or a solved [`Batch`] of a fixed size.

use super::batch::{Batch, Row};
use super::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::problem::Problem;
use crate::random::create_rng;
use crate::variable::{Variable, SOLUTION_NAME};
use rand::rngs::StdRng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

/// Generates randomized instances of a template problem.
///
/// The generator holds only the immutable template and its configuration.
/// Every instance is derived from the template by
/// [`Problem::randomize_with`] under its own seed, so instances share no
/// state with the template or with each other.
///
/// # Usage
///
/// ```
/// use u_probgen::problems::MultiplesSum;
/// use u_probgen::{GeneratorConfig, ProblemGenerator};
///
/// let config = GeneratorConfig::default().with_batch_size(5).with_seed(42);
/// let generator = ProblemGenerator::new(MultiplesSum::new(), config)?;
///
/// let batch = generator.batch()?;
/// assert_eq!(batch.len(), 5);
/// assert_eq!(batch.columns(), ["a", "b", "limit", "solution"]);
///
/// // The stream never ends on its own; bound it externally.
/// let first_three: Vec<_> = generator.instances().take(3).collect::<Result<_, _>>()?;
/// assert_eq!(first_three.len(), 3);
/// # Ok::<(), u_probgen::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ProblemGenerator<P: Problem> {
    base: P,
    config: GeneratorConfig,
}

impl<P: Problem> ProblemGenerator<P> {
    /// Wraps `base`. Fails with [`Error::InvalidConfig`] for an invalid
    /// configuration.
    pub fn new(base: P, config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { base, config })
    }

    /// The template instances are derived from.
    pub fn base(&self) -> &P {
        &self.base
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produces one instance from `seed` (OS entropy when `None`).
    pub fn generate(&self, seed: Option<u64>) -> Result<P> {
        let mut rng = create_rng(seed);
        self.generate_with(&mut rng)
    }

    /// Produces one instance from a caller-supplied generator.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Result<P> {
        self.base.randomize_with(rng, self.config.max_attempts)
    }

    /// Lazy, infinite stream of instances.
    ///
    /// The iterator never returns `None`; consumers bound it with `take`
    /// or an explicit loop. With a configured seed the stream is
    /// reproducible, and its `i`-th instance matches row `i` of
    /// [`batch`](Self::batch).
    pub fn instances(&self) -> Instances<'_, P> {
        Instances {
            generator: self,
            seeds: create_rng(self.config.seed),
        }
    }

    /// Draws and solves `config.batch_size` instances.
    pub fn batch(&self) -> Result<Batch> {
        self.batch_of(self.config.batch_size)
    }

    /// Draws and solves exactly `size` instances.
    ///
    /// `solve` runs once per instance. The first failing instance aborts
    /// the whole batch; no partial batch is returned.
    pub fn batch_of(&self, size: usize) -> Result<Batch> {
        let columns = self.columns();
        let mut rng = create_rng(self.config.seed);
        let seeds: Vec<u64> = (0..size).map(|_| rng.random()).collect();

        debug!(
            problem = self.base.id(),
            size,
            parallel = self.config.parallel,
            "generating batch"
        );
        let rows = self.solve_rows(&columns, &seeds)?;
        debug!(problem = self.base.id(), rows = rows.len(), "batch complete");

        Ok(Batch::new(columns, rows))
    }

    fn columns(&self) -> Vec<String> {
        self.base
            .variables()
            .iter()
            .map(|v| v.name().to_owned())
            .chain(std::iter::once(SOLUTION_NAME.to_owned()))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn solve_rows(&self, columns: &[String], seeds: &[u64]) -> Result<Vec<Row>> {
        if self.config.parallel {
            seeds
                .par_iter()
                .map(|&seed| self.solve_row(columns, seed))
                .collect()
        } else {
            seeds
                .iter()
                .map(|&seed| self.solve_row(columns, seed))
                .collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn solve_rows(&self, columns: &[String], seeds: &[u64]) -> Result<Vec<Row>> {
        seeds
            .iter()
            .map(|&seed| self.solve_row(columns, seed))
            .collect()
    }

    fn solve_row(&self, columns: &[String], seed: u64) -> Result<Row> {
        let instance = self.generate(Some(seed))?;
        let solution = instance.solve()?;

        let variables = instance.variables();
        let names_match = variables.len() + 1 == columns.len()
            && variables.iter().zip(columns).all(|(v, c)| v.name() == c);
        if !names_match {
            return Err(Error::InvalidProblem(
                "randomized instance does not match the template's variables".into(),
            ));
        }

        let mut values = variables
            .iter()
            .map(Variable::require_binding)
            .collect::<Result<Vec<_>>>()?;
        values.push(solution.value());
        trace!(seed, solution = %solution.value(), "solved instance");
        Ok(Row::new(values))
    }
}

/// Endless iterator over randomized instances.
///
/// Created by [`ProblemGenerator::instances`]. Owns the seed stream; the
/// generator is only borrowed.
#[derive(Debug)]
pub struct Instances<'a, P: Problem> {
    generator: &'a ProblemGenerator<P>,
    seeds: StdRng,
}

impl<P: Problem> Iterator for Instances<'_, P> {
    type Item = Result<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let seed = self.seeds.random();
        Some(self.generator.generate(Some(seed)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
