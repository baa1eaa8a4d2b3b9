//! Generator configuration.

use crate::error::{Error, Result};
use crate::variable::DEFAULT_MAX_ATTEMPTS;

/// Configuration for [`ProblemGenerator`](super::ProblemGenerator).
///
/// # Examples
///
/// ```
/// use u_probgen::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_batch_size(500)
///     .with_seed(42)
///     .with_max_attempts(200);
/// assert!(config.validate().is_ok());
/// assert!(GeneratorConfig::default().with_batch_size(0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Number of instances drawn by [`batch`](super::ProblemGenerator::batch).
    pub batch_size: usize,

    /// Random seed for reproducible streams and batches.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Samples drawn per variable before randomization gives up.
    pub max_attempts: usize,

    /// Whether to generate batch rows in parallel using rayon.
    ///
    /// Only honored with the `parallel` feature. Results are identical to
    /// a sequential run with the same seed.
    pub parallel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            batch_size: 100,
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            parallel: false,
        }
    }
}

impl GeneratorConfig {
    pub fn with_batch_size(mut self, n: usize) -> Self {
        self.batch_size = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::InvalidConfig("batch_size must be positive".into()));
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig("max_attempts must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.batch_size, 100);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::default()
            .with_batch_size(10)
            .with_seed(3)
            .with_max_attempts(5)
            .with_parallel(true);
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.max_attempts, 5);
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_zero_attempts() {
        let config = GeneratorConfig::default().with_max_attempts(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config_uses_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{ "batch_size": 5, "seed": 7 }"#).unwrap();
        assert_eq!(config.batch_size, 5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }
}
