//! Tabu Search configuration.

use crate::error::{Result, SolverError};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_n_iterations(1000)
///     .with_tabu_size(7);
/// assert_eq!(config.n_iterations, 1000);
/// assert_eq!(config.tabu_size, 7);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub n_iterations: usize,
    /// How many recently visited tours stay forbidden.
    pub tabu_size: usize,
    /// Random seed for the initial shuffle (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            n_iterations: 100,
            tabu_size: 20,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_n_iterations(mut self, n: usize) -> Self {
        self.n_iterations = n;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_tabu_size(mut self, size: usize) -> Self {
        self.tabu_size = size;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.n_iterations == 0 {
            return Err(SolverError::InvalidOption(
                "n_iterations must be positive".into(),
            ));
        }
        if self.tabu_size == 0 {
            return Err(SolverError::InvalidOption(
                "tabu_size must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.n_iterations, 100);
        assert_eq!(config.tabu_size, 20);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tabu_config_builder() {
        let config = TabuConfig::default()
            .with_n_iterations(1000)
            .with_tabu_size(10)
            .with_seed(123);

        assert_eq!(config.n_iterations, 1000);
        assert_eq!(config.tabu_size, 10);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_tabu_config_rejects_zero() {
        assert!(matches!(
            TabuConfig::default().with_tabu_size(0).validate(),
            Err(SolverError::InvalidOption(_))
        ));
        assert!(matches!(
            TabuConfig::default().with_n_iterations(0).validate(),
            Err(SolverError::InvalidOption(_))
        ));
    }
}
