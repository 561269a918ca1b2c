//! ACO configuration.
//!
//! [`AntColonyConfig`] holds the colony size, the round budget and the
//! weights of the transition rule.

use crate::error::{Result, SolverError};

/// Configuration for the Ant Colony solver.
///
/// An ant at city `i` moves to an unvisited city `j` with probability
/// proportional to `tau(i, j)^pheromone_weight / d(i, j)^distance_weight`.
///
/// # Builder Pattern
///
/// ```
/// use tsp_metaheur::aco::AntColonyConfig;
///
/// let config = AntColonyConfig::default()
///     .with_n_iterations(50)
///     .with_n_ants(20)
///     .with_decay_rate(0.9)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AntColonyConfig {
    /// Number of construction rounds; one state is emitted per round.
    pub n_iterations: usize,

    /// Number of ants building a tour in each round.
    pub n_ants: usize,

    /// Exponent applied to the pheromone intensity.
    pub pheromone_weight: f64,

    /// Exponent applied to the distance in the denominator.
    ///
    /// Higher values make the colony greedier towards short edges.
    pub distance_weight: f64,

    /// Fraction of pheromone kept after each round (0.0–1.0).
    pub decay_rate: f64,

    /// Whether to build the ants of a round in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are identical
    /// either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AntColonyConfig {
    fn default() -> Self {
        Self {
            n_iterations: 100,
            n_ants: 10,
            pheromone_weight: 1.0,
            distance_weight: 5.0,
            decay_rate: 0.95,
            parallel: false,
            seed: None,
        }
    }
}

impl AntColonyConfig {
    pub fn with_n_iterations(mut self, n: usize) -> Self {
        self.n_iterations = n;
        self
    }

    pub fn with_n_ants(mut self, n: usize) -> Self {
        self.n_ants = n;
        self
    }

    pub fn with_pheromone_weight(mut self, w: f64) -> Self {
        self.pheromone_weight = w;
        self
    }

    pub fn with_distance_weight(mut self, w: f64) -> Self {
        self.distance_weight = w;
        self
    }

    pub fn with_decay_rate(mut self, rate: f64) -> Self {
        self.decay_rate = rate;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

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
        if self.n_ants == 0 {
            return Err(SolverError::InvalidOption("n_ants must be positive".into()));
        }
        if !self.pheromone_weight.is_finite() || self.pheromone_weight < 0.0 {
            return Err(SolverError::InvalidOption(format!(
                "pheromone_weight must be finite and non-negative, got {}",
                self.pheromone_weight
            )));
        }
        if !self.distance_weight.is_finite() || self.distance_weight < 0.0 {
            return Err(SolverError::InvalidOption(format!(
                "distance_weight must be finite and non-negative, got {}",
                self.distance_weight
            )));
        }
        if !(0.0..=1.0).contains(&self.decay_rate) {
            return Err(SolverError::InvalidOption(format!(
                "decay_rate must be in [0, 1], got {}",
                self.decay_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AntColonyConfig::default();
        assert_eq!(config.n_iterations, 100);
        assert_eq!(config.n_ants, 10);
        assert!((config.pheromone_weight - 1.0).abs() < 1e-15);
        assert!((config.distance_weight - 5.0).abs() < 1e-15);
        assert!((config.decay_rate - 0.95).abs() < 1e-15);
        assert!(!config.parallel);
    }

    #[test]
    fn test_validate_ok() {
        assert!(AntColonyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_counts() {
        assert!(AntColonyConfig::default()
            .with_n_ants(0)
            .validate()
            .is_err());
        assert!(AntColonyConfig::default()
            .with_n_iterations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_decay_out_of_range() {
        for rate in [-0.1, 1.5, f64::NAN] {
            let err = AntColonyConfig::default()
                .with_decay_rate(rate)
                .validate()
                .unwrap_err();
            assert!(matches!(err, SolverError::InvalidOption(_)));
        }
    }

    #[test]
    fn test_validate_negative_weight() {
        assert!(AntColonyConfig::default()
            .with_distance_weight(-1.0)
            .validate()
            .is_err());
        assert!(AntColonyConfig::default()
            .with_pheromone_weight(f64::INFINITY)
            .validate()
            .is_err());
    }
}
