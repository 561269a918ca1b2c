//! SA configuration.

use crate::error::{Result, SolverError};

/// Configuration for the Simulated Annealing solver.
///
/// Cooling is linear: the temperature drops by `alpha` after every
/// iteration, and the run ends once it falls below `final_temperature`.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::sa::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(50.0)
///     .with_alpha(0.5)
///     .with_final_temperature(1.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.steps(), 98);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnnealingConfig {
    /// Starting temperature. Higher values accept more uphill moves early on.
    pub initial_temperature: f64,

    /// Temperature decrement applied after each iteration.
    pub alpha: f64,

    /// Temperature floor; the run stops once the temperature drops below it.
    pub final_temperature: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            alpha: 0.01,
            final_temperature: 0.1,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(SolverError::InvalidOption(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(SolverError::InvalidOption(format!(
                "alpha must be positive, got {}",
                self.alpha
            )));
        }
        if self.final_temperature.is_nan() || self.final_temperature <= 0.0 {
            return Err(SolverError::InvalidOption(format!(
                "final_temperature must be positive, got {}",
                self.final_temperature
            )));
        }
        if self.final_temperature >= self.initial_temperature {
            return Err(SolverError::InvalidOption(format!(
                "final_temperature ({}) must be less than initial_temperature ({})",
                self.final_temperature, self.initial_temperature
            )));
        }
        Ok(())
    }

    /// Number of iterations the schedule runs for:
    /// `ceil((initial_temperature - final_temperature) / alpha)`.
    pub fn steps(&self) -> usize {
        ((self.initial_temperature - self.final_temperature) / self.alpha).ceil() as usize
    }
}
