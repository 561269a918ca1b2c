//! Algorithm identifiers and their typed configurations.

use std::fmt;
use std::str::FromStr;

use crate::aco::AntColonyConfig;
use crate::error::{Result, SolverError};
use crate::sa::AnnealingConfig;
use crate::tabu::TabuConfig;

/// The closed set of solvers the registry knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AlgorithmId {
    Annealing,
    AntColony,
    TabuSearch,
}

impl AlgorithmId {
    /// Every identifier, in registry order.
    pub const ALL: [AlgorithmId; 3] = [
        AlgorithmId::Annealing,
        AlgorithmId::AntColony,
        AlgorithmId::TabuSearch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::Annealing => "annealing",
            AlgorithmId::AntColony => "ant_colony",
            AlgorithmId::TabuSearch => "tabu_search",
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        AlgorithmId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SolverError::UnknownAlgorithm(s.to_string()))
    }
}

/// A solver together with its configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum Algorithm {
    Annealing(AnnealingConfig),
    AntColony(AntColonyConfig),
    TabuSearch(TabuConfig),
}

impl Algorithm {
    pub fn id(&self) -> AlgorithmId {
        match self {
            Algorithm::Annealing(_) => AlgorithmId::Annealing,
            Algorithm::AntColony(_) => AlgorithmId::AntColony,
            Algorithm::TabuSearch(_) => AlgorithmId::TabuSearch,
        }
    }

    /// Validates the carried configuration.
    pub fn validate(&self) -> Result<()> {
        match self {
            Algorithm::Annealing(config) => config.validate(),
            Algorithm::AntColony(config) => config.validate(),
            Algorithm::TabuSearch(config) => config.validate(),
        }
    }
}

impl From<AlgorithmId> for Algorithm {
    /// The algorithm with its default configuration.
    fn from(id: AlgorithmId) -> Self {
        Options::default().select(id)
    }
}

/// Per-algorithm options.
///
/// Each field starts from its algorithm's defaults. With the `serde`
/// feature, a partial document fills in only the fields it names:
///
/// ```ignore
/// let options: Options = serde_json::from_str(
///     r#"{ "annealing": { "alpha": 0.5 }, "tabu_search": { "tabu_size": 7 } }"#,
/// )?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    pub annealing: AnnealingConfig,
    pub ant_colony: AntColonyConfig,
    pub tabu_search: TabuConfig,
}

impl Options {
    pub fn with_annealing(mut self, config: AnnealingConfig) -> Self {
        self.annealing = config;
        self
    }

    pub fn with_ant_colony(mut self, config: AntColonyConfig) -> Self {
        self.ant_colony = config;
        self
    }

    pub fn with_tabu_search(mut self, config: TabuConfig) -> Self {
        self.tabu_search = config;
        self
    }

    /// Sets the same seed on every algorithm.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.annealing.seed = Some(seed);
        self.ant_colony.seed = Some(seed);
        self.tabu_search.seed = Some(seed);
        self
    }

    /// Picks the configuration belonging to `id`.
    pub fn select(&self, id: AlgorithmId) -> Algorithm {
        match id {
            AlgorithmId::Annealing => Algorithm::Annealing(self.annealing.clone()),
            AlgorithmId::AntColony => Algorithm::AntColony(self.ant_colony.clone()),
            AlgorithmId::TabuSearch => Algorithm::TabuSearch(self.tabu_search.clone()),
        }
    }
}
