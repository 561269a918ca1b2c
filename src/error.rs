//! Error types shared by every solver.
//!
//! All validation happens before the first [`SolutionState`](crate::SolutionState)
//! is produced. Once a run has started it can only end normally or be
//! abandoned by the caller, so none of these variants are raised mid-run.

use std::fmt;

/// Errors reported while building a graph or starting a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The distance matrix is malformed: empty, non-square, a size that
    /// disagrees with the declared city count, or a distance that is
    /// negative, non-finite, or zero where a positive value is required.
    InvalidGraph(String),

    /// An algorithm option is out of range.
    InvalidOption(String),

    /// The registry was asked for an algorithm it does not know.
    UnknownAlgorithm(String),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::InvalidGraph(reason) => write!(f, "invalid graph: {reason}"),
            SolverError::InvalidOption(reason) => write!(f, "invalid option: {reason}"),
            SolverError::UnknownAlgorithm(id) => {
                write!(
                    f,
                    "unknown algorithm '{id}' (expected one of: annealing, ant_colony, tabu_search)"
                )
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SolverError>;
