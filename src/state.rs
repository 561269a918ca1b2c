//! The record every solver emits once per iteration.

/// One step of a run: the best tour found so far plus descriptive metadata.
///
/// States are produced lazily and never retained by the solver; the caller
/// may render, log, or drop each one before asking for the next.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionState {
    /// Best tour so far, a permutation of `0..n`.
    pub solution: Vec<usize>,

    /// Human-readable progress line (iteration, temperature, ...).
    pub info: String,

    /// 1-based position of this state in its sequence.
    pub iteration: usize,

    /// Cost of `solution`.
    pub best_cost: f64,
}
