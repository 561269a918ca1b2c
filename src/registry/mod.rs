//! Algorithm registry.
//!
//! Maps the closed set of algorithm identifiers to their solvers and
//! default configurations. Dispatch is an exhaustive `match` over
//! [`Algorithm`] and [`Run`], so adding a solver is a compile error until
//! every site handles it.

mod engine;
mod types;

pub use engine::{start, Run};
pub use types::{Algorithm, AlgorithmId, Options};
