//! Streaming metaheuristic solvers for the Traveling Salesman Problem.
//!
//! Given a complete weighted [`Graph`], each solver produces a lazy,
//! finite sequence of [`SolutionState`]s, one per iteration, each carrying
//! the best tour found so far:
//!
//! - **Simulated Annealing (SA)**: random pairwise swaps accepted by the
//!   Metropolis criterion under a linearly falling temperature.
//! - **Ant Colony Optimization (ACO)**: a colony of ants builds tours
//!   biased by pheromone and edge length; pheromone evaporates and is
//!   reinforced on every round's tours.
//! - **Tabu Search (TS)**: best-improvement over the full swap neighborhood,
//!   with a FIFO list of recently visited tours to prevent cycling.
//!
//! The [`registry`] resolves an algorithm identifier and its typed options
//! into a running solver.
//!
//! # Architecture
//!
//! Runs are plain iterators. Nothing is computed until the caller asks for
//! the next state, and dropping a run is a complete cancellation: solvers
//! hold no handles, threads, or timers. Each run owns its mutable state
//! (temperature, pheromone, tabu list), so any number of runs may borrow
//! the same graph concurrently. Rendering and reporting belong to callers.
//!
//! ```
//! use tsp_metaheur::{start, Graph, Options};
//!
//! let graph = Graph::new(vec![
//!     vec![0.0, 1.0, 2.0],
//!     vec![1.0, 0.0, 1.0],
//!     vec![2.0, 1.0, 0.0],
//! ]).unwrap();
//!
//! let last = start("annealing", &graph, &Options::default().with_seed(7))
//!     .unwrap()
//!     .last()
//!     .unwrap();
//! assert_eq!(last.best_cost, 4.0);
//! ```

pub mod aco;
pub mod error;
pub mod graph;
pub mod random;
pub mod registry;
pub mod sa;
pub mod state;
pub mod tabu;

pub use error::{Result, SolverError};
pub use graph::{cost, Graph};
pub use registry::{start, Algorithm, AlgorithmId, Options, Run};
pub use state::SolutionState;
