//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Each step swaps two random cities and accepts the
//! result by the Metropolis criterion; the temperature falls linearly, so
//! worsening moves become rarer as the run progresses.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::AnnealingConfig;
pub use runner::AnnealingRun;
