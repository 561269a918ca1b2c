//! Ant Colony Optimization (ACO).
//!
//! A population-based constructive metaheuristic. Each round a colony of
//! ants builds tours city by city, biased by pheromone left on short tours
//! in earlier rounds and by the inverse edge length. Pheromone evaporates
//! between rounds so stale trails fade.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Gambardella (1997), "Ant Colony System: A Cooperative Learning
//!   Approach to the Traveling Salesman Problem"

mod config;
mod pheromone;
mod runner;

pub use config::AntColonyConfig;
pub use pheromone::PheromoneMatrix;
pub use runner::AntColonyRun;
