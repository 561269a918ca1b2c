//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Shuffle an initial tour
//! 2. At each iteration:
//!    a. Enumerate the swap neighborhood (position 0 fixed)
//!    b. Select the cheapest neighbor not in the tabu list, first one wins ties
//!    c. Move to it and push it onto the tabu list
//!    d. Update the global best if improved
//! 3. Terminate after `n_iterations` or once every neighbor is tabu
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use std::iter::FusedIterator;

use super::config::TabuConfig;
use super::types::{swap_neighborhood, TabuList};
use crate::error::Result;
use crate::graph::Graph;
use crate::random::{create_rng, random_tour};
use crate::state::SolutionState;
use tracing::{debug, trace};

/// A running Tabu Search.
///
/// The only randomness is the initial shuffle; with a fixed seed the
/// emitted sequence is fully reproducible.
#[derive(Debug)]
pub struct TabuRun<'g> {
    graph: &'g Graph,
    config: TabuConfig,
    current: Vec<usize>,
    best: Vec<usize>,
    best_cost: f64,
    tabu: TabuList,
    iteration: usize,
    exhausted: bool,
}

impl<'g> TabuRun<'g> {
    /// Validates `config` and shuffles the initial tour.
    pub fn new(graph: &'g Graph, config: TabuConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = create_rng(config.seed);
        let current = random_tour(graph.len(), &mut rng);
        let best_cost = graph.cost(&current);

        debug!(
            cities = graph.len(),
            n_iterations = config.n_iterations,
            tabu_size = config.tabu_size,
            initial_cost = best_cost,
            "starting tabu search"
        );

        Ok(Self {
            graph,
            best: current.clone(),
            best_cost,
            current,
            tabu: TabuList::new(config.tabu_size),
            iteration: 0,
            exhausted: false,
            config,
        })
    }

    /// Tour the search is currently positioned on.
    pub fn current(&self) -> &[usize] {
        &self.current
    }

    /// Recently visited tours, oldest first.
    pub fn tabu_list(&self) -> &TabuList {
        &self.tabu
    }

    /// Cheapest admissible neighbor of the current tour, if any.
    fn best_admissible(&self) -> Option<(Vec<usize>, f64)> {
        let mut best: Option<(Vec<usize>, f64)> = None;
        for (_, neighbor) in swap_neighborhood(&self.current) {
            if self.tabu.contains(&neighbor) {
                continue;
            }
            let cost = self.graph.cost(&neighbor);
            if best.as_ref().is_none_or(|(_, c)| cost < *c) {
                best = Some((neighbor, cost));
            }
        }
        best
    }
}

impl Iterator for TabuRun<'_> {
    type Item = SolutionState;

    fn next(&mut self) -> Option<SolutionState> {
        if self.exhausted || self.iteration >= self.config.n_iterations {
            return None;
        }

        let Some((neighbor, cost)) = self.best_admissible() else {
            debug!(
                iteration = self.iteration,
                best_cost = self.best_cost,
                "tabu search neighborhood exhausted"
            );
            self.exhausted = true;
            return None;
        };

        self.current.clone_from(&neighbor);
        self.tabu.push(neighbor);

        if cost < self.best_cost {
            self.best.clone_from(&self.current);
            self.best_cost = cost;
        }

        self.iteration += 1;
        trace!(
            iteration = self.iteration,
            current_cost = cost,
            best_cost = self.best_cost,
            "tabu search step"
        );
        if self.iteration == self.config.n_iterations {
            debug!(best_cost = self.best_cost, "tabu search finished");
        }

        Some(SolutionState {
            solution: self.best.clone(),
            info: format!("iteration {}/{}", self.iteration, self.config.n_iterations),
            iteration: self.iteration,
            best_cost: self.best_cost,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        (0, Some(self.config.n_iterations - self.iteration))
    }
}

impl FusedIterator for TabuRun<'_> {}
