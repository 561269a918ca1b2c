//! ACO round loop.
//!
//! [`AntColonyRun`] orchestrates one round per [`Iterator::next`] call:
//! construct one tour per ant → track the best → evaporate and deposit.

use std::iter::FusedIterator;

use super::config::AntColonyConfig;
use super::pheromone::PheromoneMatrix;
use crate::error::{Result, SolverError};
use crate::graph::Graph;
use crate::random::create_rng;
use crate::state::SolutionState;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

/// A running Ant Colony search.
///
/// Every round all ants build their tours against the same pheromone
/// snapshot; the matrix is only updated once the whole colony has finished.
/// Each ant draws from its own RNG seeded by the run RNG, so the output does
/// not depend on whether the ants ran in parallel.
///
/// # Usage
///
/// ```
/// use tsp_metaheur::aco::{AntColonyConfig, AntColonyRun};
/// use tsp_metaheur::Graph;
///
/// let graph = Graph::new(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ]).unwrap();
/// let config = AntColonyConfig::default().with_n_iterations(1).with_n_ants(1);
/// let states: Vec<_> = AntColonyRun::new(&graph, config).unwrap().collect();
/// assert_eq!(states.len(), 1);
/// assert_eq!(graph.cost(&states[0].solution), 4.0);
/// ```
#[derive(Debug)]
pub struct AntColonyRun<'g> {
    graph: &'g Graph,
    config: AntColonyConfig,
    rng: StdRng,
    pheromone: PheromoneMatrix,
    /// `d(i, j)^-distance_weight`, fixed for the whole run.
    visibility: Vec<f64>,
    best: Vec<usize>,
    best_cost: f64,
    round: usize,
}

impl<'g> AntColonyRun<'g> {
    /// Validates `config` and `graph` and prepares a fresh colony.
    ///
    /// Fails with [`SolverError::InvalidGraph`] if any off-diagonal distance
    /// is zero, since the transition rule divides by it.
    pub fn new(graph: &'g Graph, config: AntColonyConfig) -> Result<Self> {
        config.validate()?;

        let n = graph.len();
        let mut visibility = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let d = graph.distance(i, j);
                if d <= 0.0 {
                    return Err(SolverError::InvalidGraph(format!(
                        "ant colony requires positive distances, got {d} at ({i}, {j})"
                    )));
                }
                visibility[i * n + j] = d.powf(-config.distance_weight);
            }
        }

        debug!(
            cities = n,
            n_iterations = config.n_iterations,
            n_ants = config.n_ants,
            pheromone_weight = config.pheromone_weight,
            distance_weight = config.distance_weight,
            decay_rate = config.decay_rate,
            "starting ant colony"
        );

        Ok(Self {
            graph,
            rng: create_rng(config.seed),
            pheromone: PheromoneMatrix::new(n),
            visibility,
            best: Vec::new(),
            best_cost: f64::INFINITY,
            round: 0,
            config,
        })
    }

    /// Pheromone matrix after the most recent round.
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// Builds one tour per seed against the current pheromone snapshot.
    fn construct_colony(&self, seeds: &[u64]) -> Vec<(Vec<usize>, f64)> {
        let build = |&seed: &u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let tour = construct_tour(
                self.graph.len(),
                &self.pheromone,
                &self.visibility,
                self.config.pheromone_weight,
                &mut rng,
            );
            let cost = self.graph.cost(&tour);
            (tour, cost)
        };

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                return seeds.par_iter().map(build).collect();
            }
        }

        seeds.iter().map(build).collect()
    }
}

impl Iterator for AntColonyRun<'_> {
    type Item = SolutionState;

    fn next(&mut self) -> Option<SolutionState> {
        if self.round >= self.config.n_iterations {
            return None;
        }

        let seeds: Vec<u64> = (0..self.config.n_ants).map(|_| self.rng.random()).collect();
        let colony = self.construct_colony(&seeds);

        for (tour, cost) in &colony {
            if *cost < self.best_cost {
                self.best.clone_from(tour);
                self.best_cost = *cost;
            }
        }

        self.pheromone.update(
            self.config.decay_rate,
            colony.iter().map(|(tour, cost)| (tour.as_slice(), *cost)),
        );

        self.round += 1;
        trace!(round = self.round, best_cost = self.best_cost, "ant colony round");
        if self.round == self.config.n_iterations {
            debug!(best_cost = self.best_cost, "ant colony finished");
        }

        Some(SolutionState {
            solution: self.best.clone(),
            info: format!("round {}/{}", self.round, self.config.n_iterations),
            iteration: self.round,
            best_cost: self.best_cost,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.config.n_iterations - self.round;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AntColonyRun<'_> {}

impl FusedIterator for AntColonyRun<'_> {}

/// One ant's walk: start at a random city, then pick each next city by
/// roulette wheel over the unvisited ones.
fn construct_tour<R: Rng>(
    n: usize,
    pheromone: &PheromoneMatrix,
    visibility: &[f64],
    pheromone_weight: f64,
    rng: &mut R,
) -> Vec<usize> {
    let mut unvisited: Vec<usize> = (0..n).collect();
    let mut tour = Vec::with_capacity(n);

    let mut current = unvisited.swap_remove(rng.random_range(0..n));
    tour.push(current);

    let mut weights = Vec::with_capacity(n);
    while !unvisited.is_empty() {
        weights.clear();
        weights.extend(unvisited.iter().map(|&city| {
            pheromone.get(current, city).powf(pheromone_weight) * visibility[current * n + city]
        }));

        let pick = roulette(&weights, rng);
        current = unvisited.swap_remove(pick);
        tour.push(current);
    }
    tour
}

/// Fitness-proportionate pick over `weights`.
///
/// Falls back to a uniform pick when the total underflows to zero or is not
/// finite.
fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let n = weights.len();
    if n == 1 {
        return 0;
    }

    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}
