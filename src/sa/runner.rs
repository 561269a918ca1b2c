//! SA execution loop.

use std::iter::FusedIterator;

use super::config::AnnealingConfig;
use crate::error::Result;
use crate::graph::Graph;
use crate::random::{create_rng, random_tour};
use crate::state::SolutionState;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

/// A running Simulated Annealing search.
///
/// Each call to [`Iterator::next`] performs exactly one swap-and-accept step
/// and yields the best tour seen so far. The sequence has
/// [`AnnealingConfig::steps`] elements; dropping the iterator early is a
/// normal way to stop.
#[derive(Debug)]
pub struct AnnealingRun<'g> {
    graph: &'g Graph,
    config: AnnealingConfig,
    rng: StdRng,
    current: Vec<usize>,
    current_cost: f64,
    best: Vec<usize>,
    best_cost: f64,
    temperature: f64,
    step: usize,
    steps: usize,
    accepted_moves: usize,
}

impl<'g> AnnealingRun<'g> {
    /// Validates `config` and prepares a run starting from a random tour.
    pub fn new(graph: &'g Graph, config: AnnealingConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = create_rng(config.seed);
        let current = random_tour(graph.len(), &mut rng);
        let current_cost = graph.cost(&current);
        let steps = config.steps();

        debug!(
            cities = graph.len(),
            initial_temperature = config.initial_temperature,
            alpha = config.alpha,
            final_temperature = config.final_temperature,
            steps,
            "starting simulated annealing"
        );

        Ok(Self {
            graph,
            temperature: config.initial_temperature,
            config,
            rng,
            best: current.clone(),
            best_cost: f64::INFINITY,
            current,
            current_cost,
            step: 0,
            steps,
            accepted_moves: 0,
        })
    }

    /// Temperature after the most recent step.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Tour the search is currently positioned on (not necessarily the best).
    pub fn current(&self) -> &[usize] {
        &self.current
    }

    /// Number of candidates accepted so far, improving moves included.
    pub fn accepted_moves(&self) -> usize {
        self.accepted_moves
    }

    /// Percent of the schedule completed at the current temperature.
    fn progress(&self) -> f64 {
        100.0 - 100.0 * self.temperature / self.config.initial_temperature
    }
}

impl Iterator for AnnealingRun<'_> {
    type Item = SolutionState;

    fn next(&mut self) -> Option<SolutionState> {
        if self.step >= self.steps {
            return None;
        }

        let n = self.current.len();
        let mut candidate = self.current.clone();
        let a = self.rng.random_range(0..n);
        let b = self.rng.random_range(0..n);
        candidate.swap(a, b);
        let candidate_cost = self.graph.cost(&candidate);
        let diff = candidate_cost - self.current_cost;

        // Metropolis acceptance criterion
        let accept =
            diff <= 0.0 || self.rng.random_range(0.0..1.0) < (-diff / self.temperature).exp();

        // Best is tracked over generated candidates, accepted or not.
        if candidate_cost < self.best_cost {
            self.best.clone_from(&candidate);
            self.best_cost = candidate_cost;
        }

        if accept {
            self.current = candidate;
            self.current_cost = candidate_cost;
            self.accepted_moves += 1;
        }

        self.step += 1;
        self.temperature =
            self.config.initial_temperature - self.step as f64 * self.config.alpha;

        let info = format!(
            "temperature: {:.2}\nprogress: {}%",
            self.temperature,
            self.progress() as i64
        );
        trace!(
            step = self.step,
            temperature = self.temperature,
            best_cost = self.best_cost,
            "annealing step"
        );

        if self.step == self.steps {
            debug!(
                best_cost = self.best_cost,
                accepted_moves = self.accepted_moves,
                "simulated annealing reached the temperature floor"
            );
        }

        Some(SolutionState {
            solution: self.best.clone(),
            info,
            iteration: self.step,
            best_cost: self.best_cost,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps - self.step;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AnnealingRun<'_> {}

impl FusedIterator for AnnealingRun<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::is_permutation;
    use crate::SolverError;

    /// Cities evenly spaced on a circle; the optimum is the perimeter order.
    fn ring(n: usize) -> Graph {
        let points: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let phi = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
                (100.0 * phi.cos(), 100.0 * phi.sin())
            })
            .collect();
        let rows = points
            .iter()
            .map(|&(x1, y1)| {
                points
                    .iter()
                    .map(|&(x2, y2)| ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt())
                    .collect()
            })
            .collect();
        Graph::new(rows).unwrap()
    }

    fn small_config() -> AnnealingConfig {
        AnnealingConfig::default()
            .with_initial_temperature(10.0)
            .with_final_temperature(1.0)
            .with_alpha(0.25)
            .with_seed(42)
    }

    #[test]
    fn test_sa_emits_schedule_length() {
        let graph = ring(8);
        let run = AnnealingRun::new(&graph, small_config()).unwrap();
        assert_eq!(run.len(), 36);
        assert_eq!(run.count(), 36);
    }

    #[test]
    fn test_sa_non_integral_schedule_rounds_up() {
        let graph = ring(5);
        let config = small_config().with_alpha(2.0);
        assert_eq!(AnnealingRun::new(&graph, config).unwrap().count(), 5);
    }

    #[test]
    fn test_sa_temperature_strictly_decreasing() {
        let graph = ring(6);
        let mut run = AnnealingRun::new(&graph, small_config()).unwrap();
        let mut last = run.temperature();
        while run.next().is_some() {
            assert!(run.temperature() < last);
            last = run.temperature();
        }
    }

    #[test]
    fn test_sa_states_are_permutations() {
        let graph = ring(9);
        for state in AnnealingRun::new(&graph, small_config()).unwrap() {
            assert!(is_permutation(&state.solution, 9));
            assert!((graph.cost(&state.solution) - state.best_cost).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sa_best_cost_non_increasing() {
        let graph = ring(10);
        let costs: Vec<f64> = AnnealingRun::new(&graph, small_config())
            .unwrap()
            .map(|s| s.best_cost)
            .collect();
        for window in costs.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn test_sa_info_reports_temperature_and_progress() {
        let graph = ring(4);
        let first = AnnealingRun::new(&graph, small_config())
            .unwrap()
            .next()
            .unwrap();
        assert_eq!(first.iteration, 1);
        assert_eq!(first.info, "temperature: 9.75\nprogress: 2%");

        let last = AnnealingRun::new(&graph, small_config())
            .unwrap()
            .last()
            .unwrap();
        assert_eq!(last.info, "temperature: 1.00\nprogress: 90%");
    }

    #[test]
    fn test_sa_same_seed_same_sequence() {
        let graph = ring(12);
        let a: Vec<_> = AnnealingRun::new(&graph, small_config()).unwrap().collect();
        let b: Vec<_> = AnnealingRun::new(&graph, small_config()).unwrap().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sa_improves_on_ring() {
        let graph = ring(10);
        let config = AnnealingConfig::default().with_seed(7);
        let initial = {
            let mut rng = create_rng(Some(7));
            graph.cost(&random_tour(10, &mut rng))
        };
        let last = AnnealingRun::new(&graph, config).unwrap().last().unwrap();
        assert!(
            last.best_cost <= initial,
            "expected improvement over {initial}, got {}",
            last.best_cost
        );
    }

    #[test]
    fn test_sa_high_temperature_accepts_uphill() {
        let graph = ring(10);
        let config = AnnealingConfig::default()
            .with_initial_temperature(1e9)
            .with_final_temperature(1e9 - 1000.0)
            .with_alpha(1.0)
            .with_seed(42);
        let mut run = AnnealingRun::new(&graph, config).unwrap();
        let steps = run.len();
        run.by_ref().for_each(drop);
        let ratio = run.accepted_moves() as f64 / steps as f64;
        assert!(ratio > 0.95, "expected near-total acceptance, got {ratio}");
    }

    #[test]
    fn test_sa_single_city() {
        let graph = Graph::new(vec![vec![0.0]]).unwrap();
        let states: Vec<_> = AnnealingRun::new(&graph, small_config()).unwrap().collect();
        assert_eq!(states.len(), 36);
        assert!(states.iter().all(|s| s.solution == vec![0]));
    }

    #[test]
    fn test_sa_rejects_invalid_config() {
        let graph = ring(4);
        let err = AnnealingRun::new(&graph, small_config().with_alpha(0.0)).unwrap_err();
        assert!(matches!(err, SolverError::InvalidOption(_)));
    }
}
