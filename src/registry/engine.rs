//! Run dispatch.

use std::iter::FusedIterator;

use super::types::{Algorithm, AlgorithmId, Options};
use crate::aco::AntColonyRun;
use crate::error::Result;
use crate::graph::Graph;
use crate::sa::AnnealingRun;
use crate::state::SolutionState;
use crate::tabu::TabuRun;
use tracing::debug;

/// A started run of any registered algorithm.
///
/// Pull-based: each [`Iterator::next`] computes exactly one
/// [`SolutionState`]. Dropping it is the only cancellation mechanism needed.
#[derive(Debug)]
pub enum Run<'g> {
    Annealing(AnnealingRun<'g>),
    AntColony(AntColonyRun<'g>),
    TabuSearch(TabuRun<'g>),
}

impl Run<'_> {
    pub fn id(&self) -> AlgorithmId {
        match self {
            Run::Annealing(_) => AlgorithmId::Annealing,
            Run::AntColony(_) => AlgorithmId::AntColony,
            Run::TabuSearch(_) => AlgorithmId::TabuSearch,
        }
    }
}

impl Iterator for Run<'_> {
    type Item = SolutionState;

    fn next(&mut self) -> Option<SolutionState> {
        match self {
            Run::Annealing(run) => run.next(),
            Run::AntColony(run) => run.next(),
            Run::TabuSearch(run) => run.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Run::Annealing(run) => run.size_hint(),
            Run::AntColony(run) => run.size_hint(),
            Run::TabuSearch(run) => run.size_hint(),
        }
    }
}

impl FusedIterator for Run<'_> {}

impl Algorithm {
    /// Validates the configuration and starts the solver on `graph`.
    pub fn run(self, graph: &Graph) -> Result<Run<'_>> {
        debug!(algorithm = %self.id(), cities = graph.len(), "starting run");
        Ok(match self {
            Algorithm::Annealing(config) => Run::Annealing(AnnealingRun::new(graph, config)?),
            Algorithm::AntColony(config) => Run::AntColony(AntColonyRun::new(graph, config)?),
            Algorithm::TabuSearch(config) => Run::TabuSearch(TabuRun::new(graph, config)?),
        })
    }
}

/// Resolves `id`, picks its configuration from `options` and starts it.
///
/// Fails with [`SolverError::UnknownAlgorithm`](crate::SolverError::UnknownAlgorithm)
/// for an identifier outside `annealing`, `ant_colony`, `tabu_search`, and
/// with the solver's own validation error otherwise. Nothing is computed
/// until the returned run is polled.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::{start, Graph, Options};
/// use tsp_metaheur::tabu::TabuConfig;
///
/// let graph = Graph::new(vec![
///     vec![0.0, 3.0, 4.0, 2.0],
///     vec![3.0, 0.0, 5.0, 4.0],
///     vec![4.0, 5.0, 0.0, 3.0],
///     vec![2.0, 4.0, 3.0, 0.0],
/// ]).unwrap();
/// let options = Options::default()
///     .with_tabu_search(TabuConfig::default().with_n_iterations(5))
///     .with_seed(42);
///
/// for state in start("tabu_search", &graph, &options).unwrap() {
///     println!("{}: {:?}", state.info, state.solution);
/// }
/// ```
pub fn start<'g>(id: &str, graph: &'g Graph, options: &Options) -> Result<Run<'g>> {
    let id: AlgorithmId = id.parse()?;
    options.select(id).run(graph)
}
