//! Distance matrix and tour evaluation.
//!
//! A [`Graph`] is the complete weighted graph every solver works on. It is
//! validated once at construction and is immutable afterwards, so a single
//! graph can be borrowed by any number of concurrent runs.

use crate::error::{Result, SolverError};

/// Square matrix of city-to-city distances, stored row-major.
///
/// # Invariants
///
/// - at least one city
/// - every distance is finite and non-negative
/// - `distance(i, i) == 0`
///
/// Symmetry is typical but not enforced; see [`Graph::is_symmetric`].
///
/// # Examples
///
/// ```
/// use tsp_metaheur::Graph;
///
/// let graph = Graph::new(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ]).unwrap();
/// assert_eq!(graph.len(), 3);
/// assert_eq!(graph.cost(&[0, 1, 2]), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    n: usize,
    distances: Vec<f64>,
}

impl Graph {
    /// Builds a graph from its rows.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(SolverError::InvalidGraph(format!(
                "matrix is not square: row {i} has {} entries, expected {n}",
                row.len()
            )));
        }
        Self::from_flat(n, rows.into_iter().flatten().collect())
    }

    /// Builds a graph from a row-major buffer and a declared city count.
    pub fn from_flat(n: usize, distances: Vec<f64>) -> Result<Self> {
        if n == 0 {
            return Err(SolverError::InvalidGraph(
                "graph must contain at least one city".into(),
            ));
        }
        if distances.len() != n * n {
            return Err(SolverError::InvalidGraph(format!(
                "expected {} distances for {n} cities, got {}",
                n * n,
                distances.len()
            )));
        }
        for (k, &d) in distances.iter().enumerate() {
            let (i, j) = (k / n, k % n);
            if !d.is_finite() || d < 0.0 {
                return Err(SolverError::InvalidGraph(format!(
                    "distance ({i}, {j}) must be finite and non-negative, got {d}"
                )));
            }
            if i == j && d != 0.0 {
                return Err(SolverError::InvalidGraph(format!(
                    "diagonal entry ({i}, {i}) must be 0, got {d}"
                )));
            }
        }
        Ok(Self { n, distances })
    }

    /// Number of cities.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Distance from city `i` to city `j`.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances[i * self.n + j]
    }

    /// Row `i` of the matrix.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.distances[i * self.n..(i + 1) * self.n]
    }

    /// Iterates over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.distances.chunks(self.n)
    }

    /// Returns `true` if `distance(i, j) == distance(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.distance(i, j) == self.distance(j, i)))
    }

    /// Length of the closed tour, see [`cost`].
    pub fn cost(&self, tour: &[usize]) -> f64 {
        cost(self, tour)
    }
}

/// Total length of a closed tour.
///
/// Sums consecutive edges plus the closing edge from the last city back to
/// the first. The result is invariant under rotation of `tour`, and under
/// reversal when the graph is symmetric.
///
/// `tour` must be a permutation of `0..graph.len()`; an empty tour costs 0.
pub fn cost(graph: &Graph, tour: &[usize]) -> f64 {
    let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
        return 0.0;
    };
    let open: f64 = tour.windows(2).map(|w| graph.distance(w[0], w[1])).sum();
    open + graph.distance(last, first)
}

/// Returns `true` if `tour` visits every city of an `n`-city graph exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn triangle() -> Graph {
        Graph::new(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 1.0],
            vec![2.0, 1.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_cost_includes_closing_edge() {
        let graph = triangle();
        assert_eq!(cost(&graph, &[0, 1, 2]), 4.0);
        assert_eq!(graph.cost(&[2, 0, 1]), 4.0);
    }

    #[test]
    fn test_single_city_costs_zero() {
        let graph = Graph::new(vec![vec![0.0]]).unwrap();
        assert_eq!(graph.cost(&[0]), 0.0);
    }

    #[test]
    fn test_asymmetric_cost_follows_direction() {
        let graph = Graph::new(vec![
            vec![0.0, 1.0, 10.0],
            vec![10.0, 0.0, 1.0],
            vec![1.0, 10.0, 0.0],
        ])
        .unwrap();
        assert!(!graph.is_symmetric());
        assert_eq!(graph.cost(&[0, 1, 2]), 3.0);
        assert_eq!(graph.cost(&[2, 1, 0]), 30.0);
    }

    #[test]
    fn test_rejects_non_square() {
        let err = Graph::new(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, SolverError::InvalidGraph(_)));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            Graph::new(vec![]),
            Err(SolverError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_rejects_size_mismatch() {
        let err = Graph::from_flat(3, vec![0.0; 8]).unwrap_err();
        assert!(matches!(err, SolverError::InvalidGraph(_)));
    }

    #[test]
    fn test_rejects_negative_and_nan() {
        assert!(Graph::new(vec![vec![0.0, -1.0], vec![1.0, 0.0]]).is_err());
        assert!(Graph::new(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]]).is_err());
    }

    #[test]
    fn test_rejects_nonzero_diagonal() {
        assert!(Graph::new(vec![vec![1.0, 1.0], vec![1.0, 0.0]]).is_err());
    }

    #[test]
    fn test_rows_roundtrip() {
        let graph = triangle();
        let rows: Vec<Vec<f64>> = graph.rows().map(|r| r.to_vec()).collect();
        assert_eq!(Graph::new(rows).unwrap(), graph);
        assert_eq!(graph.row(1), &[1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
    }

    /// Random symmetric graph plus a random tour over it.
    fn graph_and_tour() -> impl Strategy<Value = (Graph, Vec<usize>)> {
        (2usize..9).prop_flat_map(|n| {
            (
                proptest::collection::vec(1u32..100, n * n),
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
            )
                .prop_map(move |(raw, tour)| {
                    let mut data = vec![0.0; n * n];
                    for i in 0..n {
                        for j in (i + 1)..n {
                            let d = raw[i * n + j] as f64;
                            data[i * n + j] = d;
                            data[j * n + i] = d;
                        }
                    }
                    (Graph::from_flat(n, data).unwrap(), tour)
                })
        })
    }

    proptest! {
        #[test]
        fn prop_cost_rotation_invariant((graph, tour) in graph_and_tour(), k in 0usize..16) {
            let mut rotated = tour.clone();
            rotated.rotate_left(k % tour.len());
            prop_assert_eq!(graph.cost(&tour), graph.cost(&rotated));
        }

        #[test]
        fn prop_cost_reflection_invariant((graph, tour) in graph_and_tour()) {
            let mut reversed = tour.clone();
            reversed.reverse();
            prop_assert!(graph.is_symmetric());
            prop_assert_eq!(graph.cost(&tour), graph.cost(&reversed));
        }
    }
}
