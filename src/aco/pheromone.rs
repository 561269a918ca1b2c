//! Pheromone memory shared between construction rounds.

/// Square matrix of non-negative per-edge pheromone intensities.
///
/// Owned by a single run; created fresh at run start with every entry set
/// to `1 / n²`.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    n: usize,
    values: Vec<f64>,
}

impl PheromoneMatrix {
    /// Uniform matrix for `n` cities.
    pub fn new(n: usize) -> Self {
        let initial = 1.0 / (n * n) as f64;
        Self {
            n,
            values: vec![initial; n * n],
        }
    }

    /// Intensity on the directed edge `i -> j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Number of cities.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Applies one round: `tau = tau * decay_rate + delta`, where `delta`
    /// accumulates `1 / cost` for every edge of every tour, closing edge
    /// included.
    ///
    /// All deposits are summed before being applied, so the update only
    /// depends on this round's tours.
    pub fn update<'a, I>(&mut self, decay_rate: f64, tours: I)
    where
        I: IntoIterator<Item = (&'a [usize], f64)>,
    {
        let n = self.n;
        let mut delta = vec![0.0; n * n];
        for (tour, cost) in tours {
            // A single city tour has cost 0 and no edges worth reinforcing.
            if cost <= 0.0 {
                continue;
            }
            let amount = 1.0 / cost;
            for w in tour.windows(2) {
                delta[w[0] * n + w[1]] += amount;
            }
            if let (Some(&first), Some(&last)) = (tour.first(), tour.last()) {
                delta[last * n + first] += amount;
            }
        }
        for (tau, d) in self.values.iter_mut().zip(delta) {
            *tau = *tau * decay_rate + d;
        }
    }
}
