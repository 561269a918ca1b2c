//! Tabu memory and the swap neighborhood.

use std::collections::{HashSet, VecDeque};

/// Bounded FIFO of recently visited tours.
///
/// Membership is exact sequence equality. Pushing beyond capacity evicts
/// the oldest entry.
#[derive(Debug, Clone)]
pub struct TabuList {
    capacity: usize,
    queue: VecDeque<Vec<usize>>,
    set: HashSet<Vec<usize>>,
}

impl TabuList {
    /// Empty list holding at most `capacity` tours.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity + 1),
            set: HashSet::with_capacity(capacity + 1),
        }
    }

    /// Whether `tour` is currently forbidden.
    pub fn contains(&self, tour: &[usize]) -> bool {
        self.set.contains(tour)
    }

    /// Records `tour`, evicting the oldest entry if the list overflows.
    pub fn push(&mut self, tour: Vec<usize>) {
        if !self.set.insert(tour.clone()) {
            return;
        }
        self.queue.push_back(tour);
        if self.queue.len() > self.capacity {
            if let Some(old) = self.queue.pop_front() {
                self.set.remove(&old);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Tours from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.queue.iter().map(Vec::as_slice)
    }
}

/// All tours one pairwise swap away from `tour`, keeping position 0 fixed.
///
/// Yields `((i, j), neighbor)` for `1 <= i < j < n` in row-major order
/// (`i` ascending, then `j` ascending). Empty when `n < 3`.
pub fn swap_neighborhood(
    tour: &[usize],
) -> impl Iterator<Item = ((usize, usize), Vec<usize>)> + '_ {
    let n = tour.len();
    (1..n).flat_map(move |i| {
        (i + 1..n).map(move |j| {
            let mut neighbor = tour.to_vec();
            neighbor.swap(i, j);
            ((i, j), neighbor)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_list_fifo_eviction() {
        let mut list = TabuList::new(2);
        list.push(vec![0, 1, 2]);
        list.push(vec![0, 2, 1]);
        assert!(list.contains(&[0, 1, 2]));

        list.push(vec![1, 0, 2]);
        assert_eq!(list.len(), 2);
        assert!(!list.contains(&[0, 1, 2]));
        assert!(list.contains(&[0, 2, 1]));
        assert!(list.contains(&[1, 0, 2]));
        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec![&[0usize, 2, 1][..], &[1usize, 0, 2][..]]
        );
    }

    #[test]
    fn test_tabu_list_exact_match_only() {
        let mut list = TabuList::new(4);
        list.push(vec![0, 1, 2, 3]);
        // A rotation is a different sequence.
        assert!(!list.contains(&[1, 2, 3, 0]));
        assert!(!list.is_empty());
    }

    #[test]
    fn test_neighborhood_order_and_anchor() {
        let tour = [5, 6, 7, 8];
        let moves: Vec<(usize, usize)> = swap_neighborhood(&tour).map(|(m, _)| m).collect();
        assert_eq!(moves, vec![(1, 2), (1, 3), (2, 3)]);
        for (_, neighbor) in swap_neighborhood(&tour) {
            assert_eq!(neighbor[0], 5);
        }
    }

    #[test]
    fn test_neighborhood_size() {
        let tour: Vec<usize> = (0..7).collect();
        // (n - 1)(n - 2) / 2
        assert_eq!(swap_neighborhood(&tour).count(), 15);
    }

    #[test]
    fn test_neighborhood_empty_below_three() {
        assert_eq!(swap_neighborhood(&[0, 1]).count(), 0);
        assert_eq!(swap_neighborhood(&[0]).count(), 0);
        assert_eq!(swap_neighborhood(&[]).count(), 0);
    }
}
