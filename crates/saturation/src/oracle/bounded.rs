//! Lazy enumeration of partitions of a fixed size inside an outer shape.

use crate::partition::Partition;

/// All partitions of `size` whose diagram lies inside `outer`, in
/// decreasing lexicographic order.
///
/// The iterator holds only the current partition; cloning it before the
/// first call to `next` restarts the enumeration.
///
/// # Examples
///
/// ```
/// use saturation::{BoundedPartitions, Partition};
///
/// let square = Partition::rectangle(2, 2);
/// let parts: Vec<Vec<u32>> = BoundedPartitions::new(&square, 2)
///     .map(|p| p.parts().to_vec())
///     .collect();
/// assert_eq!(parts, vec![vec![2], vec![1, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedPartitions {
    outer: Vec<u32>,
    current: Option<Vec<u32>>,
}

impl BoundedPartitions {
    /// Starts the enumeration of partitions of `size` inside `outer`.
    pub fn new(outer: &Partition, size: u32) -> Self {
        let outer = outer.parts().to_vec();
        let mut first = vec![0; outer.len()];
        let current = fill_greedy(&outer, &mut first, 0, u32::MAX, size).then_some(first);
        Self { outer, current }
    }

    /// Computes the successor of `p` in place, or returns false when `p`
    /// is the last partition.
    fn advance(&self, p: &mut [u32]) -> bool {
        let rows = p.len();
        let mut tail: u32 = 0;
        for i in (0..rows).rev() {
            if p[i] > 0 {
                let cap = p[i] - 1;
                let room: u32 = self.outer[i + 1..].iter().map(|o| (*o).min(cap)).sum();
                if room >= tail + 1 {
                    p[i] = cap;
                    return fill_greedy(&self.outer, p, i + 1, cap, tail + 1);
                }
            }
            tail += p[i];
        }
        false
    }
}

/// Fills `p[from..]` lexicographically largest with total `amount`, each
/// row bounded by `outer` and by the row above (`ceiling` for row `from`).
fn fill_greedy(outer: &[u32], p: &mut [u32], from: usize, ceiling: u32, amount: u32) -> bool {
    let mut left = amount;
    let mut bound = ceiling;
    for i in from..p.len() {
        let v = outer[i].min(bound).min(left);
        p[i] = v;
        left -= v;
        bound = v;
    }
    left == 0
}

impl Iterator for BoundedPartitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        let current = self.current.take()?;
        let mut succ = current.clone();
        if self.advance(&mut succ) {
            self.current = Some(succ);
        }
        Some(Partition::trimmed(current))
    }
}

impl std::iter::FusedIterator for BoundedPartitions {}
