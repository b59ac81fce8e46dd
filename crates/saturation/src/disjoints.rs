//! Witness enumerator: r-subsets of `[1, 4n]` disjoint from their bar-image.

use itertools::Itertools;

use crate::error::Result;
use crate::partition::IndexSet;
use crate::transforms::universe;

/// A subset `X` together with `bar(X)`.
pub type DisjointPair = (IndexSet, IndexSet);

/// Lazily yields every pair `(X, bar(X))` with `|X| = r` and
/// `X ∩ bar(X) = ∅`, in lexicographic order of `X`.
///
/// Each call starts a fresh enumeration. `r > 4n` yields nothing.
///
/// # Errors
///
/// Returns [`crate::SaturationError::UniverseOverflow`] if `4n` does not
/// fit `u32`.
pub fn disjoints(n: u32, r: u32) -> Result<impl Iterator<Item = DisjointPair>> {
    let top = universe(n)? + 1;
    Ok((1..top)
        .combinations(r as usize)
        .filter_map(move |x| {
            let barred: IndexSet = x.iter().map(|&i| top - i).collect();
            let x: IndexSet = x.into_iter().collect();
            x.is_disjoint(&barred).then_some((x, barred))
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SaturationError;
    use crate::transforms::bar;

    fn count(n: u32, r: u32) -> usize {
        disjoints(n, r).unwrap().count()
    }

    #[test]
    fn bounded_by_binomial() {
        // (8 choose 3) = 56
        assert!(count(2, 3) <= 56);
        // (4 choose 4) = 1
        assert!(count(1, 4) <= 1);
    }

    #[test]
    fn full_universe_meets_its_image() {
        assert_eq!(count(1, 4), 0);
    }

    #[test]
    fn exact_counts() {
        // Choose one of each of the 2n mirror pairs {i, 4n+1-i}, then r of them.
        assert_eq!(count(2, 1), 8);
        assert_eq!(count(2, 2), 24);
        assert_eq!(count(2, 3), 32);
        assert_eq!(count(2, 4), 16);
        assert_eq!(count(2, 5), 0);
    }

    #[test]
    fn oversize_r_is_empty() {
        assert_eq!(count(1, 5), 0);
        assert_eq!(count(0, 1), 0);
    }

    #[test]
    fn oversized_universe_is_an_error() {
        assert_eq!(
            disjoints(1 << 30, 1).err(),
            Some(SaturationError::UniverseOverflow(1 << 30))
        );
    }

    #[test]
    fn zero_r_yields_empty_pair() {
        let all: Vec<_> = disjoints(1, 0).unwrap().collect();
        assert_eq!(all, vec![(IndexSet::new(), IndexSet::new())]);
    }

    #[test]
    fn pairs_are_bar_images() {
        for (x, bx) in disjoints(2, 2).unwrap() {
            assert_eq!(x.len(), 2);
            assert_eq!(bar(&x, 2).unwrap(), bx);
            assert!(x.is_disjoint(&bx));
        }
    }

    #[test]
    fn restartable() {
        let first: Vec<_> = disjoints(2, 2).unwrap().collect();
        let second: Vec<_> = disjoints(2, 2).unwrap().collect();
        assert_eq!(first, second);
    }
}
