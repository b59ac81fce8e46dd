//! Partition / coefficient oracle.
//!
//! The searches consume four services: partition validation, a
//! Littlewood–Richardson coefficient, a Newell–Littlewood positivity
//! coefficient and a lazy enumerator of partitions inside a shape. The
//! coefficient services sit behind [`PartitionOracle`] so that a faster
//! backend can replace the reference [`TableauOracle`].
//!
//! # Example
//!
//! ```
//! use saturation::oracle::{PartitionOracle, TableauOracle};
//! use saturation::Partition;
//!
//! let oracle = TableauOracle;
//! let target = Partition::new(vec![2, 1]).unwrap();
//! let box1 = Partition::new(vec![1]).unwrap();
//! let col2 = Partition::new(vec![1, 1]).unwrap();
//! assert_eq!(oracle.lr_coefficient(&target, &box1, &col2), 1);
//! ```

mod bounded;
pub use bounded::BoundedPartitions;

mod lr;

use crate::error::{Result, SaturationError};
use crate::partition::Partition;

/// Coefficient backend used by the admissibility predicate and the
/// positivity-aware flagger.
pub trait PartitionOracle: Sync {
    /// The Littlewood–Richardson coefficient `c^target_{left,right}`.
    fn lr_coefficient(&self, target: &Partition, left: &Partition, right: &Partition) -> u64;

    /// The Newell–Littlewood number `N_{mu,nu,lam}`.
    ///
    /// With `positivity_only` the backend may stop at the first positive
    /// contribution; only zero / nonzero is then meaningful.
    fn nl_coefficient(
        &self,
        mu: &Partition,
        nu: &Partition,
        lam: &Partition,
        positivity_only: bool,
    ) -> u64;

    /// True when `N_{mu,nu,lam} > 0`.
    fn nl_positive(&self, mu: &Partition, nu: &Partition, lam: &Partition) -> bool {
        self.nl_coefficient(mu, nu, lam, true) > 0
    }

    /// All partitions of `size` inside `outer`.
    fn bounded_partitions(&self, outer: &Partition, size: u32) -> BoundedPartitions {
        BoundedPartitions::new(outer, size)
    }
}

/// Reference backend: counts LR tableaux by backtracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableauOracle;

impl PartitionOracle for TableauOracle {
    fn lr_coefficient(&self, target: &Partition, left: &Partition, right: &Partition) -> u64 {
        lr::lr_coefficient(target, left, right)
    }

    fn nl_coefficient(
        &self,
        mu: &Partition,
        nu: &Partition,
        lam: &Partition,
        positivity_only: bool,
    ) -> u64 {
        lr::nl_coefficient(mu, nu, lam, positivity_only)
    }
}

/// Checks that every sequence is weakly decreasing.
///
/// # Errors
///
/// Returns [`SaturationError::NotWeaklyDecreasing`] for the first sequence
/// that is not.
pub fn validate_partitions(partitions: &[&[u32]]) -> Result<()> {
    for parts in partitions {
        if parts.windows(2).any(|w| w[0] < w[1]) {
            return Err(SaturationError::NotWeaklyDecreasing(parts.to_vec()));
        }
    }
    Ok(())
}
