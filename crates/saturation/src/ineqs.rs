//! Inequality search: every admissible witness bundle for `(n, r)`.
//!
//! The search walks the full ordered cube `D × D × D` over the output `D`
//! of [`disjoints`]. The outer dimension is split across the rayon pool;
//! each worker collects into its own buffer and the buffers are merged at
//! the end, so no shared state is mutated during the search. Result order
//! is unspecified.

use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::admissibility::{is_good, Candidate, WitnessBundle};
use crate::disjoints::{disjoints, DisjointPair};
use crate::error::{Result, SaturationError};
use crate::oracle::PartitionOracle;

/// Rejects parameter pairs that cannot describe an instance.
///
/// # Errors
///
/// Returns [`SaturationError::InvalidParameters`] when `n = 0` and `r > 0`.
pub fn validate_parameters(n: u32, r: u32) -> Result<()> {
    if n == 0 && r > 0 {
        return Err(SaturationError::InvalidParameters {
            n,
            r,
            reason: "the universe [1, 4n] is empty",
        });
    }
    Ok(())
}

/// All bundles accepted by [`is_good`].
///
/// # Errors
///
/// Returns the first error raised by parameter validation, by
/// [`disjoints`] when `4n` overflows, or by the predicate on any candidate.
pub fn sat_ineqs(n: u32, r: u32, oracle: &impl PartitionOracle) -> Result<Vec<WitnessBundle>> {
    sat_ineqs_by(n, r, |candidate| is_good(n, r, candidate, oracle))
}

/// All bundles accepted by `admissible`, which replaces [`is_good`] as the
/// acceptance strategy.
///
/// # Errors
///
/// Returns the first error raised by parameter validation or by
/// `admissible`. Workers already running finish their current item.
pub fn sat_ineqs_by<F>(n: u32, r: u32, admissible: F) -> Result<Vec<WitnessBundle>>
where
    F: Fn(&Candidate<'_>) -> Result<bool> + Sync,
{
    validate_parameters(n, r)?;
    let pairs: Vec<DisjointPair> = disjoints(n, r)?.collect();
    info!(n, r, pairs = pairs.len(), "searching inequality witnesses");

    let found = pairs
        .par_iter()
        .try_fold(Vec::new, |mut acc, iq| {
            let before = acc.len();
            for jq in &pairs {
                for kq in &pairs {
                    let candidate = Candidate::from_pairs(iq, jq, kq);
                    if admissible(&candidate)? {
                        acc.push(WitnessBundle::from_candidate(&candidate));
                    } else {
                        trace!(i = ?iq.0, j = ?jq.0, k = ?kq.0, "candidate rejected");
                    }
                }
            }
            debug!(i = ?iq.0, found = acc.len() - before, "outer set done");
            Ok::<_, SaturationError>(acc)
        })
        .try_reduce(Vec::new, |mut a, b| {
            a.extend(b);
            Ok(a)
        })?;

    info!(n, r, witnesses = found.len(), "inequality search finished");
    Ok(found)
}
