//! Admissibility predicate for a triple of witness pairs.
//!
//! A candidate `(I, J, K, bI, bJ, bK)` is admissible when three conditions
//! hold, checked cheapest first:
//!
//! 1. [`restricted_lengths`]: `|I ∩ [2n]| + |J ∩ [2n]| + |K ∩ [2n]| = r`.
//! 2. [`consecutive`]: each of `I`, `J`, `K` meets the band `[n+1, 3n]` in
//!    nothing or in a run ending exactly at `3n`.
//! 3. [`good_lr_coefs`]: two LR coefficients built from Chi, Tau and Check
//!    both equal 1.
//!
//! Admissible candidates become [`WitnessBundle`]s.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::disjoints::DisjointPair;
use crate::error::Result;
use crate::oracle::PartitionOracle;
use crate::partition::{display_set, IndexSet, Partition};
use crate::transforms::{check, chi, complement, tau, universe};

/// Borrowed view of six index sets under test.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Primary set `I`.
    pub i: &'a IndexSet,
    /// Primary set `J`.
    pub j: &'a IndexSet,
    /// Primary set `K`.
    pub k: &'a IndexSet,
    /// Bar-image partner of `I`.
    pub bi: &'a IndexSet,
    /// Bar-image partner of `J`.
    pub bj: &'a IndexSet,
    /// Bar-image partner of `K`.
    pub bk: &'a IndexSet,
}

impl<'a> Candidate<'a> {
    /// Assembles a candidate from three enumerated pairs.
    pub fn from_pairs(i: &'a DisjointPair, j: &'a DisjointPair, k: &'a DisjointPair) -> Self {
        Self {
            i: &i.0,
            j: &j.0,
            k: &k.0,
            bi: &i.1,
            bj: &j.1,
            bk: &k.1,
        }
    }
}

/// One admissible inequality: three primary sets and their partners.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WitnessBundle {
    i: IndexSet,
    j: IndexSet,
    k: IndexSet,
    bi: IndexSet,
    bj: IndexSet,
    bk: IndexSet,
}

impl WitnessBundle {
    /// Evaluates [`is_good`] and returns the owned bundle when it passes.
    ///
    /// # Errors
    ///
    /// Propagates transform errors from [`good_lr_coefs`].
    pub fn admit(
        n: u32,
        r: u32,
        candidate: &Candidate<'_>,
        oracle: &impl PartitionOracle,
    ) -> Result<Option<Self>> {
        Ok(is_good(n, r, candidate, oracle)?.then(|| Self::from_candidate(candidate)))
    }

    pub(crate) fn from_candidate(candidate: &Candidate<'_>) -> Self {
        Self {
            i: candidate.i.clone(),
            j: candidate.j.clone(),
            k: candidate.k.clone(),
            bi: candidate.bi.clone(),
            bj: candidate.bj.clone(),
            bk: candidate.bk.clone(),
        }
    }

    /// Borrows the bundle back as a candidate, for re-evaluation.
    pub fn as_candidate(&self) -> Candidate<'_> {
        Candidate {
            i: &self.i,
            j: &self.j,
            k: &self.k,
            bi: &self.bi,
            bj: &self.bj,
            bk: &self.bk,
        }
    }

    /// Primary set `I`.
    pub fn i(&self) -> &IndexSet {
        &self.i
    }

    /// Primary set `J`.
    pub fn j(&self) -> &IndexSet {
        &self.j
    }

    /// Primary set `K`.
    pub fn k(&self) -> &IndexSet {
        &self.k
    }

    /// Partner of `I`.
    pub fn bi(&self) -> &IndexSet {
        &self.bi
    }

    /// Partner of `J`.
    pub fn bj(&self) -> &IndexSet {
        &self.bj
    }

    /// Partner of `K`.
    pub fn bk(&self) -> &IndexSet {
        &self.bk
    }
}

impl fmt::Display for WitnessBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "I={} J={} K={} bI={} bJ={} bK={}",
            display_set(&self.i),
            display_set(&self.j),
            display_set(&self.k),
            display_set(&self.bi),
            display_set(&self.bj),
            display_set(&self.bk),
        )
    }
}

/// `|I ∩ [2n]| + |J ∩ [2n]| + |K ∩ [2n]| == r`.
pub fn restricted_lengths(n: u32, r: u32, i: &IndexSet, j: &IndexSet, k: &IndexSet) -> bool {
    let low = |s: &IndexSet| s.range(..=n.saturating_mul(2)).count();
    low(i) + low(j) + low(k) == r as usize
}

/// True when `set ∩ [n+1, 3n]` is empty or equals `{3n-c+1, ..., 3n}`.
fn consecutive_one(n: u32, set: &IndexSet) -> bool {
    let top = u64::from(n) * 3;
    let size = set
        .iter()
        .filter(|&&x| x > n && u64::from(x) <= top)
        .count() as u64;
    (0..size).all(|d| u32::try_from(top - d).is_ok_and(|x| set.contains(&x)))
}

/// Each of `I`, `J`, `K` meets `[n+1, 3n]` in nothing or in a suffix run
/// ending at `3n`.
pub fn consecutive(n: u32, i: &IndexSet, j: &IndexSet, k: &IndexSet) -> bool {
    consecutive_one(n, i) && consecutive_one(n, j) && consecutive_one(n, k)
}

/// The two LR coefficients of the candidate both equal 1.
///
/// With `bXc = [4n] \ bX`:
///
/// ```text
/// c1 = c^{τ(χ(K,bKc,0))}_{check(τ(χ(I,bIc,0)), 4n-2r, r), check(τ(χ(J,bJc,0)), 4n-2r, r)}
/// c2 = c^{τ(χ(K,bKc,2))}_{check(τ(χ(I,bIc,2)), r, r),     check(τ(χ(J,bJc,2)), r, r)}
/// ```
///
/// # Errors
///
/// Propagates errors from [`universe`], [`complement`], [`chi`] and
/// [`check`]. A rank with `2r > 4n` has no `(4n-2r) × r` rectangle and is
/// simply not admissible.
pub fn good_lr_coefs(
    n: u32,
    r: u32,
    candidate: &Candidate<'_>,
    oracle: &impl PartitionOracle,
) -> Result<bool> {
    let bound = universe(n)?;
    let Some(width) = r.checked_mul(2).and_then(|twice| bound.checked_sub(twice)) else {
        return Ok(false);
    };
    let bic = complement(candidate.bi, n)?;
    let bjc = complement(candidate.bj, n)?;
    let bkc = complement(candidate.bk, n)?;

    let side = |b: u32, a: u32| -> Result<(Partition, Partition, Partition)> {
        let target = tau(&chi(candidate.k, &bkc, n, b)?);
        let left = check(tau(&chi(candidate.i, &bic, n, b)?).parts(), a, r)?;
        let right = check(tau(&chi(candidate.j, &bjc, n, b)?).parts(), a, r)?;
        Ok((target, left, right))
    };

    let (target, left, right) = side(0, width)?;
    if oracle.lr_coefficient(&target, &left, &right) != 1 {
        return Ok(false);
    }
    let (target, left, right) = side(2, r)?;
    Ok(oracle.lr_coefficient(&target, &left, &right) == 1)
}

/// Conjunction of [`restricted_lengths`], [`consecutive`] and
/// [`good_lr_coefs`], short-circuited in that order.
///
/// # Errors
///
/// Propagates errors from [`good_lr_coefs`].
pub fn is_good(
    n: u32,
    r: u32,
    candidate: &Candidate<'_>,
    oracle: &impl PartitionOracle,
) -> Result<bool> {
    let Candidate { i, j, k, .. } = *candidate;
    if !restricted_lengths(n, r, i, j, k) || !consecutive(n, i, j, k) {
        return Ok(false);
    }
    good_lr_coefs(n, r, candidate, oracle)
}
