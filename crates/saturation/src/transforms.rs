//! Canonical transforms between subsets of `[1, 4n]` and partitions.
//!
//! | Transform | Maps |
//! |-----------|------|
//! | [`tau`] | r-subset → partition with at most r parts |
//! | [`bar`] | `i ↦ 4n + 1 - i`, an order-reversing involution |
//! | [`complement`] | `X ↦ [4n] \ X` |
//! | [`check`] | partition → its complement inside the `a × b` rectangle |
//! | [`chi`] | `X ⊆ Y` → reindexed position of `X` after collapsing one side |
//!
//! # Examples
//!
//! ```
//! use saturation::transforms::{bar, tau};
//! use saturation::IndexSet;
//!
//! let i = IndexSet::from([2, 4, 7]);
//! assert_eq!(tau(&i).parts(), &[4, 2, 1]);
//! assert_eq!(bar(&i, 2).unwrap(), IndexSet::from([2, 5, 7]));
//! ```

use crate::error::{Result, SaturationError};
use crate::oracle::validate_partitions;
use crate::partition::{IndexSet, Partition};

/// Upper end of the universe `[1, 4n]`.
///
/// # Errors
///
/// Returns [`SaturationError::UniverseOverflow`] if `4n` exceeds `u32::MAX`.
#[inline]
pub fn universe(n: u32) -> Result<u32> {
    n.checked_mul(4).ok_or(SaturationError::UniverseOverflow(n))
}

fn ensure_in_universe(set: &IndexSet, n: u32) -> Result<u32> {
    let bound = universe(n)?;
    match set.iter().find(|&&i| i == 0 || i > bound) {
        Some(&index) => Err(SaturationError::IndexOutOfRange { index, bound }),
        None => Ok(bound),
    }
}

/// Sorts `I` as `s_1 < ... < s_r`, subtracts the staircase `(1, ..., r)`
/// and reverses, giving a partition with at most `r` parts.
pub fn tau(set: &IndexSet) -> Partition {
    let mut parts: Vec<u32> = set
        .iter()
        .enumerate()
        .map(|(idx, &s)| s.saturating_sub(idx as u32 + 1))
        .collect();
    parts.reverse();
    Partition::trimmed(parts)
}

/// `bar(I) = {4n + 1 - i | i ∈ I}`.
///
/// # Errors
///
/// Returns [`SaturationError::IndexOutOfRange`] if `I ⊄ [1, 4n]` and
/// [`SaturationError::UniverseOverflow`] if `4n` does not fit `u32`.
pub fn bar(set: &IndexSet, n: u32) -> Result<IndexSet> {
    let top = ensure_in_universe(set, n)? + 1;
    Ok(set.iter().map(|&i| top - i).collect())
}

/// `[4n] \ X`.
///
/// # Errors
///
/// Returns [`SaturationError::IndexOutOfRange`] if `X ⊄ [1, 4n]` and
/// [`SaturationError::UniverseOverflow`] if `4n` does not fit `u32`.
pub fn complement(set: &IndexSet, n: u32) -> Result<IndexSet> {
    let bound = ensure_in_universe(set, n)?;
    Ok((1..=bound).filter(|i| !set.contains(i)).collect())
}

/// For `lam` inside `(a^b)`, returns `(a - lam_b, a - lam_{b-1}, ..., a - lam_1)`
/// with `lam_i = 0` past its length.
///
/// # Errors
///
/// Returns [`SaturationError::NotWeaklyDecreasing`] if `lam` is not a
/// partition and [`SaturationError::NotInRectangle`] if it has more than
/// `b` parts or a part larger than `a`.
pub fn check(lam: &[u32], a: u32, b: u32) -> Result<Partition> {
    validate_partitions(&[lam])?;
    let lam = Partition::trimmed(lam.to_vec());
    if !lam.fits_rectangle(a, b) {
        return Err(SaturationError::NotInRectangle {
            parts: lam.parts().to_vec(),
            width: a,
            height: b,
        });
    }

    let mut mu = vec![a; b as usize];
    let k = lam.len();
    let offset = b as usize - k;
    for (slot, part) in mu[offset..].iter_mut().zip(lam.parts().iter().rev()) {
        *slot = a - part;
    }
    Ok(Partition::trimmed(mu))
}

/// Walks `1..=4n` with a running counter: positions in `X` bump the counter
/// and are emitted; positions in `Y \ X` bump it only when `b = 0`;
/// positions outside `Y` bump it only when `b = 2`.
///
/// The result lies in `[1, 4n - |Y| + |X|]` for `b = 2` and in `[1, |Y|]`
/// for `b = 0`.
///
/// # Errors
///
/// Returns [`SaturationError::NotSubset`] unless `X ⊆ Y ⊆ [1, 4n]`, and
/// [`SaturationError::InvalidSide`] unless `b ∈ {0, 2}`. Returns
/// [`SaturationError::UniverseOverflow`] if `4n` does not fit `u32`.
pub fn chi(x: &IndexSet, y: &IndexSet, n: u32, b: u32) -> Result<IndexSet> {
    let bound = universe(n)?;
    if let Some(&element) = y.iter().find(|&&i| i == 0 || i > bound) {
        return Err(SaturationError::NotSubset {
            element,
            subset: "Y",
            superset: "[4n]",
        });
    }
    if let Some(&element) = x.iter().find(|&&i| !y.contains(&i)) {
        return Err(SaturationError::NotSubset {
            element,
            subset: "X",
            superset: "Y",
        });
    }
    if b != 0 && b != 2 {
        return Err(SaturationError::InvalidSide(b));
    }

    let mut out = IndexSet::new();
    let mut count = 0;
    for i in 1..=bound {
        if x.contains(&i) {
            count += 1;
            out.insert(count);
        } else if y.contains(&i) {
            if b == 0 {
                count += 1;
            }
        } else if b == 2 {
            count += 1;
        }
    }
    Ok(out)
}
