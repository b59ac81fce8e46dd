//! Integer partitions and index sets.
//!
//! A [`Partition`] is a weakly decreasing sequence of non-negative parts
//! with trailing zeros removed. An [`IndexSet`] is a finite set of positive
//! indices, kept in ascending order by `BTreeSet`.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SaturationError};

/// A finite set of indices drawn from `[1, 4n]`.
pub type IndexSet = BTreeSet<u32>;

/// A weakly decreasing sequence of parts, trailing zeros removed.
///
/// # Invariant
///
/// `parts[i] >= parts[i + 1] > 0` for all consecutive parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Partition {
    parts: Vec<u32>,
}

impl Partition {
    /// The empty partition.
    pub const EMPTY: Self = Self { parts: Vec::new() };

    /// Validates `parts` and strips trailing zeros.
    ///
    /// # Errors
    ///
    /// Returns [`SaturationError::NotWeaklyDecreasing`] if some part is
    /// smaller than its successor.
    pub fn new(parts: Vec<u32>) -> Result<Self> {
        if parts.windows(2).any(|w| w[0] < w[1]) {
            return Err(SaturationError::NotWeaklyDecreasing(parts));
        }
        Ok(Self::trimmed(parts))
    }

    /// Builds a partition from parts already known to be weakly decreasing.
    pub(crate) fn trimmed(mut parts: Vec<u32>) -> Self {
        debug_assert!(parts.windows(2).all(|w| w[0] >= w[1]));
        while parts.last() == Some(&0) {
            parts.pop();
        }
        Self { parts }
    }

    /// The `rows × width` rectangle `(width^rows)`.
    pub fn rectangle(width: u32, rows: u32) -> Self {
        if width == 0 {
            return Self::EMPTY;
        }
        Self {
            parts: vec![width; rows as usize],
        }
    }

    /// The nonzero parts, largest first.
    #[inline]
    pub fn parts(&self) -> &[u32] {
        &self.parts
    }

    /// Number of nonzero parts.
    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True for the empty partition.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Sum of the parts.
    pub fn size(&self) -> u32 {
        self.parts.iter().sum()
    }

    /// Part at 0-based row `i`, zero past the end.
    #[inline]
    pub fn part(&self, i: usize) -> u32 {
        self.parts.get(i).copied().unwrap_or(0)
    }

    /// True if the Young diagram of `self` lies inside that of `outer`.
    pub fn is_inside(&self, outer: &Partition) -> bool {
        self.len() <= outer.len() && self.parts.iter().zip(&outer.parts).all(|(a, b)| a <= b)
    }

    /// True if `self` fits inside the rectangle with `rows` rows of `width`.
    pub fn fits_rectangle(&self, width: u32, rows: u32) -> bool {
        self.len() <= rows as usize && self.part(0) <= width
    }

    /// Componentwise minimum, the largest partition inside both.
    pub fn intersection(&self, other: &Partition) -> Partition {
        Self {
            parts: self
                .parts
                .iter()
                .zip(&other.parts)
                .map(|(a, b)| *a.min(b))
                .collect(),
        }
    }
}

impl TryFrom<Vec<u32>> for Partition {
    type Error = SaturationError;

    fn try_from(parts: Vec<u32>) -> Result<Self> {
        Self::new(parts)
    }
}

impl From<Partition> for Vec<u32> {
    fn from(p: Partition) -> Self {
        p.parts
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}

/// Renders an index set as `{a, b, c}`.
pub fn display_set(set: &IndexSet) -> String {
    let items: Vec<String> = set.iter().map(u32::to_string).collect();
    format!("{{{}}}", items.join(", "))
}
