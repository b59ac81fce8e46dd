//! Error taxonomy for the transforms and searches.
//!
//! Every failure belongs to one of three kinds:
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | **Domain** | an index leaves its universe, `4n` overflows, a mode flag is not in `{0, 2}`, or top-level parameters are malformed |
//! | **Containment** | a required `X ⊆ Y` or rectangle containment fails |
//! | **Validation** | a sequence claimed to be a partition is not weakly decreasing |

use thiserror::Error;

/// Coarse classification of a [`SaturationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Index or flag outside its declared domain.
    Domain,
    /// Subset or rectangle containment violated.
    Containment,
    /// Malformed partition.
    Validation,
}

/// Errors raised by the transforms and propagated through the searches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaturationError {
    /// An index lies outside `[1, bound]`.
    #[error("index {index} must lie in [1, {bound}]")]
    IndexOutOfRange {
        /// The offending index.
        index: u32,
        /// Upper end of the universe (`4n`).
        bound: u32,
    },

    /// `4n` does not fit the index type.
    #[error("universe [1, 4n] overflows u32 for n={0}")]
    UniverseOverflow(u32),

    /// The Chi side flag is not 0 or 2.
    #[error("b must be either 0 or 2, got {0}")]
    InvalidSide(u32),

    /// The search parameters cannot describe a valid instance.
    #[error("invalid search parameters n={n}, r={r}: {reason}")]
    InvalidParameters {
        /// Size parameter.
        n: u32,
        /// Subset size parameter.
        r: u32,
        /// What is wrong with them.
        reason: &'static str,
    },

    /// An element of a set is missing from the set that must contain it.
    #[error("{subset} must be a subset of {superset}: {element} is not contained")]
    NotSubset {
        /// The uncontained element.
        element: u32,
        /// Name of the contained set.
        subset: &'static str,
        /// Name of the containing set.
        superset: &'static str,
    },

    /// A partition does not fit inside an `a × b` rectangle.
    #[error("partition {parts:?} must be inside the rectangle ({width}^{height})")]
    NotInRectangle {
        /// Parts of the offending partition.
        parts: Vec<u32>,
        /// Rectangle width `a`.
        width: u32,
        /// Rectangle height `b`.
        height: u32,
    },

    /// A sequence is not weakly decreasing.
    #[error("each partition must be weakly decreasing, got {0:?}")]
    NotWeaklyDecreasing(Vec<u32>),
}

impl SaturationError {
    /// Returns the kind this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange { .. }
            | Self::UniverseOverflow(_)
            | Self::InvalidSide(_)
            | Self::InvalidParameters { .. } => ErrorKind::Domain,
            Self::NotSubset { .. } | Self::NotInRectangle { .. } => ErrorKind::Containment,
            Self::NotWeaklyDecreasing(_) => ErrorKind::Validation,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SaturationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(
            SaturationError::IndexOutOfRange { index: 9, bound: 8 }.kind(),
            ErrorKind::Domain
        );
        assert_eq!(SaturationError::InvalidSide(1).kind(), ErrorKind::Domain);
        assert_eq!(
            SaturationError::UniverseOverflow(1 << 30).kind(),
            ErrorKind::Domain
        );
        assert_eq!(
            SaturationError::NotSubset {
                element: 6,
                subset: "X",
                superset: "Y"
            }
            .kind(),
            ErrorKind::Containment
        );
        assert_eq!(
            SaturationError::NotWeaklyDecreasing(vec![1, 2]).kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn messages_name_the_violation() {
        let err = SaturationError::NotSubset {
            element: 6,
            subset: "X",
            superset: "Y",
        };
        assert_eq!(
            err.to_string(),
            "X must be a subset of Y: 6 is not contained"
        );
    }
}
