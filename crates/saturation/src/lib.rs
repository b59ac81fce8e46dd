//! Saturation search engine.
//!
//! Searches, by exhaustive and partly parallel enumeration, for evidence
//! about the saturation / Newell–Littlewood inequality claim. For a size
//! parameter `n` and subset size `r` it
//!
//! 1. enumerates witness bundles `(I, J, K, bI, bJ, bK)` of subsets of
//!    `[1, 4n]` that pass the admissibility predicate ([`sat_ineqs`]), and
//! 2. tests every partition triple inside the `n × n` square against the
//!    inequality each bundle encodes ([`flagger`]).
//!
//! # Pipeline
//!
//! ```text
//! transforms → disjoints → admissibility → ineqs → flagger
//! ```
//!
//! | Stage | Role |
//! |-------|------|
//! | [`transforms`] | Tau, Bar, complement, Check, Chi |
//! | [`disjoints`] | r-subsets disjoint from their bar-image |
//! | [`admissibility`] | RestrictedLengths, Consecutive, GoodLrCoefs |
//! | [`ineqs`] | parallel search over the cube of disjoint pairs |
//! | [`flagger`] | parallel search over partition triples |
//!
//! Coefficients come from a [`PartitionOracle`]; [`TableauOracle`] is the
//! reference backend.
//!
//! # Example
//!
//! ```
//! use saturation::{flagger, sat_ineqs, FlagMode, TableauOracle};
//!
//! let ineqs = sat_ineqs(2, 1, &TableauOracle).unwrap();
//! assert!(!ineqs.is_empty());
//!
//! let flagged = flagger(2, 1, FlagMode::Violations, &TableauOracle).unwrap();
//! for c in &flagged {
//!     assert!(c.witness.is_some());
//! }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod admissibility;
pub mod config;
pub mod disjoints;
pub mod error;
pub mod flagger;
pub mod ineqs;
pub mod oracle;
pub mod partition;
pub mod report;
pub mod transforms;

pub use admissibility::{is_good, Candidate, WitnessBundle};
pub use config::{ConfigError, SearchConfig};
pub use disjoints::{disjoints, DisjointPair};
pub use error::{ErrorKind, Result, SaturationError};
pub use flagger::{flag, flagger, satisfies, violation, CounterExample, FlagMode, Triple};
pub use ineqs::{sat_ineqs, sat_ineqs_by};
pub use oracle::{validate_partitions, BoundedPartitions, PartitionOracle, TableauOracle};
pub use partition::{IndexSet, Partition};
pub use report::SearchReport;
