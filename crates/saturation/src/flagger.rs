//! Counterexample search over partition triples inside the `n × n` square.
//!
//! Each witness bundle `(I, J, K, bI, bJ, bK)` encodes the inequality
//!
//! ```text
//! Σ_{bI} λ - Σ_I λ + Σ_{bJ} μ - Σ_J μ + Σ_{bK} ν - Σ_K ν >= 0
//! ```
//!
//! where `Σ_S p` adds the parts of `p` at 1-based positions in `S ∩ [2n]`.
//! A triple violating any inequality is a counterexample. In
//! [`FlagMode::Positivity`] the verdict is compared against the
//! Newell–Littlewood positivity oracle instead.

use std::fmt;

use itertools::{iproduct, Itertools};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::admissibility::WitnessBundle;
use crate::error::Result;
use crate::ineqs::sat_ineqs;
use crate::oracle::PartitionOracle;
use crate::partition::{IndexSet, Partition};

/// How [`flag`] decides that a triple is a counterexample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlagMode {
    /// Report every triple that violates some inequality.
    #[default]
    Violations,
    /// Report permutations that violate an inequality although the
    /// positivity oracle says the coefficient is positive, and triples the
    /// oracle says vanish although every permutation passes.
    Positivity,
}

/// A candidate triple `(λ, μ, ν)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// First partition.
    pub la: Partition,
    /// Second partition.
    pub mu: Partition,
    /// Third partition.
    pub nu: Partition,
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.la, self.mu, self.nu)
    }
}

/// A flagged triple and the bundle that falsified it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CounterExample {
    /// The flagged triple, in the order that was tested.
    pub triple: Triple,
    /// The violated inequality. `None` for a triple flagged because every
    /// permutation passes while the positivity oracle says zero.
    pub witness: Option<WitnessBundle>,
}

impl fmt::Display for CounterExample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.witness {
            Some(w) => write!(f, "{} violates {}", self.triple, w),
            None => write!(f, "{} passes but vanishes", self.triple),
        }
    }
}

/// Sum of the parts of `p` at 1-based positions in `set ∩ [1, 2n]`.
pub fn sum(n: u32, p: &Partition, set: &IndexSet) -> i64 {
    set.range(..=n.saturating_mul(2))
        .filter_map(|&pos| pos.checked_sub(1))
        .map(|row| i64::from(p.part(row as usize)))
        .sum()
}

/// Left-hand side of the inequality encoded by `w` at `(la, mu, nu)`.
pub fn score(n: u32, la: &Partition, mu: &Partition, nu: &Partition, w: &WitnessBundle) -> i64 {
    sum(n, la, w.bi()) - sum(n, la, w.i()) + sum(n, mu, w.bj()) - sum(n, mu, w.j())
        + sum(n, nu, w.bk())
        - sum(n, nu, w.k())
}

/// The first bundle whose inequality `(la, mu, nu)` violates.
pub fn violation<'a>(
    n: u32,
    la: &Partition,
    mu: &Partition,
    nu: &Partition,
    ineqs: &'a [WitnessBundle],
) -> Option<&'a WitnessBundle> {
    ineqs.iter().find(|w| score(n, la, mu, nu, w) < 0)
}

/// True when `(la, mu, nu)` satisfies every inequality.
pub fn satisfies(
    n: u32,
    la: &Partition,
    mu: &Partition,
    nu: &Partition,
    ineqs: &[WitnessBundle],
) -> bool {
    violation(n, la, mu, nu, ineqs).is_none()
}

/// Size triples `(kl, km, kn)` in `[0, n]^3` with even total.
pub fn size_triples(n: u32) -> Vec<(u32, u32, u32)> {
    iproduct!(0..=n, 0..=n, 0..=n)
        .filter(|(a, b, c)| (a + b + c) % 2 == 0)
        .collect()
}

/// Computes the inequalities for `(n, r)` and flags against them.
///
/// # Errors
///
/// Propagates errors from [`sat_ineqs`].
pub fn flagger(
    n: u32,
    r: u32,
    mode: FlagMode,
    oracle: &impl PartitionOracle,
) -> Result<Vec<CounterExample>> {
    let ineqs = sat_ineqs(n, r, oracle)?;
    Ok(flag(n, &ineqs, mode, oracle))
}

/// Tests every triple of partitions inside the `n × n` square whose sizes
/// have even total against `ineqs`. Parallel across size triples; result
/// order is unspecified.
pub fn flag(
    n: u32,
    ineqs: &[WitnessBundle],
    mode: FlagMode,
    oracle: &impl PartitionOracle,
) -> Vec<CounterExample> {
    let square = Partition::rectangle(n, n);
    let sizes = size_triples(n);
    info!(
        n,
        ?mode,
        inequalities = ineqs.len(),
        size_triples = sizes.len(),
        "searching counterexamples"
    );

    let flagged = sizes
        .par_iter()
        .fold(Vec::new, |mut acc, &(kl, km, kn)| {
            let las: Vec<Partition> = oracle.bounded_partitions(&square, kl).collect();
            let mus: Vec<Partition> = oracle.bounded_partitions(&square, km).collect();
            let nus: Vec<Partition> = oracle.bounded_partitions(&square, kn).collect();
            let before = acc.len();
            for (la, mu, nu) in iproduct!(&las, &mus, &nus) {
                match mode {
                    FlagMode::Violations => flag_violation(n, la, mu, nu, ineqs, &mut acc),
                    FlagMode::Positivity => {
                        flag_positivity(n, la, mu, nu, ineqs, oracle, &mut acc)
                    }
                }
            }
            debug!(kl, km, kn, flagged = acc.len() - before, "size triple done");
            acc
        })
        .reduce(Vec::new, |mut a, b| {
            a.extend(b);
            a
        });

    info!(n, counterexamples = flagged.len(), "counterexample search finished");
    flagged
}

fn flag_violation(
    n: u32,
    la: &Partition,
    mu: &Partition,
    nu: &Partition,
    ineqs: &[WitnessBundle],
    out: &mut Vec<CounterExample>,
) {
    if let Some(w) = violation(n, la, mu, nu, ineqs) {
        out.push(CounterExample {
            triple: Triple {
                la: la.clone(),
                mu: mu.clone(),
                nu: nu.clone(),
            },
            witness: Some(w.clone()),
        });
    }
}

fn flag_positivity(
    n: u32,
    la: &Partition,
    mu: &Partition,
    nu: &Partition,
    ineqs: &[WitnessBundle],
    oracle: &impl PartitionOracle,
    out: &mut Vec<CounterExample>,
) {
    let positive = oracle.nl_positive(mu, nu, la);
    let mut all_pass = true;
    for perm in [la, mu, nu].into_iter().permutations(3).unique() {
        let (a, b, c) = (perm[0], perm[1], perm[2]);
        if let Some(w) = violation(n, a, b, c, ineqs) {
            all_pass = false;
            if positive {
                out.push(CounterExample {
                    triple: Triple {
                        la: a.clone(),
                        mu: b.clone(),
                        nu: c.clone(),
                    },
                    witness: Some(w.clone()),
                });
            }
        }
    }
    if !positive && all_pass {
        out.push(CounterExample {
            triple: Triple {
                la: la.clone(),
                mu: mu.clone(),
                nu: nu.clone(),
            },
            witness: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use crate::admissibility::Candidate;
    use crate::oracle::TableauOracle;

    /// Claims every Newell–Littlewood number is positive.
    struct AlwaysPositive;

    impl PartitionOracle for AlwaysPositive {
        fn lr_coefficient(&self, target: &Partition, left: &Partition, right: &Partition) -> u64 {
            TableauOracle.lr_coefficient(target, left, right)
        }

        fn nl_coefficient(&self, _: &Partition, _: &Partition, _: &Partition, _: bool) -> u64 {
            1
        }
    }

    fn arrangements(t: &Triple) -> BTreeSet<Triple> {
        let (a, b, c) = (&t.la, &t.mu, &t.nu);
        [(a, b, c), (a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)]
            .into_iter()
            .map(|(la, mu, nu)| Triple {
                la: la.clone(),
                mu: mu.clone(),
                nu: nu.clone(),
            })
            .collect()
    }

    fn p(parts: &[u32]) -> Partition {
        Partition::new(parts.to_vec()).unwrap()
    }

    fn literal_bundle() -> WitnessBundle {
        let (i, j, k) = (
            IndexSet::from([2]),
            IndexSet::from([7]),
            IndexSet::from([8]),
        );
        let (bi, bj, bk) = (
            IndexSet::from([7]),
            IndexSet::from([2]),
            IndexSet::from([1]),
        );
        let candidate = Candidate {
            i: &i,
            j: &j,
            k: &k,
            bi: &bi,
            bj: &bj,
            bk: &bk,
        };
        WitnessBundle::admit(2, 1, &candidate, &TableauOracle)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn sum_caps_at_two_n_and_length() {
        let lam = p(&[5, 4, 3, 2, 1]);
        // positions 1, 3 and 4 count; 5 > 2n = 4 does not
        assert_eq!(sum(2, &lam, &IndexSet::from([1, 3, 4, 5])), 5 + 3 + 2);
        assert_eq!(sum(2, &p(&[1]), &IndexSet::from([2, 3])), 0);
        // 2n saturates instead of wrapping
        assert_eq!(sum(u32::MAX, &lam, &IndexSet::from([1, 2, u32::MAX])), 5 + 4);
    }

    #[test]
    fn literal_inequality_score() {
        // -λ_2 + μ_2 + ν_1
        let w = literal_bundle();
        assert_eq!(score(2, &p(&[1, 1]), &p(&[]), &p(&[]), &w), -1);
        assert_eq!(score(2, &p(&[2]), &p(&[1, 1]), &p(&[1]), &w), 2);
    }

    #[test]
    fn violation_reports_offender() {
        let w = literal_bundle();
        let ineqs = vec![w.clone()];
        assert_eq!(
            violation(2, &p(&[1, 1]), &p(&[]), &p(&[]), &ineqs),
            Some(&w)
        );
        assert!(satisfies(2, &p(&[]), &p(&[]), &p(&[]), &ineqs));
    }

    #[test]
    fn size_triples_have_even_total() {
        let sizes = size_triples(2);
        assert!(sizes.iter().all(|(a, b, c)| (a + b + c) % 2 == 0));
        // 27 triples in [0, 2]^3, 14 of them even
        assert_eq!(sizes.len(), 14);
    }

    #[test]
    fn flags_column_against_empty_pair() {
        let found = flagger(2, 1, FlagMode::Violations, &TableauOracle).unwrap();
        let target = Triple {
            la: p(&[1, 1]),
            mu: Partition::EMPTY,
            nu: Partition::EMPTY,
        };
        assert!(found.iter().any(|c| c.triple == target));
        assert!(found.iter().all(|c| c.witness.is_some()));
    }

    #[test]
    fn empty_triple_never_flagged() {
        let found = flagger(2, 1, FlagMode::Violations, &TableauOracle).unwrap();
        assert!(found.iter().all(|c| {
            !(c.triple.la.is_empty() && c.triple.mu.is_empty() && c.triple.nu.is_empty())
        }));
    }

    #[test]
    fn positivity_mode_without_inequalities_flags_vanishing_triples() {
        let found = flag(2, &[], FlagMode::Positivity, &TableauOracle);
        for c in &found {
            assert!(c.witness.is_none());
            assert!(!TableauOracle.nl_positive(&c.triple.mu, &c.triple.nu, &c.triple.la));
        }
        let column = CounterExample {
            triple: Triple {
                la: p(&[1, 1]),
                mu: Partition::EMPTY,
                nu: Partition::EMPTY,
            },
            witness: None,
        };
        assert!(found.contains(&column));
    }

    #[test]
    fn positivity_mode_skips_vanishing_triple_that_fails() {
        let found = flag(2, &[literal_bundle()], FlagMode::Positivity, &TableauOracle);
        assert!(!found.iter().any(|c| c.triple.la == p(&[1, 1])
            && c.triple.mu.is_empty()
            && c.triple.nu.is_empty()
            && c.witness.is_none()));
        for c in found.iter().filter(|c| c.witness.is_some()) {
            assert!(TableauOracle.nl_positive(&c.triple.mu, &c.triple.nu, &c.triple.la));
        }
    }

    #[test]
    fn positivity_mode_reports_violating_arrangements_of_positive_triples() {
        let ineqs = sat_ineqs(2, 1, &TableauOracle).unwrap();
        let mut found = flag(2, &ineqs, FlagMode::Positivity, &AlwaysPositive);
        assert!(!found.is_empty());

        for c in &found {
            let w = c.witness.as_ref().unwrap();
            let t = &c.triple;
            assert!(score(2, &t.la, &t.mu, &t.nu, w) < 0, "{c}");
            assert_eq!(violation(2, &t.la, &t.mu, &t.nu, &ineqs), Some(w));
        }

        let square = Partition::rectangle(2, 2);
        let mut expected = Vec::new();
        for (kl, km, kn) in size_triples(2) {
            for la in TableauOracle.bounded_partitions(&square, kl) {
                for mu in TableauOracle.bounded_partitions(&square, km) {
                    for nu in TableauOracle.bounded_partitions(&square, kn) {
                        let source = Triple {
                            la: la.clone(),
                            mu: mu.clone(),
                            nu,
                        };
                        for t in arrangements(&source) {
                            if let Some(w) = violation(2, &t.la, &t.mu, &t.nu, &ineqs) {
                                expected.push(CounterExample {
                                    witness: Some(w.clone()),
                                    triple: t,
                                });
                            }
                        }
                    }
                }
            }
        }
        found.sort();
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn positivity_mode_tests_each_distinct_arrangement_once() {
        let ineqs = sat_ineqs(2, 1, &TableauOracle).unwrap();
        let found = flag(2, &ineqs, FlagMode::Positivity, &AlwaysPositive);

        // ([1, 1], [], []) has three distinct arrangements, each enumerated
        // once, and each reports the column once
        let column = Triple {
            la: p(&[1, 1]),
            mu: Partition::EMPTY,
            nu: Partition::EMPTY,
        };
        assert_eq!(found.iter().filter(|c| c.triple == column).count(), 3);

        for t in found.iter().map(|c| &c.triple).collect::<BTreeSet<_>>() {
            let reported = found.iter().filter(|c| &c.triple == t).count();
            assert_eq!(reported, arrangements(t).len(), "{t}");
        }
    }
}
