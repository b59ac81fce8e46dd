//! Littlewood–Richardson and Newell–Littlewood coefficients by tableau
//! counting.
//!
//! `c^λ_{μν}` is the number of semistandard skew tableaux of shape `λ/μ`
//! and content `ν` whose reverse reading word (rows top to bottom, each
//! row right to left) is a lattice word.

use crate::oracle::BoundedPartitions;
use crate::partition::Partition;

/// Computes `c^target_{left,right}`.
pub fn lr_coefficient(target: &Partition, left: &Partition, right: &Partition) -> u64 {
    if target.size() != left.size() + right.size() {
        return 0;
    }
    if !left.is_inside(target) || !right.is_inside(target) {
        return 0;
    }
    let mut filler = LrFiller::new(target, left, right);
    filler.count(0)
}

/// Computes the Newell–Littlewood number
/// `N_{μ,ν,λ} = Σ_{α,β,γ} c^μ_{α,β} c^ν_{α,γ} c^λ_{β,γ}`.
///
/// With `positivity_only`, returns as soon as the sum is known to be
/// positive, so the result is only meaningful as zero / nonzero.
pub fn nl_coefficient(mu: &Partition, nu: &Partition, lam: &Partition, positivity_only: bool) -> u64 {
    let (m, n, l) = (
        i64::from(mu.size()),
        i64::from(nu.size()),
        i64::from(lam.size()),
    );
    if (m + n + l) % 2 != 0 {
        return 0;
    }
    let (a, b, c) = ((m + n - l) / 2, (m + l - n) / 2, (n + l - m) / 2);
    if a < 0 || b < 0 || c < 0 {
        return 0;
    }
    let (a, b, c) = (a as u32, b as u32, c as u32);

    let mut total = 0u64;
    for alpha in BoundedPartitions::new(&mu.intersection(nu), a) {
        for beta in BoundedPartitions::new(mu, b) {
            let c1 = lr_coefficient(mu, &alpha, &beta);
            if c1 == 0 {
                continue;
            }
            for gamma in BoundedPartitions::new(&nu.intersection(lam), c) {
                let c2 = lr_coefficient(nu, &alpha, &gamma);
                if c2 == 0 {
                    continue;
                }
                let c3 = lr_coefficient(lam, &beta, &gamma);
                total += c1 * c2 * c3;
                if positivity_only && total > 0 {
                    return total;
                }
            }
        }
    }
    total
}

/// Backtracking filler for LR tableaux of shape `outer / inner`.
struct LrFiller {
    inner: Vec<u32>,
    content: Vec<u32>,
    /// Skew cells in reverse reading order.
    cells: Vec<(usize, usize)>,
    /// Entries indexed by `[row][col]`; zero means unfilled or not in the skew shape.
    grid: Vec<Vec<u32>>,
    /// Occurrences of each value placed so far, 1-based.
    counts: Vec<u32>,
}

impl LrFiller {
    fn new(outer: &Partition, inner: &Partition, content: &Partition) -> Self {
        let rows = outer.len();
        let inner: Vec<u32> = (0..rows).map(|i| inner.part(i)).collect();
        let mut cells = Vec::with_capacity((outer.size() - inner.iter().sum::<u32>()) as usize);
        for (r, &inner_r) in inner.iter().enumerate() {
            for c in (inner_r..outer.part(r)).rev() {
                cells.push((r, c as usize));
            }
        }
        let grid = outer
            .parts()
            .iter()
            .map(|&w| vec![0; w as usize])
            .collect();
        Self {
            inner,
            content: content.parts().to_vec(),
            cells,
            grid,
            counts: vec![0; content.len() + 1],
        }
    }

    fn count(&mut self, idx: usize) -> u64 {
        let Some(&(r, c)) = self.cells.get(idx) else {
            return 1;
        };

        // Rows weakly increase left to right; the cell to the right is already filled.
        let max = match self.grid[r].get(c + 1) {
            Some(&right) => right,
            None => self.content.len() as u32,
        };
        // Columns strictly increase downward.
        let min = if r > 0 && (c as u32) >= self.inner[r - 1] {
            self.grid[r - 1][c] + 1
        } else {
            1
        };

        let mut total = 0;
        for v in min..=max {
            let vi = v as usize;
            if self.counts[vi] >= self.content[vi - 1] {
                continue;
            }
            if vi > 1 && self.counts[vi - 1] <= self.counts[vi] {
                continue;
            }
            self.counts[vi] += 1;
            self.grid[r][c] = v;
            total += self.count(idx + 1);
            self.grid[r][c] = 0;
            self.counts[vi] -= 1;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(parts: &[u32]) -> Partition {
        Partition::new(parts.to_vec()).unwrap()
    }

    #[test]
    fn pieri_cases() {
        assert_eq!(lr_coefficient(&p(&[2]), &p(&[1]), &p(&[1])), 1);
        assert_eq!(lr_coefficient(&p(&[1, 1]), &p(&[1]), &p(&[1])), 1);
        assert_eq!(lr_coefficient(&p(&[2, 1]), &p(&[1]), &p(&[1, 1])), 1);
        assert_eq!(lr_coefficient(&p(&[3]), &p(&[1]), &p(&[1, 1])), 0);
    }

    #[test]
    fn multiplicity_two() {
        assert_eq!(
            lr_coefficient(&p(&[3, 2, 1]), &p(&[2, 1]), &p(&[2, 1])),
            2
        );
    }

    #[test]
    fn empty_factors() {
        assert_eq!(lr_coefficient(&p(&[]), &p(&[]), &p(&[])), 1);
        assert_eq!(lr_coefficient(&p(&[1]), &p(&[1]), &p(&[])), 1);
        assert_eq!(lr_coefficient(&p(&[]), &p(&[6]), &p(&[6])), 0);
        assert_eq!(lr_coefficient(&p(&[6]), &p(&[5]), &p(&[1])), 1);
    }

    #[test]
    fn symmetric_in_factors() {
        let target = p(&[4, 3, 2, 1]);
        let (a, b) = (p(&[3, 1]), p(&[2, 2, 1, 1]));
        assert_eq!(
            lr_coefficient(&target, &a, &b),
            lr_coefficient(&target, &b, &a)
        );
    }

    #[test]
    fn newell_littlewood_small() {
        assert_eq!(nl_coefficient(&p(&[1]), &p(&[1]), &p(&[]), false), 1);
        assert_eq!(nl_coefficient(&p(&[1]), &p(&[]), &p(&[]), false), 0);
        assert_eq!(nl_coefficient(&p(&[1, 1]), &p(&[]), &p(&[]), false), 0);
        assert_eq!(nl_coefficient(&p(&[1]), &p(&[1]), &p(&[1, 1]), false), 1);
        assert_eq!(nl_coefficient(&p(&[1]), &p(&[1]), &p(&[2]), false), 1);
    }

    #[test]
    fn positivity_flag_agrees_on_zero() {
        for (mu, nu, lam) in [
            (p(&[2]), p(&[1]), p(&[1])),
            (p(&[2]), p(&[2]), p(&[])),
            (p(&[2, 2]), p(&[1]), p(&[])),
        ] {
            let full = nl_coefficient(&mu, &nu, &lam, false);
            let flag = nl_coefficient(&mu, &nu, &lam, true);
            assert_eq!(full == 0, flag == 0);
        }
    }
}
