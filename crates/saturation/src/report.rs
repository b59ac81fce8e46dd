//! Search report: the inequalities and counterexamples of one run.

use std::fmt;

use serde::Serialize;

use crate::admissibility::WitnessBundle;
use crate::config::SearchConfig;
use crate::flagger::CounterExample;

/// Everything one SatIneqs + Flagger run produced.
///
/// Both collections are sorted so that reports of the same run compare
/// equal regardless of how the parallel searches interleaved.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// Parameters of the run.
    pub config: SearchConfig,
    /// Admissible witness bundles.
    pub inequalities: Vec<WitnessBundle>,
    /// Flagged triples.
    pub counterexamples: Vec<CounterExample>,
}

impl SearchReport {
    /// Assembles a report, sorting both result sets.
    pub fn new(
        config: SearchConfig,
        mut inequalities: Vec<WitnessBundle>,
        mut counterexamples: Vec<CounterExample>,
    ) -> Self {
        inequalities.sort();
        counterexamples.sort();
        Self {
            config,
            inequalities,
            counterexamples,
        }
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of sets: {}", self.inequalities.len())?;
        for sets in &self.inequalities {
            writeln!(f, "{sets}")?;
        }
        for counterexample in &self.counterexamples {
            writeln!(f, "Flagged: {counterexample}")?;
        }
        write!(f, "==============================")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flagger::flagger;
    use crate::ineqs::sat_ineqs;
    use crate::oracle::TableauOracle;

    #[test]
    fn text_layout() {
        let report = SearchReport::new(SearchConfig::default(), Vec::new(), Vec::new());
        assert_eq!(
            report.to_string(),
            "Number of sets: 0\n=============================="
        );
    }

    #[test]
    fn sorted_regardless_of_schedule() {
        let config = SearchConfig {
            n: 2,
            ..SearchConfig::default()
        };
        let a = SearchReport::new(
            config.clone(),
            sat_ineqs(2, 1, &TableauOracle).unwrap(),
            flagger(2, 1, config.mode, &TableauOracle).unwrap(),
        );
        let mut reversed = sat_ineqs(2, 1, &TableauOracle).unwrap();
        reversed.reverse();
        let b = SearchReport::new(config, reversed, a.counterexamples.clone());
        assert_eq!(a.inequalities, b.inequalities);
        assert!(a.to_string().starts_with(&format!(
            "Number of sets: {}\n",
            a.inequalities.len()
        )));
    }
}
