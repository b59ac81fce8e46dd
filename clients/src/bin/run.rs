//! `saturation-run`: finds counterexamples to the NL numbers claim.
//!
//! Runs the inequality search for `(n, r)`, then tests every partition
//! triple inside the `n × n` square against the resulting inequalities.
//!
//! **Usage:**
//! ```text
//! saturation-run --n <n> --r <r> [--threads <t>] [--mode violations|positivity]
//!                [--config <file.toml>] [--json]
//! ```
//!
//! Flags override values from `--config`. Logs go to stderr and honour
//! `RUST_LOG` (default `saturation=info`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use saturation::{flag, sat_ineqs, FlagMode, SearchConfig, SearchReport, TableauOracle};
use tracing::{debug, info};

/// Counterexample criterion.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Report triples violating some inequality.
    Violations,
    /// Compare the inequalities against Newell–Littlewood positivity.
    Positivity,
}

impl From<Mode> for FlagMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Violations => FlagMode::Violations,
            Mode::Positivity => FlagMode::Positivity,
        }
    }
}

/// Search for saturation inequalities and their counterexamples.
#[derive(Parser)]
#[command(
    name = "saturation-run",
    about = "Finds counterexamples to the NL numbers claim"
)]
struct Args {
    /// Size parameter; subsets are drawn from [1, 4n].
    #[arg(long)]
    n: Option<u32>,

    /// Size of each witness subset.
    #[arg(long)]
    r: Option<u32>,

    /// Worker threads (0 = one per core).
    #[arg(long)]
    threads: Option<usize>,

    /// Counterexample criterion.
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// TOML file with `n`, `r`, `threads` and `mode`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a JSON report instead of text.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn resolve(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::load(path)
                .with_context(|| format!("loading search configuration {}", path.display()))?,
            None => SearchConfig::default(),
        };
        if let Some(n) = self.n {
            config.n = n;
        }
        if let Some(r) = self.r {
            config.r = r;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if let Some(mode) = self.mode {
            config.mode = mode.into();
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "saturation=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = args.resolve()?;

    if config.threads > 0 {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build_global()
        {
            debug!(error = %e, "thread pool already initialized, using existing pool");
        }
    }
    info!(
        n = config.n,
        r = config.r,
        mode = ?config.mode,
        threads = rayon::current_num_threads(),
        "starting search"
    );

    let oracle = TableauOracle;
    let ineqs = sat_ineqs(config.n, config.r, &oracle)?;
    let flagged = flag(config.n, &ineqs, config.mode, &oracle);
    let report = SearchReport::new(config, ineqs, flagged);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
