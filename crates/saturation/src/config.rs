//! Search configuration.
//!
//! A [`SearchConfig`] can be written by hand, parsed from TOML, or built
//! from command-line flags. Missing TOML keys take their defaults:
//!
//! ```toml
//! n = 2
//! r = 1
//! threads = 4          # 0 = rayon default
//! mode = "positivity"  # or "violations"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::SaturationError;
use crate::flagger::FlagMode;
use crate::ineqs::validate_parameters;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`SearchConfig`].
    #[error("invalid search configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The parameters are well-formed but describe no instance.
    #[error(transparent)]
    Invalid(#[from] SaturationError),
}

/// Parameters of one SatIneqs + Flagger run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Size parameter; the universe is `[1, 4n]`.
    pub n: u32,
    /// Subset size of each witness set.
    pub r: u32,
    /// Worker threads, 0 for the rayon default.
    pub threads: usize,
    /// Counterexample criterion.
    pub mode: FlagMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            n: 1,
            r: 1,
            threads: 0,
            mode: FlagMode::Violations,
        }
    }
}

impl SearchConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] for parameters rejected by [`Self::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks that `(n, r)` describes an instance.
    ///
    /// # Errors
    ///
    /// Returns [`SaturationError::InvalidParameters`] when `n = 0` and `r > 0`.
    pub fn validate(&self) -> Result<(), SaturationError> {
        validate_parameters(self.n, self.r)
    }
}
