//! Engine configuration
//!
//! Settings can be loaded from a TOML file; missing keys fall back to the
//! defaults. Command-line flags are applied on top by the binary.
//!
//! ```toml
//! depth = 6
//! threads = 4
//! evaluator = "disk-difference"
//! countdown_secs = 0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::eval::EvaluatorKind;

/// Search depth used when nothing else is configured
pub const DEFAULT_DEPTH: u8 = 5;

/// Seconds shown before the AI replies in the GUI
pub const DEFAULT_COUNTDOWN_SECS: u64 = 3;

/// AI engine and driver settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched below each root move
    pub depth: u8,

    /// Worker threads for the root search
    pub threads: usize,

    /// Static evaluation function
    pub evaluator: EvaluatorKind,

    /// Countdown before the AI moves (GUI only)
    pub countdown_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            threads: 1,
            evaluator: EvaluatorKind::default(),
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Reject settings the search cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(Error::InvalidConfiguration {
                message: "depth must be at least 1".to_string(),
            });
        }
        if self.threads == 0 {
            return Err(Error::InvalidConfiguration {
                message: "threads must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
