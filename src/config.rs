//! Configuration for applications embedding the presenter layer

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_LOG_DIR: &str = ".logs";
const DEFAULT_LOG_FILE_PREFIX: &str = "mixtape";
const DEFAULT_LOG_FILTER: &str = "mixtape=debug,warn";

/// Where and how much to log
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory receiving the daily log files
    pub directory: PathBuf,
    /// File name prefix, files are named `<prefix>.YYYY-MM-DD`
    pub file_prefix: String,
    /// Filter directive used when `RUST_LOG` is not set
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_LOG_DIR),
            file_prefix: DEFAULT_LOG_FILE_PREFIX.to_string(),
            default_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixtapeConfig {
    pub logging: LoggingConfig,
}

impl MixtapeConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid mixtape configuration")
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&content)
    }
}
