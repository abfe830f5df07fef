// Pipeline configuration loading (config/pipeline.toml).
//
// Every key has a default, so the pipeline runs without a config file; the
// file only overrides paths, the fetch endpoint, or the eligible positions.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cleaner::DEFAULT_ELIGIBLE_POSITIONS;

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/pipeline.toml";

const DEFAULT_PLAYERS_URL: &str = "https://api.sleeper.app/v1/players/nfl";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub paths: DataPaths,
    pub fetch: FetchConfig,
    pub eligible_positions: Vec<String>,
}

/// Input and output file locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    /// Input A: raw player directory (JSON object or array).
    pub players: String,
    /// Input B: third-party ranking export (CSV).
    pub rankings: String,
    /// Output: clean ranked dataset (pretty-printed JSON array).
    pub output: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Endpoint returning the full raw player directory.
    pub players_url: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            players: "data/players.json".to_string(),
            rankings: "data/rankings.csv".to_string(),
            output: "data/players.clean.json".to_string(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            players_url: DEFAULT_PLAYERS_URL.to_string(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            paths: DataPaths::default(),
            fetch: FetchConfig::default(),
            eligible_positions: DEFAULT_ELIGIBLE_POSITIONS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load from [`DEFAULT_CONFIG_PATH`] when it exists, otherwise fall back
    /// to the built-in defaults.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// The eligible-position set as an owned `HashSet` for membership tests.
    pub fn eligible_position_set(&self) -> HashSet<String> {
        self.eligible_positions.iter().cloned().collect()
    }
}
