// Raw player directory loading.
//
// The directory feed is either a JSON object keyed by player id (keys are
// ignored; each record carries its own id) or a plain JSON array. Extra feed
// fields are silently ignored.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read player directory {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse player directory {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// One entry from the raw player directory.
///
/// `player_id` defaults to the empty string when the feed omits it; such
/// records survive loading and are rejected later by the cleaner.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlayerRecord {
    #[serde(default)]
    pub player_id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
}

impl RawPlayerRecord {
    /// Display name: `full_name` when present and non-blank, otherwise the
    /// first/last concatenation with surrounding whitespace trimmed. A record
    /// with no name parts yields the empty string.
    pub fn display_name(&self) -> String {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => format!(
                "{} {}",
                self.first_name.as_deref().unwrap_or(""),
                self.last_name.as_deref().unwrap_or("")
            )
            .trim()
            .to_string(),
        }
    }
}

/// The two directory file shapes. `BTreeMap` keeps keyed directories in a
/// deterministic order so repeated runs produce identical output.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DirectoryFile {
    Keyed(BTreeMap<String, RawPlayerRecord>),
    Listed(Vec<RawPlayerRecord>),
}

fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<RawPlayerRecord>, serde_json::Error> {
    let file: DirectoryFile = serde_json::from_reader(rdr)?;
    Ok(match file {
        DirectoryFile::Keyed(map) => map.into_values().collect(),
        DirectoryFile::Listed(list) => list,
    })
}

/// Load the full raw player directory from a JSON file.
pub fn load_players(path: &Path) -> Result<Vec<RawPlayerRecord>, DirectoryError> {
    let file = std::fs::File::open(path).map_err(|e| DirectoryError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_players_from_reader(std::io::BufReader::new(file)).map_err(|e| DirectoryError::Json {
        path: path.display().to_string(),
        source: e,
    })
}
