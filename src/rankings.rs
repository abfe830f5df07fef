// Ranking export (CSV) parsing.
//
// The export's header names its columns; only the rank column ("RK") and the
// name column ("PLAYER NAME") are consumed, located by case-insensitive match.
// Everything else in the file is ignored.

use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::normalize::normalize;

/// Header label of the rank column, matched case-insensitively.
pub const RANK_COLUMN: &str = "RK";
/// Header label of the name column, matched case-insensitively.
pub const NAME_COLUMN: &str = "PLAYER NAME";

/// One row of the ranking export. `name` is already a normalized join key;
/// `rank` is `None` when the source field was not numeric (the row is kept,
/// not dropped, so a real player is never silently hidden).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    pub name: String,
    pub rank: Option<u32>,
}

#[derive(Debug, Error)]
pub enum RankingsError {
    #[error("failed to read rankings file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed rankings CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("rankings header is missing required column \"{column}\"")]
    MissingColumn { column: &'static str },
}

/// Parse the ranking export from any reader.
///
/// Fails before any row processing when the header lacks a rank or name
/// column. Rows are otherwise never rejected: short rows yield an empty
/// (unmatchable) name, and unparseable ranks are retained as `None`.
pub fn parse_rankings_from_reader<R: Read>(rdr: R) -> Result<Vec<RankingEntry>, RankingsError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);

    let headers = reader.headers()?.clone();
    let find = |label: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(label))
    };
    let rank_idx = find(RANK_COLUMN).ok_or(RankingsError::MissingColumn {
        column: RANK_COLUMN,
    })?;
    let name_idx = find(NAME_COLUMN).ok_or(RankingsError::MissingColumn {
        column: NAME_COLUMN,
    })?;

    let mut entries = Vec::new();
    for result in reader.records() {
        let record = result?;
        let raw_name = record.get(name_idx).unwrap_or("").trim();

        let rank = match record.get(rank_idx).map(str::trim) {
            Some(field) => match field.parse::<u32>() {
                Ok(rank) => Some(rank),
                Err(_) => {
                    warn!("unparseable rank '{field}' for '{raw_name}', keeping row without a rank");
                    None
                }
            },
            None => {
                warn!("short row for '{raw_name}' has no rank field, keeping row without a rank");
                None
            }
        };

        entries.push(RankingEntry {
            name: normalize(raw_name),
            rank,
        });
    }

    Ok(entries)
}

/// Parse the ranking export from a CSV file.
pub fn parse_rankings_file(path: &Path) -> Result<Vec<RankingEntry>, RankingsError> {
    let file = std::fs::File::open(path).map_err(|e| RankingsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_rankings_from_reader(std::io::BufReader::new(file))
}
