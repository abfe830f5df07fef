// Pipeline orchestrator: raw directory + ranking export -> clean dataset.
//
// Single-threaded, run-to-completion batch. Both inputs are read fully into
// memory, the whole result is computed, and only then is the output file
// written. A failed run never leaves a partial output behind.

use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::cleaner::{self, CleanPlayer};
use crate::config::PipelineConfig;
use crate::matcher::{self, MatchOutcome};
use crate::players::{self, DirectoryError};
use crate::rankings::{self, RankingEntry, RankingsError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Rankings(#[from] RankingsError),

    #[error("failed to serialize clean dataset: {source}")]
    Serialize { source: serde_json::Error },

    #[error("failed to write clean dataset to {path}: {source}")]
    Output {
        path: String,
        source: std::io::Error,
    },
}

/// Result of a successful run. `unmatched` is diagnostic only; the run
/// succeeded regardless of how many ranking rows found no player.
#[derive(Debug)]
pub struct PipelineReport {
    pub clean: Vec<CleanPlayer>,
    pub unmatched: Vec<RankingEntry>,
    /// Players that matched a ranking row, before the eligibility filter.
    pub matched_players: usize,
}

/// Run the full pipeline: load players, parse rankings, join, filter, and
/// overwrite the output file with the pretty-printed clean dataset.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport, PipelineError> {
    let players = players::load_players(Path::new(&config.paths.players))?;
    info!("loaded {} raw player records", players.len());

    let rankings = rankings::parse_rankings_file(Path::new(&config.paths.rankings))?;
    info!("parsed {} ranking rows", rankings.len());

    let MatchOutcome {
        matched,
        unmatched_rankings,
    } = matcher::match_rankings(&players, &rankings);
    info!("matched {} players against the rankings", matched.len());
    for entry in &unmatched_rankings {
        warn!(
            "ranking entry '{}' (rank {:?}) matched no player",
            entry.name, entry.rank
        );
    }

    let clean = cleaner::clean(&matched, &config.eligible_position_set());
    info!("{} players eligible for the draftboard", clean.len());

    write_output(Path::new(&config.paths.output), &clean)?;

    Ok(PipelineReport {
        clean,
        unmatched: unmatched_rankings,
        matched_players: matched.len(),
    })
}

/// Serialize first, then touch the filesystem.
fn write_output(path: &Path, clean: &[CleanPlayer]) -> Result<(), PipelineError> {
    let mut json = serde_json::to_string_pretty(clean)
        .map_err(|e| PipelineError::Serialize { source: e })?;
    json.push('\n');

    let io_err = |e: std::io::Error| PipelineError::Output {
        path: path.display().to_string(),
        source: e,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    std::fs::write(path, json).map_err(io_err)?;

    info!("wrote clean dataset to {}", path.display());
    Ok(())
}
