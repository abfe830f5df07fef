// Fuzzy join of the raw player directory against the ranking export.
//
// Both sides are reduced to normalized name keys; equality of keys is the
// only identity test. A player absent from the rankings is an expected,
// silent outcome (inactive or non-skill players legitimately have no rank).

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::normalize::normalize;
use crate::players::RawPlayerRecord;
use crate::rankings::RankingEntry;

/// A raw player together with the rank the join assigned. `default_rank` is
/// `None` when the matching ranking row carried an unparseable rank.
#[derive(Debug, Clone)]
pub struct RankedPlayer {
    pub record: RawPlayerRecord,
    pub default_rank: Option<u32>,
}

/// Structured join result. Unmatched ranking rows are diagnostic output for
/// operator review; how to surface them is the caller's decision.
#[derive(Debug)]
pub struct MatchOutcome {
    pub matched: Vec<RankedPlayer>,
    pub unmatched_rankings: Vec<RankingEntry>,
}

/// Join players against rankings by normalized name.
///
/// Duplicate ranking keys resolve last-write-wins: the later row's rank is
/// the one assigned. Players whose display name normalizes to the empty
/// string cannot match unless the rankings themselves contain an empty key,
/// which well-formed exports never do.
pub fn match_rankings(
    players: &[RawPlayerRecord],
    rankings: &[RankingEntry],
) -> MatchOutcome {
    let mut rank_by_key: HashMap<&str, Option<u32>> = HashMap::new();
    for entry in rankings {
        if rank_by_key.insert(entry.name.as_str(), entry.rank).is_some() {
            warn!("duplicate ranking key '{}', later row wins", entry.name);
        }
    }

    let mut matched = Vec::new();
    let mut matched_keys: HashSet<String> = HashSet::new();
    for player in players {
        let key = normalize(&player.display_name());
        if let Some(rank) = rank_by_key.get(key.as_str()) {
            matched.push(RankedPlayer {
                record: player.clone(),
                default_rank: *rank,
            });
            matched_keys.insert(key);
        }
    }

    let unmatched_rankings = rankings
        .iter()
        .filter(|entry| !matched_keys.contains(&entry.name))
        .cloned()
        .collect();

    MatchOutcome {
        matched,
        unmatched_rankings,
    }
}
