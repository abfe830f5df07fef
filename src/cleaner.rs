// Final filter and shape of the draftboard dataset.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matcher::RankedPlayer;

/// Fantasy-relevant positions eligible for the draftboard. Overridable via
/// the `eligible_positions` config key.
pub const DEFAULT_ELIGIBLE_POSITIONS: &[&str] = &["QB", "RB", "WR", "TE", "DEF", "K"];

/// The durable output record, one per matched eligible player. `default_rank`
/// serializes to JSON null when the ranking source had no usable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanPlayer {
    pub id: String,
    pub name: String,
    pub position: String,
    pub team: String,
    pub age: Option<u32>,
    pub default_rank: Option<u32>,
}

/// Filter matched players down to the draftboard set and produce the clean
/// output shape.
///
/// A player is kept when its id is non-empty, its position is in the eligible
/// set, and its status is "Active" or absent (some feeds omit status for
/// active players, so absence is treated as active).
///
/// Output is ordered by display name ascending (case-insensitive, with raw
/// name then id as tie-breaks); rank ordering is a presentation concern left
/// to the consumer.
pub fn clean(players: &[RankedPlayer], eligible_positions: &HashSet<String>) -> Vec<CleanPlayer> {
    let mut out: Vec<CleanPlayer> = players
        .iter()
        .filter_map(|p| {
            let record = &p.record;
            if record.player_id.is_empty() {
                return None;
            }
            let position = record.position.as_deref()?;
            if !eligible_positions.contains(position) {
                return None;
            }
            match record.status.as_deref() {
                None | Some("Active") => {}
                Some(_) => return None,
            }

            Some(CleanPlayer {
                id: record.player_id.clone(),
                name: record.display_name(),
                position: position.to_string(),
                team: record.team.clone().unwrap_or_default(),
                age: record.age,
                default_rank: p.default_rank,
            })
        })
        .collect();

    out.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });

    out
}

/// The default eligible-position set as an owned `HashSet`.
pub fn default_eligible_positions() -> HashSet<String> {
    DEFAULT_ELIGIBLE_POSITIONS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::RawPlayerRecord;

    fn ranked(
        id: &str,
        name: &str,
        position: Option<&str>,
        status: Option<&str>,
        rank: Option<u32>,
    ) -> RankedPlayer {
        RankedPlayer {
            record: RawPlayerRecord {
                player_id: id.to_string(),
                full_name: Some(name.to_string()),
                first_name: None,
                last_name: None,
                position: position.map(str::to_string),
                team: Some("KC".to_string()),
                age: Some(27),
                status: status.map(str::to_string),
            },
            default_rank: rank,
        }
    }

    // -- Position filter --

    #[test]
    fn ineligible_position_excluded() {
        let players = [
            ranked("1", "Patrick Mahomes", Some("QB"), Some("Active"), Some(1)),
            ranked("2", "Roquan Smith", Some("LB"), Some("Active"), Some(2)),
        ];
        let out = clean(&players, &default_eligible_positions());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "1");
    }

    #[test]
    fn missing_position_excluded() {
        let players = [ranked("1", "Mystery Man", None, Some("Active"), None)];
        assert!(clean(&players, &default_eligible_positions()).is_empty());
    }

    #[test]
    fn configured_position_set_respected() {
        let players = [ranked("1", "Justin Tucker", Some("K"), Some("Active"), Some(99))];
        let no_kickers: HashSet<String> =
            ["QB", "RB", "WR", "TE"].iter().map(|p| p.to_string()).collect();
        assert!(clean(&players, &no_kickers).is_empty());
        assert_eq!(clean(&players, &default_eligible_positions()).len(), 1);
    }

    // -- Status filter --

    #[test]
    fn absent_status_treated_as_active() {
        let players = [ranked("1", "Bijan Robinson", Some("RB"), None, Some(2))];
        assert_eq!(clean(&players, &default_eligible_positions()).len(), 1);
    }

    #[test]
    fn inactive_status_excluded() {
        let players = [ranked("1", "Davante Adams", Some("WR"), Some("Inactive"), Some(5))];
        assert!(clean(&players, &default_eligible_positions()).is_empty());
    }

    // -- Id filter --

    #[test]
    fn empty_id_excluded() {
        let players = [ranked("", "Ghost Player", Some("WR"), Some("Active"), Some(7))];
        assert!(clean(&players, &default_eligible_positions()).is_empty());
    }

    // -- Transform --

    #[test]
    fn fields_carried_through() {
        let players = [ranked("1", "Patrick Mahomes", Some("QB"), Some("Active"), Some(4))];
        let out = clean(&players, &default_eligible_positions());
        assert_eq!(
            out[0],
            CleanPlayer {
                id: "1".to_string(),
                name: "Patrick Mahomes".to_string(),
                position: "QB".to_string(),
                team: "KC".to_string(),
                age: Some(27),
                default_rank: Some(4),
            }
        );
    }

    #[test]
    fn missing_team_defaults_to_empty_string() {
        let mut p = ranked("1", "Free Agent", Some("WR"), None, None);
        p.record.team = None;
        let out = clean(&[p], &default_eligible_positions());
        assert_eq!(out[0].team, "");
    }

    #[test]
    fn rankless_match_serializes_null_rank() {
        let players = [ranked("1", "Bijan Robinson", Some("RB"), None, None)];
        let out = clean(&players, &default_eligible_positions());
        let json = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(json["default_rank"], serde_json::Value::Null);
    }

    // -- Ordering --

    #[test]
    fn output_sorted_by_name_ascending() {
        let players = [
            ranked("3", "Tyreek Hill", Some("WR"), None, Some(3)),
            ranked("1", "Bijan Robinson", Some("RB"), None, Some(2)),
            ranked("2", "deAndre Hopkins", Some("WR"), None, Some(40)),
            ranked("4", "CeeDee Lamb", Some("WR"), None, Some(1)),
        ];
        let out = clean(&players, &default_eligible_positions());
        let names: Vec<&str> = out.iter().map(|p| p.name.as_str()).collect();
        // Case-insensitive: "deAndre" sorts between "CeeDee" and "Tyreek".
        assert_eq!(
            names,
            ["Bijan Robinson", "CeeDee Lamb", "deAndre Hopkins", "Tyreek Hill"]
        );
    }
}
