use std::fmt;

use serde::{Deserialize, Serialize};

use super::{cache::RankedCache, ids::SummonerId, summoner::Summoner};
use crate::service::{live::LiveClient, LookupResult};

/// A league with all player entries in it.
///
/// Carries the only piece of mutable internal state in the model layer:
/// the memoized rank projection behind [`LeagueList::get_rank`]. A
/// single instance must not be queried from multiple threads without
/// external synchronization (the `&mut self` receiver enforces this for
/// safe code).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueList {
    pub league_id: String,
    pub tier: String,
    pub entries: Vec<LeagueItem>,
    pub queue: String,
    pub name: String,
    #[serde(skip)]
    ranked: RankedCache,
}

impl LeagueList {
    /// Returns the entry at the given zero-based rank, ordered by league
    /// points descending. Entries with equal points keep their payload
    /// order.
    ///
    /// The projection is recomputed only when the number of entries has
    /// changed since it was built. Within a run of queries at a constant
    /// length the served order is frozen, even if individual entries'
    /// points are mutated in place; call [`LeagueList::refresh_ranking`]
    /// to force a resort after such mutations.
    pub fn get_rank(&mut self, position: usize) -> Result<&LeagueItem, RankOutOfRange> {
        let order = self.ranked.view(&self.entries, |e| e.league_points);
        match order.get(position) {
            Some(&idx) => Ok(&self.entries[idx]),
            None => Err(RankOutOfRange {
                position,
                len: self.entries.len(),
            }),
        }
    }

    /// Drops the memoized rank projection so the next query sorts again.
    /// Explicit opt-in for callers that mutate scores without changing
    /// the entry count.
    pub fn refresh_ranking(&mut self) {
        self.ranked.invalidate();
    }
}

/// A summoner's ranked standing within a league.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueItem {
    pub queue_type: String,
    pub summoner_name: String,
    pub hot_streak: bool,
    pub mini_series: Option<MiniSeries>,
    pub wins: i64,
    pub veteran: bool,
    pub losses: i64,
    pub fresh_blood: bool,
    pub inactive: bool,
    pub tier: String,
    pub rank: String,
    pub summoner_id: SummonerId,
    pub league_points: i64,
}

impl LeagueItem {
    /// Resolves the summoner holding this standing.
    pub fn get_summoner(&self, client: &impl LiveClient) -> LookupResult<Summoner> {
        client.get_summoner_by_id(&self.summoner_id)
    }
}

/// Promotion series played to ascend to the next tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MiniSeries {
    pub progress: String,
    pub losses: i64,
    pub target: i64,
    pub wins: i64,
}

/// Rank query past the end of the entry collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOutOfRange {
    pub position: usize,
    pub len: usize,
}

impl fmt::Display for RankOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "rank {} requested on a league with {} entries",
            self.position, self.len
        )
    }
}

impl std::error::Error for RankOutOfRange {}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, points: i64) -> LeagueItem {
        LeagueItem {
            summoner_name: name.to_string(),
            league_points: points,
            ..Default::default()
        }
    }

    fn league(points: &[i64]) -> LeagueList {
        LeagueList {
            tier: "GOLD".to_string(),
            entries: points
                .iter()
                .enumerate()
                .map(|(i, &p)| entry(&format!("player{}", i), p))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn get_rank_orders_by_points_descending() {
        let mut league = league(&[10, 30, 20]);
        assert_eq!(league.get_rank(0).unwrap().league_points, 30);
        assert_eq!(league.get_rank(1).unwrap().league_points, 20);
        assert_eq!(league.get_rank(2).unwrap().league_points, 10);
    }

    #[test]
    fn get_rank_ties_keep_payload_order() {
        let mut league = league(&[50, 70, 50]);
        assert_eq!(league.get_rank(1).unwrap().summoner_name, "player0");
        assert_eq!(league.get_rank(2).unwrap().summoner_name, "player2");
    }

    #[test]
    fn get_rank_out_of_range_is_an_error() {
        let mut league = league(&[10, 30, 20]);
        let err = league.get_rank(5).unwrap_err();
        assert_eq!(err, RankOutOfRange { position: 5, len: 3 });
    }

    #[test]
    fn score_mutation_without_length_change_serves_the_frozen_order() {
        let mut league = league(&[10, 30, 20]);
        assert_eq!(league.get_rank(0).unwrap().summoner_name, "player1");

        // Stale by design: the length did not change, so the cached
        // order survives even though player0 now leads on points.
        league.entries[0].league_points = 99;
        assert_eq!(league.get_rank(0).unwrap().summoner_name, "player1");
    }

    #[test]
    fn appending_an_entry_forces_a_resort() {
        let mut league = league(&[10, 30, 20]);
        league.get_rank(0).unwrap();

        league.entries.push(entry("late", 25));
        assert_eq!(league.get_rank(0).unwrap().league_points, 30);
        assert_eq!(league.get_rank(1).unwrap().summoner_name, "late");
        assert_eq!(league.get_rank(3).unwrap().league_points, 10);
    }

    #[test]
    fn refresh_ranking_resorts_without_length_change() {
        let mut league = league(&[10, 30, 20]);
        league.get_rank(0).unwrap();

        league.entries[0].league_points = 99;
        league.refresh_ranking();
        assert_eq!(league.get_rank(0).unwrap().summoner_name, "player0");
    }
}
