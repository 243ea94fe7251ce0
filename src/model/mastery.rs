use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    catalog::Champion,
    ids::{ChampionId, SummonerId},
    summoner::Summoner,
};
use crate::service::{catalog::StaticCatalog, live::LiveClient, LookupResult};

/// A summoner's mastery progress on one champion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMastery {
    pub chest_granted: bool,
    pub champion_level: i64,
    pub champion_points: i64,
    pub champion_id: ChampionId,
    pub champion_points_until_next_level: i64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_play_time: DateTime<Utc>,
    pub tokens_earned: i64,
    pub champion_points_since_last_level: i64,
    pub summoner_id: SummonerId,
}

impl ChampionMastery {
    /// Resolves the summoner this mastery belongs to.
    pub fn get_summoner(&self, client: &impl LiveClient) -> LookupResult<Summoner> {
        client.get_summoner_by_id(&self.summoner_id)
    }

    /// Resolves the champion this mastery was earned on.
    pub fn get_champion(&self, catalog: &impl StaticCatalog) -> LookupResult<Champion> {
        catalog.get_champion_by_key(&self.champion_id.key())
    }
}
