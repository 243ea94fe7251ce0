use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    catalog::{Champion, SummonerSpell},
    constants::{GameMap, Queue},
    ids::{ChampionId, GameId, MapId, ProfileIconId, Puuid, QueueId, SummonerId, SummonerSpellId},
    matches::Match,
    summoner::Summoner,
};
use crate::service::{catalog::StaticCatalog, live::LiveClient, LookupResult};

/// An ongoing game as seen by the spectator endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveGame {
    pub game_id: GameId,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub game_start_time: DateTime<Utc>,
    pub platform_id: String,
    pub game_mode: String,
    pub map_id: MapId,
    pub game_type: String,
    pub banned_champions: Vec<BannedChampion>,
    pub observers: Observer,
    pub participants: Vec<CurrentGameParticipant>,
    pub game_length: i64,
    pub game_queue_config_id: QueueId,
}

impl ActiveGame {
    /// Resolves the finished match this game turned into. The live
    /// record only carries the bare game id, so the compound match key
    /// is derived from the home region of the client performing the
    /// lookup.
    pub fn get_match(&self, client: &impl LiveClient) -> LookupResult<Match> {
        client.get_match(&self.game_id.match_key(client.region()))
    }

    /// Resolves the queue this game runs in.
    pub fn get_queue(&self, catalog: &impl StaticCatalog) -> LookupResult<Queue> {
        catalog.get_queue(self.game_queue_config_id)
    }

    /// Resolves the map this game is played on.
    pub fn get_map(&self, catalog: &impl StaticCatalog) -> LookupResult<GameMap> {
        catalog.get_map(self.map_id)
    }
}

/// A champion ban during the pick/ban phase of an ongoing game.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannedChampion {
    pub pick_turn: i64,
    pub champion_id: ChampionId,
    pub team_id: i64,
}

impl BannedChampion {
    /// Resolves the banned champion.
    pub fn get_champion(&self, catalog: &impl StaticCatalog) -> LookupResult<Champion> {
        catalog.get_champion_by_key(&self.champion_id.key())
    }
}

/// An observer of an ongoing game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Observer {
    pub encryption_key: String,
}

/// A player in an ongoing game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentGameParticipant {
    pub profile_icon_id: ProfileIconId,
    pub champion_id: ChampionId,
    pub summoner_name: String,
    pub game_customization_objects: Vec<GameCustomizationObject>,
    pub bot: bool,
    pub perks: Option<Perks>,
    pub spell2_id: SummonerSpellId,
    pub spell1_id: SummonerSpellId,
    pub team_id: i64,
    pub summoner_id: SummonerId,
    pub puuid: Puuid,
    pub riot_id: String,
}

impl CurrentGameParticipant {
    /// Resolves the champion this participant is playing.
    pub fn get_champion(&self, catalog: &impl StaticCatalog) -> LookupResult<Champion> {
        catalog.get_champion_by_key(&self.champion_id.key())
    }

    /// Resolves the first summoner spell.
    pub fn get_spell1(&self, catalog: &impl StaticCatalog) -> LookupResult<SummonerSpell> {
        catalog.get_summoner_spell(&self.spell1_id.key())
    }

    /// Resolves the second summoner spell.
    pub fn get_spell2(&self, catalog: &impl StaticCatalog) -> LookupResult<SummonerSpell> {
        catalog.get_summoner_spell(&self.spell2_id.key())
    }

    /// Resolves the summoner behind this participant.
    pub fn get_summoner(&self, client: &impl LiveClient) -> LookupResult<Summoner> {
        client.get_summoner_by_puuid(&self.puuid)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameCustomizationObject {
    pub category: String,
    pub content: String,
}

/// Rune selection of a player in an ongoing game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Perks {
    pub perk_style: i64,
    #[serde(rename = "perkIds")]
    pub perk_ids: Vec<i64>,
    pub perk_sub_style: i64,
}

/// The featured games rotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedGames {
    pub client_refresh_interval: i64,
    pub game_list: Vec<ActiveGame>,
}
