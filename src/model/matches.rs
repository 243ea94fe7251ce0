use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    catalog::{Champion, Item, ProfileIcon, SummonerSpell},
    constants::{GameMap, GameMode, GameType, Queue},
    ids::{ChampionId, GameId, ItemId, MapId, ProfileIconId, Puuid, QueueId, SummonerId, SummonerSpellId},
    summoner::Summoner,
};
use crate::service::{catalog::StaticCatalog, live::LiveClient, LookupResult};

/// A finished match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchMetadata {
    pub data_version: String,
    pub match_id: String,
    /// PUUIDs of all participants.
    pub participants: Vec<Puuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub game_creation: DateTime<Utc>,
    /// Seconds when `game_end_timestamp` is present, milliseconds
    /// otherwise (pre-11.20 payloads).
    pub game_duration: i64,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub game_end_timestamp: Option<DateTime<Utc>>,
    pub game_id: GameId,
    pub game_mode: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub game_start_timestamp: DateTime<Utc>,
    pub game_type: String,
    /// The first two dot-separated parts identify the patch.
    pub game_version: String,
    pub map_id: MapId,
    pub participants: Vec<Participant>,
    pub platform_id: String,
    pub queue_id: QueueId,
    pub teams: Vec<Team>,
    #[serde(default)]
    pub tournament_code: String,
}

impl MatchInfo {
    /// Resolves the queue this match was played in.
    pub fn get_queue(&self, catalog: &impl StaticCatalog) -> LookupResult<Queue> {
        catalog.get_queue(self.queue_id)
    }

    /// Resolves the map this match was played on.
    pub fn get_map(&self, catalog: &impl StaticCatalog) -> LookupResult<GameMap> {
        catalog.get_map(self.map_id)
    }

    /// Resolves the game mode this match was played in.
    pub fn get_game_mode(&self, catalog: &impl StaticCatalog) -> LookupResult<GameMode> {
        catalog.get_game_mode(&self.game_mode)
    }

    /// Resolves the game type this match was played in.
    pub fn get_game_type(&self, catalog: &impl StaticCatalog) -> LookupResult<GameType> {
        catalog.get_game_type(&self.game_type)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Participant {
    pub assists: i64,
    pub baron_kills: i64,
    pub champ_experience: i64,
    pub champ_level: i64,
    pub champion_id: ChampionId,
    pub champion_name: String,
    /// Only used for Kayn: 0 none, 1 Slayer, 2 Assassin.
    pub champion_transform: i64,
    pub damage_dealt_to_objectives: i64,
    pub damage_dealt_to_turrets: i64,
    pub damage_self_mitigated: i64,
    pub deaths: i64,
    pub detector_wards_placed: i64,
    pub double_kills: i64,
    pub first_blood_assist: bool,
    pub first_blood_kill: bool,
    pub first_tower_assist: bool,
    pub first_tower_kill: bool,
    pub game_ended_in_early_surrender: bool,
    pub game_ended_in_surrender: bool,
    pub gold_earned: i64,
    pub gold_spent: i64,
    /// Best-guess position in isolation; prefer `team_position`.
    pub individual_position: String,
    pub inhibitor_kills: i64,
    pub item0: ItemId,
    pub item1: ItemId,
    pub item2: ItemId,
    pub item3: ItemId,
    pub item4: ItemId,
    pub item5: ItemId,
    pub item6: ItemId,
    pub items_purchased: i64,
    pub killing_sprees: i64,
    pub kills: i64,
    pub lane: String,
    pub largest_killing_spree: i64,
    pub largest_multi_kill: i64,
    pub magic_damage_dealt_to_champions: i64,
    pub magic_damage_taken: i64,
    pub neutral_minions_killed: i64,
    pub participant_id: i64,
    pub penta_kills: i64,
    pub perks: Option<ParticipantPerks>,
    pub physical_damage_dealt_to_champions: i64,
    pub physical_damage_taken: i64,
    pub profile_icon: ProfileIconId,
    pub puuid: Puuid,
    pub quadra_kills: i64,
    pub riot_id_game_name: String,
    pub riot_id_tagline: String,
    pub role: String,
    pub summoner1_casts: i64,
    pub summoner1_id: SummonerSpellId,
    pub summoner2_casts: i64,
    pub summoner2_id: SummonerSpellId,
    pub summoner_id: SummonerId,
    pub summoner_level: i64,
    pub summoner_name: String,
    pub team_early_surrendered: bool,
    pub team_id: i64,
    /// Best-guess position constrained to one per role per team.
    pub team_position: String,
    pub time_played: i64,
    pub total_damage_dealt_to_champions: i64,
    pub total_damage_taken: i64,
    pub total_heal: i64,
    pub total_minions_killed: i64,
    pub triple_kills: i64,
    pub true_damage_dealt_to_champions: i64,
    pub turret_kills: i64,
    pub vision_score: i64,
    pub wards_killed: i64,
    pub wards_placed: i64,
    pub win: bool,
}

impl Participant {
    /// Resolves the summoner behind this participant.
    pub fn get_summoner(&self, client: &impl LiveClient) -> LookupResult<Summoner> {
        client.get_summoner_by_puuid(&self.puuid)
    }

    /// Resolves this participant's profile icon.
    pub fn get_profile_icon(&self, catalog: &impl StaticCatalog) -> LookupResult<ProfileIcon> {
        catalog.get_profile_icon(&self.profile_icon.key())
    }

    /// Resolves the champion this participant played.
    pub fn get_champion(&self, catalog: &impl StaticCatalog) -> LookupResult<Champion> {
        catalog.get_champion_by_key(&self.champion_id.key())
    }

    /// Resolves the first summoner spell.
    pub fn get_spell1(&self, catalog: &impl StaticCatalog) -> LookupResult<SummonerSpell> {
        catalog.get_summoner_spell(&self.summoner1_id.key())
    }

    /// Resolves the second summoner spell.
    pub fn get_spell2(&self, catalog: &impl StaticCatalog) -> LookupResult<SummonerSpell> {
        catalog.get_summoner_spell(&self.summoner2_id.key())
    }

    /// Resolves the item in slot 0. Each slot resolves independently;
    /// callers wanting the full build decide their own policy on
    /// partial failures.
    pub fn get_item0(&self, catalog: &impl StaticCatalog) -> LookupResult<Item> {
        catalog.get_item(&self.item0.key())
    }

    /// Resolves the item in slot 1.
    pub fn get_item1(&self, catalog: &impl StaticCatalog) -> LookupResult<Item> {
        catalog.get_item(&self.item1.key())
    }

    /// Resolves the item in slot 2.
    pub fn get_item2(&self, catalog: &impl StaticCatalog) -> LookupResult<Item> {
        catalog.get_item(&self.item2.key())
    }

    /// Resolves the item in slot 3.
    pub fn get_item3(&self, catalog: &impl StaticCatalog) -> LookupResult<Item> {
        catalog.get_item(&self.item3.key())
    }

    /// Resolves the item in slot 4.
    pub fn get_item4(&self, catalog: &impl StaticCatalog) -> LookupResult<Item> {
        catalog.get_item(&self.item4.key())
    }

    /// Resolves the item in slot 5.
    pub fn get_item5(&self, catalog: &impl StaticCatalog) -> LookupResult<Item> {
        catalog.get_item(&self.item5.key())
    }

    /// Resolves the trinket slot.
    pub fn get_item6(&self, catalog: &impl StaticCatalog) -> LookupResult<Item> {
        catalog.get_item(&self.item6.key())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantPerks {
    pub stat_perks: StatPerks,
    pub styles: Vec<Styles>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatPerks {
    pub defense: i64,
    pub flex: i64,
    pub offense: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Styles {
    pub description: String,
    pub selections: Vec<Selections>,
    pub style: i64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selections {
    pub perk: i64,
    pub var1: i64,
    pub var2: i64,
    pub var3: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    pub bans: Vec<TeamBan>,
    pub objectives: Objectives,
    pub team_id: i64,
    pub win: bool,
}

/// A champion ban made during the pick/ban phase.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamBan {
    pub pick_turn: i64,
    pub champion_id: ChampionId,
}

impl TeamBan {
    /// Resolves the banned champion.
    pub fn get_champion(&self, catalog: &impl StaticCatalog) -> LookupResult<Champion> {
        catalog.get_champion_by_key(&self.champion_id.key())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Objectives {
    pub baron: Objective,
    pub champion: Objective,
    pub dragon: Objective,
    pub inhibitor: Objective,
    pub rift_herald: Objective,
    pub tower: Objective,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Objective {
    pub first: bool,
    pub kills: i64,
}

/// Timeline frames for a match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchTimeline {
    pub frames: Vec<MatchFrame>,
    #[serde(rename = "frameInterval")]
    pub interval: i64,
}

/// One frame in the timeline of a game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchFrame {
    pub timestamp: i64,
    pub participant_frames: HashMap<String, ParticipantFrame>,
    pub events: Vec<MatchEvent>,
}

/// State of one participant at a single timeline timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantFrame {
    pub total_gold: i64,
    pub team_score: i64,
    pub participant_id: i64,
    pub level: i64,
    pub current_gold: i64,
    pub minions_killed: i64,
    pub dominion_score: i64,
    pub position: Option<MatchPosition>,
    pub xp: i64,
    pub jungle_minions_killed: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchEventType {
    ChampionKill,
    WardPlaced,
    WardKill,
    BuildingKill,
    EliteMonsterKill,
    ItemPurchased,
    ItemSold,
    ItemDestroyed,
    ItemUndo,
    SkillLevelUp,
    AscendedEvent,
    CapturePoint,
    PoroKingSummon,
}

/// All known match event types.
pub const MATCH_EVENT_TYPES: &[MatchEventType] = &[
    MatchEventType::ChampionKill,
    MatchEventType::WardPlaced,
    MatchEventType::WardKill,
    MatchEventType::BuildingKill,
    MatchEventType::EliteMonsterKill,
    MatchEventType::ItemPurchased,
    MatchEventType::ItemSold,
    MatchEventType::ItemDestroyed,
    MatchEventType::ItemUndo,
    MatchEventType::SkillLevelUp,
    MatchEventType::AscendedEvent,
    MatchEventType::CapturePoint,
    MatchEventType::PoroKingSummon,
];

/// An event in a match at a certain timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchEvent {
    pub event_type: String,
    pub tower_type: String,
    pub team_id: i64,
    pub ascended_type: String,
    pub killer_id: i64,
    pub level_up_type: String,
    pub point_captured: String,
    pub assisting_participant_ids: Vec<i64>,
    pub ward_type: String,
    pub monster_type: String,
    #[serde(rename = "type")]
    pub kind: Option<MatchEventType>,
    pub skill_slot: i64,
    pub victim_id: i64,
    pub timestamp: i64,
    pub after_id: i64,
    pub monster_sub_type: String,
    pub lane_type: String,
    pub item_id: ItemId,
    pub participant_id: i64,
    pub building_type: String,
    pub creator_id: i64,
    pub position: Option<MatchPosition>,
    pub before_id: i64,
}

impl MatchEvent {
    /// Resolves the item this event refers to.
    pub fn get_item(&self, catalog: &impl StaticCatalog) -> LookupResult<Item> {
        catalog.get_item(&self.item_id.key())
    }
}

/// A position on the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPosition {
    pub x: i64,
    pub y: i64,
}
