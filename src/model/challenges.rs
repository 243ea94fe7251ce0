//! Player challenge progress records. The challenges endpoints use
//! all-lowercase wire names for the player-facing records and camelCase
//! for the configuration records; renames follow the payloads.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::Puuid;

/// Configuration of a single challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeConfigInfo {
    pub id: i64,
    /// Locale -> field -> text.
    pub localized_names: HashMap<String, HashMap<String, String>>,
    pub state: String,
    #[serde(default)]
    pub tracking: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time_stamp: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end_time_stamp: DateTime<Utc>,
    pub leaderboard: bool,
    pub thresholds: HashMap<String, f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengePoints {
    pub level: String,
    pub current: f32,
    pub max: i32,
    pub percentile: f32,
}

/// One progressed challenge of a player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeInfo {
    #[serde(rename = "challengeid")]
    pub challenge_id: i32,
    pub percentile: f32,
    pub level: String,
    pub value: f32,
    #[serde(rename = "achievedtime", with = "chrono::serde::ts_milliseconds")]
    pub achieved_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerClientPreferences {
    #[serde(rename = "banneraccent")]
    pub banner_accent: String,
    pub title: String,
    #[serde(rename = "challengeids")]
    pub challenge_ids: Vec<i32>,
}

/// A player's full challenge progression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerInfo {
    #[serde(rename = "totalpoints")]
    pub total_points: ChallengePoints,
    #[serde(rename = "categorypoints")]
    pub category_points: HashMap<String, ChallengePoints>,
    pub challenges: Vec<ChallengeInfo>,
    pub preferences: PlayerClientPreferences,
}

/// A top player on a challenge leaderboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApexPlayerInfo {
    pub puuid: Puuid,
    pub value: f64,
    pub position: i32,
}
