use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Numeric champion identifier as it appears in payloads.
///
/// The champion catalog is keyed by the decimal string form, see [`ChampionId::key`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChampionId(i64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummonerSpellId(i64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileIconId(i64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapId(i64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueueId(i64);

/// Numeric game identifier, only unique within a platform region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(i64);

/// Encrypted summoner identifier, scoped to the issuing API key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummonerId(String);

/// Globally unique player identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Puuid(String);

impl ChampionId {
    /// Canonical base-10 key form used by the champion catalog.
    pub fn key(&self) -> String {
        self.0.to_string()
    }
}

impl ItemId {
    /// Canonical base-10 key form used by the item catalog.
    pub fn key(&self) -> String {
        self.0.to_string()
    }
}

impl SummonerSpellId {
    /// Canonical base-10 key form used by the summoner spell catalog.
    pub fn key(&self) -> String {
        self.0.to_string()
    }
}

impl ProfileIconId {
    /// Canonical base-10 key form used by the profile icon catalog.
    pub fn key(&self) -> String {
        self.0.to_string()
    }
}

impl GameId {
    /// Compound key for the match endpoints: upper-cased platform region
    /// code and decimal game id, joined by an underscore.
    pub fn match_key(&self, region: &str) -> String {
        format!("{}_{}", region.to_uppercase(), self.0)
    }
}

impl SummonerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Puuid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ChampionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for SummonerSpellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for ProfileIconId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for MapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for QueueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for SummonerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for Puuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ChampionId {
    fn from(value: i64) -> Self {
        ChampionId(value)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId(value)
    }
}

impl From<i64> for SummonerSpellId {
    fn from(value: i64) -> Self {
        SummonerSpellId(value)
    }
}

impl From<i64> for ProfileIconId {
    fn from(value: i64) -> Self {
        ProfileIconId(value)
    }
}

impl From<i64> for MapId {
    fn from(value: i64) -> Self {
        MapId(value)
    }
}

impl From<i64> for QueueId {
    fn from(value: i64) -> Self {
        QueueId(value)
    }
}

impl From<i64> for GameId {
    fn from(value: i64) -> Self {
        GameId(value)
    }
}

impl From<String> for SummonerId {
    fn from(value: String) -> Self {
        SummonerId(value)
    }
}

impl From<&str> for SummonerId {
    fn from(value: &str) -> Self {
        SummonerId(value.to_string())
    }
}

impl From<String> for Puuid {
    fn from(value: String) -> Self {
        Puuid(value)
    }
}

impl From<&str> for Puuid {
    fn from(value: &str) -> Self {
        Puuid(value.to_string())
    }
}
