//! Entities served by the versioned data catalog. These change only with
//! game patches and are treated as constant within a process run.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ids::ProfileIconId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Champion {
    /// Catalog name, e.g. "Aatrox".
    pub id: String,
    /// Decimal string form of the numeric champion id.
    pub key: String,
    pub name: String,
    pub title: String,
    pub blurb: String,
    pub info: ChampionInfo,
    pub image: Image,
    pub tags: Vec<String>,
    pub partype: String,
    pub stats: ChampionStats,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionInfo {
    pub attack: i32,
    pub defense: i32,
    pub magic: i32,
    pub difficulty: i32,
}

// Field names follow the catalog payload verbatim.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionStats {
    pub hp: f64,
    pub hpperlevel: f64,
    pub mp: f64,
    pub mpperlevel: f64,
    pub movespeed: f64,
    pub armor: f64,
    pub armorperlevel: f64,
    pub spellblock: f64,
    pub spellblockperlevel: f64,
    pub attackrange: f64,
    pub hpregen: f64,
    pub hpregenperlevel: f64,
    pub mpregen: f64,
    pub mpregenperlevel: f64,
    pub crit: f64,
    pub critperlevel: f64,
    pub attackdamage: f64,
    pub attackdamageperlevel: f64,
    pub attackspeedperlevel: f64,
    pub attackspeed: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub plaintext: String,
    pub gold: ItemGold,
    pub tags: Vec<String>,
    pub image: Image,
    pub stats: HashMap<String, f64>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemGold {
    pub base: i32,
    pub total: i32,
    pub sell: i32,
    pub purchasable: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummonerSpell {
    /// Catalog name, e.g. "SummonerFlash".
    pub id: String,
    /// Decimal string form of the numeric spell id.
    pub key: String,
    pub name: String,
    pub description: String,
    pub cooldown: Vec<f64>,
    pub image: Image,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileIcon {
    pub id: ProfileIconId,
    #[serde(default)]
    pub image: Image,
}

/// Sprite sheet reference shared by all catalog entities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub full: String,
    pub sprite: String,
    pub group: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}
