//! Game constants: maps, queues, modes, types and seasons. Served by the
//! static side of the catalog, keyed by their numeric or string codes.

use serde::{Deserialize, Serialize};

use super::ids::{MapId, QueueId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMap {
    #[serde(rename = "mapId")]
    pub id: MapId,
    #[serde(rename = "mapName")]
    pub name: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Queue {
    #[serde(rename = "queueId")]
    pub id: QueueId,
    #[serde(rename = "map")]
    pub map_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMode {
    #[serde(rename = "gameMode")]
    pub mode: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameType {
    #[serde(rename = "gameType")]
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub id: i64,
    pub season: String,
}
