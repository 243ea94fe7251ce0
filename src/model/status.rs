//! Platform status records. Unlike the game data endpoints these use
//! snake_case wire names, so the Rust field names map without renames.

use serde::{Deserialize, Serialize};

/// Status of all services in one region.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformStatus {
    pub name: String,
    pub region_tag: String,
    pub hostname: String,
    pub services: Vec<Service>,
    pub slug: String,
    pub locales: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub status: String,
    pub incidents: Vec<Incident>,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Incident {
    pub active: bool,
    pub created_at: String,
    pub id: i64,
    pub updates: Vec<StatusMessage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusMessage {
    pub severity: String,
    pub author: String,
    pub created_at: String,
    pub translations: Vec<StatusTranslation>,
    pub updated_at: String,
    pub content: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusTranslation {
    pub locale: String,
    pub content: String,
    pub updated_at: String,
}
