use serde::{Deserialize, Serialize};

use super::{catalog::Champion, ids::ChampionId};
use crate::service::{catalog::StaticCatalog, LookupResult};

/// The free champion rotation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChampionRotation {
    pub free_champion_ids_for_new_players: Vec<ChampionId>,
    pub free_champion_ids: Vec<ChampionId>,
    pub max_new_player_level: i64,
}

impl ChampionRotation {
    /// Resolves the champions available for free to all players. The
    /// first failing lookup aborts the batch.
    pub fn get_champions(&self, catalog: &impl StaticCatalog) -> LookupResult<Vec<Champion>> {
        let mut champions = Vec::with_capacity(self.free_champion_ids.len());
        for id in &self.free_champion_ids {
            champions.push(catalog.get_champion_by_key(&id.key())?);
        }
        Ok(champions)
    }

    /// Resolves the champions available for free to new players only.
    /// The first failing lookup aborts the batch.
    pub fn get_champions_for_new_players(
        &self,
        catalog: &impl StaticCatalog,
    ) -> LookupResult<Vec<Champion>> {
        let mut champions = Vec::with_capacity(self.free_champion_ids_for_new_players.len());
        for id in &self.free_champion_ids_for_new_players {
            champions.push(catalog.get_champion_by_key(&id.key())?);
        }
        Ok(champions)
    }
}
