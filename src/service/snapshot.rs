use std::collections::HashMap;

use crate::model::{
    catalog::{Champion, Item, ProfileIcon, SummonerSpell},
    constants::{GameMap, GameMode, GameType, Queue},
    ids::{MapId, QueueId},
};

use super::{catalog::StaticCatalog, EntityKind, LookupError, LookupResult};

/// In-memory [`StaticCatalog`] built from catalog payloads fetched once
/// per session. Lookups clone the stored entity on hit.
pub struct CatalogSnapshot {
    champions: HashMap<String, Champion>,
    champion_names: HashMap<String, String>,
    items: HashMap<String, Item>,
    spells: HashMap<String, SummonerSpell>,
    icons: HashMap<String, ProfileIcon>,
    maps: HashMap<MapId, GameMap>,
    queues: HashMap<QueueId, Queue>,
    modes: HashMap<String, GameMode>,
    types: HashMap<String, GameType>,
}

impl CatalogSnapshot {
    /// Indexes the given catalog data by the key form each lookup uses.
    /// Items arrive keyed by decimal id in the payload itself, so they
    /// are taken as a map; everything else carries its key inline.
    pub fn new(
        champions: Vec<Champion>,
        items: HashMap<String, Item>,
        spells: Vec<SummonerSpell>,
        icons: Vec<ProfileIcon>,
        maps: Vec<GameMap>,
        queues: Vec<Queue>,
        modes: Vec<GameMode>,
        types: Vec<GameType>,
    ) -> Self {
        log::debug!(
            "indexing catalog snapshot: {} champions, {} items, {} spells, {} icons",
            champions.len(),
            items.len(),
            spells.len(),
            icons.len()
        );

        let champion_names = champions
            .iter()
            .map(|c| (c.name.clone(), c.key.clone()))
            .collect();

        Self {
            champions: champions.into_iter().map(|c| (c.key.clone(), c)).collect(),
            champion_names,
            items,
            spells: spells.into_iter().map(|s| (s.key.clone(), s)).collect(),
            icons: icons.into_iter().map(|i| (i.id.key(), i)).collect(),
            maps: maps.into_iter().map(|m| (m.id, m)).collect(),
            queues: queues.into_iter().map(|q| (q.id, q)).collect(),
            modes: modes.into_iter().map(|m| (m.mode.clone(), m)).collect(),
            types: types.into_iter().map(|t| (t.kind.clone(), t)).collect(),
        }
    }

    /// Snapshot with no entries; every lookup misses.
    pub fn empty() -> Self {
        CatalogSnapshot::new(
            Vec::new(),
            HashMap::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )
    }
}

impl StaticCatalog for CatalogSnapshot {
    fn get_champion(&self, name: &str) -> LookupResult<Champion> {
        match self.champion_names.get(name).and_then(|key| self.champions.get(key)) {
            Some(champ) => Ok(champ.clone()),
            None => Err(LookupError::NotFound(EntityKind::Champion, name.to_string())),
        }
    }

    fn get_champion_by_key(&self, key: &str) -> LookupResult<Champion> {
        match self.champions.get(key) {
            Some(champ) => Ok(champ.clone()),
            None => Err(LookupError::NotFound(EntityKind::Champion, key.to_string())),
        }
    }

    fn get_item(&self, key: &str) -> LookupResult<Item> {
        match self.items.get(key) {
            Some(item) => Ok(item.clone()),
            None => Err(LookupError::NotFound(EntityKind::Item, key.to_string())),
        }
    }

    fn get_summoner_spell(&self, key: &str) -> LookupResult<SummonerSpell> {
        match self.spells.get(key) {
            Some(spell) => Ok(spell.clone()),
            None => Err(LookupError::NotFound(EntityKind::SummonerSpell, key.to_string())),
        }
    }

    fn get_profile_icon(&self, key: &str) -> LookupResult<ProfileIcon> {
        match self.icons.get(key) {
            Some(icon) => Ok(icon.clone()),
            None => Err(LookupError::NotFound(EntityKind::ProfileIcon, key.to_string())),
        }
    }

    fn get_map(&self, id: MapId) -> LookupResult<GameMap> {
        match self.maps.get(&id) {
            Some(map) => Ok(map.clone()),
            None => Err(LookupError::NotFound(EntityKind::Map, id.to_string())),
        }
    }

    fn get_queue(&self, id: QueueId) -> LookupResult<Queue> {
        match self.queues.get(&id) {
            Some(queue) => Ok(queue.clone()),
            None => Err(LookupError::NotFound(EntityKind::Queue, id.to_string())),
        }
    }

    fn get_game_mode(&self, mode: &str) -> LookupResult<GameMode> {
        match self.modes.get(mode) {
            Some(game_mode) => Ok(game_mode.clone()),
            None => Err(LookupError::NotFound(EntityKind::GameMode, mode.to_string())),
        }
    }

    fn get_game_type(&self, kind: &str) -> LookupResult<GameType> {
        match self.types.get(kind) {
            Some(game_type) => Ok(game_type.clone()),
            None => Err(LookupError::NotFound(EntityKind::GameType, kind.to_string())),
        }
    }
}
