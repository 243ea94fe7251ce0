use crate::model::{
    catalog::{Champion, Item, ProfileIcon, SummonerSpell},
    constants::{GameMap, GameMode, GameType, Queue},
    ids::{MapId, QueueId},
};

use super::LookupResult;

/// Read side of the static reference catalog: champions, items, spells,
/// icons and game constants. Backing data only changes with game
/// patches, so implementations may serve everything from memory; see
/// [`super::snapshot::CatalogSnapshot`].
///
/// Champion, item, spell and icon lookups are keyed by the canonical
/// decimal string form of their numeric identifiers.
pub trait StaticCatalog {
    /// Looks a champion up by catalog name, e.g. "Aatrox".
    fn get_champion(&self, name: &str) -> LookupResult<Champion>;

    /// Looks a champion up by the decimal string form of its numeric id.
    fn get_champion_by_key(&self, key: &str) -> LookupResult<Champion>;

    fn get_item(&self, key: &str) -> LookupResult<Item>;

    fn get_summoner_spell(&self, key: &str) -> LookupResult<SummonerSpell>;

    fn get_profile_icon(&self, key: &str) -> LookupResult<ProfileIcon>;

    fn get_map(&self, id: MapId) -> LookupResult<GameMap>;

    fn get_queue(&self, id: QueueId) -> LookupResult<Queue>;

    fn get_game_mode(&self, mode: &str) -> LookupResult<GameMode>;

    fn get_game_type(&self, kind: &str) -> LookupResult<GameType>;
}
