use crate::model::{
    ids::{Puuid, SummonerId},
    matches::Match,
    summoner::Summoner,
};

use super::LookupResult;

/// Per-player and per-match lookups against the live service. Backing
/// data changes over time; two calls with the same identifier may
/// return different values. No caching is assumed.
pub trait LiveClient {
    fn get_summoner_by_id(&self, id: &SummonerId) -> LookupResult<Summoner>;

    fn get_summoner_by_puuid(&self, puuid: &Puuid) -> LookupResult<Summoner>;

    /// Looks a finished match up by its compound key, see
    /// [`crate::model::ids::GameId::match_key`].
    fn get_match(&self, key: &str) -> LookupResult<Match>;

    /// Home region code this client is configured for, e.g. "euw".
    /// Needed to derive compound match keys from bare game ids.
    fn region(&self) -> &str;
}
