use serde::{Deserialize, Serialize};

use super::{ids::SummonerId, summoner::Summoner};
use crate::service::{live::LiveClient, LookupResult};

/// Settings of a previously created tournament.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tournament {
    pub map: String,
    pub code: String,
    pub spectators: String,
    pub region: String,
    pub provider_id: i64,
    pub team_size: i64,
    pub participants: Vec<String>,
    pub pick_type: String,
    pub tournament_id: i64,
    pub lobby_name: String,
    pub password: String,
    pub id: i64,
    pub meta_data: String,
}

/// Events that happened in a tournament lobby.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LobbyEventList {
    pub event_list: Vec<LobbyEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LobbyEvent {
    pub event_type: String,
    pub summoner_id: SummonerId,
    pub timestamp: String,
}

impl LobbyEvent {
    /// Resolves the summoner that triggered this event.
    pub fn get_summoner(&self, client: &impl LiveClient) -> LookupResult<Summoner> {
        client.get_summoner_by_id(&self.summoner_id)
    }
}

/// Parameters for creating tournament codes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentCodeParameters {
    /// Legal values: NONE, LOBBYONLY, ALL.
    pub spectator_type: String,
    /// Valid values are 1-5.
    pub team_size: i64,
    /// Legal values: BLIND_PICK, DRAFT_MODE, ALL_RANDOM, TOURNAMENT_DRAFT.
    pub pick_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_summoner_ids: Vec<SummonerId>,
    /// Legal values: SUMMONERS_RIFT, TWISTED_TREELINE, HOWLING_ABYSS.
    pub map_type: String,
    /// Free-form data echoed back with the match results.
    pub metadata: String,
}

/// Parameters for updating an existing tournament.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentUpdateParameters {
    pub spectator_type: String,
    pub pick_type: String,
    pub allowed_summoner_ids: Vec<SummonerId>,
    pub map_type: String,
}

/// Parameters for registering a tournament with a provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentRegistrationParameters {
    pub provider_id: i64,
    pub name: String,
}

/// Parameters for registering a tournament provider for a region.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderRegistrationParameters {
    /// Callback URL for match results; http on port 80 or https on 443.
    pub url: String,
    /// Legal values: BR, EUNE, EUW, JP, LAN, LAS, NA, OCE, PBE, RU, TR.
    pub region: String,
}
