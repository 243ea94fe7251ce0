use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    catalog::ProfileIcon,
    ids::{ProfileIconId, Puuid, SummonerId},
};
use crate::service::{catalog::StaticCatalog, LookupResult};

/// A player account with its related identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summoner {
    pub profile_icon_id: ProfileIconId,
    pub name: String,
    pub puuid: Puuid,
    pub summoner_level: i64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub revision_date: DateTime<Utc>,
    pub id: SummonerId,
    pub account_id: String,
}

impl Summoner {
    /// Resolves the profile icon shown for this account.
    pub fn get_profile_icon(&self, catalog: &impl StaticCatalog) -> LookupResult<ProfileIcon> {
        catalog.get_profile_icon(&self.profile_icon_id.key())
    }
}
