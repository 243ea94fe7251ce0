//! Resolver dispatch against stub collaborator clients: identifier
//! rendering, compound key construction and unchanged failure
//! propagation.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;
use serde_json::json;

use riftdata::model::{
    catalog::{Champion, Item, ProfileIcon, SummonerSpell},
    constants::{GameMap, GameMode, GameType, Queue},
    ids::{Puuid, SummonerId},
    league::LeagueItem,
    mastery::ChampionMastery,
    matches::{Match, MatchInfo, Participant},
    rotation::ChampionRotation,
    spectator::{ActiveGame, Observer},
    summoner::Summoner,
};
use riftdata::service::{
    catalog::StaticCatalog, live::LiveClient, snapshot::CatalogSnapshot, EntityKind, LookupError,
    LookupResult,
};

static SNAPSHOT: Lazy<CatalogSnapshot> = Lazy::new(|| {
    let champions = vec![Champion {
        id: "Aatrox".to_string(),
        key: "266".to_string(),
        name: "Aatrox".to_string(),
        ..Default::default()
    }];

    let mut items = HashMap::new();
    items.insert(
        "1001".to_string(),
        Item {
            name: "Boots".to_string(),
            ..Default::default()
        },
    );
    items.insert(
        "3364".to_string(),
        Item {
            name: "Oracle Lens".to_string(),
            ..Default::default()
        },
    );

    let spells = vec![
        SummonerSpell {
            id: "SummonerFlash".to_string(),
            key: "4".to_string(),
            name: "Flash".to_string(),
            ..Default::default()
        },
        SummonerSpell {
            id: "SummonerDot".to_string(),
            key: "14".to_string(),
            name: "Ignite".to_string(),
            ..Default::default()
        },
    ];

    let icons = vec![ProfileIcon {
        id: 588.into(),
        image: Default::default(),
    }];

    let maps = vec![GameMap {
        id: 11.into(),
        name: "Summoner's Rift".to_string(),
        notes: String::new(),
    }];

    let queues = vec![Queue {
        id: 420.into(),
        map_name: "Summoner's Rift".to_string(),
        description: "5v5 Ranked Solo games".to_string(),
        notes: String::new(),
    }];

    let modes = vec![GameMode {
        mode: "CLASSIC".to_string(),
        description: "Classic Summoner's Rift games".to_string(),
    }];

    let types = vec![GameType {
        kind: "MATCHED_GAME".to_string(),
        description: "Matchmade games".to_string(),
    }];

    CatalogSnapshot::new(champions, items, spells, icons, maps, queues, modes, types)
});

fn summoner(id: &str, puuid: &str) -> Summoner {
    Summoner {
        profile_icon_id: 588.into(),
        name: "Teemo".to_string(),
        puuid: puuid.into(),
        summoner_level: 30,
        revision_date: Utc.timestamp_millis_opt(1_600_000_000_000).unwrap(),
        id: id.into(),
        account_id: "acc-1".to_string(),
    }
}

/// Live client stub serving from fixed maps and recording the last
/// requested match key.
struct StubLive {
    region: String,
    by_id: HashMap<SummonerId, Summoner>,
    by_puuid: HashMap<Puuid, Summoner>,
    last_match_key: RefCell<Option<String>>,
}

impl StubLive {
    fn new(region: &str) -> Self {
        Self {
            region: region.to_string(),
            by_id: HashMap::new(),
            by_puuid: HashMap::new(),
            last_match_key: RefCell::new(None),
        }
    }

    fn with_summoner(mut self, s: Summoner) -> Self {
        self.by_id.insert(s.id.clone(), s.clone());
        self.by_puuid.insert(s.puuid.clone(), s);
        self
    }
}

impl LiveClient for StubLive {
    fn get_summoner_by_id(&self, id: &SummonerId) -> LookupResult<Summoner> {
        match self.by_id.get(id) {
            Some(s) => Ok(s.clone()),
            None => Err(LookupError::NotFound(EntityKind::Summoner, id.to_string())),
        }
    }

    fn get_summoner_by_puuid(&self, puuid: &Puuid) -> LookupResult<Summoner> {
        match self.by_puuid.get(puuid) {
            Some(s) => Ok(s.clone()),
            None => Err(LookupError::NotFound(EntityKind::Summoner, puuid.to_string())),
        }
    }

    fn get_match(&self, key: &str) -> LookupResult<Match> {
        *self.last_match_key.borrow_mut() = Some(key.to_string());
        Err(LookupError::NotFound(EntityKind::Match, key.to_string()))
    }

    fn region(&self) -> &str {
        &self.region
    }
}

/// Live client stub that fails every call at the transport layer.
struct DownLive;

fn transport_error() -> LookupError {
    LookupError::Transport(Box::new(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused",
    )))
}

impl LiveClient for DownLive {
    fn get_summoner_by_id(&self, _id: &SummonerId) -> LookupResult<Summoner> {
        Err(transport_error())
    }

    fn get_summoner_by_puuid(&self, _puuid: &Puuid) -> LookupResult<Summoner> {
        Err(transport_error())
    }

    fn get_match(&self, _key: &str) -> LookupResult<Match> {
        Err(transport_error())
    }

    fn region(&self) -> &str {
        "euw"
    }
}

fn sample_mastery() -> ChampionMastery {
    serde_json::from_value(json!({
        "chestGranted": true,
        "championLevel": 7,
        "championPoints": 123456,
        "championId": 266,
        "championPointsUntilNextLevel": 0,
        "lastPlayTime": 1_600_000_000_000i64,
        "tokensEarned": 0,
        "championPointsSinceLastLevel": 21600,
        "summonerId": "summoner-1"
    }))
    .expect("mastery payload decodes")
}

#[test]
fn mastery_resolves_champion_through_its_decimal_key() {
    let champion = sample_mastery().get_champion(&*SNAPSHOT).unwrap();
    assert_eq!(champion.name, "Aatrox");
}

#[test]
fn mastery_resolves_summoner_through_the_live_client() {
    let live = StubLive::new("euw").with_summoner(summoner("summoner-1", "p-1"));
    let resolved = sample_mastery().get_summoner(&live).unwrap();
    assert_eq!(resolved.name, "Teemo");
}

#[test]
fn catalog_miss_propagates_unmodified() {
    let empty = CatalogSnapshot::empty();
    let err = sample_mastery().get_champion(&empty).unwrap_err();
    match err {
        LookupError::NotFound(kind, key) => {
            assert_eq!(kind, EntityKind::Champion);
            assert_eq!(key, "266");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn transport_failure_propagates_with_its_category() {
    let item = LeagueItem {
        summoner_id: "summoner-1".into(),
        ..Default::default()
    };
    let err = item.get_summoner(&DownLive).unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)));
}

#[test]
fn participant_resolves_each_item_slot_independently() {
    let participant: Participant = serde_json::from_value(json!({
        "championId": 266,
        "puuid": "p-1",
        "profileIcon": 588,
        "summoner1Id": 4,
        "summoner2Id": 14,
        "item0": 1001,
        "item3": 9999,
        "item6": 3364
    }))
    .expect("participant payload decodes");

    assert_eq!(participant.get_item0(&*SNAPSHOT).unwrap().name, "Boots");
    assert_eq!(participant.get_item6(&*SNAPSHOT).unwrap().name, "Oracle Lens");

    // Slot 3 misses without affecting the other slots.
    let err = participant.get_item3(&*SNAPSHOT).unwrap_err();
    match err {
        LookupError::NotFound(kind, key) => {
            assert_eq!(kind, EntityKind::Item);
            assert_eq!(key, "9999");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn participant_resolves_champion_spells_and_icon() {
    let participant: Participant = serde_json::from_value(json!({
        "championId": 266,
        "puuid": "p-1",
        "profileIcon": 588,
        "summoner1Id": 4,
        "summoner2Id": 14
    }))
    .unwrap();

    assert_eq!(participant.get_champion(&*SNAPSHOT).unwrap().name, "Aatrox");
    assert_eq!(participant.get_spell1(&*SNAPSHOT).unwrap().name, "Flash");
    assert_eq!(participant.get_spell2(&*SNAPSHOT).unwrap().name, "Ignite");
    assert_eq!(
        participant.get_profile_icon(&*SNAPSHOT).unwrap().id,
        588.into()
    );

    let live = StubLive::new("euw").with_summoner(summoner("summoner-1", "p-1"));
    assert_eq!(participant.get_summoner(&live).unwrap().id, "summoner-1".into());
}

#[test]
fn match_info_resolves_its_game_constants() {
    let info: MatchInfo = serde_json::from_value(json!({
        "gameCreation": 1_600_000_000_000i64,
        "gameDuration": 1893,
        "gameEndTimestamp": 1_600_000_300_000i64,
        "gameId": 123456,
        "gameMode": "CLASSIC",
        "gameStartTimestamp": 1_600_000_100_000i64,
        "gameType": "MATCHED_GAME",
        "gameVersion": "13.1.492.1002",
        "mapId": 11,
        "participants": [],
        "platformId": "EUW1",
        "queueId": 420,
        "teams": []
    }))
    .expect("match info payload decodes");

    assert_eq!(info.get_queue(&*SNAPSHOT).unwrap().description, "5v5 Ranked Solo games");
    assert_eq!(info.get_map(&*SNAPSHOT).unwrap().name, "Summoner's Rift");
    assert_eq!(info.get_game_mode(&*SNAPSHOT).unwrap().mode, "CLASSIC");
    assert_eq!(info.get_game_type(&*SNAPSHOT).unwrap().kind, "MATCHED_GAME");
}

#[test]
fn active_game_derives_the_compound_match_key() {
    let game = ActiveGame {
        game_id: 123456.into(),
        game_start_time: Utc.timestamp_millis_opt(1_600_000_000_000).unwrap(),
        platform_id: "EUW1".to_string(),
        game_mode: "CLASSIC".to_string(),
        map_id: 11.into(),
        game_type: "MATCHED_GAME".to_string(),
        banned_champions: Vec::new(),
        observers: Observer::default(),
        participants: Vec::new(),
        game_length: 0,
        game_queue_config_id: 420.into(),
    };

    let live = StubLive::new("euw");
    let err = game.get_match(&live).unwrap_err();

    assert_eq!(live.last_match_key.borrow().as_deref(), Some("EUW_123456"));
    match err {
        LookupError::NotFound(kind, key) => {
            assert_eq!(kind, EntityKind::Match);
            assert_eq!(key, "EUW_123456");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn rotation_aborts_on_the_first_failing_lookup() {
    let rotation = ChampionRotation {
        free_champion_ids: vec![266.into(), 99.into()],
        ..Default::default()
    };

    let err = rotation.get_champions(&*SNAPSHOT).unwrap_err();
    match err {
        LookupError::NotFound(kind, key) => {
            assert_eq!(kind, EntityKind::Champion);
            assert_eq!(key, "99");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }

    let rotation = ChampionRotation {
        free_champion_ids: vec![266.into()],
        ..Default::default()
    };
    assert_eq!(rotation.get_champions(&*SNAPSHOT).unwrap().len(), 1);
}

#[test]
fn summoner_resolves_its_profile_icon() {
    let s = summoner("summoner-1", "p-1");
    assert_eq!(s.get_profile_icon(&*SNAPSHOT).unwrap().id, 588.into());
}

#[test]
fn champion_catalog_also_resolves_by_name() {
    let champion = SNAPSHOT.get_champion("Aatrox").unwrap();
    assert_eq!(champion.key, "266");

    let err = SNAPSHOT.get_champion("Atrox").unwrap_err();
    assert!(matches!(err, LookupError::NotFound(EntityKind::Champion, _)));
}
