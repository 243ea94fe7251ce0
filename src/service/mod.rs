pub mod catalog;
pub mod live;
pub mod snapshot;

use std::{error::Error, fmt};

pub type LookupResult<T> = Result<T, LookupError>;

/// Entity classes a lookup can resolve into. Lets callers tell a
/// permanent miss on one entity class apart from another without
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Champion,
    Item,
    SummonerSpell,
    ProfileIcon,
    Map,
    Queue,
    GameMode,
    GameType,
    Summoner,
    Match,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            EntityKind::Champion => "champion",
            EntityKind::Item => "item",
            EntityKind::SummonerSpell => "summoner spell",
            EntityKind::ProfileIcon => "profile icon",
            EntityKind::Map => "map",
            EntityKind::Queue => "queue",
            EntityKind::GameMode => "game mode",
            EntityKind::GameType => "game type",
            EntityKind::Summoner => "summoner",
            EntityKind::Match => "match",
        };
        write!(f, "{}", name)
    }
}

/// Failure of a collaborator lookup. Resolution operations pass these
/// through unchanged; a `NotFound` is permanent for the session while a
/// `Transport` failure may be worth retrying.
#[derive(Debug)]
pub enum LookupError {
    NotFound(EntityKind, String),
    Transport(Box<dyn Error + Send + Sync>),
    Decode(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LookupError::NotFound(kind, key) => write!(f, "{} not found for key '{}'", kind, key),
            LookupError::Transport(err) => write!(f, "transport failure: {}", err),
            LookupError::Decode(msg) => write!(f, "payload decode failure: {}", msg),
        }
    }
}

impl Error for LookupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LookupError::Transport(err) => {
                let source: &(dyn Error + 'static) = err.as_ref();
                Some(source)
            }
            _ => None,
        }
    }
}
