use thiserror::Error;

use super::globals::Location;

/// Errors raised by the game session and by square effects.
#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("no square named {0:?} on the board")]
    UnknownSquare(String),
    #[error("no square at {0}")]
    NoSquareAt(Location),
    #[error("track {0} does not exist")]
    UnknownLayer(u8),
    #[error("no player at index {0}")]
    UnknownPlayer(usize),
    #[error("player nickname must not be empty")]
    EmptyNickname,
    #[error("nickname {0:?} is already taken")]
    DuplicateNickname(String),
    #[error("the square at {0} cannot be owned")]
    NotOwnable(Location),
    #[error("the square at {location} is already owned by {owner}")]
    AlreadyOwned { location: Location, owner: String },
    #[error("{0} is in jail and cannot move")]
    PlayerInJail(String),
    #[error("a player cannot pay themselves")]
    SelfTransfer,
    #[error("a jail sentence must be at least one turn")]
    EmptySentence,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised when a game configuration cannot be used.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("config could not be parsed: {0}")]
    Parse(String),
    #[error("jail sentence must be between 1 and 3 turns (got {0})")]
    JailSentence(u8),
    #[error("tunnel endpoints must be on different tracks (both on {0})")]
    TunnelLayers(u8),
    #[error("tunnel endpoint {0} is off the outer and inner tracks or on another square")]
    TunnelPlacement(Location),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Errors a subscriber reports back when it fails to take an event.
/// The ledger logs these and moves on.
#[derive(Debug, Error, PartialEq)]
pub enum SubscriberError {
    #[error("subscriber endpoint is disconnected")]
    Disconnected,
    #[error("subscriber rejected the event: {0}")]
    Rejected(String),
}
