//! Player ledger and square effects for a multi-track Monopoly-style game.
//!
//! Players hold money, cards and properties and publish every change to their
//! subscribers. Squares apply their effects when a token lands on or passes
//! them, and the game session drives tokens around the board.

pub mod game;

pub use game::board::{Board, LocationLookup};
pub use game::config::GameConfig;
pub use game::error::{ConfigError, GameError, SubscriberError};
pub use game::globals::{
    CardKind, Color, Deed, Location, Ownable, OwnableCard, OwnableSquare, TitleDeed, Token,
};
pub use game::observable::{ChangeEvent, FieldValue, Observable, Subscriber, SubscriberId};
pub use game::player::{Bankruptcy, JailState, Player, Transfer};
pub use game::square::{
    Bonus, Deck, Go, GoToJail, HollandTunnel, Landing, Property, Square, SquareEffect, SquareKind,
    Tax,
};
pub use game::GameSession;
