use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// A coordinate on the board. Boards have several concentric tracks,
/// so a square is addressed by its track (`layer`) and its index on that track.
pub struct Location {
    /// The track the square is on. 0 is the outer track.
    pub layer: u8,
    /// The index of the square along its track.
    pub position: u8,
}

impl Location {
    pub const fn new(layer: u8, position: u8) -> Self {
        Self { layer, position }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:02})", self.layer, self.position)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// A player's marker on the board. A token only knows where it is.
pub struct Token {
    location: Location,
}

impl Token {
    pub fn new(location: Location) -> Self {
        Self { location }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Place the token directly at `location`. No squares in between are visited.
    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// The color sets of title deeds.
pub enum Color {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    Blue,
}

/// Anything a player can hold that counts toward their net worth.
pub trait Ownable {
    /// What the asset is worth to its holder.
    fn value(&self) -> u32;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// The kinds of cards a player can keep in hand.
pub enum CardKind {
    GetOutOfJailFree,
    Chance,
    CommunityChest,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A card kept by a player. Card content lives with the deck; the ledger
/// only needs to tell cards apart.
pub struct OwnableCard {
    pub name: String,
    pub kind: CardKind,
    /// Resale value of the card.
    pub value: u32,
}

impl OwnableCard {
    pub fn new(name: &str, kind: CardKind, value: u32) -> Self {
        Self {
            name: name.to_owned(),
            kind,
            value,
        }
    }

    /// Return a new "Get Out of Jail Free" card.
    pub fn get_out_of_jail_free() -> Self {
        Self::new("Get Out of Jail Free", CardKind::GetOutOfJailFree, 50)
    }
}

impl Ownable for OwnableCard {
    fn value(&self) -> u32 {
        self.value
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A color-grouped property.
pub struct TitleDeed {
    pub name: String,
    pub location: Location,
    pub color: Color,
    pub price: u32,
    /// Rent with no houses.
    pub rent: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A railroad or utility. Their rent depends on how many of the same kind the owner has.
pub struct Deed {
    pub name: String,
    pub location: Location,
    pub price: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// A square that can be bought, as it appears in a player's portfolio.
pub enum OwnableSquare {
    TitleDeed(TitleDeed),
    Railroad(Deed),
    Utility(Deed),
}

impl OwnableSquare {
    pub fn name(&self) -> &str {
        match self {
            OwnableSquare::TitleDeed(deed) => &deed.name,
            OwnableSquare::Railroad(deed) | OwnableSquare::Utility(deed) => &deed.name,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            OwnableSquare::TitleDeed(deed) => deed.location,
            OwnableSquare::Railroad(deed) | OwnableSquare::Utility(deed) => deed.location,
        }
    }

    pub fn price(&self) -> u32 {
        match self {
            OwnableSquare::TitleDeed(deed) => deed.price,
            OwnableSquare::Railroad(deed) | OwnableSquare::Utility(deed) => deed.price,
        }
    }

    /// Return the title deed if this is one.
    pub fn as_title_deed(&self) -> Option<&TitleDeed> {
        match self {
            OwnableSquare::TitleDeed(deed) => Some(deed),
            _ => None,
        }
    }
}

impl Ownable for OwnableSquare {
    fn value(&self) -> u32 {
        self.price()
    }
}
