use std::collections::HashMap;

use super::config::GameConfig;
use super::error::GameError;
use super::globals::*;
use super::square::{Bonus, Deck, HollandTunnel, Square};

/// Resolves square names to where they are on the board. Squares that need to
/// send a token somewhere by name go through this rather than the board layout.
pub trait LocationLookup {
    fn square_location_from_name(&self, name: &str) -> Option<Location>;
}

#[derive(Clone, Debug, Default)]
/// The game board: a set of tracks, and the squares placed on them.
pub struct Board {
    /// The number of squares on each track, indexed by layer.
    tracks: Vec<u8>,
    squares: HashMap<Location, Square>,
    /// The first square placed with a given name wins.
    names: HashMap<String, Location>,
}

impl Board {
    /*********        INITIALISATION INTERFACES        *********/

    /// Return an empty board with tracks of the given lengths.
    pub fn new(tracks: &[u8]) -> Self {
        Self {
            tracks: tracks.to_vec(),
            ..Self::default()
        }
    }

    /// Return the three-track board: the classic board in the middle, the
    /// tunnel between the outer and inner tracks, and 'Bonus' on the inner track.
    ///
    /// # Errors
    ///
    /// Fails if the config is invalid, e.g. places a tunnel end over another square.
    pub fn standard(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut board = Self::new(&TRACK_LENGTHS);

        for (position, template) in CLASSIC_TRACK.iter().enumerate() {
            let location = Location::new(CLASSIC_LAYER, position as u8);
            board.insert(location, Self::build_square(*template, location, config))?;
        }

        let tunnel = HollandTunnel {
            outer: config.tunnel_outer,
            inner: config.tunnel_inner,
        };
        board.insert(tunnel.outer, Square::holland_tunnel(tunnel))?;
        board.insert(tunnel.inner, Square::holland_tunnel(tunnel))?;
        board.insert(
            BONUS_LOCATION,
            Square::bonus(Bonus {
                pass_amount: config.bonus_pass,
                land_amount: config.bonus_land,
            }),
        )?;

        Ok(board)
    }

    fn build_square(template: SquareTemplate, location: Location, config: &GameConfig) -> Square {
        match template {
            SquareTemplate::Go => Square::go(config.go_salary),
            SquareTemplate::TitleDeed(name, color, price, rent) => {
                Square::ownable(OwnableSquare::TitleDeed(TitleDeed {
                    name: name.to_owned(),
                    location,
                    color,
                    price,
                    rent,
                }))
            }
            SquareTemplate::Railroad(name) => Square::ownable(OwnableSquare::Railroad(Deed {
                name: name.to_owned(),
                location,
                price: RAILROAD_PRICE,
            })),
            SquareTemplate::Utility(name) => Square::ownable(OwnableSquare::Utility(Deed {
                name: name.to_owned(),
                location,
                price: UTILITY_PRICE,
            })),
            SquareTemplate::Tax(name, amount) => Square::tax(name, amount),
            SquareTemplate::Chance => Square::draw(Deck::Chance),
            SquareTemplate::CommunityChest => Square::draw(Deck::CommunityChest),
            SquareTemplate::Jail => Square::jail(),
            SquareTemplate::FreeParking => Square::free_parking(),
            SquareTemplate::GoToJail => Square::go_to_jail(config.jail_sentence),
        }
    }

    /// Place `square` at `location`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Fails if `location` is not on one of the board's tracks.
    pub fn insert(&mut self, location: Location, square: Square) -> Result<(), GameError> {
        match self.track_len(location.layer) {
            Some(len) if location.position < len => {}
            Some(_) => return Err(GameError::NoSquareAt(location)),
            None => return Err(GameError::UnknownLayer(location.layer)),
        }

        if let Some(old) = self.squares.get(&location) {
            if self.names.get(old.name()) == Some(&location) {
                self.names.remove(old.name());
            }
        }

        self.names
            .entry(square.name().to_owned())
            .or_insert(location);
        self.squares.insert(location, square);

        Ok(())
    }

    /*********        GETTERS        *********/

    /// Return the square at `location`, if there is one.
    pub fn square_at(&self, location: Location) -> Option<&Square> {
        self.squares.get(&location)
    }

    /// Return a mutable reference to the square at `location`.
    pub fn square_at_mut(&mut self, location: Location) -> Option<&mut Square> {
        self.squares.get_mut(&location)
    }

    /// The number of squares on track `layer`.
    pub fn track_len(&self, layer: u8) -> Option<u8> {
        self.tracks.get(usize::from(layer)).copied()
    }

    /// Iterate over every square and where it is, in no particular order.
    pub fn squares(&self) -> impl Iterator<Item = (&Location, &Square)> {
        self.squares.iter()
    }

    /// The number of title deeds of `color` on the board.
    pub fn color_group_size(&self, color: Color) -> usize {
        self.squares
            .values()
            .filter_map(Square::property)
            .filter_map(|p| p.deed.as_title_deed())
            .filter(|deed| deed.color == color)
            .count()
    }

    /// The nickname of whoever owns the square at `location`.
    pub fn owner_of(&self, location: Location) -> Option<&str> {
        self.square_at(location)
            .and_then(Square::property)
            .and_then(|p| p.owner())
    }

    /*********        MOVEMENT        *********/

    /// Return the square one step along the track from `from`, wrapping
    /// around. Reverse steps go anti-clockwise.
    ///
    /// # Errors
    ///
    /// Fails if `from` is not on one of the board's tracks.
    pub fn step(&self, from: Location, reverse: bool) -> Result<Location, GameError> {
        let len = self
            .track_len(from.layer)
            .filter(|&len| len > 0)
            .ok_or(GameError::UnknownLayer(from.layer))?;

        let len = u16::from(len);
        let position = u16::from(from.position) % len;
        let position = if reverse {
            (position + len - 1) % len
        } else {
            (position + 1) % len
        };

        Ok(Location::new(from.layer, position as u8))
    }
}

impl LocationLookup for Board {
    fn square_location_from_name(&self, name: &str) -> Option<Location> {
        self.names.get(name).copied()
    }
}
