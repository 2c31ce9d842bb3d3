mod details;
pub use details::*;

use lazy_static::lazy_static;

/// The amount of money every player starts the game with.
pub const START_MONEY: u32 = 3200;

/// The salary collected when passing or landing on 'Go'.
pub const GO_SALARY: u32 = 200;

/// Collected when a token flies over the 'Bonus' square.
pub const BONUS_PASS_AMOUNT: u32 = 250;

/// Collected when a token comes to rest on the 'Bonus' square.
pub const BONUS_LAND_AMOUNT: u32 = 300;

/// The number of turns a jailed player has to sit out.
pub const MAX_JAIL_TIME: u8 = 3;

/// Rent for a single railroad. Doubles for each further railroad the owner has.
pub const RAILROAD_BASE_RENT: u32 = 25;

/// Utility rent multipliers of the dice roll, for one and for two utilities owned.
pub const UTILITY_MULTIPLIERS: [u32; 2] = [4, 10];

/// Number of squares on each track, from the outer track inwards.
pub const TRACK_LENGTHS: [u8; 3] = [56, 40, 24];

/// The track holding the classic 40-square board.
pub const CLASSIC_LAYER: u8 = 1;

/// Name of the square tokens are sent to when jailed.
pub const JAIL: &str = "Jail";

/// Name of the square tokens start on.
pub const GO: &str = "Go";

/// Where the Holland Tunnel sits on the outer track.
pub const TUNNEL_OUTER: Location = Location::new(0, 18);

/// Where the Holland Tunnel sits on the inner track.
pub const TUNNEL_INNER: Location = Location::new(2, 14);

/// Where the 'Bonus' square sits on the inner track.
pub const BONUS_LOCATION: Location = Location::new(2, 6);

#[derive(Copy, Clone, Debug)]
/// A square of the classic track, before it is placed on a board.
pub enum SquareTemplate {
    Go,
    /// `(name, color, price, rent)`
    TitleDeed(&'static str, Color, u32, u32),
    Railroad(&'static str),
    Utility(&'static str),
    /// `(name, amount)`
    Tax(&'static str, u32),
    Chance,
    CommunityChest,
    Jail,
    FreeParking,
    GoToJail,
}

/// Price of every railroad.
pub const RAILROAD_PRICE: u32 = 200;

/// Price of every utility.
pub const UTILITY_PRICE: u32 = 150;

lazy_static! {
    /// The classic board, going clockwise from 'Go'.
    pub static ref CLASSIC_TRACK: Vec<SquareTemplate> = {
        use Color::*;
        use SquareTemplate::*;

        vec![
            Go,
            TitleDeed("Mediterranean Avenue", Brown, 60, 2),
            CommunityChest,
            TitleDeed("Baltic Avenue", Brown, 60, 4),
            Tax("Income Tax", 200),
            Railroad("Reading Railroad"),
            TitleDeed("Oriental Avenue", LightBlue, 100, 6),
            Chance,
            TitleDeed("Vermont Avenue", LightBlue, 100, 6),
            TitleDeed("Connecticut Avenue", LightBlue, 120, 8),
            Jail,
            TitleDeed("St. Charles Place", Pink, 140, 10),
            Utility("Electric Company"),
            TitleDeed("States Avenue", Pink, 140, 10),
            TitleDeed("Virginia Avenue", Pink, 160, 12),
            Railroad("Pennsylvania Railroad"),
            TitleDeed("St. James Place", Orange, 180, 14),
            CommunityChest,
            TitleDeed("Tennessee Avenue", Orange, 180, 14),
            TitleDeed("New York Avenue", Orange, 200, 16),
            FreeParking,
            TitleDeed("Kentucky Avenue", Red, 220, 18),
            Chance,
            TitleDeed("Indiana Avenue", Red, 220, 18),
            TitleDeed("Illinois Avenue", Red, 240, 20),
            Railroad("B. & O. Railroad"),
            TitleDeed("Atlantic Avenue", Yellow, 260, 22),
            TitleDeed("Ventnor Avenue", Yellow, 260, 22),
            Utility("Water Works"),
            TitleDeed("Marvin Gardens", Yellow, 280, 24),
            GoToJail,
            TitleDeed("Pacific Avenue", Green, 300, 26),
            TitleDeed("North Carolina Avenue", Green, 300, 26),
            CommunityChest,
            TitleDeed("Pennsylvania Avenue", Green, 320, 28),
            Railroad("Short Line"),
            Chance,
            TitleDeed("Park Place", Blue, 350, 35),
            Tax("Luxury Tax", 100),
            TitleDeed("Boardwalk", Blue, 400, 50),
        ]
    };
}
