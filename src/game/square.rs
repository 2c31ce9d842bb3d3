use super::board::LocationLookup;
use super::error::GameError;
use super::globals::*;
use super::player::{Bankruptcy, Player};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// The decks a square can ask the player to draw from.
pub enum Deck {
    Chance,
    CommunityChest,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// What happened when a token came to rest on a square, and what
/// (if anything) the caller still has to act on.
pub enum Landing {
    /// Nothing further happens.
    Rested,
    /// The player was paid by the bank.
    Collected(u32),
    /// The player paid the bank.
    Paid(u32),
    /// The token was moved directly to another square.
    Teleported(Location),
    /// The player was sent to jail.
    Jailed,
    /// The square is for sale.
    PurchaseOffer { location: Location, price: u32 },
    /// The square belongs to someone else, who is owed rent.
    RentDue { owner: String, location: Location },
    /// Rent was paid to the owner.
    RentPaid { owner: String, amount: u32 },
    /// The player must draw from a deck.
    DrawCard(Deck),
    /// The player couldn't pay what they owed.
    Bankrupt(Bankruptcy),
}

/// The effects a square has on a player. Squares only ever change the player
/// handed to them; everything else is looked up through the board.
pub trait SquareEffect {
    /// Apply the effect of the player's token coming to rest on the square.
    fn land_on(
        &self,
        player: &mut Player,
        board: &dyn LocationLookup,
    ) -> Result<Landing, GameError>;

    /// Apply the effect of the player's token moving over the square without stopping.
    fn pass_by(&self, _player: &mut Player) {}
}

impl SquareEffect for Deck {
    fn land_on(&self, _: &mut Player, _: &dyn LocationLookup) -> Result<Landing, GameError> {
        Ok(Landing::DrawCard(*self))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Pays a salary both when passed and when landed on.
pub struct Go {
    pub salary: u32,
}

impl SquareEffect for Go {
    fn land_on(&self, player: &mut Player, _: &dyn LocationLookup) -> Result<Landing, GameError> {
        player.increase_money(self.salary);
        Ok(Landing::Collected(self.salary))
    }

    fn pass_by(&self, player: &mut Player) {
        player.increase_money(self.salary);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Pays out when passed, and pays out more when landed on.
pub struct Bonus {
    pub pass_amount: u32,
    pub land_amount: u32,
}

impl Default for Bonus {
    fn default() -> Self {
        Self {
            pass_amount: BONUS_PASS_AMOUNT,
            land_amount: BONUS_LAND_AMOUNT,
        }
    }
}

impl SquareEffect for Bonus {
    fn land_on(&self, player: &mut Player, _: &dyn LocationLookup) -> Result<Landing, GameError> {
        player.increase_money(self.land_amount);
        Ok(Landing::Collected(self.land_amount))
    }

    fn pass_by(&self, player: &mut Player) {
        player.increase_money(self.pass_amount);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// One end of a tunnel between two tracks. Landing on either end moves the
/// token straight to the other end; passing over it does nothing.
pub struct HollandTunnel {
    pub outer: Location,
    pub inner: Location,
}

impl Default for HollandTunnel {
    fn default() -> Self {
        Self {
            outer: TUNNEL_OUTER,
            inner: TUNNEL_INNER,
        }
    }
}

impl SquareEffect for HollandTunnel {
    fn land_on(&self, player: &mut Player, _: &dyn LocationLookup) -> Result<Landing, GameError> {
        let layer = player.location().layer;

        let destination = if layer == self.outer.layer {
            self.inner
        } else if layer == self.inner.layer {
            self.outer
        } else {
            return Ok(Landing::Rested);
        };

        // Set directly so that no squares in between are passed
        player.token_mut().set_location(destination);
        log::debug!("{} took the tunnel to {}", player.nickname(), destination);

        Ok(Landing::Teleported(destination))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// A fixed payment to the bank.
pub struct Tax {
    pub amount: u32,
}

impl SquareEffect for Tax {
    fn land_on(&self, player: &mut Player, _: &dyn LocationLookup) -> Result<Landing, GameError> {
        if player.decrease_money(self.amount) {
            Ok(Landing::Paid(self.amount))
        } else {
            Ok(Landing::Bankrupt(player.go_bankrupt()))
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Sends the player to the 'Jail' square.
pub struct GoToJail {
    /// Turns the player has to sit out.
    pub sentence: u8,
}

impl SquareEffect for GoToJail {
    fn land_on(
        &self,
        player: &mut Player,
        board: &dyn LocationLookup,
    ) -> Result<Landing, GameError> {
        player.go_to_jail_for(self.sentence, board)?;
        Ok(Landing::Jailed)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A square that can be bought, with a back-reference to its owner's nickname.
pub struct Property {
    pub deed: OwnableSquare,
    owner: Option<String>,
}

impl Property {
    pub fn new(deed: OwnableSquare) -> Self {
        Self { deed, owner: None }
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn set_owner(&mut self, owner: Option<&str>) {
        self.owner = owner.map(str::to_owned);
    }

    /// The rent `owner` collects for this square.
    /// `color_group_size` is how many deeds of this one's color are on the board,
    /// `dice` is the roll that brought the paying player here.
    pub fn rent(&self, owner: &Player, color_group_size: usize, dice: u8) -> u32 {
        match &self.deed {
            OwnableSquare::TitleDeed(deed) => {
                if color_group_size > 0
                    && owner.num_title_deeds_with_color(deed.color) == color_group_size
                {
                    deed.rent * 2
                } else {
                    deed.rent
                }
            }
            OwnableSquare::Railroad(_) => match owner.num_railroads() {
                0 => 0,
                n => RAILROAD_BASE_RENT << (n.min(4) - 1),
            },
            OwnableSquare::Utility(_) => match owner.num_utilities() {
                0 => 0,
                1 => UTILITY_MULTIPLIERS[0] * u32::from(dice),
                _ => UTILITY_MULTIPLIERS[1] * u32::from(dice),
            },
        }
    }
}

impl SquareEffect for Property {
    fn land_on(&self, player: &mut Player, _: &dyn LocationLookup) -> Result<Landing, GameError> {
        let location = self.deed.location();

        Ok(match &self.owner {
            None => Landing::PurchaseOffer {
                location,
                price: self.deed.price(),
            },
            Some(owner) if owner == player.nickname() => Landing::Rested,
            Some(owner) => Landing::RentDue {
                owner: owner.clone(),
                location,
            },
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// The kinds of squares on the board.
pub enum SquareKind {
    Go(Go),
    Bonus(Bonus),
    HollandTunnel(HollandTunnel),
    Property(Property),
    Tax(Tax),
    /// Just visiting.
    Jail,
    GoToJail(GoToJail),
    FreeParking,
    Draw(Deck),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A fixed cell of the board.
pub struct Square {
    name: String,
    description: String,
    kind: SquareKind,
}

impl Square {
    pub fn new(name: &str, description: &str, kind: SquareKind) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            kind,
        }
    }

    pub fn go(salary: u32) -> Self {
        Self::new(
            GO,
            "Collect your salary as you pass or land here.",
            SquareKind::Go(Go { salary }),
        )
    }

    pub fn bonus(bonus: Bonus) -> Self {
        let description = format!(
            "When a player passes BONUS they collect ${}. When a player lands on BONUS \
             they collect ${}.",
            bonus.pass_amount, bonus.land_amount
        );
        Self::new("Bonus", &description, SquareKind::Bonus(bonus))
    }

    pub fn holland_tunnel(tunnel: HollandTunnel) -> Self {
        Self::new(
            "Holland Tunnel",
            "When you land on either of the HOLLAND TUNNEL spaces, you must immediately and \
             directly move to the other HOLLAND TUNNEL space. The space is only in play if a \
             player lands on it. Do not use the tunnel if just passing over it. Since this is \
             a direct route between tracks, no PAY CORNERS are passed and no salaries collected.",
            SquareKind::HollandTunnel(tunnel),
        )
    }

    pub fn ownable(deed: OwnableSquare) -> Self {
        let name = deed.name().to_owned();
        let description = format!("Buy for ${}, or pay rent to its owner.", deed.price());
        Self::new(&name, &description, SquareKind::Property(Property::new(deed)))
    }

    pub fn tax(name: &str, amount: u32) -> Self {
        Self::new(
            name,
            &format!("Pay ${} to the bank.", amount),
            SquareKind::Tax(Tax { amount }),
        )
    }

    pub fn jail() -> Self {
        Self::new(JAIL, "In jail, or just visiting.", SquareKind::Jail)
    }

    pub fn go_to_jail(sentence: u8) -> Self {
        Self::new(
            "Go To Jail",
            "Go directly to jail. Do not pass Go.",
            SquareKind::GoToJail(GoToJail { sentence }),
        )
    }

    pub fn free_parking() -> Self {
        Self::new("Free Parking", "Take a rest.", SquareKind::FreeParking)
    }

    pub fn draw(deck: Deck) -> Self {
        match deck {
            Deck::Chance => Self::new("Chance", "Draw a Chance card.", SquareKind::Draw(deck)),
            Deck::CommunityChest => Self::new(
                "Community Chest",
                "Draw a Community Chest card.",
                SquareKind::Draw(deck),
            ),
        }
    }

    /*********        GETTERS        *********/

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &SquareKind {
        &self.kind
    }

    /// The ownable part of the square, if it has one.
    pub fn property(&self) -> Option<&Property> {
        match &self.kind {
            SquareKind::Property(property) => Some(property),
            _ => None,
        }
    }

    pub fn property_mut(&mut self) -> Option<&mut Property> {
        match &mut self.kind {
            SquareKind::Property(property) => Some(property),
            _ => None,
        }
    }

    fn effect(&self) -> Option<&dyn SquareEffect> {
        match &self.kind {
            SquareKind::Go(go) => Some(go),
            SquareKind::Bonus(bonus) => Some(bonus),
            SquareKind::HollandTunnel(tunnel) => Some(tunnel),
            SquareKind::Property(property) => Some(property),
            SquareKind::Tax(tax) => Some(tax),
            SquareKind::GoToJail(go_to_jail) => Some(go_to_jail),
            SquareKind::Draw(deck) => Some(deck),
            SquareKind::Jail | SquareKind::FreeParking => None,
        }
    }
}

impl SquareEffect for Square {
    fn land_on(
        &self,
        player: &mut Player,
        board: &dyn LocationLookup,
    ) -> Result<Landing, GameError> {
        log::info!(
            "{} came to rest on {} at {}",
            player.nickname(),
            self.name,
            player.location()
        );

        match self.effect() {
            Some(effect) => effect.land_on(player, board),
            None => Ok(Landing::Rested),
        }
    }

    fn pass_by(&self, player: &mut Player) {
        if let Some(effect) = self.effect() {
            effect.pass_by(player);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoJail;

    impl LocationLookup for NoJail {
        fn square_location_from_name(&self, _: &str) -> Option<Location> {
            None
        }
    }

    fn deed(color: Color, position: u8) -> OwnableSquare {
        OwnableSquare::TitleDeed(TitleDeed {
            name: format!("{:?} {}", color, position),
            location: Location::new(1, position),
            color,
            price: 100,
            rent: 10,
        })
    }

    fn railroad(position: u8) -> OwnableSquare {
        OwnableSquare::Railroad(Deed {
            name: format!("Railroad {}", position),
            location: Location::new(1, position),
            price: RAILROAD_PRICE,
        })
    }

    #[test]
    fn go_to_jail_without_a_jail_square_fails_cleanly() {
        let mut player = Player::new("ann", "10.0.0.1");
        let square = Square::go_to_jail(3);

        let err = square.land_on(&mut player, &NoJail).unwrap_err();
        assert_eq!(err, GameError::UnknownSquare("Jail".to_owned()));
        assert!(!player.is_in_jail());
        assert_eq!(player.location(), Location::new(1, 0));
    }

    #[test]
    fn tax_takes_money_or_bankrupts() {
        let mut player = Player::starting_at("ann", "", 150, Location::new(1, 4));
        let tax = Square::tax("Income Tax", 100);

        assert_eq!(tax.land_on(&mut player, &NoJail), Ok(Landing::Paid(100)));
        assert_eq!(player.total_money(), 50);
        assert_eq!(
            tax.land_on(&mut player, &NoJail),
            Ok(Landing::Bankrupt(Bankruptcy::Unresolved))
        );
        assert_eq!(player.total_money(), 50);
        assert!(player.is_bankrupt());
    }

    #[test]
    fn draw_squares_ask_for_a_card() {
        let mut player = Player::new("ann", "");
        assert_eq!(
            Square::draw(Deck::Chance).land_on(&mut player, &NoJail),
            Ok(Landing::DrawCard(Deck::Chance))
        );
        assert_eq!(player.total_money(), i64::from(START_MONEY));
    }

    #[test]
    fn property_offers_sale_then_charges_others() {
        let mut owner = Player::new("ann", "");
        let mut visitor = Player::new("bob", "");
        let mut square = Square::ownable(deed(Color::Brown, 1));

        assert_eq!(
            square.land_on(&mut owner, &NoJail),
            Ok(Landing::PurchaseOffer {
                location: Location::new(1, 1),
                price: 100
            })
        );

        square.property_mut().unwrap().set_owner(Some("ann"));
        assert_eq!(square.land_on(&mut owner, &NoJail), Ok(Landing::Rested));
        assert_eq!(
            square.land_on(&mut visitor, &NoJail),
            Ok(Landing::RentDue {
                owner: "ann".to_owned(),
                location: Location::new(1, 1)
            })
        );
    }

    #[test]
    fn title_deed_rent_doubles_for_a_full_color_set() {
        let mut owner = Player::new("ann", "");
        let first = Property::new(deed(Color::Brown, 1));
        owner.add_property(first.deed.clone());
        assert_eq!(first.rent(&owner, 2, 7), 10);

        owner.add_property(deed(Color::Brown, 3));
        assert_eq!(first.rent(&owner, 2, 7), 20);
    }

    #[test]
    fn railroad_rent_doubles_per_railroad() {
        let mut owner = Player::new("ann", "");
        let first = Property::new(railroad(5));
        for (i, position) in [5, 15, 25, 35].iter().enumerate() {
            owner.add_property(railroad(*position));
            assert_eq!(first.rent(&owner, 0, 7), 25 << i);
        }
    }
}
