use std::fmt;

use super::board::LocationLookup;
use super::error::GameError;
use super::globals::*;
use super::observable::{ChangeEvent, FieldValue, Observable, Subscriber};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Where a player stands with respect to jail.
pub enum JailState {
    Free,
    /// Jailed with this many turns left to sit out.
    Jailed(u8),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
/// The state of a bankruptcy declaration.
pub enum Bankruptcy {
    /// Declared, but nothing has been liquidated or forfeited yet.
    Unresolved,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
/// The outcome of paying another player.
pub enum Transfer {
    /// The payer was debited and the payee credited.
    Completed,
    /// The payer could not cover the amount. No money moved.
    Bankrupt(Bankruptcy),
}

#[derive(Debug)]
/// A player in the game, with their ledger, portfolio and token.
pub struct Player {
    /// Unique within a game.
    nickname: String,
    /// Only negative while a bankruptcy is being decided.
    total_money: i64,
    reverse_direction: bool,
    in_jail: bool,
    /// Turns left in jail, between 0 and 3.
    jail_time: u8,
    cards: Option<Vec<OwnableCard>>,
    properties: Option<Vec<OwnableSquare>>,
    token: Token,
    /// The client this player's actions come from. Only the sync layer reads it.
    address: String,
    bankruptcy: Option<Bankruptcy>,
    /// Created on first subscription.
    listeners: Option<Observable>,
}

impl Player {
    /*********        INITIALISATION INTERFACES        *********/

    /// Return a new player with the starting money, standing on the classic 'Go'.
    pub fn new(nickname: &str, address: &str) -> Self {
        Self::starting_at(
            nickname,
            address,
            START_MONEY,
            Location::new(CLASSIC_LAYER, 0),
        )
    }

    /// Return a new player with `money`, whose token starts at `location`.
    pub fn starting_at(nickname: &str, address: &str, money: u32, location: Location) -> Self {
        Self {
            nickname: nickname.to_owned(),
            total_money: i64::from(money),
            reverse_direction: false,
            in_jail: false,
            jail_time: 0,
            cards: Some(vec![]),
            properties: Some(vec![]),
            token: Token::new(location),
            address: address.to_owned(),
            bankruptcy: None,
            listeners: None,
        }
    }

    /*********        GETTERS        *********/

    /// Return the player's nickname.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Return how much money the player holds.
    pub fn total_money(&self) -> i64 {
        self.total_money
    }

    /// Return whether the player's token moves backwards around the track.
    pub fn is_reverse_direction(&self) -> bool {
        self.reverse_direction
    }

    /// Return whether the player is in jail.
    pub fn is_in_jail(&self) -> bool {
        self.in_jail
    }

    /// Return the turns left in jail. 0 when free.
    pub fn jail_time(&self) -> u8 {
        self.jail_time
    }

    /// Return the jail flag and countdown as one state.
    pub fn jail_state(&self) -> JailState {
        if self.in_jail {
            JailState::Jailed(self.jail_time)
        } else {
            JailState::Free
        }
    }

    /// The player's cards. `None` only if the sync layer cleared them.
    pub fn cards(&self) -> Option<&[OwnableCard]> {
        self.cards.as_deref()
    }

    /// The player's properties. `None` only if the sync layer cleared them.
    pub fn properties(&self) -> Option<&[OwnableSquare]> {
        self.properties.as_deref()
    }

    /// Return an immutable reference to the player's token.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Return a mutable reference to the player's token.
    pub fn token_mut(&mut self) -> &mut Token {
        &mut self.token
    }

    /// Return where the player's token stands.
    pub fn location(&self) -> Location {
        self.token.location()
    }

    /// Return the address of the player's client.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Return the player's bankruptcy declaration, if any.
    pub fn bankruptcy(&self) -> Option<Bankruptcy> {
        self.bankruptcy
    }

    /// Return whether the player has declared bankruptcy.
    pub fn is_bankrupt(&self) -> bool {
        self.bankruptcy.is_some()
    }

    /*********        RAW SETTERS        *********/
    // Used when applying a snapshot from a remote peer. These publish nothing.

    /// Overwrite the nickname.
    pub fn set_nickname(&mut self, nickname: &str) {
        self.nickname = nickname.to_owned();
    }

    /// Overwrite the money held.
    pub fn set_total_money(&mut self, total_money: i64) {
        self.total_money = total_money;
    }

    /// Overwrite the direction of travel.
    pub fn set_reverse_direction(&mut self, reverse_direction: bool) {
        self.reverse_direction = reverse_direction;
    }

    /// Overwrite the jail flag.
    pub fn set_in_jail(&mut self, in_jail: bool) {
        self.in_jail = in_jail;
    }

    /// Overwrite the jail countdown.
    pub fn set_jail_time(&mut self, jail_time: u8) {
        self.jail_time = jail_time;
    }

    /// Overwrite the cards.
    pub fn set_cards(&mut self, cards: Option<Vec<OwnableCard>>) {
        self.cards = cards;
    }

    /// Overwrite the properties.
    pub fn set_properties(&mut self, properties: Option<Vec<OwnableSquare>>) {
        self.properties = properties;
    }

    /// Overwrite the client address.
    pub fn set_address(&mut self, address: &str) {
        self.address = address.to_owned();
    }

    /*********        LEDGER        *********/

    /// Add `amount` to the player's money.
    pub fn increase_money(&mut self, amount: u32) {
        let old = self.total_money;
        self.total_money = old.saturating_add(i64::from(amount));
        self.publish_money(old);
    }

    /// Take `amount` from the player's money. Return `false` and change
    /// nothing if the player can't afford it.
    pub fn decrease_money(&mut self, amount: u32) -> bool {
        if self.total_money < i64::from(amount) {
            return false;
        }

        let old = self.total_money;
        self.total_money -= i64::from(amount);
        self.publish_money(old);

        true
    }

    /// Pay `amount` to `payee`. If the player can't afford it they go bankrupt
    /// instead and neither balance changes.
    pub fn pay_money(&mut self, payee: &mut Player, amount: u32) -> Transfer {
        if self.total_money < i64::from(amount) || !self.decrease_money(amount) {
            return Transfer::Bankrupt(self.go_bankrupt());
        }

        payee.increase_money(amount);
        log::debug!("{} paid ${} to {}", self.nickname, amount, payee.nickname);

        Transfer::Completed
    }

    /// Declare the player bankrupt. Liquidating their assets is left to
    /// whoever resolves the declaration.
    pub fn go_bankrupt(&mut self) -> Bankruptcy {
        log::info!(
            "{} declared bankruptcy with ${}",
            self.nickname,
            self.total_money
        );
        let state = Bankruptcy::Unresolved;
        self.bankruptcy = Some(state);
        state
    }

    /// Money plus the value of every card and property held.
    pub fn net_worth(&self) -> i64 {
        let cards: i64 = self.cards.iter().flatten().map(|c| i64::from(c.value())).sum();
        let properties: i64 = self
            .properties
            .iter()
            .flatten()
            .map(|p| i64::from(p.value()))
            .sum();

        self.total_money + cards + properties
    }

    /*********        JAIL        *********/

    /// Send the player to jail for the full sentence.
    ///
    /// # Errors
    ///
    /// Fails without touching the player if the board has no 'Jail' square.
    pub fn go_to_jail(&mut self, board: &dyn LocationLookup) -> Result<(), GameError> {
        self.go_to_jail_for(MAX_JAIL_TIME, board)
    }

    /// Send the player to jail for `turns` turns, capped at the full sentence.
    ///
    /// # Errors
    ///
    /// Fails without touching the player if `turns` is 0 or the board has no
    /// 'Jail' square.
    pub fn go_to_jail_for(
        &mut self,
        turns: u8,
        board: &dyn LocationLookup,
    ) -> Result<(), GameError> {
        if turns == 0 {
            return Err(GameError::EmptySentence);
        }

        let jail = board
            .square_location_from_name(JAIL)
            .ok_or_else(|| GameError::UnknownSquare(JAIL.to_owned()))?;

        self.in_jail = true;
        self.jail_time = turns.min(MAX_JAIL_TIME);
        self.token.set_location(jail);
        log::info!("{} was sent to jail at {}", self.nickname, jail);

        Ok(())
    }

    /// Leave jail immediately, e.g. with a card or by rolling a double.
    pub fn get_out_of_jail(&mut self) {
        self.jail_time = 0;
        self.in_jail = false;
    }

    /// Count down one turn of the jail sentence. The player is freed when it reaches 0.
    pub fn decrease_jail_time(&mut self) {
        if self.jail_time > 0 {
            self.jail_time -= 1;
            self.in_jail = self.jail_time != 0;
        }
    }

    /// Spend a "Get Out of Jail Free" card. Return whether one was used.
    pub fn use_get_out_of_jail_card(&mut self) -> bool {
        if !self.in_jail {
            return false;
        }

        let cards = self.cards.get_or_insert_with(Vec::new);
        match cards
            .iter()
            .position(|c| c.kind == CardKind::GetOutOfJailFree)
        {
            Some(i) => {
                cards.remove(i);
                self.get_out_of_jail();
                true
            }
            None => false,
        }
    }

    /*********        PORTFOLIO        *********/

    /// Give the player `card`.
    pub fn add_card(&mut self, card: OwnableCard) {
        self.cards.get_or_insert_with(Vec::new).push(card);
    }

    /// Remove the first card equal to `card`. Return whether it was held.
    pub fn remove_card(&mut self, card: &OwnableCard) -> bool {
        let cards = self.cards.get_or_insert_with(Vec::new);
        match cards.iter().position(|c| c == card) {
            Some(i) => {
                cards.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn add_property(&mut self, property: OwnableSquare) {
        let properties = self.properties.get_or_insert_with(Vec::new);
        let old = properties.clone();
        properties.push(property);
        let new = properties.clone();

        self.publish_property_event(
            "properties",
            FieldValue::Properties(old),
            FieldValue::Properties(new),
        );
    }

    /// Remove the first property equal to `property`. Return whether it was held.
    pub fn remove_property(&mut self, property: &OwnableSquare) -> bool {
        let properties = self.properties.get_or_insert_with(Vec::new);
        let i = match properties.iter().position(|p| p == property) {
            Some(i) => i,
            None => return false,
        };

        let old = properties.clone();
        properties.remove(i);
        let new = properties.clone();

        self.publish_property_event(
            "properties",
            FieldValue::Properties(old),
            FieldValue::Properties(new),
        );

        true
    }

    /// Return the player's title deeds in the color set `color`.
    pub fn title_deeds_with_color(&self, color: Color) -> Vec<&TitleDeed> {
        self.properties
            .iter()
            .flatten()
            .filter_map(OwnableSquare::as_title_deed)
            .filter(|deed| deed.color == color)
            .collect()
    }

    /// Return how many title deeds the player holds in the color set `color`.
    pub fn num_title_deeds_with_color(&self, color: Color) -> usize {
        self.title_deeds_with_color(color).len()
    }

    /// Return how many railroads the player owns.
    pub fn num_railroads(&self) -> usize {
        self.properties
            .iter()
            .flatten()
            .filter(|p| matches!(p, OwnableSquare::Railroad(_)))
            .count()
    }

    /// Return how many utilities the player owns.
    pub fn num_utilities(&self) -> usize {
        self.properties
            .iter()
            .flatten()
            .filter(|p| matches!(p, OwnableSquare::Utility(_)))
            .count()
    }

    /*********        CHANGE NOTIFICATION        *********/

    /// Subscribe `endpoint` to this player's changes under `id`.
    pub fn subscribe(&mut self, id: &str, endpoint: Box<dyn Subscriber>) {
        self.listeners
            .get_or_insert_with(Observable::new)
            .register(id, endpoint);
    }

    /// Return whether `id` was subscribed.
    pub fn unsubscribe(&mut self, id: &str) -> bool {
        match &mut self.listeners {
            Some(listeners) => listeners.unregister(id),
            None => false,
        }
    }

    /// Return how many subscribers are listening to this player.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.as_ref().map_or(0, Observable::len)
    }

    /// Drop every subscriber. Nothing else about the player changes.
    pub fn refresh_property_listeners(&mut self) {
        self.listeners = None;
    }

    /// Tell every subscriber that `field` changed from `old` to `new`.
    pub fn publish_property_event(&self, field: &str, old: FieldValue, new: FieldValue) {
        if let Some(listeners) = &self.listeners {
            listeners.publish(&ChangeEvent {
                field: field.to_owned(),
                old,
                new,
            });
        }
    }

    fn publish_money(&self, old: i64) {
        self.publish_property_event(
            "money",
            FieldValue::Money(old),
            FieldValue::Money(self.total_money),
        );
    }

    /*********        CONSISTENCY        *********/

    /// Check the representation invariants. Meant for tests and debug assertions.
    pub fn rep_ok(&self) -> bool {
        !self.nickname.is_empty()
            && self.total_money >= 0
            && self.cards.is_some()
            && self.properties.is_some()
            && self.jail_time <= MAX_JAIL_TIME
            && self.in_jail == (self.jail_time > 0)
    }
}

/// Players are told apart by nickname alone.
impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.nickname == other.nickname
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos_color = if self.in_jail { "\x1b[31m" } else { "\x1b[36m" };

        write!(
            f,
            "{}{}\x1b[0m {} \x1b[32m${}\x1b[0m",
            pos_color,
            self.token.location(),
            self.nickname,
            self.total_money
        )
    }
}
