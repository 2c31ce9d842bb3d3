pub mod board;
pub mod config;
pub mod error;
pub mod globals;
pub mod observable;
pub mod player;
pub mod square;

use board::{Board, LocationLookup};
use config::GameConfig;
use error::GameError;
use globals::*;
use player::{Player, Transfer};
use square::{Landing, Square, SquareEffect};

/// A game in progress: the board, the players on it, and whose turn it is.
/// Squares and rules that need board lookups are handed this session's board
/// explicitly.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    players: Vec<Player>,
    /// The index of the player (from `players`) whose turn it currently is.
    current_player_index: usize,
}

impl GameSession {
    /*********        INITIALISATION INTERFACES        *********/

    /// Return a new game on the standard board.
    ///
    /// # Errors
    ///
    /// Fails if the config is invalid or doesn't fit the standard board.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let board = Board::standard(&config)?;
        Ok(Self::with_board(config, board))
    }

    /// Return a new game on a custom board.
    pub fn with_board(config: GameConfig, board: Board) -> Self {
        Self {
            config,
            board,
            players: vec![],
            current_player_index: 0,
        }
    }

    /*********        GETTERS        *********/

    /// Return the rules this game is played with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Return an immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the seated players, in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Return an immutable reference to the player at `index`.
    pub fn player(&self, index: usize) -> Result<&Player, GameError> {
        self.players.get(index).ok_or(GameError::UnknownPlayer(index))
    }

    /// Return a mutable reference to the player at `index`.
    pub fn player_mut(&mut self, index: usize) -> Result<&mut Player, GameError> {
        self.players
            .get_mut(index)
            .ok_or(GameError::UnknownPlayer(index))
    }

    /// Return the index of the player called `nickname`.
    pub fn player_index(&self, nickname: &str) -> Option<usize> {
        self.players.iter().position(|p| p.nickname() == nickname)
    }

    /// Return the index of the player whose turn it is.
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /*********        PLAYERS        *********/

    /// Seat a new player on 'Go' with the starting money. Return their index.
    ///
    /// # Errors
    ///
    /// Fails if the nickname is empty or taken, or the board has no 'Go'.
    pub fn add_player(&mut self, nickname: &str, address: &str) -> Result<usize, GameError> {
        if nickname.is_empty() {
            return Err(GameError::EmptyNickname);
        }
        if self.player_index(nickname).is_some() {
            return Err(GameError::DuplicateNickname(nickname.to_owned()));
        }

        let start = self
            .board
            .square_location_from_name(GO)
            .ok_or_else(|| GameError::UnknownSquare(GO.to_owned()))?;

        self.players.push(Player::starting_at(
            nickname,
            address,
            self.config.start_money,
            start,
        ));
        log::info!("{} joined from {}", nickname, address);

        Ok(self.players.len() - 1)
    }

    /// Take a player out of the game. Every square they owned goes back on the market.
    ///
    /// # Errors
    ///
    /// Fails if there is no player at `index`.
    pub fn remove_player(&mut self, index: usize) -> Result<Player, GameError> {
        if index >= self.players.len() {
            return Err(GameError::UnknownPlayer(index));
        }

        let player = self.players.remove(index);
        let owned: Vec<Location> = self
            .board
            .squares()
            .filter(|(_, square)| {
                square
                    .property()
                    .and_then(|p| p.owner())
                    .map_or(false, |owner| owner == player.nickname())
            })
            .map(|(location, _)| *location)
            .collect();

        for location in owned {
            if let Some(property) = self
                .board
                .square_at_mut(location)
                .and_then(Square::property_mut)
            {
                property.set_owner(None);
            }
        }

        // Keep the turn with the same player, or wrap around if the last seat left
        if index < self.current_player_index {
            self.current_player_index -= 1;
        }
        if self.current_player_index >= self.players.len() {
            self.current_player_index = 0;
        }

        log::info!("{} left the game", player.nickname());
        Ok(player)
    }

    /// Return mutable references to two different players.
    fn pair_mut(&mut self, a: usize, b: usize) -> Result<(&mut Player, &mut Player), GameError> {
        if a == b {
            return Err(GameError::SelfTransfer);
        }
        for &i in &[a, b] {
            if i >= self.players.len() {
                return Err(GameError::UnknownPlayer(i));
            }
        }

        if a < b {
            let (left, right) = self.players.split_at_mut(b);
            Ok((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.players.split_at_mut(a);
            Ok((&mut right[0], &mut left[b]))
        }
    }

    /*********        MONEY        *********/

    /// Have player `payer` pay `amount` to player `payee`.
    ///
    /// # Errors
    ///
    /// Fails if either index is unknown or both are the same player.
    pub fn transfer(
        &mut self,
        payer: usize,
        payee: usize,
        amount: u32,
    ) -> Result<Transfer, GameError> {
        let (payer, payee) = self.pair_mut(payer, payee)?;
        Ok(payer.pay_money(payee, amount))
    }

    /// Buy the square at `location` for player `index`. Return `false` if
    /// they can't afford it.
    ///
    /// # Errors
    ///
    /// Fails if the square doesn't exist, can't be owned, or already has an owner.
    pub fn buy_property(&mut self, index: usize, location: Location) -> Result<bool, GameError> {
        let player = self
            .players
            .get_mut(index)
            .ok_or(GameError::UnknownPlayer(index))?;
        let property = self
            .board
            .square_at_mut(location)
            .ok_or(GameError::NoSquareAt(location))?
            .property_mut()
            .ok_or(GameError::NotOwnable(location))?;

        if let Some(owner) = property.owner() {
            return Err(GameError::AlreadyOwned {
                location,
                owner: owner.to_owned(),
            });
        }

        if !player.decrease_money(property.deed.price()) {
            return Ok(false);
        }

        property.set_owner(Some(player.nickname()));
        player.add_property(property.deed.clone());
        log::info!("{} bought {}", player.nickname(), property.deed.name());

        Ok(true)
    }

    /// Make player `payer` pay the owner of the square at `location` its rent.
    fn collect_rent(
        &mut self,
        payer: usize,
        owner: String,
        location: Location,
        dice: u8,
    ) -> Result<Landing, GameError> {
        let owner_index = match self.player_index(&owner) {
            Some(i) => i,
            None => {
                log::warn!("{} owns {} but is not in the game", owner, location);
                return Ok(Landing::Rested);
            }
        };

        let property = self
            .board
            .square_at(location)
            .and_then(Square::property)
            .ok_or(GameError::NotOwnable(location))?;
        let group_size = property
            .deed
            .as_title_deed()
            .map_or(0, |deed| self.board.color_group_size(deed.color));
        let amount = property.rent(&self.players[owner_index], group_size, dice);

        Ok(match self.transfer(payer, owner_index, amount)? {
            Transfer::Completed => Landing::RentPaid { owner, amount },
            Transfer::Bankrupt(bankruptcy) => Landing::Bankrupt(bankruptcy),
        })
    }

    /*********        MOVEMENT        *********/

    /// Move player `index`'s token `steps` squares along its track, in the
    /// player's direction. Squares flown over are passed by, and the square
    /// the token stops on is landed on. Rent is settled straight away;
    /// anything else left to do is returned. Moving 0 steps does nothing.
    ///
    /// # Errors
    ///
    /// Fails if the player is unknown or in jail, or is standing off the board.
    pub fn move_token(&mut self, index: usize, steps: u8) -> Result<Landing, GameError> {
        let board = &self.board;
        let player = self
            .players
            .get_mut(index)
            .ok_or(GameError::UnknownPlayer(index))?;

        if player.is_in_jail() {
            return Err(GameError::PlayerInJail(player.nickname().to_owned()));
        }
        if steps == 0 {
            return Ok(Landing::Rested);
        }

        let reverse = player.is_reverse_direction();
        let mut location = player.location();

        for step in 1..=steps {
            location = board.step(location, reverse)?;

            if step < steps {
                if let Some(square) = board.square_at(location) {
                    square.pass_by(player);
                }
            }
        }

        player.token_mut().set_location(location);
        self.land(index, steps)
    }

    /// Put player `index`'s token straight on `location` and land there.
    /// Nothing in between is passed.
    ///
    /// # Errors
    ///
    /// Fails if the player is unknown or `location` is off the board.
    pub fn land_at(
        &mut self,
        index: usize,
        location: Location,
        dice: u8,
    ) -> Result<Landing, GameError> {
        match self.board.track_len(location.layer) {
            Some(len) if location.position < len => {}
            Some(_) => return Err(GameError::NoSquareAt(location)),
            None => return Err(GameError::UnknownLayer(location.layer)),
        }

        self.player_mut(index)?.token_mut().set_location(location);
        self.land(index, dice)
    }

    fn land(&mut self, index: usize, dice: u8) -> Result<Landing, GameError> {
        let board = &self.board;
        let player = self
            .players
            .get_mut(index)
            .ok_or(GameError::UnknownPlayer(index))?;

        let landing = match board.square_at(player.location()) {
            Some(square) => square.land_on(player, board)?,
            None => Landing::Rested,
        };

        match landing {
            Landing::RentDue { owner, location } => self.collect_rent(index, owner, location, dice),
            other => Ok(other),
        }
    }

    /*********        TURNS        *********/

    /// Send player `index` to jail for the configured sentence.
    ///
    /// # Errors
    ///
    /// Fails if the player is unknown or the board has no 'Jail'.
    pub fn send_to_jail(&mut self, index: usize) -> Result<(), GameError> {
        let sentence = self.config.jail_sentence;
        let board = &self.board;
        let player = self
            .players
            .get_mut(index)
            .ok_or(GameError::UnknownPlayer(index))?;

        player.go_to_jail_for(sentence, board)
    }

    /// Finish the current player's turn. A jailed player serves one turn of
    /// their sentence. Return the index of the player whose turn it is next.
    pub fn end_turn(&mut self) -> usize {
        if self.players.is_empty() {
            return 0;
        }

        let player = &mut self.players[self.current_player_index];
        if player.is_in_jail() {
            player.decrease_jail_time();
        }

        self.current_player_index = (self.current_player_index + 1) % self.players.len();
        self.current_player_index
    }
}
