use monopoly_ledger::{
    Bankruptcy, Board, ConfigError, Deck, GameConfig, GameError, GameSession, Landing, Location,
    LocationLookup, Square, Transfer,
};

fn two_player_game() -> GameSession {
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    session.add_player("ann", "10.0.0.1").unwrap();
    session.add_player("bob", "10.0.0.2").unwrap();
    session
}

fn place(session: &mut GameSession, index: usize, location: Location) {
    session
        .player_mut(index)
        .unwrap()
        .token_mut()
        .set_location(location);
}

fn money(session: &GameSession, index: usize) -> i64 {
    session.player(index).unwrap().total_money()
}

#[test]
fn players_need_unique_nonempty_nicknames() {
    let mut session = two_player_game();

    assert_eq!(session.add_player("", "x"), Err(GameError::EmptyNickname));
    assert_eq!(
        session.add_player("ann", "x"),
        Err(GameError::DuplicateNickname("ann".to_owned()))
    );
    assert_eq!(session.add_player("cat", "x"), Ok(2));
    assert_eq!(
        session.player(2).unwrap().location(),
        Location::new(1, 0)
    );
}

#[test]
fn start_money_comes_from_config() {
    let config = GameConfig::from_json(r#"{"start_money": 1500}"#).unwrap();
    let mut session = GameSession::new(config).unwrap();
    session.add_player("ann", "").unwrap();
    assert_eq!(money(&session, 0), 1500);
}

#[test]
fn invalid_config_is_rejected() {
    let config = GameConfig {
        jail_sentence: 5,
        ..GameConfig::default()
    };
    assert_eq!(
        GameSession::new(config).unwrap_err(),
        GameError::Config(ConfigError::JailSentence(5))
    );
}

#[test]
fn tunnel_cannot_cover_other_squares() {
    let over_jail = GameConfig {
        tunnel_outer: Location::new(1, 10),
        ..GameConfig::default()
    };
    assert_eq!(
        GameSession::new(over_jail.clone()).unwrap_err(),
        GameError::Config(ConfigError::TunnelPlacement(Location::new(1, 10)))
    );
    assert_eq!(
        Board::standard(&over_jail).unwrap_err(),
        GameError::Config(ConfigError::TunnelPlacement(Location::new(1, 10)))
    );

    let over_bonus = GameConfig {
        tunnel_inner: Location::new(2, 6),
        ..GameConfig::default()
    };
    assert_eq!(
        GameSession::new(over_bonus).unwrap_err(),
        GameError::Config(ConfigError::TunnelPlacement(Location::new(2, 6)))
    );
}

#[test]
fn passing_go_pays_salary_then_lands() {
    let mut session = two_player_game();
    place(&mut session, 0, Location::new(1, 38));

    let landing = session.move_token(0, 4).unwrap();

    assert_eq!(landing, Landing::DrawCard(Deck::CommunityChest));
    assert_eq!(session.player(0).unwrap().location(), Location::new(1, 2));
    assert_eq!(money(&session, 0), 3400);
}

#[test]
fn reverse_direction_walks_backwards() {
    let mut session = two_player_game();
    place(&mut session, 0, Location::new(1, 1));
    session.player_mut(0).unwrap().set_reverse_direction(true);

    let landing = session.move_token(0, 2).unwrap();

    assert_eq!(
        landing,
        Landing::PurchaseOffer {
            location: Location::new(1, 39),
            price: 400
        }
    );
    assert_eq!(money(&session, 0), 3400);
}

#[test]
fn flying_over_bonus_pays_250() {
    let mut session = two_player_game();
    place(&mut session, 0, Location::new(2, 0));

    assert_eq!(session.move_token(0, 8).unwrap(), Landing::Rested);
    assert_eq!(money(&session, 0), 3450);
}

#[test]
fn stopping_on_bonus_pays_300() {
    let mut session = two_player_game();
    place(&mut session, 0, Location::new(2, 0));

    assert_eq!(session.move_token(0, 6).unwrap(), Landing::Collected(300));
    assert_eq!(money(&session, 0), 3500);
}

#[test]
fn standing_still_does_not_land_again() {
    let mut session = two_player_game();
    place(&mut session, 0, Location::new(2, 6));

    assert_eq!(session.move_token(0, 0).unwrap(), Landing::Rested);
    assert_eq!(session.player(0).unwrap().location(), Location::new(2, 6));
    assert_eq!(money(&session, 0), 3200);

    assert_eq!(session.move_token(1, 0).unwrap(), Landing::Rested);
    assert_eq!(money(&session, 1), 3200);
}

#[test]
fn jailing_square_with_no_sentence_fails_cleanly() {
    let mut board = Board::new(&[4]);
    board.insert(Location::new(0, 0), Square::go(100)).unwrap();
    board.insert(Location::new(0, 2), Square::jail()).unwrap();
    board
        .insert(Location::new(0, 3), Square::go_to_jail(0))
        .unwrap();
    let mut session = GameSession::with_board(GameConfig::default(), board);
    session.add_player("ann", "").unwrap();

    assert_eq!(session.move_token(0, 3), Err(GameError::EmptySentence));
    assert!(!session.player(0).unwrap().is_in_jail());
    session.end_turn();
    assert_eq!(session.move_token(0, 1).unwrap(), Landing::Collected(100));
}

#[test]
fn tunnel_moves_between_tracks_without_passing_anything() {
    let mut session = two_player_game();
    place(&mut session, 0, Location::new(0, 10));

    let landing = session.move_token(0, 8).unwrap();

    assert_eq!(landing, Landing::Teleported(Location::new(2, 14)));
    assert_eq!(session.player(0).unwrap().location(), Location::new(2, 14));
    assert_eq!(money(&session, 0), 3200);
}

#[test]
fn go_to_jail_square_locks_the_player_in() {
    let mut session = two_player_game();
    place(&mut session, 0, Location::new(1, 25));

    assert_eq!(session.move_token(0, 5).unwrap(), Landing::Jailed);

    let ann = session.player(0).unwrap();
    assert_eq!(ann.location(), Location::new(1, 10));
    assert_eq!(ann.jail_time(), 3);
    assert_eq!(
        session.move_token(0, 3),
        Err(GameError::PlayerInJail("ann".to_owned()))
    );
}

#[test]
fn ending_turns_serves_jail_time() {
    let mut session = two_player_game();
    session.send_to_jail(0).unwrap();

    assert_eq!(session.end_turn(), 1);
    assert_eq!(session.player(0).unwrap().jail_time(), 2);
    assert_eq!(session.end_turn(), 0);
    assert_eq!(session.player(0).unwrap().jail_time(), 2);
    session.end_turn();
    session.end_turn();
    session.end_turn();
    assert_eq!(session.player(0).unwrap().jail_time(), 0);
    assert!(!session.player(0).unwrap().is_in_jail());
}

#[test]
fn buying_and_collecting_rent() {
    let mut session = two_player_game();
    let mediterranean = Location::new(1, 1);

    assert_eq!(
        session.move_token(0, 1).unwrap(),
        Landing::PurchaseOffer {
            location: mediterranean,
            price: 60
        }
    );
    assert_eq!(session.buy_property(0, mediterranean), Ok(true));
    assert_eq!(session.board().owner_of(mediterranean), Some("ann"));
    assert_eq!(money(&session, 0), 3140);

    assert_eq!(
        session.move_token(1, 1).unwrap(),
        Landing::RentPaid {
            owner: "ann".to_owned(),
            amount: 2
        }
    );
    assert_eq!(money(&session, 0), 3142);
    assert_eq!(money(&session, 1), 3198);
}

#[test]
fn full_color_set_doubles_rent() {
    let mut session = two_player_game();
    session.buy_property(0, Location::new(1, 1)).unwrap();
    session.buy_property(0, Location::new(1, 3)).unwrap();

    assert_eq!(
        session.land_at(1, Location::new(1, 3), 0).unwrap(),
        Landing::RentPaid {
            owner: "ann".to_owned(),
            amount: 8
        }
    );
}

#[test]
fn utility_rent_scales_with_the_roll() {
    let mut session = two_player_game();
    session.buy_property(0, Location::new(1, 12)).unwrap();
    place(&mut session, 1, Location::new(1, 1));

    assert_eq!(
        session.move_token(1, 11).unwrap(),
        Landing::RentPaid {
            owner: "ann".to_owned(),
            amount: 44
        }
    );
}

#[test]
fn unaffordable_rent_bankrupts_the_visitor() {
    let mut session = two_player_game();
    session.buy_property(0, Location::new(1, 39)).unwrap();
    session.player_mut(1).unwrap().set_total_money(10);

    assert_eq!(
        session.land_at(1, Location::new(1, 39), 0).unwrap(),
        Landing::Bankrupt(Bankruptcy::Unresolved)
    );
    assert_eq!(money(&session, 1), 10);
    assert_eq!(money(&session, 0), 2800);
}

#[test]
fn buying_checks_the_square() {
    let mut session = two_player_game();
    let boardwalk = Location::new(1, 39);

    assert_eq!(
        session.buy_property(0, Location::new(1, 0)),
        Err(GameError::NotOwnable(Location::new(1, 0)))
    );
    assert_eq!(
        session.buy_property(0, Location::new(2, 1)),
        Err(GameError::NoSquareAt(Location::new(2, 1)))
    );

    session.player_mut(1).unwrap().set_total_money(399);
    assert_eq!(session.buy_property(1, boardwalk), Ok(false));
    assert_eq!(session.board().owner_of(boardwalk), None);

    assert_eq!(session.buy_property(0, boardwalk), Ok(true));
    assert_eq!(
        session.buy_property(1, boardwalk),
        Err(GameError::AlreadyOwned {
            location: boardwalk,
            owner: "ann".to_owned()
        })
    );
}

#[test]
fn transfers_between_seats() {
    let mut session = two_player_game();

    assert_eq!(session.transfer(1, 0, 200), Ok(Transfer::Completed));
    assert_eq!(money(&session, 0), 3400);
    assert_eq!(money(&session, 1), 3000);

    assert_eq!(session.transfer(0, 0, 1), Err(GameError::SelfTransfer));
    assert_eq!(session.transfer(0, 9, 1), Err(GameError::UnknownPlayer(9)));
}

#[test]
fn removed_players_release_their_squares() {
    let mut session = two_player_game();
    session.buy_property(0, Location::new(1, 5)).unwrap();
    session.end_turn();

    let ann = session.remove_player(0).unwrap();

    assert_eq!(ann.nickname(), "ann");
    assert_eq!(session.board().owner_of(Location::new(1, 5)), None);
    assert_eq!(session.current_player_index(), 0);
    assert_eq!(session.player(0).unwrap().nickname(), "bob");
}

#[test]
fn landing_off_the_board_is_an_error() {
    let mut session = two_player_game();
    assert_eq!(
        session.land_at(0, Location::new(1, 40), 0),
        Err(GameError::NoSquareAt(Location::new(1, 40)))
    );
    assert_eq!(
        session.land_at(0, Location::new(3, 0), 0),
        Err(GameError::UnknownLayer(3))
    );
}

#[test]
fn custom_boards_plug_in() {
    let mut board = Board::new(&[4]);
    board.insert(Location::new(0, 0), Square::go(100)).unwrap();
    board.insert(Location::new(0, 2), Square::jail()).unwrap();
    board
        .insert(Location::new(0, 3), Square::go_to_jail(1))
        .unwrap();
    assert_eq!(
        board.square_location_from_name("Jail"),
        Some(Location::new(0, 2))
    );

    let mut session = GameSession::with_board(GameConfig::default(), board);
    session.add_player("ann", "").unwrap();

    assert_eq!(session.move_token(0, 3).unwrap(), Landing::Jailed);
    assert_eq!(session.player(0).unwrap().jail_time(), 1);
    session.end_turn();
    assert!(!session.player(0).unwrap().is_in_jail());

    assert_eq!(session.move_token(0, 2).unwrap(), Landing::Collected(100));
    assert_eq!(money(&session, 0), 3300);
}
