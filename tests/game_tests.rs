use vir_game::{
    BoardError, Game, GameConfig, Occupant, Side, TickOutcome, TurnState,
};
use rand::{rngs::SmallRng, SeedableRng};

fn tick_until_player_turn(game: &mut Game) {
    while game.turn() != TurnState::fresh(Side::Player, 2) {
        game.tick(None);
        assert!(game.frame() < 200, "player never got the turn");
    }
}

#[test]
fn test_new_game_layout() {
    let game = Game::with_seed(1).unwrap();
    assert_eq!(game.board_dimensions(), (5, 6));
    assert_eq!(game.current_occupant(2, 0).unwrap(), Occupant::Opponent);
    assert_eq!(game.current_occupant(2, 5).unwrap(), Occupant::Player);
    assert_eq!(game.current_occupant(0, 0).unwrap(), Occupant::Empty);
    assert_eq!(
        game.current_occupant(5, 5).unwrap_err(),
        BoardError::OutOfBounds { x: 5, y: 5 }
    );
    assert_eq!(game.turn(), TurnState::initial());
    assert_eq!(game.frame(), 0);
}

#[test]
fn test_opening_sequence() {
    let mut game = Game::with_seed(99).unwrap();
    assert_eq!(game.tick(None), TickOutcome::TurnPassed { to: Side::Opponent });
    for _ in 2..16 {
        assert_eq!(game.tick(None), TickOutcome::Idle);
    }
    let legal = game.legal_destinations(Side::Opponent);
    match game.tick(None) {
        TickOutcome::Moved(mv) => {
            assert_eq!(mv.side, Side::Opponent);
            assert!(mv.cell.in_set(&legal));
            assert_eq!(game.board().occupant(mv.cell), Occupant::Opponent);
        }
        other => panic!("expected opponent move on frame 16, got {:?}", other),
    }
    assert_eq!(game.moves_made(), 1);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = Game::with_seed(2024).unwrap();
    let mut b = Game::with_seed(2024).unwrap();
    for _ in 0..200 {
        assert_eq!(a.tick(None), b.tick(None));
    }
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_click_at_resolves_and_executes() {
    let mut game = Game::with_seed(5).unwrap();
    tick_until_player_turn(&mut game);
    let outcome = game.click_at(1, 5).unwrap();
    assert!(matches!(outcome, TickOutcome::Moved(mv) if mv.side == Side::Player));
    assert_eq!(game.current_occupant(1, 5).unwrap(), Occupant::Player);
    assert_eq!(game.current_occupant(2, 5).unwrap(), Occupant::Player);
    assert_eq!(game.turn().moves_remaining, 1);

    assert_eq!(
        game.click_at(8, 1).unwrap_err(),
        BoardError::OutOfBounds { x: 8, y: 1 }
    );
}

#[test]
fn test_custom_config() {
    let config = GameConfig::default()
        .with_turn_allowance(3)
        .with_opponent_interval(1)
        .with_seeds((0, 0), (4, 5));
    let mut game = Game::new(config, SmallRng::seed_from_u64(8)).unwrap();
    assert_eq!(game.current_occupant(0, 0).unwrap(), Occupant::Player);

    game.tick(None);
    for _ in 0..3 {
        assert!(matches!(game.tick(None), TickOutcome::Moved(_)));
    }
    assert_eq!(game.tick(None), TickOutcome::TurnPassed { to: Side::Player });
    assert_eq!(game.turn(), TurnState::fresh(Side::Player, 3));
    assert_eq!(game.board().occupied_by(Side::Opponent).count_ones(), 4);
}

#[test]
fn test_snapshot_counts() {
    let mut game = Game::with_seed(11).unwrap();
    for _ in 0..40 {
        game.tick(None);
    }
    let snap = game.snapshot();
    assert_eq!(snap.frame, 40);
    assert_eq!(snap.player_cells, 1);
    assert_eq!(snap.opponent_cells, 3);
    assert_eq!(snap.moves_made, 2);
    assert_eq!(snap.turn, TurnState::fresh(Side::Player, 2));
}

#[test]
fn test_overlapping_seeds_rejected() {
    let config = GameConfig::default().with_seeds((1, 1), (1, 1));
    assert!(matches!(
        Game::new(config, SmallRng::seed_from_u64(0)),
        Err(BoardError::SeedOverlap { x: 1, y: 1 })
    ));
}
