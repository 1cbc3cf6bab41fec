use std::collections::BTreeSet;

use vir_game::{cells_in, Board, BoardError, BoardState, Cells, Occupant, Side};

fn coords(set: &Cells) -> BTreeSet<(usize, usize)> {
    set.iter_set_bits().collect()
}

fn reference_board() -> Board {
    Board::seeded((2, 5), (2, 0)).unwrap()
}

#[test]
fn test_seeded_board_occupants() {
    let board = reference_board();
    assert_eq!(board.dimensions(), (5, 6));
    assert_eq!(board.occupant_at(2, 0).unwrap(), Occupant::Opponent);
    assert_eq!(board.occupant_at(2, 5).unwrap(), Occupant::Player);
    assert_eq!(board.occupied().count_ones(), 2);
    assert_eq!(board.occupant_at(0, 0).unwrap(), Occupant::Empty);
}

#[test]
fn test_opponent_destinations_at_top_edge() {
    let board = reference_board();
    let legal = coords(&board.legal_destinations(Side::Opponent));
    assert_eq!(legal, BTreeSet::from([(1, 0), (3, 0), (2, 1)]));
}

#[test]
fn test_player_destinations_at_bottom_edge() {
    let board = reference_board();
    let legal = coords(&board.legal_destinations(Side::Player));
    assert_eq!(legal, BTreeSet::from([(1, 5), (3, 5), (2, 4)]));
}

#[test]
fn test_occupy_keeps_previous_cell() {
    let mut board = reference_board();
    let target = board.cell_at(2, 1).unwrap();
    board.occupy(target, Side::Opponent);

    assert_eq!(board.occupant_at(2, 0).unwrap(), Occupant::Opponent);
    assert_eq!(board.occupant(target), Occupant::Opponent);
    let legal = coords(&board.legal_destinations(Side::Opponent));
    assert_eq!(
        legal,
        BTreeSet::from([(1, 0), (3, 0), (1, 1), (3, 1), (2, 2)])
    );
}

#[test]
fn test_occupy_takes_over_other_side() {
    let mut board = reference_board();
    let cell = board.cell_at(2, 5).unwrap();
    board.occupy(cell, Side::Opponent);
    assert_eq!(board.occupant(cell), Occupant::Opponent);
    assert!(board.occupied_by(Side::Player).is_empty());
    assert!(board.legal_destinations(Side::Player).is_empty());
}

#[test]
fn test_cell_at_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.cell_at(5, 0).unwrap_err(), BoardError::OutOfBounds { x: 5, y: 0 });
    assert_eq!(board.cell_at(0, 6).unwrap_err(), BoardError::OutOfBounds { x: 0, y: 6 });
    assert!(board.occupant_at(7, 7).is_err());
    assert!(board.cell_at(4, 5).is_ok());
}

#[test]
fn test_seed_errors() {
    assert_eq!(
        Board::seeded((1, 1), (1, 1)).unwrap_err(),
        BoardError::SeedOverlap { x: 1, y: 1 }
    );
    assert_eq!(
        Board::seeded((1, 9), (1, 1)).unwrap_err(),
        BoardError::OutOfBounds { x: 1, y: 9 }
    );
}

#[test]
fn test_empty_board_has_no_destinations() {
    let board = Board::new();
    assert!(board.legal_destinations(Side::Player).is_empty());
    assert!(board.legal_destinations(Side::Opponent).is_empty());
}

#[test]
fn test_board_state_roundtrip() {
    let mut board = reference_board();
    board.occupy(board.cell_at(1, 5).unwrap(), Side::Player);
    let state = BoardState::from(&board);
    let restored: Board = state.into();
    assert_eq!(restored, board);
    assert_eq!(
        cells_in(&restored.occupied_by(Side::Player))
            .map(|c| c.coords())
            .collect::<Vec<_>>(),
        vec![(1, 5), (2, 5)]
    );
}
