use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use vir_game::{cells_in, Board, Occupant, Side, BOARD_HEIGHT, BOARD_WIDTH};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH {
            let cell = board.cell_at(x, y).unwrap();
            match rng.random_range(0..4) {
                0 => board.occupy(cell, Side::Player),
                1 => board.occupy(cell, Side::Opponent),
                _ => {}
            }
        }
    }
    board
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Player), Just(Side::Opponent)]
}

fn adjacent(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1) == 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn destinations_are_empty_and_in_bounds(seed in any::<u64>(), side in side_strategy()) {
        let board = random_board(seed);
        for cell in cells_in(&board.legal_destinations(side)) {
            prop_assert!(cell.x() < BOARD_WIDTH && cell.y() < BOARD_HEIGHT);
            prop_assert_eq!(board.occupant(cell), Occupant::Empty);
        }
    }

    #[test]
    fn destinations_are_adjacent_to_own_cells(seed in any::<u64>(), side in side_strategy()) {
        let board = random_board(seed);
        let own: Vec<_> = cells_in(&board.occupied_by(side)).map(|c| c.coords()).collect();
        for cell in cells_in(&board.legal_destinations(side)) {
            prop_assert!(own.iter().any(|&o| adjacent(o, cell.coords())));
        }
    }

    #[test]
    fn every_adjacent_empty_cell_is_a_destination(seed in any::<u64>(), side in side_strategy()) {
        let board = random_board(seed);
        let legal = board.legal_destinations(side);
        let own: Vec<_> = cells_in(&board.occupied_by(side)).map(|c| c.coords()).collect();
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let cell = board.cell_at(x, y).unwrap();
                let expected = board.occupant(cell) == Occupant::Empty
                    && own.iter().any(|&o| adjacent(o, (x, y)));
                prop_assert_eq!(cell.in_set(&legal), expected);
            }
        }
    }

    #[test]
    fn occupy_then_read_back(
        seed in any::<u64>(),
        x in 0..BOARD_WIDTH,
        y in 0..BOARD_HEIGHT,
        side in side_strategy(),
    ) {
        let mut board = random_board(seed);
        let cell = board.cell_at(x, y).unwrap();
        board.occupy(cell, side);
        prop_assert_eq!(board.occupant(cell), Occupant::from(side));
        prop_assert_eq!(board.occupant_at(x, y).unwrap(), Occupant::from(side));
        let both = board.occupied_by(Side::Player) & board.occupied_by(Side::Opponent);
        prop_assert!(both.is_empty());
    }
}
