//! Occupancy grid and adjacency-based legal destinations.

use crate::common::{BoardError, Cell, Occupant, Side};
use crate::config::{Cells, BOARD_HEIGHT, BOARD_WIDTH};
use core::fmt;

/// Snapshot of which cells each side owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardState {
    pub player: Cells,
    pub opponent: Cells,
}

/// Fixed-size grid where each cell is empty or owned by one side.
///
/// Ownership is stored as one bitboard per side; a cell that is in neither
/// is empty. The two bitboards never overlap.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    player: Cells,
    opponent: Cells,
}

/// Iterate the members of a cell set as [`Cell`] values, row by row.
pub fn cells_in(set: &Cells) -> impl Iterator<Item = Cell> + '_ {
    set.iter_set_bits().map(|(x, y)| Cell::new(x, y))
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new() -> Self {
        Board {
            player: Cells::new(),
            opponent: Cells::new(),
        }
    }

    /// Create a board with one token per side on the given coordinates.
    pub fn seeded(player: (usize, usize), opponent: (usize, usize)) -> Result<Self, BoardError> {
        let mut board = Board::new();
        let p = board.cell_at(player.0, player.1)?;
        let o = board.cell_at(opponent.0, opponent.1)?;
        if p == o {
            return Err(BoardError::SeedOverlap { x: p.x(), y: p.y() });
        }
        board.occupy(p, Side::Player);
        board.occupy(o, Side::Opponent);
        Ok(board)
    }

    /// `(width, height)` of the grid.
    pub const fn dimensions(&self) -> (usize, usize) {
        (BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Bounds-checked lookup of the cell at `(x, y)`.
    pub fn cell_at(&self, x: usize, y: usize) -> Result<Cell, BoardError> {
        if x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return Err(BoardError::OutOfBounds { x, y });
        }
        Ok(Cell::new(x, y))
    }

    pub fn occupant(&self, cell: Cell) -> Occupant {
        let idx = cell.index();
        if self.player.contains_index(idx) {
            Occupant::Player
        } else if self.opponent.contains_index(idx) {
            Occupant::Opponent
        } else {
            Occupant::Empty
        }
    }

    /// Occupant at raw coordinates, failing with `OutOfBounds` outside the grid.
    pub fn occupant_at(&self, x: usize, y: usize) -> Result<Occupant, BoardError> {
        Ok(self.occupant(self.cell_at(x, y)?))
    }

    /// All cells currently owned by `side`.
    pub fn occupied_by(&self, side: Side) -> Cells {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    /// Cells owned by either side.
    pub fn occupied(&self) -> Cells {
        self.player | self.opponent
    }

    /// Empty cells orthogonally adjacent to at least one cell owned by `side`.
    pub fn legal_destinations(&self, side: Side) -> Cells {
        self.occupied_by(side).neighbors() & !self.occupied()
    }

    /// Mark `cell` as owned by `side`.
    ///
    /// No legality check happens here and the side's earlier cells are kept,
    /// so a side accumulates tokens as it moves.
    pub fn occupy(&mut self, cell: Cell, side: Side) {
        let idx = cell.index();
        match side {
            Side::Player => {
                self.opponent.remove_index(idx);
                self.player.insert_index(idx);
            }
            Side::Opponent => {
                self.player.remove_index(idx);
                self.opponent.insert_index(idx);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for y in 0..BOARD_HEIGHT {
            write!(f, "  ")?;
            for x in 0..BOARD_WIDTH {
                let ch = match self.occupant(Cell::new(x, y)) {
                    Occupant::Empty => '.',
                    Occupant::Player => 'P',
                    Occupant::Opponent => 'O',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            player: b.player,
            opponent: b.opponent,
        }
    }
}

impl From<BoardState> for Board {
    /// Restores a board; cells claimed by both sides go to the opponent.
    fn from(state: BoardState) -> Self {
        Board {
            player: state.player & !state.opponent,
            opponent: state.opponent,
        }
    }
}
