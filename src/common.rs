//! Common types for the grid game: sides, occupants, cells and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::{Cells, BOARD_WIDTH};

/// One of the two parties taking turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// The side that moves after this one.
    pub const fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Tag held by every cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Occupant {
    #[default]
    Empty,
    Player,
    Opponent,
}

impl Occupant {
    /// The owning side, or `None` for an empty cell.
    pub const fn side(self) -> Option<Side> {
        match self {
            Occupant::Empty => None,
            Occupant::Player => Some(Side::Player),
            Occupant::Opponent => Some(Side::Opponent),
        }
    }
}

impl From<Side> for Occupant {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Occupant::Player,
            Side::Opponent => Occupant::Opponent,
        }
    }
}

/// A board coordinate known to lie inside the grid.
///
/// Cells are only handed out by [`Board::cell_at`](crate::Board::cell_at) and
/// by iterating a [`Cells`](crate::Cells) set, so holding one is proof of
/// being in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Cell {
    x: usize,
    y: usize,
}

impl Cell {
    pub(crate) const fn new(x: usize, y: usize) -> Self {
        Cell { x, y }
    }

    pub const fn x(&self) -> usize {
        self.x
    }

    pub const fn y(&self) -> usize {
        self.y
    }

    /// `(x, y)` pair.
    pub const fn coords(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Bit index of this cell in a [`Cells`](crate::Cells) set.
    #[inline]
    pub(crate) const fn index(&self) -> usize {
        self.y * BOARD_WIDTH + self.x
    }

    /// Whether this cell is a member of `set`.
    pub fn in_set(&self, set: &Cells) -> bool {
        set.contains_index(self.index())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An executed move: `side` now occupies `cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Move {
    pub side: Side,
    pub cell: Cell,
}

/// Errors returned by Board operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// Both sides were seeded on the same cell.
    SeedOverlap { x: usize, y: usize },
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { x, y } => BoardError::OutOfBounds { x, y },
            other => BoardError::BitBoardError(other),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Cell ({}, {}) is outside the board", x, y)
            }
            BoardError::SeedOverlap { x, y } => {
                write!(f, "Both sides were seeded on cell ({}, {})", x, y)
            }
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
