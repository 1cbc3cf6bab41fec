use crate::bitboard::BitBoard;

pub const BOARD_WIDTH: usize = 5;
pub const BOARD_HEIGHT: usize = 6;

/// Moves granted to a side each time it becomes active.
pub const TURN_ALLOWANCE: u8 = 2;

/// The opponent moves on frames where `frame % OPPONENT_MOVE_INTERVAL == 1`.
pub const OPPONENT_MOVE_INTERVAL: u64 = 15;

pub const PLAYER_SEED: (usize, usize) = (2, BOARD_HEIGHT - 1);
pub const OPPONENT_SEED: (usize, usize) = (2, 0);

/// Set of cells on the game board.
pub type Cells = BitBoard<u32, BOARD_WIDTH, BOARD_HEIGHT>;

/// Tunables for a single game. Board dimensions are fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub turn_allowance: u8,
    pub opponent_interval: u64,
    pub player_seed: (usize, usize),
    pub opponent_seed: (usize, usize),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_allowance: TURN_ALLOWANCE,
            opponent_interval: OPPONENT_MOVE_INTERVAL,
            player_seed: PLAYER_SEED,
            opponent_seed: OPPONENT_SEED,
        }
    }
}

impl GameConfig {
    pub fn with_turn_allowance(mut self, allowance: u8) -> Self {
        self.turn_allowance = allowance.max(1);
        self
    }

    pub fn with_opponent_interval(mut self, interval: u64) -> Self {
        self.opponent_interval = interval.max(1);
        self
    }

    pub fn with_seeds(mut self, player: (usize, usize), opponent: (usize, usize)) -> Self {
        self.player_seed = player;
        self.opponent_seed = opponent;
        self
    }
}
