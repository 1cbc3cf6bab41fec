use crate::{
    ai::RandomOpponent,
    board::{Board, BoardState},
    common::{BoardError, Cell, Occupant, Side},
    config::{Cells, GameConfig},
    strategy::Strategy,
    turn::{TickOutcome, TurnController, TurnState},
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Serializable view of a running game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSnapshot {
    pub frame: u64,
    pub turn: TurnState,
    pub player_cells: usize,
    pub opponent_cells: usize,
    pub moves_made: u64,
}

/// Owned context holding the board, turn state, opponent and its RNG.
///
/// The frontend calls [`Game::tick`] once per display refresh and reads the
/// board back through [`Game::current_occupant`].
pub struct Game<S: Strategy = RandomOpponent> {
    config: GameConfig,
    board: Board,
    turns: TurnController,
    rng: SmallRng,
    opponent: S,
    frame: u64,
    moves_made: u64,
}

impl Game<RandomOpponent> {
    /// Create a game with the random opponent, seeded from `rng`.
    pub fn new(config: GameConfig, rng: SmallRng) -> Result<Self, BoardError> {
        Game::with_strategy(config, rng, RandomOpponent::new())
    }

    /// Default configuration with a fixed seed for reproducible games.
    pub fn with_seed(seed: u64) -> Result<Self, BoardError> {
        Game::new(GameConfig::default(), SmallRng::seed_from_u64(seed))
    }
}

impl<S: Strategy> Game<S> {
    /// Create a game whose opponent moves are chosen by `opponent`.
    pub fn with_strategy(config: GameConfig, rng: SmallRng, opponent: S) -> Result<Self, BoardError> {
        let board = Board::seeded(config.player_seed, config.opponent_seed)?;
        Ok(Self {
            turns: TurnController::new(config.turn_allowance, config.opponent_interval),
            config,
            board,
            rng,
            opponent,
            frame: 0,
            moves_made: 0,
        })
    }

    /// Advance the frame counter and run one evaluation.
    ///
    /// `click` is the cell the pointer was clicked on this frame, if any.
    pub fn tick(&mut self, click: Option<Cell>) -> TickOutcome {
        self.frame += 1;
        let frame = self.frame;
        let Self {
            board,
            turns,
            rng,
            opponent,
            ..
        } = self;
        let outcome = turns.evaluate(frame, board, click, |legal| {
            opponent.select_destination(rng, legal)
        });
        if matches!(outcome, TickOutcome::Moved(_)) {
            self.moves_made += 1;
        }
        outcome
    }

    /// Tick with a click at raw board coordinates.
    pub fn click_at(&mut self, x: usize, y: usize) -> Result<TickOutcome, BoardError> {
        let cell = self.board.cell_at(x, y)?;
        Ok(self.tick(Some(cell)))
    }

    pub fn current_occupant(&self, x: usize, y: usize) -> Result<Occupant, BoardError> {
        self.board.occupant_at(x, y)
    }

    pub fn board_dimensions(&self) -> (usize, usize) {
        self.board.dimensions()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn turn(&self) -> TurnState {
        self.turns.state()
    }

    /// Number of frames evaluated so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn moves_made(&self) -> u64 {
        self.moves_made
    }

    pub fn legal_destinations(&self, side: Side) -> Cells {
        self.board.legal_destinations(side)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let state = BoardState::from(&self.board);
        GameSnapshot {
            frame: self.frame,
            turn: self.turns.state(),
            player_cells: state.player.count_ones(),
            opponent_cells: state.opponent.count_ones(),
            moves_made: self.moves_made,
        }
    }
}
