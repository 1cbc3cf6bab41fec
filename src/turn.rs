//! Turn sequencing: whose turn it is and how many moves remain.

use crate::{
    board::Board,
    common::{Cell, Move, Side},
    config::Cells,
};
use log::{debug, info, warn};

/// Active side and its remaining allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TurnState {
    pub active: Side,
    pub moves_remaining: u8,
}

impl TurnState {
    /// Player active with nothing left, so the first evaluation hands the
    /// turn to the opponent.
    pub const fn initial() -> Self {
        TurnState {
            active: Side::Player,
            moves_remaining: 0,
        }
    }

    /// `side` active with a full allowance.
    pub const fn fresh(side: Side, allowance: u8) -> Self {
        TurnState {
            active: side,
            moves_remaining: allowance,
        }
    }
}

/// What a single evaluation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing changed.
    Idle,
    /// A move was executed and the allowance decremented.
    Moved(Move),
    /// The previous side ran out of moves; `to` is now active.
    TurnPassed { to: Side },
    /// The active side had no legal destination and lost moves.
    Forfeited { side: Side },
}

impl TickOutcome {
    pub fn is_idle(&self) -> bool {
        matches!(self, TickOutcome::Idle)
    }
}

/// Two-state machine (player turn / opponent turn) counting moves down.
#[derive(Debug, Clone)]
pub struct TurnController {
    state: TurnState,
    allowance: u8,
    opponent_interval: u64,
}

impl TurnController {
    pub fn new(allowance: u8, opponent_interval: u64) -> Self {
        Self {
            state: TurnState::initial(),
            allowance: allowance.max(1),
            opponent_interval: opponent_interval.max(1),
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn allowance(&self) -> u8 {
        self.allowance
    }

    /// Whether the opponent acts on `frame`.
    pub fn opponent_due(&self, frame: u64) -> bool {
        self.opponent_interval <= 1 || frame % self.opponent_interval == 1
    }

    /// Run one evaluation for `frame`.
    ///
    /// `click` is only honoured during the player's turn; `pick` is only
    /// consulted during the opponent's turn on frames where it is due.
    pub fn evaluate<F>(
        &mut self,
        frame: u64,
        board: &mut Board,
        click: Option<Cell>,
        pick: F,
    ) -> TickOutcome
    where
        F: FnOnce(&Cells) -> Option<Cell>,
    {
        let TurnState {
            active,
            moves_remaining,
        } = self.state;

        if moves_remaining == 0 {
            let next = active.other();
            self.state = TurnState::fresh(next, self.allowance);
            info!("frame {}: turn passes to {}", frame, next);
            return TickOutcome::TurnPassed { to: next };
        }

        match active {
            Side::Player => self.player_step(board, click),
            Side::Opponent if self.opponent_due(frame) => self.opponent_step(board, pick),
            Side::Opponent => TickOutcome::Idle,
        }
    }

    fn player_step(&mut self, board: &mut Board, click: Option<Cell>) -> TickOutcome {
        let legal = board.legal_destinations(Side::Player);
        if legal.is_empty() {
            warn!("player has no legal destination, forfeiting the rest of the turn");
            self.state.moves_remaining = 0;
            return TickOutcome::Forfeited { side: Side::Player };
        }
        match click {
            Some(cell) if cell.in_set(&legal) => self.execute(board, cell, Side::Player),
            Some(cell) => {
                debug!("ignoring click on {}: not a legal destination", cell);
                TickOutcome::Idle
            }
            None => TickOutcome::Idle,
        }
    }

    fn opponent_step<F>(&mut self, board: &mut Board, pick: F) -> TickOutcome
    where
        F: FnOnce(&Cells) -> Option<Cell>,
    {
        let legal = board.legal_destinations(Side::Opponent);
        match pick(&legal) {
            Some(cell) if cell.in_set(&legal) => self.execute(board, cell, Side::Opponent),
            choice => {
                if let Some(cell) = choice {
                    warn!("opponent strategy chose illegal cell {}", cell);
                } else {
                    warn!("opponent has no legal destination, forfeiting a move");
                }
                self.state.moves_remaining -= 1;
                TickOutcome::Forfeited {
                    side: Side::Opponent,
                }
            }
        }
    }

    fn execute(&mut self, board: &mut Board, cell: Cell, side: Side) -> TickOutcome {
        board.occupy(cell, side);
        self.state.moves_remaining -= 1;
        debug!(
            "{} occupies {}, {} move(s) left",
            side, cell, self.state.moves_remaining
        );
        TickOutcome::Moved(Move { side, cell })
    }
}
