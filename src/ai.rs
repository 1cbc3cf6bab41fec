// Uniform random move selection for the automated opponent.

use crate::{board::cells_in, common::Cell, config::Cells, strategy::Strategy};
use rand::rngs::SmallRng;
use rand::Rng;

/// Picks uniformly among the legal destinations.
///
/// Candidates are enumerated in the set's row-major order, so the choice is
/// reproducible for a given RNG state.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomOpponent;

impl RandomOpponent {
    pub fn new() -> Self {
        Self
    }
}

/// Draw one member of `legal` uniformly at random.
pub fn pick_uniform<R: Rng>(rng: &mut R, legal: &Cells) -> Option<Cell> {
    let count = legal.count_ones();
    if count == 0 {
        return None;
    }
    let pick = rng.random_range(0..count);
    cells_in(legal).nth(pick)
}

impl Strategy for RandomOpponent {
    fn select_destination(&mut self, rng: &mut SmallRng, legal: &Cells) -> Option<Cell> {
        pick_uniform(rng, legal)
    }
}
