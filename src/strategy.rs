use crate::{common::Cell, config::Cells};
use rand::rngs::SmallRng;

/// Interface implemented by the automated move pickers.
pub trait Strategy {
    /// Choose one destination out of `legal`, or `None` when the set is empty.
    fn select_destination(&mut self, rng: &mut SmallRng, legal: &Cells) -> Option<Cell>;
}

impl<S: Strategy + ?Sized> Strategy for &mut S {
    fn select_destination(&mut self, rng: &mut SmallRng, legal: &Cells) -> Option<Cell> {
        (**self).select_destination(rng, legal)
    }
}
