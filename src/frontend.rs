#![cfg(feature = "std")]

//! Tick-driven terminal frontend: a fixed-rate ticker drives the game while
//! stdin lines are queued up as clicks for the next tick.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::{
    cli::{self, Command},
    common::Cell,
    game::Game,
    strategy::Strategy,
};

/// Time between ticks at `fps` ticks per second. Never zero.
pub fn tick_period(fps: u32) -> Duration {
    Duration::from_micros((1_000_000 / u64::from(fps.max(1))).max(1))
}

/// Run the game until the user quits or stdin closes.
pub async fn run<S: Strategy>(game: &mut Game<S>, fps: u32) -> anyhow::Result<()> {
    let mut ticker = time::interval(tick_period(fps));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Option<Cell> = None;

    cli::print_board(game);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let outcome = game.tick(pending.take());
                if !outcome.is_idle() {
                    log::debug!("frame {}: {:?}", game.frame(), outcome);
                    cli::print_board(game);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match cli::parse_command(&line) {
                    Some(Command::Quit) => break,
                    Some(command) => match cli::resolve_click(game, command) {
                        Some(cell) => pending = Some(cell),
                        None => println!("That is not on the board."),
                    },
                    None => println!("Enter a cell like B3, pixel coordinates like `74 42`, or q."),
                }
            }
        }
    }
    Ok(())
}
