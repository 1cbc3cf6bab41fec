#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use vir_game::{
    env_level, frontend, init_logging_with, viewport, Game, GameConfig, OPPONENT_MOVE_INTERVAL,
    TURN_ALLOWANCE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the random opponent in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=1000), help = "Ticks per second")]
        fps: u32,
        #[arg(long, default_value_t = TURN_ALLOWANCE, help = "Moves per turn")]
        allowance: u8,
        #[arg(long, default_value_t = OPPONENT_MOVE_INTERVAL, help = "Ticks between opponent moves")]
        interval: u64,
        /// A log level among "off", "error", "warn", "info", "debug", "trace"
        #[arg(long)]
        log_level: Option<LevelFilter>,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            fps,
            allowance,
            interval,
            log_level,
        } => {
            init_logging_with(log_level.or_else(env_level).unwrap_or(LevelFilter::Info));
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let config = GameConfig::default()
                .with_turn_allowance(allowance)
                .with_opponent_interval(interval);
            let mut game = Game::new(config, rng).map_err(|e| anyhow::anyhow!(e))?;

            let (w, h) = viewport::screen_size();
            log::info!("board {:?}, screen {}x{} px", game.board_dimensions(), w, h);
            println!("Click by typing a cell (B3) or screen pixels (74 42); q quits.");
            frontend::run(&mut game, fps).await?;
        }
    }
    Ok(())
}
