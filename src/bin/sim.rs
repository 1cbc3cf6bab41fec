use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use vir_game::{pick_uniform, Game, GameConfig, Side, TickOutcome};

/// Self-play: both sides pick uniformly among their legal destinations.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <ticks>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let ticks: u64 = args[2].parse()?;

    let mut game = Game::new(GameConfig::default(), SmallRng::seed_from_u64(seed))
        .map_err(|e| anyhow::anyhow!(e))?;
    let mut clicker = SmallRng::seed_from_u64(seed.wrapping_add(1));

    let (mut player_moves, mut opponent_moves, mut turns, mut forfeits) = (0u64, 0u64, 0u64, 0u64);
    for _ in 0..ticks {
        let click = pick_uniform(&mut clicker, &game.legal_destinations(Side::Player));
        match game.tick(click) {
            TickOutcome::Moved(mv) if mv.side == Side::Player => player_moves += 1,
            TickOutcome::Moved(_) => opponent_moves += 1,
            TickOutcome::TurnPassed { .. } => turns += 1,
            TickOutcome::Forfeited { .. } => forfeits += 1,
            TickOutcome::Idle => {}
        }
    }

    let result = json!({
        "seed": seed,
        "snapshot": game.snapshot(),
        "player_moves": player_moves,
        "opponent_moves": opponent_moves,
        "turns_passed": turns,
        "forfeits": forfeits,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
