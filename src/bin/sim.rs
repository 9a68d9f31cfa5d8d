use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{init_logging, AiPlayer, Session};

/// Computer-vs-computer rounds from a fixed seed, summarised as JSON.
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <rounds>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let rounds: u32 = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = Session::new();
    let mut ai_x = AiPlayer::new();
    let mut ai_o = AiPlayer::new();

    for _ in 0..rounds {
        session
            .run_round(&mut ai_x, &mut ai_o, &mut rng)
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    let scores = session.scores();
    let result = json!({
        "seed": seed,
        "rounds": rounds,
        "x_wins": scores.x_wins,
        "o_wins": scores.o_wins,
        "draws": scores.draws,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
