#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    init_logging, AiPlayer, CliPlayer, GameStatus, Mark, MoveError, MoveOutcome, Player, Session,
    DEFAULT_AI_DELAY_MS,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum ModeArg {
    Single,
    Multi,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum RoleArg {
    X,
    O,
}

#[cfg(feature = "std")]
impl From<RoleArg> for Mark {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::X => Mark::X,
            RoleArg::O => Mark::O,
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play on this terminal, against the computer or a second person.
    Play {
        #[arg(long, value_enum, default_value_t = ModeArg::Single)]
        mode: ModeArg,
        #[arg(long, value_enum, default_value_t = RoleArg::X, help = "Mark you play in single-player mode (X moves first)")]
        role: RoleArg,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_AI_DELAY_MS, help = "Pause before each computer move")]
        ai_delay_ms: u64,
    },
    /// Watch the computer play against itself.
    Demo {
        #[arg(long, default_value_t = 3)]
        rounds: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 500, help = "Pause between rounds")]
        delay_ms: u64,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            mode,
            role,
            seed,
            ai_delay_ms,
        } => {
            let session = match mode {
                ModeArg::Single => {
                    println!("Single player: you are {}", Mark::from(role));
                    Session::single_player(role.into())
                }
                ModeArg::Multi => {
                    println!("Multiplayer: X moves first");
                    Session::new()
                }
            };
            let rng = make_rng(seed);
            run_cli(session, rng, Duration::from_millis(ai_delay_ms)).await?;
        }
        Commands::Demo {
            rounds,
            seed,
            delay_ms,
        } => {
            let mut rng = make_rng(seed);
            let mut session = Session::new();
            let mut ai_x = AiPlayer::new();
            let mut ai_o = AiPlayer::new();
            for round in 1..=rounds {
                let status = session
                    .run_round(&mut ai_x, &mut ai_o, &mut rng)
                    .map_err(|e| anyhow::anyhow!(e))?;
                println!("\nRound {}:\n{}", round, session.board());
                match status {
                    GameStatus::Won(mark) => println!("Player {} wins!", mark),
                    GameStatus::Draw => println!("It's a draw!"),
                    GameStatus::InProgress => {}
                }
                println!("{}", session.score_text());
                if round < rounds {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn run_cli(mut session: Session, mut rng: SmallRng, ai_delay: Duration) -> anyhow::Result<()> {
    let mut human = CliPlayer::new();
    loop {
        println!("\n{}", session.board());
        println!("{}    ({})", session.turn_text(), session.score_text());

        let outcome = if session.is_ai_turn() {
            println!("Computer is thinking...");
            tokio::time::sleep(ai_delay).await;
            session.ai_move(&mut rng).map_err(|e| anyhow::anyhow!(e))?
        } else {
            let mark = session.current_player();
            let (r, c) = match human.select_move(&mut rng, session.board(), mark) {
                Ok(coord) => coord,
                Err(MoveError::Abandoned) => break,
                Err(e) => return Err(anyhow::anyhow!(e)),
            };
            match session.submit_move(r, c) {
                Ok(outcome) => outcome,
                Err(e @ (MoveError::Occupied { .. } | MoveError::OutOfBounds { .. })) => {
                    println!("Illegal move: {}", e);
                    continue;
                }
                Err(e) => return Err(anyhow::anyhow!(e)),
            }
        };

        match outcome {
            MoveOutcome::Won(mark) => {
                println!("\n{}", session.board());
                println!("Game over: Player {} wins!", mark);
            }
            MoveOutcome::Draw => {
                println!("\n{}", session.board());
                println!("Game over: It's a draw!");
            }
            MoveOutcome::Continue | MoveOutcome::AiToMove => continue,
        }
        println!("{}", session.score_text());
        session.begin_next_round();
    }
    println!("\nFinal score: {}", session.score_text());
    Ok(())
}
