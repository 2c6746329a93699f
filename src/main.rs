#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use naval_battle::{
    cli::{coord_to_string, parse_coord, print_session, SimReport},
    init_logging, AiState, GameError, GameSession, GameStatus, HitResult,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Log debug output (AI decisions, ship placement) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Show the computer's ships")]
        reveal: bool,
    },
    /// Let an autopilot play the human side and print a JSON summary.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            eprintln!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    match cli.command {
        Commands::Play { seed, reveal } => {
            let mut rng = make_rng(seed);
            run_interactive(&mut rng, reveal)
        }
        Commands::Sim { seed } => {
            let mut rng = make_rng(seed);
            let mut session = GameSession::new(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let mut autopilot = AiState::new();
            session
                .autoplay(&mut autopilot, &mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            let report = SimReport::from_session(&session)
                .ok_or_else(|| anyhow::anyhow!("simulation stopped mid-game"))?;
            println!("{}", serde_json::to_string(&report)?);
            Ok(())
        }
    }
}

#[cfg(feature = "std")]
fn run_interactive(rng: &mut SmallRng, reveal: bool) -> anyhow::Result<()> {
    let mut session = GameSession::new(rng).map_err(|e| anyhow::anyhow!(e))?;
    println!("Welcome aboard, admiral! Choose your targets on the computer board.");
    println!("Enter a target like B7, 'new' for a new game, or 'q' to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_session(&session, reveal || session.status() != GameStatus::InProgress);
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let input = line.trim();

        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            return Ok(());
        }
        if input.eq_ignore_ascii_case("new") {
            session.restart(rng).map_err(|e| anyhow::anyhow!(e))?;
            println!("New game started.");
            continue;
        }
        if session.status() != GameStatus::InProgress {
            println!("The game is over. Type 'new' or 'q'.");
            continue;
        }

        let grid = session.enemy_grid();
        let target = match parse_coord(input, grid.width(), grid.height()) {
            Ok(c) => c,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };

        match session.play_turn(target, rng) {
            Ok(outcome) => {
                println!("You fire at {}: {}", coord_to_string(target), describe(outcome.player_shot));
                if let Some((coord, result)) = outcome.ai_shot {
                    println!("Computer fires at {}: {}", coord_to_string(coord), describe(result));
                }
                match outcome.status {
                    GameStatus::Won => println!("\nCongratulations, admiral! You have won the battle!"),
                    GameStatus::Lost => println!("\nSadly, you have lost the battle..."),
                    GameStatus::InProgress => {}
                }
            }
            Err(GameError::Board(e)) => println!("{}", e),
            Err(e) => return Err(anyhow::anyhow!(e)),
        }
    }
}

#[cfg(feature = "std")]
fn describe(result: HitResult) -> &'static str {
    match result {
        HitResult::Miss => "miss",
        HitResult::Damage => "hit!",
    }
}
