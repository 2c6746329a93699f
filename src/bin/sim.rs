#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use naval_battle::{cli::SimReport, prelude::*};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging(log::LevelFilter::Warn);

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

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
