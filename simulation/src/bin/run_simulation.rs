use std::{error::Error, path::PathBuf};

use clap::Parser;
use simulation::{run_trials, PlayerConfig, SimulationConfig};

#[derive(Parser, Debug)]
struct Params {
    /// YAML config file; falls back to $OCTOPUS_CONFIG
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seat as name:strategy, e.g. alice:always, bob:random:0.3. Repeat per player.
    #[arg(short, long)]
    player: Vec<PlayerConfig>,

    #[arg(short, long)]
    games: Option<usize>,

    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long)]
    max_turns: Option<usize>,

    #[arg(long)]
    delay_ms: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Params::parse();
    log::info!("args: {args:?}");

    let mut config = SimulationConfig::from_cli_or_env_or_default(args.config.as_deref())?;
    if !args.player.is_empty() {
        config.players = args.player;
    }
    if let Some(games) = args.games {
        config.games = games;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.max_turns.is_some() {
        config.max_turns = args.max_turns;
    }
    if args.delay_ms.is_some() {
        config.delay_ms = args.delay_ms;
    }
    config.validate()?;
    log::info!("config: {config:?}");

    let summary = run_trials(&config)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
