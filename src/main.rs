//! Terminal entry point.
mod console;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use circle_dice::core::GameConfig;
use circle_dice::decision::{DecisionSource, NeighborPolicy};
use circle_dice::game::GameController;
use console::{ConsoleDecisions, ConsoleObserver, PresetCounts};

/// Dice elimination around a table: sixes score, ones go to a neighbor.
#[derive(Debug, Parser)]
#[command(name = "circle-dice", version, about)]
struct Args {
    /// Number of players (asked interactively when omitted).
    #[arg(short, long)]
    players: Option<usize>,

    /// Dice each player starts with (asked interactively when omitted).
    #[arg(short, long)]
    dice: Option<usize>,

    /// RNG seed, to replay a game.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Resolve every transfer choice automatically instead of asking.
    #[arg(long, value_enum)]
    auto: Option<Preference>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preference {
    Next,
    Previous,
}

impl From<Preference> for NeighborPolicy {
    fn from(preference: Preference) -> Self {
        match preference {
            Preference::Next => NeighborPolicy::PreferNext,
            Preference::Previous => NeighborPolicy::PreferPrevious,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = GameConfig::request(&mut PresetCounts {
        players: args.players,
        dice: args.dice,
        fallback: ConsoleDecisions::stdio(),
    })
    .context("failed to configure the game")?;
    config.seed = args.seed;

    match args.auto {
        Some(preference) => play(config, NeighborPolicy::from(preference)),
        None => play(config, ConsoleDecisions::stdio()),
    }
}

fn play<D: DecisionSource>(config: GameConfig, decisions: D) -> Result<()> {
    let mut game = GameController::new(config, decisions, ConsoleObserver)
        .context("failed to set up the table")?;
    game.run().context("game aborted")?;
    Ok(())
}
