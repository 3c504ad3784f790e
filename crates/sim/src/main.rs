//! Encounter simulator.
//!
//! Loads combat tunables and attack profiles, stages a small skirmish, and
//! runs it to completion, logging every decision.
//!
//! ```bash
//! RUST_LOG=runtime=debug cargo run -p sim -- --seed 42 --rounds 30
//! ```

mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use combat_content::{ConfigLoader, ProfileLoader};
use runtime::{Arena, RuntimeConfig};

/// Run a sample encounter
#[derive(Parser)]
#[command(name = "sim")]
#[command(about = "Simulate a combat encounter", long_about = None)]
#[command(version)]
struct Cli {
    /// Combat config (TOML). Defaults to the embedded config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Attack profiles (RON). Defaults to the embedded profiles.
    #[arg(long)]
    profiles: Option<PathBuf>,

    /// Base RNG seed (overrides COMBAT_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Round limit (overrides COMBAT_MAX_ROUNDS)
    #[arg(long)]
    rounds: Option<u64>,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let combat = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::embedded()?,
    };
    let profiles = match &cli.profiles {
        Some(path) => ProfileLoader::load(path)?,
        None => ProfileLoader::embedded()?,
    };

    let mut config = RuntimeConfig::from_env();
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(rounds) = cli.rounds {
        config.max_rounds = rounds.max(1);
    }

    tracing::info!(
        seed = config.seed,
        max_rounds = config.max_rounds,
        profiles = ?profiles.names(),
        "starting encounter"
    );

    let staged = scenario::skirmish(&combat, &profiles).context("Failed to stage encounter")?;
    let mut arena = Arena::new(staged.encounter, config);
    for (actor, tree) in staged.drivers {
        arena.assign(actor, tree)?;
    }
    arena.engage();

    let outcome = arena.run()?;
    match outcome.winner {
        Some(faction) => println!("{faction} wins after {} rounds", outcome.rounds),
        None => println!("no winner after {} rounds", outcome.rounds),
    }

    for id in arena.encounter().world.ids() {
        if let Some(actor) = arena.encounter().world.actor(id) {
            println!(
                "  {:<8} {id}  hp {:>5.1}/{:<5.1}",
                actor.name, actor.health, actor.max_health
            );
        }
    }

    Ok(())
}
