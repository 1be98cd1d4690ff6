//! Chase CLI
//!
//! Plays a run chase in the terminal, one ball at a time.

mod render;
mod strategy;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chase_core::{ChaseSession, EngineConfig, Fixture, MatchSetup, MatchStatus};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use strategy::Strategy;

#[derive(Parser)]
#[command(name = "chase")]
#[command(about = "Single-innings cricket run-chase simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a chase
    Play {
        /// JSON file with `batting` and `bowling` player lists (demo squads if omitted)
        #[arg(long)]
        rosters: Option<PathBuf>,

        /// Engine config JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, default_value_t = 20)]
        overs: u32,

        /// RNG seed; random if omitted
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, value_enum, default_value_t = Strategy::Interactive)]
        strategy: Strategy,

        /// Play a super over when the chase is tied
        #[arg(long, default_value = "false")]
        super_over_on_tie: bool,

        /// Print the final state as JSON instead of a running scorecard
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play { rosters, config, overs, seed, strategy, super_over_on_tie, json } => {
            let fixture = match rosters {
                Some(path) => Fixture::load(&path)
                    .with_context(|| format!("Failed to load rosters from {}", path.display()))?,
                None => Fixture::demo(),
            };
            let config = match config {
                Some(path) => EngineConfig::load(&path)
                    .with_context(|| format!("Failed to load engine config from {}", path.display()))?,
                None => EngineConfig::default(),
            };
            let seed = seed.unwrap_or_else(rand::random);
            info!(seed, overs, ?strategy, "starting chase");

            let options = PlayOptions { overs, seed, strategy, super_over_on_tie, json };
            play(fixture, config, options)?;
        }
    }

    Ok(())
}

struct PlayOptions {
    overs: u32,
    seed: u64,
    strategy: Strategy,
    super_over_on_tie: bool,
    json: bool,
}

fn play(fixture: Fixture, config: EngineConfig, options: PlayOptions) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    // separate stream so the strategy never shifts the engine's draws
    let mut strategy_rng = ChaCha8Rng::seed_from_u64(options.seed.wrapping_add(1));

    let mut session = ChaseSession::start_with(
        fixture.batting,
        fixture.bowling,
        options.overs,
        config,
        MatchSetup::default(),
        &mut rng,
    )
    .context("Failed to start match")?;

    loop {
        if !options.json {
            render::print_header(&session);
        }
        if !run_innings(&mut session, options.strategy, options.json, &mut rng, &mut strategy_rng)? {
            break;
        }
        let tied = session.status() == MatchStatus::Tied;
        if !(tied && options.super_over_on_tie) {
            break;
        }
        if options.json {
            println!("{}", serde_json::to_string(session.state())?);
        } else {
            render::print_result(&session);
        }
        session.start_super_over(&mut rng).context("Failed to start super over")?;
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(session.state())?);
    } else {
        render::print_result(&session);
    }
    Ok(())
}

/// Plays until the match ends. Returns false if the user quit.
fn run_innings(
    session: &mut ChaseSession,
    strategy: Strategy,
    quiet: bool,
    rng: &mut ChaCha8Rng,
    strategy_rng: &mut ChaCha8Rng,
) -> Result<bool> {
    while !session.is_over() {
        let Some(action) = strategy.choose(session.state(), strategy_rng)? else {
            return Ok(false);
        };
        session.play(action, rng)?;
        if !quiet {
            render::print_ball(session);
        }
    }
    Ok(true)
}
