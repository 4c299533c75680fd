//! Tennis scoring CLI
//!
//! `play` reads one point winner per line from stdin and prints the score
//! after each point. `simulate` plays seeded random rallies.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use tennis_core::{simulate_points, Config, GameRng, ScoringEngine};

#[derive(Parser)]
#[command(name = "tennis")]
#[command(about = "Score a tennis game point by point", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score points read from stdin, one player name per line
    Play {
        /// First player (listed first in the score)
        player1: String,

        /// Second player
        player2: String,

        /// Refuse two players with the same name
        #[arg(long)]
        strict_names: bool,
    },

    /// Play random rallies between two players
    Simulate {
        player1: String,

        player2: String,

        /// Number of points to play
        #[arg(long, default_value_t = 24)]
        points: usize,

        /// RNG seed
        #[arg(long, default_value_t = 12345)]
        seed: u64,

        /// Chance that player1 wins a rally (0.0 - 1.0)
        #[arg(long, default_value_t = 0.5)]
        chance: f64,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play {
            player1,
            player2,
            strict_names,
        } => {
            let config = if strict_names {
                Config::strict()
            } else {
                Config::new()
            };
            let mut engine = ScoringEngine::with_config(&player1, &player2, config)
                .context("Failed to start game")?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            play(&mut engine, stdin.lock(), stdout.lock())?;
        }
        Commands::Simulate {
            player1,
            player2,
            points,
            seed,
            chance,
        } => {
            info!("Simulating {points} points, seed {seed}, chance {chance}");
            let mut engine = ScoringEngine::new(&player1, &player2);
            let mut rng = GameRng::new(seed);
            let summaries = simulate_points(&mut engine, &mut rng, points, chance)
                .context("Simulation failed")?;
            let mut out = io::stdout().lock();
            for summary in summaries {
                writeln!(out, "{summary}")?;
            }
        }
    }

    Ok(())
}

/// Score every non-blank line of `input` and write one result line per point
fn play<R: BufRead, W: Write>(engine: &mut ScoringEngine, input: R, mut output: W) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read point winner")?;
        let name = line.trim();
        if name.is_empty() {
            continue;
        }

        match engine.award_point(name) {
            Ok(summary) => writeln!(output, "{summary}")?,
            Err(e) => writeln!(output, "error: {e}")?,
        }
    }
    output.flush()?;
    Ok(())
}
