use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use arena_autopilot::runner::run_match;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "arena-autopilot")]
#[command(about = "Per-tick decision engine speaking the arena referee protocol")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a live match on stdin/stdout (the default)
    Play,
    /// Re-run a recorded match transcript from a file
    Replay {
        /// Transcript file: team-side line followed by tick snapshots
        #[arg(long)]
        input: PathBuf,
        /// Write the end-of-match stats as JSON
        #[arg(long)]
        stats: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Diagnostics go to stderr only; stdout belongs to the referee.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let stats = run_match(io::stdin().lock(), io::stdout().lock())?;
            tracing::info!(
                ticks = stats.ticks,
                throws = stats.throws,
                freezes = stats.freezes,
                moves = stats.moves,
                energy_spent = stats.energy_spent,
                "match ended"
            );
        }
        Commands::Replay { input, stats } => {
            let file = File::open(&input)
                .with_context(|| format!("failed opening transcript {}", input.display()))?;
            let report = run_match(BufReader::new(file), io::stdout().lock())?;

            eprintln!("input={}", input.display());
            eprintln!("ticks={}", report.ticks);
            eprintln!("throws={}", report.throws);
            eprintln!("freezes={}", report.freezes);
            eprintln!("moves={}", report.moves);
            eprintln!("energy_spent={}", report.energy_spent);
            eprintln!("final_energy={}", report.final_energy);

            if let Some(path) = stats {
                let encoded = serde_json::to_vec_pretty(&report)?;
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&path, encoded)
                    .with_context(|| format!("failed writing {}", path.display()))?;
                eprintln!("stats={}", path.display());
            }
        }
    }

    Ok(())
}
