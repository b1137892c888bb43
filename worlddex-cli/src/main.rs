mod paths;
mod present;
mod replay;

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;
use worlddex_lib::PromptConfig;
use worlddex_lib::error::{ConfigError, RarityError};
use worlddex_lib::rarity::sample_rarity_tier;

use crate::replay::{ReplayError, Session};

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Replay(#[from] ReplayError),
    #[error(transparent)]
    Rarity(#[from] RarityError),
}

/// Drive the WorldDex capture-screen core from scripts.
#[derive(Debug, Parser)]
#[command(name = "worlddex", version, about)]
struct Cli {
    /// Log level written to the log file.
    #[arg(long, global = true, default_value = "debug")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a JSON-lines session script through the modal queue.
    Replay {
        /// Script to replay.
        script: PathBuf,
        /// JSON prompt config; defaults apply for missing fields.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Navigation location the session starts at.
        #[arg(long, default_value = "/camera")]
        start: String,
    },
    /// Sample a rarity tier for a 1-100 score.
    SampleRarity {
        score: f64,
        /// Seed for a reproducible sample.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_logging(level: LevelFilter) {
    paths::rotate_logs();
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from("worlddex.log"));
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let result = File::create(&path)
        .map_err(|e| e.to_string())
        .and_then(|file| WriteLogger::init(level, Config::default(), file).map_err(|e| e.to_string()));
    if let Err(e) = result {
        eprintln!("warning: logging disabled ({}): {}", path.display(), e);
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Replay {
            script,
            config,
            start,
        } => {
            let config = match config {
                Some(path) => PromptConfig::from_file(path)?,
                None => PromptConfig::default(),
            };
            let file = File::open(&script).map_err(|source| CliError::Open {
                path: script.clone(),
                source,
            })?;

            log::info!("Replaying {}", script.display());
            let mut session = Session::new(start, config);
            session.replay(BufReader::new(file), &mut io::stdout().lock())?;
            log::info!("Final camera phase: {:?}", session.camera().phase());
        }
        Command::SampleRarity { score, seed } => {
            let tier = match seed {
                Some(seed) => sample_rarity_tier(score, &mut StdRng::seed_from_u64(seed))?,
                None => sample_rarity_tier(score, &mut rand::rng())?,
            };
            println!("{tier}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
