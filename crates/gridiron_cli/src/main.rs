//! Gridiron CLI
//!
//! One-shot coordinate and play resolution, plus an interactive `track`
//! loop that plays the part of the sideline UI.

mod operator;
mod track;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gridiron_core::{
    parse_coordinate, resolve_play, resolve_play_json, Direction, DownState, PlaySession,
    TrackerConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridiron", version)]
#[command(about = "Track football plays by yard line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a yard-line label into a field coordinate (0-100)
    Coord {
        /// Yard-line label (LG, L1..L49, 50, R49..R1, RG)
        label: String,

        /// Offensive direction (ltr or rtl)
        #[arg(long, default_value = "ltr")]
        direction: Direction,
    },

    /// Resolve a single play and print the result banner
    Resolve {
        /// Start yard-line label
        start: String,

        /// End yard-line label
        end: String,

        #[arg(long, default_value_t = 1)]
        down: u8,

        #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
        distance: i32,

        #[arg(long, default_value = "ltr")]
        direction: Direction,

        /// Print the JSON API response instead of the banner
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Track a drive interactively from stdin
    Track {
        /// Starting direction (overrides the config)
        #[arg(long)]
        direction: Option<Direction>,

        /// Tracker config JSON (defaults to $GRIDIRON_CONFIG_PATH)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the play log here on exit (.csv for CSV, JSON otherwise)
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Coord { label, direction } => {
            let coordinate = parse_coordinate(&label, direction)
                .with_context(|| format!("Cannot translate '{label}'"))?;
            println!("{coordinate}");
        }

        Commands::Resolve { start, end, down, distance, direction, json } => {
            if json {
                let request = serde_json::json!({
                    "schema_version": gridiron_core::SCHEMA_VERSION,
                    "start": start,
                    "end": end,
                    "down": down,
                    "distance": distance,
                    "direction": direction,
                });
                let response =
                    resolve_play_json(&request.to_string()).map_err(anyhow::Error::msg)?;
                println!("{response}");
            } else {
                let start_coord = parse_coordinate(&start, direction)
                    .with_context(|| format!("Bad start line '{start}'"))?;
                let end_coord = parse_coordinate(&end, direction)
                    .with_context(|| format!("Bad end line '{end}'"))?;
                let outcome = resolve_play(start_coord, end_coord, DownState::new(down, distance));
                println!("{}", outcome.banner(direction));
            }
        }

        Commands::Track { direction, config, export } => {
            let mut config = match config {
                Some(path) => TrackerConfig::load(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => TrackerConfig::from_env().context("Failed to load config from env")?,
            };
            if let Some(direction) = direction {
                config.default_direction = direction;
            }

            tracing::debug!(?config, "starting track session");
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let session = track::run(PlaySession::new(config), stdin.lock(), &mut stdout)?;

            if let Some(path) = export {
                session
                    .log()
                    .export_to_path(&path)
                    .with_context(|| format!("Failed to export log to {}", path.display()))?;
                println!("Play log written to {}", path.display());
            }
        }
    }

    Ok(())
}
