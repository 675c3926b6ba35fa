//! Unified sprite-sheet generator
//!
//! Usage:
//!   cargo run --bin generate frames          # Composite character frames into a sheet + atlas
//!   cargo run --bin generate grid            # Write the atlas for an existing grid sheet
//!   cargo run --bin generate all             # Both of the above
//!   cargo run --bin generate inspect <json>  # Summarize an atlas file
//!   cargo run --bin generate --help          # Show help

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use isoatlas::constants::{FRAME_ATLAS_FILE, GRID_ATLAS_FILE};
use isoatlas::generate::{frames, grid, inspect};
use isoatlas::{FrameAtlasConfig, GridAtlasConfig, config};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "generate", version, about = "Sprite-sheet and atlas generator")]
struct Cli {
    /// Log every frame as it is placed
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite walk-cycle frames into <output>/<character>.png + .json
    Frames(GenerateArgs),
    /// Write the atlas for a fixed-grid sheet to <output>/<name>.json
    Grid(GenerateArgs),
    /// Run `frames` then `grid` with their default config files
    All {
        /// Override the output directory of both generators
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Load an atlas JSON, check it, and print a summary
    Inspect { path: PathBuf },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Config file (defaults to the generator's file under config/)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the configured output directory
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.cmd {
        Command::Frames(args) => {
            println!("=== Frame Atlas Generator ===\n");
            run_frames(args.config.as_deref(), args.output_dir)?;
        }
        Command::Grid(args) => {
            println!("=== Grid Atlas Generator ===\n");
            run_grid(args.config.as_deref(), args.output_dir)?;
        }
        Command::All { output_dir } => {
            println!("=== Frame Atlas Generator ===\n");
            run_frames(None, output_dir.clone())?;
            println!("\n=== Grid Atlas Generator ===\n");
            run_grid(None, output_dir)?;
        }
        Command::Inspect { path } => {
            let summary = inspect::run(&path)
                .with_context(|| format!("Failed to inspect {}", path.display()))?;
            println!("{}\n{}", path.display(), summary);
        }
    }
    Ok(())
}

fn run_frames(config_path: Option<&Path>, output_dir: Option<PathBuf>) -> Result<()> {
    let path = config_path.unwrap_or(Path::new(FRAME_ATLAS_FILE));
    let mut config: FrameAtlasConfig = load_config(path, config_path.is_some())?;
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }

    println!("  Character: {}", config.character);
    println!(
        "  Frames: {} of {} per direction (step {})",
        config.frames_per_direction(),
        config.total_frames,
        config.frame_step
    );
    println!("  Directions: {}", config.directions.len());

    let paths = frames::run(&config)
        .with_context(|| format!("Failed to build sheet for {}", config.character))?;
    println!("\n  Created: {}", paths.image.display());
    println!("  Created: {}", paths.json.display());
    Ok(())
}

fn run_grid(config_path: Option<&Path>, output_dir: Option<PathBuf>) -> Result<()> {
    let path = config_path.unwrap_or(Path::new(GRID_ATLAS_FILE));
    let mut config: GridAtlasConfig = load_config(path, config_path.is_some())?;
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }

    println!("  Frame: {}x{}", config.width, config.height);
    println!(
        "  Frames: {} directions x {}",
        config.directions.len(),
        config.per_direction
    );

    let path = grid::run(&config).context("Failed to write grid atlas")?;
    println!("\n  Created: {}", path.display());
    Ok(())
}

/// An explicitly requested config file must exist; the default one may be absent.
fn load_config<T: config::ConfigFile>(path: &Path, explicit: bool) -> Result<T> {
    let loaded = if explicit {
        config::load(path)
    } else {
        config::load_or_default(path)
    };
    loaded.with_context(|| format!("Failed to load config {}", path.display()))
}
