//! HEX2048 CLI - Command-line interface
//!
//! Commands:
//! - play: interactive game in the terminal
//! - simulate: seeded random playouts
//! - clear: drop the saved game

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use hex2048_store::{JsonFileStore, StateStore};

mod input;
mod play;
mod render;
mod simulate;

#[derive(Parser)]
#[command(name = "hex2048")]
#[command(about = "Sliding-tile 2048 on a hexagonal board")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal
    Play(play::PlayArgs),
    /// Run seeded random playouts
    Simulate(simulate::SimulateArgs),
    /// Drop the saved game (the best score survives)
    Clear {
        /// Save directory
        #[arg(long, default_value = ".hex2048")]
        save_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Simulate(args) => simulate::run(args),
        Commands::Clear { save_dir } => {
            JsonFileStore::new(save_dir).clear()?;
            println!("Saved game cleared");
            Ok(())
        }
    }
}
