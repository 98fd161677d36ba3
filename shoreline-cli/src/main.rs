//! Shoreline CLI - Command-line interface
//!
//! This binary wires the shoreline library to the filesystem: it computes
//! viewport bounding boxes and turns rendered map images into water-edge
//! overlay PNGs. Fetching imagery from a map provider stays with the user.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "shoreline",
    version,
    about = "Stylized water-edge overlays from web-map imagery"
)]
struct Cli {
    /// Path to an alternate config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Bounds(commands::bounds::BoundsArgs),
    Extract(commands::extract::ExtractArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = commands::common::load_config(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Command::Bounds(args) => commands::bounds::run(args, &config),
            Command::Extract(args) => commands::extract::run(args, &config),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
