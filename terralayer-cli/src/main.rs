//! Terralayer CLI - Command-line interface
//!
//! This binary provides a command-line interface to the terralayer library.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use commands::{config, fetch, metadata, quadkey};

#[derive(Debug, Parser)]
#[command(
    name = "terralayer",
    version = terralayer::VERSION,
    about = "Fetch map imagery tiles for terrain rendering"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch a single imagery tile and write it to disk
    Fetch(fetch::FetchArgs),
    /// Print the quadkey for a tile address
    Quadkey(quadkey::QuadkeyArgs),
    /// Fetch and print the provider's imagery metadata document
    Metadata(metadata::MetadataArgs),
    /// Inspect the configuration file
    Config {
        #[command(subcommand)]
        action: config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Fetch(args) => fetch::run(args),
        Command::Quadkey(args) => quadkey::run(args),
        Command::Metadata(args) => metadata::run(args),
        Command::Config { action } => config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
