//! Quadkey inspection command.

use clap::Args;
use terralayer::coord::TileCoord;

use crate::error::CliError;

/// Arguments for the `quadkey` subcommand.
#[derive(Debug, Args)]
pub struct QuadkeyArgs {
    /// Tile row (y coordinate)
    #[arg(long)]
    pub row: u32,

    /// Tile column (x coordinate)
    #[arg(long)]
    pub col: u32,

    /// Zoom level
    #[arg(short, long)]
    pub zoom: u8,
}

/// Run the quadkey subcommand.
pub fn run(args: QuadkeyArgs) -> Result<(), CliError> {
    let tile = TileCoord::new(args.row, args.col, args.zoom)?;
    println!("{}", tile.quadkey());
    Ok(())
}
