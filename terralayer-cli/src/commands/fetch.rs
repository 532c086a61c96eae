//! Tile fetch command.

use clap::Args;
use std::path::PathBuf;
use terralayer::config::ConfigFile;
use terralayer::coord::TileCoord;
use terralayer::fetch::{FetchOutcome, TileFetcher};
use terralayer::logging::{default_log_dir, default_log_file, init_logging};
use terralayer::provider::{AsyncReqwestClient, ProviderFactory};
use tracing::info;

use crate::error::CliError;

/// Arguments for the `fetch` subcommand.
///
/// The tile is addressed either geographically (`--lat`/`--lon`) or
/// directly (`--row`/`--col`), always with a zoom level.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true, requires = "lon", conflicts_with_all = ["row", "col"])]
    pub lat: Option<f64>,

    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    pub lon: Option<f64>,

    /// Tile row (y coordinate)
    #[arg(long, requires = "col")]
    pub row: Option<u32>,

    /// Tile column (x coordinate)
    #[arg(long, requires = "row")]
    pub col: Option<u32>,

    /// Zoom level
    #[arg(short, long)]
    pub zoom: u8,

    /// Output image path
    #[arg(short, long, default_value = "tile.png")]
    pub out: PathBuf,
}

/// Run the fetch subcommand.
pub fn run(args: FetchArgs) -> Result<(), CliError> {
    let _guard = init_logging(default_log_dir(), default_log_file())?;

    let config = ConfigFile::load()?;
    let tile = resolve_tile(&args)?;

    let runtime =
        tokio::runtime::Runtime::new().map_err(|e| CliError::Runtime(e.to_string()))?;

    runtime.block_on(async {
        let client = AsyncReqwestClient::from_config(&config.to_fetch_config())?;
        let (provider, name, _max_zoom) =
            ProviderFactory::new(client).create(&config.to_provider_config()?);

        info!(provider = %name, tile = %tile, "fetching tile");
        let fetcher = TileFetcher::new(provider);
        let handle = fetcher.fetch(tile);

        // Ctrl-C cancels the in-flight fetch
        let token = handle.cancellation_token().clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        });

        match handle.outcome().await {
            FetchOutcome::Resolved(image) => {
                image
                    .as_image()
                    .save(&args.out)
                    .map_err(|e| CliError::Image(e.to_string()))?;
                println!(
                    "Saved {} tile {} ({}x{}) to {}",
                    name,
                    tile,
                    image.width(),
                    image.height(),
                    args.out.display()
                );
                Ok(())
            }
            FetchOutcome::Failed(e) => Err(CliError::Fetch(e.to_string())),
            FetchOutcome::Canceled => {
                println!("Fetch canceled");
                Ok(())
            }
        }
    })
}

/// Resolves the tile address from the argument combination.
fn resolve_tile(args: &FetchArgs) -> Result<TileCoord, CliError> {
    match (args.lat, args.lon, args.row, args.col) {
        (Some(lat), Some(lon), _, _) => Ok(TileCoord::from_lat_lon(lat, lon, args.zoom)?),
        (_, _, Some(row), Some(col)) => Ok(TileCoord::new(row, col, args.zoom)?),
        _ => Err(CliError::Usage(
            "provide either --lat/--lon or --row/--col".to_string(),
        )),
    }
}
