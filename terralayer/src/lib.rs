//! Terralayer - tiled map imagery for quad-tree terrain renderers
//!
//! This library fetches raster tiles from imagery providers (Bing Maps,
//! XYZ tile servers), addressed by quad-tree tile coordinates, and hands
//! callers decoded images through cancelable fetch handles. Elevation
//! loading sits behind the [`terrain::HeightSource`] capability so
//! renderers can displace tile meshes from any dataset.
//!
//! # Quick start
//!
//! ```ignore
//! use terralayer::config::ConfigFile;
//! use terralayer::coord::TileCoord;
//! use terralayer::fetch::{FetchOutcome, TileFetcher};
//! use terralayer::provider::{AsyncReqwestClient, ProviderFactory};
//!
//! let config = ConfigFile::load()?;
//! let client = AsyncReqwestClient::from_config(&config.to_fetch_config())?;
//! let (provider, name, _max_zoom) = ProviderFactory::new(client).create(&config.to_provider_config()?);
//!
//! let fetcher = TileFetcher::new(provider);
//! let tile = TileCoord::from_lat_lon(40.7128, -74.0060, 16)?;
//! match fetcher.fetch(tile).outcome().await {
//!     FetchOutcome::Resolved(image) => { /* composite into the terrain mesh */ }
//!     FetchOutcome::Failed(e) => eprintln!("{name}: {e}"),
//!     FetchOutcome::Canceled => {}
//! }
//! ```

pub mod config;
pub mod coord;
pub mod fetch;
pub mod logging;
pub mod provider;
pub mod terrain;
pub mod tile;

/// Version of the terralayer library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
