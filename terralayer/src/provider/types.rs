//! Provider types and traits

use crate::coord::TileCoord;
use std::fmt;
use std::future::Future;

/// Errors that can occur during provider operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// HTTP request failed
    Http(String),
    /// Zoom level not supported by this provider
    UnsupportedZoom(u8),
    /// Tile coordinates outside the grid at the requested zoom
    InvalidCoordinate { row: u32, col: u32, zoom: u8 },
    /// Response data from the provider could not be parsed
    InvalidResponse(String),
    /// Provider-specific error
    ProviderSpecific(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Http(msg) => write!(f, "HTTP error: {}", msg),
            ProviderError::UnsupportedZoom(zoom) => {
                write!(f, "Zoom level {} not supported by provider", zoom)
            }
            ProviderError::InvalidCoordinate { row, col, zoom } => {
                write!(
                    f,
                    "Tile ({}, {}) outside the grid at zoom {}",
                    row, col, zoom
                )
            }
            ProviderError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            ProviderError::ProviderSpecific(msg) => write!(f, "Provider error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Trait for tiled imagery providers.
///
/// Implementors resolve a tile address to raw encoded image bytes from
/// some source (Bing Maps, an XYZ tile server, etc.) using non-blocking
/// I/O. Decoding is left to the caller so providers stay transport-only.
pub trait ImageryProvider: Send + Sync {
    /// Fetches the encoded image for one tile.
    ///
    /// # Arguments
    ///
    /// * `tile` - The tile address to fetch
    ///
    /// # Returns
    ///
    /// Raw image data (typically JPEG or PNG) or an error. No retry is
    /// attempted; a single transport failure surfaces directly.
    fn fetch_tile(
        &self,
        tile: &TileCoord,
    ) -> impl Future<Output = Result<Vec<u8>, ProviderError>> + Send;

    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;

    /// Returns the minimum supported zoom level.
    fn min_zoom(&self) -> u8;

    /// Returns the maximum supported zoom level.
    fn max_zoom(&self) -> u8;

    /// Checks if this provider supports the given zoom level.
    fn supports_zoom(&self, zoom: u8) -> bool {
        zoom >= self.min_zoom() && zoom <= self.max_zoom()
    }

    /// Imagery attribution text for display alongside rendered tiles.
    fn attribution(&self) -> &str {
        ""
    }
}

/// Validates that a tile address is inside the provider's grid and zoom window.
///
/// Shared by provider implementations before building a request URL.
pub(crate) fn validate_tile<P: ImageryProvider>(
    provider: &P,
    tile: &TileCoord,
) -> Result<(), ProviderError> {
    if !provider.supports_zoom(tile.zoom) {
        return Err(ProviderError::UnsupportedZoom(tile.zoom));
    }
    let extent = 1u64 << tile.zoom;
    if u64::from(tile.row) >= extent || u64::from(tile.col) >= extent {
        return Err(ProviderError::InvalidCoordinate {
            row: tile.row,
            col: tile.col,
            zoom: tile.zoom,
        });
    }
    Ok(())
}
