//! Tile fetcher spawning cancelable fetch tasks.

use super::handle::{FetchError, FetchHandle, FetchOutcome};
use crate::coord::TileCoord;
use crate::provider::ImageryProvider;
use crate::tile::TileImage;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Starts tile fetches against an imagery provider.
///
/// Each [`fetch`](Self::fetch) call spawns one worker task that drives
/// the transport, decodes the payload, and settles the returned
/// [`FetchHandle`] exactly once. Fetches are independent: no ordering is
/// guaranteed between them and no state is shared.
///
/// Must be used from within a Tokio runtime.
pub struct TileFetcher<P: ImageryProvider + 'static> {
    provider: Arc<P>,
}

impl<P: ImageryProvider + 'static> TileFetcher<P> {
    /// Creates a fetcher owning the given provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Creates a fetcher sharing an already-wrapped provider.
    pub fn from_arc(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Borrows the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Starts fetching one tile.
    ///
    /// Returns immediately with a pending handle. The worker races the
    /// transport against cancellation; cancellation requested before the
    /// transport settles wins, dropping the in-flight request.
    pub fn fetch(&self, tile: TileCoord) -> FetchHandle {
        let provider = Arc::clone(&self.provider);
        let token = CancellationToken::new();
        let worker_token = token.clone();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            // Biased: poll cancellation first so a cancel requested
            // before transport settlement always takes precedence.
            let outcome = tokio::select! {
                biased;
                _ = worker_token.cancelled() => {
                    debug!(tile = %tile, "tile fetch canceled");
                    FetchOutcome::Canceled
                }
                result = fetch_and_decode(provider.as_ref(), &tile) => match result {
                    Ok(image) => {
                        trace!(tile = %tile, width = image.width(), "tile fetch resolved");
                        FetchOutcome::Resolved(image)
                    }
                    Err(e) => {
                        debug!(tile = %tile, error = %e, "tile fetch failed");
                        FetchOutcome::Failed(e)
                    }
                },
            };
            // The receiver may have been dropped; the outcome is then discarded.
            let _ = tx.send(outcome);
        });

        FetchHandle::new(token, rx)
    }
}

impl<P: ImageryProvider + 'static> Clone for TileFetcher<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

/// Downloads and decodes one tile.
async fn fetch_and_decode<P: ImageryProvider>(
    provider: &P,
    tile: &TileCoord,
) -> Result<TileImage, FetchError> {
    let bytes = provider
        .fetch_tile(tile)
        .await
        .map_err(FetchError::Transport)?;
    TileImage::from_bytes(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
}
