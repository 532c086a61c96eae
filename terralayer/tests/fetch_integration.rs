//! Integration tests for the tile fetch pipeline.
//!
//! These tests drive the public API end to end:
//! - Fetch settlement (resolved, failed, canceled)
//! - Cancellation racing transport
//! - Independence of concurrent fetches
//! - Composing imagery fetches with elevation loading

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use terralayer::coord::TileCoord;
use terralayer::fetch::{FetchError, FetchOutcome, TileFetcher};
use terralayer::provider::{ImageryProvider, ProviderError};
use terralayer::terrain::{FlatHeightSource, HeightSource};

// =============================================================================
// Test Helpers
// =============================================================================

/// Encodes a single-pixel PNG whose channels carry the tile address.
fn tile_png(tile: &TileCoord) -> Vec<u8> {
    let img = RgbaImage::from_pixel(
        1,
        1,
        Rgba([tile.row as u8, tile.col as u8, tile.zoom, 255]),
    );
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

/// Provider that answers each tile with its own marker image after an
/// optional delay, counting the requests it served.
struct MarkerProvider {
    delay: Duration,
    served: Arc<AtomicUsize>,
}

impl MarkerProvider {
    fn new() -> Self {
        Self {
            delay: Duration::ZERO,
            served: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            served: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl ImageryProvider for MarkerProvider {
    async fn fetch_tile(&self, tile: &TileCoord) -> Result<Vec<u8>, ProviderError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.served.fetch_add(1, Ordering::SeqCst);
        Ok(tile_png(tile))
    }

    fn name(&self) -> &str {
        "marker"
    }

    fn min_zoom(&self) -> u8 {
        0
    }

    fn max_zoom(&self) -> u8 {
        23
    }
}

fn marker_pixel(outcome: FetchOutcome) -> Rgba<u8> {
    *outcome
        .resolved()
        .expect("fetch should resolve")
        .as_image()
        .to_rgba8()
        .get_pixel(0, 0)
}

// =============================================================================
// Integration Tests
// =============================================================================

#[tokio::test]
async fn fetch_resolves_with_the_tile_own_image() {
    let fetcher = TileFetcher::new(MarkerProvider::new());
    let tile = TileCoord { row: 11, col: 22, zoom: 5 };

    let outcome = fetcher.fetch(tile).outcome().await;
    assert_eq!(marker_pixel(outcome), Rgba([11, 22, 5, 255]));
}

#[tokio::test]
async fn many_concurrent_fetches_do_not_cross_contaminate() {
    let fetcher = TileFetcher::new(MarkerProvider::new());

    let tiles: Vec<TileCoord> = (0..16)
        .map(|i| TileCoord {
            row: i,
            col: 31 - i,
            zoom: 5,
        })
        .collect();

    let outcomes = futures::future::join_all(
        tiles.iter().map(|tile| fetcher.fetch(*tile).outcome()),
    )
    .await;

    for (tile, outcome) in tiles.iter().zip(outcomes) {
        assert_eq!(
            marker_pixel(outcome),
            Rgba([tile.row as u8, tile.col as u8, tile.zoom, 255]),
            "tile {} resolved with another tile's image",
            tile
        );
    }
}

#[tokio::test]
async fn cancel_before_transport_completion_suppresses_settlement_paths() {
    let provider = MarkerProvider::with_delay(Duration::from_secs(60));
    let served = Arc::clone(&provider.served);
    let fetcher = TileFetcher::new(provider);

    let handle = fetcher.fetch(TileCoord { row: 1, col: 1, zoom: 4 });
    handle.cancel();

    assert_eq!(handle.outcome().await, FetchOutcome::Canceled);
    // The transport never completed, so nothing was served
    assert_eq!(served.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn cancel_through_cloned_token_reaches_the_fetch() {
    let fetcher = TileFetcher::new(MarkerProvider::with_delay(Duration::from_secs(60)));

    let handle = fetcher.fetch(TileCoord { row: 0, col: 0, zoom: 1 });
    let token = handle.cancellation_token().clone();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        token.cancel();
    });

    assert_eq!(handle.outcome().await, FetchOutcome::Canceled);
}

#[tokio::test]
async fn canceling_one_fetch_leaves_others_running() {
    let fetcher = TileFetcher::new(MarkerProvider::with_delay(Duration::from_millis(50)));

    let doomed = fetcher.fetch(TileCoord { row: 1, col: 0, zoom: 2 });
    let survivor = fetcher.fetch(TileCoord { row: 2, col: 3, zoom: 2 });

    doomed.cancel();

    let (doomed_outcome, survivor_outcome) =
        futures::join!(doomed.outcome(), survivor.outcome());

    assert_eq!(doomed_outcome, FetchOutcome::Canceled);
    assert_eq!(marker_pixel(survivor_outcome), Rgba([2, 3, 2, 255]));
}

#[tokio::test]
async fn transport_failure_surfaces_as_failed_outcome() {
    struct BrokenProvider;

    impl ImageryProvider for BrokenProvider {
        async fn fetch_tile(&self, _tile: &TileCoord) -> Result<Vec<u8>, ProviderError> {
            Err(ProviderError::Http("HTTP 503 from upstream".to_string()))
        }

        fn name(&self) -> &str {
            "broken"
        }

        fn min_zoom(&self) -> u8 {
            0
        }

        fn max_zoom(&self) -> u8 {
            23
        }
    }

    let fetcher = TileFetcher::new(BrokenProvider);
    let outcome = fetcher.fetch(TileCoord { row: 0, col: 0, zoom: 0 }).outcome().await;

    match outcome {
        FetchOutcome::Failed(FetchError::Transport(ProviderError::Http(msg))) => {
            assert!(msg.contains("503"));
        }
        other => panic!("expected transport failure, got {:?}", other),
    }
}

#[tokio::test]
async fn imagery_and_elevation_compose_for_one_tile() {
    let fetcher = TileFetcher::new(MarkerProvider::new());
    let heights = FlatHeightSource::new();
    let tile = TileCoord { row: 3, col: 4, zoom: 6 };

    let (outcome, field) = futures::join!(
        fetcher.fetch(tile).outcome(),
        heights.load_height_geometry(&tile)
    );

    assert!(outcome.is_resolved());
    let field = field.unwrap();
    assert!(field.is_flat());
    assert_eq!(field.size(), FlatHeightSource::DEFAULT_GRID_SIZE);
}
