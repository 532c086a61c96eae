//! Generic XYZ (slippy map) tile provider
//!
//! Covers tile services that address tiles by `{z}/{x}/{y}` triples
//! rather than quadkeys. The URL template carries the placeholders;
//! everything else is plain HTTP GET.

use super::http::AsyncHttpClient;
use super::types::{validate_tile, ImageryProvider, ProviderError};
use crate::coord::TileCoord;

/// Imagery provider for XYZ-addressed tile servers.
///
/// # Example
///
/// ```no_run
/// use terralayer::provider::{AsyncReqwestClient, XyzProvider};
///
/// let client = AsyncReqwestClient::new().unwrap();
/// let provider = XyzProvider::new(
///     client,
///     "OpenStreetMap",
///     "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
///     19,
/// );
/// ```
pub struct XyzProvider<C: AsyncHttpClient> {
    http_client: C,
    name: String,
    url_template: String,
    max_zoom: u8,
    attribution: String,
}

impl<C: AsyncHttpClient> XyzProvider<C> {
    /// Creates a provider for the given URL template.
    ///
    /// The template must contain `{z}`, `{x}` and `{y}` placeholders.
    pub fn new(
        http_client: C,
        name: impl Into<String>,
        url_template: impl Into<String>,
        max_zoom: u8,
    ) -> Self {
        Self {
            http_client,
            name: name.into(),
            url_template: url_template.into(),
            max_zoom,
            attribution: String::new(),
        }
    }

    /// Sets the attribution text reported for this tile set.
    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = attribution.into();
        self
    }

    /// Expands the URL template for a tile address.
    fn build_tile_url(&self, tile: &TileCoord) -> String {
        self.url_template
            .replace("{z}", &tile.zoom.to_string())
            .replace("{x}", &tile.col.to_string())
            .replace("{y}", &tile.row.to_string())
    }
}

impl<C: AsyncHttpClient> ImageryProvider for XyzProvider<C> {
    async fn fetch_tile(&self, tile: &TileCoord) -> Result<Vec<u8>, ProviderError> {
        validate_tile(self, tile)?;

        let url = self.build_tile_url(tile);
        self.http_client.get(&url).await
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn min_zoom(&self) -> u8 {
        0
    }

    fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    fn attribution(&self) -> &str {
        &self.attribution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockAsyncHttpClient;

    fn osm_provider() -> XyzProvider<MockAsyncHttpClient> {
        XyzProvider::new(
            MockAsyncHttpClient::with_response(Ok(vec![1, 2, 3])),
            "OpenStreetMap",
            "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
            19,
        )
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(osm_provider().name(), "OpenStreetMap");
    }

    #[test]
    fn test_url_template_expansion() {
        let provider = osm_provider();
        let tile = TileCoord { row: 100, col: 200, zoom: 10 };

        assert_eq!(
            provider.build_tile_url(&tile),
            "https://tile.openstreetmap.org/10/200/100.png"
        );
    }

    #[test]
    fn test_supports_zoom_from_zero() {
        let provider = osm_provider();
        assert!(provider.supports_zoom(0));
        assert!(provider.supports_zoom(19));
        assert!(!provider.supports_zoom(20));
    }

    #[test]
    fn test_attribution() {
        let provider = osm_provider().with_attribution("© OpenStreetMap contributors");
        assert_eq!(provider.attribution(), "© OpenStreetMap contributors");
    }

    #[tokio::test]
    async fn test_fetch_tile_success() {
        let provider = osm_provider();
        let tile = TileCoord { row: 1, col: 2, zoom: 3 };

        let result = provider.fetch_tile(&tile).await;
        assert_eq!(result.unwrap(), vec![1, 2, 3]);

        let urls = provider.http_client.urls();
        assert_eq!(urls, vec!["https://tile.openstreetmap.org/3/2/1.png"]);
    }

    #[tokio::test]
    async fn test_fetch_tile_rejects_unsupported_zoom() {
        let provider = osm_provider();
        let tile = TileCoord { row: 0, col: 0, zoom: 20 };

        let result = provider.fetch_tile(&tile).await;
        assert!(matches!(
            result.unwrap_err(),
            ProviderError::UnsupportedZoom(20)
        ));
    }
}
