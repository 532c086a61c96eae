//! Bing Maps imagery provider
//!
//! Downloads map tiles from the Bing Maps tile servers using quadkey-based
//! URLs, and exposes the imagery metadata REST endpoint.
//!
//! # Addressing
//!
//! Bing addresses tiles by quadkey rather than XYZ triples: one base-4
//! digit per zoom level, most significant first (see
//! [`crate::coord::tile_to_quadkey`]). Requests are spread across the
//! provider-assigned subdomains `t0`-`t3`.

use super::http::AsyncHttpClient;
use super::types::{validate_tile, ImageryProvider, ProviderError};
use crate::coord::{tile_to_quadkey, TileCoord};
use std::fmt;
use std::str::FromStr;

/// Imagery generation number sent as the `g` query parameter.
///
/// Bing bumps this periodically; stale values still resolve.
const IMAGERY_GENERATION: u32 = 587;

/// Subdomains the tile servers are sharded across.
const TILE_SUBDOMAINS: [&str; 4] = ["t0", "t1", "t2", "t3"];

/// Map view styles offered by the Bing tile servers.
///
/// Each style selects a different tile set via a single-character path
/// prefix in the tile URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BingMapsStyle {
    /// Satellite/aerial photography
    Aerial,
    /// Aerial photography with road and label overlays
    AerialWithLabels,
    /// Road map
    Road,
    /// Bird's-eye oblique photography
    Oblique,
    /// Bird's-eye oblique photography with label overlays
    ObliqueWithLabels,
}

impl BingMapsStyle {
    /// Single-character tile path prefix for this style.
    pub fn path_prefix(self) -> char {
        match self {
            BingMapsStyle::Aerial => 'a',
            BingMapsStyle::AerialWithLabels => 'h',
            BingMapsStyle::Road => 'r',
            BingMapsStyle::Oblique => 'o',
            BingMapsStyle::ObliqueWithLabels => 'b',
        }
    }

    /// Image file extension served for this style.
    pub fn image_format(self) -> &'static str {
        match self {
            BingMapsStyle::Road => "png",
            _ => "jpeg",
        }
    }

    /// Imagery-set segment used by the metadata REST endpoint.
    pub fn metadata_set(self) -> &'static str {
        match self {
            BingMapsStyle::Aerial => "Aerial",
            BingMapsStyle::AerialWithLabels => "AerialWithLabels",
            BingMapsStyle::Road => "Road",
            BingMapsStyle::Oblique => "Birdseye",
            BingMapsStyle::ObliqueWithLabels => "BirdseyeWithLabels",
        }
    }
}

impl Default for BingMapsStyle {
    fn default() -> Self {
        BingMapsStyle::Aerial
    }
}

impl fmt::Display for BingMapsStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BingMapsStyle::Aerial => "aerial",
            BingMapsStyle::AerialWithLabels => "aerial-with-labels",
            BingMapsStyle::Road => "road",
            BingMapsStyle::Oblique => "oblique",
            BingMapsStyle::ObliqueWithLabels => "oblique-with-labels",
        };
        f.write_str(name)
    }
}

impl FromStr for BingMapsStyle {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aerial" => Ok(BingMapsStyle::Aerial),
            "aerial-with-labels" => Ok(BingMapsStyle::AerialWithLabels),
            "road" => Ok(BingMapsStyle::Road),
            "oblique" => Ok(BingMapsStyle::Oblique),
            "oblique-with-labels" => Ok(BingMapsStyle::ObliqueWithLabels),
            other => Err(ProviderError::ProviderSpecific(format!(
                "Unknown Bing map style: '{}'",
                other
            ))),
        }
    }
}

/// Bing Maps imagery provider.
///
/// Fetches tiles from the public Bing tile servers. An API key is only
/// needed for the metadata endpoint and for keyed tile access; tile
/// fetches work with an empty key.
///
/// # Example
///
/// ```no_run
/// use terralayer::provider::{AsyncReqwestClient, BingMapsProvider, BingMapsStyle};
///
/// let client = AsyncReqwestClient::new().unwrap();
/// let provider = BingMapsProvider::new(client)
///     .with_style(BingMapsStyle::Road)
///     .with_api_key("YOUR_API_KEY");
/// ```
pub struct BingMapsProvider<C: AsyncHttpClient> {
    http_client: C,
    api_key: String,
    style: BingMapsStyle,
}

impl<C: AsyncHttpClient> BingMapsProvider<C> {
    /// Creates a provider with the default style (aerial) and no API key.
    pub fn new(http_client: C) -> Self {
        Self {
            http_client,
            api_key: String::new(),
            style: BingMapsStyle::Aerial,
        }
    }

    /// Sets the map view style.
    pub fn with_style(mut self, style: BingMapsStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the API key appended to tile and metadata requests.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Returns the configured style.
    pub fn style(&self) -> BingMapsStyle {
        self.style
    }

    /// Picks the subdomain for a tile.
    ///
    /// Deterministic per tile so repeated requests hit the same shard.
    fn subdomain(tile: &TileCoord) -> &'static str {
        TILE_SUBDOMAINS[((tile.row + tile.col) % 4) as usize]
    }

    /// Constructs the tile download URL for the given tile address.
    fn build_tile_url(&self, tile: &TileCoord) -> String {
        let quadkey = tile_to_quadkey(tile);
        let mut url = format!(
            "https://ecn.{}.tiles.virtualearth.net/tiles/{}{}.{}?g={}",
            Self::subdomain(tile),
            self.style.path_prefix(),
            quadkey,
            self.style.image_format(),
            IMAGERY_GENERATION
        );
        if !self.api_key.is_empty() {
            url.push_str("&token=");
            url.push_str(&self.api_key);
        }
        url
    }

    /// Constructs the imagery metadata URL for the configured style.
    fn build_metadata_url(&self) -> String {
        format!(
            "https://dev.virtualearth.net/REST/v1/Imagery/Metadata/{}?key={}",
            self.style.metadata_set(),
            self.api_key
        )
    }

    /// Fetches the imagery metadata document for the configured style.
    ///
    /// The JSON document is returned as parsed; no fields are extracted.
    ///
    /// # Errors
    ///
    /// Transport failures propagate as-is; a payload that is not valid
    /// JSON surfaces as `ProviderError::InvalidResponse`.
    pub async fn fetch_metadata(&self) -> Result<serde_json::Value, ProviderError> {
        let url = self.build_metadata_url();
        let body = self.http_client.get(&url).await?;
        serde_json::from_slice(&body)
            .map_err(|e| ProviderError::InvalidResponse(format!("Invalid metadata JSON: {}", e)))
    }
}

impl<C: AsyncHttpClient> ImageryProvider for BingMapsProvider<C> {
    async fn fetch_tile(&self, tile: &TileCoord) -> Result<Vec<u8>, ProviderError> {
        validate_tile(self, tile)?;

        let url = self.build_tile_url(tile);
        self.http_client.get(&url).await
    }

    fn name(&self) -> &str {
        "Bing Maps"
    }

    fn min_zoom(&self) -> u8 {
        1
    }

    fn max_zoom(&self) -> u8 {
        19
    }

    fn attribution(&self) -> &str {
        "© Microsoft Corporation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockAsyncHttpClient;

    fn mock_provider() -> BingMapsProvider<MockAsyncHttpClient> {
        BingMapsProvider::new(MockAsyncHttpClient::with_response(Ok(vec![])))
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(mock_provider().name(), "Bing Maps");
    }

    #[test]
    fn test_zoom_range() {
        let provider = mock_provider();
        assert_eq!(provider.min_zoom(), 1);
        assert_eq!(provider.max_zoom(), 19);

        assert!(!provider.supports_zoom(0));
        assert!(provider.supports_zoom(1));
        assert!(provider.supports_zoom(19));
        assert!(!provider.supports_zoom(20));
    }

    #[test]
    fn test_default_configuration() {
        let provider = mock_provider();
        assert_eq!(provider.style(), BingMapsStyle::Aerial);
        assert!(provider.api_key.is_empty());
    }

    #[test]
    fn test_tile_url_aerial_without_key() {
        let provider = mock_provider();
        let tile = TileCoord { row: 5, col: 3, zoom: 3 };

        let url = provider.build_tile_url(&tile);
        assert_eq!(
            url,
            "https://ecn.t0.tiles.virtualearth.net/tiles/a213.jpeg?g=587"
        );
    }

    #[test]
    fn test_tile_url_includes_token_when_keyed() {
        let provider = mock_provider().with_api_key("test_key");
        let tile = TileCoord { row: 5, col: 3, zoom: 3 };

        let url = provider.build_tile_url(&tile);
        assert!(url.ends_with("?g=587&token=test_key"));
    }

    #[test]
    fn test_tile_url_road_style_uses_png() {
        let provider = mock_provider().with_style(BingMapsStyle::Road);
        let tile = TileCoord { row: 0, col: 1, zoom: 1 };

        let url = provider.build_tile_url(&tile);
        assert!(url.contains("/tiles/r1.png?"));
    }

    #[test]
    fn test_subdomain_rotation() {
        let subdomains: Vec<&str> = (0..4)
            .map(|col| {
                BingMapsProvider::<MockAsyncHttpClient>::subdomain(&TileCoord {
                    row: 0,
                    col,
                    zoom: 2,
                })
            })
            .collect();
        assert_eq!(subdomains, vec!["t0", "t1", "t2", "t3"]);
    }

    #[test]
    fn test_style_path_prefixes() {
        assert_eq!(BingMapsStyle::Aerial.path_prefix(), 'a');
        assert_eq!(BingMapsStyle::AerialWithLabels.path_prefix(), 'h');
        assert_eq!(BingMapsStyle::Road.path_prefix(), 'r');
        assert_eq!(BingMapsStyle::Oblique.path_prefix(), 'o');
        assert_eq!(BingMapsStyle::ObliqueWithLabels.path_prefix(), 'b');
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!(
            "aerial".parse::<BingMapsStyle>().unwrap(),
            BingMapsStyle::Aerial
        );
        assert_eq!(
            "oblique-with-labels".parse::<BingMapsStyle>().unwrap(),
            BingMapsStyle::ObliqueWithLabels
        );
        assert!("satellite".parse::<BingMapsStyle>().is_err());
    }

    #[test]
    fn test_style_display_roundtrip() {
        for style in [
            BingMapsStyle::Aerial,
            BingMapsStyle::AerialWithLabels,
            BingMapsStyle::Road,
            BingMapsStyle::Oblique,
            BingMapsStyle::ObliqueWithLabels,
        ] {
            assert_eq!(style.to_string().parse::<BingMapsStyle>().unwrap(), style);
        }
    }

    #[tokio::test]
    async fn test_fetch_tile_unsupported_zoom() {
        let provider = mock_provider();
        let tile = TileCoord { row: 0, col: 0, zoom: 0 };

        let result = provider.fetch_tile(&tile).await;
        assert!(matches!(
            result.unwrap_err(),
            ProviderError::UnsupportedZoom(0)
        ));
    }

    #[tokio::test]
    async fn test_fetch_tile_out_of_grid() {
        let provider = mock_provider();
        let tile = TileCoord { row: 9, col: 0, zoom: 3 };

        let result = provider.fetch_tile(&tile).await;
        assert!(matches!(
            result.unwrap_err(),
            ProviderError::InvalidCoordinate { row: 9, .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_tile_success_requests_quadkey_url() {
        let provider = BingMapsProvider::new(MockAsyncHttpClient::with_response(Ok(vec![
            0xFF, 0xD8, 0xFF, 0xE0, // JPEG magic bytes
        ])));
        let tile = TileCoord { row: 5, col: 3, zoom: 3 };

        let result = provider.fetch_tile(&tile).await;
        assert_eq!(result.unwrap(), vec![0xFF, 0xD8, 0xFF, 0xE0]);

        let urls = provider.http_client.urls();
        assert_eq!(urls.len(), 1);
        assert!(urls[0].contains("a213.jpeg"));
    }

    #[tokio::test]
    async fn test_fetch_tile_http_error() {
        let provider = BingMapsProvider::new(MockAsyncHttpClient::with_response(Err(
            ProviderError::Http("404 Not Found".to_string()),
        )));
        let tile = TileCoord { row: 100, col: 200, zoom: 10 };

        let result = provider.fetch_tile(&tile).await;
        assert!(matches!(result.unwrap_err(), ProviderError::Http(_)));
    }

    #[tokio::test]
    async fn test_fetch_metadata_parses_json() {
        let body = br#"{"statusCode": 200, "resourceSets": []}"#.to_vec();
        let provider = BingMapsProvider::new(MockAsyncHttpClient::with_response(Ok(body)))
            .with_api_key("test_key");

        let metadata = provider.fetch_metadata().await.unwrap();
        assert_eq!(metadata["statusCode"], 200);

        let urls = provider.http_client.urls();
        assert!(urls[0].contains("/REST/v1/Imagery/Metadata/Aerial?key=test_key"));
    }

    #[tokio::test]
    async fn test_fetch_metadata_invalid_json() {
        let provider =
            BingMapsProvider::new(MockAsyncHttpClient::with_response(Ok(b"not json".to_vec())));

        let result = provider.fetch_metadata().await;
        assert!(matches!(
            result.unwrap_err(),
            ProviderError::InvalidResponse(_)
        ));
    }

    #[tokio::test]
    async fn test_fetch_metadata_transport_error() {
        let provider = BingMapsProvider::new(MockAsyncHttpClient::with_response(Err(
            ProviderError::Http("timeout".to_string()),
        )));

        let result = provider.fetch_metadata().await;
        assert!(matches!(result.unwrap_err(), ProviderError::Http(_)));
    }
}
