//! Provider factory for centralized provider creation.
//!
//! Collapses the per-provider construction details behind a single
//! configuration enum, so callers (CLI, services) pick a provider by
//! data rather than by type.

use super::bing::{BingMapsProvider, BingMapsStyle};
use super::http::AsyncReqwestClient;
use super::types::{ImageryProvider, ProviderError};
use super::xyz::XyzProvider;
use crate::coord::TileCoord;

/// Configuration for creating a provider.
///
/// New providers are added as new enum variants without touching
/// existing construction paths.
///
/// # Example
///
/// ```
/// use terralayer::provider::{BingMapsStyle, ProviderConfig};
///
/// let bing = ProviderConfig::bing("YOUR_API_KEY", BingMapsStyle::Aerial);
/// let osm = ProviderConfig::xyz(
///     "OpenStreetMap",
///     "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
///     19,
/// );
/// assert_eq!(bing.name(), "Bing Maps");
/// assert_eq!(osm.name(), "OpenStreetMap");
/// ```
#[derive(Debug, Clone)]
pub enum ProviderConfig {
    /// Bing Maps quadkey-addressed tile servers.
    Bing {
        /// API key appended to tile and metadata requests; may be empty.
        api_key: String,
        /// Map view style.
        style: BingMapsStyle,
    },

    /// Generic XYZ-addressed tile server.
    Xyz {
        /// Display name for logging.
        name: String,
        /// URL template with `{z}`/`{x}`/`{y}` placeholders.
        url_template: String,
        /// Maximum zoom level the server offers.
        max_zoom: u8,
    },
}

impl ProviderConfig {
    /// Creates a Bing Maps provider configuration.
    pub fn bing(api_key: impl Into<String>, style: BingMapsStyle) -> Self {
        Self::Bing {
            api_key: api_key.into(),
            style,
        }
    }

    /// Creates an XYZ tile server configuration.
    pub fn xyz(name: impl Into<String>, url_template: impl Into<String>, max_zoom: u8) -> Self {
        Self::Xyz {
            name: name.into(),
            url_template: url_template.into(),
            max_zoom,
        }
    }

    /// Returns the provider name for this configuration.
    pub fn name(&self) -> &str {
        match self {
            Self::Bing { .. } => "Bing Maps",
            Self::Xyz { name, .. } => name,
        }
    }
}

/// A provider created by the factory.
///
/// Concrete enum rather than a trait object because [`ImageryProvider`]
/// returns unboxed futures; dispatch happens per variant.
pub enum ProviderKind {
    Bing(BingMapsProvider<AsyncReqwestClient>),
    Xyz(XyzProvider<AsyncReqwestClient>),
}

impl ImageryProvider for ProviderKind {
    async fn fetch_tile(&self, tile: &TileCoord) -> Result<Vec<u8>, ProviderError> {
        match self {
            Self::Bing(p) => p.fetch_tile(tile).await,
            Self::Xyz(p) => p.fetch_tile(tile).await,
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Bing(p) => p.name(),
            Self::Xyz(p) => p.name(),
        }
    }

    fn min_zoom(&self) -> u8 {
        match self {
            Self::Bing(p) => p.min_zoom(),
            Self::Xyz(p) => p.min_zoom(),
        }
    }

    fn max_zoom(&self) -> u8 {
        match self {
            Self::Bing(p) => p.max_zoom(),
            Self::Xyz(p) => p.max_zoom(),
        }
    }

    fn attribution(&self) -> &str {
        match self {
            Self::Bing(p) => p.attribution(),
            Self::Xyz(p) => p.attribution(),
        }
    }
}

/// Factory for creating provider instances.
///
/// # Example
///
/// ```ignore
/// use terralayer::provider::{AsyncReqwestClient, ProviderConfig, ProviderFactory};
///
/// let http_client = AsyncReqwestClient::new()?;
/// let factory = ProviderFactory::new(http_client);
/// let (provider, name, max_zoom) = factory.create(&ProviderConfig::bing("", Default::default()));
/// ```
pub struct ProviderFactory {
    http_client: AsyncReqwestClient,
}

impl ProviderFactory {
    /// Creates a new provider factory with the given HTTP client.
    pub fn new(http_client: AsyncReqwestClient) -> Self {
        Self { http_client }
    }

    /// Creates a provider from the given configuration.
    ///
    /// Returns the provider together with its name and maximum zoom
    /// level, for logging and for gating requests up front.
    pub fn create(self, config: &ProviderConfig) -> (ProviderKind, String, u8) {
        match config {
            ProviderConfig::Bing { api_key, style } => {
                let provider = BingMapsProvider::new(self.http_client)
                    .with_style(*style)
                    .with_api_key(api_key.clone());
                let name = provider.name().to_string();
                let max_zoom = provider.max_zoom();
                (ProviderKind::Bing(provider), name, max_zoom)
            }
            ProviderConfig::Xyz {
                name,
                url_template,
                max_zoom,
            } => {
                let provider = XyzProvider::new(
                    self.http_client,
                    name.clone(),
                    url_template.clone(),
                    *max_zoom,
                );
                let name = provider.name().to_string();
                let max_zoom = provider.max_zoom();
                (ProviderKind::Xyz(provider), name, max_zoom)
            }
        }
    }
}
