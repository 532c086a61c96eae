//! Tiled imagery provider abstraction
//!
//! This module provides traits and implementations for downloading map
//! tiles from imagery providers (Bing Maps, XYZ tile servers).
//!
//! # Factory Pattern
//!
//! For centralized provider creation, use the [`ProviderFactory`]:
//!
//! ```ignore
//! use terralayer::provider::{AsyncReqwestClient, ProviderConfig, ProviderFactory};
//!
//! let http_client = AsyncReqwestClient::new()?;
//! let factory = ProviderFactory::new(http_client);
//! let (provider, name, max_zoom) = factory.create(&ProviderConfig::bing("", Default::default()));
//! ```

mod bing;
mod factory;
mod http;
mod types;
mod xyz;

pub use bing::{BingMapsProvider, BingMapsStyle};
pub use factory::{ProviderConfig, ProviderFactory, ProviderKind};
pub use http::{AsyncHttpClient, AsyncReqwestClient};
pub use types::{ImageryProvider, ProviderError};
pub use xyz::XyzProvider;

#[cfg(test)]
pub use http::tests::{MockAsyncHttpClient, RoutedMockClient};
