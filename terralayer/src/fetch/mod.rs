//! Cancelable tile fetching
//!
//! A fetch is an explicit task value: created pending, settled exactly
//! once as resolved, failed, or canceled. [`TileFetcher`] starts fetches
//! against an [`crate::provider::ImageryProvider`] and hands back a
//! [`FetchHandle`] the caller can await or cancel.
//!
//! Cancellation races transport completion. If cancellation is requested
//! before the transport settles, the in-flight request is dropped and the
//! handle settles canceled; a fetch that already resolved or failed stays
//! settled.
//!
//! # Example
//!
//! ```ignore
//! use terralayer::fetch::{FetchOutcome, TileFetcher};
//!
//! let fetcher = TileFetcher::new(provider);
//! let handle = fetcher.fetch(tile);
//!
//! match handle.outcome().await {
//!     FetchOutcome::Resolved(image) => println!("{}x{}", image.width(), image.height()),
//!     FetchOutcome::Failed(e) => eprintln!("fetch failed: {e}"),
//!     FetchOutcome::Canceled => {}
//! }
//! ```

mod fetcher;
mod handle;

pub use fetcher::TileFetcher;
pub use handle::{FetchError, FetchHandle, FetchOutcome};
