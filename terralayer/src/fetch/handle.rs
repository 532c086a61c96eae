//! Fetch handle and settlement types.

use crate::provider::ProviderError;
use crate::tile::TileImage;
use std::fmt;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

/// Errors a tile fetch can settle with.
///
/// Exactly two kinds: the transport failed, or the payload was not a
/// decodable image.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Network or HTTP failure from the provider
    Transport(ProviderError),
    /// Payload was not a decodable image
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "Transport failure: {}", e),
            FetchError::Decode(msg) => write!(f, "Decode failure: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<ProviderError> for FetchError {
    fn from(e: ProviderError) -> Self {
        FetchError::Transport(e)
    }
}

/// Final state of a tile fetch.
///
/// A fetch settles exactly once. `Canceled` means cancellation was
/// requested before the transport settled; the success and failure
/// paths never ran.
#[derive(Debug, PartialEq)]
pub enum FetchOutcome {
    /// The transport completed and the payload decoded.
    Resolved(TileImage),
    /// The transport failed or the payload was undecodable.
    Failed(FetchError),
    /// Cancellation won the race against the transport.
    Canceled,
}

impl FetchOutcome {
    /// Returns true if the fetch resolved with an image.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Returns true if the fetch failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns true if the fetch was canceled.
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }

    /// Returns the image if resolved, discarding the handle state.
    pub fn resolved(self) -> Option<TileImage> {
        match self {
            Self::Resolved(image) => Some(image),
            _ => None,
        }
    }
}

/// Handle to an in-flight tile fetch.
///
/// Owns the cancellation token for the underlying transport. Dropping
/// the handle detaches the fetch (the worker runs to completion and its
/// result is discarded); only [`cancel`](Self::cancel) aborts transport.
pub struct FetchHandle {
    token: CancellationToken,
    rx: oneshot::Receiver<FetchOutcome>,
}

impl FetchHandle {
    pub(crate) fn new(token: CancellationToken, rx: oneshot::Receiver<FetchOutcome>) -> Self {
        Self { token, rx }
    }

    /// Requests cancellation of the fetch.
    ///
    /// Idempotent. If the transport has not yet settled, the request is
    /// aborted and the handle settles [`FetchOutcome::Canceled`]; if it
    /// already settled, the existing outcome stands.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns true if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// The cancellation token backing this handle.
    ///
    /// Cloning it lets shutdown paths cancel the fetch without holding
    /// the handle itself.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.token
    }

    /// Awaits settlement, consuming the handle.
    ///
    /// Settles exactly once. If the worker is torn down without sending
    /// (runtime shutdown), this reports `Canceled`.
    pub async fn outcome(self) -> FetchOutcome {
        match self.rx.await {
            Ok(outcome) => outcome,
            Err(_) => FetchOutcome::Canceled,
        }
    }
}

impl fmt::Debug for FetchHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchHandle")
            .field("cancelled", &self.token.is_cancelled())
            .finish()
    }
}
