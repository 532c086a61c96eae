//! CLI error types.

use std::fmt;
use terralayer::config::ConfigFileError;
use terralayer::coord::CoordError;
use terralayer::provider::ProviderError;

/// Errors surfaced by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be read or is invalid.
    Config(ConfigFileError),

    /// Tile address arguments were invalid.
    Coord(CoordError),

    /// Provider construction or request failed.
    Provider(ProviderError),

    /// Tile fetch settled with a failure.
    Fetch(String),

    /// Argument combination was incomplete.
    Usage(String),

    /// Failed to create the Tokio runtime.
    Runtime(String),

    /// Filesystem error.
    Io(std::io::Error),

    /// Failed to encode or save the output image.
    Image(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Coord(e) => write!(f, "Invalid tile address: {}", e),
            CliError::Provider(e) => write!(f, "Provider error: {}", e),
            CliError::Fetch(msg) => write!(f, "Fetch failed: {}", msg),
            CliError::Usage(msg) => write!(f, "Usage error: {}", msg),
            CliError::Runtime(msg) => write!(f, "Failed to create Tokio runtime: {}", msg),
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Image(msg) => write!(f, "Image error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Coord(e) => Some(e),
            CliError::Provider(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::Coord(e)
    }
}

impl From<ProviderError> for CliError {
    fn from(e: ProviderError) -> Self {
        CliError::Provider(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
