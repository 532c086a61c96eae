//! HTTP fetch configuration.

/// Default timeout for one tile request, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent string for HTTP requests.
/// Some tile servers reject requests without a browser-style User-Agent.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// Configuration for the HTTP transport behind tile fetches.
///
/// # Example
///
/// ```
/// use terralayer::config::FetchConfig;
///
/// // Using defaults
/// let config = FetchConfig::default();
/// assert_eq!(config.timeout_secs(), 30);
///
/// // Custom configuration
/// let config = FetchConfig::new()
///     .with_timeout_secs(60)
///     .with_user_agent("terralayer-tests/1.0");
/// assert_eq!(config.timeout_secs(), 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Maximum time to spend on a single tile request (in seconds)
    timeout_secs: u64,
    /// User-Agent header sent with every request
    user_agent: String,
}

impl FetchConfig {
    /// Create a new fetch configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout in seconds.
    ///
    /// This bounds a single tile request end to end. Default: 30 seconds.
    pub fn with_timeout_secs(mut self, timeout: u64) -> Self {
        self.timeout_secs = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Get the request timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Get the User-Agent header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
