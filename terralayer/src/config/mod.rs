//! Configuration types for terralayer components.
//!
//! [`FetchConfig`] groups HTTP transport parameters with sensible
//! defaults; [`ConfigFile`] persists user configuration at
//! `~/.terralayer/config.ini`.

mod fetch;
mod file;

pub use fetch::{FetchConfig, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_USER_AGENT};
pub use file::{
    config_directory, config_file_path, ConfigFile, ConfigFileError, DownloadSettings,
    ProviderSettings,
};
