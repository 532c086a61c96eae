//! Configuration CLI commands.

use clap::Subcommand;
use terralayer::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Config action subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Show the effective configuration
    Show,
    /// Create the configuration file with defaults if missing
    Init,
}

/// Run a config subcommand.
pub fn run(action: ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Path => {
            println!("{}", config_file_path().display());
            Ok(())
        }
        ConfigAction::Show => {
            let config = ConfigFile::load()?;

            println!("Provider: {}", config.provider.provider_type);
            println!("  Style:      {}", config.provider.style);
            println!(
                "  API key:    {}",
                if config.provider.api_key.is_some() {
                    "set"
                } else {
                    "not set"
                }
            );
            if let Some(template) = &config.provider.url_template {
                println!("  Template:   {}", template);
            }
            println!("Download:");
            println!("  Timeout:    {}s", config.download.timeout_secs);
            Ok(())
        }
        ConfigAction::Init => {
            let path = ConfigFile::ensure_exists()?;
            println!("Configuration file at {}", path.display());
            Ok(())
        }
    }
}
