//! Imagery metadata command.

use clap::Args;
use terralayer::config::ConfigFile;
use terralayer::provider::{AsyncReqwestClient, BingMapsProvider, BingMapsStyle};

use crate::error::CliError;

/// Arguments for the `metadata` subcommand.
///
/// The metadata REST surface is Bing-specific, so this command always
/// talks to Bing regardless of the configured tile provider.
#[derive(Debug, Args)]
pub struct MetadataArgs {
    /// Map style to query, overriding the configured one
    #[arg(long)]
    pub style: Option<String>,
}

/// Run the metadata subcommand.
pub fn run(args: MetadataArgs) -> Result<(), CliError> {
    let config = ConfigFile::load()?;

    let style_name = args.style.unwrap_or_else(|| config.provider.style.clone());
    let style: BingMapsStyle = style_name.parse()?;
    let api_key = config.provider.api_key.clone().unwrap_or_default();

    let runtime =
        tokio::runtime::Runtime::new().map_err(|e| CliError::Runtime(e.to_string()))?;

    runtime.block_on(async {
        let client = AsyncReqwestClient::from_config(&config.to_fetch_config())?;
        let provider = BingMapsProvider::new(client)
            .with_style(style)
            .with_api_key(api_key);

        let metadata = provider.fetch_metadata().await?;
        let pretty = serde_json::to_string_pretty(&metadata)
            .map_err(|e| CliError::Fetch(e.to_string()))?;
        println!("{}", pretty);
        Ok(())
    })
}
