use atlas::domain::config::ClientConfig;
use atlas_logger::{LevelFilter, Logger};
use dioxus::prelude::*;

fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).level(LevelFilter::INFO).init()?;

    // The browser build has no config file or environment; defaults point at the public API.
    let config = ClientConfig::default();
    tracing::info!(api = %config.api.base_url, "Launching web client");

    LaunchBuilder::web().with_context(config).launch(atlas::App);

    Ok(())
}
