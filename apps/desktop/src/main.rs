use anyhow::Context;
use atlas::domain::config::ClientConfig;
use atlas::kernel::config::load_config;
use atlas_desktop::DesktopApp;
use atlas_logger::Logger;

fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg: ClientConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    DesktopApp::new().with_config(cfg).launch(atlas::App);

    Ok(())
}
