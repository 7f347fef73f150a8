use std::any::Any;

use anyhow::Result;
use career_os_web::{App, AppConfig, ShellServices};
use dioxus::prelude::*;
use tracing::info;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_LOG_FILTER: &str = "info,career_os_web=debug";

fn main() -> Result<()> {
    init_tracing()?;

    let config = AppConfig::from_env();
    info!(app_url = %config.app_url, api_url = %config.api_url, "Starting Career OS web");

    // One set of services per process; each rendered tree gets its own cache.
    let services = ShellServices::new(config);

    LaunchBuilder::new()
        .with_context_provider(move || Box::new(services.fork()) as Box<dyn Any>)
        .launch(App);

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with(fmt::layer().with_target(true).with_line_number(true))
        .try_init()?;

    Ok(())
}

/// The browser build logs through Dioxus' own console logger.
#[cfg(target_arch = "wasm32")]
fn init_tracing() -> Result<()> {
    Ok(())
}
