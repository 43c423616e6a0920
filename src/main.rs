use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use taskdeck::cli::Cli;
use taskdeck::config::Config;
use taskdeck::logging::init_tracing;
use taskdeck::store::AppContext;
use taskdeck::ui::events::EventHandler;
use taskdeck::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)?;
    config.apply_overrides(cli.api_url, cli.api_token);
    config.validate()?;

    init_tracing(&config.logging, cli.log_level.as_deref());
    tracing::info!(
        config = %config_path.display(),
        base_url = %config.api.base_url,
        route = %cli.route,
        "Starting taskdeck"
    );

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let ctx = AppContext::from_config(&config, Some(events.listener()))
        .context("Failed to build API client")?;

    runtime::run(ctx, tokio_runtime.handle().clone(), events, cli.route, tick_rate)?;

    tracing::info!("Shutting down");
    tokio_runtime.shutdown_timeout(Duration::from_secs(1));
    Ok(())
}
