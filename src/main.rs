//! ratewatch - A terminal dashboard for currency exchange rates
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use ratewatch_app::config;
use ratewatch_core::logging;

/// ratewatch - A terminal dashboard for currency exchange rates
#[derive(Parser, Debug)]
#[command(name = "ratewatch")]
#[command(about = "A terminal dashboard for currency exchange rates", long_about = None)]
struct Args {
    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;

    let settings = config::load_settings(args.config.as_deref());
    tracing::info!(
        "Loaded settings: base_currency={}, feed_enabled={}",
        settings.ui.base_currency,
        settings.feed.enabled
    );

    ratewatch_tui::run(settings).await?;
    Ok(())
}
