//! netnotify - network provider outage notifier
//!
//! Runs the configured provider/user scenarios and prints every delivered
//! message to stdout. Logs go to stderr.

use anyhow::Result;
use clap::Parser;
use netnotify::{app::App, cli::Cli, config::Config};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli)?;

    // RUST_LOG wins over the configured level when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("netnotify starting up...");
    info!("Log Level: {}", config.log_level);
    info!("Output Format: {}", config.output.format);
    info!("Scenarios: {}", config.scenarios.len());
    debug!(?config, "Loaded configuration");

    let ran = App::builder(config).build().run()?;

    info!("Finished {} scenario(s). Exiting.", ran);
    Ok(())
}
