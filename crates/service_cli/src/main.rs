//! `bsm` binary entry point.

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use service_cli::cli::Cli;
use service_cli::commands::{self, Context};
use service_cli::config::{build_config, CliOverrides, LogLevel};
use service_cli::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        log_file: cli.log_file.clone(),
        history_file: cli.history_file.clone(),
    };
    let config = build_config(&overrides)?;

    // RUST_LOG wins over configuration
    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "configuration loaded");

    let mut ctx = Context::new(config)?;
    if ctx.journal.loaded_count() > 0 {
        info!("Loaded {} history entries", ctx.journal.loaded_count());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = commands::run(cli.command, &mut ctx, &mut out);

    ctx.journal.save_history()?;
    outcome
}
