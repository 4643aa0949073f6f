//! CLI command implementations
//!
//! Each submodule implements one group of subcommands. Commands write their
//! user-facing output to the supplied sink and journal priced results.

pub mod analytic;
pub mod batch;
pub mod implied;
pub mod journal;
pub mod montecarlo;
pub mod selftest;

use std::io::Write;

use crate::cli::{Commands, HistoryAction, LogAction};
use crate::config::CliConfig;
use crate::journal::Journal;
use crate::Result;

/// State shared by every command of one invocation.
#[derive(Debug)]
pub struct Context {
    /// Effective configuration
    pub config: CliConfig,
    /// Operation journal
    pub journal: Journal,
}

impl Context {
    /// Opens the journal named by the configuration.
    pub fn new(config: CliConfig) -> Result<Self> {
        let journal = Journal::open(
            config.log_file.clone(),
            config.history_file.clone(),
            config.history_limit,
        )?;
        Ok(Self { config, journal })
    }
}

/// Dispatches a parsed command.
pub fn run(command: Commands, ctx: &mut Context, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Price { contract, format } => {
            analytic::price(ctx, &contract.contract(), format, out)
        }
        Commands::Greeks { contract } => analytic::greeks(ctx, &contract.contract(), out),
        Commands::Mc {
            contract,
            samples,
            seed,
            antithetic,
        } => {
            let samples = samples.unwrap_or(ctx.config.mc_samples);
            montecarlo::simulate(ctx, &contract.contract(), samples, seed, antithetic, out)
        }
        Commands::McParallel {
            contract,
            samples,
            workers,
            seed,
        } => {
            let samples = samples.unwrap_or(ctx.config.mc_samples);
            let workers = workers.unwrap_or(ctx.config.workers);
            montecarlo::simulate_parallel(ctx, &contract.contract(), samples, workers, seed, out)
        }
        Commands::Iv {
            contract,
            market_price,
            tolerance,
            max_iterations,
        } => {
            let tolerance = tolerance.unwrap_or(ctx.config.iv_tolerance);
            let max_iterations = max_iterations.unwrap_or(ctx.config.iv_max_iterations);
            implied::solve(
                ctx,
                &contract.contract(),
                market_price,
                tolerance,
                max_iterations,
                out,
            )
        }
        Commands::Batch { input, output } => batch::analytic(ctx, &input, &output, out),
        Commands::BatchMc {
            input,
            output,
            samples,
            seed,
        } => {
            let samples = samples.unwrap_or(ctx.config.mc_samples);
            batch::monte_carlo(ctx, &input, &output, samples, seed, out)
        }
        Commands::Template { output } => batch::template(ctx, &output, out),
        Commands::Validate { input, output } => batch::validate(ctx, &input, &output, out),
        Commands::Histogram {
            contract,
            samples,
            seed,
            bins,
        } => {
            let bins = bins.unwrap_or(ctx.config.histogram_bins);
            montecarlo::histogram(ctx, &contract.contract(), samples, seed, bins, out)
        }
        Commands::Selftest => selftest::run(ctx, out),
        Commands::Log { action } => match action {
            LogAction::Show { lines } => journal::show(ctx, lines, out),
            LogAction::Clear { yes } => journal::clear(ctx, yes, out),
            LogAction::Export { output } => journal::export_log(ctx, &output, out),
        },
        Commands::History { action } => match action {
            HistoryAction::Export { output } => journal::export_history(ctx, &output, out),
        },
    }
}
