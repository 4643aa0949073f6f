//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pricer_models::instruments::{OptionContract, OptionType};

/// Black-Scholes-Merton pricing engine CLI
#[derive(Debug, Parser)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (debug-level logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "bsm.toml")]
    pub config: PathBuf,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Journal file override
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Session history file override
    #[arg(long, global = true)]
    pub history_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Contract parameters shared by single-contract commands.
#[derive(Debug, Clone, Args)]
pub struct ContractArgs {
    /// Payoff type: EUROPEAN_CALL, EUROPEAN_PUT, BINARY_CALL or DIGITAL_PUT
    #[arg(short = 't', long = "type", value_parser = parse_option_type)]
    pub option_type: OptionType,

    /// Spot price S
    #[arg(long)]
    pub spot: f64,

    /// Strike K
    #[arg(long)]
    pub strike: f64,

    /// Continuously-compounded risk-free rate r
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Volatility sigma
    #[arg(long)]
    pub sigma: f64,

    /// Time to maturity T in years
    #[arg(long)]
    pub expiry: f64,

    /// Continuous dividend yield q
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub dividend: f64,
}

impl ContractArgs {
    /// Builds the contract described by the flags.
    pub fn contract(&self) -> OptionContract {
        OptionContract::new(
            self.option_type,
            self.spot,
            self.strike,
            self.rate,
            self.sigma,
            self.expiry,
            self.dividend,
        )
    }
}

fn parse_option_type(s: &str) -> Result<OptionType, String> {
    s.parse().map_err(|e| format!("{e}"))
}

/// Output format for the price command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analytic price with Greeks
    Price {
        #[command(flatten)]
        contract: ContractArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Analytic Greeks only
    Greeks {
        #[command(flatten)]
        contract: ContractArgs,
    },

    /// Monte Carlo price (single-threaded)
    Mc {
        #[command(flatten)]
        contract: ContractArgs,

        /// Number of samples (pairs when antithetic); defaults to config
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Seed, 0 for unpredictable
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Use antithetic variates
        #[arg(long)]
        antithetic: bool,
    },

    /// Monte Carlo price split across parallel workers
    McParallel {
        #[command(flatten)]
        contract: ContractArgs,

        /// Total number of samples; defaults to config
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Worker count; defaults to config
        #[arg(short, long)]
        workers: Option<usize>,

        /// Base seed, 0 for unpredictable
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Implied volatility from a market price
    Iv {
        #[command(flatten)]
        contract: ContractArgs,

        /// Observed market price
        #[arg(short, long)]
        market_price: f64,

        /// Pricing tolerance; defaults to config
        #[arg(long)]
        tolerance: Option<f64>,

        /// Iteration cap; defaults to config
        #[arg(long)]
        max_iterations: Option<usize>,
    },

    /// Analytic prices for every contract in a CSV file
    Batch {
        /// Input contract CSV
        #[arg(short, long, default_value = "options.csv")]
        input: PathBuf,

        /// Output results CSV
        #[arg(short, long, default_value = "results.csv")]
        output: PathBuf,
    },

    /// Monte Carlo prices for every contract in a CSV file
    BatchMc {
        /// Input contract CSV
        #[arg(short, long, default_value = "options.csv")]
        input: PathBuf,

        /// Output results CSV
        #[arg(short, long, default_value = "mc_results.csv")]
        output: PathBuf,

        /// Samples per contract; defaults to config
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Base seed; row i uses seed + i, 0 for unpredictable
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Write an example contract CSV
    Template {
        /// Output path
        #[arg(short, long, default_value = "options_example.csv")]
        output: PathBuf,
    },

    /// Validate a contract CSV and write a repaired copy
    Validate {
        /// Contract CSV to check
        #[arg(short, long, default_value = "options.csv")]
        input: PathBuf,

        /// Repaired output, written only when bad lines are found
        #[arg(short, long, default_value = "options_repaired.csv")]
        output: PathBuf,
    },

    /// ASCII histogram of simulated terminal prices
    Histogram {
        #[command(flatten)]
        contract: ContractArgs,

        /// Number of simulated prices
        #[arg(short = 'n', long, default_value_t = 20_000)]
        samples: usize,

        /// Seed, 0 for unpredictable
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Bin count; defaults to config
        #[arg(short, long)]
        bins: Option<usize>,
    },

    /// Analytic, Monte Carlo and implied-volatility round trip on fixed contracts
    Selftest,

    /// Journal maintenance
    Log {
        #[command(subcommand)]
        action: LogAction,
    },

    /// Session history maintenance
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum LogAction {
    /// Print the last journal lines
    Show {
        /// Number of lines
        #[arg(short = 'n', long, default_value_t = 50)]
        lines: usize,
    },

    /// Truncate the journal
    Clear {
        /// Confirm truncation
        #[arg(long)]
        yes: bool,
    },

    /// Export the journal as CSV
    Export {
        /// Output path
        #[arg(short, long, default_value = "log_summary.csv")]
        output: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum HistoryAction {
    /// Export session history as CSV
    Export {
        /// Output path
        #[arg(short, long, default_value = "session_history.csv")]
        output: PathBuf,
    },
}
