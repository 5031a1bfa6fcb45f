//! rusty-rates CLI - EUR/USD rates for the last few days
//!
//! ## Example Usage
//!
//! ```bash
//! # Rates for today and yesterday
//! rusty-rates
//!
//! # Rates for the last 5 days, with request logging
//! rusty-rates 5 --verbose
//! ```

use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use rusty_rates::batch::RateBatch;
use rusty_rates::data::sources::{PrivatBankSource, SourceConfig};
use rusty_rates::dates::DEFAULT_DAYS;
use rusty_rates::error::RatesError;
use rusty_rates::runtime::{RuntimeConfig, RuntimeFlavor};
use std::process;
use std::time::Duration;

/// rusty-rates: historical EUR/USD exchange rates from PrivatBank
#[derive(Parser)]
#[command(name = "rusty-rates")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Robert Fall")]
#[command(about = "Historical EUR/USD exchange rates from the PrivatBank archive", long_about = None)]
struct Cli {
    /// Number of days to fetch, counting back from today (1-10)
    #[arg(value_name = "DAYS", default_value = DEFAULT_DAYS)]
    days: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Archive endpoint
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value = "30")]
    timeout: u64,

    /// Async scheduler (current-thread, multi-thread)
    #[arg(long, default_value = "current-thread")]
    runtime: RuntimeFlavor,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = SourceConfig {
        timeout: Duration::from_secs(cli.timeout),
        ..SourceConfig::default()
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    if cli.verbose {
        eprintln!(
            "{} v{} ({} runtime)",
            "rusty-rates".cyan().bold(),
            env!("CARGO_PKG_VERSION"),
            cli.runtime
        );
        eprintln!("Endpoint: {}", config.base_url.dimmed());
    }

    let runtime = RuntimeConfig::new(cli.runtime).build()?;
    let batch = RateBatch::new(PrivatBankSource::with_config(config));

    match runtime.block_on(batch.try_run(&cli.days)) {
        Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
        Err(RatesError::Validation(reason)) => {
            eprintln!("{} {}", "Warning:".yellow(), reason);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
