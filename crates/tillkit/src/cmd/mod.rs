//! Command implementations for the till CLI.
//!
//! Each module contains the full implementation for one subcommand.

pub mod change;
pub mod check;
pub mod currencies;
pub mod total;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use std::sync::Arc;
use tillkit_core::Catalog;
use tillkit_currencies::{CurrencyCode, CurrencyRegistry};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "till",
    author,
    version,
    about = "Denomination inventory and change calculation tools"
)]
pub struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// The available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a change breakdown against a till's stock
    Change(change::Args),
    /// Total, coin, and bill amounts of a cash-count string
    Total(total::Args),
    /// Validate a cash-count string and report warnings
    Check(check::Args),
    /// List the built-in currency catalogs
    Currencies(currencies::Args),
}

/// Entry point shared by the `till` binary.
pub fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Change(args) => change::run(args),
        Command::Total(args) => total::run(args),
        Command::Check(args) => check::run(args),
        Command::Currencies(args) => currencies::run(args),
    };

    result.unwrap_or_else(|err| {
        eprintln!("error: {err:#}");
        ExitCode::FAILURE
    })
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve a currency code string to its registered catalog.
pub(crate) fn resolve_catalog(code: &str) -> Result<(CurrencyCode, Arc<Catalog>)> {
    let code: CurrencyCode = code
        .parse()
        .with_context(|| format!("cannot resolve currency `{code}`"))?;
    let registry = CurrencyRegistry::with_defaults();
    let catalog = registry
        .get(code)
        .cloned()
        .with_context(|| format!("currency {code} has no registered catalog"))?;
    Ok((code, catalog))
}
