//! Implementation of `till check`.

use anyhow::Result;
use serde::Serialize;
use std::process::ExitCode;
use tillkit_codec::validate_cash_counts;
use tillkit_currencies::CurrencyCode;

use crate::cmd::{resolve_catalog, OutputFormat};

/// Validate a cash-count string and report warnings.
///
/// Validation is advisory: the parser accepts any input and skips what it
/// cannot read, so this command succeeds even when warnings are found
/// unless `--strict` is given.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Currency code (e.g. JPY, USD)
    #[arg(short, long)]
    pub currency: String,

    /// The cash-count string to validate
    pub counts: String,

    /// Exit non-zero when any warning is found
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// JSON output structure for validation results.
#[derive(Debug, Serialize)]
struct JsonValidation {
    currency: CurrencyCode,
    warning_count: usize,
    warnings: Vec<String>,
}

/// Run the check command.
pub fn run(args: &Args) -> Result<ExitCode> {
    let (code, catalog) = resolve_catalog(&args.currency)?;
    let warnings = validate_cash_counts(&catalog, &args.counts);

    match args.format {
        OutputFormat::Text => {
            for warning in &warnings {
                println!("warning: {warning}");
            }
            if warnings.is_empty() {
                println!("no warnings");
            } else {
                println!("{} warning(s)", warnings.len());
            }
        }
        OutputFormat::Json => {
            let output = JsonValidation {
                currency: code,
                warning_count: warnings.len(),
                warnings: warnings.iter().map(ToString::to_string).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    if args.strict && !warnings.is_empty() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
