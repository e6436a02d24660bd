//! Implementation of `till currencies`.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::process::ExitCode;
use tillkit_currencies::{local_style_for, CurrencyCode, CurrencyRegistry};

use crate::cmd::OutputFormat;

/// List the built-in currency catalogs.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// JSON output structure for one currency.
#[derive(Debug, Serialize)]
struct JsonCurrency {
    code: CurrencyCode,
    numeric: u16,
    name: &'static str,
    symbol: String,
    minimum_unit: Decimal,
    coins: usize,
    bills: usize,
}

/// Run the currencies command.
pub fn run(args: &Args) -> Result<ExitCode> {
    let registry = CurrencyRegistry::with_defaults();
    let rows: Vec<JsonCurrency> = registry
        .codes()
        .into_iter()
        .filter_map(|code| {
            let catalog = registry.get(code)?;
            Some(JsonCurrency {
                code,
                numeric: code.numeric(),
                name: code.name(),
                symbol: local_style_for(code).symbol().to_string(),
                minimum_unit: catalog.minimum_unit(),
                coins: catalog.coins().count(),
                bills: catalog.bills().count(),
            })
        })
        .collect();

    match args.format {
        OutputFormat::Text => {
            for row in &rows {
                println!(
                    "{} {:>4}  {:<24} {:>6}  min {:<6} {} coins, {} bills",
                    row.code,
                    row.numeric,
                    row.name,
                    row.symbol,
                    row.minimum_unit.to_string(),
                    row.coins,
                    row.bills
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_all_builtins() {
        let registry = CurrencyRegistry::with_defaults();
        assert_eq!(registry.codes().len(), CurrencyCode::ALL.len());
    }
}
