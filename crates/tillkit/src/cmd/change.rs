//! Implementation of `till change`.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::process::ExitCode;
use tillkit_codec::parse_cash_counts;
use tillkit_core::{CashInventory, CashKind, ChangeCalculation};
use tillkit_currencies::{local_style_for, CurrencyCode};

use crate::cmd::{resolve_catalog, OutputFormat};

/// Compute a change breakdown against a till's stock.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Currency code (e.g. JPY, USD)
    #[arg(short, long)]
    pub currency: String,

    /// Till stock as a cash-count string (`coins;bills`)
    #[arg(short, long, default_value = "")]
    pub stock: String,

    /// Amount of change to pay out
    pub amount: Decimal,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// One face line of a change report.
#[derive(Debug, Serialize)]
struct JsonEntry {
    /// Face value
    value: Decimal,
    /// Coin or Bill
    kind: CashKind,
    /// How many to dispense (or how many are missing)
    count: i64,
}

/// JSON output structure for the change report.
#[derive(Debug, Serialize)]
struct JsonReport {
    currency: CurrencyCode,
    amount: Decimal,
    is_success: bool,
    payable: Vec<JsonEntry>,
    remaining_amount: Decimal,
    missing: Vec<JsonEntry>,
}

fn json_entries(inventory: &CashInventory) -> Vec<JsonEntry> {
    inventory
        .non_zero_entries()
        .map(|(face, count)| JsonEntry {
            value: face.value(),
            kind: face.kind(),
            count,
        })
        .collect()
}

/// Run the change command.
pub fn run(args: &Args) -> Result<ExitCode> {
    let (code, catalog) = resolve_catalog(&args.currency)?;
    let till = parse_cash_counts(&catalog, &args.stock);
    tracing::debug!(currency = %code, stock = %till.total_amount(), "till loaded");

    let result = till.calculate_change_detail(args.amount);

    match args.format {
        OutputFormat::Text => print_text(code, args.amount, &result),
        OutputFormat::Json => {
            let report = JsonReport {
                currency: code,
                amount: args.amount,
                is_success: result.is_success(),
                payable: json_entries(&result.payable_change),
                remaining_amount: result.remaining_amount,
                missing: json_entries(&result.missing_change),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if result.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_text(code: CurrencyCode, amount: Decimal, result: &ChangeCalculation) {
    let style = local_style_for(code);
    println!("change for {}:", style.format(amount));

    if result.payable_change.is_empty() {
        println!("  (nothing payable from stock)");
    }
    for (face, count) in result.payable_change.non_zero_entries() {
        let name = face.local_name().unwrap_or_default();
        println!("  {count:>4} x {} {}  ({name})", face.value(), face.kind());
    }

    if result.is_success() {
        println!("payable in full");
    } else {
        println!("short by {}", style.format(result.remaining_amount));
        for (face, count) in result.missing_change.non_zero_entries() {
            println!("  missing {count} x {} {}", face.value(), face.kind());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_json_entries_skip_zeroes() {
        let (_, catalog) = resolve_catalog("JPY").unwrap();
        let till = parse_cash_counts(&catalog, "500:2;1000:0");
        let entries = json_entries(&till);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, dec!(500));
        assert_eq!(entries[0].count, 2);
    }

    #[test]
    fn test_report_serializes() {
        let (code, catalog) = resolve_catalog("JPY").unwrap();
        let till = parse_cash_counts(&catalog, "500:5;");
        let result = till.calculate_change_detail(dec!(1000));
        let report = JsonReport {
            currency: code,
            amount: dec!(1000),
            is_success: result.is_success(),
            payable: json_entries(&result.payable_change),
            remaining_amount: result.remaining_amount,
            missing: json_entries(&result.missing_change),
        };
        let text = serde_json::to_string(&report).unwrap();
        assert!(text.contains("\"is_success\":true"));
        assert!(text.contains("\"Coin\""));
    }
}
