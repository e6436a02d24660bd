//! Implementation of `till total`.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::process::ExitCode;
use tillkit_codec::{parse_cash_counts, write_cash_counts};
use tillkit_currencies::{local_style_for, style_for, CurrencyCode};

use crate::cmd::{resolve_catalog, OutputFormat};

/// Total, coin, and bill amounts of a cash-count string.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Currency code (e.g. JPY, USD)
    #[arg(short, long)]
    pub currency: String,

    /// The cash-count string to total
    pub counts: String,

    /// Use the regional display style instead of the international one
    #[arg(long)]
    pub local: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// JSON output structure for till totals.
#[derive(Debug, Serialize)]
struct JsonTotals {
    currency: CurrencyCode,
    total_amount: Decimal,
    coin_amount: Decimal,
    bill_amount: Decimal,
    /// The parsed inventory re-serialized in its canonical fixed shape.
    cash_counts: String,
}

/// Run the total command.
pub fn run(args: &Args) -> Result<ExitCode> {
    let (code, catalog) = resolve_catalog(&args.currency)?;
    let till = parse_cash_counts(&catalog, &args.counts);

    match args.format {
        OutputFormat::Text => {
            let style = if args.local {
                local_style_for(code)
            } else {
                style_for(code)
            };
            println!("total: {}", style.format(till.total_amount()));
            println!("coins: {}", style.format(till.coin_amount()));
            println!("bills: {}", style.format(till.bill_amount()));
        }
        OutputFormat::Json => {
            let totals = JsonTotals {
                currency: code,
                total_amount: till.total_amount(),
                coin_amount: till.coin_amount(),
                bill_amount: till.bill_amount(),
                cash_counts: write_cash_counts(&till),
            };
            println!("{}", serde_json::to_string_pretty(&totals)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_totals_from_counts() {
        let (code, catalog) = resolve_catalog("JPY").unwrap();
        let till = parse_cash_counts(&catalog, "500:1,100:2;1000:3");
        let totals = JsonTotals {
            currency: code,
            total_amount: till.total_amount(),
            coin_amount: till.coin_amount(),
            bill_amount: till.bill_amount(),
            cash_counts: write_cash_counts(&till),
        };
        assert_eq!(totals.total_amount, dec!(3700));
        assert_eq!(totals.coin_amount, dec!(700));
        assert_eq!(totals.bill_amount, dec!(3000));
        assert_eq!(
            totals.cash_counts,
            "1:0,5:0,10:0,50:0,100:2,500:1;1000:3,2000:0,5000:0,10000:0"
        );
    }
}
