//! United States dollar (USD).
//!
//! The dollar exists as both a coin and a bill; the auto-detect lookup
//! resolves a bare 1.00 to the coin.

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SymbolPlacement};

/// Six coins and seven bills, cent minimum unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "USD",
        dec!(0.01),
        vec![
            Face::coin(dec!(0.01), "Penny"),
            Face::coin(dec!(0.05), "Nickel"),
            Face::coin(dec!(0.10), "Dime"),
            Face::coin(dec!(0.25), "Quarter"),
            Face::coin(dec!(0.50), "Half Dollar"),
            Face::coin(dec!(1.00), "Dollar Coin"),
        ],
        vec![
            Face::bill(dec!(1.00), "One Dollar Bill"),
            Face::bill(dec!(2.00), "Two Dollar Bill"),
            Face::bill(dec!(5.00), "Five Dollar Bill"),
            Face::bill(dec!(10.00), "Ten Dollar Bill"),
            Face::bill(dec!(20.00), "Twenty Dollar Bill"),
            Face::bill(dec!(50.00), "Fifty Dollar Bill"),
            Face::bill(dec!(100.00), "One Hundred Dollar Bill"),
        ],
    )
}

/// International style: `US$10.00`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("US$", SymbolPlacement::Prefix, 2)
}

/// Local style: `$10.00`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("$", SymbolPlacement::Prefix, 2)
}
