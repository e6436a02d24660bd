//! Central African CFA franc (XAF).
//!
//! The 500-franc value circulates as both a coin and a bill.

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SymbolPlacement};

/// Nine coins and five bills, 1-franc minimum unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "XAF",
        dec!(1),
        vec![
            Face::coin(dec!(1), "1 Franc").with_local_name("1 FCFA"),
            Face::coin(dec!(2), "2 Francs").with_local_name("2 FCFA"),
            Face::coin(dec!(5), "5 Francs").with_local_name("5 FCFA"),
            Face::coin(dec!(10), "10 Francs").with_local_name("10 FCFA"),
            Face::coin(dec!(25), "25 Francs").with_local_name("25 FCFA"),
            Face::coin(dec!(50), "50 Francs").with_local_name("50 FCFA"),
            Face::coin(dec!(100), "100 Francs").with_local_name("100 FCFA"),
            Face::coin(dec!(200), "200 Francs").with_local_name("200 FCFA"),
            Face::coin(dec!(500), "500 Francs").with_local_name("500 FCFA"),
        ],
        vec![
            Face::bill(dec!(500), "500 Francs").with_local_name("500 FCFA"),
            Face::bill(dec!(1000), "1000 Francs").with_local_name("1000 FCFA"),
            Face::bill(dec!(2000), "2000 Francs").with_local_name("2000 FCFA"),
            Face::bill(dec!(5000), "5000 Francs").with_local_name("5000 FCFA"),
            Face::bill(dec!(10000), "10000 Francs").with_local_name("10000 FCFA"),
        ],
    )
}

/// International style: `XAF5,000`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("XAF", SymbolPlacement::Prefix, 0)
}

/// Local style: `5,000 FCFA`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("FCFA", SymbolPlacement::Postfix, 0).with_space()
}
