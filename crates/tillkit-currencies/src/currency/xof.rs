//! West African CFA franc (XOF).
//!
//! Same shape as [XAF](crate::currency::xaf): the 500-franc value
//! circulates as both a coin and a bill.

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SymbolPlacement};

/// Eight coins and five bills, 1-franc minimum unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "XOF",
        dec!(1),
        vec![
            Face::coin(dec!(1), "1 Franc").with_local_name("1 CFA"),
            Face::coin(dec!(5), "5 Francs").with_local_name("5 CFA"),
            Face::coin(dec!(10), "10 Francs").with_local_name("10 CFA"),
            Face::coin(dec!(25), "25 Francs").with_local_name("25 CFA"),
            Face::coin(dec!(50), "50 Francs").with_local_name("50 CFA"),
            Face::coin(dec!(100), "100 Francs").with_local_name("100 CFA"),
            Face::coin(dec!(200), "200 Francs").with_local_name("200 CFA"),
            Face::coin(dec!(500), "500 Francs").with_local_name("500 CFA"),
        ],
        vec![
            Face::bill(dec!(500), "500 Francs").with_local_name("500 CFA"),
            Face::bill(dec!(1000), "1000 Francs").with_local_name("1000 CFA"),
            Face::bill(dec!(2000), "2000 Francs").with_local_name("2000 CFA"),
            Face::bill(dec!(5000), "5000 Francs").with_local_name("5000 CFA"),
            Face::bill(dec!(10000), "10000 Francs").with_local_name("10000 CFA"),
        ],
    )
}

/// International style: `XOF5,000`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("XOF", SymbolPlacement::Prefix, 0)
}

/// Local style: `5,000 CFA`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("CFA", SymbolPlacement::Postfix, 0).with_space()
}
