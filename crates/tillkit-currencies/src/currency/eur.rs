//! Euro (EUR).

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SymbolPlacement};

/// Eight coins and seven bills, cent minimum unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "EUR",
        dec!(0.01),
        vec![
            Face::coin(dec!(0.01), "1 Cent"),
            Face::coin(dec!(0.02), "2 Cents"),
            Face::coin(dec!(0.05), "5 Cents"),
            Face::coin(dec!(0.10), "10 Cents"),
            Face::coin(dec!(0.20), "20 Cents"),
            Face::coin(dec!(0.50), "50 Cents"),
            Face::coin(dec!(1.00), "1 Euro"),
            Face::coin(dec!(2.00), "2 Euros"),
        ],
        vec![
            Face::bill(dec!(5.00), "5 Euro Bill"),
            Face::bill(dec!(10.00), "10 Euro Bill"),
            Face::bill(dec!(20.00), "20 Euro Bill"),
            Face::bill(dec!(50.00), "50 Euro Bill"),
            Face::bill(dec!(100.00), "100 Euro Bill"),
            Face::bill(dec!(200.00), "200 Euro Bill"),
            Face::bill(dec!(500.00), "500 Euro Bill"),
        ],
    )
}

/// International style: `EUR 1,234.56`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("EUR", SymbolPlacement::Prefix, 2).with_space()
}

/// Local style, continental separators: `1.234,56 €`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("€", SymbolPlacement::Postfix, 2)
        .with_separators(".", ",")
        .with_space()
}
