//! Norwegian krone (NOK).
//!
//! Øre coins are withdrawn; the krone is the minimum cash unit and amounts
//! are formatted without decimals.

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SymbolPlacement};

/// Four coins and five bills, 1-krone minimum unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "NOK",
        dec!(1),
        vec![
            Face::coin(dec!(1), "1 Krone").with_local_name("1 kr"),
            Face::coin(dec!(5), "5 Kroner").with_local_name("5 kr"),
            Face::coin(dec!(10), "10 Kroner").with_local_name("10 kr"),
            Face::coin(dec!(20), "20 Kroner").with_local_name("20 kr"),
        ],
        vec![
            Face::bill(dec!(50), "50 Kroner").with_local_name("50 kr"),
            Face::bill(dec!(100), "100 Kroner").with_local_name("100 kr"),
            Face::bill(dec!(200), "200 Kroner").with_local_name("200 kr"),
            Face::bill(dec!(500), "500 Kroner").with_local_name("500 kr"),
            Face::bill(dec!(1000), "1000 Kroner").with_local_name("1000 kr"),
        ],
    )
}

/// International style: `500 NOK`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("NOK", SymbolPlacement::Postfix, 0).with_space()
}

/// Local style: `500 kr`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("kr", SymbolPlacement::Postfix, 0).with_space()
}
