//! Singapore dollar (SGD).

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SymbolPlacement};

/// Five coins and six bills, 0.05 minimum cash unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "SGD",
        dec!(0.05),
        vec![
            Face::coin(dec!(0.05), "5 Cents").with_local_name("5¢"),
            Face::coin(dec!(0.10), "10 Cents").with_local_name("10¢"),
            Face::coin(dec!(0.20), "20 Cents").with_local_name("20¢"),
            Face::coin(dec!(0.50), "50 Cents").with_local_name("50¢"),
            Face::coin(dec!(1.00), "1 Dollar").with_local_name("$1"),
        ],
        vec![
            Face::bill(dec!(2), "2 Dollars").with_local_name("$2"),
            Face::bill(dec!(5), "5 Dollars").with_local_name("$5"),
            Face::bill(dec!(10), "10 Dollars").with_local_name("$10"),
            Face::bill(dec!(50), "50 Dollars").with_local_name("$50"),
            Face::bill(dec!(100), "100 Dollars").with_local_name("$100"),
            Face::bill(dec!(1000), "1000 Dollars").with_local_name("$1000"),
        ],
    )
}

/// International style: `S$10.00`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("S$", SymbolPlacement::Prefix, 2)
}

/// Local style: `$10.00`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("$", SymbolPlacement::Prefix, 2)
}
