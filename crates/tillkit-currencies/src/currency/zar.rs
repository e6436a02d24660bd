//! South African rand (ZAR).

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SymbolPlacement};

/// Six coins and five bills, 0.10 minimum cash unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "ZAR",
        dec!(0.10),
        vec![
            Face::coin(dec!(0.10), "10 Cents").with_local_name("10c"),
            Face::coin(dec!(0.20), "20 Cents").with_local_name("20c"),
            Face::coin(dec!(0.50), "50 Cents").with_local_name("50c"),
            Face::coin(dec!(1.00), "1 Rand").with_local_name("R1"),
            Face::coin(dec!(2.00), "2 Rands").with_local_name("R2"),
            Face::coin(dec!(5.00), "5 Rands").with_local_name("R5"),
        ],
        vec![
            Face::bill(dec!(10), "10 Rands").with_local_name("R10"),
            Face::bill(dec!(20), "20 Rands").with_local_name("R20"),
            Face::bill(dec!(50), "50 Rands").with_local_name("R50"),
            Face::bill(dec!(100), "100 Rands").with_local_name("R100"),
            Face::bill(dec!(200), "200 Rands").with_local_name("R200"),
        ],
    )
}

/// International style: `ZAR100.00`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("ZAR", SymbolPlacement::Prefix, 2)
}

/// Local style: `R100.00`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("R", SymbolPlacement::Prefix, 2)
}
