//! Australian dollar (AUD).
//!
//! One- and two-cent coins were withdrawn in 1992, so the minimum cash unit
//! is five cents even though prices are quoted to the cent; totals are
//! rounded with [`Catalog::round_to_minimum_unit`](tillkit_core::Catalog).

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SubsidiaryUnit, SymbolPlacement};

/// Six coins and five bills, 0.05 minimum cash unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "AUD",
        dec!(0.05),
        vec![
            Face::coin(dec!(0.05), "5 ¢ Coin").with_local_name("5 Cent"),
            Face::coin(dec!(0.10), "10 ¢ Coin").with_local_name("10 Cent"),
            Face::coin(dec!(0.20), "20 ¢ Coin").with_local_name("20 Cent"),
            Face::coin(dec!(0.50), "50 ¢ Coin").with_local_name("50 Cent"),
            Face::coin(dec!(1.00), "$ 1 Coin").with_local_name("1 Dollar"),
            Face::coin(dec!(2.00), "$ 2 Coin").with_local_name("2 Dollar"),
        ],
        vec![
            Face::bill(dec!(5.00), "$ 5 Bill").with_local_name("5 Dollar"),
            Face::bill(dec!(10.00), "$ 10 Bill").with_local_name("10 Dollar"),
            Face::bill(dec!(20.00), "$ 20 Bill").with_local_name("20 Dollar"),
            Face::bill(dec!(50.00), "$ 50 Bill").with_local_name("50 Dollar"),
            Face::bill(dec!(100.00), "$ 100 Bill").with_local_name("100 Dollar"),
        ],
    )
}

/// The cent survives as an accounting unit.
#[must_use]
pub fn subsidiary_units() -> Vec<SubsidiaryUnit> {
    vec![SubsidiaryUnit::new("Cent", Some("c"), dec!(0.01))]
}

/// International style: `AUD99.95`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("AUD", SymbolPlacement::Prefix, 2)
}

/// Local style: `A$99.95`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("A$", SymbolPlacement::Prefix, 2)
}
