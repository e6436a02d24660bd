//! Swiss franc (CHF).

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SubsidiaryUnit, SymbolPlacement};

/// Seven coins and six bills, 0.05 minimum cash unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "CHF",
        dec!(0.05),
        vec![
            Face::coin(dec!(0.05), "5 Rappen").with_local_name("CHF 0.05"),
            Face::coin(dec!(0.10), "10 Rappen").with_local_name("CHF 0.10"),
            Face::coin(dec!(0.20), "20 Rappen").with_local_name("CHF 0.20"),
            Face::coin(dec!(0.50), "1/2 Franc").with_local_name("CHF 1/2"),
            Face::coin(dec!(1.00), "1 Franc").with_local_name("CHF 1.--"),
            Face::coin(dec!(2.00), "2 Francs").with_local_name("CHF 2.--"),
            Face::coin(dec!(5.00), "5 Francs").with_local_name("CHF 5.--"),
        ],
        vec![
            Face::bill(dec!(10.00), "CHF 10 Bill").with_local_name("CHF 10"),
            Face::bill(dec!(20.00), "CHF 20 Bill").with_local_name("CHF 20"),
            Face::bill(dec!(50.00), "CHF 50 Bill").with_local_name("CHF 50"),
            Face::bill(dec!(100.00), "CHF 100 Bill").with_local_name("CHF 100"),
            Face::bill(dec!(200.00), "CHF 200 Bill").with_local_name("CHF 200"),
            Face::bill(dec!(1000.00), "CHF 1000 Bill").with_local_name("CHF 1000"),
        ],
    )
}

/// The rappen (centime) accounting unit.
#[must_use]
pub fn subsidiary_units() -> Vec<SubsidiaryUnit> {
    vec![SubsidiaryUnit::new("Rappen", Some("R"), dec!(0.01))]
}

/// International style: `CHF 12.35`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("CHF", SymbolPlacement::Prefix, 2).with_space()
}

/// Local style with the customary dash fraction: `CHF 5.--`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("CHF", SymbolPlacement::Prefix, 2)
        .with_space()
        .with_zero_replacement("--")
}
