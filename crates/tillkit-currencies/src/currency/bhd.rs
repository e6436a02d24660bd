//! Bahraini dinar (BHD).
//!
//! One of the three-decimal currencies: a dinar is a thousand fils, and the
//! smallest coin is 5 fils.

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SubsidiaryUnit, SymbolPlacement};

/// Six coins and eight bills, 0.005 minimum cash unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "BHD",
        dec!(0.005),
        vec![
            Face::coin(dec!(0.005), "5 Fils Coin").with_local_name("5f"),
            Face::coin(dec!(0.01), "10 Fils Coin").with_local_name("10f"),
            Face::coin(dec!(0.025), "25 Fils Coin").with_local_name("25f"),
            Face::coin(dec!(0.05), "50 Fils Coin").with_local_name("50f"),
            Face::coin(dec!(0.1), "100 Fils Coin").with_local_name("100f"),
            Face::coin(dec!(0.5), "500 Fils Coin").with_local_name("500f"),
        ],
        vec![
            Face::bill(dec!(0.5), "BD 1/2 Bill").with_local_name("BD 1/2"),
            Face::bill(dec!(1), "BD 1 Bill").with_local_name("BD 1"),
            Face::bill(dec!(5), "BD 5 Bill").with_local_name("BD 5"),
            Face::bill(dec!(10), "BD 10 Bill").with_local_name("BD 10"),
            Face::bill(dec!(25), "BD 25 Bill").with_local_name("BD 25"),
            Face::bill(dec!(50), "BD 50 Bill").with_local_name("BD 50"),
            Face::bill(dec!(100), "BD 100 Bill").with_local_name("BD 100"),
            Face::bill(dec!(500), "BD 500 Bill").with_local_name("BD 500"),
        ],
    )
}

/// The fils, one thousandth of a dinar.
#[must_use]
pub fn subsidiary_units() -> Vec<SubsidiaryUnit> {
    vec![SubsidiaryUnit::new("Fils", None, dec!(0.001))]
}

/// International style: `BHD 1.500`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("BHD", SymbolPlacement::Prefix, 3).with_space()
}

/// Local style: `BD 1.500`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("BD", SymbolPlacement::Prefix, 3).with_space()
}
