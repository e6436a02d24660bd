//! Omani rial (OMR).
//!
//! Three-decimal currency; the 100-baisa value circulates as a note.

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SubsidiaryUnit, SymbolPlacement};

/// Four coins and seven bills, 0.005 minimum cash unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "OMR",
        dec!(0.005),
        vec![
            Face::coin(dec!(0.005), "5 Baisa Coin").with_local_name("5b"),
            Face::coin(dec!(0.01), "10 Baisa Coin").with_local_name("10b"),
            Face::coin(dec!(0.025), "25 Baisa Coin").with_local_name("25b"),
            Face::coin(dec!(0.05), "50 Baisa Coin").with_local_name("50b"),
        ],
        vec![
            Face::bill(dec!(0.1), "100 Baisa Bill").with_local_name("100b"),
            Face::bill(dec!(0.5), "1/2 Rial Bill").with_local_name("1/2 Rial"),
            Face::bill(dec!(1), "1 Rial Bill").with_local_name("1 Rial"),
            Face::bill(dec!(5), "5 Rials Bill").with_local_name("5 Rials"),
            Face::bill(dec!(10), "10 Rials Bill").with_local_name("10 Rials"),
            Face::bill(dec!(20), "20 Rials Bill").with_local_name("20 Rials"),
            Face::bill(dec!(50), "50 Rials Bill").with_local_name("50 Rials"),
        ],
    )
}

/// The baisa, one thousandth of a rial.
#[must_use]
pub fn subsidiary_units() -> Vec<SubsidiaryUnit> {
    vec![SubsidiaryUnit::new("Baisa", None, dec!(0.001))]
}

/// International style: `OMR 1.500`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("OMR", SymbolPlacement::Prefix, 3).with_space()
}

/// Local style: `1.500 Rials`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("Rials", SymbolPlacement::Postfix, 3).with_space()
}
