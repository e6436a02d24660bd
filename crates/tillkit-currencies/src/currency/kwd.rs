//! Kuwaiti dinar (KWD).
//!
//! Three-decimal currency with a 1-fils minimum unit; the quarter- and
//! half-dinar values circulate as bills.

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SubsidiaryUnit, SymbolPlacement};

/// Six coins and six bills, 0.001 minimum cash unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "KWD",
        dec!(0.001),
        vec![
            Face::coin(dec!(0.001), "1 Fils Coin").with_local_name("1f"),
            Face::coin(dec!(0.005), "5 Fils Coin").with_local_name("5f"),
            Face::coin(dec!(0.01), "10 Fils Coin").with_local_name("10f"),
            Face::coin(dec!(0.02), "20 Fils Coin").with_local_name("20f"),
            Face::coin(dec!(0.05), "50 Fils Coin").with_local_name("50f"),
            Face::coin(dec!(0.1), "100 Fils Coin").with_local_name("100f"),
        ],
        vec![
            Face::bill(dec!(0.25), "1/4 Dinar Bill").with_local_name("1/4 Dinar"),
            Face::bill(dec!(0.5), "1/2 Dinar Bill").with_local_name("1/2 Dinar"),
            Face::bill(dec!(1), "1 Dinar Bill").with_local_name("1 Dinar"),
            Face::bill(dec!(5), "5 Dinars Bill").with_local_name("5 Dinars"),
            Face::bill(dec!(10), "10 Dinars Bill").with_local_name("10 Dinars"),
            Face::bill(dec!(20), "20 Dinars Bill").with_local_name("20 Dinars"),
        ],
    )
}

/// The fils, one thousandth of a dinar.
#[must_use]
pub fn subsidiary_units() -> Vec<SubsidiaryUnit> {
    vec![SubsidiaryUnit::new("Fils", None, dec!(0.001))]
}

/// International style: `KWD 1.250`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("KWD", SymbolPlacement::Prefix, 3).with_space()
}

/// Local style: `1.250 Dinars`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("Dinars", SymbolPlacement::Postfix, 3).with_space()
}
