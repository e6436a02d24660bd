//! Jordanian dinar (JOD).

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SubsidiaryUnit, SymbolPlacement};

/// Five coins and five bills, one-piastre (0.010) minimum cash unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "JOD",
        dec!(0.010),
        vec![
            Face::coin(dec!(0.01), "1 Piastre Coin").with_local_name("1p"),
            Face::coin(dec!(0.05), "5 Piastres Coin").with_local_name("5p"),
            Face::coin(dec!(0.1), "10 Piastres Coin").with_local_name("10p"),
            Face::coin(dec!(0.25), "1/4 Dinar Coin").with_local_name("1/4 Dinar"),
            Face::coin(dec!(0.5), "1/2 Dinar Coin").with_local_name("1/2 Dinar"),
        ],
        vec![
            Face::bill(dec!(1), "1 Dinar Bill").with_local_name("1 Dinar"),
            Face::bill(dec!(5), "5 Dinars Bill").with_local_name("5 Dinars"),
            Face::bill(dec!(10), "10 Dinars Bill").with_local_name("10 Dinars"),
            Face::bill(dec!(25), "25 Dinars Bill").with_local_name("25 Dinars"),
            Face::bill(dec!(50), "50 Dinars Bill").with_local_name("50 Dinars"),
        ],
    )
}

/// The piastre (qirsh), one hundredth of a dinar.
#[must_use]
pub fn subsidiary_units() -> Vec<SubsidiaryUnit> {
    vec![SubsidiaryUnit::new("Piastres", None, dec!(0.010))]
}

/// International style: `JOD 5.000`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("JOD", SymbolPlacement::Prefix, 3).with_space()
}

/// Local style: `5.000 Dinars`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("Dinars", SymbolPlacement::Postfix, 3).with_space()
}
