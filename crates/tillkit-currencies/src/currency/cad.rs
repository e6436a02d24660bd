//! Canadian dollar (CAD).

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SymbolPlacement};

/// Five coins and five bills; the penny was withdrawn, so 0.05 is the
/// minimum cash unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "CAD",
        dec!(0.05),
        vec![
            Face::coin(dec!(0.05), "5 Cents").with_local_name("5¢"),
            Face::coin(dec!(0.10), "10 Cents").with_local_name("10¢"),
            Face::coin(dec!(0.25), "25 Cents").with_local_name("25¢"),
            Face::coin(dec!(1.00), "1 Dollar").with_local_name("$1"),
            Face::coin(dec!(2.00), "2 Dollars").with_local_name("$2"),
        ],
        vec![
            Face::bill(dec!(5), "5 Dollars").with_local_name("$5"),
            Face::bill(dec!(10), "10 Dollars").with_local_name("$10"),
            Face::bill(dec!(20), "20 Dollars").with_local_name("$20"),
            Face::bill(dec!(50), "50 Dollars").with_local_name("$50"),
            Face::bill(dec!(100), "100 Dollars").with_local_name("$100"),
        ],
    )
}

/// International style: `C$20.00`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("C$", SymbolPlacement::Prefix, 2)
}

/// Local style: `$20.00`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("$", SymbolPlacement::Prefix, 2)
}
