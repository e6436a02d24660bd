//! Pound sterling (GBP).

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SymbolPlacement};

/// Eight coins and four notes, penny minimum unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "GBP",
        dec!(0.01),
        vec![
            Face::coin(dec!(0.01), "1 Penny").with_local_name("One Penny"),
            Face::coin(dec!(0.02), "2 Pence").with_local_name("Two Pence"),
            Face::coin(dec!(0.05), "5 Pence").with_local_name("Five Pence"),
            Face::coin(dec!(0.10), "10 Pence").with_local_name("Ten Pence"),
            Face::coin(dec!(0.20), "20 Pence").with_local_name("Twenty Pence"),
            Face::coin(dec!(0.50), "50 Pence").with_local_name("Fifty Pence"),
            Face::coin(dec!(1.00), "1 Pound Coin").with_local_name("One Pound Coin"),
            Face::coin(dec!(2.00), "2 Pound Coin").with_local_name("Two Pound Coin"),
        ],
        vec![
            Face::bill(dec!(5.00), "5 Pound Note").with_local_name("Five Pound Note"),
            Face::bill(dec!(10.00), "10 Pound Note").with_local_name("Ten Pound Note"),
            Face::bill(dec!(20.00), "20 Pound Note").with_local_name("Twenty Pound Note"),
            Face::bill(dec!(50.00), "50 Pound Note").with_local_name("Fifty Pound Note"),
        ],
    )
}

/// International style: `GBP 12.34`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("GBP", SymbolPlacement::Prefix, 2).with_space()
}

/// Local style: `£12.34`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("£", SymbolPlacement::Prefix, 2)
}
