//! Chinese yuan renminbi (CNY).
//!
//! The 1-jiao, 5-jiao, and 1-yuan values circulate as both coins and notes;
//! the exact-key lookups keep them distinct while a bare value resolves to
//! the coin.

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SymbolPlacement};

/// Seven coins and eight notes, fen minimum unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "CNY",
        dec!(0.01),
        vec![
            Face::coin(dec!(0.01), "1 Fen Coin").with_local_name("1分硬币"),
            Face::coin(dec!(0.02), "2 Fen Coin").with_local_name("2分硬币"),
            Face::coin(dec!(0.05), "5 Fen Coin").with_local_name("5分硬币"),
            Face::coin(dec!(0.10), "1 Jiao Coin").with_local_name("1角硬币"),
            Face::coin(dec!(0.20), "2 Jiao Coin").with_local_name("2角硬币"),
            Face::coin(dec!(0.50), "5 Jiao Coin").with_local_name("5角硬币"),
            Face::coin(dec!(1.00), "1 Yuan Coin").with_local_name("1元硬币"),
        ],
        vec![
            Face::bill(dec!(0.10), "1 Jiao Note").with_local_name("1角券"),
            Face::bill(dec!(0.50), "5 Jiao Note").with_local_name("5角券"),
            Face::bill(dec!(1.00), "1 Yuan Note").with_local_name("1元券"),
            Face::bill(dec!(5.00), "5 Yuan Note").with_local_name("5元券"),
            Face::bill(dec!(10.00), "10 Yuan Note").with_local_name("10元券"),
            Face::bill(dec!(20.00), "20 Yuan Note").with_local_name("20元券"),
            Face::bill(dec!(50.00), "50 Yuan Note").with_local_name("50元券"),
            Face::bill(dec!(100.00), "100 Yuan Note").with_local_name("100元券"),
        ],
    )
}

/// International style: `CN¥15.33`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("CN¥", SymbolPlacement::Prefix, 2)
}

/// Local style: `¥15.33`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("¥", SymbolPlacement::Prefix, 2)
}
