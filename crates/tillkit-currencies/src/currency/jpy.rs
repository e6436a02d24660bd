//! Japanese yen (JPY).

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SymbolPlacement};

/// Six coins and four bills; the yen has no fractional unit in circulation.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "JPY",
        dec!(1),
        vec![
            Face::coin(dec!(1), "1 Yen Coin").with_local_name("一円玉"),
            Face::coin(dec!(5), "5 Yen Coin").with_local_name("五円玉"),
            Face::coin(dec!(10), "10 Yen Coin").with_local_name("十円玉"),
            Face::coin(dec!(50), "50 Yen Coin").with_local_name("五十円玉"),
            Face::coin(dec!(100), "100 Yen Coin").with_local_name("百円玉"),
            Face::coin(dec!(500), "500 Yen Coin").with_local_name("五百円玉"),
        ],
        vec![
            Face::bill(dec!(1000), "1000 Yen Bill").with_local_name("千円札"),
            Face::bill(dec!(2000), "2000 Yen Bill").with_local_name("二千円札"),
            Face::bill(dec!(5000), "5000 Yen Bill").with_local_name("五千円札"),
            Face::bill(dec!(10000), "10000 Yen Bill").with_local_name("一万円札"),
        ],
    )
}

/// International style: `¥1,000`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("¥", SymbolPlacement::Prefix, 0)
}

/// Local style: `1,000円`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("円", SymbolPlacement::Postfix, 0)
}
