//! Indian rupee (INR).
//!
//! The 50-paise coin is the smallest circulating denomination, so the
//! minimum cash unit is half a rupee. The 10- and 20-rupee values circulate
//! as both coins and bills.

use rust_decimal_macros::dec;
use tillkit_core::{Catalog, Face};

use crate::{CurrencyStyle, SymbolPlacement};

/// Six coins and six bills, 0.50 minimum cash unit.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(
        "INR",
        dec!(0.50),
        vec![
            Face::coin(dec!(0.5), "50 Paise").with_local_name("₹1/2"),
            Face::coin(dec!(1), "1 Rupee Coin").with_local_name("₹1"),
            Face::coin(dec!(2), "2 Rupees Coin").with_local_name("₹2"),
            Face::coin(dec!(5), "5 Rupees Coin").with_local_name("₹5"),
            Face::coin(dec!(10), "10 Rupees Coin").with_local_name("₹10"),
            Face::coin(dec!(20), "20 Rupees Coin").with_local_name("₹20"),
        ],
        vec![
            Face::bill(dec!(10), "10 Rupees Bill").with_local_name("₹10"),
            Face::bill(dec!(20), "20 Rupees Bill").with_local_name("₹20"),
            Face::bill(dec!(50), "50 Rupees Bill").with_local_name("₹50"),
            Face::bill(dec!(100), "100 Rupees Bill").with_local_name("₹100"),
            Face::bill(dec!(200), "200 Rupees Bill").with_local_name("₹200"),
            Face::bill(dec!(500), "500 Rupees Bill").with_local_name("₹500"),
        ],
    )
}

/// International style: `₹1,500.00`.
#[must_use]
pub fn style() -> CurrencyStyle {
    CurrencyStyle::new("₹", SymbolPlacement::Prefix, 2)
}

/// Local style: `₹1,500.00`.
#[must_use]
pub fn local_style() -> CurrencyStyle {
    CurrencyStyle::new("₹", SymbolPlacement::Prefix, 2)
}
