//! Serializing an inventory to a cash-count string.

use tillkit_core::{CashInventory, CashKind};

use crate::ValueFormat;

/// Serialize an inventory with formats derived from its catalog's minimum
/// unit.
///
/// The output always enumerates every face the currency defines (coins
/// first, then bills, each in catalog order, count 0 when unstocked), so the
/// string has a fixed shape per currency.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use std::sync::Arc;
/// use tillkit_codec::write_cash_counts;
/// use tillkit_core::{Catalog, CashInventory, Face};
///
/// let catalog = Arc::new(Catalog::new(
///     "JPY",
///     dec!(1),
///     vec![Face::coin(dec!(100), "100 yen coin"), Face::coin(dec!(500), "500 yen coin")],
///     vec![Face::bill(dec!(1000), "1000 yen bill")],
/// ));
/// let mut till = CashInventory::new(catalog);
/// till.set_count(dec!(500), 3);
///
/// assert_eq!(write_cash_counts(&till), "100:0,500:3;1000:0");
/// ```
#[must_use]
pub fn write_cash_counts(inventory: &CashInventory) -> String {
    let format = ValueFormat::for_minimum_unit(inventory.catalog().minimum_unit(), false);
    write_cash_counts_with(inventory, &format, &format)
}

/// Serialize an inventory with explicit coin and bill value formats.
#[must_use]
pub fn write_cash_counts_with(
    inventory: &CashInventory,
    coin_format: &ValueFormat,
    bill_format: &ValueFormat,
) -> String {
    let section = |kind: CashKind, format: &ValueFormat| {
        inventory
            .entries()
            .filter(|(face, _)| face.kind() == kind)
            .map(|(face, count)| format!("{}:{count}", format.format(face.value())))
            .collect::<Vec<_>>()
            .join(",")
    };

    format!(
        "{};{}",
        section(CashKind::Coin, coin_format),
        section(CashKind::Bill, bill_format)
    )
}
