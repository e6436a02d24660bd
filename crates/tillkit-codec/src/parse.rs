//! Tolerant parsing of cash-count strings.

use rust_decimal::Decimal;
use std::sync::Arc;
use tillkit_core::{CashInventory, CashKind, Catalog};

/// Pair each string section with the face kind it is resolved against.
///
/// Sections are positional: the first is always the coin section and the
/// second the bill section. Anything past the second `;` is ignored.
pub(crate) fn sections(text: &str) -> impl Iterator<Item = (CashKind, &str)> {
    [CashKind::Coin, CashKind::Bill]
        .into_iter()
        .zip(text.split(';'))
}

/// Split an entry into `(value, count)` texts, or `None` on wrong arity.
pub(crate) fn split_entry(entry: &str) -> Option<(&str, &str)> {
    let mut parts = entry.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(value), Some(count), None) => Some((value.trim(), count.trim())),
        _ => None,
    }
}

/// Trimmed, non-empty entries of one section.
pub(crate) fn entries(section: &str) -> impl Iterator<Item = &str> {
    section.split(',').map(str::trim).filter(|e| !e.is_empty())
}

/// Parse a cash-count string into a fresh inventory over `catalog`.
///
/// The parser is best-effort and never fails: entries with the wrong shape,
/// an unparsable value or count, or a value with no matching face for the
/// section's kind are silently skipped. Valid entries overwrite the stored
/// count (they do not accumulate), and negative counts are accepted.
///
/// Face kinds are assigned by section position, not by where the catalog
/// actually records the value: a value listed in the bill section is looked
/// up among bills only. This mirrors the device wire format and is
/// intentionally asymmetric with the exact-key write path.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use std::sync::Arc;
/// use tillkit_codec::parse_cash_counts;
/// use tillkit_core::{Catalog, Face};
///
/// let catalog = Arc::new(Catalog::new(
///     "JPY",
///     dec!(1),
///     vec![Face::coin(dec!(100), "100 yen coin"), Face::coin(dec!(500), "500 yen coin")],
///     vec![Face::bill(dec!(1000), "1000 yen bill")],
/// ));
///
/// let till = parse_cash_counts(&catalog, "500:1,100:2;1000:3");
/// assert_eq!(till.total_amount(), dec!(3700));
/// ```
#[must_use]
pub fn parse_cash_counts(catalog: &Arc<Catalog>, text: &str) -> CashInventory {
    let mut inventory = CashInventory::new(Arc::clone(catalog));
    for (kind, section) in sections(text) {
        for entry in entries(section) {
            let Some((value_text, count_text)) = split_entry(entry) else {
                continue;
            };
            let (Ok(value), Ok(count)) = (
                value_text.parse::<Decimal>(),
                count_text.parse::<i64>(),
            ) else {
                continue;
            };
            if catalog.face_of(value, kind).is_some() {
                inventory.set_count_of(value, kind, count);
            }
        }
    }
    inventory
}

/// Parse a device's supported-denomination list (`"1,5,10;1000,5000"`).
///
/// Same sectioning as the cash-count format, values only; unparsable values
/// are skipped. Returns the coin and bill value lists.
#[must_use]
pub fn parse_device_cash_list(text: &str) -> (Vec<Decimal>, Vec<Decimal>) {
    let mut coins = Vec::new();
    let mut bills = Vec::new();
    for (kind, section) in sections(text) {
        let values = match kind {
            CashKind::Coin => &mut coins,
            CashKind::Bill => &mut bills,
        };
        values.extend(entries(section).filter_map(|e| e.parse::<Decimal>().ok()));
    }
    (coins, bills)
}
