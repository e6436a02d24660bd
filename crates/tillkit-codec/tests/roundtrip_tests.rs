//! Round-trip properties for the cash-count codec.
//!
//! For any inventory built from known faces, parsing its serialized form
//! must reproduce the same per-face counts and hence the same total, coin,
//! and bill amounts.

use proptest::prelude::*;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tillkit_codec::{parse_cash_counts, validate_cash_counts, write_cash_counts};
use tillkit_core::{CashInventory, CashKind, Catalog, Face};

fn jpy() -> Arc<Catalog> {
    Arc::new(Catalog::new(
        "JPY",
        dec!(1),
        vec![
            Face::coin(dec!(1), "1 yen"),
            Face::coin(dec!(5), "5 yen"),
            Face::coin(dec!(10), "10 yen"),
            Face::coin(dec!(50), "50 yen"),
            Face::coin(dec!(100), "100 yen"),
            Face::coin(dec!(500), "500 yen"),
        ],
        vec![
            Face::bill(dec!(1000), "1000 yen"),
            Face::bill(dec!(2000), "2000 yen"),
            Face::bill(dec!(5000), "5000 yen"),
            Face::bill(dec!(10000), "10000 yen"),
        ],
    ))
}

fn cny_like() -> Arc<Catalog> {
    // Values issued as both coin and bill exercise the positional sections.
    Arc::new(Catalog::new(
        "CNY",
        dec!(0.01),
        vec![
            Face::coin(dec!(0.1), "1 jiao coin"),
            Face::coin(dec!(0.5), "5 jiao coin"),
            Face::coin(dec!(1), "1 yuan coin"),
        ],
        vec![
            Face::bill(dec!(0.1), "1 jiao note"),
            Face::bill(dec!(1), "1 yuan note"),
            Face::bill(dec!(10), "10 yuan note"),
            Face::bill(dec!(100), "100 yuan note"),
        ],
    ))
}

fn inventory_from(catalog: &Arc<Catalog>, counts: &[i64]) -> CashInventory {
    let mut inv = CashInventory::new(Arc::clone(catalog));
    let faces: Vec<_> = catalog
        .faces()
        .iter()
        .map(|f| (f.value(), f.kind()))
        .collect();
    for ((value, kind), &n) in faces.into_iter().zip(counts) {
        inv.set_count_of(value, kind, n);
    }
    inv
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Parse(Write(x)) reproduces every count, including negatives.
    #[test]
    fn prop_roundtrip_jpy(counts in prop::collection::vec(-20i64..2000, 10)) {
        let catalog = jpy();
        let original = inventory_from(&catalog, &counts);

        let parsed = parse_cash_counts(&catalog, &write_cash_counts(&original));
        prop_assert_eq!(&parsed, &original);
        prop_assert_eq!(parsed.total_amount(), original.total_amount());
        prop_assert_eq!(parsed.coin_amount(), original.coin_amount());
        prop_assert_eq!(parsed.bill_amount(), original.bill_amount());
    }

    /// Round-trip preserves the coin/bill distinction for values issued as
    /// both kinds.
    #[test]
    fn prop_roundtrip_dual_kind(counts in prop::collection::vec(0i64..100, 7)) {
        let catalog = cny_like();
        let original = inventory_from(&catalog, &counts);

        let parsed = parse_cash_counts(&catalog, &write_cash_counts(&original));
        prop_assert_eq!(
            parsed.count_of(dec!(1), CashKind::Coin),
            original.count_of(dec!(1), CashKind::Coin)
        );
        prop_assert_eq!(
            parsed.count_of(dec!(1), CashKind::Bill),
            original.count_of(dec!(1), CashKind::Bill)
        );
        prop_assert_eq!(parsed, original);
    }

    /// The serializer's output is always clean apart from negative-count
    /// advisories.
    #[test]
    fn prop_written_form_validates(counts in prop::collection::vec(0i64..2000, 10)) {
        let catalog = jpy();
        let inventory = inventory_from(&catalog, &counts);

        let warnings = validate_cash_counts(&catalog, &write_cash_counts(&inventory));
        prop_assert!(warnings.is_empty());
    }
}

#[test]
fn roundtrip_overlapping_kinds_exact_counts() {
    let catalog = cny_like();
    let mut original = CashInventory::new(Arc::clone(&catalog));
    original.set_count_of(dec!(1), CashKind::Coin, 2);
    original.set_count_of(dec!(1), CashKind::Bill, 3);

    let text = write_cash_counts(&original);
    assert_eq!(text, "0.1:0,0.5:0,1:2;0.1:0,1:3,10:0,100:0");

    let parsed = parse_cash_counts(&catalog, &text);
    assert_eq!(parsed, original);
}

#[test]
fn malformed_entries_roundtrip_to_partial_inventory() {
    // A stray bad entry must not poison the load.
    let catalog = cny_like();
    let till = parse_cash_counts(&catalog, "abc:1,0.5:3");
    assert_eq!(till.count(dec!(0.5)), 3);
    assert_eq!(till.total_amount(), dec!(1.5));

    let warnings = validate_cash_counts(&catalog, "abc:1,0.5:3");
    assert_eq!(warnings.len(), 1);
}
