//! Cross-cutting checks over every built-in catalog, plus end-to-end
//! scenarios against the real tables.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;
use std::sync::Arc;
use tillkit_codec::parse_cash_counts;
use tillkit_core::{CashInventory, CashKind};
use tillkit_currencies::{catalog_for, currency, CurrencyCode, CurrencyRegistry};

#[test]
fn every_catalog_is_well_formed() {
    for code in CurrencyCode::ALL {
        let catalog = catalog_for(code);
        assert_eq!(catalog.code(), code.as_str());
        assert!(catalog.minimum_unit() > Decimal::ZERO, "{code}");
        assert!(!catalog.faces().is_empty(), "{code}");

        let mut seen = HashSet::new();
        for face in catalog.faces() {
            assert!(face.value() > Decimal::ZERO, "{code}: {face}");
            assert!(
                (face.value() % catalog.minimum_unit()).is_zero(),
                "{code}: {face} is not a multiple of the minimum unit"
            );
            assert!(face.name().is_some(), "{code}: {face} unnamed");
            assert!(
                seen.insert((face.value(), face.kind())),
                "{code}: duplicate face {face}"
            );
        }
    }
}

#[test]
fn every_catalog_has_coins() {
    for code in CurrencyCode::ALL {
        let catalog = catalog_for(code);
        assert!(catalog.coins().count() > 0, "{code}");
        assert!(catalog.bills().count() > 0, "{code}");
    }
}

#[test]
fn jpy_change_scenarios() {
    let catalog = Arc::new(currency::jpy::catalog());

    // Five 500-yen coins cover a 1000-yen change request.
    let mut till = CashInventory::new(Arc::clone(&catalog));
    till.set_count(dec!(500), 5);
    let result = till.calculate_change_detail(dec!(1000));
    assert!(result.is_success());
    assert_eq!(result.payable_change.count(dec!(500)), 2);
    assert_eq!(result.remaining_amount, Decimal::ZERO);

    // An empty till reports the whole ideal breakdown as missing.
    let empty = CashInventory::new(catalog);
    let result = empty.calculate_change_detail(dec!(1600));
    assert_eq!(result.payable_change.total_amount(), Decimal::ZERO);
    assert_eq!(result.remaining_amount, dec!(1600));
    assert_eq!(result.missing_change.count(dec!(1000)), 1);
    assert_eq!(result.missing_change.count(dec!(500)), 1);
    assert_eq!(result.missing_change.count(dec!(100)), 1);
}

#[test]
fn eur_change_uses_fractional_coins() {
    let catalog = Arc::new(currency::eur::catalog());
    let till = CashInventory::new(catalog);

    let result = till.calculate_change_detail(dec!(0.75));
    assert!(!result.is_success());
    assert_eq!(result.remaining_amount, dec!(0.75));
    assert_eq!(result.missing_change.count(dec!(0.5)), 1);
    assert_eq!(result.missing_change.count(dec!(0.2)), 1);
    assert_eq!(result.missing_change.count(dec!(0.05)), 1);
}

#[test]
fn inr_malformed_parse_keeps_valid_entries() {
    // The rupee's smallest coin is 0.5; a stray bad token must not poison
    // the load.
    let catalog = Arc::new(currency::inr::catalog());
    let till = parse_cash_counts(&catalog, "abc:1,0.5:3");
    assert_eq!(till.count(dec!(0.5)), 3);
    assert_eq!(till.total_amount(), dec!(1.5));
}

#[test]
fn cny_dual_kind_values_survive_round_trip() {
    let catalog = Arc::new(currency::cny::catalog());
    let mut till = CashInventory::new(Arc::clone(&catalog));
    till.set_count_of(dec!(1), CashKind::Coin, 2);
    till.set_count_of(dec!(1), CashKind::Bill, 3);

    let parsed = parse_cash_counts(&catalog, &tillkit_codec::write_cash_counts(&till));
    assert_eq!(parsed.count_of(dec!(1), CashKind::Coin), 2);
    assert_eq!(parsed.count_of(dec!(1), CashKind::Bill), 3);
    assert_eq!(parsed.total_amount(), dec!(5));
}

#[test]
fn usd_auto_detect_prefers_dollar_coin() {
    let catalog = catalog_for(CurrencyCode::USD);
    assert_eq!(catalog.face(dec!(1)).unwrap().kind(), CashKind::Coin);
    assert_eq!(
        catalog.face_of(dec!(1), CashKind::Bill).unwrap().name(),
        Some("One Dollar Bill")
    );
}

#[test]
fn aud_rounds_to_five_cents() {
    let catalog = catalog_for(CurrencyCode::AUD);
    assert_eq!(catalog.round_to_minimum_unit(dec!(99.99)), dec!(100.00));
    assert!(!catalog.is_rounded_to_minimum_unit(dec!(100.03)));
    assert!(catalog.is_rounded_to_minimum_unit(dec!(99.95)));
}

#[test]
fn bhd_three_decimal_change() {
    let registry = CurrencyRegistry::with_defaults();
    let mut till = registry.inventory(CurrencyCode::BHD).unwrap();
    till.set_count(dec!(0.025), 4);
    till.set_count(dec!(0.005), 10);

    let result = till.calculate_change_detail(dec!(0.115));
    assert!(result.is_success());
    assert_eq!(result.payable_change.count(dec!(0.025)), 4);
    assert_eq!(result.payable_change.count(dec!(0.005)), 3);
}

#[test]
fn styles_format_reference_amounts() {
    let cases = [
        (CurrencyCode::JPY, dec!(123456), "¥123,456", "123,456円"),
        (CurrencyCode::USD, dec!(19.99), "US$19.99", "$19.99"),
        (CurrencyCode::NOK, dec!(1500), "1,500 NOK", "1,500 kr"),
        (CurrencyCode::EUR, dec!(1234.56), "EUR 1,234.56", "1.234,56 €"),
        (CurrencyCode::KWD, dec!(1.25), "KWD 1.250", "1.250 Dinars"),
    ];
    for (code, amount, global, local) in cases {
        assert_eq!(currency::style_for(code).format(amount), global, "{code}");
        assert_eq!(
            currency::local_style_for(code).format(amount),
            local,
            "{code}"
        );
    }
}

#[test]
fn chf_local_style_uses_dash_fraction() {
    let style = currency::chf::local_style();
    assert_eq!(style.format(dec!(5)), "CHF 5.--");
    assert_eq!(style.format(dec!(5.20)), "CHF 5.20");
}

#[test]
fn subsidiary_units_where_defined() {
    assert_eq!(currency::aud::subsidiary_units()[0].ratio, dec!(0.01));
    assert_eq!(currency::bhd::subsidiary_units()[0].ratio, dec!(0.001));
    assert_eq!(currency::omr::subsidiary_units()[0].name, "Baisa");
}
