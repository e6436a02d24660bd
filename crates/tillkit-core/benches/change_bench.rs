//! Change engine performance benchmarks.
//!
//! Run with: cargo bench -p tillkit-core

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tillkit_core::{Catalog, CashInventory, Face, StockPolicy};

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

/// A well-stocked till.
fn stocked_till(catalog: &Arc<Catalog>) -> CashInventory {
    let mut till = CashInventory::new(Arc::clone(catalog));
    for face in catalog.faces() {
        till.set_count_of(face.value(), face.kind(), 100);
    }
    till
}

fn bench_breakdown(c: &mut Criterion) {
    let catalog = jpy();
    let till = stocked_till(&catalog);
    let mut group = c.benchmark_group("breakdown");

    for amount in [987i64, 16_980, 999_999] {
        let amount = Decimal::from(amount);

        group.bench_with_input(
            BenchmarkId::new("constrained", amount),
            &amount,
            |b, &amount| {
                b.iter(|| black_box(till.breakdown(amount, StockPolicy::Constrained)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("unlimited", amount),
            &amount,
            |b, &amount| {
                b.iter(|| black_box(till.breakdown(amount, StockPolicy::Unlimited)));
            },
        );
    }

    group.finish();
}

fn bench_change_detail(c: &mut Criterion) {
    let catalog = jpy();
    let till = stocked_till(&catalog);

    c.bench_function("calculate_change_detail", |b| {
        b.iter(|| black_box(till.calculate_change_detail(dec!(16_980))));
    });
}

fn bench_totals(c: &mut Criterion) {
    let catalog = jpy();
    let till = stocked_till(&catalog);

    c.bench_function("total_amount", |b| {
        b.iter(|| black_box(till.total_amount()));
    });
}

criterion_group!(benches, bench_breakdown, bench_change_detail, bench_totals);
criterion_main!(benches);
