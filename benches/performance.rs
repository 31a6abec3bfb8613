use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use report_core::core::ReportService;
use report_core::domain::{
    PurchaseOrder, PurchaseOrderStatus, ReportRange, Sale, SaleReturn,
};

fn build_sample_stores(record_count: usize) -> (Vec<Sale>, Vec<SaleReturn>, Vec<PurchaseOrder>) {
    let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let at = |idx: usize| {
        (start_date + Duration::days((idx % 365) as i64))
            .and_hms_opt(9, 0, 0)
            .unwrap()
            .and_utc()
    };

    let sales = (0..record_count)
        .map(|idx| Sale::new(50.0 + (idx % 100) as f64, at(idx)))
        .collect();
    let returns = (0..record_count / 10)
        .map(|idx| SaleReturn::new(10.0 + (idx % 40) as f64, at(idx)))
        .collect();
    let orders = (0..record_count / 5)
        .map(|idx| {
            let status = match idx % 4 {
                0 => PurchaseOrderStatus::Delivered,
                1 => PurchaseOrderStatus::Paid,
                2 => PurchaseOrderStatus::Submitted,
                _ => PurchaseOrderStatus::Draft,
            };
            PurchaseOrder::new(120.0 + (idx % 80) as f64, at(idx), status)
        })
        .collect();

    (sales, returns, orders)
}

fn bench_report_build(c: &mut Criterion) {
    let (sales, returns, orders) = build_sample_stores(black_box(10_000));
    let range = ReportRange::unbounded();

    c.bench_function("report_build_10k", |b| {
        b.iter(|| {
            ReportService::build(
                black_box(&sales),
                black_box(&returns),
                black_box(&orders),
                black_box(&range),
            )
        })
    });
}

criterion_group!(benches, bench_report_build);
criterion_main!(benches);
