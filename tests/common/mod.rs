use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;

use report_core::domain::{
    PurchaseOrder, PurchaseOrderStatus, ReportRange, Sale, SaleReturn,
};

/// One quarter of storefront activity shared by the integration tests.
pub static QUARTER: Lazy<QuarterFixture> = Lazy::new(QuarterFixture::build);

pub struct QuarterFixture {
    pub sales: Vec<Sale>,
    pub returns: Vec<SaleReturn>,
    pub orders: Vec<PurchaseOrder>,
}

impl QuarterFixture {
    fn build() -> Self {
        Self {
            sales: vec![
                Sale::new(100_000.0, at(2024, 1, 8)),
                Sale::new(40_000.0, at(2024, 1, 22)),
                Sale::new(75_000.0, at(2024, 3, 5)),
            ],
            returns: vec![SaleReturn::new(5_000.0, at(2024, 3, 6))],
            orders: vec![
                PurchaseOrder::new(30_000.0, at(2024, 1, 10), PurchaseOrderStatus::Paid),
                PurchaseOrder::new(99_000.0, at(2024, 1, 11), PurchaseOrderStatus::Draft),
                PurchaseOrder::new(20_000.0, at(2024, 3, 7), PurchaseOrderStatus::Delivered),
            ],
        }
    }
}

pub fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Midday timestamp, exercising the day-boundary normalization.
pub fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    sample_date(y, m, d).and_hms_opt(12, 0, 0).unwrap().and_utc()
}

pub fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> ReportRange {
    ReportRange::new(
        Some(at(start.0, start.1, start.2)),
        Some(at(end.0, end.1, end.2)),
    )
    .expect("valid range")
}
