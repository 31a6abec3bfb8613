use chrono::{DateTime, Duration, Utc};

use crate::domain::common::CashEvent;
use crate::domain::period::{MonthKey, WeekWindow};
use crate::domain::range::start_of_day;
use crate::domain::record::{PurchaseOrder, Sale, SaleReturn};

/// Computes the weekly and monthly bucket sets spanned by the projected data.
pub struct PeriodService;

impl PeriodService {
    /// Earliest and latest timestamps across the three projected collections,
    /// or `None` when all three are empty.
    pub fn event_bounds(
        sales: &[Sale],
        returns: &[SaleReturn],
        orders: &[PurchaseOrder],
    ) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let timestamps = sales
            .iter()
            .map(CashEvent::occurred_at)
            .chain(returns.iter().map(CashEvent::occurred_at))
            .chain(orders.iter().map(CashEvent::occurred_at));
        timestamps.fold(None, |bounds, ts| match bounds {
            None => Some((ts, ts)),
            Some((lo, hi)) => Some((lo.min(ts), hi.max(ts))),
        })
    }

    /// Calendar months from the earliest record's month through the range
    /// end, one key per month step.
    pub fn month_keys(earliest: DateTime<Utc>, range_end: DateTime<Utc>) -> Vec<MonthKey> {
        let mut key = MonthKey::from_date(earliest.date_naive());
        let mut keys = Vec::new();
        while start_of_day(key.first_day()) <= range_end {
            keys.push(key);
            key = key.next();
        }
        keys
    }

    /// Fixed 7-day windows anchored at the earliest record's day, not at a
    /// calendar week boundary. The final window is clipped to the range end.
    pub fn week_windows(earliest: DateTime<Utc>, range_end: DateTime<Utc>) -> Vec<WeekWindow> {
        let end_date = range_end.date_naive();
        let mut start = earliest.date_naive();
        let mut windows = Vec::new();
        while start_of_day(start) <= range_end {
            let end = (start + Duration::days(6)).min(end_date);
            windows.push(WeekWindow::new(start, end));
            start += Duration::days(7);
        }
        windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::range::end_of_day;
    use chrono::NaiveDate;

    fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bounds_are_none_for_empty_collections() {
        assert_eq!(PeriodService::event_bounds(&[], &[], &[]), None);
    }

    #[test]
    fn bounds_span_all_three_collections() {
        let sales = vec![Sale::new(1.0, start_of_day(sample_date(2024, 2, 10)))];
        let returns = vec![SaleReturn::new(1.0, start_of_day(sample_date(2024, 1, 5)))];
        let orders = vec![PurchaseOrder::new(
            1.0,
            start_of_day(sample_date(2024, 3, 20)),
            crate::domain::record::PurchaseOrderStatus::Paid,
        )];
        let (earliest, latest) =
            PeriodService::event_bounds(&sales, &returns, &orders).expect("bounds");
        assert_eq!(earliest.date_naive(), sample_date(2024, 1, 5));
        assert_eq!(latest.date_naive(), sample_date(2024, 3, 20));
    }

    #[test]
    fn month_keys_step_through_the_range_end() {
        let earliest = start_of_day(sample_date(2024, 11, 20));
        let range_end = end_of_day(sample_date(2025, 1, 10));
        let keys = PeriodService::month_keys(earliest, range_end);
        let rendered: Vec<String> = keys.iter().map(MonthKey::to_string).collect();
        assert_eq!(rendered, vec!["2024-11", "2024-12", "2025-01"]);
    }

    #[test]
    fn month_keys_cover_a_single_month() {
        let earliest = start_of_day(sample_date(2024, 3, 10));
        let range_end = end_of_day(sample_date(2024, 3, 31));
        let keys = PeriodService::month_keys(earliest, range_end);
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].to_string(), "2024-03");
    }

    #[test]
    fn week_windows_anchor_at_the_earliest_record() {
        let earliest = start_of_day(sample_date(2024, 3, 10));
        let range_end = end_of_day(sample_date(2024, 3, 31));
        let windows = PeriodService::week_windows(earliest, range_end);
        assert_eq!(windows.len(), 4);
        assert_eq!(windows[0].start, sample_date(2024, 3, 10));
        assert_eq!(windows[0].end, sample_date(2024, 3, 16));
        assert_eq!(windows[3].start, sample_date(2024, 3, 31));
        // final window clipped to the range end rather than overrunning it
        assert_eq!(windows[3].end, sample_date(2024, 3, 31));
    }
}
