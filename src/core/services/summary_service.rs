use crate::domain::common::CashEvent;
use crate::domain::range::TimeWindow;
use crate::domain::record::{PurchaseOrder, Sale, SaleReturn};
use crate::domain::summary::FinancialTotals;

/// Aggregates the three projected collections over a bucket window.
pub struct SummaryService;

impl SummaryService {
    /// Sums revenue, expenses, and returned amounts inside the window and
    /// derives profit and margin. The weekly, monthly, and range-total paths
    /// all share this function, so the views can never disagree on how a
    /// given day is classified.
    pub fn summarize_window(
        window: &TimeWindow,
        sales: &[Sale],
        sale_returns: &[SaleReturn],
        purchase_orders: &[PurchaseOrder],
    ) -> FinancialTotals {
        let revenue = Self::sum_within(window, sales);
        let returns = Self::sum_within(window, sale_returns);
        let expenses = Self::sum_within(window, purchase_orders);
        FinancialTotals::from_parts(revenue, expenses, returns)
    }

    fn sum_within<T: CashEvent>(window: &TimeWindow, records: &[T]) -> f64 {
        records
            .iter()
            .filter(|record| window.contains(record.occurred_at()))
            .map(CashEvent::amount)
            .sum()
    }
}
