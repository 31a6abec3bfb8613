use crate::domain::common::CashEvent;
use crate::domain::range::ReportRange;
use crate::domain::record::{PurchaseOrder, Sale, SaleReturn};

/// Stateless filters that project raw store snapshots into the active range.
pub struct ProjectionService;

impl ProjectionService {
    pub fn project_sales(sales: &[Sale], range: &ReportRange) -> Vec<Sale> {
        Self::within_range(sales, range)
    }

    pub fn project_sale_returns(returns: &[SaleReturn], range: &ReportRange) -> Vec<SaleReturn> {
        Self::within_range(returns, range)
    }

    /// Purchase orders must also carry a realized status; orders still in
    /// draft, negotiation, or cancelled never count as expenses, with or
    /// without an active range.
    pub fn project_purchase_orders(
        orders: &[PurchaseOrder],
        range: &ReportRange,
    ) -> Vec<PurchaseOrder> {
        orders
            .iter()
            .filter(|order| order.status.is_realized() && range.contains(order.created_at))
            .cloned()
            .collect()
    }

    fn within_range<T: CashEvent + Clone>(records: &[T], range: &ReportRange) -> Vec<T> {
        if range.is_unbounded() {
            return records.to_vec();
        }
        records
            .iter()
            .filter(|record| range.contains(record.occurred_at()))
            .cloned()
            .collect()
    }
}
