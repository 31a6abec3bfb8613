use chrono::{Datelike, NaiveDate};

use crate::core::services::{ChartService, PeriodService, ProjectionService, SummaryService};
use crate::domain::period;
use crate::domain::range::{end_of_day, start_of_day, ReportRange, TimeWindow};
use crate::domain::record::{PurchaseOrder, Sale, SaleReturn};
use crate::domain::summary::{
    FinancialReport, FinancialSummary, FinancialTotals, MonthlySummary, WeeklySummary,
};

/// Runs the full reporting pipeline over immutable store snapshots.
///
/// Every pass recomputes project → bucket → aggregate → sort/build-series in
/// strict dependency order and returns freshly allocated outputs, so calling
/// it twice with identical inputs yields identical reports.
pub struct ReportService;

impl ReportService {
    pub fn build(
        sales: &[Sale],
        sale_returns: &[SaleReturn],
        purchase_orders: &[PurchaseOrder],
        range: &ReportRange,
    ) -> FinancialReport {
        let sales = ProjectionService::project_sales(sales, range);
        let returns = ProjectionService::project_sale_returns(sale_returns, range);
        let orders = ProjectionService::project_purchase_orders(purchase_orders, range);

        let Some((earliest, latest)) = PeriodService::event_bounds(&sales, &returns, &orders)
        else {
            return Self::empty_report();
        };
        // With no operator end the report runs through the newest record.
        let range_end = range.end().unwrap_or_else(|| end_of_day(latest.date_naive()));
        let range_start = range
            .start()
            .unwrap_or_else(|| start_of_day(earliest.date_naive()));

        let monthly: Vec<MonthlySummary> = PeriodService::month_keys(earliest, range_end)
            .into_iter()
            .map(|month| MonthlySummary {
                month,
                totals: SummaryService::summarize_window(
                    &month.window(),
                    &sales,
                    &returns,
                    &orders,
                ),
            })
            .filter(|summary| !summary.totals.is_zero())
            .collect();

        let weekly: Vec<WeeklySummary> = PeriodService::week_windows(earliest, range_end)
            .into_iter()
            .map(|window| WeeklySummary {
                window,
                totals: SummaryService::summarize_window(
                    &window.window(),
                    &sales,
                    &returns,
                    &orders,
                ),
            })
            .filter(|summary| !summary.totals.is_zero())
            .collect();

        // Range totals are the same aggregation over one window spanning the
        // whole filtered range, not a re-sum of the period rows.
        let totals = SummaryService::summarize_window(
            &TimeWindow::new(range_start, range_end),
            &sales,
            &returns,
            &orders,
        );

        tracing::debug!(
            months = monthly.len(),
            weeks = weekly.len(),
            "financial report buckets computed"
        );

        FinancialReport {
            totals,
            period_summaries: Self::merge_summaries(&weekly, &monthly),
            monthly_profit_series: ChartService::monthly_profit_series(&monthly),
            revenue_expenses_series: ChartService::revenue_expenses_series(&monthly),
            distribution_series: ChartService::distribution_series(&monthly),
        }
    }

    /// Merges weekly and monthly rows into one reverse-chronological table,
    /// most recent period first.
    pub fn merge_summaries(
        weekly: &[WeeklySummary],
        monthly: &[MonthlySummary],
    ) -> Vec<FinancialSummary> {
        let mut merged: Vec<FinancialSummary> = weekly
            .iter()
            .map(WeeklySummary::to_financial_summary)
            .chain(monthly.iter().map(MonthlySummary::to_financial_summary))
            .collect();
        merged.sort_by(|a, b| Self::sort_date(b).cmp(&Self::sort_date(a)));
        merged
    }

    /// Comparable date for one row: the date its label encodes when the label
    /// parses, the carried period start otherwise. The fallback keeps an
    /// unparseable label in a stable position instead of failing the report.
    fn sort_date(summary: &FinancialSummary) -> NaiveDate {
        period::sort_date_from_label(&summary.period, summary.starts_on.year())
            .unwrap_or(summary.starts_on)
    }

    fn empty_report() -> FinancialReport {
        FinancialReport {
            totals: FinancialTotals::default(),
            period_summaries: Vec::new(),
            monthly_profit_series: ChartService::monthly_profit_series(&[]),
            revenue_expenses_series: ChartService::revenue_expenses_series(&[]),
            distribution_series: ChartService::distribution_series(&[]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::period::{MonthKey, WeekWindow};
    use chrono::NaiveDate;

    fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn weekly(start: NaiveDate, revenue: f64) -> WeeklySummary {
        WeeklySummary {
            window: WeekWindow::new(start, start + chrono::Duration::days(6)),
            totals: FinancialTotals::from_parts(revenue, 0.0, 0.0),
        }
    }

    fn monthly(year: i32, month: u32, revenue: f64) -> MonthlySummary {
        MonthlySummary {
            month: MonthKey { year, month },
            totals: FinancialTotals::from_parts(revenue, 0.0, 0.0),
        }
    }

    #[test]
    fn merged_rows_order_most_recent_first() {
        let weeks = vec![
            weekly(sample_date(2024, 3, 10), 100.0),
            weekly(sample_date(2024, 3, 17), 200.0),
        ];
        let months = vec![monthly(2024, 3, 300.0)];
        let merged = ReportService::merge_summaries(&weeks, &months);
        let periods: Vec<&str> = merged.iter().map(|row| row.period.as_str()).collect();
        // The month sorts at its day-15 stand-in: after the week of the 10th,
        // before the week of the 17th.
        assert_eq!(
            periods,
            vec!["Sem 17/03 - 23/03", "Março 2024", "Sem 10/03 - 16/03"]
        );
    }

    #[test]
    fn unparseable_labels_fall_back_to_the_carried_start() {
        let mut rows = vec![
            weekly(sample_date(2024, 3, 10), 100.0).to_financial_summary(),
            weekly(sample_date(2024, 3, 17), 200.0).to_financial_summary(),
        ];
        rows[1].period = "???".into();
        let mut merged = rows.clone();
        merged.sort_by(|a, b| ReportService::sort_date(b).cmp(&ReportService::sort_date(a)));
        assert_eq!(merged[0].period, "???");
        assert_eq!(merged[1].period, "Sem 10/03 - 16/03");
    }
}
