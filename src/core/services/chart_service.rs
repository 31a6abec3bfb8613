use crate::domain::chart::{ChartDataset, ChartSeries};
use crate::domain::summary::MonthlySummary;

/// Share of expenses attributed to cost of goods in the distribution chart;
/// the remainder is treated as operating expense.
const COST_OF_GOODS_SHARE: f64 = 0.80;

/// Reshapes monthly summaries into chart-ready labeled series.
pub struct ChartService;

impl ChartService {
    /// Combined profit/revenue/expenses/returns series for the line +
    /// stacked-bar chart, one column per month in chronological order.
    pub fn monthly_profit_series(monthly: &[MonthlySummary]) -> ChartSeries {
        let months = Self::chronological(monthly);
        let labels = months.iter().map(|entry| entry.month.label()).collect();
        let datasets = vec![
            ChartDataset::new("Lucro", months.iter().map(|e| e.totals.profit).collect()),
            ChartDataset::new("Receitas", months.iter().map(|e| e.totals.revenue).collect()),
            ChartDataset::new("Despesas", months.iter().map(|e| e.totals.expenses).collect()),
            ChartDataset::new("Devoluções", months.iter().map(|e| e.totals.returns).collect()),
        ];
        ChartSeries::new(labels, datasets)
    }

    /// Revenue versus expenses line series.
    pub fn revenue_expenses_series(monthly: &[MonthlySummary]) -> ChartSeries {
        let months = Self::chronological(monthly);
        let labels = months.iter().map(|entry| entry.month.label()).collect();
        let datasets = vec![
            ChartDataset::new("Receitas", months.iter().map(|e| e.totals.revenue).collect()),
            ChartDataset::new("Despesas", months.iter().map(|e| e.totals.expenses).collect()),
        ];
        ChartSeries::new(labels, datasets)
    }

    /// Single-period proportion breakdown of the summed monthly figures for
    /// the doughnut chart. Losses contribute a zero profit slice.
    pub fn distribution_series(monthly: &[MonthlySummary]) -> ChartSeries {
        if monthly.is_empty() {
            return ChartSeries::empty();
        }
        let expenses: f64 = monthly.iter().map(|e| e.totals.expenses).sum();
        let returns: f64 = monthly.iter().map(|e| e.totals.returns).sum();
        let profit: f64 = monthly.iter().map(|e| e.totals.profit).sum();
        let cost_of_goods = expenses * COST_OF_GOODS_SHARE;
        let labels = vec![
            "Custo das Mercadorias".to_string(),
            "Despesas Operacionais".to_string(),
            "Devoluções".to_string(),
            "Lucro".to_string(),
        ];
        let data = vec![
            cost_of_goods,
            expenses - cost_of_goods,
            returns,
            profit.max(0.0),
        ];
        ChartSeries::new(labels, vec![ChartDataset::new("Distribuição", data)])
    }

    // Chart order must follow the month key, never the display label, which
    // would sort "Abril 2024" ahead of "Março 2024".
    fn chronological(monthly: &[MonthlySummary]) -> Vec<&MonthlySummary> {
        let mut months: Vec<&MonthlySummary> = monthly.iter().collect();
        months.sort_by_key(|entry| entry.month);
        months
    }
}
