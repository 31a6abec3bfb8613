use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::chart::ChartSeries;
use super::period::{MonthKey, WeekWindow};

/// Derived financial metrics for one period or for the whole range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialTotals {
    pub revenue: f64,
    pub expenses: f64,
    pub returns: f64,
    pub profit: f64,
    pub profit_margin: f64,
}

impl FinancialTotals {
    /// Builds totals from the three summed sources, deriving profit and
    /// margin. Margin is zero whenever revenue is zero.
    pub fn from_parts(revenue: f64, expenses: f64, returns: f64) -> Self {
        let profit = revenue - expenses - returns;
        let profit_margin = if revenue > 0.0 {
            profit / revenue * 100.0
        } else {
            0.0
        };
        Self {
            revenue,
            expenses,
            returns,
            profit,
            profit_margin,
        }
    }

    /// True when no source contributed any amount to this period.
    pub fn is_zero(&self) -> bool {
        self.revenue == 0.0 && self.expenses == 0.0 && self.returns == 0.0
    }
}

impl Default for FinancialTotals {
    fn default() -> Self {
        Self::from_parts(0.0, 0.0, 0.0)
    }
}

/// One labeled row of the merged period table.
///
/// `starts_on` carries the structured period start alongside the display
/// label so ordering never has to trust label parsing alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub period: String,
    pub starts_on: NaiveDate,
    #[serde(flatten)]
    pub totals: FinancialTotals,
}

/// Aggregated figures for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    pub month: MonthKey,
    pub totals: FinancialTotals,
}

impl MonthlySummary {
    pub fn to_financial_summary(&self) -> FinancialSummary {
        FinancialSummary {
            period: self.month.label(),
            starts_on: self.month.first_day(),
            totals: self.totals,
        }
    }
}

/// Aggregated figures for one 7-day window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklySummary {
    pub window: WeekWindow,
    pub totals: FinancialTotals,
}

impl WeeklySummary {
    pub fn to_financial_summary(&self) -> FinancialSummary {
        FinancialSummary {
            period: self.window.label(),
            starts_on: self.window.start,
            totals: self.totals,
        }
    }
}

/// The complete engine output for one computation pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    pub totals: FinancialTotals,
    pub period_summaries: Vec<FinancialSummary>,
    pub monthly_profit_series: ChartSeries,
    pub revenue_expenses_series: ChartSeries,
    pub distribution_series: ChartSeries,
}
