use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::range::TimeWindow;

const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Day of month used as the stand-in date when ordering a month against the
/// weeks that overlap it.
const MONTH_SORT_DAY: u32 = 15;

/// Identifies one calendar month unambiguously, independent of display labels.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Human-readable display name, e.g. `"Março 2024"`.
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }

    /// The full calendar month as an inclusive bucket window.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::over_days(self.first_day(), self.last_day())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A fixed 7-day reporting window, possibly clipped at the range end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Short display label, e.g. `"Sem 10/03 - 16/03"`.
    pub fn label(&self) -> String {
        format!(
            "Sem {} - {}",
            self.start.format("%d/%m"),
            self.end.format("%d/%m")
        )
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow::over_days(self.start, self.end)
    }
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month as usize - 1) % 12]
}

fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
        .map(|idx| idx as u32 + 1)
}

/// Re-derives the comparable date encoded in a period display label.
///
/// Weekly labels carry no year, so the caller supplies one; monthly labels
/// order at day 15, which fixes how a month interleaves with the weeks that
/// overlap it. Returns `None` for labels in neither form.
pub fn sort_date_from_label(label: &str, assumed_year: i32) -> Option<NaiveDate> {
    let trimmed = label.trim();
    if let Some(rest) = trimmed.strip_prefix("Sem ") {
        let token = rest.split_whitespace().next()?;
        let mut parts = token.split('/');
        let day: u32 = parts.next()?.parse().ok()?;
        let month: u32 = parts.next()?.parse().ok()?;
        return NaiveDate::from_ymd_opt(assumed_year, month, day);
    }
    let mut words = trimmed.split_whitespace();
    let name = words.next()?;
    let year: i32 = words.next()?.parse().ok()?;
    let month = month_number(name)?;
    NaiveDate::from_ymd_opt(year, month, MONTH_SORT_DAY)
}
