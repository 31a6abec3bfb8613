use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ReportError;

/// Returns the first instant of the given day.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap().and_utc()
}

/// Returns the last represented instant of the given day (23:59:59.999).
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_milli_opt(23, 59, 59, 999).unwrap().and_utc()
}

/// The operator-chosen reporting interval.
///
/// Endpoints are normalized to day boundaries at construction so that
/// same-day records are included regardless of their time-of-day component.
/// An absent endpoint means the range is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportRange {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl ReportRange {
    pub fn new(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, ReportError> {
        let start = start.map(|ts| start_of_day(ts.date_naive()));
        let end = end.map(|ts| end_of_day(ts.date_naive()));
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(ReportError::InvalidRange(format!(
                    "range start {start} is after end {end}"
                )));
            }
        }
        Ok(Self { start, end })
    }

    /// A range with no bounds on either side; every record is included.
    pub fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Inclusive membership test against the normalized bounds.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        if let Some(start) = self.start {
            if ts < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if ts > end {
                return false;
            }
        }
        true
    }
}

/// An inclusive pair of instants used as a period bucket boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Builds a day-aligned window covering `start` through `end` inclusive.
    pub fn over_days(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start_of_day(start),
            end: end_of_day(end),
        }
    }

    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.start && ts <= self.end
    }
}
