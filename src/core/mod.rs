//! Stateless services that make up the reporting pipeline.

pub mod services;

pub use services::{ChartService, PeriodService, ProjectionService, ReportService, SummaryService};
