pub mod chart_service;
pub mod period_service;
pub mod projection_service;
pub mod report_service;
pub mod summary_service;

pub use chart_service::ChartService;
pub use period_service::PeriodService;
pub use projection_service::ProjectionService;
pub use report_service::ReportService;
pub use summary_service::SummaryService;
