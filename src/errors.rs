use thiserror::Error;

/// Error type that captures invalid report inputs.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid range: {0}")]
    InvalidRange(String),
    #[error("Invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
}
