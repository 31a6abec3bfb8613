use chrono::{DateTime, Utc};

/// Exposes the timestamp and monetary amount of a transactional record.
///
/// Each source collection stores its amount under a different field; the
/// aggregation paths only ever see this adapter.
pub trait CashEvent {
    fn occurred_at(&self) -> DateTime<Utc>;
    fn amount(&self) -> f64;
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
pub use uuid;
