use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::CashEvent;
use crate::errors::ReportError;

/// A completed sale as delivered by the sales store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: Uuid,
    pub final_amount: f64,
    pub created_at: DateTime<Utc>,
}

impl Sale {
    pub fn new(final_amount: f64, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            final_amount,
            created_at,
        }
    }
}

impl CashEvent for Sale {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn amount(&self) -> f64 {
        self.final_amount
    }
}

/// A sale return as delivered by the returns store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaleReturn {
    pub id: Uuid,
    pub total_return_amount: f64,
    pub created_at: DateTime<Utc>,
}

impl SaleReturn {
    pub fn new(total_return_amount: f64, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            total_return_amount,
            created_at,
        }
    }
}

impl CashEvent for SaleReturn {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn amount(&self) -> f64 {
        self.total_return_amount
    }
}

/// Lifecycle status of a purchase order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseOrderStatus {
    Draft,
    Submitted,
    Delivered,
    Paid,
    Cancelled,
}

impl PurchaseOrderStatus {
    /// True when the order represents money that has actually left the
    /// business; only these orders count as expenses.
    pub fn is_realized(&self) -> bool {
        matches!(self, Self::Delivered | Self::Paid)
    }
}

/// A purchase order as delivered by the purchasing store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: Uuid,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    pub status: PurchaseOrderStatus,
}

impl PurchaseOrder {
    pub fn new(total_amount: f64, created_at: DateTime<Utc>, status: PurchaseOrderStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            total_amount,
            created_at,
            status,
        }
    }
}

impl CashEvent for PurchaseOrder {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn amount(&self) -> f64 {
        self.total_amount
    }
}

/// Parses an ISO-8601 timestamp as supplied by the upstream stores.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ReportError> {
    let parsed = DateTime::parse_from_rfc3339(raw)?;
    Ok(parsed.with_timezone(&Utc))
}
