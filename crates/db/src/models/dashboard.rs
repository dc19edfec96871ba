//! Back-office dashboard aggregates.

use serde::Serialize;
use sqlx::FromRow;

/// Headline counters.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub product_count: i64,
    pub inquiry_count: i64,
    pub visit_count: i64,
}
