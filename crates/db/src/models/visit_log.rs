//! Visit log model and aggregate rows.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use tc_core::types::{DbId, Timestamp};

/// A row from the `visit_logs` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VisitLog {
    pub id: DbId,
    pub ip: String,
    pub path: String,
    pub method: String,
    pub user_agent: Option<String>,
    pub location: Option<String>,
    pub create_time: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateVisitLog {
    pub ip: String,
    pub path: String,
    pub method: String,
    pub user_agent: Option<String>,
    pub location: Option<String>,
}

/// Visits per location, shaped for a map or pie chart.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GeoStat {
    pub name: String,
    pub value: i64,
}

/// Visits per calendar day.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DailyVisits {
    pub date: NaiveDate,
    pub count: i64,
}
