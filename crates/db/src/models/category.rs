//! Product category model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tc_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub create_time: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCategory {
    pub id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}
