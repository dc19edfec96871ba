//! Customer case model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tc_core::types::{DbId, Timestamp};

/// A row from the `customer_cases` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCase {
    pub id: DbId,
    pub title: String,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub create_time: Timestamp,
}

/// DTO for creating or replacing a customer case. `createTime` is stamped
/// by the database and ignored on input.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCustomerCase {
    pub id: Option<DbId>,
    pub title: String,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}
