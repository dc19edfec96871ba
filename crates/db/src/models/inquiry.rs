//! Customer inquiry model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tc_core::types::{DbId, Timestamp};

/// A row from the `inquiries` table. `status` is one of `unread`, `read`,
/// `processed`.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub content: String,
    pub attachment: Option<String>,
    pub status: String,
    pub create_time: Timestamp,
}

/// DTO for an inquiry arriving through the public contact form.
#[derive(Debug, Clone)]
pub struct CreateInquiry {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub content: String,
    pub attachment: Option<String>,
}

/// DTO for the admin upsert. Only an existing row's status is usually
/// changed, but every field is replaced.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveInquiry {
    pub id: Option<DbId>,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub content: String,
    pub attachment: Option<String>,
    pub status: Option<String>,
}
