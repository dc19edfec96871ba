//! Content item model.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use tc_core::geo::GeoPoint;
use tc_core::types::DbId;

/// A row from the `content_items` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: DbId,
    pub section: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub location: Option<Json<GeoPoint>>,
    pub sort_order: i32,
}

/// DTO for creating or replacing a content item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveContentItem {
    pub id: Option<DbId>,
    pub section: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub sort_order: i32,
}
