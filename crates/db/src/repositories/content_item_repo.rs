//! Repository for the `content_items` table.

use sqlx::types::Json;
use sqlx::PgPool;
use tc_core::types::DbId;

use crate::models::content_item::{ContentItem, SaveContentItem};

const COLUMNS: &str = "id, section, title, description, icon, image, location, sort_order";

/// Content items are created and replaced but never deleted.
pub struct ContentItemRepo;

impl ContentItemRepo {
    /// Every item, grouped by section and ordered within it.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ContentItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM content_items ORDER BY section ASC, sort_order ASC, id ASC");
        sqlx::query_as::<_, ContentItem>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_section(
        pool: &PgPool,
        section: &str,
    ) -> Result<Vec<ContentItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM content_items WHERE section = $1 ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(section)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ContentItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM content_items WHERE id = $1");
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Number of items currently stored under `section`.
    pub async fn count_in_section(pool: &PgPool, section: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM content_items WHERE section = $1")
                .bind(section)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    pub async fn create(
        pool: &PgPool,
        input: &SaveContentItem,
    ) -> Result<ContentItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO content_items (section, title, description, icon, image, location, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(&input.section)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.image)
            .bind(input.location.map(Json))
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Replace every field of an existing item. Returns `None` if no row
    /// with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveContentItem,
    ) -> Result<Option<ContentItem>, sqlx::Error> {
        let query = format!(
            "UPDATE content_items SET
                section = $2,
                title = $3,
                description = $4,
                icon = $5,
                image = $6,
                location = $7,
                sort_order = $8,
                update_time = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(id)
            .bind(&input.section)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.image)
            .bind(input.location.map(Json))
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }
}
