//! Repository for the `customer_cases` table.

use sqlx::PgPool;
use tc_core::types::DbId;

use crate::models::customer_case::{CustomerCase, SaveCustomerCase};

const COLUMNS: &str = "id, title, industry, description, image, create_time";

pub struct CustomerCaseRepo;

impl CustomerCaseRepo {
    /// One page of cases, newest first.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CustomerCase>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM customer_cases
             ORDER BY create_time DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, CustomerCase>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customer_cases")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CustomerCase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customer_cases WHERE id = $1");
        sqlx::query_as::<_, CustomerCase>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &SaveCustomerCase,
    ) -> Result<CustomerCase, sqlx::Error> {
        let query = format!(
            "INSERT INTO customer_cases (title, industry, description, image)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomerCase>(&query)
            .bind(&input.title)
            .bind(&input.industry)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Replace an existing case. `create_time` is preserved.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveCustomerCase,
    ) -> Result<Option<CustomerCase>, sqlx::Error> {
        let query = format!(
            "UPDATE customer_cases SET
                title = $2,
                industry = $3,
                description = $4,
                image = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomerCase>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.industry)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customer_cases WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
