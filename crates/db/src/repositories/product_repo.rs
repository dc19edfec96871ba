//! Repository for the `products` table.

use sqlx::types::Json;
use sqlx::PgPool;
use tc_core::catalog::DEFAULT_PRODUCT_STATUS;
use tc_core::types::DbId;

use crate::models::product::{Product, ProductFilter, SaveProduct};

const COLUMNS: &str = "id, name, sku, category, price, status, image, description, specs, \
                        is_featured, create_time, update_time";

/// Shared WHERE clause; each filter is skipped when its parameter is NULL.
const FILTER: &str = "($1::text IS NULL OR category = $1)
             AND ($2::text IS NULL
                  OR name ILIKE '%' || $2 || '%'
                  OR sku ILIKE '%' || $2 || '%'
                  OR description ILIKE '%' || $2 || '%')
             AND ($3::boolean IS NULL OR is_featured = $3)
             AND ($4::text IS NULL OR status = $4)";

pub struct ProductRepo;

impl ProductRepo {
    /// One page of products matching `filter`, newest first.
    pub async fn list_page(
        pool: &PgPool,
        filter: &ProductFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE {FILTER}
             ORDER BY create_time DESC, id DESC
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&filter.category)
            .bind(&filter.search)
            .bind(filter.featured)
            .bind(&filter.status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Number of products matching `filter`.
    pub async fn count(pool: &PgPool, filter: &ProductFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM products WHERE {FILTER}");
        let (count,): (i64,) = sqlx::query_as(&query)
            .bind(&filter.category)
            .bind(&filter.search)
            .bind(filter.featured)
            .bind(&filter.status)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &SaveProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products
                (name, sku, category, price, status, image, description, specs, is_featured)
             VALUES ($1, $2, $3, $4, COALESCE($5, '{DEFAULT_PRODUCT_STATUS}'), $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.sku)
            .bind(&input.category)
            .bind(input.price)
            .bind(&input.status)
            .bind(&input.image)
            .bind(&input.description)
            .bind(Json(&input.specs))
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = $2,
                sku = $3,
                category = $4,
                price = $5,
                status = COALESCE($6, status),
                image = $7,
                description = $8,
                specs = $9,
                is_featured = $10,
                update_time = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.sku)
            .bind(&input.category)
            .bind(input.price)
            .bind(&input.status)
            .bind(&input.image)
            .bind(&input.description)
            .bind(Json(&input.specs))
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
