//! Repository for the `sys_users` table.

use sqlx::PgPool;
use tc_core::types::DbId;

use crate::models::user::{CreateSysUser, SysUser};

const COLUMNS: &str = "id, username, nickname, password_hash, create_time";

pub struct UserRepo;

impl UserRepo {
    pub async fn create(pool: &PgPool, input: &CreateSysUser) -> Result<SysUser, sqlx::Error> {
        let query = format!(
            "INSERT INTO sys_users (username, nickname, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SysUser>(&query)
            .bind(&input.username)
            .bind(&input.nickname)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SysUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sys_users WHERE id = $1");
        sqlx::query_as::<_, SysUser>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<SysUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sys_users WHERE username = $1");
        sqlx::query_as::<_, SysUser>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sys_users")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
