//! Repository for the `visit_logs` table.

use sqlx::PgPool;

use crate::models::visit_log::{CreateVisitLog, DailyVisits, GeoStat, VisitLog};

const COLUMNS: &str = "id, ip, path, method, user_agent, location, create_time";

/// Label used for visits whose location could not be resolved.
pub const UNKNOWN_LOCATION: &str = "Unknown";

pub struct VisitLogRepo;

impl VisitLogRepo {
    pub async fn create(pool: &PgPool, input: &CreateVisitLog) -> Result<VisitLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO visit_logs (ip, path, method, user_agent, location)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VisitLog>(&query)
            .bind(&input.ip)
            .bind(&input.path)
            .bind(&input.method)
            .bind(&input.user_agent)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// One page of visits, newest first.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<VisitLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM visit_logs
             ORDER BY create_time DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, VisitLog>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM visit_logs")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Visit counts per location, largest first.
    pub async fn geo_stats(pool: &PgPool) -> Result<Vec<GeoStat>, sqlx::Error> {
        sqlx::query_as::<_, GeoStat>(
            "SELECT COALESCE(NULLIF(location, ''), $1) AS name, COUNT(*) AS value
             FROM visit_logs
             GROUP BY 1
             ORDER BY value DESC, name ASC",
        )
        .bind(UNKNOWN_LOCATION)
        .fetch_all(pool)
        .await
    }

    /// Visit counts for each of the last `days` days (including today).
    /// Days without visits are reported with a zero count.
    pub async fn daily_trend(pool: &PgPool, days: i32) -> Result<Vec<DailyVisits>, sqlx::Error> {
        sqlx::query_as::<_, DailyVisits>(
            "SELECT d.day::date AS date, COUNT(v.id) AS count
             FROM generate_series(CURRENT_DATE - ($1::int - 1), CURRENT_DATE, INTERVAL '1 day') AS d(day)
             LEFT JOIN visit_logs v ON v.create_time::date = d.day::date
             GROUP BY d.day
             ORDER BY d.day ASC",
        )
        .bind(days)
        .fetch_all(pool)
        .await
    }
}
