//! Aggregate queries for the back-office dashboard.

use sqlx::PgPool;

use crate::models::dashboard::DashboardStats;

pub struct DashboardRepo;

impl DashboardRepo {
    pub async fn stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        sqlx::query_as::<_, DashboardStats>(
            "SELECT
                (SELECT COUNT(*) FROM products) AS product_count,
                (SELECT COUNT(*) FROM inquiries) AS inquiry_count,
                (SELECT COUNT(*) FROM visit_logs) AS visit_count",
        )
        .fetch_one(pool)
        .await
    }
}
