//! Repository for the `inquiries` table.

use sqlx::PgPool;
use tc_core::inquiry::InquiryStatus;
use tc_core::types::DbId;

use crate::models::inquiry::{CreateInquiry, Inquiry, SaveInquiry};

const COLUMNS: &str = "id, name, phone, email, content, attachment, status, create_time";

pub struct InquiryRepo;

impl InquiryRepo {
    /// One page of inquiries, newest first, optionally restricted to a status.
    pub async fn list_page(
        pool: &PgPool,
        status: Option<InquiryStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Inquiry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inquiries
             WHERE ($1::text IS NULL OR status = $1)
             ORDER BY create_time DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(status.map(InquiryStatus::as_str))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, status: Option<InquiryStatus>) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM inquiries WHERE ($1::text IS NULL OR status = $1)")
                .bind(status.map(InquiryStatus::as_str))
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inquiries WHERE id = $1");
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Record a contact-form submission. New inquiries start `unread`.
    pub async fn create(pool: &PgPool, input: &CreateInquiry) -> Result<Inquiry, sqlx::Error> {
        Self::insert(
            pool,
            &input.name,
            &input.phone,
            input.email.as_deref(),
            &input.content,
            input.attachment.as_deref(),
            InquiryStatus::Unread,
        )
        .await
    }

    /// Admin-side insert of a complete inquiry.
    pub async fn create_full(
        pool: &PgPool,
        input: &SaveInquiry,
        status: InquiryStatus,
    ) -> Result<Inquiry, sqlx::Error> {
        Self::insert(
            pool,
            &input.name,
            &input.phone,
            input.email.as_deref(),
            &input.content,
            input.attachment.as_deref(),
            status,
        )
        .await
    }

    async fn insert(
        pool: &PgPool,
        name: &str,
        phone: &str,
        email: Option<&str>,
        content: &str,
        attachment: Option<&str>,
        status: InquiryStatus,
    ) -> Result<Inquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO inquiries (name, phone, email, content, attachment, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(name)
            .bind(phone)
            .bind(email)
            .bind(content)
            .bind(attachment)
            .bind(status.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveInquiry,
        status: InquiryStatus,
    ) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!(
            "UPDATE inquiries SET
                name = $2,
                phone = $3,
                email = $4,
                content = $5,
                attachment = $6,
                status = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.content)
            .bind(&input.attachment)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inquiries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
