use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{ContactSubmission, NewContact};

/// Insert one contact row. Email and message are re-validated here; phone is
/// genuinely optional and stored as NULL when absent.
pub async fn create(pool: &PgPool, new: &NewContact) -> Result<ContactSubmission, AppError> {
    if new.email.trim().is_empty() || new.message.trim().is_empty() {
        return Err(AppError::Validation(
            "Email and message are required.".to_string(),
        ));
    }

    let row = sqlx::query_as::<_, ContactSubmission>(
        "INSERT INTO contact_submissions (email, phone, message)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&new.email)
    .bind(&new.phone)
    .bind(&new.message)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn list_recent(pool: &PgPool) -> Result<Vec<ContactSubmission>, sqlx::Error> {
    sqlx::query_as::<_, ContactSubmission>(
        "SELECT * FROM contact_submissions ORDER BY submitted_at DESC",
    )
    .fetch_all(pool)
    .await
}
