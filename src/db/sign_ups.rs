use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{NewSignUp, SignUpForm};

/// Insert one sign-up row. Re-validates at the boundary rather than trusting
/// the handler; a unique violation on email surfaces as `DuplicateEmail`.
pub async fn create(pool: &PgPool, new: &NewSignUp) -> Result<SignUpForm, AppError> {
    let required = [
        &new.first_name,
        &new.last_name,
        &new.email,
        &new.phone,
        &new.fleet_size,
        &new.trailer_type,
        &new.plan,
    ];
    if required.iter().any(|f| f.trim().is_empty()) {
        return Err(AppError::Validation("All fields are required.".to_string()));
    }

    let row = sqlx::query_as::<_, SignUpForm>(
        "INSERT INTO sign_up_forms (first_name, last_name, email, phone, fleet_size, trailer_type, plan)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(&new.first_name)
    .bind(&new.last_name)
    .bind(&new.email)
    .bind(&new.phone)
    .bind(&new.fleet_size)
    .bind(&new.trailer_type)
    .bind(&new.plan)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn list_recent(pool: &PgPool) -> Result<Vec<SignUpForm>, sqlx::Error> {
    sqlx::query_as::<_, SignUpForm>(
        "SELECT * FROM sign_up_forms ORDER BY submitted_at DESC",
    )
    .fetch_all(pool)
    .await
}
