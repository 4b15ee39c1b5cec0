use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted general inquiry entry.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: i32,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// Fields for a new contact row. Email and message are required non-empty.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}
