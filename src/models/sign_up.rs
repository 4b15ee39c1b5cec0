use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted fleet sign-up form entry.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct SignUpForm {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub fleet_size: String,
    pub trailer_type: String,
    pub plan: String,
    pub submitted_at: DateTime<Utc>,
}

/// Fields for a new sign-up row. All seven are required non-empty.
#[derive(Debug, Clone)]
pub struct NewSignUp {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub fleet_size: String,
    pub trailer_type: String,
    pub plan: String,
}
