use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

/// All submissions from both tables, newest first. The two row shapes differ,
/// so each element is tagged with a `kind` discriminator.
pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Value>>, AppError> {
    let sign_ups = db::sign_ups::list_recent(&state.pool).await?;
    let contacts = db::contacts::list_recent(&state.pool).await?;

    let mut rows: Vec<(chrono::DateTime<chrono::Utc>, Value)> = Vec::new();

    for form in sign_ups {
        let ts = form.submitted_at;
        let mut value = serde_json::to_value(form)
            .map_err(|e| AppError::Internal(format!("Serialization failed: {e}")))?;
        value["kind"] = json!("sign_up");
        rows.push((ts, value));
    }
    for submission in contacts {
        let ts = submission.submitted_at;
        let mut value = serde_json::to_value(submission)
            .map_err(|e| AppError::Internal(format!("Serialization failed: {e}")))?;
        value["kind"] = json!("contact");
        rows.push((ts, value));
    }

    rows.sort_by(|a, b| b.0.cmp(&a.0));

    Ok(Json(rows.into_iter().map(|(_, v)| v).collect()))
}
