use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::db;
use crate::email::{templates, Mailer};
use crate::error::AppError;
use crate::models::{NewContact, NewSignUp};
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fleet_size: Option<String>,
    pub trailer_type: Option<String>,
    pub plan: Option<String>,
}

#[derive(Deserialize)]
pub struct ContactPayload {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

pub async fn submit_form(
    State(state): State<SharedState>,
    Json(payload): Json<SignUpPayload>,
) -> Result<Json<serde_json::Value>, AppError> {
    let new = NewSignUp {
        first_name: required(payload.first_name, "All fields are required.")?,
        last_name: required(payload.last_name, "All fields are required.")?,
        email: required(payload.email, "All fields are required.")?,
        phone: required(payload.phone, "All fields are required.")?,
        fleet_size: required(payload.fleet_size, "All fields are required.")?,
        trailer_type: required(payload.trailer_type, "All fields are required.")?,
        plan: required(payload.plan, "All fields are required.")?,
    };

    let form = db::sign_ups::create(&state.pool, &new).await?;
    tracing::info!("Inserted sign-up form id={}", form.id);

    // Respond on the strength of the insert alone; notification delivery is
    // best-effort and runs after the response is already decided.
    let mailer = state.mailer.clone();
    let response = json!({
        "message": "Form submitted successfully!",
        "id": form.id,
    });

    tokio::spawn(async move {
        let Some(mailer) = mailer else {
            tracing::warn!("Email not configured; skipping sign-up notifications");
            return;
        };
        send_logged(
            &mailer,
            Some(&form.email),
            templates::SIGN_UP_REPLY_SUBJECT,
            &templates::render_sign_up_reply(&form.first_name),
        )
        .await;
        send_logged(
            &mailer,
            None,
            templates::SIGN_UP_ADMIN_SUBJECT,
            &templates::render_sign_up_admin(&form),
        )
        .await;
    });

    Ok(Json(response))
}

pub async fn contact_form(
    State(state): State<SharedState>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<serde_json::Value>, AppError> {
    let new = NewContact {
        email: required(payload.email, "Email and message are required.")?,
        phone: payload.phone.filter(|p| !p.trim().is_empty()),
        message: required(payload.message, "Email and message are required.")?,
    };

    let submission = db::contacts::create(&state.pool, &new).await?;
    tracing::info!("Inserted contact submission id={}", submission.id);

    let mailer = state.mailer.clone();
    let response = json!({
        "message": "Contact form submitted successfully!",
        "id": submission.id,
    });

    tokio::spawn(async move {
        let Some(mailer) = mailer else {
            tracing::warn!("Email not configured; skipping contact notifications");
            return;
        };
        send_logged(
            &mailer,
            Some(&submission.email),
            templates::CONTACT_REPLY_SUBJECT,
            &templates::render_contact_reply(),
        )
        .await;
        send_logged(
            &mailer,
            None,
            templates::CONTACT_ADMIN_SUBJECT,
            &templates::render_contact_admin(&submission),
        )
        .await;
    });

    Ok(Json(response))
}

fn required(field: Option<String>, message: &str) -> Result<String, AppError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

/// Send one email, logging the outcome. A `to` of None targets the admin
/// mailbox. Failures are swallowed here; the HTTP response is already sent.
async fn send_logged(mailer: &Arc<Mailer>, to: Option<&str>, subject: &str, body: &str) {
    let result = match to {
        Some(to) => mailer.send_client_reply(to, subject, body).await,
        None => mailer.send_admin_notification(subject, body).await,
    };
    match result {
        Ok(()) => tracing::info!("Email sent: {subject}"),
        Err(e) => tracing::warn!("Email send failed ({subject}): {e}"),
    }
}
