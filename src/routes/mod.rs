pub mod forms;
pub mod submissions;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/submit-form", post(forms::submit_form))
        .route("/contact-form", post(forms::contact_form))
        .route("/submissions", get(submissions::list))
}
