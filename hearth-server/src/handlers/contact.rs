use axum::{extract::State, response::Json};
use tracing::info;

use hearth_core::database::ports::contact_messages::NewContactMessage;
use hearth_model::ContactMessage;

use crate::errors::AppResult;
use crate::infra::app_state::AppState;

/// Accepts a public contact-form submission.
pub async fn submit_contact_message_handler(
    State(state): State<AppState>,
    Json(body): Json<NewContactMessage>,
) -> AppResult<Json<ContactMessage>> {
    info!("received contact message submission");
    let saved = state.contact_messages.submit(body).await?;
    Ok(Json(saved))
}
