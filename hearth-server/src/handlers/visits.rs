use axum::{extract::State, response::Json};
use tracing::info;

use hearth_core::database::ports::visits::NewVisitRequest;
use hearth_model::Visit;

use crate::errors::AppResult;
use crate::infra::app_state::AppState;

/// Accepts a public visit-request submission.
pub async fn submit_visit_request_handler(
    State(state): State<AppState>,
    Json(body): Json<NewVisitRequest>,
) -> AppResult<Json<Visit>> {
    info!("received visit request submission");
    let saved = state.visits.submit(body).await?;
    Ok(Json(saved))
}
