use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use hearth_model::{HomeCard, HomeDetailView, HomeId, PageEnvelope, PageRequest};

use crate::errors::AppResult;
use crate::infra::app_state::AppState;

/// Transport-layer paging defaults; the core takes the window as given.
const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Deserialize)]
pub struct HomesListParams {
    pub filter: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

fn page_request(params: &HomesListParams) -> PageRequest {
    PageRequest::new(
        params.page.unwrap_or(0),
        params.size.unwrap_or(DEFAULT_PAGE_SIZE).max(1),
    )
}

/// Paginated catalog of summary cards with optional filtering and sorting.
pub async fn list_homes_handler(
    State(state): State<AppState>,
    Query(params): Query<HomesListParams>,
) -> AppResult<Json<PageEnvelope<HomeCard>>> {
    let page = page_request(&params);
    let envelope = state
        .catalog
        .browse(params.filter.as_deref(), params.sort_by.as_deref(), page)
        .await?;
    Ok(Json(envelope))
}

/// Full detail view for a single home.
pub async fn get_home_details_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<HomeDetailView>> {
    let view = state.catalog.detail(HomeId::new(id)).await?;
    Ok(Json(view))
}
