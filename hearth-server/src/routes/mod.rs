pub mod public;

use axum::Router;

use crate::AppState;

/// Create the main API router.
pub fn create_api_router() -> Router<AppState> {
    Router::new().nest("/api/public", public::create_public_router())
    // An authenticated admin surface would nest here:
    // .nest("/api/admin", admin::create_admin_router())
}
