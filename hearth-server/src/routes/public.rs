use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;
use crate::handlers::{contact, homes, visits};

/// Routes reachable without authentication.
pub fn create_public_router() -> Router<AppState> {
    Router::new()
        // Catalog reads
        .route("/homes", get(homes::list_homes_handler))
        .route("/homes/{id}", get(homes::get_home_details_handler))
        // Public submissions
        .route("/contact-messages", post(contact::submit_contact_message_handler))
        .route("/visit-requests", post(visits::submit_visit_request_handler))
}
