use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use hearth_core::ListingError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.message,
                "status": self.status.as_u16(),
            }
        }));

        (self.status, body).into_response()
    }
}

// The one place the domain taxonomy becomes transport statuses.
impl From<ListingError> for AppError {
    fn from(err: ListingError) -> Self {
        match err {
            ListingError::HomeNotFound(_) => Self::not_found(err.to_string()),
            ListingError::Validation(msg) => Self::bad_request(msg),
            ListingError::DetailsMissing(_)
            | ListingError::Storage(_)
            | ListingError::Serialization(_) => Self::internal(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use hearth_model::HomeId;

    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let app: AppError = ListingError::HomeNotFound(HomeId::new(9)).into();
        assert_eq!(app.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let app: AppError = ListingError::Validation("Invalid email format".to_string()).into();
        assert_eq!(app.status, StatusCode::BAD_REQUEST);
        assert_eq!(app.message, "Invalid email format");
    }

    #[test]
    fn integrity_fault_is_a_server_error_not_a_404() {
        let app: AppError = ListingError::DetailsMissing(HomeId::new(3)).into();
        assert_eq!(app.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn storage_failures_map_to_500() {
        let app: AppError = ListingError::Storage("connection refused".to_string()).into();
        assert_eq!(app.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
