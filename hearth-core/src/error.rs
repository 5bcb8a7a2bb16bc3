use hearth_model::HomeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("home not found: {0}")]
    HomeNotFound(HomeId),

    /// A home resolved for the detail view has no extended-details row.
    /// This is a data fault on our side, not a bad client address.
    #[error("home {0} has no extended details record")]
    DetailsMissing(HomeId),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<sqlx::Error> for ListingError {
    fn from(err: sqlx::Error) -> Self {
        ListingError::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ListingError>;
