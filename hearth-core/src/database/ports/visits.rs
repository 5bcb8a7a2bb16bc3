use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hearth_model::{HomeId, Visit, VisitType};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A visit request before it has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewVisitRequest {
    pub home_id: HomeId,
    pub visitor_name: String,
    pub visitor_email: String,
    pub visitor_phone_number: String,
    pub visitor_comment: String,
    pub requested_date: DateTime<Utc>,
    pub visit_type: VisitType,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitsWritePort: Send + Sync {
    /// Persists a validated request with server-set timestamps and the
    /// initial `REQUESTED` status, returning the stored record.
    async fn insert(&self, new: NewVisitRequest) -> Result<Visit>;
}
