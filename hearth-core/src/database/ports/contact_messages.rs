use async_trait::async_trait;
use hearth_model::ContactMessage;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A contact-form submission before it has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactMessagesWritePort: Send + Sync {
    /// Persists a validated submission with server-set timestamps and the
    /// initial `NEW` status, returning the stored record.
    async fn insert(&self, new: NewContactMessage) -> Result<ContactMessage>;
}
