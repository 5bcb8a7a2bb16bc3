use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::ModelError;
use crate::ids::ContactMessageId;

/// Workflow status of a contact message, stored as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum MessageStatus {
    New,
    Reviewed,
    InProgress,
    AwaitingResponse,
    Resolved,
    Closed,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::New => "NEW",
            MessageStatus::Reviewed => "REVIEWED",
            MessageStatus::InProgress => "IN_PROGRESS",
            MessageStatus::AwaitingResponse => "AWAITING_RESPONSE",
            MessageStatus::Resolved => "RESOLVED",
            MessageStatus::Closed => "CLOSED",
        }
    }
}

impl FromStr for MessageStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(MessageStatus::New),
            "REVIEWED" => Ok(MessageStatus::Reviewed),
            "IN_PROGRESS" => Ok(MessageStatus::InProgress),
            "AWAITING_RESPONSE" => Ok(MessageStatus::AwaitingResponse),
            "RESOLVED" => Ok(MessageStatus::Resolved),
            "CLOSED" => Ok(MessageStatus::Closed),
            other => Err(ModelError::UnknownMessageStatus(other.to_string())),
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message submitted through the public contact form.
///
/// New submissions start in [`MessageStatus::New`]; the remaining states
/// belong to the administrative workflow. `updated_by` records the staff
/// member who last touched the message, if any.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
    pub status: MessageStatus,
    pub updated_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_storage_text() {
        for status in [
            MessageStatus::New,
            MessageStatus::Reviewed,
            MessageStatus::InProgress,
            MessageStatus::AwaitingResponse,
            MessageStatus::Resolved,
            MessageStatus::Closed,
        ] {
            assert_eq!(status.as_str().parse::<MessageStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_text_is_rejected() {
        assert!("SPAM".parse::<MessageStatus>().is_err());
    }
}
