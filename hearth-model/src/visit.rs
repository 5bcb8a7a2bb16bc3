use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::ModelError;
use crate::ids::{HomeId, VisitId};

/// Lifecycle state of a visit request, stored as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum VisitStatus {
    Requested,
    Scheduled,
    Completed,
    Cancelled,
}

impl VisitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitStatus::Requested => "REQUESTED",
            VisitStatus::Scheduled => "SCHEDULED",
            VisitStatus::Completed => "COMPLETED",
            VisitStatus::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for VisitStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REQUESTED" => Ok(VisitStatus::Requested),
            "SCHEDULED" => Ok(VisitStatus::Scheduled),
            "COMPLETED" => Ok(VisitStatus::Completed),
            "CANCELLED" => Ok(VisitStatus::Cancelled),
            other => Err(ModelError::UnknownVisitStatus(other.to_string())),
        }
    }
}

impl fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the visitor wants to tour the home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum VisitType {
    InPerson,
    Virtual,
}

impl VisitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitType::InPerson => "IN_PERSON",
            VisitType::Virtual => "VIRTUAL",
        }
    }
}

impl FromStr for VisitType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN_PERSON" => Ok(VisitType::InPerson),
            "VIRTUAL" => Ok(VisitType::Virtual),
            other => Err(ModelError::UnknownVisitType(other.to_string())),
        }
    }
}

impl fmt::Display for VisitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tour request submitted against a specific home.
///
/// `scheduled_date`, `agent_id` and `agent_note` are filled in by the
/// administrative workflow after triage; public submissions only carry
/// the visitor fields and the requested date.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visit {
    pub id: VisitId,
    pub home_id: HomeId,
    pub visitor_name: String,
    pub visitor_email: String,
    pub visitor_phone_number: String,
    pub visitor_comment: String,
    pub requested_date: DateTime<Utc>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub status: VisitStatus,
    pub agent_id: Option<String>,
    pub visit_type: VisitType,
    pub agent_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_storage_text() {
        for status in [
            VisitStatus::Requested,
            VisitStatus::Scheduled,
            VisitStatus::Completed,
            VisitStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<VisitStatus>().unwrap(), status);
        }
        for ty in [VisitType::InPerson, VisitType::Virtual] {
            assert_eq!(ty.as_str().parse::<VisitType>().unwrap(), ty);
        }
    }
}
