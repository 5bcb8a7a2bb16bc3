//! Visit-request submission: validate, then persist.

use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{error, info};

use hearth_model::Visit;

use crate::database::ports::visits::{NewVisitRequest, VisitsWritePort};
use crate::error::{ListingError, Result};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@(.+)$").expect("email regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("phone regex"));

const MAX_NAME_LEN: usize = 100;
const MAX_EMAIL_LEN: usize = 100;
const MAX_COMMENT_LEN: usize = 1000;

/// Field checks applied to a visit request before it is persisted.
pub fn validate_new_visit(new: &NewVisitRequest) -> Result<()> {
    if !EMAIL_RE.is_match(&new.visitor_email) {
        return Err(ListingError::Validation("Invalid email format".to_string()));
    }
    if !PHONE_RE.is_match(&new.visitor_phone_number) {
        return Err(ListingError::Validation(
            "Invalid phone number format".to_string(),
        ));
    }
    if new.requested_date <= Utc::now() {
        return Err(ListingError::Validation(
            "Requested date must be in the future".to_string(),
        ));
    }
    if new.visitor_name.is_empty() || new.visitor_comment.is_empty() {
        return Err(ListingError::Validation("All fields are required".to_string()));
    }
    if new.visitor_name.len() > MAX_NAME_LEN {
        return Err(ListingError::Validation(
            "Full name must be less than 100 characters".to_string(),
        ));
    }
    if new.visitor_email.len() > MAX_EMAIL_LEN {
        return Err(ListingError::Validation(
            "Email must be less than 100 characters".to_string(),
        ));
    }
    if new.visitor_comment.len() > MAX_COMMENT_LEN {
        return Err(ListingError::Validation(
            "Message must be less than 1000 characters".to_string(),
        ));
    }
    Ok(())
}

/// Accepts public visit-request submissions.
#[derive(Clone)]
pub struct VisitsService {
    visits: Arc<dyn VisitsWritePort>,
}

impl std::fmt::Debug for VisitsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisitsService").finish_non_exhaustive()
    }
}

impl VisitsService {
    pub fn new(visits: Arc<dyn VisitsWritePort>) -> Self {
        Self { visits }
    }

    /// Validates and persists one visit request.
    pub async fn submit(&self, new: NewVisitRequest) -> Result<Visit> {
        if let Err(e) = validate_new_visit(&new) {
            error!("visit request validation failed: {e}");
            return Err(e);
        }
        let saved = self.visits.insert(new).await?;
        info!("visit request saved successfully: {}", saved.id);
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use hearth_model::{HomeId, VisitId, VisitStatus, VisitType};

    use super::*;
    use crate::database::ports::visits::MockVisitsWritePort;

    fn valid_request() -> NewVisitRequest {
        NewVisitRequest {
            home_id: HomeId::new(1),
            visitor_name: "Noor Haddad".to_string(),
            visitor_email: "noor@example.com".to_string(),
            visitor_phone_number: "555-314-0042".to_string(),
            visitor_comment: "Weekend afternoons work best for me.".to_string(),
            requested_date: Utc::now() + Duration::days(3),
            visit_type: VisitType::InPerson,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(validate_new_visit(&valid_request()).is_ok());
    }

    #[test]
    fn past_requested_date_is_rejected() {
        let mut new = valid_request();
        new.requested_date = Utc::now() - Duration::hours(1);
        let err = validate_new_visit(&new).unwrap_err();
        assert!(
            matches!(err, ListingError::Validation(msg) if msg == "Requested date must be in the future")
        );
    }

    #[test]
    fn malformed_contact_fields_are_rejected() {
        let mut bad_email = valid_request();
        bad_email.visitor_email = "noor.example.com".to_string();
        assert!(validate_new_visit(&bad_email).is_err());

        let mut bad_phone = valid_request();
        bad_phone.visitor_phone_number = "555 314 0042".to_string();
        assert!(validate_new_visit(&bad_phone).is_err());

        let mut empty_comment = valid_request();
        empty_comment.visitor_comment = String::new();
        assert!(validate_new_visit(&empty_comment).is_err());
    }

    #[tokio::test]
    async fn submit_persists_a_valid_request() {
        let mut port = MockVisitsWritePort::new();
        port.expect_insert().once().returning(|new| {
            let now = Utc::now();
            Ok(Visit {
                id: VisitId::new(5),
                home_id: new.home_id,
                visitor_name: new.visitor_name,
                visitor_email: new.visitor_email,
                visitor_phone_number: new.visitor_phone_number,
                visitor_comment: new.visitor_comment,
                requested_date: new.requested_date,
                scheduled_date: None,
                status: VisitStatus::Requested,
                agent_id: None,
                visit_type: new.visit_type,
                agent_note: None,
                created_at: now,
                updated_at: now,
            })
        });

        let service = VisitsService::new(Arc::new(port));
        let saved = service.submit(valid_request()).await.unwrap();
        assert_eq!(saved.status, VisitStatus::Requested);
        assert_eq!(saved.home_id.as_i64(), 1);
    }

    #[tokio::test]
    async fn submit_never_touches_storage_on_validation_failure() {
        let mut port = MockVisitsWritePort::new();
        port.expect_insert().never();

        let service = VisitsService::new(Arc::new(port));
        let mut new = valid_request();
        new.requested_date = Utc::now() - Duration::days(1);
        assert!(service.submit(new).await.is_err());
    }
}
