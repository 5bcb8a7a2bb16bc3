//! Contact-message submission: validate, then persist.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{error, info};

use hearth_model::ContactMessage;

use crate::database::ports::contact_messages::{ContactMessagesWritePort, NewContactMessage};
use crate::error::{ListingError, Result};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@(.+)$").expect("email regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("phone regex"));

const MAX_NAME_LEN: usize = 100;
const MAX_EMAIL_LEN: usize = 100;
const MAX_MESSAGE_LEN: usize = 1000;

/// Field checks applied to a submission before it is persisted.
pub fn validate_new_message(new: &NewContactMessage) -> Result<()> {
    if !EMAIL_RE.is_match(&new.email) {
        return Err(ListingError::Validation("Invalid email format".to_string()));
    }
    if !PHONE_RE.is_match(&new.phone_number) {
        return Err(ListingError::Validation(
            "Invalid phone number format".to_string(),
        ));
    }
    if new.name.is_empty() || new.message.is_empty() {
        return Err(ListingError::Validation("All fields are required".to_string()));
    }
    if new.name.len() > MAX_NAME_LEN {
        return Err(ListingError::Validation(
            "Full name must be less than 100 characters".to_string(),
        ));
    }
    if new.email.len() > MAX_EMAIL_LEN {
        return Err(ListingError::Validation(
            "Email must be less than 100 characters".to_string(),
        ));
    }
    if new.message.len() > MAX_MESSAGE_LEN {
        return Err(ListingError::Validation(
            "Message must be less than 1000 characters".to_string(),
        ));
    }
    Ok(())
}

/// Accepts public contact-form submissions.
#[derive(Clone)]
pub struct ContactMessageService {
    messages: Arc<dyn ContactMessagesWritePort>,
}

impl std::fmt::Debug for ContactMessageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactMessageService").finish_non_exhaustive()
    }
}

impl ContactMessageService {
    pub fn new(messages: Arc<dyn ContactMessagesWritePort>) -> Self {
        Self { messages }
    }

    /// Validates and persists one submission.
    pub async fn submit(&self, new: NewContactMessage) -> Result<ContactMessage> {
        if let Err(e) = validate_new_message(&new) {
            error!("contact message validation failed: {e}");
            return Err(e);
        }
        let saved = self.messages.insert(new).await?;
        info!("contact message saved successfully: {}", saved.id);
        Ok(saved)
    }
}
