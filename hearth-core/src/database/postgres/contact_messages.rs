use async_trait::async_trait;
use hearth_model::{ContactMessage, ContactMessageId, MessageStatus};
use sqlx::{PgPool, Row};

use crate::database::ports::contact_messages::{ContactMessagesWritePort, NewContactMessage};
use crate::error::{ListingError, Result};

/// PostgreSQL-backed persistence for contact-form submissions.
#[derive(Clone, Debug)]
pub struct PostgresContactMessagesRepository {
    pool: PgPool,
}

impl PostgresContactMessagesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactMessagesWritePort for PostgresContactMessagesRepository {
    async fn insert(&self, new: NewContactMessage) -> Result<ContactMessage> {
        let row = sqlx::query(
            "INSERT INTO contact_messages (name, email, phone_number, message) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, name, email, phone_number, message, status, \
                       updated_by, created_at, updated_at",
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone_number)
        .bind(&new.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ListingError::Storage(format!("contact message insert failed: {e}")))?;

        let status: String = row.try_get("status")?;
        Ok(ContactMessage {
            id: ContactMessageId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone_number: row.try_get("phone_number")?,
            message: row.try_get("message")?,
            status: status
                .parse::<MessageStatus>()
                .map_err(|e| ListingError::Storage(e.to_string()))?,
            updated_by: row.try_get("updated_by")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
