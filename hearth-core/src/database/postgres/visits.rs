use async_trait::async_trait;
use hearth_model::{HomeId, Visit, VisitId, VisitStatus, VisitType};
use sqlx::{PgPool, Row};

use crate::database::ports::visits::{NewVisitRequest, VisitsWritePort};
use crate::error::{ListingError, Result};

/// PostgreSQL-backed persistence for visit requests.
#[derive(Clone, Debug)]
pub struct PostgresVisitsRepository {
    pool: PgPool,
}

impl PostgresVisitsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitsWritePort for PostgresVisitsRepository {
    async fn insert(&self, new: NewVisitRequest) -> Result<Visit> {
        let row = sqlx::query(
            "INSERT INTO visits (home_id, visitor_name, visitor_email, \
                                 visitor_phone_number, visitor_comment, \
                                 requested_date, visit_type) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id, home_id, visitor_name, visitor_email, \
                       visitor_phone_number, visitor_comment, requested_date, \
                       scheduled_date, status, agent_id, visit_type, \
                       agent_note, created_at, updated_at",
        )
        .bind(new.home_id.as_i64())
        .bind(&new.visitor_name)
        .bind(&new.visitor_email)
        .bind(&new.visitor_phone_number)
        .bind(&new.visitor_comment)
        .bind(new.requested_date)
        .bind(new.visit_type.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ListingError::Storage(format!("visit request insert failed: {e}")))?;

        let status: String = row.try_get("status")?;
        let visit_type: String = row.try_get("visit_type")?;
        Ok(Visit {
            id: VisitId::new(row.try_get("id")?),
            home_id: HomeId::new(row.try_get("home_id")?),
            visitor_name: row.try_get("visitor_name")?,
            visitor_email: row.try_get("visitor_email")?,
            visitor_phone_number: row.try_get("visitor_phone_number")?,
            visitor_comment: row.try_get("visitor_comment")?,
            requested_date: row.try_get("requested_date")?,
            scheduled_date: row.try_get("scheduled_date")?,
            status: status
                .parse::<VisitStatus>()
                .map_err(|e| ListingError::Storage(e.to_string()))?,
            agent_id: row.try_get("agent_id")?,
            visit_type: visit_type
                .parse::<VisitType>()
                .map_err(|e| ListingError::Storage(e.to_string()))?,
            agent_note: row.try_get("agent_note")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
