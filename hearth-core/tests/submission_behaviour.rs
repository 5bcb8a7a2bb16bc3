use std::sync::Arc;

use anyhow::Result;
use chrono::{Duration, Utc};
use hearth_core::database::ports::contact_messages::NewContactMessage;
use hearth_core::database::ports::visits::NewVisitRequest;
use hearth_core::database::postgres::{PostgresContactMessagesRepository, PostgresVisitsRepository};
use hearth_core::{ContactMessageService, VisitsService};
use hearth_model::{HomeId, MessageStatus, VisitStatus, VisitType};
use sqlx::PgPool;

#[sqlx::test(migrator = "hearth_core::MIGRATOR")]
async fn contact_submission_starts_in_new_status(pool: PgPool) -> Result<()> {
    let service = ContactMessageService::new(Arc::new(PostgresContactMessagesRepository::new(
        pool.clone(),
    )));

    let saved = service
        .submit(NewContactMessage {
            name: "Avery Cole".to_string(),
            email: "avery@example.com".to_string(),
            phone_number: "555-201-7733".to_string(),
            message: "Is the Main St listing still available?".to_string(),
        })
        .await?;

    assert!(saved.id.as_i64() > 0);
    assert_eq!(saved.status, MessageStatus::New);
    assert!(saved.updated_by.is_none());
    assert!(saved.updated_at >= saved.created_at);

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
        .fetch_one(&pool)
        .await?;
    assert_eq!(stored, 1);
    Ok(())
}

#[sqlx::test(
    migrator = "hearth_core::MIGRATOR",
    fixtures(path = "./fixtures", scripts("homes"))
)]
async fn visit_submission_starts_in_requested_status(pool: PgPool) -> Result<()> {
    let service = VisitsService::new(Arc::new(PostgresVisitsRepository::new(pool)));

    let saved = service
        .submit(NewVisitRequest {
            home_id: HomeId::new(1),
            visitor_name: "Noor Haddad".to_string(),
            visitor_email: "noor@example.com".to_string(),
            visitor_phone_number: "555-314-0042".to_string(),
            visitor_comment: "Weekend afternoons work best.".to_string(),
            requested_date: Utc::now() + Duration::days(3),
            visit_type: VisitType::Virtual,
        })
        .await?;

    assert_eq!(saved.status, VisitStatus::Requested);
    assert_eq!(saved.home_id.as_i64(), 1);
    assert_eq!(saved.visit_type, VisitType::Virtual);
    assert!(saved.scheduled_date.is_none());
    assert!(saved.agent_id.is_none());
    Ok(())
}
