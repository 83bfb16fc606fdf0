//! Repository for the `dead_letters` table.
//!
//! Dead letters are the typed failure channel for events dropped from the
//! notification path: classification rejections and store write failures
//! land here instead of vanishing into the log.

use ripple_core::types::{DbId, EventId};
use sqlx::PgPool;

use crate::models::dead_letter::DeadLetter;

/// Column list for `dead_letters` queries.
const COLUMNS: &str = "id, event_id, reason, detail, created_at";

/// Append/read access to dropped-event records.
pub struct DeadLetterRepo;

impl DeadLetterRepo {
    /// Record one dropped event, returning the generated id.
    pub async fn insert(
        pool: &PgPool,
        event_id: EventId,
        reason: &str,
        detail: Option<&str>,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO dead_letters (event_id, reason, detail) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(event_id)
        .bind(reason)
        .bind(detail)
        .fetch_one(pool)
        .await
    }

    /// List recent dead letters newest-first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<DeadLetter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dead_letters ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, DeadLetter>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List dead letters for a single event.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: EventId,
    ) -> Result<Vec<DeadLetter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dead_letters WHERE event_id = $1 ORDER BY id");
        sqlx::query_as::<_, DeadLetter>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }
}
