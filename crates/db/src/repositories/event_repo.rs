//! Repository for the `events` table (the EventStore).
//!
//! The store is append-only: there is no update or delete. Events are
//! retained even when they later fail classification, so the table doubles
//! as the audit trail for everything the ingester accepted.

use ripple_core::types::EventId;
use sqlx::PgPool;

use crate::models::event::Event;

/// Column list for `events` queries.
const COLUMNS: &str = "event_id, kind, source_user_id, target_user_id, payload, created_at";

/// Append-only access to accepted events.
pub struct EventRepo;

impl EventRepo {
    /// Append one event, returning the stored row (with the
    /// database-assigned `created_at`).
    pub async fn insert(
        pool: &PgPool,
        event_id: EventId,
        kind: &str,
        source_user_id: &str,
        target_user_id: Option<&str>,
        payload: Option<&serde_json::Value>,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (event_id, kind, source_user_id, target_user_id, payload) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(event_id)
            .bind(kind)
            .bind(source_user_id)
            .bind(target_user_id)
            .bind(payload)
            .fetch_one(pool)
            .await
    }

    /// Fetch a single event by id.
    pub async fn get(pool: &PgPool, event_id: EventId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE event_id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }

    /// List recent events newest-first (audit reads).
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count all stored events.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(pool)
            .await
    }
}
